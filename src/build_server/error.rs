/*
   Copyright 2021 JFrog Ltd

   Licensed under the Apache License, Version 2.0 (the "License");
   you may not use this file except in compliance with the License.
   You may obtain a copy of the License at

       http://www.apache.org/licenses/LICENSE-2.0

   Unless required by applicable law or agreed to in writing, software
   distributed under the License is distributed on an "AS IS" BASIS,
   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
   See the License for the specific language governing permissions and
   limitations under the License.
*/

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum BuildServerError {
    #[error("Failed to connect to build server: {0}")]
    ConnectionFailure(String),
    #[error("Build server returned an unexpected response: {0}")]
    UnexpectedResponse(String),
    #[error("Invalid build server response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for BuildServerError {
    fn from(error: reqwest::Error) -> Self {
        BuildServerError::ConnectionFailure(error.to_string())
    }
}
