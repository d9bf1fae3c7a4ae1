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

use crate::build_server::error::BuildServerError;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum CompileError {
    #[error("Missing attribute in webpack build output: {0}")]
    MissingAttribute(String),
    #[error("Invalid value in webpack build output: {0}")]
    InvalidValue(String),
    #[error("Webpack configuration not found: {0}")]
    ConfigNotFound(String),
    #[error("Webpack build failed: {0}")]
    BuildFailure(String),
}

impl From<BuildServerError> for CompileError {
    fn from(error: BuildServerError) -> Self {
        CompileError::BuildFailure(error.to_string())
    }
}
