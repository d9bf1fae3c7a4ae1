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

use crate::compiler::error::CompileError;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum TemplateError {
    /// A narrow compiler failure re-raised under a kind that host template
    /// engines do not silently discard. Carries the original error's payload.
    #[error("Failed to bundle webpack assets: {0}")]
    BundlingError(String),
    /// Any other compiler failure, passed through unchanged in kind.
    #[error(transparent)]
    Compile(#[from] CompileError),
}
