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

use super::error::TemplateError;
use crate::compiler::error::CompileError;
use crate::compiler::service::WebpackCompiler;
use log::debug;

/// A template tag that outputs a webpack bundle.
///
/// Host template engines silently discard some error kinds raised during
/// template evaluation. The two narrow compiler failures are re-raised as
/// `TemplateError::BundlingError` so they stay visible to the engine; every
/// other failure passes through untranslated.
pub struct WebpackTag<C: WebpackCompiler> {
    compiler: C,
}

impl<C: WebpackCompiler> WebpackTag<C> {
    pub fn new(compiler: C) -> Self {
        WebpackTag { compiler }
    }

    pub async fn render(&self, path_to_config: &str) -> Result<String, TemplateError> {
        debug!("Rendering webpack bundle for config {}", path_to_config);

        let rendered = self
            .compiler
            .compile(path_to_config)
            .await
            .and_then(|bundle| bundle.render());

        match rendered {
            Ok(markup) => Ok(markup),
            Err(CompileError::MissingAttribute(message)) => {
                Err(TemplateError::BundlingError(message))
            }
            Err(CompileError::InvalidValue(message)) => Err(TemplateError::BundlingError(message)),
            Err(error) => Err(TemplateError::Compile(error)),
        }
    }
}
