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

use crate::build_server::model::BuildResult;
use crate::compiler::error::CompileError;
use serde_json::Value;

/// A compiled set of assets produced by the build server, wrapped in a
/// renderable descriptor. The underlying build output is kept as raw JSON.
#[derive(Clone, Debug, PartialEq)]
pub struct Bundle {
    output: BuildResult,
}

impl Bundle {
    pub fn new(output: BuildResult) -> Self {
        Bundle { output }
    }

    /// The raw build output as returned by the build server.
    pub fn output(&self) -> &BuildResult {
        &self.output
    }

    /// Renders the bundle as HTML markup, one tag per asset in build output
    /// order: `<script>` for scripts, `<link>` for stylesheets. Assets with
    /// other extensions are skipped.
    pub fn render(&self) -> Result<String, CompileError> {
        let public_path = match self.output.get("publicPath") {
            Some(Value::String(public_path)) => public_path,
            Some(_) => return Err(CompileError::InvalidValue("publicPath".to_owned())),
            None => return Err(CompileError::MissingAttribute("publicPath".to_owned())),
        };

        let assets = match self.output.get("assets") {
            Some(Value::Array(assets)) => assets,
            Some(_) => return Err(CompileError::InvalidValue("assets".to_owned())),
            None => return Err(CompileError::MissingAttribute("assets".to_owned())),
        };

        let mut tags = Vec::new();
        for asset in assets {
            let asset_name = match asset {
                Value::String(asset_name) => asset_name,
                _ => return Err(CompileError::InvalidValue("assets".to_owned())),
            };

            let asset_url = format!("{}{}", public_path, asset_name);
            if asset_name.ends_with(".js") {
                tags.push(format!("<script src=\"{}\"></script>", asset_url));
            } else if asset_name.ends_with(".css") {
                tags.push(format!("<link rel=\"stylesheet\" href=\"{}\">", asset_url));
            }
        }

        Ok(tags.join("\n"))
    }
}

#[cfg(test)]
#[cfg(not(tarpaulin_include))]
mod tests {
    use super::*;

    #[test]
    fn render_scripts_and_stylesheets() {
        let bundle = Bundle::new(serde_json::json!({
            "publicPath": "/static/bundles/",
            "assets": ["bundle-2a4b8f.js", "styles-91c0de.css", "logo.png"]
        }));

        assert_eq!(
            bundle.render().unwrap(),
            "<script src=\"/static/bundles/bundle-2a4b8f.js\"></script>\n\
             <link rel=\"stylesheet\" href=\"/static/bundles/styles-91c0de.css\">"
        );
    }

    #[test]
    fn render_empty_asset_list() {
        let bundle = Bundle::new(serde_json::json!({
            "publicPath": "/static/",
            "assets": []
        }));

        assert_eq!(bundle.render().unwrap(), "");
    }

    #[test]
    fn render_missing_public_path() {
        let bundle = Bundle::new(serde_json::json!({
            "assets": ["bundle-2a4b8f.js"]
        }));

        assert_eq!(
            bundle.render().unwrap_err(),
            CompileError::MissingAttribute("publicPath".to_owned())
        );
    }

    #[test]
    fn render_missing_assets() {
        let bundle = Bundle::new(serde_json::json!({
            "publicPath": "/static/"
        }));

        assert_eq!(
            bundle.render().unwrap_err(),
            CompileError::MissingAttribute("assets".to_owned())
        );
    }

    #[test]
    fn render_invalid_public_path() {
        let bundle = Bundle::new(serde_json::json!({
            "publicPath": 42,
            "assets": ["bundle-2a4b8f.js"]
        }));

        assert_eq!(
            bundle.render().unwrap_err(),
            CompileError::InvalidValue("publicPath".to_owned())
        );
    }

    #[test]
    fn render_invalid_asset_entry() {
        let bundle = Bundle::new(serde_json::json!({
            "publicPath": "/static/",
            "assets": ["bundle-2a4b8f.js", { "name": "styles.css" }]
        }));

        assert_eq!(
            bundle.render().unwrap_err(),
            CompileError::InvalidValue("assets".to_owned())
        );
    }
}
