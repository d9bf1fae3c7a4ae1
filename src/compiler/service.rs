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

use super::error::CompileError;
use crate::build_server::client::BuildServerClient;
use crate::build_server::model::BuildOptions;
use crate::bundle::Bundle;
use async_trait::async_trait;
use log::debug;
use serde_json::Value;
use std::path::Path;

/// The compiler seam between the template layer and the build
/// infrastructure. Implementations turn a webpack configuration path into a
/// renderable bundle.
#[async_trait]
pub trait WebpackCompiler {
    async fn compile(&self, path_to_config: &str) -> Result<Bundle, CompileError>;
}

/// Compiles bundles by delegating to an external webpack build server.
#[derive(Clone)]
pub struct BuildServerCompiler {
    build_server_client: BuildServerClient,
}

impl BuildServerCompiler {
    pub fn new(build_server_client: BuildServerClient) -> Self {
        BuildServerCompiler {
            build_server_client,
        }
    }
}

#[async_trait]
impl WebpackCompiler for BuildServerCompiler {
    async fn compile(&self, path_to_config: &str) -> Result<Bundle, CompileError> {
        // The build server resolves the config relative to its own working
        // directory, so the path is made absolute before it is sent.
        let config_path = Path::new(path_to_config)
            .canonicalize()
            .map_err(|_| CompileError::ConfigNotFound(path_to_config.to_owned()))?;

        debug!("Requesting build for webpack config {:?}", config_path);

        let mut options = BuildOptions::new();
        options.insert(
            "config".to_owned(),
            Value::String(config_path.to_string_lossy().into_owned()),
        );

        let output = self.build_server_client.build(options).await?;

        Ok(Bundle::new(output))
    }
}

#[cfg(test)]
#[cfg(not(tarpaulin_include))]
mod tests {
    use super::*;
    use httptest::{matchers, responders, Expectation, Server};
    use std::fs::File;
    use std::io::Write;

    fn create_webpack_config(directory: &Path) -> String {
        let config_path = directory.join("webpack.config.js");
        let mut config_file = File::create(&config_path).unwrap();
        writeln!(config_file, "module.exports = {{}};").unwrap();
        config_path
            .canonicalize()
            .unwrap()
            .to_string_lossy()
            .into_owned()
    }

    #[tokio::test]
    async fn compile_returns_bundle() {
        let tmp_dir = tempfile::tempdir().unwrap();
        let config_path = create_webpack_config(tmp_dir.path());

        let build_output = serde_json::json!({
            "publicPath": "/static/",
            "assets": ["bundle-2a4b8f.js"]
        });

        let expected_options = serde_json::json!({ "config": config_path });

        let http_server = Server::run();
        http_server.expect(
            Expectation::matching(matchers::all_of!(
                matchers::request::method_path("POST", "/build"),
                matchers::request::body(matchers::json_decoded(matchers::eq(expected_options)))
            ))
            .respond_with(responders::json_encoded(&build_output)),
        );

        let compiler =
            BuildServerCompiler::new(BuildServerClient::new(&http_server.url("/").to_string()));

        let bundle = compiler.compile(&config_path).await.unwrap();
        assert_eq!(*bundle.output(), build_output);
    }

    #[tokio::test]
    async fn compile_config_not_found() {
        let compiler = BuildServerCompiler::new(BuildServerClient::new(
            "http://build-server.local:9009",
        ));

        let error = compiler
            .compile("/no/such/webpack.config.js")
            .await
            .unwrap_err();

        assert_eq!(
            error,
            CompileError::ConfigNotFound("/no/such/webpack.config.js".to_owned())
        );
    }

    #[tokio::test]
    #[should_panic(expected = "BuildFailure")]
    async fn compile_build_server_failure() {
        let tmp_dir = tempfile::tempdir().unwrap();
        let config_path = create_webpack_config(tmp_dir.path());

        let http_server = Server::run();
        http_server.expect(
            Expectation::matching(matchers::request::method_path("POST", "/build"))
                .respond_with(responders::status_code(500).body("build pool exhausted")),
        );

        let compiler =
            BuildServerCompiler::new(BuildServerClient::new(&http_server.url("/").to_string()));

        compiler.compile(&config_path).await.unwrap();
    }
}
