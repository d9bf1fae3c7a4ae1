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

use super::error::BuildServerError;
use super::model::{BuildOptions, BuildResult};
use crate::util::env_util;
use hyper::StatusCode;

/// Marker the build server includes in its health check response body. A 200
/// response without it means some other process answered on the port.
const HEALTH_CHECK_MARKER: &str = "webpack-build";

#[derive(Clone)]
pub struct BuildServerClient {
    http_client: reqwest::Client,
    build_server_url: String,
}

fn remove_last_character(mut string: String) -> String {
    string.pop();
    string
}

impl BuildServerClient {
    pub fn new(build_server_url: &str) -> Self {
        BuildServerClient {
            http_client: reqwest::Client::new(),
            build_server_url: match build_server_url.ends_with('/') {
                true => remove_last_character(build_server_url.to_owned()),
                false => build_server_url.to_owned(),
            },
        }
    }

    /// Creates a client from the `BUILD_SERVER_URL` environment variable.
    pub fn from_env() -> Self {
        Self::new(&env_util::build_server_url())
    }

    pub fn url(&self) -> &str {
        &self.build_server_url
    }

    /// Probes the build server. Connection failures are absorbed into `false`
    /// rather than surfaced, so this can never fail.
    pub async fn is_running(&self) -> bool {
        let health_check_response = match self
            .http_client
            .get(&self.build_server_url)
            .send()
            .await
        {
            Ok(response) => response,
            Err(_) => return false,
        };

        if health_check_response.status() != StatusCode::OK {
            return false;
        }

        match health_check_response.text().await {
            Ok(body) => body.contains(HEALTH_CHECK_MARKER),
            Err(_) => false,
        }
    }

    /// Requests a build from the build server. The options are passed through
    /// unmodified as the JSON request body.
    pub async fn build(&self, options: BuildOptions) -> Result<BuildResult, BuildServerError> {
        let build_endpoint = format!("{}/build", self.build_server_url);

        let build_response = self
            .http_client
            .post(build_endpoint)
            .json(&options)
            .send()
            .await?;

        if build_response.status() != StatusCode::OK {
            let body = build_response
                .text()
                .await
                .map_err(|e| BuildServerError::InvalidResponse(e.to_string()))?;
            return Err(BuildServerError::UnexpectedResponse(body));
        }

        build_response
            .json::<BuildResult>()
            .await
            .map_err(|e| BuildServerError::InvalidResponse(e.to_string()))
    }
}
