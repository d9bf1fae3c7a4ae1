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

use serde_json::{Map, Value};

/// Options forwarded verbatim to the build server as the JSON request body.
/// The build server interprets them; this crate does not.
pub type BuildOptions = Map<String, Value>;

/// The JSON value the build server returns for a successful build. No schema
/// validation is performed here; consumers pick out the fields they need.
pub type BuildResult = Value;
