// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Response codes defined by the SDMX-REST standard.

/// Returns the SDMX-REST description of an HTTP status code.
///
/// # Example
/// ```
/// # use sdmx_rest::response_code;
/// assert_eq!(response_code::describe(403), Some("Semantic error"));
/// assert_eq!(response_code::describe(418), None);
/// ```
pub fn describe(code: u16) -> Option<&'static str> {
    let description = match code {
        200 => "OK",
        304 => "No changes",
        400 => "Bad syntax",
        401 => "Unauthorized",
        // Some services return this code as "Forbidden".
        403 => "Semantic error",
        404 => "Not found",
        406 => "Not acceptable",
        413 => "Request entity too large",
        414 => "URI too long",
        500 => "Internal server error",
        501 => "Not implemented",
        503 => "Unavailable",
        _ => return None,
    };
    Some(description)
}
