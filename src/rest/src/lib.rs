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

//! SDMX-REST query construction.
//!
//! This crate builds URLs for the [SDMX-REST] web service standard. The
//! application describes the query as a [Resource][resource::Resource] and a
//! set of named parameters, a [Dialect][url::Dialect] (one of [v21] or [v30])
//! turns those into the path and query string of a URL.
//!
//! The crate does not send any requests, it only computes URLs. Parameters
//! are validated before the URL is returned: values outside the allowed set,
//! non-positive observation counts, and parameters the dialect does not know
//! about are all reported as errors.
//!
//! [SDMX-REST]: https://github.com/sdmx-twg/sdmx-rest

/// An alias of [std::result::Result] where the error is always [crate::error::Error].
pub type Result<T> = std::result::Result<T, crate::error::Error>;

pub mod error;
pub mod parameter;
pub mod registry;
pub mod resource;
pub mod response_code;
pub mod source;
pub mod url;
pub mod v21;
pub mod v30;
pub mod value;
