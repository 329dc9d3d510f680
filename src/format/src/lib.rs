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

//! Information about SDMX file formats.
//!
//! Readers and writers of SDMX-ML messages need to map the classes of the
//! SDMX information model to XML element tags, and back. This crate contains
//! those mappings, one static table per version of the format.
//!
//! # Example
//! ```
//! use sdmx_format::xml::v30::FORMAT;
//! assert_eq!(FORMAT.tag_for_class("model.Dataflow")?, "str:Dataflow");
//! assert_eq!(FORMAT.class_for_tag("str:Dataflow")?, "model.Dataflow");
//! # Ok::<(), sdmx_format::xml::NotFound>(())
//! ```

pub mod xml;
