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

//! The SDMX-ML 3.0 format.

use super::XmlFormat;

/// Classes whose tag in the structure namespace is the class name.
const SAME_NAME: &[&str] = &[
    "ExclusiveCodeSelection",
    "InclusiveCodeSelection",
    "CodelistExtension",
    "DataConstraint",
    "GeoFeatureSetCode",
    "GeographicCodelist",
    "GeoGridCode",
    "GeoGridCodelist",
    "Hierarchy",
    "Measure",
    "MetadataConstraint",
    "ValueItem",
    "ValueList",
];

lazy_static::lazy_static! {
    /// Information about the SDMX-ML 3.0 format.
    pub static ref FORMAT: XmlFormat = XmlFormat::new(
        "http://www.sdmx.org/resources/sdmxml/schemas/v3_0",
        "v30",
        [
            ("model.DataflowRelationship", "str:None"),
            ("model.ObservationRelationship", "str:Observation"),
            ("model.Dataflow", "str:Dataflow"),
            ("model.Metadataflow", "str:Metadataflow"),
        ]
        .into_iter()
        .map(|(c, t)| (c.to_string(), t.to_string()))
        .chain(
            SAME_NAME
                .iter()
                .map(|name| (format!("model.{name}"), format!("str:{name}"))),
        ),
    );
}
