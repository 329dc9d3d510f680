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

//! URLs for the SDMX-REST 2.1 web service standard.
//!
//! Structure queries use the form
//! `{resource}/{agencyID}/{resourceID}/{version}[/{itemID}]`, data queries
//! use `data/{flowRef}[/{key}[/{providerRef}]]`.

use crate::error::Result;
use crate::parameter::{PathParameter, QueryParameter};
use crate::registry::Registry;
use crate::resource::{QueryType, Resource};
use crate::url::Url;

lazy_static::lazy_static! {
    static ref REGISTRY: Registry = registry();
}

fn registry() -> Registry {
    use QueryType::{Data, Structure};
    Registry::common()
        .with_resource_id("all")
        .with_path(PathParameter::new("version").with_default("latest"))
        .with_path(PathParameter::new("item_id"))
        .with_path(PathParameter::new("context").with_values([
            "dataflow",
            "datastructure",
            "metadataflow",
            "metadatastructure",
            "provisionagreement",
        ]))
        .with_query(
            QueryParameter::new("detail").with_values([
                "dataonly",
                "full",
                "nodata",
                "serieskeysonly",
            ]),
            [Data],
        )
        .with_query(
            QueryParameter::new("detail").with_values([
                "allcompletestubs",
                "allstubs",
                "full",
                "referencecompletestubs",
                "referencepartial",
                "referencestubs",
            ]),
            [Structure],
        )
        .with_query(
            QueryParameter::new("references").with_values(
                [
                    "all",
                    "children",
                    "descendants",
                    "none",
                    "parents",
                    "parentsandsiblings",
                ]
                .into_iter()
                .chain(Resource::ALL.iter().map(Resource::value)),
            ),
            [Structure],
        )
}

/// The SDMX-REST 2.1 URL grammar.
#[derive(Clone, Copy, Debug, Default)]
pub struct Dialect;

impl crate::url::Dialect for Dialect {
    fn name(&self) -> &'static str {
        "SDMX-REST 2.1"
    }

    fn registry(&self) -> &Registry {
        &REGISTRY
    }

    fn handle_data(&self, url: &mut Url<'_>) -> Result<()> {
        url.handle_flow_and_key()?;
        if let Some(provider) = url.take("provider") {
            // The provider is the third part of the path, the key cannot be
            // omitted.
            if !url.path().any(|(k, _)| k == "key") {
                url.set_path("key", Some("all".into()));
            }
            url.set_path("provider_ref", Some(provider));
        }
        url.handle_query_params(
            "start_period end_period updated_after first_n_observations \
             last_n_observations dimension_at_observation detail include_history",
        )
    }

    fn handle_schema(&self, url: &mut Url<'_>) -> Result<()> {
        url.handle_schema_path()?;
        url.handle_query_params("dimension_at_observation explicit_measure")
    }

    fn handle_structure(&self, url: &mut Url<'_>) -> Result<()> {
        url.set_literal(url.resource_type().value());
        url.handle_path_params("agency_id/resource_id/version")?;
        if url.contains("item_id") {
            url.handle_path_params("item_id")?;
        }
        url.handle_query_params("detail references")
    }
}
