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

//! URLs for the SDMX-REST 3.0 web service standard.
//!
//! Version 3.0 uses wildcards (`*`) for omitted path parameters and `~` for
//! the latest version. Structure queries have the form
//! `structure/{artefactType}/{agencyID}/{resourceID}/{version}[/{itemID}]`,
//! where the artefact type is `*` for the generic `structure` resource. Data
//! queries use `data/{context}/{agencyID}/{resourceID}/{version}/{key}`.

use crate::error::Result;
use crate::parameter::{AgencyParam, PathParameter, QueryParameter};
use crate::registry::Registry;
use crate::resource::{QueryType, Resource};
use crate::url::Url;

lazy_static::lazy_static! {
    static ref REGISTRY: Registry = registry();
}

fn registry() -> Registry {
    use QueryType::{Data, Structure};
    Registry::common()
        .with_path(AgencyParam::from(
            PathParameter::new("agency_id").with_default("*"),
        ))
        .with_resource_id("*")
        .with_path(PathParameter::new("version").with_default("~"))
        .with_path(PathParameter::new("key").with_default("*"))
        .with_path(PathParameter::new("item_id"))
        .with_path(
            PathParameter::new("context")
                .with_values([
                    "*",
                    "dataflow",
                    "datastructure",
                    "metadataflow",
                    "metadatastructure",
                    "provisionagreement",
                ])
                .with_default("*"),
        )
        .with_query(QueryParameter::new("attributes"), [Data])
        .with_query(QueryParameter::new("measures"), [Data])
        .with_query(
            QueryParameter::new("detail").with_values([
                "allcompletestubs",
                "allstubs",
                "full",
                "raw",
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
                    "ancestors",
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

/// The SDMX-REST 3.0 URL grammar.
#[derive(Clone, Copy, Debug, Default)]
pub struct Dialect;

impl crate::url::Dialect for Dialect {
    fn name(&self) -> &'static str {
        "SDMX-REST 3.0"
    }

    fn registry(&self) -> &Registry {
        &REGISTRY
    }

    fn handle_data(&self, url: &mut Url<'_>) -> Result<()> {
        url.set_literal("data");
        url.handle_path_params("context/agency_id/resource_id/version/key")?;
        url.handle_query_params(
            "updated_after first_n_observations last_n_observations \
             dimension_at_observation attributes measures include_history",
        )
    }

    fn handle_schema(&self, url: &mut Url<'_>) -> Result<()> {
        url.handle_schema_path()?;
        url.handle_query_params("dimension_at_observation explicit_measure")
    }

    fn handle_structure(&self, url: &mut Url<'_>) -> Result<()> {
        url.set_literal("structure");
        // The generic resource is a wildcard over all artefact types.
        let artefact_type = match url.resource_type() {
            Resource::Structure => "*",
            r => r.value(),
        };
        url.set_path("artefact_type", Some(artefact_type.into()));
        url.handle_path_params("agency_id/resource_id/version")?;
        if url.contains("item_id") {
            url.handle_path_params("item_id")?;
        }
        url.handle_query_params("detail references")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParameterError;
    use crate::source::Source;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn source() -> Source {
        Source::new("https://example.org/sdmx/v3")
    }

    #[test]
    fn data_defaults() -> anyhow::Result<()> {
        let source = source();
        let url = Url::new(&Dialect, &source, Resource::Data, [("resource_id", "EXR")])?;
        assert_eq!(url.join(), "https://example.org/sdmx/v3/data/*/*/EXR/~/*");
        Ok(())
    }

    #[test]
    fn data() -> anyhow::Result<()> {
        let source = source().with_id("ECB");
        let url = Url::builder(&Dialect, &source, Resource::Data)
            .with("context", "dataflow")
            .with("resource_id", "EXR")
            .with("version", "1.0.0")
            .with("key", "D.USD.EUR.SP00.A")
            .with("lastNObservations", 1)
            .with("attributes", "dsd")
            .with("measures", "all")
            .build()?;
        assert_eq!(
            url.join(),
            "https://example.org/sdmx/v3/data/dataflow/ECB/EXR/1.0.0/D.USD.EUR.SP00.A\
             ?lastNObservations=1&attributes=dsd&measures=all"
        );
        Ok(())
    }

    #[test]
    fn data_rejects_start_period() {
        let source = source();
        let err = Url::builder(&Dialect, &source, Resource::Data)
            .with("resource_id", "EXR")
            .with("start_period", "2020")
            .build()
            .unwrap_err();
        assert_eq!(
            err.as_inner::<ParameterError>(),
            Some(&ParameterError::Unconsumed(vec!["start_period".into()]))
        );
    }

    #[test]
    fn metadata() -> anyhow::Result<()> {
        let source = source();
        let url = Url::builder(&Dialect, &source, Resource::Metadata)
            .with("resource_id", "MF")
            .with("key", "A")
            .build()?;
        assert_eq!(url.join(), "https://example.org/sdmx/v3/metadata/MF/A");
        Ok(())
    }

    #[test]
    fn schema() -> anyhow::Result<()> {
        let source = source().with_id("ECB");
        let url = Url::builder(&Dialect, &source, Resource::Schema)
            .with("resource_id", "EXR")
            .with("context", "dataflow")
            .with("dimension_at_observation", "AllDimensions")
            .build()?;
        assert_eq!(
            url.join(),
            "https://example.org/sdmx/v3/schema/dataflow/ECB/EXR/~?dimensionAtObservation=AllDimensions"
        );
        Ok(())
    }

    #[test]
    fn schema_defaults() -> anyhow::Result<()> {
        let source = source();
        let url = Url::new(&Dialect, &source, Resource::Schema, [("resource_id", "EXR")])?;
        assert_eq!(url.join(), "https://example.org/sdmx/v3/schema/*/*/EXR/~");
        Ok(())
    }

    #[test_case(Resource::Dataflow, "structure/dataflow/*/*/~")]
    #[test_case(Resource::Codelist, "structure/codelist/*/*/~")]
    #[test_case(Resource::Structure, "structure/*/*/*/~")]
    fn structure_defaults(resource: Resource, want: &str) -> anyhow::Result<()> {
        let source = source();
        let url = Url::builder(&Dialect, &source, resource).build()?;
        assert_eq!(url.join(), format!("https://example.org/sdmx/v3/{want}"));
        Ok(())
    }

    #[test]
    fn structure_any_artefact_type() -> anyhow::Result<()> {
        let source = source();
        let url = Url::builder(&Dialect, &source, Resource::Structure)
            .with("agency_id", "ECB")
            .build()?;
        assert_eq!(
            url.path().collect::<Vec<_>>(),
            vec![
                ("structure", None),
                ("artefact_type", Some("*")),
                ("agency_id", Some("ECB")),
                ("resource_id", Some("*")),
                ("version", Some("~")),
            ]
        );
        assert_eq!(url.join(), "https://example.org/sdmx/v3/structure/*/ECB/*/~");
        Ok(())
    }

    #[test]
    fn structure() -> anyhow::Result<()> {
        let source = source().with_id("ECB");
        let url = Url::builder(&Dialect, &source, Resource::Codelist)
            .with("resource_id", "CL_FREQ")
            .with("version", "1.0+.0")
            .with("item_id", "A")
            .with("detail", "raw")
            .with("references", "ancestors")
            .build()?;
        assert_eq!(
            url.join(),
            "https://example.org/sdmx/v3/structure/codelist/ECB/CL_FREQ/1.0+.0/A\
             ?detail=raw&references=ancestors"
        );
        Ok(())
    }

    #[test]
    fn schema_disallowed_context() {
        let source = source();
        let err = Url::builder(&Dialect, &source, Resource::Schema)
            .with("context", "codelist")
            .build()
            .unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        assert!(
            matches!(
                err.as_inner::<ParameterError>(),
                Some(ParameterError::DisallowedValue { name, value, .. }) if name == "context" && value == "codelist"
            ),
            "{err:?}"
        );
    }
}
