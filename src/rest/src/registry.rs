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

//! The vocabulary of known parameters.
//!
//! Path parameters are found by name. Query parameters are found by name and
//! [QueryType], the same name may have different allowable values in
//! different kinds of queries (e.g. `detail` in data and structure queries).
//!
//! Registries are built once, typically in a `lazy_static`, and never
//! modified afterwards.

use crate::error::{ConfigurationError, Error, Result};
use crate::parameter::{AgencyParam, Parameter, PathParameter, PositiveIntParam, QueryParameter};
use crate::resource::QueryType;
use std::collections::HashMap;
use std::sync::Arc;

type Entry = Arc<dyn Parameter>;

/// Known path and query parameters for a dialect.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    path: HashMap<String, Entry>,
    query: HashMap<(String, QueryType), Entry>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parameters shared by all the SDMX-REST versions.
    ///
    /// `resource_id` is not included, its default value depends on the
    /// version.
    pub fn common() -> Self {
        use QueryType::{Availability, Data, Schema};
        Self::new()
            .with_path(AgencyParam::new("agency_id"))
            // Section 4.4: data queries.
            .with_query(QueryParameter::new("start_period"), [Data])
            .with_query(QueryParameter::new("end_period"), [Data])
            .with_query(QueryParameter::new("updated_after"), [Data])
            .with_query(PositiveIntParam::new("first_n_observations"), [Data])
            .with_query(PositiveIntParam::new("last_n_observations"), [Data])
            .with_query(QueryParameter::new("dimension_at_observation"), [Data, Schema])
            .with_query(
                QueryParameter::new("include_history").with_values([true, false]),
                [Data],
            )
            // Section 4.6: availability queries.
            .with_query(
                QueryParameter::new("mode").with_values(["available", "exact"]),
                [Availability],
            )
            // Section 4.5: schema queries.
            .with_query(
                QueryParameter::new("explicit_measure").with_values([true, false]),
                [Schema],
            )
    }

    /// Adds (or replaces) a path parameter.
    pub fn with_path<P: Parameter + 'static>(mut self, p: P) -> Self {
        self.path.insert(p.name().to_string(), Arc::new(p));
        self
    }

    /// Adds (or replaces) a query parameter for each of `query_types`.
    pub fn with_query<P, I>(mut self, p: P, query_types: I) -> Self
    where
        P: Parameter + 'static,
        I: IntoIterator<Item = QueryType>,
    {
        let entry: Entry = Arc::new(p);
        for q in query_types {
            self.query
                .insert((entry.name().to_string(), q), entry.clone());
        }
        self
    }

    /// Adds (or replaces) the `resource_id` path parameter with a default.
    pub fn with_resource_id(self, default: &str) -> Self {
        self.with_path(PathParameter::new("resource_id").with_default(default))
    }

    /// Finds a path parameter.
    pub fn path(&self, name: &str) -> Result<&dyn Parameter> {
        self.path
            .get(name)
            .map(|p| p.as_ref())
            .ok_or_else(|| Error::configuration(ConfigurationError::UnknownPathParameter(name.into())))
    }

    /// Finds a query parameter for a given query type.
    pub fn query(&self, name: &str, query_type: QueryType) -> Result<&dyn Parameter> {
        self.query
            .get(&(name.to_string(), query_type))
            .map(|p| p.as_ref())
            .ok_or_else(|| {
                Error::configuration(ConfigurationError::UnknownQueryParameter(
                    name.into(),
                    query_type,
                ))
            })
    }
}
