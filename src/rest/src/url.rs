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

//! Build URLs for SDMX-REST web service queries.
//!
//! A [Url] is built from a [Source], a [Resource], and the request parameters.
//! The resource determines the [QueryType], and the [Dialect] (the version of
//! the SDMX-REST standard) determines how each query type consumes the
//! parameters to create the path and query components of the URL.
//!
//! Every parameter must be consumed. Unknown or misspelled parameters are
//! reported as errors rather than silently dropped.
//!
//! # Example
//! ```
//! # use sdmx_rest::{resource::Resource, source::Source, url::Url, v21};
//! let source = Source::new("https://example.org/sdmx").with_id("ECB");
//! let url = Url::builder(&v21::Dialect, &source, Resource::Data)
//!     .with("resource_id", "EXR")
//!     .with("key", "M.USD.EUR.SP00.A")
//!     .with("start_period", "2020")
//!     .build()?;
//! assert_eq!(
//!     url.join(),
//!     "https://example.org/sdmx/data/EXR/M.USD.EUR.SP00.A?startPeriod=2020"
//! );
//! # Ok::<(), sdmx_rest::error::Error>(())
//! ```

use crate::error::{ConfigurationError, Error, ParameterError, Result};
use crate::registry::Registry;
use crate::resource::{QueryType, Resource};
use crate::source::Source;
use crate::value::{ParamValue, Parameters};
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Characters encoded in path segments.
///
/// The characters used by SDMX keys and versions (`.`, `+`, `*`, `~`, `,`)
/// are not included.
const PATH_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Characters encoded in query values.
const QUERY_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// The URL grammar of a version of the SDMX-REST standard.
///
/// The URL builder classifies each request and calls the handler for its
/// [QueryType]. Handlers consume the request parameters and populate the path
/// and query of the [Url], typically using [Url::handle_path_params] and
/// [Url::handle_query_params] with the parameters in the [registry].
///
/// Only [handle_structure] has no default: each version defines its own
/// path grammar for structure queries.
///
/// [registry]: Dialect::registry
/// [handle_structure]: Dialect::handle_structure
pub trait Dialect: std::fmt::Debug + Send + Sync {
    /// A short name for the dialect, used in error messages.
    fn name(&self) -> &'static str;

    /// The parameters known to this dialect.
    fn registry(&self) -> &Registry;

    fn handle_availability(&self, _url: &mut Url<'_>) -> Result<()> {
        Err(self.unsupported(QueryType::Availability))
    }

    fn handle_data(&self, url: &mut Url<'_>) -> Result<()> {
        url.handle_flow_and_key()
    }

    fn handle_metadata(&self, url: &mut Url<'_>) -> Result<()> {
        url.handle_flow_and_key()
    }

    fn handle_schema(&self, url: &mut Url<'_>) -> Result<()> {
        url.handle_schema_path()
    }

    fn handle_structure(&self, url: &mut Url<'_>) -> Result<()>;

    fn handle_registration(&self, _url: &mut Url<'_>) -> Result<()> {
        Err(self.unsupported(QueryType::Registration))
    }

    /// The error returned by handlers for query types the dialect does not
    /// support.
    fn unsupported(&self, query_type: QueryType) -> Error {
        Error::configuration(ConfigurationError::UnsupportedQueryType {
            dialect: self.name(),
            query_type,
        })
    }
}

/// Collects the request parameters for a [Url].
///
/// Parameters may be given one at a time ([with][UrlBuilder::with]) or as a
/// mapping ([with_params][UrlBuilder::with_params]). Giving the same key
/// through both is an error.
#[derive(Debug)]
pub struct UrlBuilder<'a> {
    dialect: &'a dyn Dialect,
    source: &'a Source,
    resource_type: Resource,
    kwargs: Parameters,
    params: Parameters,
}

impl<'a> UrlBuilder<'a> {
    /// Sets a single parameter.
    pub fn with<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<ParamValue>,
    {
        self.kwargs.insert(key, value);
        self
    }

    /// Sets parameters from a mapping.
    pub fn with_params<I, K, V>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ParamValue>,
    {
        self.params.extend(params);
        self
    }

    /// Builds the URL, consuming all the parameters.
    pub fn build(self) -> Result<Url<'a>> {
        let duplicates: Vec<String> = self
            .kwargs
            .keys()
            .filter(|k| self.params.contains_key(k))
            .map(str::to_string)
            .collect();
        if !duplicates.is_empty() {
            return Err(Error::binding(ParameterError::Duplicate(duplicates)));
        }
        let mut params = self.kwargs;
        params.extend(self.params);

        let base = base_url(self.source.url())?;
        let query_type = QueryType::from(self.resource_type);
        tracing::debug!(
            "building {} {query_type} query for {}",
            self.dialect.name(),
            self.resource_type
        );

        let mut url = Url {
            dialect: self.dialect,
            source: self.source,
            base,
            resource_type: self.resource_type,
            query_type,
            params,
            path: Vec::new(),
            query: Vec::new(),
        };
        let dialect = url.dialect;
        match query_type {
            QueryType::Availability => dialect.handle_availability(&mut url)?,
            QueryType::Data => dialect.handle_data(&mut url)?,
            QueryType::Metadata => dialect.handle_metadata(&mut url)?,
            QueryType::Schema => dialect.handle_schema(&mut url)?,
            QueryType::Structure => dialect.handle_structure(&mut url)?,
            QueryType::Registration => dialect.handle_registration(&mut url)?,
        }

        if !url.params.is_empty() {
            let names = url.params.keys().map(str::to_string).collect();
            return Err(Error::binding(ParameterError::Unconsumed(names)));
        }
        Ok(url)
    }
}

/// A URL for a SDMX-REST query.
///
/// Created by [UrlBuilder::build]. Once built, [join][Url::join] returns the
/// complete URL.
#[derive(Debug)]
pub struct Url<'a> {
    dialect: &'a dyn Dialect,
    source: &'a Source,
    base: String,
    resource_type: Resource,
    query_type: QueryType,
    params: Parameters,
    path: Vec<(String, Option<String>)>,
    query: Vec<(String, String)>,
}

impl<'a> Url<'a> {
    /// Starts building a URL.
    pub fn builder(
        dialect: &'a dyn Dialect,
        source: &'a Source,
        resource_type: Resource,
    ) -> UrlBuilder<'a> {
        UrlBuilder {
            dialect,
            source,
            resource_type,
            kwargs: Parameters::new(),
            params: Parameters::new(),
        }
    }

    /// Builds a URL from a mapping of parameters.
    pub fn new<I, K, V>(
        dialect: &'a dyn Dialect,
        source: &'a Source,
        resource_type: Resource,
        params: I,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ParamValue>,
    {
        Self::builder(dialect, source, resource_type)
            .with_params(params)
            .build()
    }

    pub fn source(&self) -> &Source {
        self.source
    }

    pub fn resource_type(&self) -> Resource {
        self.resource_type
    }

    pub fn query_type(&self) -> QueryType {
        self.query_type
    }

    /// The pieces of the path, in order.
    ///
    /// A `None` value means the name itself is the path segment.
    pub fn path(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.path.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    /// The pieces of the query string, in order.
    pub fn query(&self) -> impl Iterator<Item = (&str, &str)> {
        self.query.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns true if the request contains an unconsumed parameter `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.params.contains_key(name)
    }

    /// Consumes a parameter, if present.
    pub fn take(&mut self, name: &str) -> Option<ParamValue> {
        self.params.remove(name)
    }

    /// Consumes a parameter that must be present.
    pub fn take_required(&mut self, name: &str) -> Result<ParamValue> {
        self.take(name)
            .ok_or_else(|| Error::binding(ParameterError::MissingRequired(name.to_string())))
    }

    /// Sets a piece of the path.
    ///
    /// Existing pieces keep their position and get the new value, new pieces
    /// are appended.
    pub fn set_path(&mut self, key: &str, value: Option<ParamValue>) {
        let value = value.map(|v| v.to_string());
        match self.path.iter_mut().find(|(k, _)| k == key) {
            Some((_, v)) => *v = value,
            None => self.path.push((key.to_string(), value)),
        }
    }

    /// Appends a literal segment to the path.
    pub fn set_literal(&mut self, segment: &str) {
        self.set_path(segment, None);
    }

    /// Extends the path with parameters from `expr`, a "/"-delimited string.
    pub fn handle_path_params(&mut self, expr: &str) -> Result<()> {
        let dialect = self.dialect;
        let registry = dialect.registry();
        for name in expr.split('/').filter(|n| !n.is_empty()) {
            let p = registry.path(name)?;
            if let Some(part) = p.handle(&mut self.params, self.source)? {
                self.set_path(&part.key, part.value);
            }
        }
        Ok(())
    }

    /// Extends the query with parameters from `expr`, a " "-delimited string.
    ///
    /// The parameters are found using the query type of the URL.
    pub fn handle_query_params(&mut self, expr: &str) -> Result<()> {
        let dialect = self.dialect;
        let registry = dialect.registry();
        for name in expr.split_whitespace() {
            let p = registry.query(name, self.query_type)?;
            if let Some(part) = p.handle(&mut self.params, self.source)? {
                let value = part.value.map(|v| v.to_string()).unwrap_or_default();
                match self.query.iter_mut().find(|(k, _)| *k == part.key) {
                    Some((_, v)) => *v = value,
                    None => self.query.push((part.key, value)),
                }
            }
        }
        Ok(())
    }

    /// The path shared by data and metadata queries in all versions.
    ///
    /// The path starts with the resource, followed by the (required) flow
    /// from `resource_id`, and the `key`, if present. The key is used
    /// verbatim.
    pub fn handle_flow_and_key(&mut self) -> Result<()> {
        self.set_literal(self.resource_type.value());
        let flow = self.take_required("resource_id")?;
        self.set_path("flow_ref", Some(flow));
        if let Some(key) = self.take("key") {
            self.set_path("key", Some(key));
        }
        Ok(())
    }

    /// The path shared by schema queries in all versions.
    pub fn handle_schema_path(&mut self) -> Result<()> {
        self.set_literal(self.resource_type.value());
        self.handle_path_params("context/agency_id/resource_id/version")
    }

    /// Joins the pieces, returning the complete URL.
    ///
    /// The scheme, authority, and path of the source URL are kept, its query
    /// and fragment are discarded.
    pub fn join(&self) -> String {
        let encode = self.source.percent_encoding();
        let mut result = self.base.clone();
        for (name, value) in &self.path {
            result.push('/');
            match value.as_deref() {
                Some(v) if !v.is_empty() && encode => {
                    result.push_str(&utf8_percent_encode(v, PATH_ENCODE_SET).to_string())
                }
                Some(v) if !v.is_empty() => result.push_str(v),
                _ => result.push_str(name),
            }
        }
        let query: Vec<String> = self
            .query
            .iter()
            .map(|(k, v)| {
                if encode {
                    format!("{k}={}", utf8_percent_encode(v, QUERY_ENCODE_SET))
                } else {
                    format!("{k}={v}")
                }
            })
            .collect();
        if !query.is_empty() {
            result.push('?');
            result.push_str(&query.join("&"));
        }
        tracing::debug!("joined URL {result}");
        result
    }
}

/// Returns the scheme, authority, and path of `url`, without a trailing `/`.
fn base_url(url: &str) -> Result<String> {
    let parsed = url::Url::parse(url).map_err(|source| {
        Error::configuration(ConfigurationError::InvalidBaseUrl {
            url: url.to_string(),
            source,
        })
    })?;
    Ok(parsed[..url::Position::AfterPath]
        .trim_end_matches('/')
        .to_string())
}
