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

//! Errors returned while building SDMX-REST URLs.
//!
//! Building a URL is a pure computation, there are no transient failures and
//! nothing to retry. The library distinguishes problems in the application
//! inputs (see [Error::is_binding]), entities or names that cannot be mapped to
//! a [Resource][crate::resource::Resource] (see [Error::is_classification]), and
//! bugs in the library or in a custom [Dialect][crate::url::Dialect] (see
//! [Error::is_configuration]).
//!
//! # Example
//! ```
//! use sdmx_rest::error::{Error, ParameterError};
//! fn report(e: Error) {
//!     match e.as_inner::<ParameterError>() {
//!         Some(ParameterError::Unconsumed(names)) => println!("typo in {names:?}?"),
//!         Some(p) => println!("bad parameter: {p}"),
//!         None => println!("some other error {e}"),
//!     }
//! }
//! ```

use std::error::Error as StdError;

type BoxError = Box<dyn StdError + Send + Sync>;

/// A `Result` alias where the `Err` case is [Error].
pub type Result<T> = std::result::Result<T, Error>;

/// The core error returned by this crate.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: BoxError,
}

impl Error {
    /// Creates an error representing invalid application inputs.
    ///
    /// # Example
    /// ```
    /// use sdmx_rest::error::{Error, ParameterError};
    /// let error = Error::binding(ParameterError::MissingRequired("resource_id".into()));
    /// assert!(error.is_binding());
    /// ```
    pub fn binding<T: Into<BoxError>>(source: T) -> Self {
        Self::new(ErrorKind::Binding, source)
    }

    /// The request parameters cannot produce a valid URL.
    ///
    /// This is always a problem with the application inputs: a value outside
    /// the allowed set, a key given twice, an unknown key, etc. Use
    /// [as_inner][Error::as_inner] with [ParameterError] to find the details.
    /// The same inputs will fail again, the application must change them.
    pub fn is_binding(&self) -> bool {
        matches!(self.kind, ErrorKind::Binding)
    }

    /// Creates an error representing an unknown resource, class, or query type.
    pub fn classification<T: Into<BoxError>>(source: T) -> Self {
        Self::new(ErrorKind::Classification, source)
    }

    /// An entity, class name, or string does not correspond to any
    /// [Resource][crate::resource::Resource] or
    /// [QueryType][crate::resource::QueryType].
    pub fn is_classification(&self) -> bool {
        matches!(self.kind, ErrorKind::Classification)
    }

    /// Creates an error representing a misconfigured dialect or source.
    pub fn configuration<T: Into<BoxError>>(source: T) -> Self {
        Self::new(ErrorKind::Configuration, source)
    }

    /// The dialect or the source are misconfigured.
    ///
    /// These errors indicate a bug, for example a handler that refers to a
    /// parameter missing from the registry, or a source without a valid base
    /// URL. They are not caused by the request parameters.
    pub fn is_configuration(&self) -> bool {
        matches!(self.kind, ErrorKind::Configuration)
    }

    /// Recurses through the source error chain and returns some reference to
    /// the inner value if it is of type `T`, or `None` if it isn't found.
    pub fn as_inner<T: StdError + Send + Sync + 'static>(&self) -> Option<&T> {
        let mut error = self.source.as_ref() as &(dyn StdError);
        // Bound the walk, `source()` chains may contain cycles.
        for _ in 0..32 {
            if let Some(e) = error.downcast_ref::<T>() {
                return Some(e);
            }
            error = error.source()?;
        }
        None
    }

    fn new<T: Into<BoxError>>(kind: ErrorKind, source: T) -> Self {
        Self {
            kind,
            source: source.into(),
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.source)
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(self.source.as_ref())
    }
}

#[derive(Clone, Debug, PartialEq)]
enum ErrorKind {
    Binding,
    Classification,
    Configuration,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Binding => write!(f, "cannot bind the request parameters"),
            ErrorKind::Classification => write!(f, "cannot classify the request"),
            ErrorKind::Configuration => write!(f, "the URL builder is misconfigured"),
        }
    }
}

/// Problems with the parameters of a request.
#[derive(thiserror::Error, Debug, PartialEq)]
#[non_exhaustive]
pub enum ParameterError {
    /// The same keys were given individually and in the `params` mapping.
    #[error("duplicate values for query parameters {0:?}")]
    Duplicate(Vec<String>),
    /// The value is not one of the allowed values for the parameter.
    #[error("{value} is not an allowed value for {name}; expected one of {allowed:?}")]
    DisallowedValue {
        name: String,
        value: String,
        allowed: Vec<String>,
    },
    /// Both the snake_case and lowerCamelCase form of a parameter were given.
    #[error("cannot give both {name} and {camel_name}")]
    ConflictingAlias { name: String, camel_name: String },
    /// The parameter requires a positive integer.
    #[error("{name} must be positive integer; got {value}")]
    NonPositiveInteger { name: String, value: String },
    /// The value is a positive integer too large to represent.
    #[error("{name} is too large; got {value}")]
    IntegerOverflow { name: String, value: String },
    /// A required parameter was not given.
    #[error("missing required parameter {0}")]
    MissingRequired(String),
    /// Some parameters were not used by any part of the URL.
    #[error("unexpected/unhandled parameters {0:?}")]
    Unconsumed(Vec<String>),
}

/// Names that cannot be mapped to a resource or query type.
#[derive(thiserror::Error, Debug, PartialEq)]
#[non_exhaustive]
pub enum ClassificationError {
    /// No resource corresponds to the class of an entity.
    #[error("no resource for class {0}")]
    UnknownClass(String),
    /// The string is not the name of a resource.
    #[error("unknown resource {0}")]
    UnknownResource(String),
    /// The string is not the name of a query type.
    #[error("unknown query type {0}")]
    UnknownQueryType(String),
}

/// Problems in the definition of a dialect or a source.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum ConfigurationError {
    /// A handler refers to a path parameter missing from the registry.
    #[error("path parameter {0} not found")]
    UnknownPathParameter(String),
    /// A handler refers to a query parameter missing from the registry.
    #[error("query parameter {0} not found for {1} queries")]
    UnknownQueryParameter(String, crate::resource::QueryType),
    /// The dialect has no handler for this kind of query.
    #[error("{dialect} does not support {query_type} queries")]
    UnsupportedQueryType {
        dialect: &'static str,
        query_type: crate::resource::QueryType,
    },
    /// The base URL of the source cannot be parsed.
    #[error("invalid base URL {url}: {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    /// The source descriptor cannot be deserialized.
    #[error("invalid source descriptor: {0}")]
    InvalidSource(#[source] serde_json::Error),
}
