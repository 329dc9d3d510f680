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

use crate::error::{ConfigurationError, Error, Result};

/// A SDMX-REST web service.
///
/// Provides the base URL (the API entry point) for queries and, optionally,
/// the ID of the agency maintaining the service. The agency ID is the default
/// for the `agency_id` path parameter.
///
/// # Example
/// ```
/// # use sdmx_rest::source::Source;
/// let source = Source::new("https://data-api.ecb.europa.eu/service")
///     .with_id("ECB")
///     .with_name("European Central Bank");
/// assert_eq!(source.id(), Some("ECB"));
/// ```
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct Source {
    #[serde(default)]
    id: Option<String>,
    url: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default = "default_percent_encoding")]
    percent_encoding: bool,
}

fn default_percent_encoding() -> bool {
    true
}

impl Source {
    pub fn new<T: Into<String>>(url: T) -> Self {
        Self {
            id: None,
            url: url.into(),
            name: None,
            percent_encoding: default_percent_encoding(),
        }
    }

    /// Loads a source from its JSON description.
    ///
    /// # Example
    /// ```
    /// # use sdmx_rest::source::Source;
    /// let source = Source::from_json(r#"{"id": "ECB", "url": "https://example.org/sdmx"}"#)?;
    /// assert_eq!(source.url(), "https://example.org/sdmx");
    /// # Ok::<(), sdmx_rest::error::Error>(())
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| Error::configuration(ConfigurationError::InvalidSource(e)))
    }

    /// Sets the agency ID of the service.
    pub fn with_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Sets a human-readable name for the service.
    pub fn with_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Enables or disables percent-encoding of path and query values.
    ///
    /// Enabled by default. Only characters that would change the structure
    /// of the URL are encoded, the characters used in SDMX keys and versions
    /// (`.`, `+`, `*`, `~`, `,`) are always sent verbatim. Disable the
    /// encoding if the application already encodes the values.
    pub fn with_percent_encoding(mut self, v: bool) -> Self {
        self.percent_encoding = v;
        self
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn percent_encoding(&self) -> bool {
        self.percent_encoding
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builder() {
        let source = Source::new("https://example.org/sdmx")
            .with_id("ECB")
            .with_name("test-only")
            .with_percent_encoding(false);
        assert_eq!(source.url(), "https://example.org/sdmx");
        assert_eq!(source.id(), Some("ECB"));
        assert_eq!(source.name(), Some("test-only"));
        assert!(!source.percent_encoding());
    }

    #[test]
    fn defaults() {
        let source = Source::new("https://example.org/sdmx");
        assert_eq!(source.id(), None);
        assert_eq!(source.name(), None);
        assert!(source.percent_encoding());
    }

    #[test]
    fn from_json() -> anyhow::Result<()> {
        let got = Source::from_json(
            r#"{"id": "ECB", "url": "https://example.org/sdmx", "name": "test-only"}"#,
        )?;
        let want = Source::new("https://example.org/sdmx")
            .with_id("ECB")
            .with_name("test-only");
        assert_eq!(got, want);

        let got = Source::from_json(r#"{"url": "https://example.org", "percent_encoding": false}"#)?;
        assert_eq!(got, Source::new("https://example.org").with_percent_encoding(false));
        Ok(())
    }

    #[test]
    fn from_json_error() {
        let err = Source::from_json(r#"{"id": "ECB"}"#).unwrap_err();
        assert!(err.is_configuration(), "{err:?}");
        assert!(err.as_inner::<serde_json::Error>().is_some(), "{err:?}");
    }
}
