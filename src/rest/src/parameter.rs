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

//! SDMX-REST query parameters.
//!
//! Each parameter knows how to find its value in the request, validate it,
//! and whether it belongs in the path or the query string of the URL. The
//! URL builder calls [Parameter::handle] in the order required by the URL
//! grammar, each call removes the parameter's keys from the request and
//! returns (at most) one [Part] for the URL.

use crate::error::{Error, ParameterError, Result};
use crate::source::Source;
use crate::value::{ParamValue, Parameters};
use std::num::IntErrorKind;

/// A piece of the URL produced by a [Parameter].
///
/// For path parameters `value` may be `None`. The URL then contains the
/// parameter name itself as the path segment.
#[derive(Clone, Debug, PartialEq)]
pub struct Part {
    pub key: String,
    pub value: Option<ParamValue>,
}

/// A SDMX-REST query parameter.
pub trait Parameter: std::fmt::Debug + Send + Sync {
    /// The name used to find the parameter in the request.
    fn name(&self) -> &str;

    /// Removes the parameter from `parameters` and returns the piece of URL
    /// it contributes, if any.
    fn handle(&self, parameters: &mut Parameters, source: &Source) -> Result<Option<Part>>;
}

/// A parameter appearing as part of the path component of a URL.
///
/// Path parameters always produce a [Part]. If the request does not contain
/// the parameter its default value is used, and if there is no default the
/// value is `None`.
#[derive(Clone, Debug, PartialEq)]
pub struct PathParameter {
    name: String,
    values: Vec<ParamValue>,
    default: Option<ParamValue>,
}

impl PathParameter {
    pub fn new<T: Into<String>>(name: T) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
            default: None,
        }
    }

    /// Restricts the allowable values.
    ///
    /// An empty set of values means that any value is accepted.
    pub fn with_values<I, V>(mut self, v: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<ParamValue>,
    {
        self.values = v.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the value used when the request does not contain the parameter.
    pub fn with_default<V: Into<ParamValue>>(mut self, v: V) -> Self {
        self.default = Some(v.into());
        self
    }

    pub fn values(&self) -> &[ParamValue] {
        &self.values
    }

    pub fn default_value(&self) -> Option<&ParamValue> {
        self.default.as_ref()
    }

    /// Verifies `value` is allowed.
    ///
    /// Values are compared as they would appear in the URL, so `"true"` is
    /// accepted where `true` is allowed.
    fn check(&self, value: Option<&ParamValue>) -> Result<()> {
        if self.values.is_empty() {
            return Ok(());
        }
        let formatted = value.map(ParamValue::to_string);
        let allowed = self.values.iter().map(ParamValue::to_string);
        if let Some(f) = &formatted {
            if allowed.clone().any(|a| a == *f) {
                return Ok(());
            }
        }
        Err(Error::binding(ParameterError::DisallowedValue {
            name: self.name.clone(),
            value: formatted.unwrap_or_else(|| "None".to_string()),
            allowed: allowed.collect(),
        }))
    }
}

impl Parameter for PathParameter {
    fn name(&self) -> &str {
        &self.name
    }

    fn handle(&self, parameters: &mut Parameters, _source: &Source) -> Result<Option<Part>> {
        let value = parameters
            .remove(&self.name)
            .or_else(|| self.default.clone());
        self.check(value.as_ref())?;
        tracing::trace!("path parameter {} = {value:?}", self.name);
        Ok(Some(Part {
            key: self.name.clone(),
            value,
        }))
    }
}

/// A parameter appearing as part of the query string component of a URL.
///
/// In the request, query parameters may use snake_case (`start_period`) or
/// lowerCamelCase (`startPeriod`) names. The query string always uses
/// lowerCamelCase. Query parameters are optional, they have no default.
#[derive(Clone, Debug, PartialEq)]
pub struct QueryParameter {
    inner: PathParameter,
    camel_name: String,
}

impl QueryParameter {
    pub fn new<T: Into<String>>(name: T) -> Self {
        Self::from(PathParameter::new(name))
    }

    /// Restricts the allowable values.
    pub fn with_values<I, V>(self, v: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<ParamValue>,
    {
        Self::from(self.inner.with_values(v))
    }

    /// The name of the parameter as it appears in query strings.
    pub fn camel_name(&self) -> &str {
        &self.camel_name
    }

    pub fn values(&self) -> &[ParamValue] {
        self.inner.values()
    }
}

impl From<PathParameter> for QueryParameter {
    fn from(inner: PathParameter) -> Self {
        let camel_name = lower_camel_case(&inner.name);
        Self { inner, camel_name }
    }
}

impl Parameter for QueryParameter {
    fn name(&self) -> &str {
        &self.inner.name
    }

    fn handle(&self, parameters: &mut Parameters, _source: &Source) -> Result<Option<Part>> {
        let name = self.name();
        let present = (
            parameters.contains_key(name),
            name != self.camel_name && parameters.contains_key(&self.camel_name),
        );
        let key = match present {
            (true, true) => {
                return Err(Error::binding(ParameterError::ConflictingAlias {
                    name: name.to_string(),
                    camel_name: self.camel_name.clone(),
                }));
            }
            (true, false) => name,
            (false, true) => self.camel_name.as_str(),
            (false, false) => return Ok(None),
        };
        let value = parameters.remove(key);
        self.inner.check(value.as_ref())?;
        tracing::trace!("query parameter {} = {value:?}", self.camel_name);
        Ok(Some(Part {
            key: self.camel_name.clone(),
            value,
        }))
    }
}

/// The `agency_id` path parameter.
///
/// Defaults to the ID of the [Source] when the request does not contain a
/// value. If the source has no ID, the default value of the parameter (if
/// any) is used.
#[derive(Clone, Debug, PartialEq)]
pub struct AgencyParam {
    inner: PathParameter,
}

impl AgencyParam {
    pub fn new<T: Into<String>>(name: T) -> Self {
        Self::from(PathParameter::new(name))
    }
}

impl From<PathParameter> for AgencyParam {
    fn from(inner: PathParameter) -> Self {
        Self { inner }
    }
}

impl Parameter for AgencyParam {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn handle(&self, parameters: &mut Parameters, source: &Source) -> Result<Option<Part>> {
        if let Some(id) = source.id() {
            parameters.set_default(self.name(), id);
        }
        self.inner.handle(parameters, source)
    }
}

/// A query parameter that must be a positive integer.
///
/// Integers and strings containing integers are accepted, up to `u64::MAX`.
/// The query string contains the value formatted as a string.
#[derive(Clone, Debug, PartialEq)]
pub struct PositiveIntParam {
    inner: QueryParameter,
}

impl PositiveIntParam {
    pub fn new<T: Into<String>>(name: T) -> Self {
        Self {
            inner: QueryParameter::new(name),
        }
    }
}

impl Parameter for PositiveIntParam {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn handle(&self, parameters: &mut Parameters, source: &Source) -> Result<Option<Part>> {
        let Some(part) = self.inner.handle(parameters, source)? else {
            return Ok(None);
        };
        let parsed = part
            .value
            .as_ref()
            .map_or(Err(IntErrorKind::Empty), ParamValue::as_positive);
        let value = || {
            part.value
                .as_ref()
                .map(|v| v.to_string())
                .unwrap_or_else(|| "None".to_string())
        };
        match parsed {
            Ok(v) => Ok(Some(Part {
                key: part.key,
                value: Some(ParamValue::Str(v.to_string())),
            })),
            Err(IntErrorKind::PosOverflow) => Err(Error::binding(ParameterError::IntegerOverflow {
                value: value(),
                name: part.key,
            })),
            Err(_) => Err(Error::binding(ParameterError::NonPositiveInteger {
                value: value(),
                name: part.key,
            })),
        }
    }
}

/// Converts a snake_case name to lowerCamelCase.
///
/// Each `_` followed by a lowercase ASCII letter is replaced by the uppercase
/// letter, other characters are unchanged.
fn lower_camel_case(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut chars = name.chars().peekable();
    while let Some(c) = chars.next() {
        match (c, chars.peek()) {
            ('_', Some(n)) if n.is_ascii_lowercase() => {
                result.push(n.to_ascii_uppercase());
                chars.next();
            }
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn source() -> Source {
        Source::new("https://example.org/sdmx")
    }

    fn part<V: Into<ParamValue>>(key: &str, value: V) -> Option<Part> {
        Some(Part {
            key: key.to_string(),
            value: Some(value.into()),
        })
    }

    #[test_case("start_period", "startPeriod")]
    #[test_case("first_n_observations", "firstNObservations")]
    #[test_case("dimension_at_observation", "dimensionAtObservation")]
    #[test_case("mode", "mode")]
    #[test_case("trailing_", "trailing_")]
    #[test_case("with_1digit", "with_1digit")]
    fn camel_name(input: &str, want: &str) {
        assert_eq!(QueryParameter::new(input).camel_name(), want);
    }

    #[test]
    fn path_parameter() -> anyhow::Result<()> {
        let p = PathParameter::new("resource_id");
        let mut params: Parameters = [("resource_id", "EXR"), ("other", "x")].into_iter().collect();
        assert_eq!(p.handle(&mut params, &source())?, part("resource_id", "EXR"));
        assert_eq!(params.keys().collect::<Vec<_>>(), vec!["other"]);
        Ok(())
    }

    #[test]
    fn path_parameter_default() -> anyhow::Result<()> {
        let p = PathParameter::new("version").with_default("latest");
        let mut params = Parameters::new();
        assert_eq!(p.handle(&mut params, &source())?, part("version", "latest"));

        let p = PathParameter::new("version");
        let got = p.handle(&mut params, &source())?;
        assert_eq!(
            got,
            Some(Part {
                key: "version".into(),
                value: None
            })
        );
        Ok(())
    }

    #[test]
    fn path_parameter_values() -> anyhow::Result<()> {
        let p = PathParameter::new("context").with_values(["dataflow", "datastructure"]);
        let mut params: Parameters = [("context", "dataflow")].into_iter().collect();
        assert_eq!(p.handle(&mut params, &source())?, part("context", "dataflow"));

        let mut params: Parameters = [("context", "codelist")].into_iter().collect();
        let err = p.handle(&mut params, &source()).unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        assert!(
            matches!(
                err.as_inner::<ParameterError>(),
                Some(ParameterError::DisallowedValue { name, value, .. }) if name == "context" && value == "codelist"
            ),
            "{err:?}"
        );

        // Without a default, a constrained parameter is effectively required.
        let mut params = Parameters::new();
        let err = p.handle(&mut params, &source()).unwrap_err();
        assert!(
            matches!(
                err.as_inner::<ParameterError>(),
                Some(ParameterError::DisallowedValue { value, .. }) if value == "None"
            ),
            "{err:?}"
        );
        Ok(())
    }

    #[test]
    fn query_parameter() -> anyhow::Result<()> {
        let p = QueryParameter::new("start_period");
        for key in ["start_period", "startPeriod"] {
            let mut params: Parameters = [(key, "2020")].into_iter().collect();
            assert_eq!(p.handle(&mut params, &source())?, part("startPeriod", "2020"));
            assert!(params.is_empty(), "{params:?}");
        }
        Ok(())
    }

    #[test]
    fn query_parameter_absent() -> anyhow::Result<()> {
        let p = QueryParameter::new("start_period");
        let mut params: Parameters = [("end_period", "2020")].into_iter().collect();
        assert_eq!(p.handle(&mut params, &source())?, None);
        assert_eq!(params.len(), 1);
        Ok(())
    }

    #[test]
    fn query_parameter_conflict() {
        let p = QueryParameter::new("start_period");
        let mut params: Parameters = [("start_period", "2020"), ("startPeriod", "2021")]
            .into_iter()
            .collect();
        let err = p.handle(&mut params, &source()).unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        assert_eq!(
            err.as_inner::<ParameterError>(),
            Some(&ParameterError::ConflictingAlias {
                name: "start_period".into(),
                camel_name: "startPeriod".into()
            })
        );
    }

    #[test]
    fn query_parameter_single_word() -> anyhow::Result<()> {
        // The name and the camel name are the same, this is not a conflict.
        let p = QueryParameter::new("mode").with_values(["available", "exact"]);
        let mut params: Parameters = [("mode", "exact")].into_iter().collect();
        assert_eq!(p.handle(&mut params, &source())?, part("mode", "exact"));
        Ok(())
    }

    #[test_case(ParamValue::from(true), "true")]
    #[test_case(ParamValue::from(false), "false")]
    #[test_case(ParamValue::from("true"), "true")]
    fn query_parameter_bool(input: ParamValue, want: &str) -> anyhow::Result<()> {
        let p = QueryParameter::new("include_history").with_values([true, false]);
        let mut params: Parameters = [("includeHistory", input)].into_iter().collect();
        let got = p.handle(&mut params, &source())?.and_then(|p| p.value);
        assert_eq!(got.map(|v| v.to_string()), Some(want.to_string()));
        Ok(())
    }

    #[test]
    fn query_parameter_disallowed() {
        let p = QueryParameter::new("include_history").with_values([true, false]);
        let mut params: Parameters = [("include_history", "maybe")].into_iter().collect();
        let err = p.handle(&mut params, &source()).unwrap_err();
        assert!(
            matches!(
                err.as_inner::<ParameterError>(),
                Some(ParameterError::DisallowedValue { name, allowed, .. }) if name == "include_history" && allowed == &vec!["true".to_string(), "false".to_string()]
            ),
            "{err:?}"
        );
    }

    #[test]
    fn agency_from_source() -> anyhow::Result<()> {
        let p = AgencyParam::new("agency_id");
        let source = source().with_id("ECB");
        let mut params = Parameters::new();
        assert_eq!(p.handle(&mut params, &source)?, part("agency_id", "ECB"));
        assert!(params.is_empty(), "{params:?}");
        Ok(())
    }

    #[test]
    fn agency_explicit() -> anyhow::Result<()> {
        let p = AgencyParam::new("agency_id");
        let source = source().with_id("ECB");
        let mut params: Parameters = [("agency_id", "OECD")].into_iter().collect();
        assert_eq!(p.handle(&mut params, &source)?, part("agency_id", "OECD"));
        Ok(())
    }

    #[test]
    fn agency_without_source_id() -> anyhow::Result<()> {
        let p = AgencyParam::new("agency_id");
        let mut params = Parameters::new();
        let got = p.handle(&mut params, &source())?;
        assert_eq!(
            got,
            Some(Part {
                key: "agency_id".into(),
                value: None
            })
        );

        let p = AgencyParam::from(PathParameter::new("agency_id").with_default("*"));
        assert_eq!(p.handle(&mut params, &source())?, part("agency_id", "*"));
        Ok(())
    }

    #[test_case(ParamValue::from(5), "5")]
    #[test_case(ParamValue::from("12"), "12")]
    fn positive_int(input: ParamValue, want: &str) -> anyhow::Result<()> {
        let p = PositiveIntParam::new("first_n_observations");
        let mut params: Parameters = [("first_n_observations", input)].into_iter().collect();
        assert_eq!(
            p.handle(&mut params, &source())?,
            part("firstNObservations", want)
        );
        Ok(())
    }

    #[test_case(ParamValue::from(0), "0")]
    #[test_case(ParamValue::from(-3), "-3")]
    #[test_case(ParamValue::from("many"), "many")]
    #[test_case(ParamValue::from(true), "true")]
    fn positive_int_error(input: ParamValue, want: &str) {
        let p = PositiveIntParam::new("first_n_observations");
        let mut params: Parameters = [("firstNObservations", input)].into_iter().collect();
        let err = p.handle(&mut params, &source()).unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        assert_eq!(
            err.as_inner::<ParameterError>(),
            Some(&ParameterError::NonPositiveInteger {
                name: "firstNObservations".into(),
                value: want.into()
            })
        );
    }

    #[test]
    fn positive_int_overflow() {
        let p = PositiveIntParam::new("first_n_observations");
        let mut params: Parameters = [("first_n_observations", "99999999999999999999")]
            .into_iter()
            .collect();
        let err = p.handle(&mut params, &source()).unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        assert_eq!(
            err.as_inner::<ParameterError>(),
            Some(&ParameterError::IntegerOverflow {
                name: "firstNObservations".into(),
                value: "99999999999999999999".into()
            })
        );
    }

    #[test]
    fn positive_int_absent() -> anyhow::Result<()> {
        let p = PositiveIntParam::new("first_n_observations");
        let mut params = Parameters::new();
        assert_eq!(p.handle(&mut params, &source())?, None);
        Ok(())
    }
}
