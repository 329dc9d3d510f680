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

use std::collections::BTreeMap;
use std::num::IntErrorKind;

/// The value of a request parameter.
///
/// SDMX-REST parameters are strings, integers (e.g. `firstNObservations`), or
/// booleans (e.g. `includeHistory`). They are formatted as they appear in
/// URLs, booleans use lowercase `true` and `false`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ParamValue {
    Str(String),
    Int(i64),
    Bool(bool),
}

impl ParamValue {
    /// Interprets the value as an integer, if possible.
    ///
    /// Strings are parsed, booleans are never integers.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            Self::Str(s) => s.trim().parse().ok(),
            Self::Bool(_) => None,
        }
    }

    /// Interprets the value as a positive integer.
    ///
    /// On failure returns why the value is not one: [IntErrorKind::Zero] for
    /// zero, [IntErrorKind::PosOverflow] for values larger than `u64::MAX`,
    /// and [IntErrorKind::InvalidDigit] for anything else.
    pub fn as_positive(&self) -> std::result::Result<u64, IntErrorKind> {
        let n = match self {
            Self::Int(i) => u64::try_from(*i).map_err(|_| IntErrorKind::InvalidDigit)?,
            Self::Str(s) => s.trim().parse::<u64>().map_err(|e| e.kind().clone())?,
            Self::Bool(_) => return Err(IntErrorKind::InvalidDigit),
        };
        if n == 0 {
            return Err(IntErrorKind::Zero);
        }
        Ok(n)
    }
}

impl std::fmt::Display for ParamValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(i) => write!(f, "{i}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        Self::Int(value.into())
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// The request parameters that have not been consumed yet.
///
/// Each [Parameter][crate::parameter::Parameter] removes its own keys while
/// the URL is built. Any keys left at the end are reported as an error.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Parameters(BTreeMap<String, ParamValue>);

impl Parameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a value, returning the previous value for `key`, if any.
    pub fn insert<K, V>(&mut self, key: K, value: V) -> Option<ParamValue>
    where
        K: Into<String>,
        V: Into<ParamValue>,
    {
        self.0.insert(key.into(), value.into())
    }

    /// Inserts a value only if `key` is absent.
    pub fn set_default<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<ParamValue>,
    {
        self.0.entry(key.into()).or_insert_with(|| value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<ParamValue> {
        self.0.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The remaining keys, in lexicographic order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl<K, V> FromIterator<(K, V)> for Parameters
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl IntoIterator for Parameters {
    type Item = (String, ParamValue);
    type IntoIter = std::collections::btree_map::IntoIter<String, ParamValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<K, V> Extend<(K, V)> for Parameters
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        self.0
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}
