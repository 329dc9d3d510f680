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

//! SDMX-ML (XML) formats.

pub mod v30;

/// A class or tag is not part of the format.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum NotFound {
    #[error("no tag for class {0}")]
    Class(String),

    #[error("no class for tag {0}")]
    Tag(String),
}

/// The mapping between model classes and XML tags for a SDMX-ML version.
///
/// Classes are named `model.<Name>`, tags use a namespace prefix, e.g.
/// `str:<Name>` for elements in the structure namespace. A class may map to
/// the `str:None` tag when it has no element of its own.
#[derive(Clone, Debug, PartialEq)]
pub struct XmlFormat {
    base_ns: &'static str,
    model: &'static str,
    class_tag: Vec<(String, String)>,
}

impl XmlFormat {
    pub(crate) fn new<I>(base_ns: &'static str, model: &'static str, class_tag: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self {
            base_ns,
            model,
            class_tag: class_tag.into_iter().collect(),
        }
    }

    /// The base URI for the XML namespaces of the format.
    pub fn base_ns(&self) -> &str {
        self.base_ns
    }

    /// The version of the information model, e.g. `v30`.
    pub fn model(&self) -> &str {
        self.model
    }

    /// The pairs of (class, tag), in definition order.
    pub fn class_tag(&self) -> impl Iterator<Item = (&str, &str)> {
        self.class_tag.iter().map(|(c, t)| (c.as_str(), t.as_str()))
    }

    /// Returns the tag for a class.
    pub fn tag_for_class(&self, class: &str) -> Result<&str, NotFound> {
        self.class_tag()
            .find(|(c, _)| *c == class)
            .map(|(_, t)| t)
            .ok_or_else(|| NotFound::Class(class.to_string()))
    }

    /// Returns the class for a tag.
    ///
    /// If several classes share a tag the first one is returned.
    pub fn class_for_tag(&self, tag: &str) -> Result<&str, NotFound> {
        self.class_tag()
            .find(|(_, t)| *t == tag)
            .map(|(c, _)| c)
            .ok_or_else(|| NotFound::Tag(tag.to_string()))
    }
}
