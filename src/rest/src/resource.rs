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

//! Classification of SDMX-REST requests.
//!
//! The SDMX 2.1 and 3.0 standards define a list of "resources" (Section V).
//! In SDMX 3.0 only five values (availability, data, metadata, schema,
//! structure) appear as the first part of a URL path, but the choice of this
//! first part and the allowable query parameters depend on the more detailed
//! list. [Resource] merges the resources from both versions, and [QueryType]
//! captures the high-level kind of query.

use crate::error::{ClassificationError, Error, Result};

/// Mapping from [Resource] values to information-model class names.
///
/// Only the irregular names appear here. Other resources map to themselves.
const CLASS_NAME: [(&str, &str); 2] = [
    ("dataflow", "DataflowDefinition"),
    ("datastructure", "DataStructureDefinition"),
];

/// Implemented by information-model types that can be retrieved through the
/// REST API.
pub trait ModelObject {
    /// The name of the concrete information-model class, for example
    /// `DataflowDefinition` or `Codelist`.
    fn class_name(&self) -> &str;
}

macro_rules! resources {
    ($($variant:ident => $value:literal,)*) => {
        /// Enumeration of SDMX-REST API resources.
        ///
        /// Each member's value is its name in lowercase, as it appears in URL
        /// paths. Some members (`organisationunitscheme`, `process`,
        /// `reportingtaxonomy`, `schema`) have no corresponding class in the
        /// information model.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Resource {
            $($variant,)*
        }

        impl Resource {
            /// All the resources, in lexicographic order.
            pub const ALL: &'static [Resource] = &[$(Resource::$variant,)*];

            /// The value of the resource, as used in URL paths.
            pub fn value(&self) -> &'static str {
                match self {
                    $(Resource::$variant => $value,)*
                }
            }
        }
    };
}

resources! {
    ActualConstraint => "actualconstraint",
    AgencyScheme => "agencyscheme",
    AllowedConstraint => "allowedconstraint",
    AttachementConstraint => "attachementconstraint",
    AvailableConstraint => "availableconstraint",
    Categorisation => "categorisation",
    CategoryScheme => "categoryscheme",
    Codelist => "codelist",
    ConceptScheme => "conceptscheme",
    ContentConstraint => "contentconstraint",
    CustomTypeScheme => "customtypescheme",
    Data => "data",
    DataConsumerScheme => "dataconsumerscheme",
    Dataflow => "dataflow",
    DataProviderScheme => "dataproviderscheme",
    DataStructure => "datastructure",
    HierarchicalCodelist => "hierarchicalcodelist",
    Metadata => "metadata",
    Metadataflow => "metadataflow",
    MetadataStructure => "metadatastructure",
    NamePersonalisationScheme => "namepersonalisationscheme",
    OrganisationScheme => "organisationscheme",
    OrganisationUnitScheme => "organisationunitscheme",
    Process => "process",
    ProvisionAgreement => "provisionagreement",
    ReportingTaxonomy => "reportingtaxonomy",
    RulesetScheme => "rulesetscheme",
    Schema => "schema",
    Structure => "structure",
    StructureSet => "structureset",
    TransformationScheme => "transformationscheme",
    UserDefinedOperatorScheme => "userdefinedoperatorscheme",
    VtlMappingScheme => "vtlmappingscheme",
}

impl Resource {
    /// Returns the resource for an information-model object.
    ///
    /// # Example
    /// ```
    /// # use sdmx_rest::resource::{ModelObject, Resource};
    /// struct DataflowDefinition;
    /// impl ModelObject for DataflowDefinition {
    ///     fn class_name(&self) -> &str { "DataflowDefinition" }
    /// }
    /// assert_eq!(Resource::from_obj(&DataflowDefinition)?, Resource::Dataflow);
    /// # Ok::<(), sdmx_rest::error::Error>(())
    /// ```
    pub fn from_obj<T: ModelObject + ?Sized>(obj: &T) -> Result<Self> {
        Self::from_class_name(obj.class_name())
    }

    /// Returns the resource for an information-model class name.
    ///
    /// Irregular names (e.g. `DataStructureDefinition`) are mapped first,
    /// other class names match the resource values ignoring case.
    pub fn from_class_name(name: &str) -> Result<Self> {
        let value = CLASS_NAME
            .iter()
            .find_map(|(value, class)| (*class == name).then_some(*value))
            .unwrap_or(name);
        Self::ALL
            .iter()
            .find(|r| r.value().eq_ignore_ascii_case(value))
            .copied()
            .ok_or_else(|| Error::classification(ClassificationError::UnknownClass(name.into())))
    }

    /// Returns the name of the information-model class for a resource.
    ///
    /// Resources without an irregular class name return their own value, in
    /// lowercase.
    pub fn class_name(&self) -> &'static str {
        let value = self.value();
        CLASS_NAME
            .iter()
            .find_map(|(v, class)| (*v == value).then_some(*class))
            .unwrap_or(value)
    }

    /// Describes all the resources, e.g. for help messages.
    ///
    /// The result is formatted as `{actualconstraint agencyscheme ...}`.
    pub fn describe() -> String {
        let values: Vec<&str> = Self::ALL.iter().map(Resource::value).collect();
        format!("{{{}}}", values.join(" "))
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.value())
    }
}

impl std::str::FromStr for Resource {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .find(|r| r.value() == s)
            .copied()
            .ok_or_else(|| Error::classification(ClassificationError::UnknownResource(s.into())))
    }
}

/// High-level types of SDMX-REST queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum QueryType {
    Availability,
    Data,
    Metadata,
    Schema,
    Structure,
    /// SDMX 3.0 only.
    Registration,
}

impl QueryType {
    pub const ALL: &'static [QueryType] = &[
        QueryType::Availability,
        QueryType::Data,
        QueryType::Metadata,
        QueryType::Schema,
        QueryType::Structure,
        QueryType::Registration,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            QueryType::Availability => "availability",
            QueryType::Data => "data",
            QueryType::Metadata => "metadata",
            QueryType::Schema => "schema",
            QueryType::Structure => "structure",
            QueryType::Registration => "registration",
        }
    }
}

impl From<Resource> for QueryType {
    /// Identifies the query type for a resource.
    ///
    /// Resources named like a query type (data, metadata, schema, structure)
    /// use that query type, all others are structure queries.
    fn from(resource: Resource) -> Self {
        Self::ALL
            .iter()
            .find(|q| q.value() == resource.value())
            .copied()
            .unwrap_or(QueryType::Structure)
    }
}

impl std::fmt::Display for QueryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.value())
    }
}

impl std::str::FromStr for QueryType {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .find(|q| q.value() == s)
            .copied()
            .ok_or_else(|| Error::classification(ClassificationError::UnknownQueryType(s.into())))
    }
}
