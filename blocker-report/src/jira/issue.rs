//! Jira search response models.

use super::fields::CustomFields;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// One page of results from the search endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchResponse {
    /// Offset of the first returned issue.
    pub start_at: u64,

    /// Page size the server applied.
    pub max_results: u64,

    /// Total number of matching issues, including ones beyond this page.
    pub total: u64,

    /// Issues in this page.
    pub issues: Vec<Issue>,
}

/// A single issue as returned by the search endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Issue {
    /// Issue key (e.g. "OCPBUGS-1234").
    pub key: String,

    /// Structured and custom fields.
    pub fields: IssueFields,
}

/// Issue fields: the structured ones the report needs, plus the custom field bag.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueFields {
    #[serde(default, deserialize_with = "null_as_default")]
    pub summary: String,

    #[serde(default)]
    pub status: Option<Named>,

    #[serde(default)]
    pub priority: Option<Named>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub components: Vec<Named>,

    /// Affected versions.
    #[serde(default, deserialize_with = "null_as_default")]
    pub versions: Vec<Named>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub fix_versions: Vec<Named>,

    /// Every field not listed above, keyed by its opaque identifier.
    #[serde(flatten)]
    pub unknowns: Map<String, Value>,
}

impl IssueFields {
    /// Returns a typed accessor over the custom field bag.
    #[must_use]
    pub fn custom(&self) -> CustomFields<'_> {
        CustomFields::new(&self.unknowns)
    }
}

/// Reads a field that Jira may send as `null`, treating null like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Any Jira object identified by a `name` (status, priority, component, version).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Named {
    pub name: String,
}

impl Named {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Joins the names of `items` with commas.
pub(crate) fn join_names(items: &[Named]) -> String {
    items
        .iter()
        .map(|item| item.name.as_str())
        .collect::<Vec<_>>()
        .join(",")
}
