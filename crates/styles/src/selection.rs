//! Caller-supplied variant selections.

use std::collections::BTreeMap;

use responsive_queries::{Breakpoints, Measurement, QueryToken, match_any};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// How one variant group is selected.
#[derive(Clone, Debug, PartialEq)]
pub enum VariantSelection {
    /// A fixed option name.
    Named(String),
    /// Size-dependent option names; the first matching query wins, in
    /// declaration order.
    Responsive(Vec<(QueryToken, String)>),
}

impl VariantSelection {
    /// Build a responsive selection from `(query, option)` pairs.
    pub fn responsive<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (QueryToken, S)>,
        S: Into<String>,
    {
        Self::Responsive(
            entries
                .into_iter()
                .map(|(query, option)| (query, option.into()))
                .collect(),
        )
    }

    /// The option name this selection picks for the given sizes, if any.
    pub fn select(
        &self,
        measurement: &Measurement,
        breakpoints: Option<&Breakpoints>,
    ) -> Option<&str> {
        match self {
            Self::Named(option) => Some(option.as_str()),
            Self::Responsive(entries) => entries
                .iter()
                .find(|(query, _)| match_any(query, measurement, breakpoints))
                .map(|(_, option)| option.as_str()),
        }
    }

    /// Query tokens this selection depends on.
    pub fn queries(&self) -> impl Iterator<Item = &QueryToken> {
        let entries: &[(QueryToken, String)] = match self {
            Self::Named(_) => &[],
            Self::Responsive(entries) => entries,
        };
        entries.iter().map(|(query, _)| query)
    }
}

impl From<&str> for VariantSelection {
    fn from(option: &str) -> Self {
        Self::Named(option.to_owned())
    }
}

impl From<String> for VariantSelection {
    fn from(option: String) -> Self {
        Self::Named(option)
    }
}

/// Boolean variants use the option names `"true"` and `"false"`.
///
/// `false` is a real selection, not an absent one: it picks the `"false"`
/// option and only falls back to `default` when the group does not declare
/// one. Leave the group out of the selections to get `default` directly.
impl From<bool> for VariantSelection {
    fn from(option: bool) -> Self {
        Self::Named(option.to_string())
    }
}

/// Variant group name to selection.
///
/// Deserializes from JSON such as
/// `{"tone": "dark", "size": {":c:w[0, 400]": "small", ":c:w[400]": "large"}}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub struct VariantSelections(pub(crate) BTreeMap<String, VariantSelection>);

impl VariantSelections {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select an option for a group, builder style.
    #[must_use]
    pub fn with(mut self, group: impl Into<String>, selection: impl Into<VariantSelection>) -> Self {
        self.0.insert(group.into(), selection.into());
        self
    }

    /// The selection for a group, if any.
    #[inline]
    pub fn get(&self, group: &str) -> Option<&VariantSelection> {
        self.0.get(group)
    }

    /// All selections, ordered by group name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &VariantSelection)> {
        self.0.iter().map(|(group, selection)| (group.as_str(), selection))
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
