//! The style tree.

use responsive_queries::QueryToken;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::query_map::QueryMap;

/// An opaque property value. `Value::Null` stands for an unset property and is
/// never emitted by the resolver.
pub type StyleValue = Value;

/// Option name used when no explicit selection applies.
pub const DEFAULT_VARIANT: &str = "default";

/// One node of a style tree.
///
/// Conditional entries and variant groups keep their declaration order, which
/// decides precedence during resolution.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub struct StyleNode {
    pub(crate) properties: Map<String, StyleValue>,
    pub(crate) conditionals: Vec<(QueryToken, StyleNode)>,
    pub(crate) variants: Vec<(String, VariantGroup)>,
}

impl StyleNode {
    /// An empty node.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a plain property. Setting it again replaces the value in place.
    #[must_use]
    pub fn property(mut self, name: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// Attach a sub-style applied while `query` matches.
    #[must_use]
    pub fn when(mut self, query: QueryToken, style: Self) -> Self {
        self.conditionals.push((query, style));
        self
    }

    /// Declare a variant group. Redeclaring a group replaces its options but
    /// keeps its position.
    #[must_use]
    pub fn variants(mut self, group: impl Into<String>, options: VariantGroup) -> Self {
        let group = group.into();
        match self.variants.iter_mut().find(|(name, _)| *name == group) {
            Some((_, existing)) => *existing = options,
            None => self.variants.push((group, options)),
        }
        self
    }

    /// Plain properties in declaration order.
    #[inline]
    pub const fn properties(&self) -> &Map<String, StyleValue> {
        &self.properties
    }

    /// Conditional entries in declaration order.
    pub fn conditionals(&self) -> impl Iterator<Item = (&QueryToken, &Self)> {
        self.conditionals.iter().map(|(query, style)| (query, style))
    }

    /// Variant groups in declaration order.
    pub fn variant_groups(&self) -> impl Iterator<Item = (&str, &VariantGroup)> {
        self.variants.iter().map(|(name, group)| (name.as_str(), group))
    }

    /// A node without conditional entries or variants.
    pub fn is_flat(&self) -> bool {
        self.conditionals.is_empty() && self.variants.is_empty()
    }

    /// Record every query token used anywhere below this node: conditional
    /// keys, nested nodes and variant options.
    pub fn collect_queries(&self, queries: &mut QueryMap) {
        for (query, style) in &self.conditionals {
            queries.insert(query.clone());
            style.collect_queries(queries);
        }
        for (_, group) in &self.variants {
            for (_, option) in group.options() {
                option.collect_queries(queries);
            }
        }
    }
}

/// The mutually exclusive options of one variant group.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VariantGroup {
    options: Vec<(String, StyleNode)>,
}

impl VariantGroup {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an option.
    #[must_use]
    pub fn option(mut self, name: impl Into<String>, style: StyleNode) -> Self {
        let name = name.into();
        match self.options.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = style,
            None => self.options.push((name, style)),
        }
        self
    }

    /// Set the `default` option.
    #[must_use]
    pub fn default_option(self, style: StyleNode) -> Self {
        self.option(DEFAULT_VARIANT, style)
    }

    /// Look up an option by name.
    pub fn get(&self, name: &str) -> Option<&StyleNode> {
        self.options
            .iter()
            .find_map(|(option, style)| (option == name).then_some(style))
    }

    /// The `default` option, if declared.
    pub fn fallback(&self) -> Option<&StyleNode> {
        self.get(DEFAULT_VARIANT)
    }

    /// Options in declaration order.
    pub fn options(&self) -> impl Iterator<Item = (&str, &StyleNode)> {
        self.options.iter().map(|(name, style)| (name.as_str(), style))
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}
