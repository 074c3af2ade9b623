//! Named collections of styles, optionally built from a theme.

use std::borrow::Cow;

use anyhow::{Result, bail};
use rayon::prelude::*;
use serde::ser::{Serialize, SerializeMap as _, Serializer};
use serde_json::Value;
use tracing::debug_span;

use crate::node::StyleNode;
use crate::query_map::QueryMap;
use crate::resolve::{ResolveContext, ResolvedStyle, resolve_style};
use crate::selection::VariantSelections;

type ThemedStyle<T> = Box<dyn Fn(Option<&T>) -> StyleNode + Send + Sync>;

/// One entry of a stylesheet.
pub enum StyleEntry<T> {
    /// A fixed style tree.
    Static(StyleNode),
    /// A style tree built from the current theme.
    Themed(ThemedStyle<T>),
}

impl<T> StyleEntry<T> {
    /// The style tree for `theme`.
    pub fn build(&self, theme: Option<&T>) -> Cow<'_, StyleNode> {
        match self {
            Self::Static(style) => Cow::Borrowed(style),
            Self::Themed(build) => Cow::Owned(build(theme)),
        }
    }
}

impl<T> core::fmt::Debug for StyleEntry<T> {
    fn fmt(&self, formatter: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Static(style) => formatter.debug_tuple("Static").field(style).finish(),
            Self::Themed(_) => formatter.write_str("Themed(..)"),
        }
    }
}

/// Named styles in declaration order.
///
/// `T` is the theme type handed to themed entries.
#[derive(Debug)]
pub struct Stylesheet<T = Value> {
    entries: Vec<(String, StyleEntry<T>)>,
}

impl<T> Default for Stylesheet<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T> Stylesheet<T> {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a fixed style. Reusing a name replaces the earlier entry in place.
    #[must_use]
    pub fn with_style(self, name: impl Into<String>, style: StyleNode) -> Self {
        self.with_entry(name.into(), StyleEntry::Static(style))
    }

    /// Add a style built from the theme on every resolution.
    #[must_use]
    pub fn with_themed<F>(self, name: impl Into<String>, build: F) -> Self
    where
        F: Fn(Option<&T>) -> StyleNode + Send + Sync + 'static,
    {
        self.with_entry(name.into(), StyleEntry::Themed(Box::new(build)))
    }

    fn with_entry(mut self, name: String, entry: StyleEntry<T>) -> Self {
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = entry,
            None => self.entries.push((name, entry)),
        }
        self
    }

    /// Entry names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every query the sheet depends on for `theme`, including the queries of
    /// responsive variant selections. This is what the size observers need to
    /// watch.
    pub fn query_map(&self, theme: Option<&T>, selections: Option<&VariantSelections>) -> QueryMap {
        let mut queries = QueryMap::default();
        for (_, entry) in &self.entries {
            entry.build(theme).collect_queries(&mut queries);
        }
        if let Some(selections) = selections {
            for (_, selection) in selections.iter() {
                queries.extend(selection.queries().cloned());
            }
        }
        queries
    }
}

impl<T: Sync> Stylesheet<T> {
    /// Resolve every entry for one context. Entries are independent and are
    /// resolved in parallel; the result keeps declaration order.
    pub fn resolve(&self, theme: Option<&T>, context: &ResolveContext<'_>) -> ResolvedStylesheet {
        let _span = debug_span!("resolve_stylesheet", entries = self.entries.len()).entered();
        let styles = self
            .entries
            .par_iter()
            .map(|(name, entry)| (name.clone(), resolve_style(&entry.build(theme), context)))
            .collect();
        ResolvedStylesheet { styles }
    }
}

impl<T> TryFrom<Value> for Stylesheet<T> {
    type Error = anyhow::Error;

    /// Every entry of the object becomes a static style.
    fn try_from(value: Value) -> Result<Self> {
        let Value::Object(entries) = value else {
            bail!("stylesheet must be an object of named styles");
        };
        entries
            .into_iter()
            .try_fold(Self::new(), |sheet, (name, style)| {
                let style = StyleNode::try_from(style)
                    .map_err(|error| error.context(format!("in style `{name}`")))?;
                Ok(sheet.with_style(name, style))
            })
    }
}

/// Resolved styles by name, in stylesheet order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResolvedStylesheet {
    styles: Vec<(String, ResolvedStyle)>,
}

impl ResolvedStylesheet {
    /// The resolved style of an entry.
    pub fn get(&self, name: &str) -> Option<&ResolvedStyle> {
        self.styles
            .iter()
            .find_map(|(entry, style)| (entry == name).then_some(style))
    }

    /// All resolved styles in stylesheet order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResolvedStyle)> {
        self.styles.iter().map(|(name, style)| (name.as_str(), style))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

impl Serialize for ResolvedStylesheet {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.styles.len()))?;
        for (name, style) in &self.styles {
            map.serialize_entry(name, style)?;
        }
        map.end()
    }
}
