//! Flattening a style tree for one measurement.

use log::trace;
use responsive_queries::{Breakpoints, Measurement, match_any};
use serde_json::{Map, Value};

use crate::node::{StyleNode, VariantGroup};
use crate::selection::{VariantSelection, VariantSelections};

/// A flat style: property name to value, in first-set order.
pub type ResolvedStyle = Map<String, Value>;

/// Everything a resolution depends on. The caller provides one consistent
/// snapshot per call; resolving never mutates it.
#[derive(Clone, Copy, Debug, Default)]
pub struct ResolveContext<'ctx> {
    /// Current container width and screen size.
    pub measurement: Measurement,
    /// Breakpoint table for `:b[name]` bounds; without one they resolve to `0`.
    pub breakpoints: Option<&'ctx Breakpoints>,
    /// Active variant selections.
    pub selections: Option<&'ctx VariantSelections>,
}

impl<'ctx> ResolveContext<'ctx> {
    /// A context with no breakpoint table and no selections.
    #[inline]
    pub const fn new(measurement: Measurement) -> Self {
        Self {
            measurement,
            breakpoints: None,
            selections: None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn with_breakpoints(mut self, breakpoints: &'ctx Breakpoints) -> Self {
        self.breakpoints = Some(breakpoints);
        self
    }

    #[inline]
    #[must_use]
    pub const fn with_selections(mut self, selections: &'ctx VariantSelections) -> Self {
        self.selections = Some(selections);
        self
    }

    fn selection(&self, group: &str) -> Option<&'ctx VariantSelection> {
        self.selections.and_then(|selections| selections.get(group))
    }
}

/// Resolve a node into a flat style.
///
/// Sources are applied in this order, each overwriting keys set before it:
/// 1. plain properties (`null` values are dropped),
/// 2. each variant group, in declaration order,
/// 3. each matching conditional entry, in declaration order, resolved recursively.
///
/// A property set by a matching conditional therefore always beats the same
/// property set directly on the node, wherever it was declared.
pub fn resolve_style(node: &StyleNode, context: &ResolveContext<'_>) -> ResolvedStyle {
    let mut resolved: ResolvedStyle = node
        .properties()
        .iter()
        .filter(|(_, value)| !value.is_null())
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect();

    for (group_name, group) in node.variant_groups() {
        resolved.extend(resolve_variant(group, context.selection(group_name), context));
    }

    for (query, style) in node.conditionals() {
        if match_any(query, &context.measurement, context.breakpoints) {
            resolved.extend(resolve_style(style, context));
        }
    }

    resolved
}

/// Resolve one variant group for a selection.
///
/// An absent selection, an option name the group does not declare, or a
/// responsive selection with no matching query all fall back to the
/// `default` option; without one the group contributes nothing.
pub fn resolve_variant(
    group: &VariantGroup,
    selection: Option<&VariantSelection>,
    context: &ResolveContext<'_>,
) -> ResolvedStyle {
    let selected = selection
        .and_then(|selection| selection.select(&context.measurement, context.breakpoints))
        .and_then(|option| {
            let style = group.get(option);
            if style.is_none() {
                trace!("variant option {option:?} not declared, using default");
            }
            style
        });
    selected
        .or_else(|| group.fallback())
        .map(|style| resolve_style(style, context))
        .unwrap_or_default()
}

impl StyleNode {
    /// Shorthand for [`resolve_style`].
    #[inline]
    pub fn resolve(&self, context: &ResolveContext<'_>) -> ResolvedStyle {
        resolve_style(self, context)
    }
}
