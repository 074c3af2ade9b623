//! Named breakpoint tables and container threshold extraction.

use std::collections::HashMap;

use log::trace;
use serde::{Deserialize, Serialize};

use crate::token::QueryToken;

/// Breakpoint name to width table, usually supplied by theme configuration.
///
/// Deserializes from a plain JSON object such as `{"sm": 576, "md": 768}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Breakpoints(HashMap<String, f64>);

impl Breakpoints {
    /// Create an empty table.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a breakpoint, builder style.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: f64) -> Self {
        self.0.insert(name.into(), value);
        self
    }

    /// Look up a breakpoint; unknown names resolve to `0`.
    #[inline]
    pub fn get(&self, name: &str) -> f64 {
        self.0.get(name).copied().unwrap_or(0.0)
    }

    /// Whether the table names this breakpoint.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Number of named breakpoints.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the table is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for Breakpoints {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        )
    }
}

/// Collect the widths a container observer must react to for `tokens`.
///
/// Only valid container queries contribute: a positive lower bound and a
/// finite upper bound are thresholds. Media queries are observed separately
/// and are skipped here, as are malformed tokens.
///
/// The result is sorted ascending and free of duplicates.
pub fn extract_container_thresholds<'tokens, I>(tokens: I) -> Vec<f64>
where
    I: IntoIterator<Item = &'tokens QueryToken>,
{
    let mut thresholds = Vec::new();
    for token in tokens {
        let Some(decoded) = token.decode_container() else {
            continue;
        };
        let Some(width) = decoded.width.filter(|range| range.is_valid()) else {
            trace!("skipping invalid container query {token}");
            continue;
        };
        if width.from > 0.0 {
            thresholds.push(width.from);
        }
        if width.to.is_finite() {
            thresholds.push(width.to);
        }
    }
    thresholds.sort_by(f64::total_cmp);
    thresholds.dedup();
    thresholds
}
