//! Numeric view of tokens once breakpoint names are resolved.

use crate::breakpoints::Breakpoints;
use crate::token::{Condition, QueryToken};

/// An inclusive numeric range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DecodedRange {
    /// Lower end.
    pub from: f64,
    /// Upper end, possibly `f64::INFINITY`.
    pub to: f64,
}

impl DecodedRange {
    /// A range is usable only when `from <= to`.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.from <= self.to
    }

    /// `from <= value <= to`.
    #[inline]
    pub fn contains(self, value: f64) -> bool {
        self.from <= value && value <= self.to
    }
}

/// A decoded container query.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DecodedContainerQuery {
    /// Width range; absent only for hand-built values.
    pub width: Option<DecodedRange>,
}

impl DecodedContainerQuery {
    /// Valid when a width range exists and is ordered.
    pub fn is_valid(&self) -> bool {
        self.width.is_some_and(DecodedRange::is_valid)
    }
}

/// A decoded media query. A dimension the token does not mention is `None`,
/// never a zero range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DecodedMediaQuery {
    /// Width range, if constrained.
    pub width: Option<DecodedRange>,
    /// Height range, if constrained.
    pub height: Option<DecodedRange>,
}

impl DecodedMediaQuery {
    /// Valid when at least one dimension is present and every present one is ordered.
    pub fn is_valid(&self) -> bool {
        if self.width.is_none() && self.height.is_none() {
            return false;
        }
        self.width.is_none_or(DecodedRange::is_valid) && self.height.is_none_or(DecodedRange::is_valid)
    }
}

impl QueryToken {
    /// Decode as a container query; `None` for any other kind of token.
    pub fn decode_container(&self) -> Option<DecodedContainerQuery> {
        match self.condition() {
            Condition::Container(query) => Some(DecodedContainerQuery {
                width: Some(query.width().decode(None)),
            }),
            Condition::Media(_) | Condition::Unrecognized => None,
        }
    }

    /// Decode as a media query, resolving breakpoint names against `breakpoints`;
    /// `None` for any other kind of token.
    pub fn decode_media(&self, breakpoints: Option<&Breakpoints>) -> Option<DecodedMediaQuery> {
        match self.condition() {
            Condition::Media(query) => Some(DecodedMediaQuery {
                width: query.width().map(|range| range.decode(breakpoints)),
                height: query.height().map(|range| range.decode(breakpoints)),
            }),
            Condition::Container(_) | Condition::Unrecognized => None,
        }
    }
}

/// Decode a container query string; `None` when it is not one.
pub fn decode_container_query(text: &str) -> Option<DecodedContainerQuery> {
    QueryToken::parse(text).decode_container()
}

/// Decode a media query string, resolving `:b[name]` bounds against
/// `breakpoints` (unknown names and a missing table give `0`).
pub fn decode_media_query(
    text: &str,
    breakpoints: Option<&Breakpoints>,
) -> Option<DecodedMediaQuery> {
    QueryToken::parse(text).decode_media(breakpoints)
}
