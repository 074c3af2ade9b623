//! Range bounds and the arguments accepted by the token constructors.

use core::fmt;

use crate::breakpoints::Breakpoints;
use crate::decode::DecodedRange;

/// One end of a query range, before breakpoint names are resolved.
#[derive(Clone, Debug, PartialEq)]
pub enum Bound {
    /// A literal number. `f64::INFINITY` marks an unbounded upper end.
    Value(f64),
    /// A named breakpoint, looked up at match time.
    Breakpoint(String),
}

impl Bound {
    /// Lower bound used when none is given.
    pub const ZERO: Self = Self::Value(0.0);
    /// Upper bound used when none is given.
    pub const UNBOUNDED: Self = Self::Value(f64::INFINITY);

    /// Resolve to a number. Breakpoint names missing from the table, or any
    /// name when there is no table at all, resolve to `0`.
    pub fn resolve(&self, breakpoints: Option<&Breakpoints>) -> f64 {
        match self {
            Self::Value(value) => *value,
            Self::Breakpoint(name) => breakpoints.map_or(0.0, |table| table.get(name)),
        }
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => write_number(*value, formatter),
            Self::Breakpoint(name) => write!(formatter, ":b[{name}]"),
        }
    }
}

/// Render a number the way the canonical grammar spells it.
fn write_number(value: f64, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
    if value == f64::INFINITY {
        formatter.write_str("Infinity")
    } else if value == f64::NEG_INFINITY {
        formatter.write_str("-Infinity")
    } else if value == 0.0 {
        // Covers -0.0 as well.
        formatter.write_str("0")
    } else {
        write!(formatter, "{value}")
    }
}

/// An inclusive `[from, to]` range as written in a token.
#[derive(Clone, Debug, PartialEq)]
pub struct QueryRange {
    /// Lower end.
    pub from: Bound,
    /// Upper end.
    pub to: Bound,
}

impl QueryRange {
    /// Build a range from two bounds.
    pub const fn new(from: Bound, to: Bound) -> Self {
        Self { from, to }
    }

    /// Resolve both ends to numbers.
    pub fn decode(&self, breakpoints: Option<&Breakpoints>) -> DecodedRange {
        DecodedRange {
            from: self.from.resolve(breakpoints),
            to: self.to.resolve(breakpoints),
        }
    }
}

impl fmt::Display for QueryRange {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[{}, {}]", self.from, self.to)
    }
}

/// A bound as passed to the constructors in [`crate::encode`].
///
/// `Omitted` and `Null` differ only for upper bounds: an omitted upper bound is
/// unbounded, a null one is `0`. Both give `0` as a lower bound.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum BoundArg {
    /// No value given; the default for the position applies.
    #[default]
    Omitted,
    /// Explicitly empty; always `0`.
    Null,
    /// A literal number.
    Number(f64),
    /// A breakpoint name. Only media queries keep it; container queries use `0`.
    /// Names are limited to ASCII letters, digits and `_`; a media query using
    /// any other name never matches.
    Breakpoint(String),
}

impl BoundArg {
    pub(crate) fn into_media_lower(self) -> Bound {
        match self {
            Self::Omitted | Self::Null => Bound::ZERO,
            Self::Number(value) => Bound::Value(value),
            Self::Breakpoint(name) => Bound::Breakpoint(name),
        }
    }

    pub(crate) fn into_media_upper(self) -> Bound {
        match self {
            Self::Omitted => Bound::UNBOUNDED,
            Self::Null => Bound::ZERO,
            Self::Number(value) => Bound::Value(value),
            Self::Breakpoint(name) => Bound::Breakpoint(name),
        }
    }

    pub(crate) fn into_container_lower(self) -> Bound {
        match self {
            Self::Number(value) => Bound::Value(value),
            Self::Omitted | Self::Null | Self::Breakpoint(_) => Bound::ZERO,
        }
    }

    pub(crate) fn into_container_upper(self) -> Bound {
        match self {
            Self::Omitted => Bound::UNBOUNDED,
            Self::Number(value) => Bound::Value(value),
            Self::Null | Self::Breakpoint(_) => Bound::ZERO,
        }
    }
}

impl From<f64> for BoundArg {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<f32> for BoundArg {
    fn from(value: f32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i32> for BoundArg {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for BoundArg {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for BoundArg {
    fn from(name: &str) -> Self {
        Self::Breakpoint(name.to_owned())
    }
}

impl From<String> for BoundArg {
    fn from(name: String) -> Self {
        Self::Breakpoint(name)
    }
}

impl<T: Into<Self>> From<Option<T>> for BoundArg {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
