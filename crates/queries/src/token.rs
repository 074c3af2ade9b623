//! Query tokens: immutable size conditions with a canonical string form.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use std::sync::Arc;

use log::debug;

use crate::bound::QueryRange;
use crate::parse::parse_condition;

/// A condition on the width of the enclosing container.
#[derive(Clone, Debug, PartialEq)]
pub struct ContainerQuery {
    width: QueryRange,
}

impl ContainerQuery {
    /// Container queries only carry literal bounds; see [`crate::encode::container`].
    pub(crate) const fn new(width: QueryRange) -> Self {
        Self { width }
    }

    /// The width range.
    pub const fn width(&self) -> &QueryRange {
        &self.width
    }
}

impl fmt::Display for ContainerQuery {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, ":c:w{}", self.width)
    }
}

/// A condition on the viewport. At least one dimension is present; with both,
/// both ranges must hold.
#[derive(Clone, Debug, PartialEq)]
pub struct MediaQuery {
    width: Option<QueryRange>,
    height: Option<QueryRange>,
}

impl MediaQuery {
    /// Returns `None` when neither dimension is given.
    pub(crate) fn new(width: Option<QueryRange>, height: Option<QueryRange>) -> Option<Self> {
        (width.is_some() || height.is_some()).then_some(Self { width, height })
    }

    pub(crate) const fn only_width(width: QueryRange) -> Self {
        Self {
            width: Some(width),
            height: None,
        }
    }

    pub(crate) const fn only_height(height: QueryRange) -> Self {
        Self {
            width: None,
            height: Some(height),
        }
    }

    pub(crate) const fn both(width: QueryRange, height: QueryRange) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
        }
    }

    /// The width range, if constrained.
    pub const fn width(&self) -> Option<&QueryRange> {
        self.width.as_ref()
    }

    /// The height range, if constrained.
    pub const fn height(&self) -> Option<&QueryRange> {
        self.height.as_ref()
    }
}

impl fmt::Display for MediaQuery {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(":m")?;
        if let Some(width) = &self.width {
            write!(formatter, ":w{width}")?;
        }
        if let Some(height) = &self.height {
            write!(formatter, ":h{height}")?;
        }
        Ok(())
    }
}

/// The decoded shape of a token.
#[derive(Clone, Debug, PartialEq)]
pub enum Condition {
    /// Matched against the container width.
    Container(ContainerQuery),
    /// Matched against the screen size.
    Media(MediaQuery),
    /// Text outside the grammar. Never matches.
    Unrecognized,
}

/// Classification of a token string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QueryKind {
    /// `:c:...`
    Container,
    /// `:m:...`
    Media,
    /// Anything else.
    None,
}

/// An opaque size condition used as the key of a conditional style entry.
///
/// Two tokens are equal when their canonical strings are equal, whichever way
/// they were built. Cloning is cheap.
#[derive(Clone, Debug)]
pub struct QueryToken {
    condition: Condition,
    canonical: Arc<str>,
}

impl QueryToken {
    /// Token for a container query.
    pub fn container(query: ContainerQuery) -> Self {
        Self::from_canonical(query.to_string())
    }

    /// Token for a media query.
    ///
    /// Breakpoint names outside `[A-Za-z0-9_]` cannot be read back from the
    /// canonical string, so such a query becomes an unrecognized token.
    pub fn media(query: MediaQuery) -> Self {
        Self::from_canonical(query.to_string())
    }

    /// A built token carries exactly the condition its string parses to.
    fn from_canonical(canonical: String) -> Self {
        let condition = parse_condition(&canonical);
        if condition == Condition::Unrecognized {
            debug!("query {canonical} is outside the token grammar and will never match");
        }
        Self {
            condition,
            canonical: canonical.into(),
        }
    }

    /// Read a token from its string form.
    ///
    /// This never fails: text outside the grammar becomes an unrecognized token
    /// that keeps its text as description and never matches.
    pub fn parse(text: &str) -> Self {
        let condition = parse_condition(text);
        let canonical = match &condition {
            Condition::Container(query) => query.to_string().into(),
            Condition::Media(query) => query.to_string().into(),
            Condition::Unrecognized => text.into(),
        };
        Self {
            condition,
            canonical,
        }
    }

    /// The canonical string, e.g. `:c:w[100, 200]`.
    #[inline]
    pub fn description(&self) -> &str {
        &self.canonical
    }

    /// The decoded shape.
    #[inline]
    pub const fn condition(&self) -> &Condition {
        &self.condition
    }

    /// Container, media or neither.
    pub const fn kind(&self) -> QueryKind {
        match self.condition {
            Condition::Container(_) => QueryKind::Container,
            Condition::Media(_) => QueryKind::Media,
            Condition::Unrecognized => QueryKind::None,
        }
    }
}

impl fmt::Display for QueryToken {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.canonical)
    }
}

impl PartialEq for QueryToken {
    fn eq(&self, other: &Self) -> bool {
        self.canonical == other.canonical
    }
}

impl Eq for QueryToken {}

impl Hash for QueryToken {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical.hash(state);
    }
}

impl PartialOrd for QueryToken {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueryToken {
    fn cmp(&self, other: &Self) -> Ordering {
        self.canonical.cmp(&other.canonical)
    }
}

/// Classify a token string as a container query, a media query or neither.
pub fn classify(text: &str) -> QueryKind {
    QueryToken::parse(text).kind()
}
