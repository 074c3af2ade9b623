//! Query tokens a style tree depends on, split by the observer that serves them.

use std::collections::BTreeSet;

use log::trace;
use responsive_queries::{QueryKind, QueryToken, extract_container_thresholds};

/// Container queries are served by the enclosing container's width observer,
/// media queries by the screen size observer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryMap {
    /// Tokens evaluated against the container width.
    pub container: BTreeSet<QueryToken>,
    /// Tokens evaluated against the screen size.
    pub media: BTreeSet<QueryToken>,
}

impl QueryMap {
    /// File a token under its kind. Unrecognized tokens need no observer.
    pub fn insert(&mut self, token: QueryToken) {
        match token.kind() {
            QueryKind::Container => {
                self.container.insert(token);
            }
            QueryKind::Media => {
                self.media.insert(token);
            }
            QueryKind::None => trace!("no observer needed for unrecognized query {token}"),
        }
    }

    /// Whether no observer is needed at all.
    pub fn is_empty(&self) -> bool {
        self.container.is_empty() && self.media.is_empty()
    }

    /// Container widths worth observing; see [`extract_container_thresholds`].
    pub fn container_thresholds(&self) -> Vec<f64> {
        extract_container_thresholds(&self.container)
    }
}

impl Extend<QueryToken> for QueryMap {
    fn extend<I: IntoIterator<Item = QueryToken>>(&mut self, iter: I) {
        for token in iter {
            self.insert(token);
        }
    }
}
