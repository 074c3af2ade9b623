//! Viewport size cache keyed on matching media queries.

use std::collections::BTreeSet;

use log::debug;
use responsive_queries::{Breakpoints, Measurement, QueryKind, QueryToken, ScreenSize};

/// Cached viewport size for a set of media queries.
///
/// Resizes that do not change which queries match are swallowed, so styles
/// only need re-resolving when [`ScreenSizeCache::update`] returns `true`.
#[derive(Clone, Debug)]
pub struct ScreenSizeCache {
    media: BTreeSet<QueryToken>,
    breakpoints: Option<Breakpoints>,
    size: ScreenSize,
    matching: BTreeSet<QueryToken>,
}

impl ScreenSizeCache {
    /// Watch the media queries among `queries`. Other tokens are ignored.
    pub fn new<I>(queries: I, breakpoints: Option<Breakpoints>, size: ScreenSize) -> Self
    where
        I: IntoIterator<Item = QueryToken>,
    {
        let media = queries
            .into_iter()
            .filter(|query| query.kind() == QueryKind::Media)
            .collect();
        let mut cache = Self {
            media,
            breakpoints,
            size,
            matching: BTreeSet::new(),
        };
        cache.matching = cache.matching_for(size);
        cache
    }

    #[inline]
    pub const fn size(&self) -> ScreenSize {
        self.size
    }

    /// Media queries matching the cached size.
    pub fn matching(&self) -> impl Iterator<Item = &QueryToken> {
        self.matching.iter()
    }

    fn matching_for(&self, size: ScreenSize) -> BTreeSet<QueryToken> {
        let measurement = Measurement::new(0.0, Some(size));
        self.media
            .iter()
            .filter(|query| query.matches(&measurement, self.breakpoints.as_ref()))
            .cloned()
            .collect()
    }

    /// Offer a new viewport size. The cache only takes it when some watched
    /// query starts or stops matching, and reports whether it did.
    pub fn update(&mut self, size: ScreenSize) -> bool {
        let matching = self.matching_for(size);
        if self.matching.symmetric_difference(&matching).next().is_none() {
            return false;
        }
        debug!(
            "screen size {}x{} changes matching media queries ({} -> {})",
            size.width,
            size.height,
            self.matching.len(),
            matching.len()
        );
        self.size = size;
        self.matching = matching;
        true
    }
}
