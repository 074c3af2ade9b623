//! Constructors for canonical query tokens.
//!
//! ```
//! use responsive_queries::encode::{BoundArg, container, media};
//!
//! assert_eq!(container::width(100, 200).description(), ":c:w[100, 200]");
//! assert_eq!(container::width(BoundArg::Omitted, BoundArg::Omitted).description(), ":c:w[0, Infinity]");
//! assert_eq!(media::only_width("xs", "lg").description(), ":m:w[:b[xs], :b[lg]]");
//! assert_eq!(
//!     media::width(0, 100).and_height(500, BoundArg::Omitted).description(),
//!     ":m:w[0, 100]:h[500, Infinity]"
//! );
//! ```

pub use crate::bound::BoundArg;

/// Container width queries.
pub mod container {
    use super::BoundArg;
    use crate::bound::QueryRange;
    use crate::token::{ContainerQuery, QueryToken};

    /// `:c:w[from, to]`. Breakpoint names are not supported for containers and
    /// are written as `0`.
    pub fn width(from: impl Into<BoundArg>, to: impl Into<BoundArg>) -> QueryToken {
        let range = QueryRange::new(
            from.into().into_container_lower(),
            to.into().into_container_upper(),
        );
        QueryToken::container(ContainerQuery::new(range))
    }
}

/// Viewport queries.
pub mod media {
    use super::BoundArg;
    use crate::bound::QueryRange;
    use crate::token::{MediaQuery, QueryToken};

    fn range(from: impl Into<BoundArg>, to: impl Into<BoundArg>) -> QueryRange {
        QueryRange::new(from.into().into_media_lower(), to.into().into_media_upper())
    }

    /// `:m:w[from, to]`.
    pub fn only_width(from: impl Into<BoundArg>, to: impl Into<BoundArg>) -> QueryToken {
        QueryToken::media(MediaQuery::only_width(range(from, to)))
    }

    /// `:m:h[from, to]`.
    pub fn only_height(from: impl Into<BoundArg>, to: impl Into<BoundArg>) -> QueryToken {
        QueryToken::media(MediaQuery::only_height(range(from, to)))
    }

    /// Start a combined query with the width range.
    pub fn width(from: impl Into<BoundArg>, to: impl Into<BoundArg>) -> WidthQuery {
        WidthQuery {
            width: range(from, to),
        }
    }

    /// Start a combined query with the height range.
    pub fn height(from: impl Into<BoundArg>, to: impl Into<BoundArg>) -> HeightQuery {
        HeightQuery {
            height: range(from, to),
        }
    }

    /// A width range waiting for its height.
    #[derive(Clone, Debug)]
    #[must_use = "finish the query with `and_height`"]
    pub struct WidthQuery {
        width: QueryRange,
    }

    impl WidthQuery {
        /// `:m:w[..]:h[from, to]`.
        pub fn and_height(self, from: impl Into<BoundArg>, to: impl Into<BoundArg>) -> QueryToken {
            QueryToken::media(MediaQuery::both(self.width, range(from, to)))
        }
    }

    /// A height range waiting for its width.
    #[derive(Clone, Debug)]
    #[must_use = "finish the query with `and_width`"]
    pub struct HeightQuery {
        height: QueryRange,
    }

    impl HeightQuery {
        /// `:m:w[from, to]:h[..]`; width is always written first.
        pub fn and_width(self, from: impl Into<BoundArg>, to: impl Into<BoundArg>) -> QueryToken {
            QueryToken::media(MediaQuery::both(range(from, to), self.height))
        }
    }
}
