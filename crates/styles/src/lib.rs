//! Responsive style resolution.
//!
//! A [`StyleNode`] holds plain properties, conditional sub-styles keyed by
//! size queries, and named variant groups. [`resolve_style`] flattens a node
//! for one [`ResolveContext`] (container width, screen size, breakpoint table
//! and variant selections) into a plain [`ResolvedStyle`].
//!
//! Merge order inside a node is fixed: plain properties first, then the
//! selected variants in group order, then every matching conditional entry in
//! declaration order. Later sources overwrite earlier ones key by key.
//!
//! ```
//! use responsive_styles::{ResolveContext, StyleNode, resolve_style};
//! use responsive_styles::encode::{BoundArg, container};
//! use responsive_styles::Measurement;
//!
//! let node = StyleNode::new()
//!     .property("backgroundColor", "blue")
//!     .when(
//!         container::width(700, BoundArg::Omitted),
//!         StyleNode::new().property("backgroundColor", "red"),
//!     );
//! let resolved = resolve_style(&node, &ResolveContext::new(Measurement::container(705.0)));
//! assert_eq!(resolved["backgroundColor"], "red");
//! ```

#![forbid(unsafe_code)]

mod config;
mod node;
mod query_map;
mod resolve;
mod selection;
mod stylesheet;
mod wire;

pub use config::ThemeConfig;
pub use node::{DEFAULT_VARIANT, StyleNode, StyleValue, VariantGroup};
pub use query_map::QueryMap;
pub use resolve::{ResolveContext, ResolvedStyle, resolve_style, resolve_variant};
pub use selection::{VariantSelection, VariantSelections};
pub use stylesheet::{ResolvedStylesheet, StyleEntry, Stylesheet};
pub use wire::VARIANTS_KEY;

pub use responsive_queries::{
    Breakpoints, Measurement, QueryKind, QueryToken, ScreenSize, encode,
};
