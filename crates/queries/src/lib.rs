//! Size queries for responsive styles.
//!
//! A query token is a compact, canonical description of a size condition:
//!
//! ```text
//! :c:w[<from>, <to>]                  container width
//! :m:w[<from>, <to>]                  viewport width
//! :m:h[<from>, <to>]                  viewport height
//! :m:w[<from>, <to>]:h[<from>, <to>]  viewport width and height
//! :b[<name>]                          breakpoint name used as a media bound
//! ```
//!
//! Bounds are inclusive. An omitted lower bound is `0`, an omitted upper bound
//! is `Infinity`. Breakpoint names are resolved against a [`Breakpoints`]
//! table when a token is decoded; unknown names resolve to `0`.
//!
//! The crate is split into:
//! - [`encode`]: constructors producing canonical tokens,
//! - [`QueryToken::parse`], [`classify`], [`decode_container_query`] and
//!   [`decode_media_query`]: the reverse direction,
//! - [`match_container`], [`match_media`] and [`match_any`]: evaluation
//!   against live measurements,
//! - [`extract_container_thresholds`]: the widths a container observer has to
//!   watch for a set of tokens.

#![forbid(unsafe_code)]

mod bound;
mod breakpoints;
mod decode;
pub mod encode;
mod matcher;
mod parse;
mod token;

pub use bound::{Bound, BoundArg, QueryRange};
pub use breakpoints::{Breakpoints, extract_container_thresholds};
pub use decode::{
    DecodedContainerQuery, DecodedMediaQuery, DecodedRange, decode_container_query,
    decode_media_query,
};
pub use matcher::{Measurement, ScreenSize, match_any, match_container, match_media};
pub use token::{Condition, ContainerQuery, MediaQuery, QueryKind, QueryToken, classify};
