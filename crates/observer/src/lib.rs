//! Size observers deciding when resolved styles are stale.
//!
//! - [`ContainerBreakpoints`] tracks the container-width thresholds its
//!   listeners depend on and notifies them only when a layout pass crosses one.
//! - [`ScreenSizeCache`] keeps a viewport size and only accepts a new one when
//!   the set of matching media queries changes.

#![forbid(unsafe_code)]

mod container;
mod screen;

pub use container::{ContainerBreakpoints, ListenerId};
pub use screen::ScreenSizeCache;
