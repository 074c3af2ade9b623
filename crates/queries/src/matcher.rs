//! Evaluating tokens against live measurements.

use log::trace;
use serde::{Deserialize, Serialize};

use crate::breakpoints::Breakpoints;
use crate::decode::{DecodedContainerQuery, DecodedMediaQuery};
use crate::token::{Condition, QueryToken};

/// Current viewport size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScreenSize {
    /// Viewport width.
    pub width: f64,
    /// Viewport height.
    pub height: f64,
}

impl ScreenSize {
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A consistent snapshot of the sizes queries are evaluated against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Width of the closest container, `0` when unknown.
    #[serde(default)]
    pub container_width: f64,
    /// Viewport size, absent when unavailable.
    #[serde(default)]
    pub screen_size: Option<ScreenSize>,
}

impl Measurement {
    #[inline]
    pub const fn new(container_width: f64, screen_size: Option<ScreenSize>) -> Self {
        Self {
            container_width,
            screen_size,
        }
    }

    /// Only a container width; media queries will not match.
    #[inline]
    pub const fn container(container_width: f64) -> Self {
        Self::new(container_width, None)
    }
}

/// `from <= container_width <= to` for a valid container query.
pub fn match_container(decoded: &DecodedContainerQuery, container_width: f64) -> bool {
    if !decoded.is_valid() {
        return false;
    }
    decoded
        .width
        .is_some_and(|width| width.contains(container_width))
}

/// Every present dimension of a valid media query contains the screen size.
/// Without a screen size nothing matches.
pub fn match_media(decoded: &DecodedMediaQuery, screen_size: Option<ScreenSize>) -> bool {
    let Some(screen) = screen_size else {
        return false;
    };
    if !decoded.is_valid() {
        return false;
    }
    decoded.width.is_none_or(|width| width.contains(screen.width))
        && decoded.height.is_none_or(|height| height.contains(screen.height))
}

/// Evaluate any token. A token is a container query or a media query, never
/// both; unrecognized tokens never match.
pub fn match_any(
    token: &QueryToken,
    measurement: &Measurement,
    breakpoints: Option<&Breakpoints>,
) -> bool {
    match token.condition() {
        Condition::Container(_) => token
            .decode_container()
            .is_some_and(|decoded| match_container(&decoded, measurement.container_width)),
        Condition::Media(_) => token
            .decode_media(breakpoints)
            .is_some_and(|decoded| match_media(&decoded, measurement.screen_size)),
        Condition::Unrecognized => {
            trace!("unrecognized query {token} never matches");
            false
        }
    }
}

impl QueryToken {
    /// Shorthand for [`match_any`].
    #[inline]
    pub fn matches(&self, measurement: &Measurement, breakpoints: Option<&Breakpoints>) -> bool {
        match_any(self, measurement, breakpoints)
    }
}
