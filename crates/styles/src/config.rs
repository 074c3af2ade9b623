//! Theme configuration passed explicitly into resolution.

use anyhow::{Context as _, Result};
use responsive_queries::{Breakpoints, Measurement};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::resolve::ResolveContext;

/// A theme value and its breakpoint table.
///
/// ```json
/// { "theme": { "primary": "#3366ff" }, "breakpoints": { "sm": 576, "md": 768 } }
/// ```
///
/// Both keys are optional.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig<T = Value> {
    /// Handed to themed stylesheet entries.
    pub theme: Option<T>,
    /// Resolves `:b[name]` bounds in media queries.
    pub breakpoints: Option<Breakpoints>,
}

impl<T> Default for ThemeConfig<T> {
    fn default() -> Self {
        Self {
            theme: None,
            breakpoints: None,
        }
    }
}

impl<T> ThemeConfig<T> {
    /// A resolve context using this configuration's breakpoints.
    pub fn context(&self, measurement: Measurement) -> ResolveContext<'_> {
        ResolveContext {
            measurement,
            breakpoints: self.breakpoints.as_ref(),
            selections: None,
        }
    }

    #[inline]
    pub const fn theme(&self) -> Option<&T> {
        self.theme.as_ref()
    }
}

impl<T: DeserializeOwned> ThemeConfig<T> {
    /// Load a configuration from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("invalid theme configuration")
    }
}
