//! Layout configuration.
//!
//! Defaults reproduce the reference timetable: a 07:30–20:30 window,
//! a 6 % minimum block width and four lanes per day.
//!
//! ```
//! use lane_timetable::config::LayoutConfig;
//!
//! let config = LayoutConfig::from_toml_str(
//!     r#"
//!     max_lanes = 3
//!     min_width_pct = 5.0
//!     [window]
//!     start_min = 480
//!     span_min = 720
//!     "#,
//! ).unwrap();
//! assert_eq!(config.max_lanes, 3);
//! assert_eq!(config.window.end_min(), 1200);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::ReferenceWindow;

/// Default lane cap per day.
pub const DEFAULT_MAX_LANES: usize = 4;

/// Default minimum block width (percent of the window).
pub const DEFAULT_MIN_WIDTH_PCT: f64 = 6.0;

/// Parameters of the lane layout.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LayoutConfig {
    /// Timeline span used for percentage geometry.
    pub window: ReferenceWindow,
    /// Minimum rendered width of any session (percent).
    pub min_width_pct: f64,
    /// Maximum lanes per day. Zero excludes every session.
    pub max_lanes: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            window: ReferenceWindow::default(),
            min_width_pct: DEFAULT_MIN_WIDTH_PCT,
            max_lanes: DEFAULT_MAX_LANES,
        }
    }
}

impl LayoutConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the reference window.
    pub fn with_window(mut self, window: ReferenceWindow) -> Self {
        self.window = window;
        self
    }

    /// Sets the minimum block width (percent).
    pub fn with_min_width(mut self, min_width_pct: f64) -> Self {
        self.min_width_pct = min_width_pct;
        self
    }

    /// Sets the lane cap.
    pub fn with_max_lanes(mut self, max_lanes: usize) -> Self {
        self.max_lanes = max_lanes;
        self
    }

    /// Checks that the window span is positive and the width floor is a
    /// finite, non-negative percentage.
    pub fn validate(&self) -> Result<()> {
        if self.window.span_min <= 0 {
            return Err(Error::InvalidConfig(format!(
                "window span must be positive, got {} minutes",
                self.window.span_min
            )));
        }
        if !self.min_width_pct.is_finite() || self.min_width_pct < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "minimum width must be a non-negative percentage, got {}",
                self.min_width_pct
            )));
        }
        Ok(())
    }

    /// Parses and validates a TOML configuration. Missing keys take
    /// their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: LayoutConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }
}
