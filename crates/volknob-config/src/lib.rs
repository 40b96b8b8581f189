//! Configuration loading and validation for volknob widgets.
//!
//! The knob and bar read a handful of constants: the dead-zone half-width,
//! the number of bar segments and a few layout dimensions. This crate reads
//! them from a TOML file, applies command-line overrides and rejects values
//! the widgets cannot honor before they reach [`volknob_core`].
//!
//! # Features
//!
//! - **Widget config**: [`WidgetConfig`] with defaults matching the stock widget
//! - **Validation**: Range checks that turn bad files into [`ValidationError`]s
//! - **Paths**: Platform-specific location of the user config file
//!
//! # Example
//!
//! ```rust
//! use volknob_config::{ConfigOverrides, WidgetConfig};
//!
//! let config = WidgetConfig::from_toml("limiting_angle = 30.0\nbar_count = 12").unwrap();
//! assert_eq!(config.bar_count, 12);
//!
//! let config = config.with_overrides(&ConfigOverrides {
//!     bar_count: Some(16),
//!     ..Default::default()
//! });
//! assert_eq!(config.bar_count, 16);
//! assert_eq!(config.mapper().rest_angle(), 30.0);
//! ```

mod error;
mod widget_config;

/// Platform-specific paths for the configuration file.
pub mod paths;

/// Widget configuration validation.
pub mod validation;

pub use error::ConfigError;
pub use paths::{default_config_path, find_config, user_config_dir};
pub use validation::{ValidationError, validate};
pub use widget_config::{ConfigOverrides, WidgetConfig};
