//! Widget configuration file format and resolution.

use serde::{Deserialize, Serialize};
use std::path::Path;
use volknob_core::{AngleMapper, BarModel, DEFAULT_BAR_COUNT, DEFAULT_LIMITING_ANGLE};

use crate::error::ConfigError;
use crate::paths;
use crate::validation::validate;

/// Constants shared by the knob and the volume bar.
///
/// Every field is optional in the file; missing fields take the defaults
/// below.
///
/// # TOML Format
///
/// ```toml
/// limiting_angle = 25.0   # dead-zone half-width, degrees, [0, 180)
/// bar_count = 20          # volume bar segments, >= 1
/// knob_diameter = 100.0   # px
/// bar_height = 30.0       # px
/// spacing = 20.0          # px between knob and bar
/// initial_volume = 0.0    # starting level, [0, 1]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WidgetConfig {
    /// Dead-zone half-width in degrees.
    pub limiting_angle: f32,
    /// Number of volume bar segments.
    pub bar_count: usize,
    /// Knob diameter in points.
    pub knob_diameter: f32,
    /// Volume bar height in points.
    pub bar_height: f32,
    /// Horizontal gap between knob and bar in points.
    pub spacing: f32,
    /// Volume level at startup; the knob is pointed to match.
    pub initial_volume: f32,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            limiting_angle: DEFAULT_LIMITING_ANGLE,
            bar_count: DEFAULT_BAR_COUNT,
            knob_diameter: 100.0,
            bar_height: 30.0,
            spacing: 20.0,
            initial_volume: 0.0,
        }
    }
}

/// Values that take precedence over the file, typically from the command line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    /// Replacement dead-zone half-width.
    pub limiting_angle: Option<f32>,
    /// Replacement segment count.
    pub bar_count: Option<usize>,
    /// Replacement starting volume.
    pub initial_volume: Option<f32>,
}

impl WidgetConfig {
    /// Load and validate a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        let config = Self::from_toml(&content)?;
        tracing::debug!(path = %path.display(), ?config, "loaded widget config");
        Ok(config)
    }

    /// Parse and validate a configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str)?;
        validate(&config)?;
        Ok(config)
    }

    /// Serialize to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Apply overrides on top of this configuration.
    ///
    /// The result is not re-validated; use [`resolve`](Self::resolve) for
    /// the full pipeline.
    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Self {
        if let Some(angle) = overrides.limiting_angle {
            self.limiting_angle = angle;
        }
        if let Some(count) = overrides.bar_count {
            self.bar_count = count;
        }
        if let Some(volume) = overrides.initial_volume {
            self.initial_volume = volume;
        }
        self
    }

    /// Build the effective configuration.
    ///
    /// Precedence, lowest to highest: defaults, the file (`path`, or the
    /// default location when `path` is `None` and a file exists there),
    /// then `overrides`. An explicit `path` that cannot be read is an error;
    /// a missing default file is not.
    pub fn resolve(path: Option<&Path>, overrides: &ConfigOverrides) -> Result<Self, ConfigError> {
        let base = match path {
            Some(path) => Self::load(path)?,
            None => match paths::find_config() {
                Some(found) => Self::load(found)?,
                None => Self::default(),
            },
        };
        let config = base.with_overrides(overrides);
        validate(&config)?;
        Ok(config)
    }

    /// Angle mapper for this configuration.
    ///
    /// Only meaningful for a validated configuration.
    pub fn mapper(&self) -> AngleMapper {
        AngleMapper::new(self.limiting_angle)
    }

    /// Volume bar model for this configuration.
    ///
    /// Only meaningful for a validated configuration.
    pub fn bar_model(&self) -> BarModel {
        BarModel::new(self.bar_count)
    }
}
