//! Range checks for [`WidgetConfig`](crate::WidgetConfig).
//!
//! The core constructors treat out-of-range constants as programming errors.
//! Anything read from disk or the command line passes through [`validate`]
//! first, so bad input surfaces as a [`ValidationError`] instead.

use crate::widget_config::WidgetConfig;
use thiserror::Error;

/// Validation error types.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// Limiting angle outside `[0, 180)`.
    #[error("limiting angle {0} out of range [0, 180)")]
    LimitingAngleOutOfRange(f32),

    /// Bar with no segments.
    #[error("bar count must be at least 1")]
    ZeroBarCount,

    /// A layout dimension that is zero, negative or not finite.
    #[error("{field} must be a positive number, got {value}")]
    NonPositiveDimension {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f32,
    },

    /// Starting volume outside `[0, 1]`.
    #[error("initial volume {0} out of range [0, 1]")]
    VolumeOutOfRange(f32),
}

/// Check every field of `config`.
///
/// Returns the first problem found, in field declaration order.
pub fn validate(config: &WidgetConfig) -> Result<(), ValidationError> {
    let angle = config.limiting_angle;
    if !(0.0..180.0).contains(&angle) {
        return Err(ValidationError::LimitingAngleOutOfRange(angle));
    }
    if config.bar_count == 0 {
        return Err(ValidationError::ZeroBarCount);
    }
    for (field, value) in [
        ("knob_diameter", config.knob_diameter),
        ("bar_height", config.bar_height),
    ] {
        if !(value.is_finite() && value > 0.0) {
            return Err(ValidationError::NonPositiveDimension { field, value });
        }
    }
    // Spacing may be zero.
    if !(config.spacing.is_finite() && config.spacing >= 0.0) {
        return Err(ValidationError::NonPositiveDimension {
            field: "spacing",
            value: config.spacing,
        });
    }
    if !(0.0..=1.0).contains(&config.initial_volume) {
        return Err(ValidationError::VolumeOutOfRange(config.initial_volume));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(validate(&WidgetConfig::default()), Ok(()));
    }

    #[test]
    fn limiting_angle_bounds() {
        let mut config = WidgetConfig::default();
        config.limiting_angle = 0.0;
        assert!(validate(&config).is_ok());

        config.limiting_angle = 180.0;
        assert_eq!(
            validate(&config),
            Err(ValidationError::LimitingAngleOutOfRange(180.0))
        );

        config.limiting_angle = -1.0;
        assert!(validate(&config).is_err());

        config.limiting_angle = f32::NAN;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn zero_bar_count_rejected() {
        let config = WidgetConfig {
            bar_count: 0,
            ..WidgetConfig::default()
        };
        assert_eq!(validate(&config), Err(ValidationError::ZeroBarCount));
    }

    #[test]
    fn dimensions_must_be_positive() {
        let config = WidgetConfig {
            knob_diameter: 0.0,
            ..WidgetConfig::default()
        };
        assert_eq!(
            validate(&config),
            Err(ValidationError::NonPositiveDimension {
                field: "knob_diameter",
                value: 0.0
            })
        );

        let config = WidgetConfig {
            bar_height: f32::INFINITY,
            ..WidgetConfig::default()
        };
        assert!(matches!(
            validate(&config),
            Err(ValidationError::NonPositiveDimension { field: "bar_height", .. })
        ));
    }

    #[test]
    fn zero_spacing_allowed_negative_rejected() {
        let mut config = WidgetConfig {
            spacing: 0.0,
            ..WidgetConfig::default()
        };
        assert!(validate(&config).is_ok());
        config.spacing = -4.0;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn initial_volume_bounds() {
        let mut config = WidgetConfig {
            initial_volume: 1.0,
            ..WidgetConfig::default()
        };
        assert!(validate(&config).is_ok());
        config.initial_volume = 1.5;
        assert_eq!(
            validate(&config),
            Err(ValidationError::VolumeOutOfRange(1.5))
        );
        config.initial_volume = f32::NAN;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ValidationError::LimitingAngleOutOfRange(200.0).to_string(),
            "limiting angle 200 out of range [0, 180)"
        );
        assert_eq!(
            ValidationError::NonPositiveDimension {
                field: "bar_height",
                value: -1.0
            }
            .to_string(),
            "bar_height must be a positive number, got -1"
        );
    }
}
