//! Volknob GUI - demo window for the knob and volume bar widgets.

use clap::Parser;
use eframe::egui;
use std::path::PathBuf;
use volknob_config::{ConfigOverrides, WidgetConfig};
use volknob_gui::VolknobApp;

/// Volknob demo application.
#[derive(Parser, Debug)]
#[command(name = "volknob-gui")]
#[command(about = "Rotary knob driving a segmented volume bar")]
#[command(version)]
struct Args {
    /// Configuration file (defaults to the user config directory if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Dead-zone half-width in degrees, overrides the config file
    #[arg(long)]
    limiting_angle: Option<f32>,

    /// Number of volume bar segments, overrides the config file
    #[arg(long)]
    bar_count: Option<usize>,

    /// Starting volume level (0.0 to 1.0), overrides the config file
    #[arg(long)]
    volume: Option<f32>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

impl Args {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            limiting_angle: self.limiting_angle,
            bar_count: self.bar_count,
            initial_volume: self.volume,
        }
    }
}

fn main() -> eframe::Result<()> {
    use tracing_subscriber::EnvFilter;

    // Initialize tracing subscriber; bridge legacy log:: calls from eframe/egui
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
    tracing_log::LogTracer::init().ok();

    let args = Args::parse();

    tracing::info!("Starting Volknob GUI");

    let config = match WidgetConfig::resolve(args.config.as_deref(), &args.overrides()) {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(%err, "invalid configuration, falling back to defaults");
            WidgetConfig::default()
        }
    };

    if args.print_config {
        match config.to_toml() {
            Ok(text) => print!("{text}"),
            Err(err) => tracing::error!(%err, "could not serialize configuration"),
        }
        return Ok(());
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 240.0])
            .with_min_inner_size([360.0, 200.0])
            .with_title("Volknob"),
        ..Default::default()
    };

    eframe::run_native(
        "Volknob",
        options,
        Box::new(move |cc| Ok(Box::new(VolknobApp::new(cc, config)))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_have_no_overrides() {
        let args = Args::try_parse_from(["volknob-gui"]).unwrap();
        assert_eq!(args.overrides(), ConfigOverrides::default());
        assert!(args.config.is_none());
        assert!(!args.print_config);
    }

    #[test]
    fn test_overrides_from_flags() {
        let args = Args::try_parse_from([
            "volknob-gui",
            "--limiting-angle",
            "30",
            "--bar-count",
            "12",
            "--volume",
            "0.4",
            "--config",
            "/tmp/volknob.toml",
        ])
        .unwrap();
        let overrides = args.overrides();
        assert_eq!(overrides.limiting_angle, Some(30.0));
        assert_eq!(overrides.bar_count, Some(12));
        assert_eq!(overrides.initial_volume, Some(0.4));
        assert_eq!(args.config, Some(PathBuf::from("/tmp/volknob.toml")));
    }

    #[test]
    fn test_rejects_non_numeric_bar_count() {
        assert!(Args::try_parse_from(["volknob-gui", "--bar-count", "lots"]).is_err());
    }
}
