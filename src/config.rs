//! Command line configuration for the desktop shell.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use eventeasy_core::{AssetRef, ROTATION_PERIOD};

/// Event Easy - discover events near you
#[derive(Parser, Debug)]
#[command(name = "eventeasy-desktop")]
#[command(about = "Event Easy - discover amazing events near you")]
pub struct Args {
    /// Window width in logical pixels
    #[arg(long, default_value_t = 420.0)]
    pub width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 860.0)]
    pub height: f64,

    /// Directory holding the hero and event images
    #[arg(short, long, default_value = "assets")]
    pub assets: PathBuf,

    /// How long each hero background stays on screen, in milliseconds
    #[arg(long, default_value_t = ROTATION_PERIOD.as_millis() as u64, value_parser = clap::value_parser!(u64).range(1..))]
    pub rotation_ms: u64,

    /// Tracing filter directive (overrides RUST_LOG)
    #[arg(long)]
    pub log_filter: Option<String>,
}

/// Settings components read at runtime.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub assets_dir: PathBuf,
    pub rotation_period: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("assets"),
            rotation_period: ROTATION_PERIOD,
        }
    }
}

impl From<&Args> for AppConfig {
    fn from(args: &Args) -> Self {
        Self {
            assets_dir: args.assets.clone(),
            rotation_period: Duration::from_millis(args.rotation_ms),
        }
    }
}

impl AppConfig {
    /// URL the webview loads for a bundled image
    pub fn asset_url(&self, asset: AssetRef) -> String {
        self.assets_dir.join(asset.file_name()).to_string_lossy().replace('\\', "/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eventeasy_core::HERO_IMAGES;

    #[test]
    fn defaults_match_rotation_period() {
        let args = Args::parse_from(["eventeasy-desktop"]);
        let config = AppConfig::from(&args);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.rotation_period, Duration::from_millis(8000));
    }

    #[test]
    fn flags_override_defaults() {
        let args = Args::parse_from([
            "eventeasy-desktop",
            "--assets",
            "/opt/eventeasy/img",
            "--rotation-ms",
            "2500",
            "--log-filter",
            "eventeasy=debug",
        ]);
        let config = AppConfig::from(&args);
        assert_eq!(config.assets_dir, PathBuf::from("/opt/eventeasy/img"));
        assert_eq!(config.rotation_period, Duration::from_millis(2500));
        assert_eq!(args.log_filter.as_deref(), Some("eventeasy=debug"));
    }

    #[test]
    fn zero_rotation_is_rejected() {
        assert!(Args::try_parse_from(["eventeasy-desktop", "--rotation-ms", "0"]).is_err());
    }

    #[test]
    fn asset_url_joins_file_name() {
        let config = AppConfig::default();
        assert_eq!(config.asset_url(HERO_IMAGES[1]), "assets/bg_2.webp");
    }
}
