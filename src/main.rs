#![allow(non_snake_case)]

mod app;
mod components;
mod config;
pub mod context;
mod pages;
mod theme;

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use eventeasy_core::logging::LoggingBuilder;

use crate::config::{AppConfig, Args};

/// Global configuration, set from command line
static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Get the app configuration (set from command line or default)
pub fn get_app_config() -> AppConfig {
    APP_CONFIG.get().cloned().unwrap_or_default()
}

fn main() {
    let args = Args::parse();

    let mut logging = LoggingBuilder::new();
    if let Some(filter) = &args.log_filter {
        logging = logging.with_filter(filter.clone());
    }
    if let Err(e) = logging.init() {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let config = AppConfig::from(&args);
    tracing::info!(
        assets = ?config.assets_dir,
        rotation_ms = config.rotation_period.as_millis() as u64,
        "Starting Event Easy"
    );
    let _ = APP_CONFIG.set(config);

    // Phone-shaped window by default
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(eventeasy_core::catalog::BRAND_NAME)
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
