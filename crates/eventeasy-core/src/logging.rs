//! Tracing subscriber setup.
//!
//! ```ignore
//! use eventeasy_core::logging::LoggingBuilder;
//!
//! LoggingBuilder::new()
//!     .with_filter("eventeasy=debug")
//!     .init()?;
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::error::{Error, Result};

/// Filter used when neither `RUST_LOG` nor an explicit filter is given
pub const DEFAULT_FILTER: &str = "eventeasy=info,eventeasy_core=info";

/// Builder for the global tracing subscriber.
#[derive(Debug, Default)]
pub struct LoggingBuilder {
    env_filter: Option<String>,
    ansi: Option<bool>,
}

impl LoggingBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the filter directive (e.g., "eventeasy=info,eventeasy_core=debug").
    /// Takes precedence over `RUST_LOG`.
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Force ANSI colors on or off.
    pub fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = Some(ansi);
        self
    }

    /// Resolves the filter: explicit directive, then `RUST_LOG`, then the default.
    pub fn build_filter(&self) -> Result<EnvFilter> {
        match &self.env_filter {
            Some(directive) => {
                EnvFilter::try_new(directive).map_err(|e| Error::Logging(e.to_string()))
            }
            None => Ok(EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))),
        }
    }

    /// Installs the subscriber globally.
    pub fn init(self) -> Result<()> {
        let filter = self.build_filter()?;
        let mut fmt_layer = tracing_subscriber::fmt::layer();
        if let Some(ansi) = self.ansi {
            fmt_layer = fmt_layer.with_ansi(ansi);
        }

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .try_init()
            .map_err(|e| Error::Logging(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filter_is_parsed() {
        let filter = LoggingBuilder::new().with_filter("eventeasy=debug").build_filter();
        assert!(filter.is_ok());
    }

    #[test]
    fn invalid_filter_is_reported() {
        let err = LoggingBuilder::new()
            .with_filter("eventeasy=notalevel")
            .build_filter()
            .unwrap_err();
        assert!(matches!(err, Error::Logging(_)));
    }
}
