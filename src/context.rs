//! Context and host collaborators for Event Easy.
//!
//! Provides the app configuration to all components via use_context, and
//! implements the core's navigation and link traits on top of Dioxus.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let config = use_app_config();
//! let navigator = use_route_navigator();
//! navigator.navigate(NavigationIntent::AttendeeLogin);
//! ```

use dioxus::prelude::*;
use eventeasy_core::catalog::SectionLink;
use eventeasy_core::{Error, LinkOpener, NavigationIntent, Result};

use crate::app::Route;
use crate::config::AppConfig;

/// Get the configuration for the application.
/// Uses the global config set from command line args.
pub fn get_app_config() -> AppConfig {
    crate::get_app_config()
}

/// Hook to access the app configuration from context.
pub fn use_app_config() -> AppConfig {
    use_context::<AppConfig>()
}

/// Fulfils navigation intents with the Dioxus router.
#[derive(Clone, Copy)]
pub struct RouteNavigator {
    navigator: Navigator,
}

impl eventeasy_core::Navigator for RouteNavigator {
    fn navigate(&self, intent: NavigationIntent) {
        tracing::info!(%intent, "Navigating");
        self.navigator.push(Route::from(intent));
    }
}

/// Hook returning a navigator bound to the app router.
pub fn use_route_navigator() -> RouteNavigator {
    RouteNavigator {
        navigator: use_navigator(),
    }
}

/// Opens external links through the webview.
///
/// The desktop webview hands new-window requests to the system browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct WebviewLinkOpener;

impl LinkOpener for WebviewLinkOpener {
    fn open_url(&self, url: &str) -> Result<()> {
        if !is_external_url(url) {
            return Err(Error::LinkOpen(url.to_string()));
        }
        let target = serde_json::to_string(url).map_err(|e| Error::LinkOpen(e.to_string()))?;
        let _ = document::eval(&format!("window.open({}, '_blank');", target));
        Ok(())
    }
}

/// Only web and mail links leave the app
fn is_external_url(url: &str) -> bool {
    ["https://", "http://", "mailto:"]
        .iter()
        .any(|scheme| url.starts_with(scheme))
}

/// Brings a page section into view.
pub fn scroll_to_section(link: SectionLink) {
    match serde_json::to_string(link.element_id()) {
        Ok(id) => {
            let _ = document::eval(&format!(
                "document.getElementById({})?.scrollIntoView({{ behavior: 'smooth' }});",
                id
            ));
        }
        Err(e) => tracing::warn!(error = %e, anchor = link.anchor, "Cannot scroll to section"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_web_and_mail_links_are_external() {
        assert!(is_external_url("https://example.com"));
        assert!(is_external_url("mailto:hello@example.com"));
        assert!(!is_external_url("javascript:alert(1)"));
        assert!(!is_external_url("#features"));
    }

    #[test]
    fn non_external_urls_are_refused() {
        let err = WebviewLinkOpener.open_url("file:///etc/passwd").unwrap_err();
        assert_eq!(err, Error::LinkOpen("file:///etc/passwd".to_string()));
    }
}
