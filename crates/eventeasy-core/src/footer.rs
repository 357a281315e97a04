//! Footer catalog and the external link collaborator.

use crate::error::Result;

/// Opens URLs outside the app (system browser, share sheet, ...).
pub trait LinkOpener {
    fn open_url(&self, url: &str) -> Result<()>;
}

/// A footer entry. Entries without a URL render but do nothing when tapped.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FooterLink {
    pub text: &'static str,
    pub url: Option<&'static str>,
}

impl FooterLink {
    pub const fn inert(text: &'static str) -> Self {
        Self { text, url: None }
    }

    pub const fn external(text: &'static str, url: &'static str) -> Self {
        Self { text, url: Some(url) }
    }

    /// Handles a tap. Returns whether a URL was handed to the opener.
    pub fn activate(&self, opener: &impl LinkOpener) -> Result<bool> {
        match self.url {
            Some(url) => {
                tracing::debug!(text = self.text, url, "Opening footer link");
                opener.open_url(url)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// A titled column of footer links
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FooterSection {
    pub title: &'static str,
    pub links: &'static [FooterLink],
}

pub const FOOTER_TAGLINE: &str = "Making event discovery simple, personalized, and fun.";

pub const FOOTER_SECTIONS: [FooterSection; 3] = [
    FooterSection {
        title: "Explore",
        links: &[
            FooterLink::inert("All Events"),
            FooterLink::inert("Popular Events"),
            FooterLink::inert("Nearby Events"),
        ],
    },
    FooterSection {
        title: "Organizers",
        links: &[
            FooterLink::inert("Create Event"),
            FooterLink::inert("Pricing"),
            FooterLink::inert("Support"),
        ],
    },
    FooterSection {
        title: "Company",
        links: &[
            FooterLink::inert("About Us"),
            FooterLink::inert("Contact"),
            FooterLink::inert("Privacy Policy"),
        ],
    },
];

/// Copyright line for the given year
pub fn copyright(year: i32) -> String {
    format!("\u{00A9} {} {}. All rights reserved.", year, crate::catalog::BRAND_NAME)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::error::Error;

    #[derive(Default)]
    struct RecordingOpener {
        opened: RefCell<Vec<String>>,
    }

    impl LinkOpener for RecordingOpener {
        fn open_url(&self, url: &str) -> Result<()> {
            self.opened.borrow_mut().push(url.to_string());
            Ok(())
        }
    }

    struct FailingOpener;

    impl LinkOpener for FailingOpener {
        fn open_url(&self, url: &str) -> Result<()> {
            Err(Error::LinkOpen(url.to_string()))
        }
    }

    #[test]
    fn links_without_url_are_inert() {
        let opener = RecordingOpener::default();
        for section in &FOOTER_SECTIONS {
            for link in section.links {
                assert_eq!(link.activate(&opener), Ok(false));
            }
        }
        assert!(opener.opened.borrow().is_empty());
    }

    #[test]
    fn links_with_url_are_opened() {
        let opener = RecordingOpener::default();
        let link = FooterLink::external("Blog", "https://example.com/blog");
        assert_eq!(link.activate(&opener), Ok(true));
        assert_eq!(*opener.opened.borrow(), vec!["https://example.com/blog".to_string()]);
    }

    #[test]
    fn opener_failure_propagates() {
        let link = FooterLink::external("Blog", "https://example.com/blog");
        assert_eq!(
            link.activate(&FailingOpener),
            Err(Error::LinkOpen("https://example.com/blog".to_string()))
        );
        // An inert link never reaches the opener
        assert_eq!(FooterLink::inert("Pricing").activate(&FailingOpener), Ok(false));
    }

    #[test]
    fn footer_has_three_link_columns() {
        let titles: Vec<_> = FOOTER_SECTIONS.iter().map(|s| s.title).collect();
        assert_eq!(titles, ["Explore", "Organizers", "Company"]);
        assert!(FOOTER_SECTIONS.iter().all(|s| s.links.len() == 3));
    }

    #[test]
    fn copyright_uses_given_year() {
        assert_eq!(copyright(2025), "\u{00A9} 2025 Event Easy. All rights reserved.");
    }
}
