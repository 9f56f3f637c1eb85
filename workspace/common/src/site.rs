//! Page and anchor table of the site.
//!
//! The frontend router and the site host both need to agree on which paths are
//! real pages: the router to pick a view, the host to answer `404` for
//! everything else while still handing out the SPA shell.

use serde::Serialize;
use utoipa::ToSchema;

/// A routable page of the single-page app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct SitePage {
    /// Absolute path as matched by the router
    pub path: &'static str,
    /// Human readable page title
    pub title: &'static str,
}

pub const LANDING_PAGE: SitePage = SitePage {
    path: "/",
    title: "REIV IP Signals",
};

pub const DASHBOARD_PAGE: SitePage = SitePage {
    path: "/dashboard",
    title: "REIVIP-COP Dashboard",
};

/// Every page the router knows. Anything else is the not-found view.
pub const PAGES: [SitePage; 2] = [LANDING_PAGE, DASHBOARD_PAGE];

/// Returns the page served at `path`.
///
/// One trailing `/` is ignored, the same way the frontend router matches, so
/// `/dashboard/` is the dashboard and `//` is the landing page.
pub fn find_page(path: &str) -> Option<SitePage> {
    let path = match path.strip_suffix('/') {
        Some(trimmed) if !trimmed.is_empty() => trimmed,
        _ => path,
    };
    PAGES.iter().copied().find(|page| page.path == path)
}

pub fn is_known_page(path: &str) -> bool {
    find_page(path).is_some()
}

/// In-page sections of the landing view that the navigation bar links to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    HowItWorks,
    Features,
    UseCases,
}

impl Anchor {
    pub const ALL: [Anchor; 3] = [Anchor::HowItWorks, Anchor::Features, Anchor::UseCases];

    /// Element id of the section.
    pub fn id(&self) -> &'static str {
        match self {
            Anchor::HowItWorks => "how-it-works",
            Anchor::Features => "features",
            Anchor::UseCases => "use-cases",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Anchor::HowItWorks => "How It Works",
            Anchor::Features => "Features",
            Anchor::UseCases => "Use Cases",
        }
    }

    /// Link target usable from any page, e.g. `/#features`.
    pub fn href(&self) -> String {
        format!("{}#{}", LANDING_PAGE.path, self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_pages() {
        assert_eq!(find_page("/"), Some(LANDING_PAGE));
        assert_eq!(find_page("/dashboard"), Some(DASHBOARD_PAGE));
    }

    #[test]
    fn test_trailing_slash_is_ignored() {
        assert_eq!(find_page("/dashboard/"), Some(DASHBOARD_PAGE));
        assert_eq!(find_page("//"), Some(LANDING_PAGE));
        assert_eq!(find_page("/dashboard//"), None);
    }

    #[test]
    fn test_unknown_pages() {
        assert!(!is_known_page("/about"));
        assert!(!is_known_page("/dashboard/reports"));
        assert!(!is_known_page("/dashboard/reports/"));
        assert!(!is_known_page(""));
    }

    #[test]
    fn test_anchor_hrefs() {
        assert_eq!(Anchor::HowItWorks.href(), "/#how-it-works");
        assert_eq!(Anchor::Features.href(), "/#features");
        assert_eq!(Anchor::UseCases.href(), "/#use-cases");
    }

    #[test]
    fn test_page_serializes_for_health_payload() {
        let json = serde_json::to_value(DASHBOARD_PAGE).unwrap();
        assert_eq!(json["path"], "/dashboard");
        assert_eq!(json["title"], "REIVIP-COP Dashboard");
    }
}
