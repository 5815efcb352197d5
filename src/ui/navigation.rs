//! Page navigation state
//!
//! Tracks which page is current so the nav bar can mark the matching link
//! active, and owns the collapsible nav panel toggle. Page-scoped timers
//! (status polling, countdowns) follow the current page.

/// Pages of the client, mirroring the web app's routes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Upload,
    SignUp,
}

impl Page {
    /// Pages listed in the nav bar, in order
    pub const ALL: [Page; 3] = [Page::Dashboard, Page::Upload, Page::SignUp];

    /// Link label
    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Upload => "Upload",
            Page::SignUp => "Sign up",
        }
    }

    /// Server-side route this page corresponds to
    pub fn path(&self) -> &'static str {
        match self {
            Page::Dashboard => "/dashboard",
            Page::Upload => "/upload",
            Page::SignUp => "/signup",
        }
    }
}

/// Navigation state: current page plus the collapsible panel flag
#[derive(Debug, Clone)]
pub struct Navigation {
    current: Page,
    panel_open: bool,
}

impl Default for Navigation {
    fn default() -> Self {
        Self {
            current: Page::Dashboard,
            panel_open: false,
        }
    }
}

impl Navigation {
    pub fn new() -> Self {
        Self::default()
    }

    /// The page currently shown
    pub fn current(&self) -> Page {
        self.current
    }

    /// Whether a nav link should render as active
    pub fn is_active(&self, page: Page) -> bool {
        self.current == page
    }

    /// Switch pages; the collapsed panel closes on navigation
    pub fn navigate(&mut self, page: Page) {
        self.current = page;
        self.panel_open = false;
    }

    /// Whether the collapsible panel is expanded
    pub fn panel_open(&self) -> bool {
        self.panel_open
    }

    /// Toggle the collapsible panel
    pub fn toggle_panel(&mut self) {
        self.panel_open = !self.panel_open;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_link_matches_current_page() {
        let mut nav = Navigation::new();
        assert!(nav.is_active(Page::Dashboard));
        assert!(!nav.is_active(Page::Upload));

        nav.navigate(Page::Upload);
        assert!(nav.is_active(Page::Upload));
        assert!(!nav.is_active(Page::Dashboard));
    }

    #[test]
    fn test_panel_toggles_and_closes_on_navigation() {
        let mut nav = Navigation::new();
        assert!(!nav.panel_open());

        nav.toggle_panel();
        assert!(nav.panel_open());

        nav.navigate(Page::SignUp);
        assert!(!nav.panel_open());
    }

    #[test]
    fn test_paths() {
        assert_eq!(Page::Dashboard.path(), "/dashboard");
        assert_eq!(Page::Upload.path(), "/upload");
    }
}
