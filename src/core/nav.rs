//! Navigation bar state and scroll arithmetic

/// Inline treatment of the navbar background
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavbarTreatment {
    pub background: &'static str,
    pub backdrop_filter: &'static str,
}

/// Translucent treatment at the top of the page
pub const NAVBAR_DEFAULT: NavbarTreatment = NavbarTreatment {
    background: "rgba(255, 255, 255, 0.95)",
    backdrop_filter: "blur(20px)",
};

/// More opaque, more blurred treatment once the page is scrolled
pub const NAVBAR_SCROLLED: NavbarTreatment = NavbarTreatment {
    background: "rgba(255, 255, 255, 0.98)",
    backdrop_filter: "blur(25px)",
};

impl NavbarTreatment {
    /// Inline style string for the navbar element
    pub fn style(&self) -> String {
        format!(
            "background: {bg}; backdrop-filter: {blur}; -webkit-backdrop-filter: {blur};",
            bg = self.background,
            blur = self.backdrop_filter
        )
    }
}

/// Treatment for a vertical scroll offset
pub fn navbar_treatment(scroll_y: f64, threshold: f64) -> NavbarTreatment {
    if scroll_y > threshold {
        NAVBAR_SCROLLED
    } else {
        NAVBAR_DEFAULT
    }
}

/// Where to scroll so a section lands just below the fixed header
pub fn scroll_target(offset_top: f64, header_offset: f64) -> f64 {
    offset_top - header_offset
}

/// Element id referenced by an in-page link, `"#quiz"` -> `"quiz"`
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Open/closed state of the mobile menu
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Any link click closes the menu
    pub fn close(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_treatment_switches_strictly_above_threshold() {
        assert_eq!(navbar_treatment(0.0, 100.0), NAVBAR_DEFAULT);
        assert_eq!(navbar_treatment(100.0, 100.0), NAVBAR_DEFAULT);
        assert_eq!(navbar_treatment(100.5, 100.0), NAVBAR_SCROLLED);
        assert_eq!(navbar_treatment(2400.0, 100.0), NAVBAR_SCROLLED);
    }

    #[test]
    fn test_treatment_style() {
        let style = NAVBAR_SCROLLED.style();
        assert!(style.contains("background: rgba(255, 255, 255, 0.98);"));
        assert!(style.contains("backdrop-filter: blur(25px);"));
    }

    #[test]
    fn test_scroll_target_subtracts_header() {
        assert_eq!(scroll_target(820.0, 70.0), 750.0);
        assert_eq!(scroll_target(30.0, 70.0), -40.0);
    }

    #[test]
    fn test_anchor_target() {
        assert_eq!(anchor_target("#quiz"), Some("quiz"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("/elsewhere"), None);
    }

    #[test]
    fn test_menu_toggle_and_close() {
        let mut menu = NavMenu::default();
        assert!(!menu.is_open());
        menu.toggle();
        assert!(menu.is_open());
        menu.close();
        assert!(!menu.is_open());
        menu.close();
        assert!(!menu.is_open());
        menu.toggle();
        menu.toggle();
        assert!(!menu.is_open());
    }
}
