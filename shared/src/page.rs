//! Page navigation state
//!
//! The page script keeps no state of its own beyond what the DOM shows. These
//! types model that state explicitly so the script only applies the values
//! they return.

use serde::{Deserialize, Serialize};

use crate::units::UnitSystem;

/// Height of the fixed header that in-page scrolling must clear
pub const HEADER_OFFSET_PX: f64 = 80.0;

/// Viewports at or below this width use the collapsible mobile nav
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Delay before scrolling the results panel into view
pub const RESULTS_SCROLL_DELAY_MS: u32 = 100;

/// Scroll position that brings a section just below the header
pub fn scroll_target_top(element_offset_top: f64) -> f64 {
    element_offset_top - HEADER_OFFSET_PX
}

// ============================================================================
// Unit Toggle
// ============================================================================

/// Which measurement field groups the form shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldVisibility {
    pub metric_height: bool,
    pub metric_weight: bool,
    pub imperial_height: bool,
    pub imperial_weight: bool,
}

/// Field groups to show for the selected unit system
pub fn field_visibility(system: UnitSystem) -> FieldVisibility {
    let metric = system == UnitSystem::Metric;
    FieldVisibility {
        metric_height: metric,
        metric_weight: metric,
        imperial_height: !metric,
        imperial_weight: !metric,
    }
}

// ============================================================================
// Mobile Navigation
// ============================================================================

/// Inline display style of the nav element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavDisplay {
    /// No inline style; the stylesheet decides
    #[default]
    Unset,
    Shown,
    Hidden,
}

impl NavDisplay {
    /// Value for `style.display`
    pub fn css_value(&self) -> &'static str {
        match self {
            NavDisplay::Unset => "",
            NavDisplay::Shown => "block",
            NavDisplay::Hidden => "none",
        }
    }
}

/// Mobile navigation menu state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MobileNav {
    display: NavDisplay,
}

impl MobileNav {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn display(&self) -> NavDisplay {
        self.display
    }

    /// Hamburger button pressed
    pub fn toggle(&mut self) -> NavDisplay {
        self.display = match self.display {
            NavDisplay::Shown => NavDisplay::Hidden,
            NavDisplay::Unset | NavDisplay::Hidden => NavDisplay::Shown,
        };
        self.display
    }

    /// A nav link was followed; collapse the menu on narrow viewports
    pub fn link_clicked(&mut self, viewport_width: f64) -> NavDisplay {
        if viewport_width <= MOBILE_BREAKPOINT_PX {
            self.display = NavDisplay::Hidden;
        }
        self.display
    }

    /// Window resized; wide viewports hand control back to the stylesheet
    pub fn resized(&mut self, viewport_width: f64) -> NavDisplay {
        if viewport_width > MOBILE_BREAKPOINT_PX {
            self.display = NavDisplay::Unset;
        }
        self.display
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_target_clears_header() {
        assert_eq!(scroll_target_top(1200.0), 1120.0);
        assert_eq!(scroll_target_top(40.0), -40.0);
    }

    #[test]
    fn test_field_visibility() {
        let metric = field_visibility(UnitSystem::Metric);
        assert!(metric.metric_height && metric.metric_weight);
        assert!(!metric.imperial_height && !metric.imperial_weight);

        let imperial = field_visibility(UnitSystem::Imperial);
        assert!(!imperial.metric_height && !imperial.metric_weight);
        assert!(imperial.imperial_height && imperial.imperial_weight);
    }

    #[test]
    fn test_toggle_alternates() {
        let mut nav = MobileNav::new();
        assert_eq!(nav.display().css_value(), "");
        assert_eq!(nav.toggle(), NavDisplay::Shown);
        assert_eq!(nav.toggle(), NavDisplay::Hidden);
        assert_eq!(nav.toggle(), NavDisplay::Shown);
    }

    #[test]
    fn test_link_click_collapses_only_on_mobile() {
        let mut nav = MobileNav::new();
        nav.toggle();
        assert_eq!(nav.link_clicked(1024.0), NavDisplay::Shown);
        assert_eq!(nav.link_clicked(768.0), NavDisplay::Hidden);
    }

    #[test]
    fn test_resize_to_desktop_clears_inline_style() {
        let mut nav = MobileNav::new();
        nav.toggle();
        assert_eq!(nav.resized(600.0), NavDisplay::Shown);
        assert_eq!(nav.resized(769.0), NavDisplay::Unset);
        assert_eq!(nav.display().css_value(), "");
    }
}
