//! Navigation bar state and the in-page section anchors.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::SCROLL_THRESHOLD;

/// Page sections, in the order the shell renders them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Hero,
    About,
    Projects,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 4] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Projects,
        SectionId::Contact,
    ];

    /// Element id of the section.
    pub fn anchor(&self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
        }
    }

    /// Link text.
    pub fn label(&self) -> &'static str {
        match self {
            SectionId::Hero => "Home",
            SectionId::About => "About",
            SectionId::Projects => "Projects",
            SectionId::Contact => "Contact",
        }
    }

    /// `#anchor` fragment for plain links.
    pub fn href(&self) -> String {
        format!("#{}", self.anchor())
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

/// Scrolled / menu-open flags for the navigation bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    scrolled: bool,
    menu_open: bool,
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Record the window's vertical scroll position.
    ///
    /// Returns `true` when the scrolled flag flipped.
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        let scrolled = scroll_y > SCROLL_THRESHOLD;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    /// Flip the overlay menu; returns the new value.
    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    /// A navigation target was chosen. Always closes the menu and
    /// hands back the section to scroll to.
    pub fn select(&mut self, section: SectionId) -> SectionId {
        self.menu_open = false;
        section
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrolled_threshold() {
        let mut nav = NavState::new();
        assert!(!nav.on_scroll(50.0));
        assert!(!nav.is_scrolled());
        assert!(nav.on_scroll(50.5));
        assert!(nav.is_scrolled());
        assert!(!nav.on_scroll(400.0));
        assert!(nav.on_scroll(0.0));
        assert!(!nav.is_scrolled());
    }

    #[test]
    fn test_select_closes_open_menu() {
        let mut nav = NavState::new();
        assert!(nav.toggle_menu());
        let target = nav.select(SectionId::Projects);
        assert!(!nav.is_menu_open());
        assert_eq!(target, SectionId::Projects);
        assert_eq!(target.anchor(), "projects");
    }

    #[test]
    fn test_select_with_closed_menu_stays_closed() {
        let mut nav = NavState::new();
        nav.select(SectionId::Hero);
        assert!(!nav.is_menu_open());
    }

    #[test]
    fn test_flags_are_independent() {
        let mut nav = NavState::new();
        nav.toggle_menu();
        nav.on_scroll(200.0);
        assert!(nav.is_menu_open());
        nav.toggle_menu();
        assert!(nav.is_scrolled());
    }

    #[test]
    fn test_anchor_order() {
        let anchors: Vec<&str> = SectionId::ALL.iter().map(|s| s.anchor()).collect();
        assert_eq!(anchors, vec!["hero", "about", "projects", "contact"]);
        assert_eq!(SectionId::Contact.href(), "#contact");
    }
}
