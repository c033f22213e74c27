//! Section anchors, smooth scrolling and the scroll-derived header state.

use log::{debug, warn};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub section: &'static str,
}

const fn item(label: &'static str, section: &'static str) -> NavItem {
    NavItem { label, section }
}

pub static STUDIO_NAV: [NavItem; 7] = [
    item("Accueil", "hero"),
    item("À Propos", "about"),
    item("Services", "services"),
    item("Portfolio", "portfolio"),
    item("Avis", "avis"),
    item("Blog", "blog"),
    item("Contact", "contact"),
];

pub static ACADEMY_NAV: [NavItem; 6] = [
    item("Accueil", "hero"),
    item("L'Académie", "academie"),
    item("Formations", "formations"),
    item("Résultats", "resultats"),
    item("Avis", "avis"),
    item("Inscription", "inscription"),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    Toggle,
    /// A link was followed, the menu folds away.
    Choose,
}

pub fn menu_open_after(open: bool, action: MenuAction) -> bool {
    match action {
        MenuAction::Toggle => !open,
        MenuAction::Choose => false,
    }
}

/// Entries the mobile menu renders: the whole table when open, nothing otherwise.
pub fn menu_items(items: &'static [NavItem], open: bool) -> &'static [NavItem] {
    if open {
        items
    } else {
        &[]
    }
}

pub fn menu_labels(items: &[NavItem]) -> Vec<&'static str> {
    items.iter().map(|item| item.label).collect()
}

/// Header switches to its compact style from this offset on.
pub fn is_scrolled(offset: f64) -> bool {
    offset >= config::SCROLL_THRESHOLD
}

/// Fraction of the document scrolled so far, in [0, 1].
pub fn scroll_progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

/// Smooth-scrolls the element with id `section` into view.
pub fn scroll_to_section(section: &str) {
    let element = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(section));

    match element {
        Some(element) => {
            debug!("Scrolling to #{}", section);
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => warn!("No section with id #{}", section),
    }
}

/// Jumps to the top of the page, used when a route mounts.
pub fn scroll_to_top() {
    match web_sys::window() {
        Some(window) => window.scroll_to_with_x_and_y(0.0, 0.0),
        None => warn!("No window to scroll"),
    }
}

/// Current vertical scroll offset, 0 when it cannot be read.
pub fn window_scroll_y() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_threshold_boundary() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(49.0));
        assert!(!is_scrolled(49.999));
        assert!(is_scrolled(50.0));
        assert!(is_scrolled(51.0));
        assert!(is_scrolled(4000.0));
    }

    #[test]
    fn test_scrolled_flag_over_range() {
        for offset in 0..200 {
            assert_eq!(is_scrolled(offset as f64), offset >= 50, "offset {}", offset);
        }
    }

    #[test]
    fn test_progress_clamps() {
        assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(1000.0, 3000.0, 1000.0), 0.5);
        assert_eq!(scroll_progress(2000.0, 3000.0, 1000.0), 1.0);
        assert_eq!(scroll_progress(2500.0, 3000.0, 1000.0), 1.0);
        assert_eq!(scroll_progress(-20.0, 3000.0, 1000.0), 0.0);
    }

    #[test]
    fn test_progress_on_short_document() {
        assert_eq!(scroll_progress(10.0, 800.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(0.0, 1000.0, 1000.0), 0.0);
    }

    #[test]
    fn test_sections_are_unique() {
        for table in [&STUDIO_NAV[..], &ACADEMY_NAV[..]] {
            let sections: HashSet<&str> = table.iter().map(|item| item.section).collect();
            let labels: HashSet<&str> = table.iter().map(|item| item.label).collect();
            assert_eq!(sections.len(), table.len());
            assert_eq!(labels.len(), table.len());
        }
    }

    #[test]
    fn test_menu_toggle_and_choose() {
        let mut open = false;
        open = menu_open_after(open, MenuAction::Toggle);
        assert!(open);
        open = menu_open_after(open, MenuAction::Choose);
        assert!(!open);
        open = menu_open_after(open, MenuAction::Choose);
        assert!(!open);
        open = menu_open_after(open, MenuAction::Toggle);
        open = menu_open_after(open, MenuAction::Toggle);
        assert!(!open);
    }

    #[test]
    fn test_reopened_menu_renders_full_table() {
        for table in [&STUDIO_NAV[..], &ACADEMY_NAV[..]] {
            let mut open = false;
            assert!(menu_items(table, open).is_empty());
            for _ in 0..3 {
                open = menu_open_after(open, MenuAction::Toggle);
                let rendered = menu_labels(menu_items(table, open));
                assert_eq!(rendered, menu_labels(table));
                let distinct: HashSet<&str> = rendered.iter().copied().collect();
                assert_eq!(distinct.len(), table.len());
                open = menu_open_after(open, MenuAction::Choose);
                assert!(menu_items(table, open).is_empty());
            }
        }
    }

    #[test]
    fn test_menu_labels_in_order() {
        assert_eq!(
            menu_labels(menu_items(&STUDIO_NAV, true)),
            vec!["Accueil", "À Propos", "Services", "Portfolio", "Avis", "Blog", "Contact"]
        );
        assert_eq!(
            menu_labels(menu_items(&ACADEMY_NAV, true)),
            vec!["Accueil", "L'Académie", "Formations", "Résultats", "Avis", "Inscription"]
        );
    }

    #[test]
    fn test_accueil_targets_hero() {
        assert_eq!(STUDIO_NAV[0].section, "hero");
        assert_eq!(ACADEMY_NAV[0].section, "hero");
        assert_eq!(STUDIO_NAV[1].section, "about");
    }
}
