//! Screen layout definitions for the TUI
//!
//! The page is a vertical stack: navigation bar, hero, the main panel
//! (upload form or result card), feature cards and a key hint line. Short
//! terminals drop the hero and the feature cards so the main panel keeps
//! its room.

use ratatui::layout::{Constraint, Layout, Rect};

/// Below this height the hero and feature cards are hidden
pub const COMPACT_HEIGHT: u16 = 20;

const NAV_HEIGHT: u16 = 3;
const HERO_HEIGHT: u16 = 4;
const FEATURES_HEIGHT: u16 = 4;
const HINTS_HEIGHT: u16 = 1;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    pub nav: Rect,

    /// Badge, title and the mode toggle; zero height when compact
    pub hero: Rect,

    /// Upload panel or result card
    pub main: Rect,

    /// Feature cards; zero height when compact or disabled
    pub features: Rect,

    pub hints: Rect,
}

impl ScreenAreas {
    pub fn is_compact(&self) -> bool {
        self.hero.height == 0
    }
}

/// Split the screen into its areas
///
/// # Arguments
/// * `area` - Total screen area
/// * `show_features` - Whether the feature cards are enabled in settings
pub fn create(area: Rect, show_features: bool) -> ScreenAreas {
    let compact = area.height < COMPACT_HEIGHT;
    let hero_height = if compact { 0 } else { HERO_HEIGHT };
    let features_height = if show_features && !compact {
        FEATURES_HEIGHT
    } else {
        0
    };

    let chunks = Layout::vertical([
        Constraint::Length(NAV_HEIGHT),
        Constraint::Length(hero_height),
        Constraint::Min(3),
        Constraint::Length(features_height),
        Constraint::Length(HINTS_HEIGHT),
    ])
    .split(area);

    ScreenAreas {
        nav: chunks[0],
        hero: chunks[1],
        main: chunks[2],
        features: chunks[3],
        hints: chunks[4],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_layout() {
        let areas = create(Rect::new(0, 0, 80, 24), true);

        assert!(!areas.is_compact());
        assert_eq!(areas.nav.height, 3);
        assert_eq!(areas.hero.height, 4);
        assert_eq!(areas.features.height, 4);
        assert_eq!(areas.hints.height, 1);
        // 24 - 3 - 4 - 4 - 1 = 12
        assert_eq!(areas.main.height, 12);
        assert_eq!(areas.main.y, 7);
        assert_eq!(areas.hints.y, 23);
    }

    #[test]
    fn test_features_disabled() {
        let areas = create(Rect::new(0, 0, 80, 24), false);

        assert_eq!(areas.features.height, 0);
        assert_eq!(areas.main.height, 16);
    }

    #[test]
    fn test_compact_layout_keeps_main_panel() {
        let areas = create(Rect::new(0, 0, 40, 12), true);

        assert!(areas.is_compact());
        assert_eq!(areas.hero.height, 0);
        assert_eq!(areas.features.height, 0);
        // 12 - 3 - 1 = 8
        assert_eq!(areas.main.height, 8);
    }

    #[test]
    fn test_areas_do_not_overlap() {
        let areas = create(Rect::new(0, 0, 100, 40), true);

        assert_eq!(areas.hero.y, areas.nav.bottom());
        assert_eq!(areas.main.y, areas.hero.bottom());
        assert_eq!(areas.features.y, areas.main.bottom());
        assert_eq!(areas.hints.y, areas.features.bottom());
    }
}
