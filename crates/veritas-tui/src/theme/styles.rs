//! Semantic style builders for the Veritas theme.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};
use veritas_core::Verdict;

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn text_bright_bold() -> Style {
    Style::default()
        .fg(palette::TEXT_BRIGHT)
        .add_modifier(Modifier::BOLD)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

/// Key name inside a hint, e.g. the `o` in "o Browse"
pub fn keybinding() -> Style {
    Style::default()
        .fg(palette::STATUS_YELLOW)
        .add_modifier(Modifier::BOLD)
}

pub fn warning() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

/// Color for a verdict: red for a deepfake, green for a likely real image
pub fn verdict(verdict: Verdict) -> Style {
    let color = match verdict {
        Verdict::Deepfake => palette::STATUS_RED,
        Verdict::LikelyReal => palette::STATUS_GREEN,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// Active / inactive segment of the mode toggle
pub fn toggle_segment(active: bool) -> Style {
    if active {
        Style::default()
            .fg(palette::DEEPEST_BG)
            .bg(palette::ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        text_secondary()
    }
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused {
            palette::BORDER_ACTIVE
        } else {
            palette::BORDER_DIM
        }))
        .style(Style::default().bg(palette::CARD_BG))
}

pub fn modal_block(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette::BORDER_ACTIVE))
        .style(Style::default().bg(palette::POPUP_BG))
}
