//! Icon set for the TUI.
//!
//! Provides `IconSet` which resolves icons at runtime based on `IconMode`.
//! - `IconMode::Unicode`: safe characters that work in all terminals
//! - `IconMode::NerdFonts`: rich Nerd Font glyphs (requires Nerd Font installed)

use veritas_app::config::IconMode;

/// Braille spinner frames shown while an analysis runs
const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Runtime icon resolver.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    pub fn shield(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f132}", // nf-fa-shield
            IconMode::Unicode => "◈",
        }
    }

    pub fn upload(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f093}", // nf-fa-upload
            IconMode::Unicode => "↑",
        }
    }

    pub fn image(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f03e}", // nf-fa-image
            IconMode::Unicode => "▣",
        }
    }

    pub fn alert(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f071}", // nf-fa-warning
            IconMode::Unicode => "⚠",
        }
    }

    pub fn check(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f058}", // nf-fa-check_circle
            IconMode::Unicode => "✓",
        }
    }

    pub fn scan(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f002}", // nf-fa-search
            IconMode::Unicode => "◎",
        }
    }

    pub fn lock(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f023}", // nf-fa-lock
            IconMode::Unicode => "⊡",
        }
    }

    pub fn zap(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f0e7}", // nf-fa-bolt
            IconMode::Unicode => "ϟ",
        }
    }

    pub fn sparkle(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f005}", // nf-fa-star
            IconMode::Unicode => "✦",
        }
    }

    /// Spinner frame for the given tick counter
    pub fn spinner(&self, frame: usize) -> &'static str {
        SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
    }
}
