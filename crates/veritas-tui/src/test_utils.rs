//! Test utilities for widget and view rendering tests

use ratatui::{backend::TestBackend, buffer::Buffer, layout::Rect, widgets::Widget, Frame, Terminal};

/// Standard test terminal size
pub const TEST_WIDTH: u16 = 80;
pub const TEST_HEIGHT: u16 = 24;

/// Compact terminal size, below the layout's compact threshold
pub const COMPACT_WIDTH: u16 = 40;
pub const COMPACT_HEIGHT: u16 = 12;

/// Test terminal wrapper over ratatui's `TestBackend`
pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    pub fn compact() -> Self {
        Self::with_size(COMPACT_WIDTH, COMPACT_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("Failed to get terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    /// Render a widget into `area`
    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|f| f.render_widget(widget, area))
            .expect("Failed to draw");
    }

    /// Draw a complete frame with a closure
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("Failed to draw frame");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Check if the buffer contains a string anywhere
    pub fn buffer_contains(&self, text: &str) -> bool {
        self.content().contains(text)
    }

    /// All content as a string, one terminal row per line
    pub fn content(&self) -> String {
        let buffer = self.buffer();
        let mut result = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                result.push_str(buffer[(x, y)].symbol());
            }
            result.push('\n');
        }
        result
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}
