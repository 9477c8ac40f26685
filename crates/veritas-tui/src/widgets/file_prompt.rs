//! One-line path input for choosing an image

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};
use veritas_app::state::FilePromptState;

use super::modal_overlay;
use crate::theme::styles;

const WIDTH: u16 = 64;
const HEIGHT: u16 = 5;

pub struct FilePrompt<'a> {
    state: &'a FilePromptState,
}

impl<'a> FilePrompt<'a> {
    pub fn new(state: &'a FilePromptState) -> Self {
        Self { state }
    }
}

impl Widget for FilePrompt<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal = modal_overlay::centered_rect(WIDTH, HEIGHT, area);
        Clear.render(modal, buf);

        let block = styles::modal_block("Open Image");
        let inner = block.inner(modal);
        block.render(modal, buf);

        if inner.height == 0 || inner.width < 4 {
            return;
        }

        // Keep the tail of long paths visible
        let room = usize::from(inner.width).saturating_sub(4);
        let input = &self.state.input;
        let shown = match input.char_indices().rev().nth(room.saturating_sub(1)) {
            Some((start, _)) if input.chars().count() > room => &input[start..],
            _ => input.as_str(),
        };

        let lines = vec![
            Line::from(vec![
                Span::styled("> ", styles::accent_bold()),
                Span::styled(shown.to_string(), styles::text_primary()),
                Span::styled("█", styles::accent()),
            ]),
            Line::default(),
            Line::from(vec![
                Span::styled("Enter", styles::keybinding()),
                Span::styled(" load  ", styles::text_muted()),
                Span::styled("Esc", styles::keybinding()),
                Span::styled(" cancel  ", styles::text_muted()),
                Span::styled("Ctrl+U", styles::keybinding()),
                Span::styled(" clear", styles::text_muted()),
            ]),
        ];

        Paragraph::new(lines).render(
            Rect {
                x: inner.x + 1,
                width: inner.width - 1,
                ..inner
            },
            buf,
        );
    }
}
