//! Blocking notification dialog (analysis and file read failures)

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget, Wrap},
};
use veritas_app::state::Notification;

use super::modal_overlay;
use crate::theme::{icons::IconSet, styles};

const WIDTH: u16 = 60;
const HEIGHT: u16 = 9;

pub struct NotificationDialog<'a> {
    notification: &'a Notification,
    icons: IconSet,
}

impl<'a> NotificationDialog<'a> {
    pub fn new(notification: &'a Notification, icons: IconSet) -> Self {
        Self {
            notification,
            icons,
        }
    }
}

impl Widget for NotificationDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal = modal_overlay::centered_rect(WIDTH, HEIGHT, area);
        Clear.render(modal, buf);

        let title = format!("{} {}", self.icons.alert(), self.notification.title);
        let block = styles::modal_block(&title);
        let inner = block.inner(modal);
        block.render(modal, buf);

        let chunks = Layout::vertical([
            Constraint::Length(1), // Spacer
            Constraint::Min(1),    // Message
            Constraint::Length(1), // Dismiss hint
        ])
        .split(inner);

        // Full "Title: body" text so the message reads on its own
        Paragraph::new(self.notification.text())
            .style(styles::text_primary())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(chunks[1], buf);

        let hint = Line::from(vec![
            Span::styled("[Enter]", styles::keybinding()),
            Span::styled(" OK", styles::text_muted()),
        ]);
        Paragraph::new(hint)
            .alignment(Alignment::Center)
            .render(chunks[2], buf);
    }
}
