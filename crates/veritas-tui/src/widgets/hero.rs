//! Hero section: release badge, headline and the detection mode toggle

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{icons::IconSet, palette, styles};

pub struct Hero {
    demo_mode: bool,
    icons: IconSet,
}

impl Hero {
    pub fn new(demo_mode: bool, icons: IconSet) -> Self {
        Self { demo_mode, icons }
    }

    fn toggle_line(&self) -> Line<'static> {
        let knob = if self.demo_mode { "●━━○" } else { "○━━●" };
        Line::from(vec![
            Span::styled(" Demo Mode ", styles::toggle_segment(self.demo_mode)),
            Span::raw(" "),
            Span::styled(knob, styles::accent()),
            Span::raw(" "),
            Span::styled(" Real API ", styles::toggle_segment(!self.demo_mode)),
            Span::styled("  (d)", styles::text_muted()),
        ])
    }
}

impl Widget for Hero {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::from(vec![
                Span::styled(
                    format!("{} ", self.icons.sparkle()),
                    Style::default().fg(palette::ACCENT_INDIGO),
                ),
                Span::styled(
                    "New Model v2.1 Released",
                    Style::default().fg(palette::ACCENT_INDIGO),
                ),
            ]),
            Line::from(vec![
                Span::styled("Detect ", styles::text_bright_bold()),
                Span::styled("Deepfakes", styles::accent_bold()),
                Span::styled(" with Precision", styles::text_bright_bold()),
            ]),
            Line::styled(
                "Upload any image or video frame to analyze for AI-generated manipulation artifacts.",
                styles::text_secondary(),
            ),
            self.toggle_line(),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
