//! Three static feature cards under the main panel

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{icons::IconSet, styles};

pub struct FeatureCards {
    icons: IconSet,
}

impl FeatureCards {
    pub fn new(icons: IconSet) -> Self {
        Self { icons }
    }

    fn cards(&self) -> [(&'static str, &'static str, &'static str); 3] {
        [
            (
                self.icons.scan(),
                "Artifact Analysis",
                "Detects subtle pixel-level inconsistencies.",
            ),
            (
                self.icons.lock(),
                "Privacy First",
                "Images are processed in ephemeral containers.",
            ),
            (
                self.icons.zap(),
                "Real-time Processing",
                "Optimized PyTorch inference engine.",
            ),
        ]
    }
}

impl Widget for FeatureCards {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let columns = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(area);

        for ((icon, title, desc), column) in self.cards().into_iter().zip(columns.iter()) {
            let block = styles::glass_block(false);
            let inner = block.inner(*column);
            block.render(*column, buf);

            let lines = vec![
                Line::from(vec![
                    Span::styled(icon, styles::accent()),
                    Span::raw(" "),
                    Span::styled(title, styles::text_bright_bold()),
                ]),
                Line::styled(desc, styles::text_secondary()),
            ];
            Paragraph::new(lines).render(inner, buf);
        }
    }
}
