//! Result card: verdict, confidence meter and technical details

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use veritas_core::AnalysisResult;

use super::ConfidenceMeter;
use crate::theme::{icons::IconSet, styles};

/// Model identifier shown in the technical details
pub const MODEL_VERSION: &str = "Veritas-v2.1 (MesoNet)";

/// Renders one `AnalysisResult`. Holds no state of its own: the current
/// meter fill is passed in by the caller.
pub struct ResultCard<'a> {
    result: &'a AnalysisResult,
    meter_fill: f64,
    icons: IconSet,
}

impl<'a> ResultCard<'a> {
    pub fn new(result: &'a AnalysisResult, icons: IconSet) -> Self {
        Self {
            result,
            meter_fill: result.confidence_percent(),
            icons,
        }
    }

    /// Current animated fill in percent
    pub fn meter_fill(mut self, fill: f64) -> Self {
        self.meter_fill = fill;
        self
    }

    fn header_lines(&self, width: u16) -> Vec<Line<'a>> {
        const DISMISS: &str = "[x] Dismiss";
        let title = "Analysis Complete";
        let gap = usize::from(width)
            .saturating_sub(title.len() + DISMISS.len())
            .max(1);

        let mut subtitle = Vec::new();
        if let Some(processed) = self.result.processing_time_display() {
            subtitle.push(Span::styled(processed, styles::text_secondary()));
            subtitle.push(Span::styled("  ·  ", styles::text_muted()));
        }
        subtitle.push(Span::styled(
            format!("Verdict: {}", self.result.label),
            styles::text_muted(),
        ));

        vec![
            Line::from(vec![
                Span::styled(title, styles::text_bright_bold()),
                Span::raw(" ".repeat(gap)),
                Span::styled(DISMISS, styles::text_muted()),
            ]),
            Line::from(subtitle),
        ]
    }

    fn verdict_lines(&self) -> Vec<Line<'a>> {
        let verdict = self.result.verdict();
        let icon = if self.result.is_fake {
            self.icons.alert()
        } else {
            self.icons.check()
        };

        vec![
            Line::from(vec![
                Span::styled(icon, styles::verdict(verdict)),
                Span::raw(" "),
                Span::styled(verdict.headline(), styles::verdict(verdict)),
            ]),
            Line::styled(verdict.description(), styles::text_primary()),
        ]
    }

    fn detail_lines(&self) -> Vec<Line<'a>> {
        let mut lines = vec![
            Line::from(vec![
                Span::styled("Model Version: ", styles::text_muted()),
                Span::styled(MODEL_VERSION, styles::text_primary()),
            ]),
            Line::from(vec![
                Span::styled("Raw Output: ", styles::text_muted()),
                Span::styled(self.result.raw_output_display(), styles::text_primary()),
            ]),
        ];
        if let Some(message) = &self.result.message {
            lines.push(Line::styled(format!("Note: {message}"), styles::warning()));
        }
        lines
    }
}

impl Widget for ResultCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width < 4 {
            return;
        }

        // One column of padding on each side
        let content = Rect {
            x: inner.x + 1,
            width: inner.width - 2,
            ..inner
        };

        let confidence = self.result.confidence_display();
        let meter = ConfidenceMeter::new(&confidence, self.meter_fill, self.result.verdict());

        let sections = [
            self.header_lines(content.width),
            self.verdict_lines(),
            vec![meter.bar_line(content.width), meter.caption_line(content.width)],
            self.detail_lines(),
        ];

        // Spacers between sections only when everything fits with them
        let needed: usize = sections.iter().map(Vec::len).sum::<usize>() + sections.len() - 1;
        let spaced = needed <= usize::from(content.height);

        let mut lines = Vec::with_capacity(needed);
        for (i, section) in sections.into_iter().enumerate() {
            if spaced && i > 0 {
                lines.push(Line::default());
            }
            lines.extend(section);
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(content, buf);
    }
}
