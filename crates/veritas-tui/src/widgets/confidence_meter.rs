//! Confidence meter and its fill animation
//!
//! The meter fill is purely cosmetic. It is tracked per result identity
//! (`AnalysisId`) in view-local state, so a new result drawn in the same slot
//! starts from zero again, and it never feeds back into the workflow.

use std::time::{Duration, Instant};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use veritas_core::{AnalysisId, Verdict};

use crate::theme::{palette, styles};

/// How long the meter stays empty after a result appears
pub const METER_DELAY: Duration = Duration::from_millis(100);

/// Duration of the ease-out fill once the delay has passed
pub const METER_DURATION: Duration = Duration::from_millis(1000);

/// Meter fill (same unit as `target`) after `elapsed` time on screen.
///
/// Zero during the initial delay, then an ease-out cubic towards `target`.
pub fn meter_fill(target: f64, elapsed: Duration) -> f64 {
    let Some(running) = elapsed.checked_sub(METER_DELAY) else {
        return 0.0;
    };
    let t = (running.as_secs_f64() / METER_DURATION.as_secs_f64()).min(1.0);
    target * (1.0 - (1.0 - t).powi(3))
}

/// Tracks when the current result first became visible
#[derive(Debug, Default)]
pub struct MeterAnimation {
    key: Option<AnalysisId>,
    shown_at: Option<Instant>,
}

impl MeterAnimation {
    /// Record the result currently on screen.
    ///
    /// A different key (or a result after none) restarts the animation.
    pub fn observe(&mut self, key: Option<AnalysisId>, now: Instant) {
        if key != self.key {
            self.key = key;
            self.shown_at = key.map(|_| now);
        }
    }

    pub fn key(&self) -> Option<AnalysisId> {
        self.key
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        self.shown_at
            .map(|start| now.saturating_duration_since(start))
            .unwrap_or_default()
    }

    /// Current fill for `target`, as of `now`
    pub fn fill(&self, target: f64, now: Instant) -> f64 {
        meter_fill(target, self.elapsed(now))
    }

    pub fn is_running(&self, now: Instant) -> bool {
        self.shown_at.is_some() && self.elapsed(now) < METER_DELAY + METER_DURATION
    }
}

/// Two-row meter: the bar, then "Confidence Score" and the percentage
pub struct ConfidenceMeter<'a> {
    /// Percentage text, already formatted (`"93.0"`)
    label: &'a str,
    /// Current fill in percent; clamped to 0..=100 when drawn
    fill_percent: f64,
    verdict: Verdict,
}

impl<'a> ConfidenceMeter<'a> {
    pub fn new(label: &'a str, fill_percent: f64, verdict: Verdict) -> Self {
        Self {
            label,
            fill_percent,
            verdict,
        }
    }

    /// Bar line for the given width
    pub fn bar_line(&self, width: u16) -> Line<'static> {
        let ratio = (self.fill_percent / 100.0).clamp(0.0, 1.0);
        let filled = (ratio * f64::from(width)).round() as usize;
        let empty = usize::from(width).saturating_sub(filled);

        Line::from(vec![
            Span::styled("█".repeat(filled), styles::verdict(self.verdict)),
            Span::styled("░".repeat(empty), Style::default().fg(palette::METER_TRACK)),
        ])
    }

    /// Caption line with the label pushed to the right edge
    pub fn caption_line(&self, width: u16) -> Line<'a> {
        const CAPTION: &str = "Confidence Score";
        let percent = format!("{}%", self.label);
        let gap = usize::from(width).saturating_sub(CAPTION.len() + percent.len()).max(1);

        Line::from(vec![
            Span::styled(CAPTION, styles::text_secondary()),
            Span::raw(" ".repeat(gap)),
            Span::styled(percent, styles::text_bright_bold()),
        ])
    }
}

impl Widget for ConfidenceMeter<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        let lines = vec![self.bar_line(area.width), self.caption_line(area.width)];
        Paragraph::new(lines).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_meter_empty_during_delay() {
        assert_eq!(meter_fill(93.0, Duration::ZERO), 0.0);
        assert_eq!(meter_fill(93.0, Duration::from_millis(100)), 0.0);
    }

    #[test]
    fn test_meter_reaches_target() {
        assert_eq!(meter_fill(93.0, METER_DELAY + METER_DURATION), 93.0);
        assert_eq!(meter_fill(93.0, Duration::from_secs(10)), 93.0);
    }

    #[test]
    fn test_meter_eases_out() {
        let quarter = meter_fill(100.0, METER_DELAY + METER_DURATION / 4);
        let half = meter_fill(100.0, METER_DELAY + METER_DURATION / 2);
        // Ease-out front-loads progress
        assert!(quarter > 25.0);
        assert!(half > 50.0 && half < 100.0);
        assert!(half > quarter);
    }

    #[test]
    fn test_animation_restarts_on_new_result() {
        let start = Instant::now();
        let mut anim = MeterAnimation::default();

        anim.observe(Some(AnalysisId::new(1)), start);
        let later = start + Duration::from_secs(5);
        assert_eq!(anim.fill(90.0, later), 90.0);

        // Same result keeps its progress
        anim.observe(Some(AnalysisId::new(1)), later);
        assert_eq!(anim.fill(90.0, later), 90.0);

        // New result in the same slot starts over
        anim.observe(Some(AnalysisId::new(2)), later);
        assert_eq!(anim.fill(90.0, later), 0.0);
        assert!(anim.is_running(later));
    }

    #[test]
    fn test_animation_clears_without_result() {
        let now = Instant::now();
        let mut anim = MeterAnimation::default();
        anim.observe(Some(AnalysisId::new(1)), now);
        anim.observe(None, now);

        assert_eq!(anim.key(), None);
        assert!(!anim.is_running(now));
    }

    #[test]
    fn test_bar_line_fill_width() {
        let meter = ConfidenceMeter::new("50.0", 50.0, Verdict::Deepfake);
        let line = meter.bar_line(10);
        assert_eq!(line.spans[0].content.chars().count(), 5);
        assert_eq!(line.spans[1].content.chars().count(), 5);
    }

    #[test]
    fn test_bar_line_clamps_overflow() {
        let meter = ConfidenceMeter::new("150.0", 150.0, Verdict::LikelyReal);
        let line = meter.bar_line(8);
        assert_eq!(line.spans[0].content.chars().count(), 8);
        assert!(line.spans[1].content.is_empty());
    }

    #[test]
    fn test_caption_line_has_percentage() {
        let meter = ConfidenceMeter::new("93.0", 0.0, Verdict::Deepfake);
        let text: String = meter
            .caption_line(40)
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect();
        assert!(text.starts_with("Confidence Score"));
        assert!(text.ends_with("93.0%"));
        assert_eq!(text.len(), 40);
    }

    #[test]
    fn test_meter_widget_renders_bar_and_caption() {
        let mut term = TestTerminal::with_size(30, 2);
        let area = term.area();
        term.render_widget(ConfidenceMeter::new("93.0", 50.0, Verdict::Deepfake), area);

        assert!(term.buffer_contains("Confidence Score"));
        assert!(term.buffer_contains("93.0%"));
        assert!(term.buffer_contains("███████████████░"));
    }
}
