//! Bottom line of key hints, plus the active detection mode

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use veritas_app::state::UiMode;
use veritas_core::{DetectionMode, WorkflowState};

use crate::theme::styles;

pub struct KeyHints {
    ui_mode: UiMode,
    workflow: WorkflowState,
    mode: DetectionMode,
}

impl KeyHints {
    pub fn new(ui_mode: UiMode, workflow: WorkflowState, mode: DetectionMode) -> Self {
        Self {
            ui_mode,
            workflow,
            mode,
        }
    }

    /// `(key, action)` pairs for the current screen
    pub fn hints(&self) -> &'static [(&'static str, &'static str)] {
        match self.ui_mode {
            UiMode::FilePrompt => &[("Enter", "Load"), ("Esc", "Cancel")],
            UiMode::Notification => &[("Enter", "Dismiss")],
            UiMode::Main => match self.workflow {
                WorkflowState::Idle => &[("o", "Browse"), ("d", "Mode"), ("q", "Quit")],
                WorkflowState::FileSelected => &[
                    ("Enter", "Analyze"),
                    ("o", "Replace"),
                    ("r", "Reset"),
                    ("d", "Mode"),
                    ("q", "Quit"),
                ],
                WorkflowState::Analyzing => &[("d", "Mode"), ("q", "Quit")],
                WorkflowState::Complete => &[("x", "Dismiss"), ("d", "Mode"), ("q", "Quit")],
            },
        }
    }
}

impl Widget for KeyHints {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let mut spans = vec![Span::raw(" ")];
        for (key, action) in self.hints() {
            spans.push(Span::styled(*key, styles::keybinding()));
            spans.push(Span::styled(format!(" {action}  "), styles::text_muted()));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);

        let mode = Line::styled(format!("{} ", self.mode.label()), styles::accent());
        let mode_width = mode.width() as u16;
        if mode_width < area.width {
            let mode_area = Rect {
                x: area.right() - mode_width,
                width: mode_width,
                ..area
            };
            Paragraph::new(mode).render(mode_area, buf);
        }
    }
}
