//! Upload panel: empty drop zone, selected file details, scanning spinner

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use veritas_core::types::format_size;
use veritas_core::{SelectedFile, WorkflowState};

use crate::theme::{icons::IconSet, styles};

pub const ADVISORY_TEXT: &str = "Supports JPG, PNG, WEBP (Max 10MB)";

pub struct UploadPanel<'a> {
    workflow: WorkflowState,
    file: Option<&'a SelectedFile>,
    spinner_frame: usize,
    icons: IconSet,
}

impl<'a> UploadPanel<'a> {
    pub fn new(workflow: WorkflowState, file: Option<&'a SelectedFile>, icons: IconSet) -> Self {
        Self {
            workflow,
            file,
            spinner_frame: 0,
            icons,
        }
    }

    pub fn spinner_frame(mut self, frame: usize) -> Self {
        self.spinner_frame = frame;
        self
    }

    fn empty_lines(&self) -> Vec<Line<'static>> {
        vec![
            Line::styled(self.icons.upload(), styles::accent_bold()),
            Line::styled("Upload an image", styles::text_bright_bold()),
            Line::from(vec![
                Span::styled("Press ", styles::text_secondary()),
                Span::styled("o", styles::keybinding()),
                Span::styled(" to browse", styles::text_secondary()),
            ]),
            Line::default(),
            Line::styled(ADVISORY_TEXT, styles::text_muted()),
        ]
    }

    fn file_lines(&self, file: &SelectedFile) -> Vec<Line<'static>> {
        let preview = file.preview();

        let mut facts = vec![format_size(file.len())];
        if let Some(format) = preview.format_label() {
            facts.push(format);
        }
        if let Some((w, h)) = preview.dimensions() {
            facts.push(format!("{w}×{h}"));
        }

        let mut lines = vec![
            Line::from(vec![
                Span::styled(self.icons.image(), styles::accent()),
                Span::raw(" "),
                Span::styled(file.name().to_string(), styles::text_bright_bold()),
            ]),
            Line::styled(facts.join("  ·  "), styles::text_secondary()),
            Line::styled(format!("Preview: {}", preview.uri()), styles::text_muted()),
        ];

        if file.exceeds_advisory_size() {
            lines.push(Line::styled(
                "Larger than 10MB, the service may reject it",
                styles::warning(),
            ));
        }

        lines.push(Line::default());
        match self.workflow {
            WorkflowState::Analyzing => lines.push(Line::from(vec![
                Span::styled(self.icons.spinner(self.spinner_frame), styles::accent_bold()),
                Span::styled(
                    " Scanning Artifacts...",
                    styles::accent().add_modifier(Modifier::ITALIC),
                ),
            ])),
            // The analyze action is offered only when nothing is in flight
            WorkflowState::FileSelected => lines.push(Line::from(vec![
                Span::styled("[Enter] ", styles::keybinding()),
                Span::styled(
                    format!("{} Analyze Image", self.icons.scan()),
                    styles::accent_bold(),
                ),
            ])),
            WorkflowState::Idle | WorkflowState::Complete => {}
        }

        lines
    }
}

impl Widget for UploadPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.workflow.is_busy()).title(" Upload ");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let lines = match self.file {
            Some(file) => self.file_lines(file),
            None => self.empty_lines(),
        };

        // Vertically center the content block
        let height = (lines.len() as u16).min(inner.height);
        let top = inner.y + (inner.height - height) / 2;
        let content = Rect {
            y: top,
            height,
            ..inner
        };

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(content, buf);
    }
}
