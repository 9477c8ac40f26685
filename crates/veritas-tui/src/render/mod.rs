//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use std::time::Instant;

use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;
use veritas_app::state::{AppState, UiMode};
use veritas_core::WorkflowState;

use super::{layout, widgets};
use crate::theme::{icons::IconSet, palette};

/// View-local state that survives between frames.
///
/// Only cosmetic values live here; nothing in it affects the workflow.
#[derive(Debug, Default)]
pub struct ViewState {
    pub meter: widgets::MeterAnimation,
}

/// Render the complete UI (View function in TEA)
pub fn view(frame: &mut Frame, state: &AppState, view_state: &mut ViewState) {
    view_at(frame, state, view_state, Instant::now());
}

/// Render as of `now`; animation progress is computed from it
pub fn view_at(frame: &mut Frame, state: &AppState, view_state: &mut ViewState, now: Instant) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let icons = IconSet::new(state.settings.ui.icons);
    let areas = layout::create(area, state.settings.ui.show_features);
    let workflow = state.workflow_state();

    frame.render_widget(widgets::NavBar::new(icons), areas.nav);

    if !areas.is_compact() {
        frame.render_widget(widgets::Hero::new(state.demo_mode(), icons), areas.hero);
    }

    // The meter animation follows whichever result is on screen
    view_state.meter.observe(state.result_id(), now);

    match (workflow, state.result()) {
        (WorkflowState::Complete, Some(result)) => {
            let fill = view_state.meter.fill(result.confidence_percent(), now);
            frame.render_widget(
                widgets::ResultCard::new(result, icons).meter_fill(fill),
                areas.main,
            );
        }
        _ => {
            frame.render_widget(
                widgets::UploadPanel::new(workflow, state.file(), icons)
                    .spinner_frame(state.spinner_frame),
                areas.main,
            );
        }
    }

    if areas.features.height > 0 {
        frame.render_widget(widgets::FeatureCards::new(icons), areas.features);
    }

    frame.render_widget(
        widgets::KeyHints::new(state.ui_mode, workflow, state.detection_mode()),
        areas.hints,
    );

    render_modal(frame, state, icons);
}

/// Render the prompt or notification on top of a dimmed page
fn render_modal(frame: &mut Frame, state: &AppState, icons: IconSet) {
    let area = frame.area();
    match state.ui_mode {
        UiMode::Main => {}
        UiMode::FilePrompt => {
            widgets::modal_overlay::dim_background(frame.buffer_mut(), area);
            frame.render_widget(widgets::FilePrompt::new(&state.file_prompt), area);
        }
        UiMode::Notification => {
            if let Some(notification) = &state.notification {
                widgets::modal_overlay::dim_background(frame.buffer_mut(), area);
                frame.render_widget(widgets::NotificationDialog::new(notification, icons), area);
            }
        }
    }
}
