//! Full-frame rendering tests for the view function

use std::sync::Arc;
use std::time::{Duration, Instant};

use veritas_app::config::{IconMode, Settings};
use veritas_app::state::{AppState, Notification};
use veritas_core::AnalysisResult;

use super::*;
use crate::test_utils::TestTerminal;

fn with_file(name: &str) -> AppState {
    let mut state = AppState::new();
    state.select_file(name, None, Arc::from(&b"not really an image"[..]));
    state
}

fn completed(result: AnalysisResult) -> AppState {
    let mut state = with_file("face.png");
    complete(&mut state, result);
    state
}

fn complete(state: &mut AppState, result: AnalysisResult) {
    let ticket = state.begin_analysis().unwrap().unwrap();
    assert!(state.complete_analysis(ticket.id, result));
}

fn fake_result() -> AnalysisResult {
    AnalysisResult {
        is_fake: true,
        confidence: 0.93,
        label: "AI".into(),
        ..Default::default()
    }
}

fn render(term: &mut TestTerminal, state: &AppState) {
    let mut view_state = ViewState::default();
    term.draw_with(|frame| view(frame, state, &mut view_state));
}

fn bar_cells(term: &TestTerminal) -> usize {
    term.content().chars().filter(|c| *c == '█').count()
}

#[test]
fn test_idle_page_renders_static_content() {
    let mut term = TestTerminal::with_size(100, 30);
    render(&mut term, &AppState::new());

    assert!(term.buffer_contains("Veritas AI"));
    assert!(term.buffer_contains("How it Works"));
    assert!(term.buffer_contains("About"));
    assert!(term.buffer_contains("New Model v2.1 Released"));
    assert!(term.buffer_contains("Detect Deepfakes with Precision"));
    assert!(term.buffer_contains("Artifact Analysis"));
    assert!(term.buffer_contains("Privacy First"));
    assert!(term.buffer_contains("Real-time Processing"));
}

#[test]
fn test_idle_shows_drop_zone() {
    let mut term = TestTerminal::new();
    render(&mut term, &AppState::new());

    assert!(term.buffer_contains("Upload an image"));
    assert!(term.buffer_contains("Press o to browse"));
    assert!(term.buffer_contains("Supports JPG, PNG, WEBP (Max 10MB)"));
    assert!(!term.buffer_contains("Analyze Image"));
}

#[test]
fn test_file_selected_offers_analyze() {
    let mut term = TestTerminal::new();
    render(&mut term, &with_file("portrait.jpg"));

    assert!(term.buffer_contains("portrait.jpg"));
    assert!(term.buffer_contains("Analyze Image"));
    assert!(term.buffer_contains("preview://"));
    assert!(!term.buffer_contains("Upload an image"));
}

#[test]
fn test_analyzing_hides_analyze_action() {
    let mut state = with_file("portrait.jpg");
    state.begin_analysis().unwrap().unwrap();

    let mut term = TestTerminal::new();
    render(&mut term, &state);

    assert!(term.buffer_contains("Scanning Artifacts..."));
    assert!(!term.buffer_contains("Analyze Image"));
    assert!(!term.buffer_contains("Analyze"));
}

#[test]
fn test_result_card_renders_fake_verdict() {
    let mut term = TestTerminal::with_size(100, 40);
    render(&mut term, &completed(fake_result()));

    assert!(term.buffer_contains("Analysis Complete"));
    assert!(term.buffer_contains("Verdict: AI"));
    assert!(term.buffer_contains("DEEPFAKE DETECTED"));
    assert!(term.buffer_contains("High probability of digital manipulation artifacts found."));
    assert!(term.buffer_contains("93.0%"));
    assert!(term.buffer_contains("Model Version: Veritas-v2.1 (MesoNet)"));
    assert!(term.buffer_contains("Raw Output: N/A"));
    assert!(!term.buffer_contains("Processed in"));
}

#[test]
fn test_result_card_renders_real_verdict_with_details() {
    let result = AnalysisResult {
        is_fake: false,
        confidence: 0.88,
        label: "Real".into(),
        processing_time: Some(1.2),
        fake_score: Some(0.1),
        real_score: Some(0.9),
        message: Some("Fallback Mode".into()),
    };

    let mut term = TestTerminal::with_size(100, 40);
    render(&mut term, &completed(result));

    assert!(term.buffer_contains("LIKELY REAL"));
    assert!(term.buffer_contains("No significant digital anomalies detected."));
    assert!(term.buffer_contains("Processed in 1.2s"));
    assert!(term.buffer_contains("88.0%"));
    assert!(term.buffer_contains("Raw Output: Fake: 10% / Real: 90%"));
    assert!(term.buffer_contains("Fallback Mode"));
}

#[test]
fn test_missing_confidence_renders_zero_percent() {
    let result = AnalysisResult {
        is_fake: false,
        label: "Real".into(),
        ..Default::default()
    };

    let mut term = TestTerminal::with_size(100, 40);
    render(&mut term, &completed(result));

    assert!(term.buffer_contains("0.0%"));
}

#[test]
fn test_result_fits_standard_terminal() {
    let mut term = TestTerminal::new();
    render(&mut term, &completed(fake_result()));

    assert!(term.buffer_contains("DEEPFAKE DETECTED"));
    assert!(term.buffer_contains("93.0%"));
    assert!(term.buffer_contains("Raw Output: N/A"));
}

#[test]
fn test_meter_fills_after_delay() {
    let state = completed(fake_result());
    let mut term = TestTerminal::with_size(100, 40);
    let mut view_state = ViewState::default();
    let start = Instant::now();

    term.draw_with(|frame| view_at(frame, &state, &mut view_state, start));
    assert_eq!(bar_cells(&term), 0);

    let later = start + Duration::from_secs(2);
    term.draw_with(|frame| view_at(frame, &state, &mut view_state, later));
    assert!(bar_cells(&term) > 0);
}

#[test]
fn test_meter_restarts_for_new_result() {
    let mut state = completed(fake_result());
    let mut term = TestTerminal::with_size(100, 40);
    let mut view_state = ViewState::default();
    let start = Instant::now();
    let later = start + Duration::from_secs(2);

    term.draw_with(|frame| view_at(frame, &state, &mut view_state, start));
    term.draw_with(|frame| view_at(frame, &state, &mut view_state, later));
    assert!(bar_cells(&term) > 0);

    // Re-analyze the same file: a new result replaces the old one in place
    state.select_file("face.png", None, Arc::from(&b"again"[..]));
    complete(&mut state, fake_result());

    term.draw_with(|frame| view_at(frame, &state, &mut view_state, later));
    assert_eq!(bar_cells(&term), 0);
}

#[test]
fn test_notification_overlay() {
    let mut state = with_file("portrait.jpg");
    state.show_notification(Notification::analysis_failed(
        "API Error: 500 - internal error",
    ));

    let mut term = TestTerminal::new();
    render(&mut term, &state);

    assert!(term.buffer_contains("Analysis Failed: API Error: 500 - internal error"));
    assert!(term.buffer_contains("[Enter] OK"));
}

#[test]
fn test_file_prompt_overlay() {
    let mut state = AppState::new();
    state.open_file_prompt();
    state.file_prompt.input = "/tmp/face.png".into();

    let mut term = TestTerminal::new();
    render(&mut term, &state);

    assert!(term.buffer_contains("Open Image"));
    assert!(term.buffer_contains("> /tmp/face.png"));
}

#[test]
fn test_compact_terminal_hides_hero_and_features() {
    let mut term = TestTerminal::compact();
    render(&mut term, &AppState::new());

    assert!(term.buffer_contains("Upload an image"));
    assert!(!term.buffer_contains("Detect"));
    assert!(!term.buffer_contains("Privacy First"));
}

#[test]
fn test_mode_indicator_follows_demo_flag() {
    let mut state = AppState::new();
    let mut term = TestTerminal::compact();

    render(&mut term, &state);
    assert!(term.buffer_contains("Real API"));
    assert!(!term.buffer_contains("Demo Mode"));

    state.toggle_demo_mode();
    render(&mut term, &state);
    assert!(term.buffer_contains("Demo Mode"));
}

#[test]
fn test_features_can_be_disabled() {
    let mut settings = Settings::default();
    settings.ui.show_features = false;

    let mut term = TestTerminal::with_size(100, 30);
    render(&mut term, &AppState::with_settings(settings));

    assert!(!term.buffer_contains("Artifact Analysis"));
}

#[test]
fn test_nerd_font_icons() {
    let mut settings = Settings::default();
    settings.ui.icons = IconMode::NerdFonts;

    let mut term = TestTerminal::new();
    render(&mut term, &AppState::with_settings(settings));

    assert!(term.buffer_contains("\u{f132}"));
}
