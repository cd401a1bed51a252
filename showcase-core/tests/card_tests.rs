// Tests for preview cards and their one-way failure transition

use showcase_core::card::{LoadOutcome, PreviewCard, PreviewState};
use showcase_core::preview::ThumbnailService;
use showcase_probe::ProbeResult;

fn card(url: &str, title: &str) -> PreviewCard {
    PreviewCard::new(url, title, &ThumbnailService::default())
}

fn probe_result(status_code: u16, content_type: Option<&str>) -> ProbeResult {
    let mut result = ProbeResult::new("https://s.wordpress.com/mshots/v1/x?w=1400".to_string());
    result.status_code = status_code;
    result.content_type = content_type.map(String::from);
    result
}

// ============================================================================
// Derivation Tests
// ============================================================================

#[test]
fn test_card_derives_link_domain_and_preview() {
    let card = card("muisi.vercel.app", "Muisi");

    assert_eq!(card.title(), "Muisi");
    assert_eq!(card.href().as_str(), "https://muisi.vercel.app");
    assert_eq!(card.domain(), "muisi.vercel.app");
    assert_eq!(
        card.src(),
        "https://s.wordpress.com/mshots/v1/https%3A%2F%2Fmuisi.vercel.app?w=1400"
    );
    assert_eq!(card.state(), PreviewState::Loaded);
}

#[test]
fn test_card_glyph_is_uppercased_first_letter() {
    assert_eq!(card("https://muisi.vercel.app/", "Muisi").glyph(), "M");
    assert_eq!(card("www.lineaculture.com", "Linea").glyph(), "W");
}

#[test]
fn test_card_glyph_empty_without_domain() {
    assert_eq!(card("", "Nothing").glyph(), "");
    assert_eq!(card("mailto:someone@example.com", "Mail").glyph(), "");
}

#[test]
fn test_card_blank_url_is_not_actionable() {
    let card = card("   ", "Blank");
    assert!(!card.href().is_actionable());
    assert_eq!(card.domain(), "");
}

// ============================================================================
// State Transition Tests
// ============================================================================

#[test]
fn test_mark_failed_transitions_once() {
    let mut card = card("example.com", "Example");

    assert!(card.mark_failed());
    assert_eq!(card.state(), PreviewState::Failed);

    assert!(!card.mark_failed());
    assert_eq!(card.state(), PreviewState::Failed);
}

#[test]
fn test_loaded_outcome_keeps_state() {
    let mut card = card("example.com", "Example");

    assert!(!card.on_load(LoadOutcome::Loaded));
    assert_eq!(card.state(), PreviewState::Loaded);
}

#[test]
fn test_failed_card_never_reverts() {
    let mut card = card("example.com", "Example");

    assert!(card.on_load(LoadOutcome::Failed));
    assert!(!card.on_load(LoadOutcome::Loaded));
    assert!(!card.on_load(LoadOutcome::Failed));
    assert!(card.is_failed());
}

#[test]
fn test_failure_keeps_link_usable() {
    let mut card = card("example.com/work", "Example");
    card.mark_failed();

    assert_eq!(card.href().as_str(), "https://example.com/work");
    assert_eq!(card.domain(), "example.com");
    assert_eq!(card.glyph(), "E");
}

// ============================================================================
// Probe Outcome Mapping Tests
// ============================================================================

#[test]
fn test_outcome_from_image_response() {
    let result = probe_result(200, Some("image/jpeg"));
    assert_eq!(LoadOutcome::from(&result), LoadOutcome::Loaded);
}

#[test]
fn test_outcome_from_not_found() {
    let result = probe_result(404, Some("image/jpeg"));
    assert_eq!(LoadOutcome::from(&result), LoadOutcome::Failed);
}

#[test]
fn test_outcome_from_non_image_body() {
    let result = probe_result(200, Some("text/html; charset=utf-8"));
    assert_eq!(LoadOutcome::from(&result), LoadOutcome::Failed);
}

#[test]
fn test_outcome_from_transport_error() {
    let result = ProbeResult::with_error(
        "https://s.wordpress.com/mshots/v1/x?w=1400".to_string(),
        "operation timed out".to_string(),
    );
    assert_eq!(LoadOutcome::from(&result), LoadOutcome::Failed);
}
