// Tests for page rendering

use showcase_core::card::{LoadOutcome, PreviewState};
use showcase_core::page::{OutputFormat, Page};
use showcase_core::site::{Project, SiteConfig};

const MUISI_PREVIEW: &str =
    "https://s.wordpress.com/mshots/v1/https%3A%2F%2Fmuisi.vercel.app%2F?w=1400";

fn bundled_page() -> Page {
    Page::new(SiteConfig::bundled().unwrap())
}

fn page_with_projects(projects: Vec<Project>) -> Page {
    let mut site = SiteConfig::bundled().unwrap();
    site.projects = projects;
    Page::new(site)
}

// ============================================================================
// Output Format Tests
// ============================================================================

#[test]
fn test_output_format_from_str() {
    assert_eq!(OutputFormat::from_str("html"), Some(OutputFormat::Html));
    assert_eq!(OutputFormat::from_str("HTML"), Some(OutputFormat::Html));
    assert_eq!(OutputFormat::from_str("json"), Some(OutputFormat::Json));
    assert_eq!(OutputFormat::from_str("pdf"), None);
}

// ============================================================================
// HTML Rendering Tests
// ============================================================================

#[test]
fn test_render_html_lists_every_project() {
    let page = bundled_page();
    let html = page.render_html();

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert_eq!(html.matches("<article").count(), 8);
    for project in &page.site().projects {
        assert!(html.contains(&project.name), "missing {}", project.name);
        assert!(html.contains(&project.summary), "missing summary for {}", project.name);
    }
}

#[test]
fn test_render_html_keeps_project_order() {
    let html = bundled_page().render_html();

    let first = html.find("Marchitects Builders").unwrap();
    let middle = html.find("Linea Collective").unwrap();
    let last = html.find("DGRP Baysound").unwrap();
    assert!(first < middle && middle < last);
}

#[test]
fn test_every_link_opens_without_opener_or_referrer() {
    let html = bundled_page().render_html();

    let new_context = html.matches(r#"target="_blank""#).count();
    let protected = html.matches(r#"rel="noopener noreferrer""#).count();
    assert!(new_context > 0);
    assert_eq!(new_context, protected);
}

#[test]
fn test_preview_image_attributes() {
    let html = bundled_page().render_html();

    assert!(html.contains(&format!(r#"src="{}""#, MUISI_PREVIEW)));
    assert!(html.contains(r#"alt="Preview of Muisi""#));
    assert!(html.contains(r#"loading="lazy""#));
    assert!(html.contains(r#"decoding="async""#));
    assert!(html.contains(r#"referrerpolicy="no-referrer""#));
    assert!(html.contains("onerror="));
}

#[test]
fn test_loaded_cards_carry_hidden_placeholder() {
    let html = bundled_page().render_html();

    assert_eq!(html.matches("<img").count(), 8);
    assert_eq!(html.matches("Preview unavailable").count(), 8);
    assert!(!html.contains(r#"class="preview failed""#));
}

#[test]
fn test_card_shows_normalized_url_and_domain_badge() {
    let html = bundled_page().render_html();

    assert!(html.contains(r#"<div class="card-url">https://muisi.vercel.app/</div>"#));
    assert!(html.contains("<span>muisi.vercel.app</span>"));
    assert!(html.contains(r#"data-key="https://muisi.vercel.app/""#));
}

#[test]
fn test_calls_to_action() {
    let html = bundled_page().render_html();

    assert!(html.contains("Partner with us"));
    assert!(html.contains(r#"href="mailto:kiminou.knox@aafcbuilders.org""#));
    assert!(html.contains(r#"class="btn btn-outline""#));
    assert!(html.contains(r#"aria-label="Open Muisi""#));
}

#[test]
fn test_theme_colours_in_body_style() {
    let html = bundled_page().render_html();
    assert!(html.contains("--gold:#D4A64A;--navy-1:#070B14;--navy-2:#0B1630;--navy-3:#0E2348"));
}

#[test]
fn test_text_is_escaped() {
    let page = page_with_projects(vec![Project::new(
        "<script>alert(1)</script>",
        "example.com",
        "Fish & Chips",
    )]);
    let html = page.render_html();

    assert!(!html.contains("<script>alert(1)</script>"));
    assert!(html.contains("&lt;script&gt;"));
    assert!(html.contains("Fish &amp; Chips"));
}

#[test]
fn test_blank_url_renders_disabled_link() {
    let page = page_with_projects(vec![Project::new("Draft", "  ", "Not live yet")]);
    let html = page.render_html();

    assert!(html.contains(r#"aria-disabled="true""#));
    assert!(html.contains(r#"aria-label="Open Draft""#));
    assert!(html.contains(r#"<div class="card-url"></div>"#));
}

// ============================================================================
// Failure Fallback Tests
// ============================================================================

#[test]
fn test_failed_preview_renders_placeholder_only() {
    let mut page = bundled_page();
    let changed = page.apply_outcomes(vec![(MUISI_PREVIEW.to_string(), LoadOutcome::Failed)]);
    assert_eq!(changed, 1);

    let html = page.render_html();
    assert!(!html.contains(MUISI_PREVIEW));
    assert_eq!(html.matches("<img").count(), 7);
    assert_eq!(html.matches(r#"class="preview failed""#).count(), 1);

    // placeholder still links to the site
    assert!(html.contains(r#"<a class="placeholder" href="https://muisi.vercel.app/""#));
}

#[test]
fn test_repeated_failure_is_ignored() {
    let mut page = bundled_page();
    let outcome = || vec![(MUISI_PREVIEW.to_string(), LoadOutcome::Failed)];

    assert_eq!(page.apply_outcomes(outcome()), 1);
    assert_eq!(page.apply_outcomes(outcome()), 0);
    assert_eq!(page.cards()[3].preview.state(), PreviewState::Failed);
}

#[test]
fn test_loaded_outcomes_change_nothing() {
    let mut page = bundled_page();
    let outcomes: Vec<_> = page
        .preview_urls()
        .into_iter()
        .map(|url| (url, LoadOutcome::Loaded))
        .collect();

    assert_eq!(page.apply_outcomes(outcomes), 0);
    assert!(page.cards().iter().all(|c| !c.preview.is_failed()));
}

#[test]
fn test_unknown_outcome_urls_are_ignored() {
    let mut page = bundled_page();
    let changed = page.apply_outcomes(vec![(
        "https://elsewhere.example/shot.png".to_string(),
        LoadOutcome::Failed,
    )]);
    assert_eq!(changed, 0);
}

// ============================================================================
// Duplicate URL Tests
// ============================================================================

#[test]
fn test_duplicate_urls_still_render() {
    let mut page = page_with_projects(vec![
        Project::new("First", "https://same.example/", "one"),
        Project::new("Second", "https://same.example/", "two"),
    ]);

    let html = page.render_html();
    assert_eq!(html.matches("<article").count(), 2);
    assert_eq!(html.matches(r#"data-key="https://same.example/""#).count(), 2);
    assert_eq!(page.site().duplicate_urls(), vec!["https://same.example/".to_string()]);

    // both cards share a preview URL, so one outcome reaches both
    let src = page.preview_urls()[0].clone();
    assert_eq!(page.apply_outcomes(vec![(src, LoadOutcome::Failed)]), 2);
}

#[test]
fn test_shared_preview_keeps_failure_after_later_success() {
    let mut page = page_with_projects(vec![
        Project::new("First", "https://same.example/", "one"),
        Project::new("Second", "https://same.example/", "two"),
    ]);
    let src = page.preview_urls()[0].clone();

    let changed = page.apply_outcomes(vec![
        (src.clone(), LoadOutcome::Failed),
        (src, LoadOutcome::Loaded),
    ]);

    assert_eq!(changed, 2);
    assert!(page.cards().iter().all(|c| c.preview.is_failed()));
}

// ============================================================================
// JSON Rendering Tests
// ============================================================================

#[test]
fn test_render_json_manifest() -> Result<(), Box<dyn std::error::Error>> {
    let mut page = bundled_page();
    page.apply_outcomes(vec![(MUISI_PREVIEW.to_string(), LoadOutcome::Failed)]);

    let json = page.render(OutputFormat::Json)?;
    let value: serde_json::Value = serde_json::from_str(&json)?;
    let root = &value["page"];

    assert_eq!(root["metadata"]["generator"], "Showcase");
    assert_eq!(root["title"], "AAFC PORTFOLIO");
    assert_eq!(root["summary"]["total_cards"], 8);
    assert_eq!(root["summary"]["failed_previews"], 1);

    let cards = root["cards"].as_array().unwrap();
    assert_eq!(cards.len(), 8);
    assert_eq!(cards[3]["name"], "Muisi");
    assert_eq!(cards[3]["domain"], "muisi.vercel.app");
    assert_eq!(cards[3]["href"], "https://muisi.vercel.app/");
    assert_eq!(cards[3]["preview_url"], MUISI_PREVIEW);
    assert_eq!(cards[3]["state"], "failed");
    assert_eq!(cards[0]["state"], "loaded");

    Ok(())
}
