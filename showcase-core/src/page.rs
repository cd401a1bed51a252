// Page rendering: HTML document and JSON manifest

use crate::card::{LoadOutcome, PreviewCard, PreviewState};
use crate::link::normalize_href;
use crate::site::{ButtonVariant, CallToAction, Project, SiteConfig, Theme};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Html,
    Json,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "html" | "htm" => Some(OutputFormat::Html),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// Inline CSS for the page. Theme colours arrive as custom properties on
/// `<body>`.
pub const PAGE_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
body{min-height:100vh;font-family:Inter,-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;color:#fff;background-image:radial-gradient(1200px circle at 50% 18%,rgba(14,35,72,.85),transparent 62%),radial-gradient(900px circle at 65% 28%,rgba(212,166,74,.14),transparent 60%),linear-gradient(var(--navy-1),var(--navy-2))}
a{text-decoration:none}
.wrap{max-width:72rem;margin:0 auto;padding:0 1.25rem 3.5rem}
header{padding:2rem 0 2.5rem;background-image:linear-gradient(180deg,rgba(0,0,0,.55),rgba(0,0,0,0))}
.bar{display:flex;align-items:center;justify-content:space-between;gap:1rem}
.logo{font-size:1.5rem;font-weight:900;letter-spacing:-.02em;line-height:1;background-image:linear-gradient(180deg,#F7D27D,var(--gold));-webkit-background-clip:text;background-clip:text;color:transparent}
.logo-rule{margin-top:.25rem;height:2px;width:4rem;background-color:var(--gold);opacity:.75}
.hero{margin-top:2.5rem;text-align:center}
.hero h1{font-size:3.75rem;font-weight:800;letter-spacing:-.02em}
.tagline{margin-top:1rem;font-size:1.25rem;font-weight:700;color:var(--gold)}
.actions{margin-top:2rem;display:flex;flex-wrap:wrap;align-items:center;justify-content:center;gap:.75rem}
.btn{display:inline-flex;align-items:center;justify-content:center;border-radius:.75rem;padding:.5rem 1rem;font-size:.875rem;font-weight:600;box-shadow:0 0 0 2px rgba(212,166,74,.18)}
.btn-gold{background-color:var(--gold);color:#000;border:1px solid rgba(0,0,0,.15)}
.btn-outline{background-color:transparent;color:var(--gold);border:1px solid rgba(212,166,74,.55)}
.btn[aria-disabled="true"]{opacity:.45;cursor:not-allowed}
.grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(18rem,1fr));gap:1.5rem}
.card{border-radius:1.5rem;overflow:hidden;background-color:rgba(255,255,255,.06);border:1px solid rgba(255,255,255,.10)}
.card-media{padding:1rem}
.preview{position:relative;overflow:hidden;border-radius:1rem;border:1px solid rgba(255,255,255,.12)}
.frame{position:relative;width:100%;padding-top:56.25%}
.shot,.placeholder{position:absolute;inset:0}
.shot img{width:100%;height:100%;object-fit:cover}
.placeholder{display:grid;place-items:center;background-image:radial-gradient(700px circle at 30% 20%,rgba(212,166,74,.18),transparent 60%),radial-gradient(700px circle at 70% 30%,rgba(14,35,72,.55),transparent 65%),linear-gradient(var(--navy-2),var(--navy-3))}
.preview:not(.failed) .placeholder{display:none}
.preview.failed .shot{display:none}
.glyph{margin:0 auto;height:3rem;width:3rem;border-radius:1rem;display:grid;place-items:center;font-weight:900;color:#fff;background-color:rgba(255,255,255,.08);border:1px solid rgba(255,255,255,.14)}
.placeholder-text{text-align:center;padding:0 1.25rem}
.unavailable{margin-top:.75rem;font-size:.875rem;font-weight:600;color:#fff}
.placeholder-domain{margin-top:.25rem;font-size:.75rem;color:rgba(255,255,255,.70)}
.badge{position:absolute;left:.75rem;top:.75rem;display:inline-flex;align-items:center;border-radius:9999px;padding:.25rem .75rem;font-size:.75rem;font-weight:600;color:rgba(255,255,255,.92);background-color:rgba(0,0,0,.35);border:1px solid rgba(255,255,255,.14);backdrop-filter:blur(10px)}
.card-body{padding:0 1.5rem 1.5rem}
.card-head{display:flex;align-items:flex-start;justify-content:space-between;gap:.75rem}
.card-name{font-size:1.125rem;font-weight:600;line-height:1.25}
.card-url{margin-top:.25rem;font-size:.75rem;word-break:break-all;color:rgba(255,255,255,.66)}
.live{flex-shrink:0;border-radius:9999px;padding:.25rem .625rem;font-size:.75rem;font-weight:600;color:var(--gold);background-color:rgba(212,166,74,.16);border:1px solid rgba(212,166,74,.38)}
.summary{margin-top:.75rem;font-size:.875rem;line-height:1.625;color:rgba(255,255,255,.78)}
.card-cta{margin-top:1rem}
"#;

/// Marks the enclosing preview as failed when its screenshot errors. The
/// class is only ever added, so repeated errors change nothing.
const ON_IMAGE_ERROR: &str = "this.closest('.preview').classList.add('failed')";

/// A project together with its preview card.
#[derive(Debug, Clone)]
pub struct ProjectCard {
    pub project: Project,
    pub preview: PreviewCard,
}

#[derive(Debug, Clone)]
pub struct Page {
    site: SiteConfig,
    cards: Vec<ProjectCard>,
}

impl Page {
    pub fn new(site: SiteConfig) -> Self {
        site.warn_on_duplicates();

        let cards = site
            .projects
            .iter()
            .map(|project| ProjectCard {
                project: project.clone(),
                preview: PreviewCard::new(&project.url, &project.name, &site.thumbnails),
            })
            .collect();

        Self { site, cards }
    }

    pub fn site(&self) -> &SiteConfig {
        &self.site
    }

    pub fn cards(&self) -> &[ProjectCard] {
        &self.cards
    }

    /// Preview request URLs, one per card, in card order.
    pub fn preview_urls(&self) -> Vec<String> {
        self.cards
            .iter()
            .map(|card| card.preview.src().to_string())
            .collect()
    }

    /// Deliver image-load outcomes keyed by preview URL, in arrival order.
    /// Cards sharing a URL receive every outcome for it, so a failure is
    /// never undone by a later success. Returns how many cards changed state.
    pub fn apply_outcomes<I>(&mut self, outcomes: I) -> usize
    where
        I: IntoIterator<Item = (String, LoadOutcome)>,
    {
        let mut transitions = 0;

        for (src, outcome) in outcomes {
            for card in self.cards.iter_mut().filter(|c| c.preview.src() == src) {
                if card.preview.on_load(outcome) {
                    transitions += 1;
                }
            }
        }

        debug!("{} card(s) moved to the placeholder state", transitions);
        transitions
    }

    pub fn render(&self, format: OutputFormat) -> Result<String, serde_json::Error> {
        match format {
            OutputFormat::Html => Ok(self.render_html()),
            OutputFormat::Json => self.render_json(),
        }
    }

    pub fn render_html(&self) -> String {
        info!("Rendering {} project card(s) as HTML", self.cards.len());
        let site = &self.site;

        let markup = html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    title { (site.title) }
                    style { (PreEscaped(PAGE_CSS)) }
                }
                body style=(theme_vars(&site.theme)) {
                    div class="wrap" {
                        header {
                            div class="bar" {
                                (logo_mark(&site.brand))
                                (button(&site.header_cta))
                            }
                            div class="hero" {
                                h1 { (site.title) }
                                @if !site.tagline.is_empty() {
                                    p class="tagline" { (site.tagline) }
                                }
                                div class="actions" {
                                    (button(&site.hero_primary))
                                    (button(&site.hero_contact))
                                }
                            }
                        }
                        main {
                            section class="grid" {
                                @for card in &self.cards {
                                    (project_card(card))
                                }
                            }
                        }
                    }
                }
            }
        };

        markup.into_string()
    }

    pub fn render_json(&self) -> Result<String, serde_json::Error> {
        let cards: Vec<serde_json::Value> = self
            .cards
            .iter()
            .map(|card| {
                serde_json::json!({
                    "key": card.project.url,
                    "name": card.project.name,
                    "summary": card.project.summary,
                    "href": card.preview.href(),
                    "domain": card.preview.domain(),
                    "preview_url": card.preview.src(),
                    "state": card.preview.state(),
                })
            })
            .collect();

        let failed = self
            .cards
            .iter()
            .filter(|card| card.preview.state() == PreviewState::Failed)
            .count();

        let manifest = serde_json::json!({
            "page": {
                "metadata": {
                    "generator": "Showcase",
                    "version": env!("CARGO_PKG_VERSION"),
                    "generated_at": chrono::Utc::now().to_rfc3339(),
                    "format": "json"
                },
                "brand": self.site.brand,
                "title": self.site.title,
                "tagline": self.site.tagline,
                "summary": {
                    "total_cards": self.cards.len(),
                    "failed_previews": failed,
                    "duplicate_urls": self.site.duplicate_urls()
                },
                "cards": cards
            }
        });

        serde_json::to_string_pretty(&manifest)
    }
}

fn theme_vars(theme: &Theme) -> String {
    format!(
        "--gold:{};--navy-1:{};--navy-2:{};--navy-3:{}",
        theme.gold, theme.navy_1, theme.navy_2, theme.navy_3
    )
}

fn logo_mark(brand: &str) -> Markup {
    html! {
        div {
            div class="logo" { (brand) }
            div class="logo-rule" {}
        }
    }
}

/// Outbound link styled as a button. An empty href renders without `href`.
fn button(cta: &CallToAction) -> Markup {
    let href = normalize_href(&cta.href);
    let class = match cta.variant {
        ButtonVariant::Gold => "btn btn-gold",
        ButtonVariant::Outline => "btn btn-outline",
    };

    html! {
        @if href.is_actionable() {
            a class=(class) href=(href.as_str()) target="_blank" rel="noopener noreferrer"
                aria-label=[cta.aria_label.as_deref()] {
                (cta.label)
            }
        } @else {
            a class=(class) aria-disabled="true" aria-label=[cta.aria_label.as_deref()] {
                (cta.label)
            }
        }
    }
}

fn project_card(card: &ProjectCard) -> Markup {
    let project = &card.project;
    let open = CallToAction {
        label: "Open site".to_string(),
        href: project.url.clone(),
        aria_label: Some(format!("Open {}", project.name)),
        variant: ButtonVariant::Gold,
    };

    html! {
        article class="card" data-key=(project.url) {
            div class="card-media" {
                (preview(&card.preview))
            }
            div class="card-body" {
                div class="card-head" {
                    div {
                        div class="card-name" { (project.name) }
                        div class="card-url" { (card.preview.href().as_str()) }
                    }
                    span class="live" { "Live" }
                }
                p class="summary" { (project.summary) }
                div class="card-cta" {
                    (button(&open))
                }
            }
        }
    }
}

fn preview(card: &PreviewCard) -> Markup {
    let container = match card.state() {
        PreviewState::Loaded => "preview",
        PreviewState::Failed => "preview failed",
    };
    let href = card.href().is_actionable().then(|| card.href().as_str());

    html! {
        div class=(container) {
            div class="frame" {
                @if card.state() == PreviewState::Loaded {
                    a class="shot" href=[href] target="_blank" rel="noopener noreferrer" {
                        img src=(card.src()) alt={ "Preview of " (card.title()) }
                            loading="lazy" decoding="async" referrerpolicy="no-referrer"
                            onerror=(ON_IMAGE_ERROR);
                    }
                }
                a class="placeholder" href=[href] target="_blank" rel="noopener noreferrer" {
                    div class="placeholder-text" {
                        div class="glyph" { (card.glyph()) }
                        div class="unavailable" { "Preview unavailable" }
                        div class="placeholder-domain" { (card.domain()) }
                    }
                }
                div class="badge" {
                    span { (card.domain()) }
                }
            }
        }
    }
}
