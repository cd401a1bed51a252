use anyhow::{Context, Result, bail};
use clap::ArgMatches;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use showcase_core::page::{OutputFormat, Page};
use showcase_core::site::{BUNDLED_SITE, SiteConfig};
use showcase_core::{LoadOutcome, ThumbnailService, extract_domain, normalize_href};
use showcase_probe::{ProbeResult, Prober};
use std::collections::HashMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tracing::info;

pub const SITE_FILE_NAME: &str = "site.json";

/// Settings for probing every preview on a page
pub struct ProbeOptions {
    pub threads: usize,
    pub timeout_secs: u64,
    pub show_spinner: bool,
}

/// Load a site file, or the bundled portfolio when no path is given
pub fn load_site(config: Option<&PathBuf>) -> Result<SiteConfig> {
    match config {
        Some(path) => {
            let expanded = shellexpand::tilde(&path.to_string_lossy()).into_owned();
            SiteConfig::load(Path::new(&expanded))
                .with_context(|| format!("Failed to load site configuration {}", expanded))
        }
        None => SiteConfig::bundled().context("Bundled site configuration is invalid"),
    }
}

/// Write the bundled site file into `dir`, creating it if needed.
/// Refuses to replace an existing file unless `force` is set.
pub fn install_site_config(dir: &Path, force: bool) -> Result<PathBuf> {
    let site_path = dir.join(SITE_FILE_NAME);
    if site_path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            site_path.display()
        );
    }

    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create config directory {}", dir.display()))?;
    fs::write(&site_path, BUNDLED_SITE)
        .with_context(|| format!("Failed to write {}", site_path.display()))?;

    Ok(site_path)
}

/// Human-readable breakdown of how one link is handled
pub fn describe_link(input: &str, thumbnails: &ThumbnailService) -> String {
    let href = normalize_href(input);
    let domain = extract_domain(input);

    let mut out = String::new();
    if href.is_actionable() {
        out.push_str(&format!("Link:     {}\n", href));
    } else {
        out.push_str("Link:     (none, input is blank)\n");
    }
    out.push_str(&format!("Domain:   {}\n", domain));
    out.push_str(&format!("Preview:  {}\n", thumbnails.preview_url(input)));
    out
}

/// Run the prober over every card and mark failed previews
pub async fn probe_page(page: &mut Page, options: &ProbeOptions) -> Result<Vec<ProbeResult>> {
    let urls = page.preview_urls();
    let total = urls.len();

    let spinner = if options.show_spinner {
        let pb = ProgressBar::new_spinner();
        pb.set_style(ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}")?);
        pb.enable_steady_tick(Duration::from_millis(100));
        pb.set_message(format!("Probing {} preview(s)...", total));
        Some(pb)
    } else {
        None
    };

    let done = Arc::new(AtomicUsize::new(0));
    let mut prober = Prober::with_timeout(options.timeout_secs)?;
    if let Some(ref pb) = spinner {
        let pb = pb.clone();
        let done = done.clone();
        prober = prober.with_progress_callback(Arc::new(move |_result: &ProbeResult| {
            let count = done.fetch_add(1, Ordering::Relaxed) + 1;
            pb.set_message(format!("Probing previews... {}/{}", count, total));
        }));
    }

    let results = prober.probe_all(&urls, options.threads).await?;

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    let failed = page.apply_outcomes(
        results
            .iter()
            .map(|result| (result.url.clone(), LoadOutcome::from(result))),
    );
    info!("{} card(s) will render with a placeholder", failed);

    Ok(results)
}

/// Text report of probe results, in card order
pub fn generate_probe_report(page: &Page, results: &[ProbeResult]) -> String {
    let by_url: HashMap<&str, &ProbeResult> =
        results.iter().map(|r| (r.url.as_str(), r)).collect();

    let mut report = String::new();
    report.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\n");
    report.push_str("📊 Summary:\n");
    report.push_str(&format!("  Cards: {}\n", page.cards().len()));

    let failed = page.cards().iter().filter(|c| c.preview.is_failed()).count();
    report.push_str(&format!("  Previews available: {}\n", page.cards().len() - failed));
    report.push_str(&format!("  Placeholders: {}\n", failed));

    report.push_str("\n🖼  Previews:\n");
    for card in page.cards() {
        let domain = card.preview.domain();
        let line = match by_url.get(card.preview.src()) {
            Some(result) if result.is_image() => format!(
                "  ✓ {} ({}) {} in {}ms",
                card.project.name,
                domain,
                result.status_code,
                result.response_time.as_millis()
            ),
            Some(result) => format!(
                "  ✗ {} ({}) {}",
                card.project.name,
                domain,
                failure_reason(result)
            ),
            None => format!("  ? {} ({}) not probed", card.project.name, domain),
        };
        report.push_str(&line);
        report.push('\n');
    }

    report
}

fn failure_reason(result: &ProbeResult) -> String {
    if let Some(ref error) = result.error {
        return error.clone();
    }
    match result.content_type.as_deref() {
        Some(ct) if (200..300).contains(&result.status_code) => {
            format!("{} returned {}", result.status_code, ct)
        }
        _ => format!("status {}", result.status_code),
    }
}

/// Write to the given path, or stdout when none
pub fn write_output(content: &str, output: Option<&PathBuf>) -> Result<()> {
    match output {
        Some(path) => {
            let expanded = shellexpand::tilde(&path.to_string_lossy()).into_owned();
            fs::write(&expanded, content)
                .with_context(|| format!("Failed to write output to {}", expanded))?;
            eprintln!("{} Wrote {}", "✓".green().bold(), expanded.bright_white());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn print_prompt(msg: &str) -> Result<String> {
    eprint!("{} ", msg.bright_cyan().bold());
    io::stderr().flush()?;
    let mut response = String::new();
    io::stdin().read_line(&mut response)?;
    Ok(response.trim().to_lowercase())
}

pub fn handle_init(args: &ArgMatches) -> Result<()> {
    let dir = args
        .get_one::<String>("PATH")
        .map(String::as_str)
        .unwrap_or("~/.config/showcase/");
    let mut force = args.get_flag("force");
    let expanded = shellexpand::tilde(dir).into_owned();
    let config_dir = Path::new(&expanded);
    let site_path = config_dir.join(SITE_FILE_NAME);

    if site_path.exists() && !force {
        eprintln!("{}", "⚠ WARNING".yellow().bold());
        eprintln!(
            "Site configuration already exists: {}",
            site_path.display().to_string().bright_white()
        );
        let response = print_prompt("Overwrite it with the bundled portfolio? [y/N]:")?;
        if response != "y" && response != "yes" {
            eprintln!("{} Initialization cancelled.", "✗".red().bold());
            return Ok(());
        }
        force = true;
    }

    let written = install_site_config(config_dir, force)?;
    eprintln!(
        "{} Site configuration: {}",
        "✓".green().bold(),
        written.display().to_string().bright_white()
    );
    Ok(())
}

pub async fn handle_render(args: &ArgMatches) -> Result<()> {
    let site = load_site(args.get_one::<PathBuf>("config"))?;
    let format_arg = args
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("html");
    let Some(format) = OutputFormat::from_str(format_arg) else {
        bail!("Unknown output format: {}", format_arg);
    };

    let mut page = Page::new(site);

    if args.get_flag("probe") {
        let options = ProbeOptions {
            threads: *args.get_one::<usize>("threads").unwrap_or(&8),
            timeout_secs: *args.get_one::<u64>("timeout").unwrap_or(&15),
            show_spinner: true,
        };
        probe_page(&mut page, &options).await?;
    }

    let rendered = page.render(format).context("Failed to render page")?;
    write_output(&rendered, args.get_one::<PathBuf>("output"))
}

pub fn handle_link(args: &ArgMatches) -> Result<()> {
    let input = args
        .get_one::<String>("URL")
        .map(String::as_str)
        .unwrap_or_default();
    let site = load_site(args.get_one::<PathBuf>("config"))?;
    print!("{}", describe_link(input, &site.thumbnails));
    Ok(())
}

pub async fn handle_probe(args: &ArgMatches) -> Result<()> {
    let site = load_site(args.get_one::<PathBuf>("config"))?;
    let mut page = Page::new(site);

    let options = ProbeOptions {
        threads: *args.get_one::<usize>("threads").unwrap_or(&8),
        timeout_secs: *args.get_one::<u64>("timeout").unwrap_or(&15),
        show_spinner: true,
    };
    let results = probe_page(&mut page, &options).await?;

    print!("{}", generate_probe_report(&page, &results));
    Ok(())
}
