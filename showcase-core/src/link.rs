// Link normalization and display-domain extraction

use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

const SCHEMES: [&str; 3] = ["http://", "https://", "mailto:"];

/// A link that is either empty (nothing to open) or starts with
/// `http://`, `https://` or `mailto:` in any letter case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NormalizedLink(String);

impl NormalizedLink {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// An empty link is the "no usable link" sentinel.
    pub fn is_actionable(&self) -> bool {
        !self.0.is_empty()
    }
}

impl fmt::Display for NormalizedLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Turn a user-supplied href into a scheme-qualified link.
///
/// Already-qualified input is returned trimmed but otherwise untouched;
/// anything else gets `https://` prepended. Blank input yields an empty link.
pub fn normalize_href(input: &str) -> NormalizedLink {
    let trimmed = input.trim_matches(is_trimmable);
    if trimmed.is_empty() {
        return NormalizedLink::default();
    }

    if has_known_scheme(trimmed) {
        NormalizedLink(trimmed.to_string())
    } else {
        NormalizedLink(format!("https://{}", trimmed))
    }
}

/// Whitespace as a browser `trim` sees it: Unicode whitespace plus the BOM,
/// but not NEL, which `char::is_whitespace` would also accept.
fn is_trimmable(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

fn has_known_scheme(s: &str) -> bool {
    SCHEMES.iter().any(|scheme| {
        s.get(..scheme.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(scheme))
    })
}

/// Hostname suitable for display, derived from any link-ish string.
pub fn extract_domain(input: &str) -> String {
    let link = normalize_href(input);
    parse_host(&link).unwrap_or_else(|_| fallback_host(&link))
}

fn parse_host(link: &NormalizedLink) -> Result<String, url::ParseError> {
    let parsed = Url::parse(link.as_str())?;
    Ok(parsed.host_str().unwrap_or_default().to_string())
}

/// Best-effort host for strings the URL parser rejects.
///
/// Only a lowercase `http://`/`https://` prefix is stripped; a `mailto:`
/// link keeps its scheme and is cut at the first `/`, if any.
fn fallback_host(link: &NormalizedLink) -> String {
    let s = link.as_str();
    let rest = s
        .strip_prefix("https://")
        .or_else(|| s.strip_prefix("http://"))
        .unwrap_or(s);

    rest.split('/').next().unwrap_or_default().to_string()
}
