pub mod card;
pub mod error;
pub mod link;
pub mod page;
pub mod preview;
pub mod site;

pub use card::{LoadOutcome, PreviewCard, PreviewState};
pub use error::{Result, SiteError};
pub use link::{NormalizedLink, extract_domain, normalize_href};
pub use page::{OutputFormat, Page};
pub use preview::{ThumbnailService, resolve_preview_url};
pub use site::{Project, SiteConfig};

const BANNER: &str = r#"
   _____ __                                     
  / ___// /_  ____ _      ___________ _________ 
  \__ \/ __ \/ __ \ | /| / / ___/ __ `/ ___/ _ \
 ___/ / / / / /_/ / |/ |/ / /__/ /_/ (__  )  __/
/____/_/ /_/\____/|__/|__/\___/\__,_/____/\___/ 
"#;

pub fn print_banner() {
    eprintln!("{}", BANNER);
    eprintln!("  static portfolio pages with live previews\n");
}
