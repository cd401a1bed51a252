// Include handlers module directly from handlers.rs
#[path = "handlers.rs"]
pub mod handlers;

// Re-export commonly used handler functions for convenience
pub use handlers::{
    ProbeOptions, describe_link, generate_probe_report, install_site_config, load_site,
    probe_page, write_output,
};
