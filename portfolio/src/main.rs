// Portfolio entry point: config, console logging, mount
// Rust + Leptos 0.8 CSR edition

use leptos::prelude::*;
use portfolio::{App, SiteConfig, logging};

fn main() {
    console_error_panic_hook::set_once();

    let config = match SiteConfig::embedded() {
        Ok(config) => {
            logging::init(&config.log_level);
            config
        }
        Err(e) => {
            let config = SiteConfig::default();
            logging::init(&config.log_level);
            tracing::warn!("invalid embedded site.toml, using defaults: {e}");
            config
        }
    };

    tracing::info!(owner = %config.owner, "mounting portfolio");
    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}
