//! # AI Time Capsule
//!
//! Renders a static gallery page from a JSON collection of previously
//! scraped AI news articles. One invocation performs one linear pipeline:
//! fetch the collection, validate and sort it newest-first, build one HTML
//! card per article, splice the result into the host page shell's container
//! element, and write the assembled page out.
//!
//! ## Usage
//!
//! ```sh
//! ai_time_capsule -a https://example.github.io/capsule/ai_articles.json \
//!     -p ./site/ai-time-capsule.html -o ./public/ai-time-capsule.html
//! ```
//!
//! ## Pipeline
//!
//! 1. **Fetch**: One request for the article collection JSON
//! 2. **Validate**: Skip records missing required fields (with a warning)
//! 3. **Sort**: Newest first by publish date; undated records sort last
//! 4. **Render**: Cards, the empty-state message, or the error message
//! 5. **Assemble**: Splice into the shell's container and write the page
//!
//! Fetch and parse failures still produce a page: the container gets a
//! generic error message and the specific error goes to the log. Shell and
//! output file problems fail the run.

use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod cli;
mod config;
mod error;
mod fetch;
mod models;
mod render;
mod renderer;
mod utils;

use cli::Cli;
use config::GalleryConfig;
use render::page::assemble_page;
use renderer::GalleryRenderer;
use utils::ensure_writable_parent;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("ai_time_capsule starting up");

    // Parse CLI and resolve settings
    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");
    let config = match GalleryConfig::resolve(&args) {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Configuration is unusable");
            return Err(e.into());
        }
    };
    info!(
        articles_url = %config.articles_url,
        page = %config.page.display(),
        output = %config.output.display(),
        container_id = %config.container_id,
        "Configuration resolved"
    );

    // Early check: ensure the output location is writable before any network work
    if let Err(e) = ensure_writable_parent(&config.output).await {
        error!(
            path = %config.output.display(),
            error = %e,
            "Output location is not writable (fix perms or choose a different path)"
        );
        return Err(e.into());
    }

    // ---- Load and render the gallery ----
    let renderer = GalleryRenderer::new(config);
    let gallery = renderer.load_and_render().await;

    // ---- Assemble and write the page ----
    let config = renderer.config();
    assemble_page(&config.page, &config.output, &config.container_id, &gallery).await?;

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}
