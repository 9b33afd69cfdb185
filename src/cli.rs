//! Command-line interface definitions for the AI Time Capsule renderer.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! Every setting can also come from a YAML file (`--config`); flags given on
//! the command line win. See [`crate::config`] for the merge rules.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the gallery renderer.
///
/// All settings are optional on the command line because they may come from
/// the config file instead; [`crate::config::GalleryConfig::resolve`] rejects
/// a run that is missing a required setting after merging.
///
/// # Examples
///
/// ```sh
/// # Everything on the command line
/// ai_time_capsule -a https://example.github.io/capsule/ai_articles.json \
///     -p ./site/ai-time-capsule.html -o ./public/ai-time-capsule.html
///
/// # Site base URL; the default ai_articles.json file name gets joined on
/// ai_time_capsule -a https://example.github.io/capsule/ -p shell.html -o out.html
///
/// # Settings from a file
/// ai_time_capsule -c capsule.yaml
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// URL of the scraped article collection JSON (a site base URL ending
    /// in '/' gets the default ai_articles.json joined on)
    #[arg(short, long, env = "AI_ARTICLES_URL")]
    pub articles_url: Option<String>,

    /// Path to the host page shell containing the gallery container
    #[arg(short, long)]
    pub page: Option<PathBuf>,

    /// Where to write the assembled page
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Id of the container element to fill
    #[arg(long)]
    pub container_id: Option<String>,

    /// Optional path to a YAML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
