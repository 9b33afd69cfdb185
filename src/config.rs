//! Settings resolution for the gallery renderer.
//!
//! Settings come from three layers, highest priority first:
//!
//! 1. Command-line flags ([`crate::cli::Cli`])
//! 2. An optional YAML settings file (`--config`)
//! 3. Built-in defaults (container id, articles file name)
//!
//! [`GalleryConfig::resolve`] merges the layers and rejects a run that is
//! still missing a required setting, so every downstream module works from a
//! fully-populated config.

use crate::cli::Cli;
use crate::error::GalleryError;
use serde::Deserialize;
use std::path::PathBuf;
use tracing::{debug, info};
use url::Url;

/// Default id of the container element the gallery fills.
pub const DEFAULT_CONTAINER_ID: &str = "ai-articles-grid";

/// Default file name of the article collection, joined onto a configured
/// site base URL that ends in `/`.
pub const DEFAULT_ARTICLES_FILE: &str = "ai_articles.json";

/// The YAML settings file, all keys optional. Same keys as the CLI flags.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub articles_url: Option<String>,
    #[serde(default)]
    pub page: Option<PathBuf>,
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub container_id: Option<String>,
}

/// Fully-resolved settings for one renderer run.
#[derive(Debug, Clone)]
pub struct GalleryConfig {
    /// Absolute URL of the article collection JSON.
    pub articles_url: Url,
    /// Host page shell containing the container element.
    pub page: PathBuf,
    /// Where the assembled page is written.
    pub output: PathBuf,
    /// Id of the container element to fill.
    pub container_id: String,
}

impl GalleryConfig {
    /// Merge CLI flags, the optional settings file, and built-in defaults.
    ///
    /// A URL ending in `/` is treated as a site base and gets the default
    /// `ai_articles.json` file name joined on.
    ///
    /// # Errors
    ///
    /// Fails if the settings file cannot be read or parsed, if `articles_url`,
    /// `page`, or `output` is missing from every layer, or if the articles
    /// URL is not an absolute `http(s)` URL.
    pub fn resolve(cli: &Cli) -> Result<Self, GalleryError> {
        let file = match &cli.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)?;
                let parsed: FileConfig = serde_yaml::from_str(&text)
                    .map_err(|e| GalleryError::Config(format!("bad settings file: {}", e)))?;
                info!(path = %path.display(), "Loaded settings file");
                parsed
            }
            None => FileConfig::default(),
        };

        let raw_url = cli
            .articles_url
            .clone()
            .or(file.articles_url)
            .ok_or_else(|| GalleryError::Config("articles_url is not set".to_string()))?;
        let articles_url = parse_articles_url(&raw_url)?;

        let page = cli
            .page
            .clone()
            .or(file.page)
            .ok_or_else(|| GalleryError::Config("page (host shell path) is not set".to_string()))?;

        let output = cli
            .output
            .clone()
            .or(file.output)
            .ok_or_else(|| GalleryError::Config("output path is not set".to_string()))?;

        let container_id = cli
            .container_id
            .clone()
            .or(file.container_id)
            .unwrap_or_else(|| DEFAULT_CONTAINER_ID.to_string());

        let config = GalleryConfig {
            articles_url,
            page,
            output,
            container_id,
        };
        debug!(?config, "Resolved configuration");
        Ok(config)
    }
}

/// Parse the configured articles URL, joining the default file name onto
/// site base URLs that end in `/`.
fn parse_articles_url(raw: &str) -> Result<Url, GalleryError> {
    let url = Url::parse(raw)?;
    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(GalleryError::Config(format!(
                "articles_url must be http(s), got \"{}\"",
                other
            )));
        }
    }
    if url.path().ends_with('/') {
        return Ok(url.join(DEFAULT_ARTICLES_FILE)?);
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write as _;

    fn cli(args: &[&str]) -> Cli {
        let mut full = vec!["ai_time_capsule"];
        full.extend_from_slice(args);
        Cli::parse_from(full)
    }

    #[test]
    fn test_resolve_all_from_cli() {
        let config = GalleryConfig::resolve(&cli(&[
            "-a",
            "https://example.com/data/ai_articles.json",
            "-p",
            "shell.html",
            "-o",
            "out.html",
        ]))
        .unwrap();
        assert_eq!(
            config.articles_url.as_str(),
            "https://example.com/data/ai_articles.json"
        );
        assert_eq!(config.container_id, DEFAULT_CONTAINER_ID);
    }

    #[test]
    fn test_resolve_joins_default_file_onto_base_url() {
        let config = GalleryConfig::resolve(&cli(&[
            "-a",
            "https://example.github.io/capsule/",
            "-p",
            "shell.html",
            "-o",
            "out.html",
        ]))
        .unwrap();
        assert_eq!(
            config.articles_url.as_str(),
            "https://example.github.io/capsule/ai_articles.json"
        );
    }

    #[test]
    fn test_resolve_missing_articles_url_fails() {
        let err = GalleryConfig::resolve(&cli(&["-p", "shell.html", "-o", "out.html"]));
        assert!(matches!(err, Err(GalleryError::Config(_))));
    }

    #[test]
    fn test_resolve_rejects_non_http_scheme() {
        let err = GalleryConfig::resolve(&cli(&[
            "-a",
            "file:///tmp/ai_articles.json",
            "-p",
            "shell.html",
            "-o",
            "out.html",
        ]));
        assert!(matches!(err, Err(GalleryError::Config(_))));
    }

    #[test]
    fn test_resolve_cli_overrides_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "articles_url: https://file.example.com/\npage: file-shell.html\noutput: file-out.html\ncontainer_id: file-grid"
        )
        .unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let config = GalleryConfig::resolve(&cli(&[
            "-c",
            &path,
            "-a",
            "https://cli.example.com/ai_articles.json",
        ]))
        .unwrap();
        assert_eq!(
            config.articles_url.as_str(),
            "https://cli.example.com/ai_articles.json"
        );
        // Settings the CLI left out still come from the file
        assert_eq!(config.page, PathBuf::from("file-shell.html"));
        assert_eq!(config.container_id, "file-grid");
    }

    #[test]
    fn test_resolve_bad_yaml_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "articles_url: [not, a, string").unwrap();
        let path = file.path().to_str().unwrap().to_string();
        let err = GalleryConfig::resolve(&cli(&["-c", &path]));
        assert!(matches!(err, Err(GalleryError::Config(_))));
    }
}
