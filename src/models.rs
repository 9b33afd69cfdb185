//! Data models for scraped AI news articles.
//!
//! This module defines the two representations an article passes through:
//! - [`RawArticle`]: the loosely-structured wire record exactly as it
//!   appears in the fetched JSON, every field optional
//! - [`Article`]: the validated record the renderer works with
//!
//! Validation is a deliberate step (the upstream scraper is an external
//! process and its output is untrusted): records missing a required field
//! are skipped with a warning rather than rendered as broken cards or
//! allowed to abort the whole gallery.
//!
//! # Publish dates
//!
//! The scraper emits `publish_date` as an ISO-8601 timestamp when it could
//! extract one, or the literal string `"Unknown"` when it could not. Records
//! whose date fails to parse are kept: they sort as oldest and their meta
//! line shows the raw string verbatim.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Deserialize;
use tracing::warn;

/// An article record as it appears on the wire, before validation.
///
/// Every field is optional because the collection file is produced by an
/// external scraping process; unknown keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawArticle {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub publish_date: Option<String>,
    #[serde(default)]
    pub wayback_url: Option<String>,
    #[serde(default)]
    pub image_path: Option<String>,
}

/// A validated article ready for card construction.
///
/// # Fields
///
/// * `title` - Headline; also the image's accessible label and the link text
/// * `summary` - Plain-text summary (always rendered escaped)
/// * `source` - Attribution label for the meta line
/// * `publish_date` - The raw date string as scraped
/// * `published_at` - The parsed instant, when `publish_date` was parseable
/// * `wayback_url` - Wayback Machine snapshot the card links out to
/// * `image_path` - Optional image location; `None` suppresses the image
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub title: String,
    pub summary: String,
    pub source: String,
    pub publish_date: String,
    pub published_at: Option<DateTime<Utc>>,
    pub wayback_url: String,
    pub image_path: Option<String>,
}

impl Article {
    /// Validate a wire record into an [`Article`].
    ///
    /// Required fields are `title`, `summary`, `source`, `publish_date`, and
    /// `wayback_url`; missing or blank values reject the record and the
    /// error names the first offending field. `image_path` is optional, and
    /// blank values are treated as absent.
    pub fn from_raw(raw: RawArticle) -> Result<Self, &'static str> {
        let title = non_blank(raw.title).ok_or("title")?;
        let summary = non_blank(raw.summary).ok_or("summary")?;
        let source = non_blank(raw.source).ok_or("source")?;
        let publish_date = non_blank(raw.publish_date).ok_or("publish_date")?;
        let wayback_url = non_blank(raw.wayback_url).ok_or("wayback_url")?;
        let published_at = parse_publish_date(&publish_date);

        Ok(Article {
            title,
            summary,
            source,
            publish_date,
            published_at,
            wayback_url,
            image_path: non_blank(raw.image_path),
        })
    }

    /// The date as shown on the card's meta line.
    ///
    /// Parseable dates format as a short human date (`Jun 1, 1995`);
    /// unparseable ones fall back to the raw scraped string.
    pub fn display_date(&self) -> String {
        match self.published_at {
            Some(instant) => instant.format("%b %-d, %Y").to_string(),
            None => self.publish_date.clone(),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Parse a scraped publish date into an instant, trying the formats the
/// upstream scraper actually emits: RFC 3339, naive ISO date-times with and
/// without fractional seconds (both `T` and space separators), and bare
/// dates. Anything else (for example `"Unknown"`) yields `None`.
pub fn parse_publish_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(value) {
        return Some(with_offset.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(naive.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    }
    None
}

/// Validate a fetched batch, skipping records that fail [`Article::from_raw`].
///
/// Skips are logged with the record's index and the offending field; they
/// never abort the run and never produce placeholder cards.
pub fn validate_articles(raw: Vec<RawArticle>) -> Vec<Article> {
    raw.into_iter()
        .enumerate()
        .filter_map(|(index, record)| match Article::from_raw(record) {
            Ok(article) => Some(article),
            Err(field) => {
                warn!(index, field, "Skipping article record missing a required field");
                None
            }
        })
        .collect()
}

/// Sort articles newest-first, comparing as date values.
///
/// The sort is stable: ties keep their input order, and articles with
/// unparseable dates sort after every dated article (treated as oldest).
pub fn sort_newest_first(articles: &mut [Article]) {
    articles.sort_by(|a, b| b.published_at.cmp(&a.published_at));
}
