//! Card construction.
//!
//! Each validated article becomes one card fragment:
//!
//! ```text
//! <div class="ai-article-card">
//!   <img src="..." alt="..." onerror="this.style.display='none'">   (optional)
//!   <div class="ai-article-card-content">
//!     <h3><a href="..." target="_blank" rel="noopener noreferrer">title</a></h3>
//!     <p>summary</p>
//!   </div>
//!   <div class="ai-article-meta">
//!     <span>Source: ...</span>
//!     <span>Date: ...</span>
//!   </div>
//! </div>
//! ```
//!
//! The collection file comes from an external scraper, so every interpolated
//! value is escaped; summaries and titles are never interpreted as markup.
//! The image's `onerror` handler hides it at display time when the resource
//! is unreachable, leaving the rest of the card intact.

use crate::models::Article;
use itertools::Itertools;
use std::fmt::Write;

/// Shown when the collection is empty.
pub const EMPTY_MESSAGE: &str = "No AI articles found yet. Please trigger the scraper!";

/// Shown when fetching or parsing the collection failed.
pub const ERROR_MESSAGE: &str = "Error loading AI articles. Please try again later.";

/// Escape a value for use as HTML text content.
pub fn escape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape a value for use inside a double-quoted attribute.
pub fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Build one card fragment from a validated article.
pub fn article_card(article: &Article) -> String {
    let mut card = String::new();
    writeln!(card, "<div class=\"ai-article-card\">").unwrap();

    if let Some(ref image_path) = article.image_path {
        writeln!(
            card,
            "  <img src=\"{}\" alt=\"{}\" onerror=\"this.style.display='none'\">",
            escape_attr(image_path),
            escape_attr(&article.title)
        )
        .unwrap();
    }

    writeln!(card, "  <div class=\"ai-article-card-content\">").unwrap();
    writeln!(
        card,
        "    <h3><a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a></h3>",
        escape_attr(&article.wayback_url),
        escape_text(&article.title)
    )
    .unwrap();
    writeln!(card, "    <p>{}</p>", escape_text(&article.summary)).unwrap();
    writeln!(card, "  </div>").unwrap();

    writeln!(card, "  <div class=\"ai-article-meta\">").unwrap();
    writeln!(card, "    <span>Source: {}</span>", escape_text(&article.source)).unwrap();
    writeln!(
        card,
        "    <span>Date: {}</span>",
        escape_text(&article.display_date())
    )
    .unwrap();
    writeln!(card, "  </div>").unwrap();
    write!(card, "</div>").unwrap();
    card
}

/// Build the container's inner HTML: one card per article in the given
/// order, or the empty-state message when there are none.
pub fn gallery_html(articles: &[Article]) -> String {
    if articles.is_empty() {
        return status_message(EMPTY_MESSAGE);
    }
    articles.iter().map(article_card).join("\n")
}

/// A single status or error message fragment.
pub fn status_message(message: &str) -> String {
    format!("<p>{}</p>", escape_text(message))
}
