//! The gallery renderer component.
//!
//! [`GalleryRenderer`] is a constructible component: it takes its settings
//! explicitly, holds no global state, and can run any number of times. The
//! fallible half of the pipeline ([`GalleryRenderer::try_load`]) is exposed
//! separately from the message-collapsing half
//! ([`GalleryRenderer::load_and_render`]) so tests can target each failure
//! mode on its own.

use crate::config::GalleryConfig;
use crate::error::GalleryError;
use crate::fetch::fetch_collection;
use crate::models::{sort_newest_first, validate_articles, Article};
use crate::render::cards::{gallery_html, status_message, ERROR_MESSAGE};
use tracing::{error, info, instrument};

/// Renders the article gallery for one configured resource and container.
#[derive(Debug, Clone)]
pub struct GalleryRenderer {
    config: GalleryConfig,
}

impl GalleryRenderer {
    pub fn new(config: GalleryConfig) -> Self {
        GalleryRenderer { config }
    }

    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    /// Fetch, validate, and sort the article collection.
    ///
    /// # Errors
    ///
    /// Fetch and parse failures propagate as their own
    /// [`GalleryError`] variants; validation never fails (non-conforming
    /// records are skipped with a warning).
    #[instrument(level = "info", skip_all)]
    pub async fn try_load(&self) -> Result<Vec<Article>, GalleryError> {
        let raw = fetch_collection(&self.config.articles_url).await?;
        let fetched = raw.len();
        let mut articles = validate_articles(raw);
        sort_newest_first(&mut articles);
        info!(
            fetched,
            valid = articles.len(),
            skipped = fetched - articles.len(),
            "Article collection loaded"
        );
        Ok(articles)
    }

    /// Produce the container's inner HTML.
    ///
    /// Always yields content: one card per article newest-first, the
    /// empty-state message for an empty collection, or the generic error
    /// message when loading failed. The specific error is preserved only in
    /// the diagnostic log; viewers see an all-or-nothing result.
    #[instrument(level = "info", skip_all)]
    pub async fn load_and_render(&self) -> String {
        match self.try_load().await {
            Ok(articles) => {
                info!(cards = articles.len(), "Rendering gallery");
                gallery_html(&articles)
            }
            Err(e) => {
                error!(error = %e, url = %self.config.articles_url, "Failed to load AI articles");
                status_message(ERROR_MESSAGE)
            }
        }
    }
}
