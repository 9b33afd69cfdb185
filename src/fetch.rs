//! Retrieval of the scraped article collection.
//!
//! One request per run: the collection is a static JSON file produced by an
//! external scraping process, fetched in full and parsed from text. Reading
//! the body as text before parsing means a malformed response can be logged
//! as a truncated preview for diagnostics.

use crate::error::GalleryError;
use crate::models::RawArticle;
use crate::utils::truncate_for_log;
use reqwest::get;
use tracing::{debug, info, instrument, warn};
use url::Url;

/// Fetch the article collection and parse it into wire records.
///
/// # Errors
///
/// * [`GalleryError::Http`] - the request could not be completed
/// * [`GalleryError::Fetch`] - the server answered with a non-success status
/// * [`GalleryError::Parse`] - the body was not a JSON array of article records
#[instrument(level = "info", skip_all, fields(url = %url))]
pub async fn fetch_collection(url: &Url) -> Result<Vec<RawArticle>, GalleryError> {
    let response = get(url.clone()).await?;
    let status = response.status();
    if !status.is_success() {
        return Err(GalleryError::Fetch {
            status: status.as_u16(),
        });
    }

    let body = response.text().await?;
    debug!(bytes = body.len(), "Fetched article collection body");

    match serde_json::from_str::<Vec<RawArticle>>(&body) {
        Ok(records) => {
            info!(count = records.len(), "Parsed article collection");
            Ok(records)
        }
        Err(e) => {
            warn!(
                error = %e,
                body_preview = %truncate_for_log(&body, 300),
                "Article collection did not parse as a JSON array"
            );
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn fetch_from(server: &mockito::ServerGuard) -> Result<Vec<RawArticle>, GalleryError> {
        let url = Url::parse(&format!("{}/ai_articles.json", server.url())).unwrap();
        fetch_collection(&url).await
    }

    #[tokio::test]
    async fn test_fetch_collection_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/ai_articles.json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"[{"title":"Deep Blue Wins","summary":"s","source":"cnn.com",
                    "publish_date":"1997-05-11","wayback_url":"https://web.archive.org/x"}]"#,
            )
            .create_async()
            .await;

        let records = fetch_from(&server).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title.as_deref(), Some("Deep Blue Wins"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_collection_non_success_status() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/ai_articles.json")
            .with_status(404)
            .create_async()
            .await;

        let err = fetch_from(&server).await.unwrap_err();
        assert!(matches!(err, GalleryError::Fetch { status: 404 }));
    }

    #[tokio::test]
    async fn test_fetch_collection_server_error_status() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/ai_articles.json")
            .with_status(503)
            .create_async()
            .await;

        let err = fetch_from(&server).await.unwrap_err();
        assert!(matches!(err, GalleryError::Fetch { status: 503 }));
    }

    #[tokio::test]
    async fn test_fetch_collection_non_array_body() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/ai_articles.json")
            .with_status(200)
            .with_body(r#"{"articles": "not an array"}"#)
            .create_async()
            .await;

        let err = fetch_from(&server).await.unwrap_err();
        assert!(matches!(err, GalleryError::Parse(_)));
    }

    #[tokio::test]
    async fn test_fetch_collection_empty_array() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/ai_articles.json")
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let records = fetch_from(&server).await.unwrap();
        assert!(records.is_empty());
    }
}
