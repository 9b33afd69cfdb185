//! Error types for the gallery pipeline.
//!
//! Each pipeline step fails with its own variant so tests can target fetch,
//! parse, and render failures independently. User-facing behavior collapses
//! them all the same way (see [`crate::renderer`]): the container gets one
//! generic error message and the specific error goes to the diagnostic log.

use thiserror::Error;

/// Failure modes of the load-and-render pipeline.
#[derive(Error, Debug)]
pub enum GalleryError {
    /// The article collection request returned a non-success status.
    #[error("articles request failed with HTTP status {status}")]
    Fetch { status: u16 },

    /// Transport-level failure reaching the article collection resource.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body was not a JSON array of article records.
    #[error("article data did not parse: {0}")]
    Parse(#[from] serde_json::Error),

    /// The host page shell has no element with the configured container id.
    #[error("page has no container element with id \"{id}\"")]
    ContainerMissing { id: String },

    /// The container element's closing tag could not be found.
    #[error("container element \"{id}\" is never closed")]
    ContainerUnclosed { id: String },

    /// Reading the page shell or writing the output page failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The configured articles URL is not an absolute, parseable URL.
    #[error("invalid articles URL: {0}")]
    Url(#[from] url::ParseError),

    /// Settings are missing or unusable after merging CLI and config file.
    #[error("invalid configuration: {0}")]
    Config(String),
}
