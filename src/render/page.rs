//! Host-page assembly.
//!
//! The page shell is an external collaborator: a hand-maintained HTML file
//! whose container element (`<div id="ai-articles-grid">…</div>` by default)
//! holds placeholder content that doubles as the loading state. This module
//! replaces exactly that element's inner HTML and leaves every other byte of
//! the shell untouched, then writes the assembled page out.

use crate::error::GalleryError;
use regex::Regex;
use std::path::Path;
use tokio::fs;
use tracing::{debug, info, instrument};

/// Replace the inner HTML of the element with the given id.
///
/// The container's opening tag is located by id; its closing tag is found by
/// a depth scan over same-named tags, so nested elements of the same kind
/// inside the container are handled. Everything outside the container is
/// preserved byte for byte, including the opening tag's own attributes.
///
/// # Errors
///
/// * [`GalleryError::ContainerMissing`] - no element with that id
/// * [`GalleryError::ContainerUnclosed`] - the element is never closed
pub fn splice_container(
    shell: &str,
    container_id: &str,
    inner: &str,
) -> Result<String, GalleryError> {
    let open_re = Regex::new(&format!(
        r#"(?is)<([a-z][a-z0-9]*)\b[^>]*\bid\s*=\s*["']{}["'][^>]*>"#,
        regex::escape(container_id)
    ))
    .map_err(|e| GalleryError::Config(format!("container id is not matchable: {}", e)))?;

    let open = open_re
        .captures(shell)
        .ok_or_else(|| GalleryError::ContainerMissing {
            id: container_id.to_string(),
        })?;
    let tag = open.get(1).map(|m| m.as_str().to_lowercase()).unwrap_or_default();
    let inner_start = open.get(0).map(|m| m.end()).unwrap_or_default();

    // Depth scan over same-named tags to find the matching close
    let tag_re = Regex::new(&format!(r"(?i)<(/?){}\b[^>]*>", regex::escape(&tag)))
        .map_err(|e| GalleryError::Config(format!("container tag is not matchable: {}", e)))?;
    let mut depth = 1usize;
    let mut inner_end = None;
    for m in tag_re.find_iter(&shell[inner_start..]) {
        let is_close = m.as_str().starts_with("</");
        let self_closing = m.as_str().ends_with("/>");
        if is_close {
            depth -= 1;
            if depth == 0 {
                inner_end = Some(inner_start + m.start());
                break;
            }
        } else if !self_closing {
            depth += 1;
        }
    }
    let inner_end = inner_end.ok_or_else(|| GalleryError::ContainerUnclosed {
        id: container_id.to_string(),
    })?;

    debug!(
        %tag,
        replaced_bytes = inner_end - inner_start,
        new_bytes = inner.len(),
        "Splicing container content"
    );

    let mut page = String::with_capacity(shell.len() - (inner_end - inner_start) + inner.len() + 2);
    page.push_str(&shell[..inner_start]);
    page.push('\n');
    page.push_str(inner);
    page.push('\n');
    page.push_str(&shell[inner_end..]);
    Ok(page)
}

/// Read the page shell, splice the gallery into the container, and write
/// the assembled page to the output path.
#[instrument(level = "info", skip(inner), fields(page = %page_path.display(), output = %output_path.display(), %container_id))]
pub async fn assemble_page(
    page_path: &Path,
    output_path: &Path,
    container_id: &str,
    inner: &str,
) -> Result<(), GalleryError> {
    let shell = fs::read_to_string(page_path).await?;
    let assembled = splice_container(&shell, container_id, inner)?;
    fs::write(output_path, &assembled).await?;
    info!(bytes = assembled.len(), "Wrote assembled page");
    Ok(())
}
