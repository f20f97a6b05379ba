//! Google Drive URL handling: folder id extraction and view-link rewriting.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{CatalogError, Result};

/// Suffix Drive puts on `webViewLink` for files listed through the API.
const VIEW_SUFFIX: &str = "/view?usp=drivesdk";

/// Embeddable replacement for [`VIEW_SUFFIX`].
const PREVIEW_SUFFIX: &str = "/preview";

/// Folder links as copied from the Drive web UI or from "Get link".
static FOLDER_LINK_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^https?://drive\.google\.com/(?:drive/(?:u/\d+/)?folders/|open\?id=)([a-zA-Z0-9_-]+)",
    )
    .expect("Invalid folder link regex")
});

/// Bare Drive ids: letters, digits, `_` and `-`.
static BARE_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_-]+$").expect("Invalid bare id regex"));

/// Resolve the root folder argument to a Drive folder id.
///
/// Accepts `.../drive/folders/<id>` (optionally under `/u/N/`),
/// `.../open?id=<id>`, or the bare id itself.
///
/// ```
/// use drive_catalog::url_parser::extract_folder_id;
///
/// let link = "https://drive.google.com/drive/u/0/folders/0BxProducts";
/// assert_eq!(extract_folder_id(link).unwrap(), "0BxProducts");
/// assert_eq!(extract_folder_id("0BxProducts").unwrap(), "0BxProducts");
/// ```
pub fn extract_folder_id(url_or_id: &str) -> Result<String> {
    let trimmed = url_or_id.trim();

    if let Some(id) = FOLDER_LINK_REGEX.captures(trimmed).and_then(|c| c.get(1)) {
        return Ok(id.as_str().to_owned());
    }
    if BARE_ID_REGEX.is_match(trimmed) {
        return Ok(trimmed.to_owned());
    }

    Err(CatalogError::Usage(format!(
        "'{}' is not a Drive folder ID or folder URL",
        url_or_id
    )))
}

/// Turn a Drive viewer link into an embeddable preview link.
///
/// Only links ending in exactly `/view?usp=drivesdk` are rewritten; anything
/// else is returned unchanged.
pub fn preview_link(view_link: &str) -> String {
    match view_link.strip_suffix(VIEW_SUFFIX) {
        Some(prefix) => format!("{}{}", prefix, PREVIEW_SUFFIX),
        None => view_link.to_string(),
    }
}
