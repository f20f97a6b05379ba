//! Data models for Google Drive API responses and the generated catalog.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Mime type Drive uses for folders.
pub const FOLDER_MIME_TYPE: &str = "application/vnd.google-apps.folder";

/// A folder in Google Drive. Each child folder of the root is one product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Folder {
    pub id: String,
    pub name: String,
}

/// An image file in a product folder.
///
/// Serialized with Drive's camelCase field names, which is what templates see.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageFile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub thumbnail_link: Option<String>,
    #[serde(default)]
    pub web_view_link: Option<String>,
}

/// One catalog entry, built from one product folder.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub slug: String,
    /// Output path of the product page, e.g. `docs/products/red-mug.html`,
    /// for display. The renderer derives the path it writes from `slug`.
    pub url: String,
    /// Link to the page relative to the index page.
    pub href: String,
    pub images: Vec<ImageFile>,
}

/// Metadata returned by files.get for the root folder.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileMetadata {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub mime_type: Option<String>,
}

impl FileMetadata {
    pub fn is_folder(&self) -> bool {
        self.mime_type.as_deref() == Some(FOLDER_MIME_TYPE)
    }
}

/// Response from the files.list API endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileListResponse<T> {
    #[serde(default = "Vec::new")]
    pub files: Vec<T>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

/// Google API error response.
#[derive(Debug, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorDetail {
    pub code: u16,
    pub message: String,
}

/// Authorized-user token file written by the OAuth consent flow.
#[derive(Debug, Deserialize)]
pub struct AuthorizedUserToken {
    /// Access token. Absent until the first exchange has happened.
    #[serde(default)]
    pub token: Option<String>,
    pub refresh_token: String,
    pub client_id: String,
    pub client_secret: String,
    #[serde(default)]
    pub scopes: Option<Vec<String>>,
    #[serde(default)]
    pub expiry: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_file_deserialize_without_links() {
        let json = r#"{"id": "img1", "name": "front.jpg"}"#;

        let image: ImageFile = serde_json::from_str(json).unwrap();
        assert_eq!(image.id, "img1");
        assert_eq!(image.thumbnail_link, None);
        assert_eq!(image.web_view_link, None);
    }

    #[test]
    fn test_image_file_serializes_camel_case() {
        let image = ImageFile {
            id: "img1".to_string(),
            name: "front.jpg".to_string(),
            thumbnail_link: Some("https://lh3.example/thumb".to_string()),
            web_view_link: Some("https://drive.google.com/file/d/img1/preview".to_string()),
        };

        let json = serde_json::to_value(&image).unwrap();
        assert_eq!(json["thumbnailLink"], "https://lh3.example/thumb");
        assert_eq!(
            json["webViewLink"],
            "https://drive.google.com/file/d/img1/preview"
        );
    }

    #[test]
    fn test_file_metadata_is_folder() {
        let json = r#"{
            "id": "root",
            "name": "Products",
            "mimeType": "application/vnd.google-apps.folder"
        }"#;
        let metadata: FileMetadata = serde_json::from_str(json).unwrap();
        assert!(metadata.is_folder());

        let json = r#"{"id": "x", "name": "x.png", "mimeType": "image/png"}"#;
        let metadata: FileMetadata = serde_json::from_str(json).unwrap();
        assert!(!metadata.is_folder());
    }

    #[test]
    fn test_token_expiry_parses_fractional_seconds() {
        let json = r#"{
            "token": "ya29.abc",
            "refresh_token": "1//refresh",
            "client_id": "id.apps.googleusercontent.com",
            "client_secret": "secret",
            "expiry": "2030-01-02T03:04:05.123456Z"
        }"#;

        let token: AuthorizedUserToken = serde_json::from_str(json).unwrap();
        assert_eq!(token.token.as_deref(), Some("ya29.abc"));
        assert!(token.expiry.is_some());
        assert!(token.scopes.is_none());
    }
}
