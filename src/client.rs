//! Google Drive API client for the two listing queries the catalog needs.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::auth::Credential;
use crate::config::SiteConfig;
use crate::error::{CatalogError, Result};
use crate::models::{
    ApiErrorResponse, FileListResponse, FileMetadata, Folder, ImageFile, FOLDER_MIME_TYPE,
};

/// Read access to a Drive folder tree.
///
/// Implemented by [`DriveClient`] against the real API; tests substitute a fake.
#[async_trait]
pub trait DriveListing {
    /// Fetch metadata for a single file or folder.
    async fn get_folder(&self, folder_id: &str) -> Result<FileMetadata>;

    /// List non-trashed child folders of `parent_id`.
    async fn list_folders(&self, parent_id: &str) -> Result<Vec<Folder>>;

    /// List non-trashed files under `parent_id` whose mime type is one of `mime_types`.
    async fn list_files(&self, parent_id: &str, mime_types: &[&str]) -> Result<Vec<ImageFile>>;
}

/// Build the files.list query for child folders.
pub fn folder_query(parent_id: &str) -> String {
    format!(
        "'{}' in parents and mimeType = '{}' and trashed = false",
        escape(parent_id),
        FOLDER_MIME_TYPE
    )
}

/// Build the files.list query for files of the given mime types.
pub fn files_query(parent_id: &str, mime_types: &[&str]) -> String {
    let types = mime_types
        .iter()
        .map(|t| format!("mimeType='{}'", escape(t)))
        .collect::<Vec<_>>()
        .join(" or ");
    format!(
        "'{}' in parents and ({}) and trashed = false",
        escape(parent_id),
        types
    )
}

fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

/// Client for listing product folders and images in Google Drive.
pub struct DriveClient {
    credential: Credential,
    http: Client,
    api_base: String,
    page_size: u32,
}

impl DriveClient {
    /// Create a new DriveClient using the API base and page size from `config`.
    pub fn new(credential: Credential, config: &SiteConfig) -> Self {
        Self {
            credential,
            http: Client::new(),
            api_base: config.api_base.trim_end_matches('/').to_string(),
            page_size: config.page_size,
        }
    }

    /// Run one files.list query and return its first page.
    ///
    /// A `nextPageToken` in the response is logged but not followed.
    async fn query_first_page<T: DeserializeOwned>(
        &self,
        query: &str,
        fields: &str,
    ) -> Result<Vec<T>> {
        let page_size = self.page_size.to_string();
        let fields = format!("nextPageToken, files({})", fields);

        let response = self
            .http
            .get(format!("{}/files", self.api_base))
            .bearer_auth(self.credential.access_token())
            .query(&[
                ("q", query),
                ("spaces", "drive"),
                ("fields", fields.as_str()),
                ("pageSize", page_size.as_str()),
                ("includeItemsFromAllDrives", "true"),
                ("supportsAllDrives", "true"),
            ])
            .send()
            .await?;

        let response = check_status(response).await?;
        let list_response: FileListResponse<T> = response.json().await?;

        if list_response.next_page_token.is_some() {
            tracing::warn!(
                query,
                page_size = self.page_size,
                "more results available; only the first page is used"
            );
        }

        Ok(list_response.files)
    }
}

#[async_trait]
impl DriveListing for DriveClient {
    async fn get_folder(&self, folder_id: &str) -> Result<FileMetadata> {
        let response = self
            .http
            .get(format!("{}/files/{}", self.api_base, folder_id))
            .bearer_auth(self.credential.access_token())
            .query(&[
                ("supportsAllDrives", "true"),
                ("fields", "id, name, mimeType"),
            ])
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(CatalogError::FolderNotFound(folder_id.to_string()));
        }

        let response = check_status(response).await?;
        let metadata: FileMetadata = response.json().await?;
        if !metadata.is_folder() {
            return Err(CatalogError::NotAFolder(folder_id.to_string()));
        }
        Ok(metadata)
    }

    async fn list_folders(&self, parent_id: &str) -> Result<Vec<Folder>> {
        self.query_first_page(&folder_query(parent_id), "id, name").await
    }

    async fn list_files(&self, parent_id: &str, mime_types: &[&str]) -> Result<Vec<ImageFile>> {
        self.query_first_page(
            &files_query(parent_id, mime_types),
            "id, name, thumbnailLink, webViewLink",
        )
        .await
    }
}

/// Turn a non-success response into an [`CatalogError::ApiError`].
async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let error_body = response.text().await.unwrap_or_default();
    if let Ok(api_error) = serde_json::from_str::<ApiErrorResponse>(&error_body) {
        return Err(CatalogError::ApiError {
            status: api_error.error.code,
            message: api_error.error.message,
        });
    }
    Err(CatalogError::ApiError {
        status: status.as_u16(),
        message: error_body,
    })
}
