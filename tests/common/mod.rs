//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use drive_catalog::error::{CatalogError, Result};
use drive_catalog::models::{FileMetadata, FOLDER_MIME_TYPE};
use drive_catalog::{DriveListing, Folder, ImageFile, SiteConfig};
use tempfile::TempDir;

/// In-memory Drive that counts every call made to it.
#[derive(Default)]
pub struct FakeDrive {
    pub root_missing: bool,
    pub folders: Vec<Folder>,
    pub folders_fail: bool,
    pub images: HashMap<String, Vec<ImageFile>>,
    pub failing_image_folders: HashSet<String>,
    pub calls: Arc<AtomicUsize>,
    pub mime_types_seen: Mutex<Vec<String>>,
}

impl FakeDrive {
    pub fn with_counter(calls: Arc<AtomicUsize>) -> Self {
        Self {
            calls,
            ..Self::default()
        }
    }

    pub fn folder(mut self, id: &str, name: &str) -> Self {
        self.folders.push(Folder {
            id: id.to_string(),
            name: name.to_string(),
        });
        self
    }

    pub fn image(mut self, folder_id: &str, image: ImageFile) -> Self {
        self.images
            .entry(folder_id.to_string())
            .or_default()
            .push(image);
        self
    }

    pub fn failing_images(mut self, folder_id: &str) -> Self {
        self.failing_image_folders.insert(folder_id.to_string());
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DriveListing for FakeDrive {
    async fn get_folder(&self, folder_id: &str) -> Result<FileMetadata> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.root_missing {
            return Err(CatalogError::FolderNotFound(folder_id.to_string()));
        }
        Ok(FileMetadata {
            id: folder_id.to_string(),
            name: "Products".to_string(),
            mime_type: Some(FOLDER_MIME_TYPE.to_string()),
        })
    }

    async fn list_folders(&self, _parent_id: &str) -> Result<Vec<Folder>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.folders_fail {
            return Err(CatalogError::ApiError {
                status: 500,
                message: "backend error".to_string(),
            });
        }
        Ok(self.folders.clone())
    }

    async fn list_files(&self, parent_id: &str, mime_types: &[&str]) -> Result<Vec<ImageFile>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.mime_types_seen
            .lock()
            .unwrap()
            .extend(mime_types.iter().map(|t| t.to_string()));
        if self.failing_image_folders.contains(parent_id) {
            return Err(CatalogError::ApiError {
                status: 403,
                message: "forbidden".to_string(),
            });
        }
        Ok(self.images.get(parent_id).cloned().unwrap_or_default())
    }
}

pub fn image(id: &str, view_link: Option<&str>) -> ImageFile {
    ImageFile {
        id: id.to_string(),
        name: format!("{}.jpg", id),
        thumbnail_link: Some(format!("https://lh3.googleusercontent.com/{}", id)),
        web_view_link: view_link.map(str::to_string),
    }
}

pub const INDEX_TEMPLATE: &str = "<ul>{% for product in products %}<li><a href=\"{{ product.href | safe }}\">{{ product.name }}</a></li>{% endfor %}</ul><p>count={{ products | length }}</p>";

pub const PRODUCT_TEMPLATE: &str = "<a href=\"{{ index_href | safe }}\">back</a><h1>{{ product.name }}</h1>{% for image in product.images %}<iframe src=\"{{ image.webViewLink | safe }}\"></iframe>{% endfor %}";

/// Write the two page templates into `dir`.
pub fn write_templates(dir: &Path) {
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join("index.html"), INDEX_TEMPLATE).unwrap();
    fs::write(dir.join("product.html"), PRODUCT_TEMPLATE).unwrap();
}

/// Write a token file that expires in an hour.
pub fn write_valid_token(path: &Path) {
    let expiry = chrono::Utc::now() + chrono::Duration::hours(1);
    let token = serde_json::json!({
        "token": "ya29.test-token",
        "refresh_token": "1//refresh",
        "client_id": "client.apps.googleusercontent.com",
        "client_secret": "secret",
        "token_uri": "https://oauth2.googleapis.com/token",
        "scopes": ["https://www.googleapis.com/auth/drive.readonly"],
        "expiry": expiry.to_rfc3339(),
    });
    fs::write(path, token.to_string()).unwrap();
}

/// A config rooted in a temporary directory, with templates in place.
pub fn temp_site() -> (TempDir, SiteConfig) {
    let dir = TempDir::new().unwrap();
    let config = SiteConfig {
        token_path: dir.path().join("token.json"),
        template_dir: dir.path().join("templates"),
        output_dir: dir.path().join("docs"),
        ..SiteConfig::default()
    };
    write_templates(&config.template_dir);
    (dir, config)
}
