//! Site configuration: where inputs are read from and outputs written to.

use std::path::{Path, PathBuf};

/// Google Drive API v3 base URL.
pub const DRIVE_API_BASE: &str = "https://www.googleapis.com/drive/v3";

/// Read-only Drive scope.
pub const DRIVE_READONLY_SCOPE: &str = "https://www.googleapis.com/auth/drive.readonly";

/// Results requested per listing call. Only the first page is ever read.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Paths and constants used by a catalog run.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Persisted authorized-user token.
    pub token_path: PathBuf,
    /// Directory holding the page templates.
    pub template_dir: PathBuf,
    /// Root of the generated site.
    pub output_dir: PathBuf,
    /// Subdirectory of `output_dir` for product pages.
    pub products_dir: String,
    pub index_template: String,
    pub product_template: String,
    pub scopes: Vec<String>,
    pub page_size: u32,
    pub api_base: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            token_path: PathBuf::from("token.json"),
            template_dir: PathBuf::from("templates"),
            output_dir: PathBuf::from("docs"),
            products_dir: "products".to_string(),
            index_template: "index.html".to_string(),
            product_template: "product.html".to_string(),
            scopes: vec![DRIVE_READONLY_SCOPE.to_string()],
            page_size: DEFAULT_PAGE_SIZE,
            api_base: DRIVE_API_BASE.to_string(),
        }
    }
}

impl SiteConfig {
    /// Path of the catalog index page.
    pub fn index_path(&self) -> PathBuf {
        self.output_dir.join("index.html")
    }

    /// Directory product pages are written to.
    pub fn products_path(&self) -> PathBuf {
        self.output_dir.join(&self.products_dir)
    }

    /// Output path of the page for a product with the given slug.
    pub fn product_page(&self, slug: &str) -> PathBuf {
        self.products_path().join(format!("{}.html", slug))
    }

    /// Link to a product page relative to the index page.
    pub fn product_href(&self, slug: &str) -> String {
        format!("{}/{}.html", self.products_dir, slug)
    }

    /// Link back to the index page relative to a product page.
    ///
    /// One `../` per component of `products_dir`.
    pub fn index_href(&self) -> String {
        let depth = Path::new(&self.products_dir).components().count();
        format!("{}index.html", "../".repeat(depth))
    }

    pub fn template_path(&self, name: &str) -> PathBuf {
        Path::new(&self.template_dir).join(name)
    }
}
