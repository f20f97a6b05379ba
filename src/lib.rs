//! drive_catalog - Generate a static product catalog from a Google Drive folder.
//!
//! Each child folder of a root Drive folder is one product and the JPEG, PNG
//! and WebP images inside it are that product's pictures. The crate:
//! - Loads a previously authorized OAuth token
//! - Lists product folders and their images through the Drive API
//! - Renders an index page and one page per product with Tera templates
//!
//! # Example
//!
//! ```no_run
//! use drive_catalog::{run, DriveClient, SiteConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = SiteConfig::default();
//!     let outcome = run(&config, "folder-id", |credential| {
//!         DriveClient::new(credential, &config)
//!     })
//!     .await?;
//!     println!("{:?}", outcome);
//!
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod catalog;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod render;
pub mod slug;
pub mod url_parser;

// Re-exports for convenience
pub use auth::Credential;
pub use catalog::{build_catalog, list_images, list_product_folders};
pub use client::{DriveClient, DriveListing};
pub use config::SiteConfig;
pub use error::{CatalogError, Result};
pub use models::{Folder, ImageFile, Product};
pub use pipeline::{run, RunOutcome};
pub use render::SiteRenderer;
pub use slug::slugify;
pub use url_parser::{extract_folder_id, preview_link};
