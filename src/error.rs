//! Error types for the drive_catalog crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building the catalog site.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Credential file not found: {}", .0.display())]
    MissingCredential(PathBuf),

    #[error("Invalid credentials in {}: {reason}", .path.display())]
    InvalidCredential { path: PathBuf, reason: String },

    #[error("Usage: {0}")]
    Usage(String),

    #[error("Folder not found: '{0}'")]
    FolderNotFound(String),

    #[error("Not a folder: '{0}'")]
    NotAFolder(String),

    #[error("API error ({status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Missing local configuration: {}", .0.display())]
    MissingLocalConfig(PathBuf),

    #[error("Template error: {0}")]
    TemplateError(#[from] tera::Error),

    #[error("Failed to write {}: {source}", .path.display())]
    RenderError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CatalogError {
    /// A follow-up line telling the user what to do about the error, if any.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            CatalogError::MissingCredential(_) => {
                Some("Run the authorization flow first to generate the token file.")
            }
            CatalogError::InvalidCredential { .. } => {
                Some("Remove the token file and authorize again.")
            }
            CatalogError::FolderNotFound(_) => {
                Some("Check that the id is correct and that you have permission to view the folder.")
            }
            CatalogError::MissingLocalConfig(_) => {
                Some("Make sure the file or directory exists next to where you run the tool.")
            }
            _ => None,
        }
    }
}

/// Result type alias for CatalogError.
pub type Result<T> = std::result::Result<T, CatalogError>;
