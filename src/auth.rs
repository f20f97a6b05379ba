//! Loading of the persisted OAuth authorized-user token.
//!
//! The token is produced by a separate consent flow. This module only reads it
//! back and decides whether it can be used as-is: there is no refresh, so an
//! expired access token is a hard failure.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use chrono::{DateTime, Duration, Utc};

use crate::config::SiteConfig;
use crate::error::{CatalogError, Result};
use crate::models::AuthorizedUserToken;

/// Tokens expiring within this window are treated as already expired.
const EXPIRY_SKEW_SECS: i64 = 60;

/// A loaded, validated access credential.
#[derive(Clone)]
pub struct Credential {
    access_token: String,
    expiry: Option<DateTime<Utc>>,
    scopes: Vec<String>,
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("access_token", &"<redacted>")
            .field("expiry", &self.expiry)
            .field("scopes", &self.scopes)
            .finish()
    }
}

impl Credential {
    /// Load the token file named by the config and check it is usable.
    pub fn load(config: &SiteConfig) -> Result<Self> {
        Self::from_file(&config.token_path, &config.scopes)
    }

    /// Load a token file. `scopes`, when non-empty, replace the scopes
    /// recorded in the file.
    pub fn from_file<P: AsRef<Path>>(path: P, scopes: &[String]) -> Result<Self> {
        let path = path.as_ref();
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(CatalogError::MissingCredential(path.to_path_buf()));
            }
            Err(e) => {
                return Err(CatalogError::InvalidCredential {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                });
            }
        };

        let token: AuthorizedUserToken =
            serde_json::from_str(&content).map_err(|e| CatalogError::InvalidCredential {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        let scopes = if scopes.is_empty() {
            token.scopes.clone().unwrap_or_default()
        } else {
            scopes.to_vec()
        };

        let credential = Self {
            access_token: token.token.unwrap_or_default(),
            expiry: token.expiry,
            scopes,
        };

        if !credential.is_valid_at(Utc::now()) {
            return Err(CatalogError::InvalidCredential {
                path: path.to_path_buf(),
                reason: "token is missing or expired".to_string(),
            });
        }

        Ok(credential)
    }

    /// Build a credential directly from an access token.
    pub fn from_access_token(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            expiry: None,
            scopes: Vec::new(),
        }
    }

    /// Whether the token can be used at `now`.
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        if self.access_token.is_empty() {
            return false;
        }
        match self.expiry {
            Some(expiry) => expiry > now + Duration::seconds(EXPIRY_SKEW_SECS),
            None => true,
        }
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn expiry(&self) -> Option<DateTime<Utc>> {
        self.expiry
    }

    pub fn scopes(&self) -> &[String] {
        &self.scopes
    }
}
