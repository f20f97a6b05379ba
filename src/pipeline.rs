//! One catalog run: load credentials, fetch the catalog, render the site.

use std::path::PathBuf;

use crate::auth::Credential;
use crate::catalog::build_catalog;
use crate::client::DriveListing;
use crate::config::SiteConfig;
use crate::error::Result;
use crate::render::SiteRenderer;
use crate::url_parser::extract_folder_id;

/// How a successful run ended.
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// The root folder has no product folders; nothing was written.
    NoProducts,
    /// Pages were written for `products` products.
    Rendered { products: usize, pages: Vec<PathBuf> },
}

/// Generate the catalog site for the folder given as `folder` (an id or URL).
///
/// `connect` turns the loaded credential into a Drive connection. It is only
/// called once the credential, folder argument and templates have all been
/// checked, so none of those failures cause network traffic.
pub async fn run<D, F>(config: &SiteConfig, folder: &str, connect: F) -> Result<RunOutcome>
where
    D: DriveListing,
    F: FnOnce(Credential) -> D,
{
    let credential = Credential::load(config)?;
    tracing::info!(
        path = %config.token_path.display(),
        expires = ?credential.expiry(),
        "loaded credentials"
    );

    let root_id = extract_folder_id(folder)?;
    let renderer = SiteRenderer::new(config)?;

    let drive = connect(credential);

    let root = drive.get_folder(&root_id).await?;
    tracing::info!(id = %root.id, name = %root.name, "using root folder");

    let products = build_catalog(&drive, &root_id, config).await;
    if products.is_empty() {
        tracing::info!(id = %root_id, "no product folders found");
        return Ok(RunOutcome::NoProducts);
    }

    let pages = renderer.render(&products)?;
    tracing::info!(
        products = products.len(),
        output = %config.output_dir.display(),
        "site generated"
    );

    Ok(RunOutcome::Rendered {
        products: products.len(),
        pages,
    })
}
