//! Catalog assembly: product folders and their images, fetched from Drive.
//!
//! Listing failures at this level never abort the run. A failed folder
//! listing looks like an empty root, a failed image listing gives a product
//! with no images.

use std::collections::HashMap;

use crate::client::DriveListing;
use crate::config::SiteConfig;
use crate::models::{Folder, ImageFile, Product};
use crate::slug::slugify;
use crate::url_parser::preview_link;

/// Image types included in the catalog. Other image formats are skipped.
pub const IMAGE_MIME_TYPES: [&str; 3] = ["image/jpeg", "image/png", "image/webp"];

/// List the product folders under `parent_id`, or nothing if the listing fails.
pub async fn list_product_folders<D>(drive: &D, parent_id: &str) -> Vec<Folder>
where
    D: DriveListing + ?Sized,
{
    match drive.list_folders(parent_id).await {
        Ok(folders) => folders,
        Err(e) => {
            tracing::warn!(parent_id, error = %e, "failed to list product folders");
            Vec::new()
        }
    }
}

/// List the images in a product folder with their view links made embeddable.
pub async fn list_images<D>(drive: &D, folder_id: &str) -> Vec<ImageFile>
where
    D: DriveListing + ?Sized,
{
    let images = match drive.list_files(folder_id, &IMAGE_MIME_TYPES).await {
        Ok(images) => images,
        Err(e) => {
            tracing::warn!(folder_id, error = %e, "failed to list images");
            return Vec::new();
        }
    };

    images
        .into_iter()
        .map(|mut image| {
            image.web_view_link = image.web_view_link.as_deref().map(preview_link);
            image
        })
        .collect()
}

/// Build one [`Product`] per product folder, in listing order.
pub async fn build_catalog<D>(drive: &D, parent_id: &str, config: &SiteConfig) -> Vec<Product>
where
    D: DriveListing + ?Sized,
{
    let folders = list_product_folders(drive, parent_id).await;
    if folders.is_empty() {
        return Vec::new();
    }

    tracing::info!(count = folders.len(), "found products, collecting images");

    let mut products = Vec::with_capacity(folders.len());
    let mut pages: HashMap<String, String> = HashMap::new();

    for folder in folders {
        let images = list_images(drive, &folder.id).await;
        let slug = slugify(&folder.name);
        let url = config.product_page(&slug).to_string_lossy().into_owned();

        if let Some(previous) = pages.insert(url.clone(), folder.name.clone()) {
            tracing::warn!(
                page = %url,
                first = %previous,
                second = %folder.name,
                "two products share a page; the later one overwrites it"
            );
        }

        tracing::debug!(name = %folder.name, images = images.len(), "collected product");

        products.push(Product {
            href: config.product_href(&slug),
            id: folder.id,
            name: folder.name,
            slug,
            url,
            images,
        });
    }

    products
}
