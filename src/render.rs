//! Static site rendering with Tera templates.

use std::fs;
use std::path::{Path, PathBuf};

use tera::{Context, Tera};

use crate::config::SiteConfig;
use crate::error::{CatalogError, Result};
use crate::models::Product;

/// Renders the catalog index and product pages to disk.
pub struct SiteRenderer {
    tera: Tera,
    config: SiteConfig,
}

impl SiteRenderer {
    /// Load the index and product templates from the template directory.
    ///
    /// Only those two files are parsed; anything else in the directory is
    /// ignored. Fails with [`CatalogError::MissingLocalConfig`] if the
    /// directory or either template is missing.
    pub fn new(config: &SiteConfig) -> Result<Self> {
        if !config.template_dir.is_dir() {
            return Err(CatalogError::MissingLocalConfig(config.template_dir.clone()));
        }

        let mut files = Vec::with_capacity(2);
        for name in [&config.index_template, &config.product_template] {
            let path = config.template_path(name);
            if !path.is_file() {
                return Err(CatalogError::MissingLocalConfig(path));
            }
            files.push((path, Some(name.as_str())));
        }

        let mut tera = Tera::default();
        tera.add_template_files(files)?;

        Ok(Self {
            tera,
            config: config.clone(),
        })
    }

    /// Write the index page and one page per product, in order.
    ///
    /// Existing files are overwritten. A failure part-way leaves the pages
    /// already written in place. Returns the paths written.
    pub fn render(&self, products: &[Product]) -> Result<Vec<PathBuf>> {
        let products_path = self.config.products_path();
        fs::create_dir_all(&products_path).map_err(|source| CatalogError::RenderError {
            path: products_path.clone(),
            source,
        })?;

        let mut written = Vec::with_capacity(products.len() + 1);

        let mut context = Context::new();
        context.insert("products", products);
        let html = self.tera.render(&self.config.index_template, &context)?;
        let index_path = self.config.index_path();
        write_page(&index_path, &html)?;
        tracing::info!(path = %index_path.display(), "wrote index page");
        written.push(index_path);

        let index_href = self.config.index_href();
        for product in products {
            let mut context = Context::new();
            context.insert("product", product);
            context.insert("index_href", &index_href);
            let html = self.tera.render(&self.config.product_template, &context)?;
            let path = self.config.product_page(&product.slug);
            write_page(&path, &html)?;
            tracing::info!(path = %path.display(), "wrote product page");
            written.push(path);
        }

        Ok(written)
    }
}

fn write_page(path: &Path, html: &str) -> Result<()> {
    fs::write(path, html).map_err(|source| CatalogError::RenderError {
        path: path.to_path_buf(),
        source,
    })
}
