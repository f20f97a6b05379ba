//! drive_catalog CLI - Build a static catalog site from a Google Drive folder.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use drive_catalog::config::{DEFAULT_PAGE_SIZE, DRIVE_API_BASE};
use drive_catalog::{run, CatalogError, DriveClient, RunOutcome, SiteConfig};

/// Generate a static product catalog from a Google Drive folder.
#[derive(Parser)]
#[command(name = "drive_catalog")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// ID or URL of the Drive folder holding one subfolder per product.
    folder: String,

    /// Path to the authorized-user token file.
    #[arg(long, env = "CATALOG_TOKEN_FILE", default_value = "token.json")]
    token: PathBuf,

    /// Directory containing the index.html and product.html templates.
    #[arg(long, env = "CATALOG_TEMPLATES", default_value = "templates")]
    templates: PathBuf,

    /// Output directory for the generated site.
    #[arg(long, short = 'o', env = "CATALOG_OUT", default_value = "docs")]
    out: PathBuf,

    /// Maximum results per listing call. Further pages are not fetched.
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    page_size: u32,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Drive API base URL.
    #[arg(long, env = "CATALOG_API_BASE", default_value = DRIVE_API_BASE, hide = true)]
    api_base: String,
}

impl Cli {
    fn site_config(&self) -> SiteConfig {
        SiteConfig {
            token_path: self.token.clone(),
            template_dir: self.templates.clone(),
            output_dir: self.out.clone(),
            page_size: self.page_size,
            api_base: self.api_base.clone(),
            ..SiteConfig::default()
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // clap exits with 2 on usage errors; this tool uses 1 for every failure.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            let _ = err.print();
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&cli.log_level);

    match execute(&cli).await {
        Ok(RunOutcome::NoProducts) => {
            println!("No product folders found in the given folder.");
            ExitCode::SUCCESS
        }
        Ok(RunOutcome::Rendered { products, .. }) => {
            println!(
                "Generated {} product page(s). The site is in {:?}.",
                products, cli.out
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {:#}", err);
            if let Some(hint) = err.downcast_ref::<CatalogError>().and_then(CatalogError::hint) {
                eprintln!("{}", hint);
            }
            ExitCode::FAILURE
        }
    }
}

async fn execute(cli: &Cli) -> Result<RunOutcome> {
    let config = cli.site_config();

    let outcome = run(&config, &cli.folder, |credential| {
        DriveClient::new(credential, &config)
    })
    .await
    .with_context(|| format!("Failed to build catalog for folder: {}", cli.folder))?;

    Ok(outcome)
}

fn init_tracing(log_level: &str) {
    let level: tracing::Level = log_level.parse().unwrap_or(tracing::Level::INFO);
    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter)
        .init();
}
