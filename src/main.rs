use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vitrin::config::Config;
use vitrin::{i18n, metrics};

mod commands;

rust_i18n::i18n!("locales", fallback = "en");

#[derive(Parser)]
#[command(
    name = "vitrin",
    version,
    about = "Locale-aware routing and content tooling for a bilingual catalog site",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log format (text, json)
    #[arg(long, global = true, default_value = "text")]
    log_format: String,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a path into its location under another locale
    Resolve {
        /// Localized path to resolve, e.g. /en/product/red-orange
        path: String,

        /// Locale the path currently belongs to
        #[arg(long, default_value = "en")]
        from: String,

        /// Locale to switch to
        #[arg(long, default_value = "tr")]
        to: String,
    },

    /// Print or validate the localized route table
    Routes {
        /// Run the completeness check instead of printing the table
        #[arg(long, default_value = "false")]
        validate: bool,
    },

    /// Fetch and print the navigation menu for a locale
    Menu {
        /// Locale to fetch the menu for
        #[arg(short, long, default_value = "en")]
        locale: String,
    },

    /// Search products and categories
    Search {
        /// Search query
        query: String,

        /// Locale to restrict results to
        #[arg(short, long, default_value = "en")]
        locale: String,
    },

    /// Fetch a single content item and print it as JSON
    Show {
        /// Content kind (page, post, product)
        kind: String,

        /// Slug of the item
        slug: String,

        /// Locale to fetch under
        #[arg(short, long, default_value = "en")]
        locale: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing/logging
    setup_tracing(&cli.log_format, cli.verbose)?;

    i18n::init_from_env();

    let config = match &cli.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::from_env().context("Failed to load config from environment")?,
    };
    config.validate().context("Invalid configuration")?;

    if let Err(e) = metrics::init_metrics() {
        tracing::warn!(error = %e, "Metrics initialization failed, continuing without metrics");
    }

    tracing::info!("Vitrin starting");

    match cli.command {
        Commands::Resolve { path, from, to } => {
            tracing::info!(
                path = %path,
                from = %from,
                to = %to,
                "Starting resolve command"
            );
            commands::resolve(config, path, from, to).await?;
        }

        Commands::Routes { validate } => {
            tracing::info!(validate = %validate, "Starting routes command");
            commands::routes(validate)?;
        }

        Commands::Menu { locale } => {
            tracing::info!(locale = %locale, "Starting menu command");
            commands::menu(config, locale).await?;
        }

        Commands::Search { query, locale } => {
            tracing::info!(
                query = %query,
                locale = %locale,
                "Starting search command"
            );
            commands::search(config, query, locale).await?;
        }

        Commands::Show { kind, slug, locale } => {
            tracing::info!(
                kind = %kind,
                slug = %slug,
                locale = %locale,
                "Starting show command"
            );
            commands::show(config, kind, slug, locale).await?;
        }
    }

    tracing::info!("Vitrin completed successfully");
    Ok(())
}

fn setup_tracing(format: &str, verbose: bool) -> Result<()> {
    let env_filter = if verbose {
        tracing_subscriber::EnvFilter::new("vitrin=debug,info")
    } else {
        tracing_subscriber::EnvFilter::new("vitrin=info,warn")
    };

    match format {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
    }

    Ok(())
}
