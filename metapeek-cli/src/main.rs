//! Metapeek CLI
//!
//! Command-line interface for the metapeek metadata-extraction service.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use metapeek_api::{ApiConfig, ApiServer};
use metapeek_core::traits::PageFetcher;
use metapeek_render::{ChromeFetcher, RenderConfig};

/// metapeek - render a page, return its title and meta tags
#[derive(Parser)]
#[command(name = "metapeek")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the extraction API server
    Serve {
        /// Port to listen on (overrides PORT)
        #[arg(short, long)]
        port: Option<u16>,
        /// Bind address
        #[arg(short, long, default_value = "0.0.0.0")]
        bind: String,
        /// Cache TTL in seconds (overrides CACHE_TTL_SECONDS)
        #[arg(long)]
        ttl_secs: Option<u64>,
        /// Run Chromium with --no-sandbox (containers)
        #[arg(long)]
        no_sandbox: bool,
    },

    /// Render one page and print its metadata as JSON
    Peek {
        /// URL to render
        url: String,
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
        /// Run Chromium with --no-sandbox (containers)
        #[arg(long)]
        no_sandbox: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        "metapeek=debug,info"
    } else {
        "metapeek=info,warn"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Serve {
            port,
            bind,
            ttl_secs,
            no_sandbox,
        } => cmd_serve(port, &bind, ttl_secs, no_sandbox).await,
        Commands::Peek {
            url,
            pretty,
            no_sandbox,
        } => cmd_peek(&url, pretty, no_sandbox).await,
    }
}

/// Launch the browser, build the cache, run the API server.
async fn cmd_serve(
    port: Option<u16>,
    bind: &str,
    ttl_secs: Option<u64>,
    no_sandbox: bool,
) -> Result<()> {
    let mut config = ApiConfig::from_env();
    if let Some(port) = port {
        config.port = port;
    }
    if let Some(ttl) = ttl_secs {
        config.cache_ttl_seconds = ttl;
    }
    if no_sandbox {
        config.no_sandbox = true;
    }

    let mut render_config = RenderConfig::default();
    if let Some(ua) = &config.user_agent {
        render_config = render_config.with_user_agent(ua);
    }
    if config.no_sandbox {
        render_config = render_config.no_sandbox();
    }

    // The browser and the cache are built once, before the listener starts.
    println!("{}", "🔍 Launching headless browser...".cyan().bold());
    let fetcher = Arc::new(
        ChromeFetcher::launch_with_config(render_config)
            .await
            .context("failed to launch headless browser")?,
    );

    let addr: SocketAddr = format!("{}:{}", bind, config.port)
        .parse()
        .context("invalid bind address")?;

    println!(
        "{} {} {}",
        "🚀 Serving on".green().bold(),
        addr,
        format!("(cache TTL {}s)", config.cache_ttl_seconds).dimmed()
    );

    let server = ApiServer::new(config, fetcher);
    server.run(addr).await.context("server error")
}

/// Render one page and print the extracted metadata.
async fn cmd_peek(url: &str, pretty: bool, no_sandbox: bool) -> Result<()> {
    let mut render_config = RenderConfig::default();
    if no_sandbox {
        render_config = render_config.no_sandbox();
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner());
    spinner.set_message(format!("Rendering {url}"));
    spinner.enable_steady_tick(Duration::from_millis(80));

    let fetcher = ChromeFetcher::launch_with_config(render_config)
        .await
        .context("failed to launch headless browser")?;
    let result = fetcher.fetch(url).await;
    let _ = fetcher.close().await;

    spinner.finish_and_clear();

    let metadata = result?;
    let json = if pretty {
        serde_json::to_string_pretty(&metadata)?
    } else {
        serde_json::to_string(&metadata)?
    };

    println!("{json}");
    eprintln!(
        "{} {} meta tag(s)",
        "✔ extracted".green(),
        metadata.metas.len()
    );
    Ok(())
}
