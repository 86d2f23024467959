//! designkit command line
//!
//! `serve` runs the HTTP surface; `export`, `catalog` and `init` work
//! offline against the same configuration.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use designkit_export::ExportFormat;
use designkit_server::config::CONFIG_FILE;
use designkit_server::{build_router, read_mirror, AppState, DesignkitConfig, FileStateStore};
use designkit_tokens::{build_config, DesignKitState};
use tokio::net::TcpListener;
use tracing::info;

#[derive(Parser)]
#[command(name = "designkit")]
#[command(about = "Resolve design selections into tokens and export them", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory holding designkit.toml (or the file itself)
    #[arg(short, long, global = true, default_value = ".")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server
    Serve {
        /// Listen address, overrides the config file
        #[arg(short, long, env = "DESIGNKIT_BIND")]
        bind: Option<String>,
    },

    /// Resolve a state file and print one export format
    Export {
        /// Format id (json, css, tailwind, swift, kotlin, flutter, react-native, claude-md)
        format: String,

        /// State JSON to resolve (defaults to the configured mirror)
        #[arg(short, long)]
        state: Option<PathBuf>,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// List catalog categories and items
    Catalog,

    /// Write a default designkit.toml
    Init {
        /// Target directory
        #[arg(default_value = ".")]
        dir: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,designkit_server=debug".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { bind } => serve(&cli.config, bind).await,
        Commands::Export { format, state, out } => {
            export(&cli.config, &format, state.as_deref(), out.as_deref())
        }
        Commands::Catalog => list_catalog(&cli.config),
        Commands::Init { dir } => init(&dir),
    }
}

fn load_config(path: &Path) -> Result<DesignkitConfig> {
    let mut config = DesignkitConfig::load_from_dir(path)?;
    config.apply_env();
    Ok(config)
}

async fn serve(config_path: &Path, bind: Option<String>) -> Result<()> {
    let mut config = load_config(config_path)?;
    if let Some(bind) = bind {
        config.server.bind = bind;
    }

    let catalog = config.load_catalog()?;
    let store = Arc::new(FileStateStore::new(&config.storage.state_file));
    info!(
        catalog_version = catalog.version(),
        mirror = %store.path().display(),
        "starting designkit server"
    );
    let app = build_router(AppState::new(catalog, store));

    let listener = TcpListener::bind(&config.server.bind)
        .await
        .with_context(|| format!("Failed to bind {}", config.server.bind))?;
    info!("listening on http://{}", config.server.bind);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;
    info!("designkit server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown requested");
    }
}

fn export(
    config_path: &Path,
    format: &str,
    state_path: Option<&Path>,
    out: Option<&Path>,
) -> Result<()> {
    let format: ExportFormat = format.parse()?;
    let config = load_config(config_path)?;
    let catalog = config.load_catalog()?;

    let state = match state_path {
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            serde_json::from_str::<DesignKitState>(&content)
                .with_context(|| format!("Failed to parse {}", path.display()))?
        }
        None => read_mirror(&config.storage.state_file).with_context(|| {
            format!(
                "No state at {}. Make a selection in designkit first, or pass --state.",
                config.storage.state_file.display()
            )
        })?,
    };

    let text = format.export(&build_config(&catalog, &state))?;
    match out {
        Some(path) => {
            fs::write(path, &text).with_context(|| format!("Failed to write {}", path.display()))?;
            info!(%format, path = %path.display(), "export written");
        }
        None => print!("{text}"),
    }
    Ok(())
}

fn list_catalog(config_path: &Path) -> Result<()> {
    let catalog = load_config(config_path)?.load_catalog()?;
    println!("catalog v{}", catalog.version());
    for category in catalog.categories() {
        println!("\n{} ({}): {}", category.name, category.id, category.description);
        for item in catalog.items_in(&category.id) {
            println!("  {:<12} {}: {}", item.id, item.name, item.description);
        }
    }
    Ok(())
}

fn init(dir: &Path) -> Result<()> {
    let path = dir.join(CONFIG_FILE);
    if path.exists() {
        anyhow::bail!("{} already exists", path.display());
    }
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    fs::write(&path, DesignkitConfig::default().to_toml()?)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Created {}", path.display());
    Ok(())
}
