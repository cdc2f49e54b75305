//! Rosterboard - static roster page generator
//!
//! A CLI tool that groups a roster of people by their manager and
//! writes the result as pretty-printed JSON into a target element of
//! an HTML document, alongside two image references.
//!
//! Exit codes:
//!   0 - Success
//!   1 - Runtime error (bad roster, missing output target, I/O failure)

mod cli;
mod config;
mod grouping;
mod models;
mod render;
mod roster;

use anyhow::{Context, Result};
use cli::Args;
use config::Config;
use render::{DocumentSink, PageAssets};
use std::path::PathBuf;
use tracing::{debug, error, info, warn};
use tracing_subscriber::FmtSubscriber;

fn main() {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Handle --init-config early (no logging needed)
    if args.init_config {
        if let Err(e) = handle_init_config() {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
        return;
    }

    // Initialize logging
    init_logging(&args);

    info!("Rosterboard v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);

    // Run the render
    if let Err(e) = run_render(args) {
        error!("Render failed: {}", e);
        eprintln!("\n❌ Error: {}", e);
        std::process::exit(1);
    }
}

/// Handle --init-config: generate a default .rosterboard.toml.
fn handle_init_config() -> Result<()> {
    let path = std::path::Path::new(".rosterboard.toml");

    if path.exists() {
        eprintln!("⚠️  .rosterboard.toml already exists. Remove it first or edit it manually.");
        std::process::exit(1);
    }

    let content = Config::default_toml();
    std::fs::write(path, &content).context("Failed to write .rosterboard.toml")?;

    println!("✅ Created .rosterboard.toml with default settings.");
    println!("   Edit it to customize the output document, target id, and assets.");
    Ok(())
}

/// Initialize logging based on verbosity settings.
fn init_logging(args: &Args) {
    let level = args.log_level();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

/// Run the complete render workflow: load -> group -> render -> write once.
fn run_render(args: Args) -> Result<()> {
    // Load configuration
    let mut config = load_config(&args)?;
    config.merge_with_args(&args);

    // Step 1: Get the roster
    let roster = match args.roster {
        Some(ref path) => {
            info!("Loading roster from: {}", path.display());
            roster::load_from_file(path)?
        }
        None => roster::embedded()?,
    };
    println!("📋 Roster loaded: {} people", roster.len());

    // Step 2: Group by manager
    let groups = grouping::group_by_manager(&roster);
    println!("👥 Grouped into {} buckets", groups.len());

    if let Some((key, count)) = grouping::largest_group(&groups) {
        println!("   Largest: {} ({} direct reports)", key, count);
    }
    let unassigned = grouping::unassigned_count(&groups);
    if unassigned > 0 {
        println!("   Without manager: {}", unassigned);
    }

    // Handle --dry-run: print the grouped text and exit
    if args.dry_run {
        let text = render::render_groups(&groups, config.render.indent)?;
        println!("\n🔍 Dry run: rendered groups (document untouched):\n");
        println!("{}", text);
        return Ok(());
    }

    // Step 3: Open the hosting document, creating it from the template
    // when it does not exist yet
    let output = PathBuf::from(&config.general.output);
    if !output.exists() {
        create_document(&output, &config)?;
    }

    let mut sink = DocumentSink::open(&output, &config.render.target_id)
        .with_context(|| format!("Failed to open document: {}", output.display()))?;

    // Step 4: Render and write once
    let assets = PageAssets {
        bundled: config.assets.bundled.clone(),
        literal: config.assets.literal.clone(),
    };
    render::render_into(&mut sink, &groups, &assets, config.render.indent)?;

    println!(
        "\n✅ Roster page written to {} (#{})",
        output.display(),
        config.render.target_id
    );
    Ok(())
}

/// Materialize the hosting document from the built-in template.
fn create_document(output: &PathBuf, config: &Config) -> Result<()> {
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
    }

    let template = render::document_template(&config.render.title, &config.render.target_id);
    std::fs::write(output, template)
        .with_context(|| format!("Failed to create document: {}", output.display()))?;

    info!("Created document from template: {}", output.display());
    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(args: &Args) -> Result<Config> {
    // Try explicit config path
    if let Some(ref config_path) = args.config {
        info!("Loading config from: {}", config_path.display());
        return Config::load(config_path);
    }

    // Try default location
    match Config::load_default() {
        Ok(Some(config)) => {
            info!("Loaded default config from .rosterboard.toml");
            Ok(config)
        }
        Ok(None) => {
            debug!("No config file found, using defaults");
            Ok(Config::default())
        }
        Err(e) => {
            warn!("Failed to load config: {}", e);
            Ok(Config::default())
        }
    }
}
