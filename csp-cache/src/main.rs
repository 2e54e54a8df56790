//! csp-cache inspector
//!
//! Loads a JSON site fixture (field schema plus content), runs the
//! paragraph reference collector for one node and prints its cache tags.
//!
//! Usage:
//!   csp-cache --site site.json --node 1
//!   csp-cache --site site.json --node 1 --config csp-cache.toml --json

use std::{path::PathBuf, sync::Arc};
use anyhow::{Context, Result};
use clap::Parser;
use csp_cache::{CollectorConfig, ParagraphReference};
use csp_model::SiteFixture;
use csp_types::EntityId;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "csp-cache")]
#[command(about = "Print the cache tags a node inherits from its paragraphs")]
struct Args {
    /// Path to the JSON site fixture
    #[arg(short, long)]
    site: PathBuf,

    /// Id of the node to inspect
    #[arg(short, long)]
    node: u64,

    /// Path to the collector config (TOML)
    #[arg(short, long, default_value = "csp-cache.toml")]
    config: PathBuf,

    /// Print tags as a JSON array
    #[arg(long)]
    json: bool,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let config = CollectorConfig::load_from(&args.config);
    let fixture = SiteFixture::load(&args.site)
        .with_context(|| format!("failed to load site fixture {}", args.site.display()))?;
    let (registry, store) = fixture.into_parts();
    info!(bundles = registry.bundle_count(), entities = store.len(), "Site loaded");

    let collector = ParagraphReference::with_config(Arc::new(registry), Arc::new(store), config);
    let tags = collector
        .collect_node_tags(EntityId::new(args.node))?
        .with_context(|| format!("node {} not found", args.node))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&tags)?);
    } else if tags.is_empty() {
        info!("No paragraph cache tags for node {}", args.node);
    } else {
        for tag in &tags {
            println!("{tag}");
        }
    }
    Ok(())
}
