//! `txgraph` - query transaction-flow graphs from the command line.
//!
//! Loads a JSON array of edge records, runs one query and prints the result
//! as JSON on stdout. Logs go to stderr and are filtered by `RUST_LOG`.

mod commands;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use txgraph_core::{TransactionGraph, TraversalConfig};

use crate::commands::{Command, Output};

/// Trace value transfers between addresses.
#[derive(Parser, Debug)]
#[command(name = "txgraph")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON file holding an array of edge records
    #[arg(short, long, env = "TXGRAPH_EDGES")]
    edges: Option<PathBuf>,

    /// TOML file with traversal limits
    #[arg(short, long, env = "TXGRAPH_CONFIG")]
    config: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let config = TraversalConfig::load(args.config.as_deref())
        .context("Failed to load traversal config")?;

    let graph = match args.edges.as_deref() {
        Some(path) => commands::load_graph(path, config)?,
        None if args.command.needs_graph() => {
            anyhow::bail!("--edges <FILE> is required for this command")
        }
        None => TransactionGraph::with_config(config),
    };

    match args.command.run(&graph)? {
        Output::Json(value) => {
            let rendered = if args.pretty {
                serde_json::to_string_pretty(&value)?
            } else {
                serde_json::to_string(&value)?
            };
            println!("{rendered}");
        }
        Output::Text(text) => print!("{text}"),
    }
    Ok(())
}
