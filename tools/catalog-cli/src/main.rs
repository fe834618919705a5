//! Catalog CLI - browse the product catalog from a terminal.
//!
//! Commands:
//! - `catalog list` - Print the filtered and sorted view list
//! - `catalog categories` - Print the distinct categories
//! - `catalog select` - Write a product to the selection slot
//! - `catalog show` - Print the selected product's details
//! - `catalog config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;
mod store;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{ConfigArgs, ListArgs, SelectArgs};

/// Catalog CLI - browse products and hand one to the details view
#[derive(Parser)]
#[command(name = "catalog")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products matching the search, category and sort options
    List(ListArgs),

    /// List the catalog's categories
    Categories,

    /// Select a product for the details view
    Select(SelectArgs),

    /// Show the selected product
    Show,

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let output = output::Output::new(cli.verbose, cli.json);
    let ctx = context::Context::load(cli.config.as_deref(), output)?;

    let result = match cli.command {
        Commands::List(args) => commands::list::run(args, &ctx).await,
        Commands::Categories => commands::categories::run(&ctx).await,
        Commands::Select(args) => commands::select::run(args, &ctx).await,
        Commands::Show => commands::show::run(&ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
