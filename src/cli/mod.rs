pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "larder")]
#[command(about = "A grocery and home-improvement checklist", long_about = None)]
pub struct Cli {
    /// Database file path (defaults to the platform data directory)
    #[arg(long, global = true)]
    pub db: Option<std::path::PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add an item to the list
    Add {
        /// Item text
        text: String,
        /// Category name (unknown names fall back to Other)
        #[arg(short, long)]
        category: Option<String>,
        /// Quantity, at least 1
        #[arg(short, long)]
        quantity: Option<i64>,
    },
    /// Toggle an item between needed and purchased
    Toggle {
        /// Item id
        id: u64,
    },
    /// Remove an item
    Remove {
        /// Item id
        id: u64,
    },
    /// Replace an item's text and category
    Edit {
        /// Item id
        id: u64,
        /// New item text
        text: String,
        /// New category (keeps the current one if omitted)
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Set an item's quantity
    Quantity {
        /// Item id
        id: u64,
        /// New quantity, clamped to at least 1
        quantity: i64,
    },
    /// List items
    List {
        /// Show all, needed or purchased items
        #[arg(long)]
        filter: Option<String>,
        /// Order by category or alphabetical
        #[arg(long)]
        sort: Option<String>,
        /// Restrict to one mode: grocery, home or all
        #[arg(long)]
        mode: Option<String>,
        /// Group items under category headings
        #[arg(long)]
        grouped: bool,
    },
    /// Show item counts
    Stats {
        /// Restrict to one mode: grocery, home or all
        #[arg(long)]
        mode: Option<String>,
    },
    /// Clear purchased items, one mode, or everything
    Clear {
        /// Remove only purchased items
        #[arg(long)]
        purchased: bool,
        /// Restrict clearing to one mode's categories
        #[arg(long)]
        mode: Option<String>,
    },
}
