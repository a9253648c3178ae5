//! # Larder
//!
//! A grocery and home-improvement checklist with local persistence.
//!
//! ## Architecture
//!
//! Larder is a small command-driven state manager:
//!
//! ```text
//! Command → List Store → Views → output
//!              ↓
//!          Snapshot → BlobStore
//! ```
//!
//! - [`list`]: the authoritative item collection and its mutations
//! - [`views`]: pure filtered/counted/sorted/grouped projections
//! - [`store`]: key-value blob persistence with a whole-collection snapshot
//! - [`cli`]: the command-line driver
//!
//! ## Quick Start
//!
//! ```bash
//! # Add items
//! larder add "Milk" --category Dairy --quantity 2
//! larder add "Wood screws" --category Hardware
//!
//! # Mark one purchased
//! larder toggle 1
//!
//! # Show the grocery list grouped by category
//! larder list --mode grocery --grouped
//! ```
//!
//! ## Modules
//!
//! - [`app`]: application context and error types
//! - [`cli`]: command-line interface definitions
//! - [`config`]: TOML configuration
//! - [`domain`]: core domain models (Item, Category, Mode)
//! - [`list`]: list state and command application
//! - [`store`]: blob storage and the snapshot bridge
//! - [`views`]: read-only projections

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires together the list
/// state and the snapshot store, and applies commands with best-effort
/// persistence.
pub mod app;

/// Command-line interface using clap.
///
/// Defines the CLI structure and subcommands:
/// - `add <text>` - Add an item
/// - `toggle <id>` - Flip an item's purchased state
/// - `remove <id>` - Delete an item
/// - `edit <id> <text>` - Replace text and category
/// - `quantity <id> <n>` - Set a quantity
/// - `list` / `stats` - Derived views
/// - `clear` - Bulk removal
pub mod cli;

/// Configuration management.
///
/// Loads from `~/.config/larder/config.toml`: storage path override and
/// list presentation defaults.
pub mod config;

/// Core domain models.
///
/// - [`Item`](domain::Item): a checklist entry
/// - [`Category`](domain::Category): the closed category set with icons
/// - [`Mode`](domain::Mode): grocery/home scope over categories
pub mod domain;

/// List state and mutations.
///
/// - [`ListState`](list::ListState): the authoritative collection
/// - [`Command`](list::Command): one variant per user-triggered mutation
pub mod list;

/// Persistence layer.
///
/// - [`BlobStore`](store::BlobStore): trait for key-value blob backends
/// - [`SqliteStore`](store::SqliteStore): durable SQLite backend
/// - [`MemoryStore`](store::MemoryStore): in-memory fallback backend
/// - [`SnapshotStore`](store::SnapshotStore): whole-collection JSON snapshot
pub mod store;

/// Read-only projections: filtering, counts, sorting, grouping.
pub mod views;
