use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use larder::app::AppContext;
use larder::cli::{commands, Cli, Commands};
use larder::config::Config;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    let db_path = cli.db.clone().or_else(|| config.storage.path.clone());
    let mut ctx = AppContext::new(db_path)?;

    if !ctx.storage_available() {
        eprintln!("Warning: storage is unavailable; this session will not be saved.");
    }

    match cli.command {
        Commands::Add {
            text,
            category,
            quantity,
        } => {
            commands::add(&mut ctx, &text, category.as_deref(), quantity)?;
        }
        Commands::Toggle { id } => {
            commands::toggle(&mut ctx, id)?;
        }
        Commands::Remove { id } => {
            commands::remove(&mut ctx, id)?;
        }
        Commands::Edit { id, text, category } => {
            commands::edit(&mut ctx, id, &text, category.as_deref())?;
        }
        Commands::Quantity { id, quantity } => {
            commands::quantity(&mut ctx, id, quantity)?;
        }
        Commands::List {
            filter,
            sort,
            mode,
            grouped,
        } => {
            commands::list_items(
                &ctx,
                &config,
                filter.as_deref(),
                sort.as_deref(),
                mode.as_deref(),
                grouped,
            )?;
        }
        Commands::Stats { mode } => {
            commands::stats(&ctx, &config, mode.as_deref())?;
        }
        Commands::Clear { purchased, mode } => {
            commands::clear(&mut ctx, purchased, mode.as_deref())?;
        }
    }

    Ok(())
}
