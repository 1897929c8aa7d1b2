use std::{
    fs::File,
    io::{self, BufReader},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use menu_catalog::{IdSource, MenuCatalog, MenuEditor, RandomIds, SequentialIds};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod render;
mod session;

use config::load_settings;
use session::{RenderOptions, Session};

#[derive(Parser, Debug)]
#[command(about = "Interactive restaurant menu management console")]
struct Args {
    #[arg(long, default_value = "menu.toml")]
    config: PathBuf,
    /// Read commands from a file instead of stdin
    #[arg(long)]
    script: Option<PathBuf>,
    /// Start without the demo menu
    #[arg(long)]
    empty: bool,
    /// Use random uuid-based ids instead of item-N
    #[arg(long)]
    random_ids: bool,
    /// Render listings and errors as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let settings = load_settings(&args.config)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter)),
        )
        .with_writer(io::stderr)
        .init();

    let ids: Box<dyn IdSource> = if args.random_ids {
        Box::new(RandomIds)
    } else {
        Box::new(SequentialIds::starting_at(settings.id_start))
    };
    let catalog = if args.empty || !settings.seed_demo {
        MenuCatalog::new(ids)
    } else {
        MenuCatalog::seeded(ids)
    };
    info!(entries = catalog.len(), "menu console ready");

    let mut session = Session::new(
        MenuEditor::new(catalog),
        RenderOptions {
            currency_symbol: settings.currency_symbol,
            json: args.json,
        },
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.script {
        Some(path) => {
            let file = File::open(&path)
                .with_context(|| format!("failed to open script '{}'", path.display()))?;
            session.run(BufReader::new(file), &mut out, false)?;
        }
        None => session.run(io::stdin().lock(), &mut out, true)?,
    }

    info!(
        entries = session.editor().catalog().len(),
        "menu console finished"
    );
    Ok(())
}
