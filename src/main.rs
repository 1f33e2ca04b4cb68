//! Trolley CLI
//!
//! Replays cart actions against a catalog and prints the resulting cart screen.
//!
//! ```text
//! trolley add:1 add:2 add:1 toggle:2
//! trolley --catalog fixtures/catalogs/default.yml add:3 dec:3
//! ```

use std::{io, path::PathBuf};

use anyhow::Result;
use clap::{ArgAction, Parser};
use tracing::info;
use trolley::{
    actions::CartAction,
    catalog::Catalog,
    controller::CartController,
    logging::{self, level_for_verbosity},
};

#[derive(Debug, Parser)]
#[command(name = "trolley", about = "Shopping cart simulator", long_about = None)]
struct Cli {
    /// YAML catalog file; the built-in catalog is used when omitted
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv); `RUST_LOG` overrides
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Actions to apply in order: add:ID (inc), dec:ID, remove:ID (rm), toggle:ID (select),
    /// delete-selected
    actions: Vec<CartAction>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(level_for_verbosity(cli.verbose))?;

    let catalog = match cli.catalog.as_deref() {
        Some(path) => Catalog::from_file(path)?,
        None => Catalog::default(),
    };

    let mut controller = CartController::new(catalog);
    controller.dispatch_all(&cli.actions);

    info!(
        actions = cli.actions.len(),
        items = controller.total_items_in_cart(),
        total = controller.total_price(),
        "replay finished"
    );

    let stdout = io::stdout();
    controller.view()?.write_to(stdout.lock())?;

    Ok(())
}
