//! Aqua Peak CLI - cart inspection and checkout drafting tools.
//!
//! # Usage
//!
//! ```bash
//! # Add a catalog record to the cart
//! aqua-cli add --record '{"_id":"p1","name":"Koi pellets 5kg","price":34.5}' --quantity 2
//!
//! # Show cart lines, recent items, and totals
//! aqua-cli list
//!
//! # Change a line's quantity
//! aqua-cli set-qty --id p1 --quantity 3
//!
//! # Print the order submission payload
//! aqua-cli checkout
//! ```
//!
//! # State
//!
//! The cart lives in a state directory of JSON documents, resolved from
//! `--state-dir`, then the `AQUA_STATE_DIR` environment variable, then
//! `./.aqua-state`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use aqua_peak_cart::Cart;
use aqua_peak_cart::storage::FileStore;

mod commands;

#[derive(Parser)]
#[command(name = "aqua-cli")]
#[command(author, version, about = "Aqua Peak cart tools")]
struct Cli {
    /// Cart state directory (defaults to $AQUA_STATE_DIR, then ./.aqua-state)
    #[arg(long, global = true)]
    state_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a catalog record to the cart
    Add {
        /// Raw catalog record as a JSON object
        #[arg(long)]
        record: String,

        /// Units to add
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Remove a line from the cart
    Remove {
        /// Product id of the line
        #[arg(long)]
        id: String,
    },
    /// Set the quantity of an existing line
    SetQty {
        /// Product id of the line
        #[arg(long)]
        id: String,

        /// New quantity (at least 1)
        #[arg(short, long)]
        quantity: u32,
    },
    /// Show cart lines, recent items, and totals
    List,
    /// Empty the cart and the recent-items list
    Clear,
    /// Print the order submission payload for the current cart
    Checkout,
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load .env for AQUA_STATE_DIR
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let state_dir = commands::resolve_state_dir(cli.state_dir);
    let storage = FileStore::open(&state_dir)?;
    let mut cart = Cart::load(Box::new(storage));

    match cli.command {
        Commands::Add { record, quantity } => commands::cart::add(&mut cart, &record, quantity)?,
        Commands::Remove { id } => commands::cart::remove(&mut cart, &id),
        Commands::SetQty { id, quantity } => commands::cart::set_qty(&mut cart, &id, quantity)?,
        Commands::List => commands::cart::list(&cart),
        Commands::Clear => commands::cart::clear(&mut cart),
        Commands::Checkout => commands::checkout::emit(&cart)?,
    }
    Ok(())
}
