//! Command line arguments of the one-shot `tradesense` binary

use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "tradesense",
    about = "Generate trading signals for a market batch or the simulated watchlist"
)]
pub struct Cli {
    /// Market batch JSON file (object of symbol to series). Simulates the
    /// configured watchlist when omitted.
    pub batch: Option<PathBuf>,

    /// Paper-trade the strong signals and include the executed trades.
    #[arg(long, default_value_t = false)]
    pub execute: bool,
}
