// ============================================================
// File: bin/bid_lookup.rs
//
// Description:
//   Entry point for the bid lookup program.
//
//     bid_lookup [csv_path] [search_id] [capacity]
//
//   Loads bids into a chained hash table and answers display,
//   find, and remove choices from a numbered menu on stdin.
// ============================================================
use std::io;

use anyhow::Context;
use dsaindex::{init_logging, run_bid_lookup, BidConfig, BidSession};

fn main() -> anyhow::Result<()> {
    init_logging();

    let config = BidConfig::from_args(std::env::args().skip(1))
        .context("bad command-line arguments")?;
    tracing::info!(
        path = %config.csv_path.display(),
        capacity = config.capacity,
        "starting bid lookup"
    );

    let mut session = BidSession::new(config);
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_bid_lookup(&mut session, &mut stdin.lock(), &mut stdout.lock())?;

    Ok(())
}
