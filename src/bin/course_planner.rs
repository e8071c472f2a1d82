// ============================================================
// File: bin/course_planner.rs
//
// Description:
//   Entry point for the course planner.
//
//     course_planner [csv_path] [course_id]
//
//   Loads courses on request into a binary search tree and
//   answers list/lookup choices from a numbered menu on stdin.
// ============================================================
use std::io;

use dsaindex::{init_logging, run_planner, PlannerConfig, PlannerSession};

fn main() -> anyhow::Result<()> {
    init_logging();

    let config = PlannerConfig::from_args(std::env::args().skip(1));
    tracing::info!(path = %config.csv_path.display(), "starting course planner");

    let mut session = PlannerSession::new(config);
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_planner(&mut session, &mut stdin.lock(), &mut stdout.lock())?;

    Ok(())
}
