//! # dsaindex
//! Two small record lookup programs built around hand-written indexes.
//!
//! ## Features
//! - Course planner: courses kept in a binary search tree keyed by
//!   course id, listed in order or looked up with their prerequisites.
//! - Bid lookup: auction bids kept in a fixed-size hash table with
//!   chaining, addressed by the numeric value of the bid id.
//! - Numbered text menus for both, reading from any `BufRead` and
//!   writing to any `Write` so they can be scripted in tests.
//!
//! ## Usage
//! The binaries in `src/bin/` parse arguments, install logging, and
//! hand a session to [`run_planner`] or [`run_bid_lookup`]. All
//! reusable logic and unit tests live here.
// =====================================================================
// File: lib.rs
//
//   Course planner menu:
//
//     `1` -> Load the course file into the tree
//     `2` -> Print the course list (sample schedule, ascending id)
//     `3` -> Print one course and its prerequisites
//     `9` -> Exit
//
//   Bid lookup menu:
//
//     `1` -> Load the bid file into the table
//     `2` -> Display all bids (bucket order, then chain order)
//     `3` -> Find a bid by id
//     `4` -> Remove a bid by id
//     `9` -> Exit
//
//   End of input behaves like `9`.
// =====================================================================
pub mod bid;
pub use bid::{Bid, BidTable};

pub mod course;
pub use course::{Course, CourseInformation, CourseTree};

pub mod config;
pub use config::{BidConfig, PlannerConfig};

pub mod error;
pub use error::{Error, Result};

pub mod loader;
pub use loader::{load_bids, load_courses, LoadSummary};

pub mod session;
pub use session::{BidSession, PlannerSession};

use std::io::{self, BufRead, Write};
use std::time::Instant;

use tracing_subscriber::EnvFilter;

/// Result of handling a single menu choice.
///
/// - `Continue` means the menu should be shown again.
/// - `Exit` means the loop should stop.
#[derive(Debug, PartialEq, Eq)]
pub enum CommandResult {
    Continue,
    Exit,
}


/// Install the `tracing` subscriber used by both binaries.
///
/// The filter comes from `RUST_LOG`, falling back to
/// [`config::DEFAULT_LOG_FILTER`]. Logs go to stderr so menu output on
/// stdout stays clean.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_FILTER)),
        )
        .with_writer(io::stderr)
        .try_init()
        .ok(); // Ignore error if already initialized
}


/// Read one line, without its line ending. `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}


/// Write a prompt and read the answer. End of input reads as empty.
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, text: &str) -> io::Result<String> {
    write!(out, "{}", text)?;
    out.flush()?;
    Ok(read_line(input)?.unwrap_or_default())
}


// =====================================================================
// Course planner
// =====================================================================

/// Menu loop for the course planner.
///
/// # Example
/// ```
/// use dsaindex::{run_planner, PlannerConfig, PlannerSession};
///
/// let mut session = PlannerSession::new(PlannerConfig::default());
/// let mut input = "2\n9\n".as_bytes();
/// let mut out = Vec::new();
/// run_planner(&mut session, &mut input, &mut out).unwrap();
///
/// let text = String::from_utf8(out).unwrap();
/// assert!(text.contains("Load courses first - option 1"));
/// assert!(text.contains("Thank you for using the course planner!"));
/// ```
pub fn run_planner<R: BufRead, W: Write>(
    session: &mut PlannerSession,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "Welcome to the course planner!")?;
    writeln!(out)?;

    loop {
        print_planner_menu(out)?;
        let choice = read_line(input)?.unwrap_or_else(|| "9".to_string());

        if handle_planner_choice(choice.trim(), session, input, out)? == CommandResult::Exit {
            break;
        }
    }
    Ok(())
}


fn print_planner_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, " 1. Load Data Structure")?;
    writeln!(out, " 2. Print Course List")?;
    writeln!(out, " 3. Print Course")?;
    writeln!(out, " 9. Exit")?;
    write!(out, "What would you like to do? ")?;
    out.flush()
}


/// Handles a single planner menu choice.
pub fn handle_planner_choice<R: BufRead, W: Write>(
    choice: &str,
    session: &mut PlannerSession,
    input: &mut R,
    out: &mut W,
) -> io::Result<CommandResult> {
    match choice {
        // Load courses into a fresh tree
        "1" => {
            match session.load() {
                Ok(summary) => {
                    writeln!(out, "Courses have been loaded.")?;
                    if summary.skipped > 0 {
                        writeln!(out, "Skipped {} malformed row(s).", summary.skipped)?;
                    }
                }
                Err(e) => {
                    tracing::error!(error = %e, "course load failed");
                    writeln!(out, "File not found. {}", e)?;
                }
            }
            writeln!(out)?;
        }

        // Sample schedule in ascending id order
        "2" => match &session.courses {
            Some(tree) => {
                writeln!(out, "Here is a sample schedule:")?;
                writeln!(out)?;
                tree.print_sample_schedule(out)?;
                writeln!(out)?;
            }
            None => {
                writeln!(out, "Load courses first - option 1")?;
                writeln!(out)?;
            }
        },

        // One course with its prerequisites
        "3" => {
            if !session.is_loaded() {
                writeln!(out, "Load courses first - option 1")?;
                writeln!(out)?;
                return Ok(CommandResult::Continue);
            }

            let typed = if session.pending_course_id.is_some() {
                String::new()
            } else {
                prompt(input, out, "What course do you want to know about? ")?
            };
            let course_id = session.next_course_id(&typed);

            if let Some(tree) = &session.courses {
                writeln!(out)?;
                tree.print_course_information(&course_id, out)?;
                writeln!(out)?;
            }
        }

        "9" => {
            writeln!(out)?;
            writeln!(out, "Thank you for using the course planner!")?;
            return Ok(CommandResult::Exit);
        }

        _ => {
            writeln!(out, "{} is not a valid option", choice)?;
            writeln!(out)?;
        }
    }
    Ok(CommandResult::Continue)
}


// =====================================================================
// Bid lookup
// =====================================================================

/// Menu loop for the bid lookup program.
pub fn run_bid_lookup<R: BufRead, W: Write>(
    session: &mut BidSession,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    loop {
        print_bid_menu(out)?;
        let choice = read_line(input)?.unwrap_or_else(|| "9".to_string());

        if handle_bid_choice(choice.trim(), session, input, out)? == CommandResult::Exit {
            break;
        }
    }
    Ok(())
}


fn print_bid_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Menu:")?;
    writeln!(out, "  1. Load Bids")?;
    writeln!(out, "  2. Display All Bids")?;
    writeln!(out, "  3. Find Bid")?;
    writeln!(out, "  4. Remove Bid")?;
    writeln!(out, "  9. Exit")?;
    write!(out, "Enter choice: ")?;
    out.flush()
}


fn write_elapsed<W: Write>(out: &mut W, started: Instant) -> io::Result<()> {
    writeln!(out, "time: {:.6} seconds", started.elapsed().as_secs_f64())
}


/// Handles a single bid menu choice.
pub fn handle_bid_choice<R: BufRead, W: Write>(
    choice: &str,
    session: &mut BidSession,
    input: &mut R,
    out: &mut W,
) -> io::Result<CommandResult> {
    match choice {
        "1" => {
            writeln!(out, "Loading CSV file {}", session.csv_path.display())?;
            let started = Instant::now();

            match session.load() {
                Ok(summary) => {
                    writeln!(out, "{} bids read", summary.loaded)?;
                    if summary.skipped > 0 {
                        writeln!(out, "Skipped {} malformed row(s).", summary.skipped)?;
                    }
                }
                Err(e) => {
                    tracing::error!(error = %e, "bid load failed");
                    writeln!(out, "Could not load bids: {}", e)?;
                }
            }
            write_elapsed(out, started)?;
        }

        "2" => session.table.print_all(out)?,

        "3" => {
            let text = format!("Enter bid id [{}]: ", session.search_id);
            let bid_id = session.resolve_id(&prompt(input, out, &text)?);
            let started = Instant::now();

            match session.table.search(&bid_id) {
                Some(bid) => writeln!(out, "{}", bid)?,
                None => writeln!(out, "Bid Id {} not found.", bid_id)?,
            }
            write_elapsed(out, started)?;
        }

        "4" => {
            let text = format!("Enter bid id [{}]: ", session.search_id);
            let bid_id = session.resolve_id(&prompt(input, out, &text)?);

            match session.table.remove(&bid_id) {
                Some(bid) => writeln!(out, "Removed {}", bid)?,
                None => writeln!(out, "Bid Id {} not found.", bid_id)?,
            }
        }

        "9" => {
            writeln!(out, "Good bye.")?;
            return Ok(CommandResult::Exit);
        }

        _ => writeln!(out, "{} is not a valid option", choice)?,
    }
    Ok(CommandResult::Continue)
}


// =================================================================
// lib.rs Unit tests
// =================================================================
