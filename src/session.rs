// =====================================================================
// File: session.rs
//
// Description:
// Defines the session values each program runs against. A session owns
// its index for the whole run and is handed to every menu action, so
// there is no global index pointer.
//
// Responsibilities:
// - `PlannerSession`: the course tree (absent until the first load),
//   the course file path, and a one-shot course id from the command line.
// - `BidSession`: the bid table (allocated up front), the bid file path,
//   and the default search id.
// =====================================================================
use std::path::PathBuf;

use crate::config::{BidConfig, PlannerConfig};
use crate::error::Result;
use crate::loader::{self, LoadSummary};
use crate::{BidTable, CourseTree};

/// Runtime state of the course planner.
#[derive(Debug)]
pub struct PlannerSession {
    /// `None` until courses have been loaded once.
    pub courses: Option<CourseTree>,
    pub csv_path: PathBuf,
    /// Consumed by the first lookup.
    pub pending_course_id: Option<String>,
}


impl PlannerSession {
    /// Creates a session with no courses loaded.
    ///
    /// # Example
    /// ```
    /// use dsaindex::{PlannerConfig, PlannerSession};
    /// let session = PlannerSession::new(PlannerConfig::default());
    /// assert!(!session.is_loaded());
    /// ```
    pub fn new(config: PlannerConfig) -> Self {
        Self {
            courses: None,
            csv_path: config.csv_path,
            pending_course_id: config.course_id,
        }
    }

    /// Returns `true` once a load has succeeded.
    pub fn is_loaded(&self) -> bool {
        self.courses.is_some()
    }

    /// Load the course file into a fresh tree.
    ///
    /// The new tree replaces the session's only when the load succeeds,
    /// so a reload never duplicates courses and a bad path keeps the
    /// courses loaded earlier.
    pub fn load(&mut self) -> Result<LoadSummary> {
        let mut tree = CourseTree::new();
        let summary = loader::load_courses(&self.csv_path, &mut tree)?;
        self.courses = Some(tree);
        Ok(summary)
    }

    /// Course id to look up: the pending one if present, else `typed`.
    pub fn next_course_id(&mut self, typed: &str) -> String {
        self.pending_course_id
            .take()
            .unwrap_or_else(|| typed.trim().to_uppercase())
    }
}


/// Runtime state of the bid lookup program.
#[derive(Debug)]
pub struct BidSession {
    pub table: BidTable,
    pub csv_path: PathBuf,
    pub search_id: String,
}


impl BidSession {
    /// Creates a session with an empty table of the configured size.
    pub fn new(config: BidConfig) -> Self {
        Self {
            table: BidTable::with_capacity(config.capacity),
            csv_path: config.csv_path,
            search_id: config.search_id,
        }
    }

    /// Load the bid file into the table.
    pub fn load(&mut self) -> Result<LoadSummary> {
        loader::load_bids(&self.csv_path, &mut self.table)
    }

    /// Bid id to act on: `typed` if the user entered one, else the default.
    pub fn resolve_id(&self, typed: &str) -> String {
        match typed.trim() {
            "" => self.search_id.clone(),
            id => id.to_string(),
        }
    }
}


// =====================================================================
// Unit Tests for Session
// =====================================================================
