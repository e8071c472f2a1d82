// =====================================================================
// File: config.rs
//
// Description:
//   Program settings for the two drivers, read from positional
//   command-line arguments with fallbacks for anything left out.
//
//     course_planner [csv_path] [course_id]
//     bid_lookup     [csv_path] [search_id] [capacity]
// =====================================================================
use std::path::PathBuf;

use crate::bid::DEFAULT_CAPACITY;
use crate::error::{Error, Result};

/// Course file read when no path is given.
pub const DEFAULT_COURSE_FILE: &str = "Advising_Assistance_Program.csv";

/// Bid file read when no path is given.
pub const DEFAULT_BID_FILE: &str = "eBid_Monthly_Sales.csv";

/// Bid identifier used when the user does not type one.
pub const DEFAULT_BID_SEARCH: &str = "98011";

/// Log filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";


/// Settings for the course planner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerConfig {
    pub csv_path: PathBuf,
    /// Course to show on the first lookup instead of prompting.
    pub course_id: Option<String>,
}


impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from(DEFAULT_COURSE_FILE),
            course_id: None,
        }
    }
}


impl PlannerConfig {
    /// Build from the arguments after the program name.
    ///
    /// # Example
    /// ```
    /// use dsaindex::PlannerConfig;
    /// let config = PlannerConfig::from_args(["courses.csv", "cs300"]);
    /// assert_eq!(config.csv_path.to_str(), Some("courses.csv"));
    /// assert_eq!(config.course_id.as_deref(), Some("CS300"));
    /// ```
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = args.into_iter().map(Into::into);
        let mut config = Self::default();

        if let Some(path) = args.next() {
            config.csv_path = PathBuf::from(path);
        }
        config.course_id = args
            .next()
            .map(|id| id.trim().to_uppercase())
            .filter(|id| !id.is_empty());
        config
    }
}


/// Settings for the bid lookup program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BidConfig {
    pub csv_path: PathBuf,
    pub search_id: String,
    pub capacity: usize,
}


impl Default for BidConfig {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from(DEFAULT_BID_FILE),
            search_id: DEFAULT_BID_SEARCH.to_string(),
            capacity: DEFAULT_CAPACITY,
        }
    }
}


impl BidConfig {
    /// Build from the arguments after the program name.
    ///
    /// # Errors
    /// [`Error::InvalidCapacity`] when the third argument is not a
    /// positive whole number.
    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = args.into_iter().map(Into::into);
        let mut config = Self::default();

        if let Some(path) = args.next() {
            config.csv_path = PathBuf::from(path);
        }
        if let Some(search_id) = args.next() {
            config.search_id = search_id;
        }
        if let Some(raw) = args.next() {
            config.capacity = parse_capacity(&raw)?;
        }
        Ok(config)
    }
}


fn parse_capacity(raw: &str) -> Result<usize> {
    match raw.trim().parse::<usize>() {
        Ok(capacity) if capacity > 0 => Ok(capacity),
        _ => Err(Error::InvalidCapacity(raw.to_string())),
    }
}


// =====================================================================
// Unit Tests for configuration
// =====================================================================
