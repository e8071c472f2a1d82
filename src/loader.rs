// ============================================================
// File: loader.rs
//
// Description:
//   Reads the delimited record files for both programs and feeds
//   each well-formed record into its index exactly once.
//
//   - Course file: `id,name,prereq,prereq,...` (no header)
//   - Bid file: header row, then quoted CSV rows where column 1 is
//     the title, 2 the id, 5 the amount, and 9 the fund.
//
// Goal:
//   Keep file handling and field splitting out of the indexes.
//   Malformed rows are skipped with a warning and counted; blank
//   lines are ignored. A missing file leaves the index untouched.
// ============================================================
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use tracing::{info, warn};

use crate::bid::{Bid, BidTable};
use crate::course::{Course, CourseTree};
use crate::error::{Error, Result};

/// Columns a bid row must have (fund is the ninth).
const BID_COLUMNS: usize = 9;


/// Outcome of loading a record file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub loaded: usize,
    pub skipped: usize,
}


/// Read every line of a file. The file is closed before returning.
///
/// Lines that are not valid UTF-8 are decoded lossily with a warning,
/// so a stray Latin-1 byte costs at most that one row.
fn read_lines(path: &Path) -> Result<Vec<String>> {
    let io_error = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(io_error)?;
    let mut lines = Vec::new();

    for (idx, bytes) in BufReader::new(file).split(b'\n').enumerate() {
        let mut bytes = bytes.map_err(io_error)?;
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }

        let line = String::from_utf8(bytes).unwrap_or_else(|e| {
            warn!(line = idx + 1, "row is not valid UTF-8, replacing bad bytes");
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        });
        lines.push(line);
    }
    Ok(lines)
}


/// Load courses from `path` into `tree`.
///
/// # Errors
/// [`Error::Io`] when the file cannot be opened or read. Nothing is
/// inserted in that case.
pub fn load_courses(path: &Path, tree: &mut CourseTree) -> Result<LoadSummary> {
    let started = Instant::now();
    info!(path = %path.display(), "loading courses");

    let lines = read_lines(path)?;
    let mut summary = LoadSummary::default();

    for (idx, line) in lines.iter().enumerate() {
        // Ignore blank lines silently
        if line.trim().is_empty() {
            continue;
        }
        match parse_course_line(line) {
            Some(course) => {
                tree.insert(course);
                summary.loaded += 1;
            }
            None => {
                warn!(line = idx + 1, record = %line, "skipping malformed course row");
                summary.skipped += 1;
            }
        }
    }

    info!(
        loaded = summary.loaded,
        skipped = summary.skipped,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "courses loaded"
    );
    Ok(summary)
}


/// Parse `id,name[,prereq...]` into a course.
///
/// Fields are trimmed. Blank prerequisite fields are kept; the course
/// ignores them when counting. Returns `None` without an id and name.
///
/// # Example
/// ```
/// use dsaindex::loader::parse_course_line;
/// let course = parse_course_line("CSCI300,Introduction to Algorithms,CSCI200,MATH201\r").unwrap();
/// assert_eq!(course.id, "CSCI300");
/// assert_eq!(course.prerequisites, vec!["CSCI200", "MATH201"]);
/// assert!(parse_course_line("CSCI300").is_none());
/// ```
pub fn parse_course_line(line: &str) -> Option<Course> {
    let mut fields = line.split(',').map(str::trim);

    let id = fields.next().filter(|id| !id.is_empty())?;
    let name = fields.next()?;
    let prerequisites = fields.map(str::to_string).collect();

    Some(Course::new(id, name, prerequisites))
}


/// Load bids from `path` into `table`. The first line is a header.
///
/// # Errors
/// [`Error::Io`] when the file cannot be opened or read. Nothing is
/// inserted in that case.
pub fn load_bids(path: &Path, table: &mut BidTable) -> Result<LoadSummary> {
    let started = Instant::now();
    info!(path = %path.display(), "loading bids");

    let lines = read_lines(path)?;
    let mut summary = LoadSummary::default();

    for (idx, line) in lines.iter().enumerate().skip(1) {
        if line.trim().is_empty() {
            continue;
        }
        match parse_bid_row(&split_csv_line(line)) {
            Some(bid) => {
                table.insert(bid);
                summary.loaded += 1;
            }
            None => {
                warn!(line = idx + 1, record = %line, "skipping malformed bid row");
                summary.skipped += 1;
            }
        }
    }

    info!(
        loaded = summary.loaded,
        skipped = summary.skipped,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "bids loaded"
    );
    Ok(summary)
}


/// Build a bid from already split columns.
///
/// Returns `None` for short rows or a blank id. An amount that will
/// not parse is stored as 0.0.
pub fn parse_bid_row(fields: &[String]) -> Option<Bid> {
    if fields.len() < BID_COLUMNS {
        return None;
    }
    let id = fields[1].trim();
    if id.is_empty() {
        return None;
    }

    let amount = parse_amount(&fields[4]).unwrap_or_else(|| {
        warn!(bid_id = id, raw = %fields[4], "unreadable amount, using 0");
        0.0
    });

    Some(Bid::new(id, fields[0].trim(), fields[8].trim(), amount))
}


/// Parse a currency string such as `"$1,234.50"`.
///
/// # Example
/// ```
/// use dsaindex::loader::parse_amount;
/// assert_eq!(parse_amount("$1,234.50"), Some(1234.5));
/// assert_eq!(parse_amount(" 12 "), Some(12.0));
/// assert_eq!(parse_amount("n/a"), None);
/// ```
pub fn parse_amount(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, '$' | ',') && !c.is_whitespace())
        .collect();
    cleaned.parse().ok()
}


/// Split one CSV line into fields.
///
/// Double quotes group a field so commas inside it are kept, and a
/// doubled quote inside a quoted field stands for one quote character.
/// A trailing carriage return is dropped.
///
/// # Example
/// ```
/// use dsaindex::loader::split_csv_line;
/// let fields = split_csv_line("Desk,\"$1,200.00\",\"say \"\"hi\"\"\"\r");
/// assert_eq!(fields, vec!["Desk", "$1,200.00", "say \"hi\""]);
/// ```
pub fn split_csv_line(line: &str) -> Vec<String> {
    let line = line.trim_end_matches(['\r', '\n']);
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                field.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut field)),
            _ => field.push(c),
        }
    }
    fields.push(field);
    fields
}


// =====================================================================
// Unit Tests for record parsing
// =====================================================================
