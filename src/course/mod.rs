// =====================================================================
// File: course/mod.rs
//
//! The `course` module contains the binary search tree used by the
//! course planner.
//!
//! Structure:
//! - `record.rs` : Defines the [`Course`] record and prerequisite helpers.
//! - `tree.rs`   : Defines the [`CourseTree`] and its algorithms
//!                 (insert, find, in-order schedule).
//! - `tests.rs`  : Unit tests for the tree (compiled only in test mode).
// =====================================================================

pub mod record;
pub mod tree;

pub use self::record::Course;
pub use self::tree::{CourseInformation, CourseTree, Schedule};
