// =====================================================================
// File: bid/mod.rs
//
//! The `bid` module contains the chained hash table used by the bid
//! lookup program.
//!
//! Structure:
//! - `record.rs` : Defines the [`Bid`] record.
//! - `table.rs`  : Defines the [`BidTable`], its buckets, and the
//!                 identifier-to-key derivation ([`numeric_key`]).
//! - `tests.rs`  : Unit tests for the table (compiled only in test mode).
// =====================================================================

pub mod record;
pub mod table;

pub use self::record::Bid;
pub use self::table::{numeric_key, BidTable, TableEntry, DEFAULT_CAPACITY};
