// =====================================================================
// File: bid/table.rs
//
// Description:
//   Implements the bid table (`BidTable`), a fixed-size hash table that
//   resolves collisions by chaining. Bids are addressed by the numeric
//   value of their identifier, taken modulo the table capacity.
//
// Features:
//   - `insert`: Fills an empty bucket or appends to its chain.
//   - `search`: Exact identifier match within the addressed bucket.
//   - `remove`: Unlinks only the matching entry; a miss is a no-op.
//   - `entries` / `print_all`: Bucket order, then chain order.
//
// Notes:
//   * Every bucket is allocated up front and is either `Empty` or
//     `Occupied` with a head entry plus the chain that followed it.
//   * Inserting an identifier that is already present appends a second
//     entry. Search and remove act on the first one in chain order.
// =====================================================================
use std::collections::VecDeque;
use std::io::{self, Write};

use super::Bid;

/// Bucket count used by the bid lookup program.
pub const DEFAULT_CAPACITY: usize = 17000;


/// A single slot of the table.
#[derive(Debug, Clone, Default)]
enum Bucket {
    #[default]
    Empty,
    Occupied { head: Bid, chain: VecDeque<Bid> },
}


impl Bucket {
    /// Head first, then chained entries in insertion order.
    fn iter(&self) -> impl Iterator<Item = &Bid> {
        let (head, chain) = match self {
            Bucket::Empty => (None, None),
            Bucket::Occupied { head, chain } => (Some(head), Some(chain)),
        };
        head.into_iter().chain(chain.into_iter().flatten())
    }
}


/// One stored bid together with where it lives in the table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableEntry<'a> {
    pub bucket: usize,
    pub bid: &'a Bid,
    /// `false` for the bucket's head entry, `true` for chained entries.
    pub chained: bool,
}


/// Derive the numeric key of a bid identifier.
///
/// Leading ASCII digits (after surrounding whitespace is trimmed) are
/// read as a base-10 number with wrapping arithmetic. An identifier
/// with no leading digit maps to key 0, so it always lands in bucket 0.
///
/// # Example
/// ```
/// use dsaindex::bid::numeric_key;
/// assert_eq!(numeric_key("98011"), 98011);
/// assert_eq!(numeric_key(" 42 "), 42);
/// assert_eq!(numeric_key("17abc"), 17);
/// assert_eq!(numeric_key("abc"), 0);
/// ```
pub fn numeric_key(id: &str) -> u64 {
    id.trim()
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0u64, |acc, digit| {
            acc.wrapping_mul(10).wrapping_add(u64::from(digit - b'0'))
        })
}


/// Hash table of bids with separate chaining.
#[derive(Debug, Clone)]
pub struct BidTable {
    buckets: Vec<Bucket>,
    len: usize,
}


impl Default for BidTable {
    fn default() -> Self {
        Self::new()
    }
}


impl BidTable {
    /// Create a table with [`DEFAULT_CAPACITY`] buckets.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a table with a fixed number of buckets, all empty.
    ///
    /// # Call outs
    /// Will call out if `capacity` is zero. Configuration rejects a zero
    /// capacity before a table is ever built.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "bid table capacity must be > 0");
        Self {
            buckets: vec![Bucket::Empty; capacity],
            len: 0,
        }
    }

    /// Number of buckets.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Number of stored bids across all buckets.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bucket an identifier addresses: `numeric_key(id) mod capacity`.
    pub fn bucket_index(&self, id: &str) -> usize {
        (numeric_key(id) % self.buckets.len() as u64) as usize
    }

    /// Number of bids held by one bucket (0 for an out-of-range index).
    pub fn bucket_len(&self, index: usize) -> usize {
        self.buckets.get(index).map_or(0, |b| b.iter().count())
    }

    /// Insert a bid.
    ///
    /// An empty bucket takes the bid as its head. An occupied bucket
    /// gets it appended to the end of its chain. No check is made for an
    /// existing entry with the same identifier.
    ///
    /// # Example
    /// ```
    /// use dsaindex::{Bid, BidTable};
    /// let mut table = BidTable::with_capacity(10);
    /// table.insert(Bid::new("5", "Desk", "General Fund", 10.0));
    /// table.insert(Bid::new("15", "Lamp", "General Fund", 4.0));
    /// assert_eq!(table.bucket_len(5), 2);
    /// assert_eq!(table.search("15").map(|b| b.title.as_str()), Some("Lamp"));
    /// assert!(table.search("25").is_none());
    /// ```
    pub fn insert(&mut self, bid: Bid) {
        let idx = self.bucket_index(&bid.id);
        tracing::debug!(bid_id = %bid.id, bucket = idx, "inserting bid");

        let bucket = &mut self.buckets[idx];
        match bucket {
            Bucket::Empty => {
                *bucket = Bucket::Occupied {
                    head: bid,
                    chain: VecDeque::new(),
                }
            }
            Bucket::Occupied { chain, .. } => chain.push_back(bid),
        }
        self.len += 1;
    }

    /// Search for a bid by exact identifier.
    ///
    /// Only the bucket the identifier hashes to is scanned.
    ///
    /// # Returns
    /// * `Some(&Bid)` for the first match in chain order.
    /// * `None` if the bucket is empty or holds no match.
    pub fn search(&self, id: &str) -> Option<&Bid> {
        self.buckets[self.bucket_index(id)]
            .iter()
            .find(|bid| bid.id == id)
    }

    /// Remove the bid with the given identifier.
    ///
    /// - Head match with a chain behind it: the next chained bid becomes
    ///   the head.
    /// - Head match with no chain: the bucket goes back to empty.
    /// - Chain match: the entry is spliced out, order of the rest kept.
    /// - No match: nothing changes.
    ///
    /// # Returns
    /// The removed bid, or `None` when nothing matched.
    pub fn remove(&mut self, id: &str) -> Option<Bid> {
        let idx = self.bucket_index(id);

        let removed = match std::mem::take(&mut self.buckets[idx]) {
            Bucket::Empty => None,
            Bucket::Occupied { head, mut chain } if head.id == id => {
                // Promote the next link, or leave the bucket empty
                if let Some(next) = chain.pop_front() {
                    self.buckets[idx] = Bucket::Occupied { head: next, chain };
                }
                Some(head)
            }
            Bucket::Occupied { head, mut chain } => {
                let removed = chain
                    .iter()
                    .position(|bid| bid.id == id)
                    .and_then(|pos| chain.remove(pos));
                self.buckets[idx] = Bucket::Occupied { head, chain };
                removed
            }
        };

        if removed.is_some() {
            self.len -= 1;
            tracing::debug!(bid_id = id, bucket = idx, "removed bid");
        }
        removed
    }

    /// Every stored bid in bucket-index order, then chain order.
    pub fn entries(&self) -> impl Iterator<Item = TableEntry<'_>> {
        self.buckets.iter().enumerate().flat_map(|(bucket, slot)| {
            slot.iter().enumerate().map(move |(pos, bid)| TableEntry {
                bucket,
                bid,
                chained: pos > 0,
            })
        })
    }

    /// Write every bid, one per line.
    ///
    /// Bucket heads print as `"Key <bucket>: <bid>"` and chained entries
    /// as `" <bucket>: <bid>"`.
    pub fn print_all<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for entry in self.entries() {
            if entry.chained {
                writeln!(out, " {}: {}", entry.bucket, entry.bid)?;
            } else {
                writeln!(out, "Key {}: {}", entry.bucket, entry.bid)?;
            }
        }
        Ok(())
    }

    /// Drop every bid, keeping the bucket array.
    pub fn clear(&mut self) {
        self.buckets.fill(Bucket::Empty);
        self.len = 0;
    }
}
