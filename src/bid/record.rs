// =====================================================================
// File: bid/record.rs
//
// Description:
//   Defines the `Bid` record stored in the bid table: an auction bid
//   identified by a numeric-looking string, with its title, fund code,
//   and winning amount.
// =====================================================================
use std::fmt;

/// A single procurement bid.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Bid {
    pub id: String,
    pub title: String,
    pub fund: String,
    pub amount: f64,
}


impl Bid {
    /// Creates a bid from its parts.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        fund: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            fund: fund.into(),
            amount,
        }
    }
}


/// Renders `"<id>: <title> | <amount> | <fund>"`.
///
/// # Example
/// ```
/// use dsaindex::Bid;
/// let bid = Bid::new("98011", "Chair", "General Fund", 48.5);
/// assert_eq!(bid.to_string(), "98011: Chair | 48.5 | General Fund");
/// ```
impl fmt::Display for Bid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} | {} | {}", self.id, self.title, self.amount, self.fund)
    }
}
