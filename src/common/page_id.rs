//! Page identifier type.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::common::{Error, Result};

/// Identifies a page in a reference sequence.
///
/// Any integer is a valid page; the simulation only compares pages for
/// equality.
///
/// # Example
/// ```
/// use pagesim::PageId;
///
/// let page = PageId::new(7);
/// assert_eq!(page.0, 7);
/// assert_eq!(page.to_string(), "7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PageId(pub i64);

impl PageId {
    /// Create a new PageId.
    #[inline]
    pub fn new(id: i64) -> Self {
        PageId(id)
    }
}

impl From<i64> for PageId {
    fn from(id: i64) -> Self {
        PageId(id)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PageId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.trim().parse::<i64>().map(PageId)
    }
}

/// Parse a textual reference string such as `"7, 0, 1 2"`.
///
/// Tokens may be separated by commas, whitespace, or both. Empty input
/// yields an empty sequence. The first token that is not an integer
/// rejects the whole string; `position` in the error is 0-based.
pub fn parse_references(text: &str) -> Result<Vec<PageId>> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(position, token)| {
            token.parse::<PageId>().map_err(|_| Error::InvalidReference {
                token: token.to_string(),
                position,
            })
        })
        .collect()
}
