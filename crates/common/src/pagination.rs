//! Pagination utilities shared by the list endpoints.
//!
//! Normalizes raw `limit`/`offset` query parameters into sane bounds.

use thiserror::Error;

/// Raised when the caller supplies a limit outside the accepted window.
#[derive(Debug, Error)]
#[error("limit must be between 1 and {max}, got {0}", max = ListPage::MAX_LIMIT)]
pub struct InvalidLimit(pub u64);

/// Normalized limit/offset pair.
#[derive(Clone, Copy, Debug)]
pub struct ListPage {
    /// maximum number of rows to return
    pub limit: u64,
    /// number of matching rows to skip
    pub offset: u64,
}

impl ListPage {
    pub const DEFAULT_LIMIT: u64 = 100;
    pub const MAX_LIMIT: u64 = 1000;

    /// Normalize raw query parameters: missing limit defaults to 100, a
    /// limit outside 1..=1000 is rejected, missing offset defaults to 0.
    pub fn new(limit: Option<u64>, offset: Option<u64>) -> Result<Self, InvalidLimit> {
        let limit = limit.unwrap_or(Self::DEFAULT_LIMIT);
        if !(1..=Self::MAX_LIMIT).contains(&limit) {
            return Err(InvalidLimit(limit));
        }
        Ok(Self { limit, offset: offset.unwrap_or(0) })
    }
}

impl Default for ListPage {
    fn default() -> Self {
        Self { limit: Self::DEFAULT_LIMIT, offset: 0 }
    }
}
