//! Delulu Airport Index
//! Copyright (c) 2026 Mamy Ratsimbazafy
//! Licensed and distributed under either of
//!   * MIT license (license terms at the root of the package or at http://opensource.org/licenses/MIT).
//!   * Apache v2 license (license terms at the root of the package or at http://www.apache.org/licenses/LICENSE-2.0).
//! at your option. This file may not be copied, modified, or distributed except according to those terms.

use thiserror::Error;

/// The airport dataset could not be turned into an index.
///
/// Raised once, at load time. An index is never partially built: either every
/// record is valid and codes are unique, or loading fails with one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataIntegrityError {
    #[error("failed to read airport dataset {path}: {reason}")]
    Unreadable { path: String, reason: String },
    #[error("malformed airport dataset: {reason}")]
    Malformed {
        line: usize,
        column: usize,
        reason: String,
    },
    #[error("airport record #{position} ({code:?}) is invalid: {reason}")]
    InvalidRecord {
        position: usize,
        code: String,
        reason: String,
    },
    #[error("duplicate airport code {code} (records #{first} and #{second})")]
    DuplicateCode {
        code: String,
        first: usize,
        second: usize,
    },
    #[error("airport dataset contains no records")]
    Empty,
}

/// A lookup was rejected before any matching happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidQueryError {
    #[error("query must not be empty")]
    EmptyQuery,
    #[error("limit must be at least 1")]
    ZeroLimit,
}
