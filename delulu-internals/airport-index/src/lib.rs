//! Delulu Airport Index
//! Copyright (c) 2026 Mamy Ratsimbazafy
//! Licensed and distributed under either of
//!   * MIT license (license terms at the root of the package or at http://opensource.org/licenses/MIT).
//!   * Apache v2 license (license terms at the root of the package or at http://www.apache.org/licenses/LICENSE-2.0).
//! at your option. This file may not be copied, modified, or distributed except according to those terms.

//! delulu-internals/airport-index
//! A small in-memory airport table with ranked lookup by IATA code, airport name or city.
//!
//! Flight search backends only accept IATA codes, and their own airport search is poor.
//! This crate resolves free text ("new york", "heathrow", "lax") to codes locally.

mod airport;
mod error;
mod index;
mod ranking;

use std::sync::Arc;

use once_cell::sync::Lazy;

pub use airport::Airport;
pub use error::{DataIntegrityError, InvalidQueryError};
pub use index::AirportIndex;
pub use ranking::{AirportMatch, MatchTier, MatchedField};

/// Default number of results for a lookup.
pub const DEFAULT_LIMIT: usize = 10;

/// The dataset compiled into the crate, a JSON array of airport objects.
pub const BUNDLED_DATASET: &str = include_str!("../data/airports.json");

// Lazy blocks concurrent first callers until the single load finishes.
// The outcome is kept either way: a broken dataset is reported, never reloaded.
static BUNDLED: Lazy<Result<Arc<AirportIndex>, DataIntegrityError>> = Lazy::new(|| {
    match AirportIndex::from_json(BUNDLED_DATASET) {
        Ok(index) => {
            tracing::info!("Loaded {} airports from bundled dataset", index.len());
            Ok(Arc::new(index))
        }
        Err(e) => {
            tracing::error!("Bundled airport dataset is unusable: {}", e);
            Err(e)
        }
    }
});

/// Process-wide index over the bundled dataset.
///
/// The first call parses the dataset; every later call is a clone of the same `Arc`.
pub fn bundled() -> Result<Arc<AirportIndex>, DataIntegrityError> {
    BUNDLED.clone()
}
