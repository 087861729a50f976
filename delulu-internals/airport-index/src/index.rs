//! Delulu Airport Index
//! Copyright (c) 2026 Mamy Ratsimbazafy
//! Licensed and distributed under either of
//!   * MIT license (license terms at the root of the package or at http://opensource.org/licenses/MIT).
//!   * Apache v2 license (license terms at the root of the package or at http://www.apache.org/licenses/LICENSE-2.0).
//! at your option. This file may not be copied, modified, or distributed except according to those terms.

use std::collections::HashMap;
use std::path::Path;

use crate::ranking::{normalize, rank, AirportMatch, SearchKeys};
use crate::{Airport, DataIntegrityError, InvalidQueryError};

#[derive(Debug, Clone)]
struct Entry {
    airport: Airport,
    keys: SearchKeys,
}

/// Read-only airport table answering ranked lookups.
///
/// Built once from a dataset and never mutated afterwards, so a shared
/// reference (or an `Arc`) can be queried from any number of threads.
///
/// ```
/// use delulu_airport_index::{Airport, AirportIndex};
///
/// let index = AirportIndex::from_records(vec![
///     Airport::new("JFK", "John F. Kennedy International Airport", "New York", "United States"),
///     Airport::new("LGA", "LaGuardia Airport", "New York", "United States"),
/// ])?;
/// let codes: Vec<_> = index.search("new york", 10)?.iter().map(|a| a.code.as_str()).collect();
/// assert_eq!(codes, ["LGA", "JFK"]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct AirportIndex {
    /// Sorted by code.
    entries: Vec<Entry>,
    by_code: HashMap<String, usize>,
}

impl AirportIndex {
    /// Parse a JSON array of airport objects and build the index.
    pub fn from_json(json: &str) -> Result<Self, DataIntegrityError> {
        let records: Vec<Airport> =
            serde_json::from_str(json).map_err(|e| DataIntegrityError::Malformed {
                line: e.line(),
                column: e.column(),
                reason: e.to_string(),
            })?;
        Self::from_records(records)
    }

    /// Read a dataset file and build the index.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DataIntegrityError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| DataIntegrityError::Unreadable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let index = Self::from_json(&json)?;
        tracing::info!("Loaded {} airports from {}", index.len(), path.display());
        Ok(index)
    }

    /// Validate records and build the index.
    ///
    /// Fails on the first invalid record or the first duplicate code
    /// (codes compare case-insensitively).
    pub fn from_records(records: Vec<Airport>) -> Result<Self, DataIntegrityError> {
        if records.is_empty() {
            return Err(DataIntegrityError::Empty);
        }

        let mut first_seen: HashMap<String, usize> = HashMap::with_capacity(records.len());
        let mut entries = Vec::with_capacity(records.len());

        for (i, record) in records.into_iter().enumerate() {
            let position = i + 1;
            let airport = record.normalized(position)?;
            if let Some(&first) = first_seen.get(&airport.code) {
                return Err(DataIntegrityError::DuplicateCode {
                    code: airport.code,
                    first,
                    second: position,
                });
            }
            first_seen.insert(airport.code.clone(), position);
            let keys = SearchKeys::new(&airport);
            entries.push(Entry { airport, keys });
        }

        entries.sort_by(|a, b| a.airport.code.cmp(&b.airport.code));
        let by_code = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.airport.code.clone(), i))
            .collect();

        tracing::debug!("Built airport index with {} records", entries.len());
        Ok(Self { entries, by_code })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All airports, in code order.
    pub fn iter(&self) -> impl Iterator<Item = &Airport> + '_ {
        self.entries.iter().map(|e| &e.airport)
    }

    /// Exact, case-insensitive code lookup.
    pub fn get(&self, code: &str) -> Option<&Airport> {
        let code = code.trim().to_ascii_uppercase();
        self.by_code.get(&code).map(|&i| &self.entries[i].airport)
    }

    /// Best matching airports for `query`, most relevant first.
    ///
    /// Returns at most `limit` airports. No match is an empty vector.
    pub fn search(&self, query: &str, limit: usize) -> Result<Vec<&Airport>, InvalidQueryError> {
        Ok(self
            .search_matches(query, limit)?
            .into_iter()
            .map(|m| m.airport)
            .collect())
    }

    /// Like [`search`](Self::search), keeping the tier and matched field of each hit.
    ///
    /// The whole table is ranked before truncating to `limit`.
    pub fn search_matches(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<AirportMatch<'_>>, InvalidQueryError> {
        let needle = normalize(query);
        if needle.is_empty() {
            return Err(InvalidQueryError::EmptyQuery);
        }
        if limit == 0 {
            return Err(InvalidQueryError::ZeroLimit);
        }

        let mut hits: Vec<(AirportMatch<'_>, usize)> = self
            .entries
            .iter()
            .filter_map(|entry| {
                entry.keys.best_match(&needle).map(|(tier, field)| {
                    let hit = AirportMatch {
                        airport: &entry.airport,
                        tier,
                        field,
                    };
                    (hit, entry.keys.name_len)
                })
            })
            .collect();

        let total = hits.len();
        hits.sort_by(|a, b| rank((&a.0, a.1), (&b.0, b.1)));
        hits.truncate(limit);

        tracing::debug!(
            "Airport search {:?}: {} matches, returning {}",
            needle,
            total,
            hits.len()
        );
        Ok(hits.into_iter().map(|(hit, _)| hit).collect())
    }
}
