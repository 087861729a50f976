//!  Delulu Airports Agent
//!
//!  Copyright (C) 2026  Mamy Ratsimbazafy
//!
//!  This program is free software: you can redistribute it and/or modify
//!  it under the terms of the GNU Affero General Public License as published by
//!  the Free Software Foundation, either version 3 of the License, or
//!  (at your option) any later version.
//!
//!  This program is distributed in the hope that it will be useful,
//!  but WITHOUT ANY WARRANTY; without even the implied warranty of
//!  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//!  GNU Affero General Public License for more details.
//!
//!  You should have received a copy of the GNU Affero General Public License
//!  along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! Airport lookup as exposed to tool callers: request validation,
//! dataset selection and the JSON response shapes.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use delulu_airport_index::{
    Airport, AirportIndex, AirportMatch, InvalidQueryError, MatchedField, DEFAULT_LIMIT,
};
use serde::Serialize;
use thiserror::Error;

/// Largest `limit` a caller may request.
pub const MAX_LIMIT: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error(transparent)]
    InvalidQuery(#[from] InvalidQueryError),
    #[error("limit must be between 1 and {max}, got {limit}")]
    LimitOutOfRange { limit: u64, max: usize },
    #[error("airport code {0:?} not found")]
    UnknownCode(String),
}

/// A validated airport search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AirportSearchRequest {
    query: String,
    limit: usize,
}

impl AirportSearchRequest {
    /// Trims `query` and checks `limit` against `1..=MAX_LIMIT`.
    ///
    /// A missing limit means [`DEFAULT_LIMIT`].
    pub fn new(query: &str, limit: Option<u64>) -> Result<Self, RequestError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(InvalidQueryError::EmptyQuery.into());
        }
        let limit = match limit {
            None => DEFAULT_LIMIT,
            Some(0) => return Err(InvalidQueryError::ZeroLimit.into()),
            Some(n) if n > MAX_LIMIT as u64 => {
                return Err(RequestError::LimitOutOfRange {
                    limit: n,
                    max: MAX_LIMIT,
                });
            }
            Some(n) => n as usize,
        };
        Ok(Self {
            query: query.to_string(),
            limit,
        })
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

/// One airport in a tool response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AirportHit {
    pub code: String,
    pub name: String,
    pub city: String,
    pub country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    pub matched_field: MatchedField,
    /// 0 (exact code) to 3 (substring).
    pub tier: u8,
}

impl AirportHit {
    fn new(airport: &Airport, matched_field: MatchedField, tier: u8) -> Self {
        Self {
            code: airport.code.clone(),
            name: airport.name.clone(),
            city: airport.city.clone(),
            country: airport.country.clone(),
            timezone: airport.timezone.clone(),
            latitude: airport.latitude,
            longitude: airport.longitude,
            matched_field,
            tier,
        }
    }

    pub fn location(&self) -> String {
        format!("{}, {}", self.city, self.country)
    }
}

impl From<AirportMatch<'_>> for AirportHit {
    fn from(m: AirportMatch<'_>) -> Self {
        Self::new(m.airport, m.field, m.tier.score())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AirportSearchResponse {
    pub query: String,
    pub count: usize,
    pub airports: Vec<AirportHit>,
    pub search_timestamp: DateTime<Utc>,
}

impl AirportSearchResponse {
    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }
}

/// Run a validated search against `index`.
pub fn find_airports(
    index: &AirportIndex,
    request: &AirportSearchRequest,
) -> Result<AirportSearchResponse, RequestError> {
    let airports: Vec<AirportHit> = index
        .search_matches(&request.query, request.limit)?
        .into_iter()
        .map(AirportHit::from)
        .collect();
    tracing::debug!(
        "find_airports {:?} (limit {}): {} result(s)",
        request.query,
        request.limit,
        airports.len()
    );
    Ok(AirportSearchResponse {
        query: request.query.clone(),
        count: airports.len(),
        airports,
        search_timestamp: Utc::now(),
    })
}

/// Exact code lookup, reported as an exact code match.
pub fn lookup_airport(index: &AirportIndex, code: &str) -> Result<AirportHit, RequestError> {
    let code = code.trim();
    if code.is_empty() {
        return Err(InvalidQueryError::EmptyQuery.into());
    }
    index
        .get(code)
        .map(|airport| AirportHit::new(airport, MatchedField::Code, 0))
        .ok_or_else(|| RequestError::UnknownCode(code.to_ascii_uppercase()))
}

/// An index together with a description of where it came from.
#[derive(Debug, Clone)]
pub struct LoadedIndex {
    pub index: Arc<AirportIndex>,
    pub source: String,
}

/// Load `path` if given, the bundled dataset otherwise.
pub fn open_index(path: Option<&Path>) -> Result<LoadedIndex> {
    match path {
        Some(path) => {
            let index = AirportIndex::from_path(path)
                .with_context(|| format!("Failed to load airports from {}", path.display()))?;
            Ok(LoadedIndex {
                index: Arc::new(index),
                source: format!("file:{}", path.display()),
            })
        }
        None => {
            let index =
                delulu_airport_index::bundled().context("Failed to load bundled airports")?;
            Ok(LoadedIndex {
                index,
                source: "bundled".to_string(),
            })
        }
    }
}
