//! Delulu Airport Index
//! Copyright (c) 2026 Mamy Ratsimbazafy
//! Licensed and distributed under either of
//!   * MIT license (license terms at the root of the package or at http://opensource.org/licenses/MIT).
//!   * Apache v2 license (license terms at the root of the package or at http://www.apache.org/licenses/LICENSE-2.0).
//! at your option. This file may not be copied, modified, or distributed except according to those terms.

//! Tiered matching of a normalized query against one airport.
//!
//! Tiers, best first:
//! 0. the query is the IATA code
//! 1. the query is the city or the airport name
//! 2. the code, city or name starts with the query
//! 3. the city or name contains the query

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

use crate::Airport;

/// Relevance bucket of a match. Lower sorts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    ExactCode = 0,
    ExactNameOrCity = 1,
    Prefix = 2,
    Substring = 3,
}

impl MatchTier {
    /// Numeric score, 0 (best) to 3.
    pub fn score(self) -> u8 {
        self as u8
    }
}

/// Which field of the record produced the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchedField {
    Code,
    Name,
    City,
}

impl MatchedField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Code => "code",
            Self::Name => "name",
            Self::City => "city",
        }
    }
}

impl fmt::Display for MatchedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One ranked search hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirportMatch<'a> {
    pub airport: &'a Airport,
    pub tier: MatchTier,
    pub field: MatchedField,
}

/// Lowercase and trim, applied to queries and candidate fields alike.
pub(crate) fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Normalized fields of one record, computed once at load.
#[derive(Debug, Clone)]
pub(crate) struct SearchKeys {
    code: String,
    name: String,
    city: String,
    /// Length of the display name in chars, the first tie-breaker.
    pub(crate) name_len: usize,
}

impl SearchKeys {
    pub(crate) fn new(airport: &Airport) -> Self {
        Self {
            code: normalize(&airport.code),
            name: normalize(&airport.name),
            city: normalize(&airport.city),
            name_len: airport.name.chars().count(),
        }
    }

    /// Best tier at which `needle` matches, if any.
    ///
    /// Within a tier the field reported is code, then city, then name.
    pub(crate) fn best_match(&self, needle: &str) -> Option<(MatchTier, MatchedField)> {
        if self.code == needle {
            return Some((MatchTier::ExactCode, MatchedField::Code));
        }
        if self.city == needle {
            return Some((MatchTier::ExactNameOrCity, MatchedField::City));
        }
        if self.name == needle {
            return Some((MatchTier::ExactNameOrCity, MatchedField::Name));
        }
        if self.code.starts_with(needle) {
            return Some((MatchTier::Prefix, MatchedField::Code));
        }
        if self.city.starts_with(needle) {
            return Some((MatchTier::Prefix, MatchedField::City));
        }
        if self.name.starts_with(needle) {
            return Some((MatchTier::Prefix, MatchedField::Name));
        }
        if self.city.contains(needle) {
            return Some((MatchTier::Substring, MatchedField::City));
        }
        if self.name.contains(needle) {
            return Some((MatchTier::Substring, MatchedField::Name));
        }
        None
    }
}

/// Total order over hits: tier, then shorter name, then code.
pub(crate) fn rank(a: (&AirportMatch<'_>, usize), b: (&AirportMatch<'_>, usize)) -> Ordering {
    a.0.tier
        .cmp(&b.0.tier)
        .then(a.1.cmp(&b.1))
        .then_with(|| a.0.airport.code.cmp(&b.0.airport.code))
}
