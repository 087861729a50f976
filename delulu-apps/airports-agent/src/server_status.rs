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

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::MAX_LIMIT;

/// What the `get_server_status` tool reports.
#[derive(Debug, Clone, Serialize)]
pub struct ServerStatus {
    pub service_name: String,
    pub version: String,
    pub status: String,
    /// `bundled` or `file:<path>`.
    pub data_source: String,
    pub airports_loaded: usize,
    pub capabilities: Vec<String>,
    pub supported_features: BTreeMap<String, String>,
    pub timestamp: DateTime<Utc>,
}

impl ServerStatus {
    pub fn online(data_source: impl Into<String>, airports_loaded: usize) -> Self {
        let capabilities = ["airport_lookup", "airport_details"]
            .into_iter()
            .map(String::from)
            .collect();
        let supported_features = [
            ("query_types", "IATA code, airport name, city".to_string()),
            (
                "ranking",
                "exact code, exact name or city, prefix, substring".to_string(),
            ),
            ("max_results", format!("1-{MAX_LIMIT}")),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();

        Self {
            service_name: "Delulu Airports MCP".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            status: "online".to_string(),
            data_source: data_source.into(),
            airports_loaded,
            capabilities,
            supported_features,
            timestamp: Utc::now(),
        }
    }
}
