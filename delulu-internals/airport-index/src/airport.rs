//! Delulu Airport Index
//! Copyright (c) 2026 Mamy Ratsimbazafy
//! Licensed and distributed under either of
//!   * MIT license (license terms at the root of the package or at http://opensource.org/licenses/MIT).
//!   * Apache v2 license (license terms at the root of the package or at http://www.apache.org/licenses/LICENSE-2.0).
//! at your option. This file may not be copied, modified, or distributed except according to those terms.

use serde::{Deserialize, Serialize};

use crate::DataIntegrityError;

/// An airport from the reference dataset.
///
/// Only `code`, `name`, `city` and `country` are required in the dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    /// IATA code, three uppercase ASCII letters once loaded.
    pub code: String,
    pub name: String,
    pub city: String,
    pub country: String,
    /// IANA timezone name, e.g. `Asia/Tokyo`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

impl Airport {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        city: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            city: city.into(),
            country: country.into(),
            timezone: None,
            latitude: None,
            longitude: None,
        }
    }

    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = Some(timezone.into());
        self
    }

    pub fn with_coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    /// "City, Country", the way collaborators display a location.
    pub fn location(&self) -> String {
        format!("{}, {}", self.city, self.country)
    }

    /// Trim every text field, uppercase the code, and check the record.
    ///
    /// `position` is 1-based and only used in error messages.
    pub(crate) fn normalized(self, position: usize) -> Result<Self, DataIntegrityError> {
        let invalid = |code: &str, reason: String| DataIntegrityError::InvalidRecord {
            position,
            code: code.to_string(),
            reason,
        };

        let code = self.code.trim().to_ascii_uppercase();
        if code.len() != 3 || !code.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(invalid(
                &self.code,
                "code must be exactly three ASCII letters".to_string(),
            ));
        }

        let name = self.name.trim().to_string();
        let city = self.city.trim().to_string();
        let country = self.country.trim().to_string();
        for (field, value) in [("name", &name), ("city", &city), ("country", &country)] {
            if value.is_empty() {
                return Err(invalid(&code, format!("{field} must not be empty")));
            }
        }

        let timezone = self
            .timezone
            .map(|tz| tz.trim().to_string())
            .filter(|tz| !tz.is_empty());

        if let Some(lat) = self.latitude {
            if !(-90.0..=90.0).contains(&lat) {
                return Err(invalid(&code, format!("latitude {lat} out of range")));
            }
        }
        if let Some(lon) = self.longitude {
            if !(-180.0..=180.0).contains(&lon) {
                return Err(invalid(&code, format!("longitude {lon} out of range")));
            }
        }

        Ok(Self {
            code,
            name,
            city,
            country,
            timezone,
            latitude: self.latitude,
            longitude: self.longitude,
        })
    }
}
