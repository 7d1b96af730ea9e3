//! Airport model and recorded distances.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Geographic position of an airport, in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in degrees, positive north.
    pub latitude: f64,
    /// Longitude in degrees, positive east.
    pub longitude: f64,
}

/// A catalog-stored distance from one airport to another.
///
/// At least one of the two values is present for every record the catalog
/// accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistanceRecord {
    /// Code of the destination airport.
    pub destination: String,
    /// The currently published distance, in miles.
    pub distance: Option<Decimal>,
    /// The legacy published distance, in miles.
    pub old_distance: Option<Decimal>,
}

/// A recorded distance together with which of the two values supplied it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordedMiles {
    /// The currently published distance.
    Current(Decimal),
    /// The legacy published distance.
    Legacy(Decimal),
}

impl RecordedMiles {
    /// The distance in miles, whichever value it came from.
    pub fn miles(self) -> Decimal {
        match self {
            RecordedMiles::Current(miles) | RecordedMiles::Legacy(miles) => miles,
        }
    }
}

impl DistanceRecord {
    /// Picks the value to use from this record.
    ///
    /// A non-zero current distance wins, then the legacy distance. A record
    /// holding only a zero current distance yields that zero.
    pub fn recorded(&self) -> Option<RecordedMiles> {
        match (self.distance, self.old_distance) {
            (Some(current), _) if !current.is_zero() => Some(RecordedMiles::Current(current)),
            (_, Some(legacy)) => Some(RecordedMiles::Legacy(legacy)),
            (Some(zero), None) => Some(RecordedMiles::Current(zero)),
            (None, None) => None,
        }
    }

    /// Returns the distance picked by [`DistanceRecord::recorded`].
    ///
    /// # Examples
    ///
    /// ```
    /// use ac_calc::models::DistanceRecord;
    /// use rust_decimal::Decimal;
    ///
    /// let record = DistanceRecord {
    ///     destination: "YUL".to_string(),
    ///     distance: None,
    ///     old_distance: Some(Decimal::new(316, 0)),
    /// };
    /// assert_eq!(record.miles(), Some(Decimal::new(316, 0)));
    /// ```
    pub fn miles(&self) -> Option<Decimal> {
        self.recorded().map(RecordedMiles::miles)
    }
}

/// An airport in the reference catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Airport {
    /// Three-letter IATA code, upper-case.
    pub iata_code: String,
    /// Display name.
    pub name: String,
    /// ISO country code.
    pub country: String,
    /// Position, when the catalog knows it.
    pub coordinates: Option<Coordinates>,
    /// Recorded distances keyed by destination code.
    pub distances: HashMap<String, DistanceRecord>,
}

impl Airport {
    /// Returns the recorded distance record to `destination`, if any.
    pub fn distance_to(&self, destination: &Airport) -> Option<&DistanceRecord> {
        self.distances.get(&destination.iata_code)
    }
}
