//! Distance resolution between two airports.
//!
//! A distance recorded in the catalog always wins. Without one, the
//! great-circle distance is computed from the airports' coordinates.

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::Serialize;
use tracing::debug;

use crate::models::{Airport, Coordinates, RecordedMiles};

/// Mean Earth radius used for great-circle distances, in miles.
pub const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Where a resolved distance came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceSource {
    /// The current recorded distance.
    Recorded,
    /// The legacy recorded distance.
    LegacyRecorded,
    /// The haversine distance between the two airports.
    GreatCircle,
    /// No recorded distance and no coordinates to compute one.
    Unresolved,
}

/// The result of a distance lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DistanceLookup {
    /// Distance in miles. Zero when unresolved.
    pub miles: Decimal,
    /// How the distance was obtained.
    pub source: DistanceSource,
}

impl DistanceLookup {
    fn unresolved() -> Self {
        Self {
            miles: Decimal::ZERO,
            source: DistanceSource::Unresolved,
        }
    }
}

/// Resolves the travel distance from `origin` to `destination`, in miles.
///
/// # Examples
///
/// ```
/// use ac_calc::calculation::{DistanceSource, resolve_distance};
/// use ac_calc::models::{Airport, Coordinates};
/// use rust_decimal::Decimal;
/// use std::collections::HashMap;
///
/// let yyz = Airport {
///     iata_code: "YYZ".to_string(),
///     name: "Toronto Pearson".to_string(),
///     country: "CA".to_string(),
///     coordinates: Some(Coordinates { latitude: 43.6777, longitude: -79.6248 }),
///     distances: HashMap::new(),
/// };
///
/// let lookup = resolve_distance(&yyz, &yyz);
/// assert_eq!(lookup.miles, Decimal::ZERO);
/// assert_eq!(lookup.source, DistanceSource::GreatCircle);
/// ```
pub fn resolve_distance(origin: &Airport, destination: &Airport) -> DistanceLookup {
    if let Some(recorded) = origin.distance_to(destination).and_then(|r| r.recorded()) {
        let source = match recorded {
            RecordedMiles::Current(_) => DistanceSource::Recorded,
            RecordedMiles::Legacy(_) => DistanceSource::LegacyRecorded,
        };
        return DistanceLookup {
            miles: recorded.miles(),
            source,
        };
    }

    let (Some(from), Some(to)) = (origin.coordinates, destination.coordinates) else {
        debug!(
            origin = %origin.iata_code,
            destination = %destination.iata_code,
            "No recorded distance and no coordinates"
        );
        return DistanceLookup::unresolved();
    };

    match Decimal::from_f64(haversine_miles(from, to)) {
        Some(miles) => DistanceLookup {
            miles,
            source: DistanceSource::GreatCircle,
        },
        None => DistanceLookup::unresolved(),
    }
}

/// Great-circle distance between two positions, in miles.
pub fn haversine_miles(from: Coordinates, to: Coordinates) -> f64 {
    let d_lat = (to.latitude - from.latitude).to_radians();
    let d_lon = (to.longitude - from.longitude).to_radians();
    let from_lat = from.latitude.to_radians();
    let to_lat = to.latitude.to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + (d_lon / 2.0).sin().powi(2) * from_lat.cos() * to_lat.cos();
    // Rounding can push `a` just past 1 for near-antipodal points. NaN
    // passes through the clamp.
    let c = 2.0 * a.clamp(0.0, 1.0).sqrt().asin();

    EARTH_RADIUS_MILES * c
}
