//! Calculation logic for the earning calculator.
//!
//! This module contains distance resolution between airports (recorded
//! distance first, great-circle fallback), earning rate resolution by fare
//! class or fare brand, the per-segment earning calculation, and itinerary
//! aggregation.

mod distance;
mod earning_rate;
mod itinerary;
mod segment;

pub use distance::{
    DistanceLookup, DistanceSource, EARTH_RADIUS_MILES, haversine_miles, resolve_distance,
};
pub use earning_rate::{RateLookup, RateSource, resolve_rate};
pub use itinerary::calculate_itinerary;
pub use segment::calculate_segment;
