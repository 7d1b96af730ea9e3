//! Core data models for the earning calculator.
//!
//! Reference entities ([`Airport`], [`Airline`], [`FareBrand`], [`AeroplanStatus`])
//! are read-only once the catalog is loaded. [`Segment`] and [`Itinerary`] are
//! caller-owned request objects that borrow from the catalog.

mod aeroplan;
mod airline;
mod airport;
mod calculation_result;
mod itinerary;

pub use aeroplan::{AeroplanStatus, FareBrand};
pub use airline::Airline;
pub use airport::{Airport, Coordinates, DistanceRecord, RecordedMiles};
pub use calculation_result::{ItineraryTotals, SegmentCalculation};
pub use itinerary::{Itinerary, Segment};
