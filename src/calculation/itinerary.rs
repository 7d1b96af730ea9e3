//! Itinerary aggregation.

use tracing::debug;

use crate::models::{Itinerary, SegmentCalculation};

use super::segment::calculate_segment;

/// Calculates every segment of `itinerary`, preserving segment order.
///
/// The itinerary is only read; calling this twice on an unchanged
/// itinerary returns identical results.
pub fn calculate_itinerary(itinerary: &Itinerary<'_>) -> Vec<SegmentCalculation> {
    let calculations: Vec<SegmentCalculation> = itinerary
        .segments
        .iter()
        .map(|segment| calculate_segment(segment, itinerary.aeroplan_status))
        .collect();

    debug!(
        ticket_number = %itinerary.ticket_number,
        status = %itinerary.aeroplan_status.name,
        segments = calculations.len(),
        "Itinerary calculated"
    );

    calculations
}
