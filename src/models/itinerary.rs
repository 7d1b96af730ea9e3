//! Segment and itinerary models.
//!
//! Both borrow their reference entities from a loaded catalog, so an
//! [`Itinerary`] cannot outlive the catalog it was built against.

use tracing::debug;

use crate::calculation::calculate_itinerary;

use super::{
    AeroplanStatus, Airline, Airport, FareBrand, ItineraryTotals, SegmentCalculation,
};

/// One flight segment of an itinerary.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment<'c> {
    /// Operating airline.
    pub airline: &'c Airline,
    /// Departure airport.
    pub origin: &'c Airport,
    /// Arrival airport.
    pub destination: &'c Airport,
    /// Fare brand, or the "No Brand" sentinel.
    pub fare_brand: &'c FareBrand,
    /// Booked fare class (e.g. "M").
    pub fare_class: String,
}

impl<'c> Segment<'c> {
    /// Returns the return leg: same airline and fare, origin and destination swapped.
    pub fn reversed(&self) -> Self {
        Self {
            airline: self.airline,
            origin: self.destination,
            destination: self.origin,
            fare_brand: self.fare_brand,
            fare_class: self.fare_class.clone(),
        }
    }

    /// Replaces a fare class the brand does not sell with the brand's first one.
    ///
    /// Returns true if the fare class was changed.
    pub fn normalize_fare_class(&mut self) -> bool {
        if self.fare_brand.permits(&self.fare_class) {
            return false;
        }
        match self.fare_brand.default_fare_class() {
            Some(fare_class) => {
                debug!(
                    brand = %self.fare_brand.name,
                    from = %self.fare_class,
                    to = %fare_class,
                    "Fare class not sold under brand, using brand default"
                );
                self.fare_class = fare_class.to_string();
                true
            }
            None => false,
        }
    }
}

/// A ticketed itinerary: status, ticket number and ordered segments.
#[derive(Debug, Clone, PartialEq)]
pub struct Itinerary<'c> {
    /// Ticket number, or just the three-digit carrier prefix.
    pub ticket_number: String,
    /// The traveler's status tier.
    pub aeroplan_status: &'c AeroplanStatus,
    /// Segments in travel order.
    pub segments: Vec<Segment<'c>>,
}

impl<'c> Itinerary<'c> {
    /// Creates an empty itinerary for a traveler with the given status.
    pub fn new(aeroplan_status: &'c AeroplanStatus) -> Self {
        Self {
            ticket_number: String::new(),
            aeroplan_status,
            segments: Vec::new(),
        }
    }

    /// Appends a segment.
    pub fn push_segment(&mut self, segment: Segment<'c>) {
        self.segments.push(segment);
    }

    /// Appends the return leg of the last segment.
    ///
    /// Returns false, leaving the itinerary unchanged, when there are no segments.
    pub fn push_return_segment(&mut self) -> bool {
        match self.segments.last().map(Segment::reversed) {
            Some(segment) => {
                self.segments.push(segment);
                true
            }
            None => false,
        }
    }

    /// Calculates every segment, in segment order.
    ///
    /// Nothing is cached: each call recomputes from the current segments.
    pub fn calculate(&self) -> Vec<SegmentCalculation> {
        calculate_itinerary(self)
    }

    /// Sums a fresh calculation of every segment.
    pub fn totals(&self) -> ItineraryTotals {
        ItineraryTotals::from_calculations(&self.calculate())
    }
}
