//! Request types for the earning calculator API.
//!
//! This module defines the JSON request structures for the `/calculate` endpoint.
//! Entities are named by catalog key and resolved against the catalog before
//! any calculation runs.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::Catalog;
use crate::error::EngineResult;
use crate::models::Itinerary;

/// Request body for the `/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Ticket number or three-digit carrier prefix.
    #[serde(default)]
    pub ticket_number: String,
    /// Aeroplan status tier name. Defaults to the catalog's default status.
    #[serde(default)]
    pub status: Option<String>,
    /// Segments in travel order.
    pub segments: Vec<SegmentRequest>,
}

/// A flight segment in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentRequest {
    /// Airline id (e.g. "air-canada").
    pub airline: String,
    /// Origin airport code.
    pub origin: String,
    /// Destination airport code.
    pub destination: String,
    /// Fare brand name. Omit for carriers without fare brands.
    #[serde(default)]
    pub fare_brand: Option<String>,
    /// Booked fare class.
    pub fare_class: String,
}

impl CalculationRequest {
    /// Resolves the request against `catalog` into an itinerary.
    ///
    /// A fare class the brand does not sell is replaced by the brand's first
    /// fare class.
    pub fn to_itinerary<'c>(&self, catalog: &'c Catalog) -> EngineResult<Itinerary<'c>> {
        let status = match &self.status {
            Some(name) => catalog.status(name)?,
            None => catalog.default_status(),
        };

        let mut itinerary = Itinerary::new(status);
        itinerary.ticket_number = self.ticket_number.clone();

        for request in &self.segments {
            let mut segment = catalog.segment(
                &request.airline,
                &request.origin,
                &request.destination,
                request.fare_brand.as_deref(),
                &request.fare_class,
            )?;
            if segment.normalize_fare_class() {
                warn!(
                    requested = %request.fare_class,
                    used = %segment.fare_class,
                    brand = %segment.fare_brand.name,
                    "Fare class not sold under brand"
                );
            }
            itinerary.push_segment(segment);
        }

        Ok(itinerary)
    }
}
