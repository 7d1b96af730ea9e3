//! Response types for the earning calculator API.
//!
//! This module defines the calculation response body, the error response
//! structures, and the mapping from engine errors to HTTP statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{
    Airline, DistanceRecord, Itinerary, ItineraryTotals, Segment, SegmentCalculation,
};

/// Response body for the `/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResponse {
    /// Unique id of this calculation.
    pub calculation_id: Uuid,
    /// Ticket number from the request.
    pub ticket_number: String,
    /// Status tier the calculation used.
    pub status: String,
    /// Per-segment results, in segment order.
    pub segments: Vec<SegmentResult>,
    /// Sums across all segments.
    pub totals: ItineraryTotals,
}

/// One segment and its calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentResult {
    /// Airline id.
    pub airline: String,
    /// Origin airport code.
    pub origin: String,
    /// Destination airport code.
    pub destination: String,
    /// Fare brand name.
    pub fare_brand: String,
    /// Fare class used for the calculation.
    pub fare_class: String,
    /// The earning breakdown.
    pub calculation: SegmentCalculation,
}

impl SegmentResult {
    fn new(segment: &Segment<'_>, calculation: SegmentCalculation) -> Self {
        Self {
            airline: segment.airline.id.clone(),
            origin: segment.origin.iata_code.clone(),
            destination: segment.destination.iata_code.clone(),
            fare_brand: segment.fare_brand.name.clone(),
            fare_class: segment.fare_class.clone(),
            calculation,
        }
    }
}

impl CalculationResponse {
    /// Builds the response from an itinerary and its calculations.
    pub fn new(
        calculation_id: Uuid,
        itinerary: &Itinerary<'_>,
        calculations: Vec<SegmentCalculation>,
    ) -> Self {
        let totals = ItineraryTotals::from_calculations(&calculations);
        let segments = itinerary
            .segments
            .iter()
            .zip(calculations)
            .map(|(segment, calculation)| SegmentResult::new(segment, calculation))
            .collect();

        Self {
            calculation_id,
            ticket_number: itinerary.ticket_number.clone(),
            status: itinerary.aeroplan_status.name.clone(),
            segments,
            totals,
        }
    }
}

/// An airline as listed by `/airlines`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AirlineSummary {
    /// Airline id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Home region.
    pub region: String,
    /// Website, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// Star Alliance membership.
    pub star_alliance_member: bool,
    /// Whether flights earn points.
    pub earns_points: bool,
    /// Whether flights earn status miles.
    pub earns_status_miles: bool,
}

impl From<&Airline> for AirlineSummary {
    fn from(airline: &Airline) -> Self {
        Self {
            id: airline.id.clone(),
            name: airline.name.clone(),
            region: airline.region.clone(),
            website: airline.website.clone(),
            star_alliance_member: airline.star_alliance_member,
            earns_points: airline.earns_points,
            earns_status_miles: airline.earns_status_miles,
        }
    }
}

/// A recorded distance as listed by `/airports/{code}/distances`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordedDistance {
    /// Destination airport code.
    pub destination: String,
    /// Legacy distance.
    pub old: Option<Decimal>,
    /// Current distance.
    pub new: Option<Decimal>,
    /// The distance calculations use.
    pub effective: Option<Decimal>,
}

impl From<&DistanceRecord> for RecordedDistance {
    fn from(record: &DistanceRecord) -> Self {
        Self {
            destination: record.destination.clone(),
            old: record.old_distance,
            new: record.distance,
            effective: record.miles(),
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    fn not_found(code: &str, message: String, key: &str) -> Self {
        Self::with_details(
            code,
            message,
            format!("'{}' is not in the reference catalog", key),
        )
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::CatalogNotFound { .. }
            | EngineError::CatalogParseError { .. }
            | EngineError::InvalidCatalog { .. }
            | EngineError::CatalogAlreadyInstalled => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CATALOG_ERROR", "Catalog error", message),
            },
            EngineError::AirlineNotFound { id } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::not_found("AIRLINE_NOT_FOUND", message, &id),
            },
            EngineError::AirportNotFound { code } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::not_found("AIRPORT_NOT_FOUND", message, &code),
            },
            EngineError::FareBrandNotFound { name } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::not_found("FARE_BRAND_NOT_FOUND", message, &name),
            },
            EngineError::StatusNotFound { name } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::not_found("STATUS_NOT_FOUND", message, &name),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_airport_not_found_maps_to_bad_request() {
        let api_error: ApiErrorResponse = EngineError::AirportNotFound {
            code: "XXX".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "AIRPORT_NOT_FOUND");
        assert!(api_error.error.message.contains("XXX"));
    }

    #[test]
    fn test_catalog_error_maps_to_server_error() {
        let api_error: ApiErrorResponse = EngineError::InvalidCatalog {
            entity: "airline",
            key: "air-canada".to_string(),
            message: "negative earning rate".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "CATALOG_ERROR");
    }

    #[test]
    fn test_recorded_distance_effective_value() {
        let record = DistanceRecord {
            destination: "SFO".to_string(),
            distance: None,
            old_distance: Some(Decimal::new(2261, 0)),
        };
        let listed = RecordedDistance::from(&record);

        assert_eq!(listed.new, None);
        assert_eq!(listed.effective, Some(Decimal::new(2261, 0)));
    }
}
