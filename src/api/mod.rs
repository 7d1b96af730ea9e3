//! HTTP API module for the earning calculator.
//!
//! This module provides the REST API endpoints for calculating Aeroplan
//! points and status miles and for browsing the reference catalog.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, SegmentRequest};
pub use response::{
    AirlineSummary, ApiError, ApiErrorResponse, CalculationResponse, RecordedDistance,
    SegmentResult,
};
pub use state::AppState;
