//! HTTP request handlers for the earning calculator API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::request::CalculationRequest;
use super::response::{
    AirlineSummary, ApiError, ApiErrorResponse, CalculationResponse, RecordedDistance,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/airlines", get(airlines_handler))
        .route("/airports/:code/distances", get(distances_handler))
        .route("/statuses", get(statuses_handler))
        .route("/fare-brands", get(fare_brands_handler))
        .with_state(state)
}

fn error_response(status: StatusCode, error: ApiError) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

/// Handler for POST /calculate endpoint.
///
/// Resolves the itinerary against the catalog and returns per-segment
/// earnings with totals.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return error_response(StatusCode::BAD_REQUEST, error);
        }
    };

    let catalog = state.catalog();
    let itinerary = match request.to_itinerary(catalog) {
        Ok(itinerary) => itinerary,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Itinerary could not be resolved"
            );
            let api_error: ApiErrorResponse = err.into();
            return error_response(api_error.status, api_error.error);
        }
    };

    let start_time = Instant::now();
    let calculations = itinerary.calculate();
    let response = CalculationResponse::new(correlation_id, &itinerary, calculations);

    info!(
        correlation_id = %correlation_id,
        segments = response.segments.len(),
        points = response.totals.points,
        status_miles = response.totals.status_miles,
        duration_us = start_time.elapsed().as_micros(),
        "Calculation completed successfully"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}

/// Handler for GET /airlines.
async fn airlines_handler(State(state): State<AppState>) -> Json<Vec<AirlineSummary>> {
    let airlines = state
        .catalog()
        .airlines()
        .iter()
        .map(AirlineSummary::from)
        .collect();
    Json(airlines)
}

/// Handler for GET /airports/{code}/distances.
async fn distances_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Response {
    match state.catalog().recorded_distances(&code) {
        Ok(records) => {
            debug!(origin = %code, count = records.len(), "Listing recorded distances");
            let records: Vec<RecordedDistance> =
                records.into_iter().map(RecordedDistance::from).collect();
            Json(records).into_response()
        }
        Err(err) => {
            let api_error: ApiErrorResponse = err.into();
            error_response(StatusCode::NOT_FOUND, api_error.error)
        }
    }
}

/// Handler for GET /statuses.
async fn statuses_handler(State(state): State<AppState>) -> Response {
    Json(state.catalog().statuses()).into_response()
}

/// Handler for GET /fare-brands.
async fn fare_brands_handler(State(state): State<AppState>) -> Response {
    Json(state.catalog().fare_brands()).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::request::SegmentRequest;
    use crate::config::CatalogLoader;
    use crate::models::{AeroplanStatus, FareBrand};
    use axum::{body::Body, http::Request};
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let catalog = CatalogLoader::load("./config/catalog").expect("Failed to load catalog");
        AppState::new(catalog)
    }

    fn segment(
        airline: &str,
        origin: &str,
        destination: &str,
        brand: Option<&str>,
        class: &str,
    ) -> SegmentRequest {
        SegmentRequest {
            airline: airline.to_string(),
            origin: origin.to_string(),
            destination: destination.to_string(),
            fare_brand: brand.map(str::to_string),
            fare_class: class.to_string(),
        }
    }

    fn create_valid_request() -> CalculationRequest {
        CalculationRequest {
            ticket_number: "014".to_string(),
            status: Some("35K".to_string()),
            segments: vec![
                segment("air-canada", "YYZ", "YVR", Some("Standard"), "L"),
                segment("air-canada", "YVR", "YYC", Some("Latitude"), "Y"),
            ],
        }
    }

    async fn post_json(router: Router, body: String) -> Response {
        router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/calculate")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn get_path(router: Router, uri: &str) -> Response {
        router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn read_body<T: serde::de::DeserializeOwned>(response: Response) -> T {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_valid_request_returns_200() {
        let router = create_router(create_test_state());
        let body = serde_json::to_string(&create_valid_request()).unwrap();

        let response = post_json(router, body).await;
        assert_eq!(response.status(), StatusCode::OK);

        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let result: CalculationResponse = read_body(response).await;
        assert_eq!(result.ticket_number, "014");
        assert_eq!(result.status, "35K");
        assert_eq!(result.segments.len(), 2);

        // 2086 * 0.25 = 521.5, bonus 521.5 * 0.35 = 182.5
        assert_eq!(result.segments[0].calculation.points, 521);
        assert_eq!(result.segments[0].calculation.bonus_points, 182);
        // 427 * 1.25 = 533.75, bonus capped at 427 * 0.35 = 149.45
        assert_eq!(result.segments[1].calculation.points, 533);
        assert_eq!(result.segments[1].calculation.bonus_points, 149);

        assert_eq!(result.totals.points, 1054);
        assert_eq!(result.totals.bonus_points, 331);
        assert_eq!(result.totals.points_with_bonus, 1385);
        assert_eq!(result.totals.status_miles, 1054);
    }

    #[tokio::test]
    async fn test_missing_status_uses_default() {
        let router = create_router(create_test_state());
        let mut request = create_valid_request();
        request.status = None;

        let response = post_json(router, serde_json::to_string(&request).unwrap()).await;
        assert_eq!(response.status(), StatusCode::OK);

        let result: CalculationResponse = read_body(response).await;
        assert_eq!(result.status, "No Status");
        assert_eq!(result.totals.bonus_points, 0);
    }

    #[tokio::test]
    async fn test_unsold_fare_class_is_normalized() {
        let router = create_router(create_test_state());
        let mut request = create_valid_request();
        request.segments = vec![segment("air-canada", "YYZ", "YUL", Some("Flex"), "G")];

        let response = post_json(router, serde_json::to_string(&request).unwrap()).await;
        assert_eq!(response.status(), StatusCode::OK);

        let result: CalculationResponse = read_body(response).await;
        assert_eq!(result.segments[0].fare_class, "M");
        assert_eq!(result.segments[0].fare_brand, "Flex");
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let router = create_router(create_test_state());

        let response = post_json(router, "{invalid json".to_string()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error: ApiError = read_body(response).await;
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_segment_field_returns_400() {
        let router = create_router(create_test_state());
        let body = r#"{
            "segments": [
                { "airline": "air-canada", "origin": "YYZ", "fare_class": "Y" }
            ]
        }"#;

        let response = post_json(router, body.to_string()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error: ApiError = read_body(response).await;
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(
            error.message.contains("missing field"),
            "Expected error message to mention missing field, got: {}",
            error.message
        );
    }

    #[tokio::test]
    async fn test_unknown_airport_returns_400() {
        let router = create_router(create_test_state());
        let mut request = create_valid_request();
        request.segments[0].destination = "XXX".to_string();

        let response = post_json(router, serde_json::to_string(&request).unwrap()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error: ApiError = read_body(response).await;
        assert_eq!(error.code, "AIRPORT_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_unknown_status_returns_400() {
        let router = create_router(create_test_state());
        let mut request = create_valid_request();
        request.status = Some("Platinum".to_string());

        let response = post_json(router, serde_json::to_string(&request).unwrap()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error: ApiError = read_body(response).await;
        assert_eq!(error.code, "STATUS_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_airlines_listing() {
        let router = create_router(create_test_state());

        let response = get_path(router, "/airlines").await;
        assert_eq!(response.status(), StatusCode::OK);

        let airlines: Vec<AirlineSummary> = read_body(response).await;
        let etihad = airlines.iter().find(|a| a.id == "etihad").unwrap();
        assert!(etihad.earns_points);
        assert!(!etihad.earns_status_miles);
        assert!(airlines.iter().any(|a| a.id == "air-canada"));
    }

    #[tokio::test]
    async fn test_recorded_distances_listing() {
        let router = create_router(create_test_state());

        let response = get_path(router, "/airports/yyz/distances").await;
        assert_eq!(response.status(), StatusCode::OK);

        let records: Vec<RecordedDistance> = read_body(response).await;
        let destinations: Vec<&str> = records.iter().map(|r| r.destination.as_str()).collect();
        let mut sorted = destinations.clone();
        sorted.sort();
        assert_eq!(destinations, sorted);

        let sfo = records.iter().find(|r| r.destination == "SFO").unwrap();
        assert!(sfo.new.is_none());
        assert_eq!(sfo.effective, sfo.old);
    }

    #[tokio::test]
    async fn test_unknown_airport_distances_returns_404() {
        let router = create_router(create_test_state());

        let response = get_path(router, "/airports/XXX/distances").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let error: ApiError = read_body(response).await;
        assert_eq!(error.code, "AIRPORT_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_statuses_and_fare_brands_listing() {
        let state = create_test_state();

        let response = get_path(create_router(state.clone()), "/statuses").await;
        assert_eq!(response.status(), StatusCode::OK);
        let statuses: Vec<AeroplanStatus> = read_body(response).await;
        assert_eq!(statuses.len(), 6);

        let response = get_path(create_router(state), "/fare-brands").await;
        assert_eq!(response.status(), StatusCode::OK);
        let brands: Vec<FareBrand> = read_body(response).await;
        assert!(brands.iter().any(FareBrand::is_no_brand));
    }
}
