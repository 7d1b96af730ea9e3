//! Aeroplan points and status miles calculator
//!
//! This crate resolves flight distances, looks up airline earning rates and
//! computes the points, status bonus and status miles a traveler earns for
//! each segment of an itinerary.
//!
//! The reference catalog of airlines, airports, fare brands and status tiers
//! is loaded once from YAML (see [`config::CatalogLoader`]) and is read-only
//! afterwards. Calculations borrow from it and never fail.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
