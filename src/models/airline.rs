//! Airline model.
//!
//! Airlines carry a flat earning-rate table keyed by fare class or fare brand
//! name. Regional tables in the catalog are flattened before an [`Airline`]
//! is built, so nothing downstream sees the nested shape.

use std::collections::HashMap;
use std::hash::{Hash, Hasher};

use rust_decimal::Decimal;
use serde::Serialize;

/// An operating airline and its earning rules.
///
/// Two airlines are equal when their ids match, whatever their other fields.
#[derive(Debug, Clone, Serialize)]
pub struct Airline {
    /// Identity key (e.g. "air-canada").
    pub id: String,
    /// Display name.
    pub name: String,
    /// Region the carrier is based in.
    pub region: String,
    /// Carrier website.
    pub website: Option<String>,
    /// Logo location.
    pub logo: Option<String>,
    /// Whether the carrier is a Star Alliance member.
    pub star_alliance_member: bool,
    /// Whether flights on this carrier earn points.
    pub earns_points: bool,
    /// Whether flights on this carrier earn status miles.
    pub earns_status_miles: bool,
    /// Earning multiplier keyed by fare class or fare brand name.
    #[serde(skip)]
    pub earning_rates: HashMap<String, Decimal>,
}

impl Airline {
    /// Returns the earning multiplier stored under `key`, if any.
    pub fn earning_rate(&self, key: &str) -> Option<Decimal> {
        self.earning_rates.get(key).copied()
    }
}

impl PartialEq for Airline {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Airline {}

impl Hash for Airline {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
