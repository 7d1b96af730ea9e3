//! Earning rate resolution.
//!
//! Rates are looked up in the airline's flat table, first by fare class and
//! then by fare brand name. An unknown key earns at rate zero.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use crate::models::{Airline, FareBrand};

/// Which key of the earning-rate table produced the rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RateSource {
    /// Matched the fare class.
    FareClass,
    /// Matched the fare brand name.
    FareBrand,
    /// Neither key is in the table.
    Unknown,
}

/// The result of an earning rate lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLookup {
    /// The earning multiplier.
    pub rate: Decimal,
    /// Which key matched.
    pub source: RateSource,
}

/// Resolves the earning multiplier for a fare on `airline`.
///
/// A fare-class entry of zero is treated like a missing one and the brand
/// name is tried next.
///
/// # Examples
///
/// ```
/// use ac_calc::calculation::{RateSource, resolve_rate};
/// use ac_calc::models::{Airline, FareBrand};
/// use rust_decimal::Decimal;
/// use std::collections::HashMap;
///
/// let mut earning_rates = HashMap::new();
/// earning_rates.insert("Basic".to_string(), Decimal::new(10, 2));
///
/// let airline = Airline {
///     id: "air-canada".to_string(),
///     name: "Air Canada".to_string(),
///     region: "Canada & U.S.".to_string(),
///     website: None,
///     logo: None,
///     star_alliance_member: true,
///     earns_points: true,
///     earns_status_miles: true,
///     earning_rates,
/// };
/// let basic = FareBrand { name: "Basic".to_string(), fare_classes: vec!["G".to_string()] };
///
/// let lookup = resolve_rate(&airline, "G", &basic);
/// assert_eq!(lookup.rate, Decimal::new(10, 2));
/// assert_eq!(lookup.source, RateSource::FareBrand);
/// ```
pub fn resolve_rate(airline: &Airline, fare_class: &str, fare_brand: &FareBrand) -> RateLookup {
    if let Some(rate) = airline
        .earning_rate(fare_class)
        .filter(|rate| !rate.is_zero())
    {
        return RateLookup {
            rate,
            source: RateSource::FareClass,
        };
    }

    if let Some(rate) = airline.earning_rate(&fare_brand.name) {
        return RateLookup {
            rate,
            source: RateSource::FareBrand,
        };
    }

    debug!(
        airline = %airline.id,
        fare_class,
        fare_brand = %fare_brand.name,
        "No earning rate for fare, earning at zero"
    );
    RateLookup {
        rate: Decimal::ZERO,
        source: RateSource::Unknown,
    }
}
