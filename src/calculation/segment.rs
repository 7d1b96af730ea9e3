//! Per-segment earning calculation.
//!
//! This module combines distance and rate resolution with the traveler's
//! status tier into a [`SegmentCalculation`].

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use tracing::{debug, warn};

use crate::models::{AeroplanStatus, Segment, SegmentCalculation};

use super::distance::{DistanceSource, resolve_distance};
use super::earning_rate::resolve_rate;

/// Calculates points, status bonus and status miles for one segment.
///
/// The steps are:
/// 1. Resolve the distance. A zero distance earns nothing at all.
/// 2. Resolve the earning rate from fare class or fare brand.
/// 3. Points are `max(distance * rate, floor)` when the airline earns points.
/// 4. Bonus is `min(points, distance) * bonus_factor`, using points before truncation.
/// 5. Status miles are `max(distance * rate, floor)` when the airline earns them.
///
/// All whole-number outputs are truncated toward zero, never rounded.
///
/// # Examples
///
/// ```
/// use ac_calc::calculation::calculate_segment;
/// use ac_calc::models::{AeroplanStatus, Airline, Airport, DistanceRecord, FareBrand, Segment};
/// use rust_decimal::Decimal;
/// use std::collections::HashMap;
///
/// let mut yyz = Airport {
///     iata_code: "YYZ".to_string(),
///     name: "Toronto Pearson".to_string(),
///     country: "CA".to_string(),
///     coordinates: None,
///     distances: HashMap::new(),
/// };
/// yyz.distances.insert("YHZ".to_string(), DistanceRecord {
///     destination: "YHZ".to_string(),
///     distance: Some(Decimal::new(1000, 0)),
///     old_distance: None,
/// });
/// let yhz = Airport { iata_code: "YHZ".to_string(), distances: HashMap::new(), ..yyz.clone() };
///
/// let mut earning_rates = HashMap::new();
/// earning_rates.insert("Flex".to_string(), Decimal::ONE);
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
/// let flex = FareBrand { name: "Flex".to_string(), fare_classes: vec!["M".to_string()] };
/// let status = AeroplanStatus {
///     name: "25K".to_string(),
///     bonus_factor: Decimal::new(25, 2),
///     min_earning_value: Decimal::ZERO,
/// };
///
/// let segment = Segment {
///     airline: &airline,
///     origin: &yyz,
///     destination: &yhz,
///     fare_brand: &flex,
///     fare_class: "M".to_string(),
/// };
///
/// let calc = calculate_segment(&segment, &status);
/// assert_eq!(calc.points, 1000);
/// assert_eq!(calc.bonus_points, 250);
/// assert_eq!(calc.status_miles, 1000);
/// ```
pub fn calculate_segment(segment: &Segment<'_>, status: &AeroplanStatus) -> SegmentCalculation {
    let distance = resolve_distance(segment.origin, segment.destination);
    if distance.miles.is_zero() {
        if distance.source == DistanceSource::Unresolved {
            warn!(
                origin = %segment.origin.iata_code,
                destination = %segment.destination.iata_code,
                "Distance could not be resolved, segment earns nothing"
            );
        }
        return SegmentCalculation::zero(distance.miles);
    }

    let rate = resolve_rate(segment.airline, &segment.fare_class, segment.fare_brand).rate;
    let airline = segment.airline;
    let earned = distance.miles * rate;

    let points = if airline.earns_points {
        earned.max(status.min_earning_value)
    } else {
        Decimal::ZERO
    };
    let bonus_points = points.min(distance.miles) * status.bonus_factor;
    let status_miles = if airline.earns_status_miles {
        earned.max(status.min_earning_value)
    } else {
        Decimal::ZERO
    };

    let calculation = SegmentCalculation {
        distance: distance.miles,
        points: truncate_whole(points),
        points_earning_rate: rate,
        points_bonus_factor: status.bonus_factor,
        bonus_points: truncate_whole(bonus_points),
        status_miles: truncate_whole(status_miles),
        status_miles_earning_rate: rate,
    };

    debug!(
        airline = %airline.id,
        origin = %segment.origin.iata_code,
        destination = %segment.destination.iata_code,
        fare_class = %segment.fare_class,
        distance = %calculation.distance,
        distance_source = ?distance.source,
        rate = %rate,
        points = calculation.points,
        bonus_points = calculation.bonus_points,
        status_miles = calculation.status_miles,
        "Segment calculated"
    );

    calculation
}

/// Truncates toward zero to a whole number. Negative amounts earn nothing.
fn truncate_whole(amount: Decimal) -> u64 {
    amount.trunc().to_u64().unwrap_or(0)
}
