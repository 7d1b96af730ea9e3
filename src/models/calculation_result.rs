//! Calculation result models.
//!
//! This module contains [`SegmentCalculation`], the per-segment earning
//! breakdown, and [`ItineraryTotals`], the sums across an itinerary.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The earning breakdown for one flight segment.
///
/// Produced fresh by every calculation and never mutated afterwards.
///
/// # Example
///
/// ```
/// use ac_calc::models::SegmentCalculation;
/// use rust_decimal::Decimal;
///
/// let calc = SegmentCalculation {
///     distance: Decimal::new(1000, 0),
///     points: 1000,
///     points_earning_rate: Decimal::ONE,
///     points_bonus_factor: Decimal::new(25, 2),
///     bonus_points: 250,
///     status_miles: 1000,
///     status_miles_earning_rate: Decimal::ONE,
/// };
/// assert_eq!(calc.points_with_bonus(), 1250);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentCalculation {
    /// Resolved distance in miles.
    pub distance: Decimal,
    /// Base points earned, truncated to a whole number.
    pub points: u64,
    /// Earning multiplier used for points.
    pub points_earning_rate: Decimal,
    /// Status bonus factor used.
    pub points_bonus_factor: Decimal,
    /// Status bonus points earned, truncated to a whole number.
    pub bonus_points: u64,
    /// Status miles earned, truncated to a whole number.
    pub status_miles: u64,
    /// Earning multiplier used for status miles.
    pub status_miles_earning_rate: Decimal,
}

impl SegmentCalculation {
    /// A calculation that earns nothing over `distance` miles.
    pub fn zero(distance: Decimal) -> Self {
        Self {
            distance,
            points: 0,
            points_earning_rate: Decimal::ZERO,
            points_bonus_factor: Decimal::ZERO,
            bonus_points: 0,
            status_miles: 0,
            status_miles_earning_rate: Decimal::ZERO,
        }
    }

    /// Base points plus status bonus.
    pub fn points_with_bonus(&self) -> u64 {
        self.points + self.bonus_points
    }
}

/// Itinerary-level sums of the per-segment calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ItineraryTotals {
    /// Total distance in miles.
    pub distance: Decimal,
    /// Total base points.
    pub points: u64,
    /// Total status bonus points.
    pub bonus_points: u64,
    /// Total points including status bonus.
    pub points_with_bonus: u64,
    /// Total status miles.
    pub status_miles: u64,
    /// Status qualifying dollars. Not calculated; always zero.
    pub status_qualifying_dollars: Decimal,
}

impl ItineraryTotals {
    /// Sums the calculations of an itinerary.
    pub fn from_calculations(calculations: &[SegmentCalculation]) -> Self {
        calculations
            .iter()
            .fold(Self::default(), |mut totals, calc| {
                totals.distance += calc.distance;
                totals.points += calc.points;
                totals.bonus_points += calc.bonus_points;
                totals.points_with_bonus += calc.points_with_bonus();
                totals.status_miles += calc.status_miles;
                totals
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calc(
        distance: i64,
        points: u64,
        bonus_points: u64,
        status_miles: u64,
    ) -> SegmentCalculation {
        SegmentCalculation {
            distance: Decimal::new(distance, 0),
            points,
            points_earning_rate: Decimal::ONE,
            points_bonus_factor: Decimal::new(25, 2),
            bonus_points,
            status_miles,
            status_miles_earning_rate: Decimal::ONE,
        }
    }

    #[test]
    fn test_zero_calculation_keeps_distance() {
        let zero = SegmentCalculation::zero(Decimal::ZERO);
        assert_eq!(zero.distance, Decimal::ZERO);
        assert_eq!(zero.points, 0);
        assert_eq!(zero.bonus_points, 0);
        assert_eq!(zero.status_miles, 0);
        assert_eq!(zero.points_earning_rate, Decimal::ZERO);
        assert_eq!(zero.status_miles_earning_rate, Decimal::ZERO);
    }

    #[test]
    fn test_totals_sum_each_field() {
        let calcs = vec![calc(316, 316, 79, 316), calc(2086, 521, 130, 521)];
        let totals = ItineraryTotals::from_calculations(&calcs);

        assert_eq!(totals.distance, Decimal::new(2402, 0));
        assert_eq!(totals.points, 837);
        assert_eq!(totals.bonus_points, 209);
        assert_eq!(totals.points_with_bonus, 1046);
        assert_eq!(totals.status_miles, 837);
        assert_eq!(totals.status_qualifying_dollars, Decimal::ZERO);
    }

    #[test]
    fn test_totals_of_empty_itinerary_are_zero() {
        assert_eq!(
            ItineraryTotals::from_calculations(&[]),
            ItineraryTotals::default()
        );
    }

    #[test]
    fn test_calculation_serializes_decimals_as_strings() {
        let json = serde_json::to_value(calc(1000, 1000, 250, 1000)).unwrap();

        assert_eq!(json["distance"], "1000");
        assert_eq!(json["points"], 1000);
        assert_eq!(json["points_bonus_factor"], "0.25");
    }
}
