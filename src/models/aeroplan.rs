//! Aeroplan program types: fare brands and status tiers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A named bundle of fare classes sold under one marketing tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FareBrand {
    /// Brand name (e.g. "Flex").
    pub name: String,
    /// Permitted fare classes, in display order.
    pub fare_classes: Vec<String>,
}

impl FareBrand {
    /// Name of the sentinel brand used for carriers without fare brands.
    pub const NO_BRAND_NAME: &'static str = "None";

    /// Returns true for the "No Brand" sentinel.
    pub fn is_no_brand(&self) -> bool {
        self.name == Self::NO_BRAND_NAME
    }

    /// Returns true if `fare_class` is sold under this brand.
    ///
    /// # Examples
    ///
    /// ```
    /// use ac_calc::models::FareBrand;
    ///
    /// let flex = FareBrand {
    ///     name: "Flex".to_string(),
    ///     fare_classes: vec!["M".to_string(), "U".to_string()],
    /// };
    /// assert!(flex.permits("M"));
    /// assert!(!flex.permits("G"));
    /// ```
    pub fn permits(&self, fare_class: &str) -> bool {
        self.fare_classes.iter().any(|fc| fc == fare_class)
    }

    /// Returns the first fare class of the brand.
    pub fn default_fare_class(&self) -> Option<&str> {
        self.fare_classes.first().map(String::as_str)
    }
}

/// A traveler's Aeroplan status tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AeroplanStatus {
    /// Tier name (e.g. "50K").
    pub name: String,
    /// Bonus multiplier applied on top of base points.
    pub bonus_factor: Decimal,
    /// Minimum points and status miles earned per segment.
    pub min_earning_value: Decimal,
}
