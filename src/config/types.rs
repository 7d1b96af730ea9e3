//! Catalog source types.
//!
//! These are the shapes deserialized from the catalog YAML files. The
//! loader validates them and converts them into the [`crate::models`] types.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Metadata about the catalog, from `catalog.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogMetadata {
    /// Human-readable catalog name.
    pub name: String,
    /// Catalog version.
    pub version: String,
    /// Date from which the earning rules apply.
    pub effective_date: NaiveDate,
    /// Region selected when flattening regional earning-rate tables.
    pub earning_region: String,
    /// Id of the airline new segments start with.
    pub default_airline: String,
    /// Code of the airport new segments start from.
    pub default_origin: String,
    /// Name of the status tier new itineraries start with.
    pub default_status: String,
}

/// An earning-rate table as written in `airlines.yaml`.
///
/// Partner carriers use a flat table. The default carrier publishes rates
/// per region, then per fare-class group (`"*"` for every class), then per
/// fare brand.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum EarningRateSource {
    /// Fare class or fare brand name to rate.
    Flat(HashMap<String, Decimal>),
    /// Region to fare-class group to fare brand name to rate.
    Regional(HashMap<String, BTreeMap<String, HashMap<String, Decimal>>>),
}

/// An airline entry in `airlines.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct AirlineSource {
    /// Identity key.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Region the carrier is based in.
    pub region: String,
    /// Carrier website.
    #[serde(default)]
    pub website: Option<String>,
    /// Logo location.
    #[serde(default)]
    pub logo: Option<String>,
    /// Star Alliance membership.
    #[serde(default)]
    pub star_alliance_member: bool,
    /// Whether flights earn points.
    #[serde(alias = "earns_app")]
    pub earns_points: bool,
    /// Whether flights earn status miles.
    #[serde(alias = "earns_sqm")]
    pub earns_status_miles: bool,
    /// The earning-rate table, flat or regional.
    pub earning_rates: EarningRateSource,
}

/// A recorded distance entry under an airport in `airports.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordedDistanceSource {
    /// Current distance in miles.
    #[serde(default)]
    pub distance: Option<Decimal>,
    /// Legacy distance in miles.
    #[serde(default)]
    pub old_distance: Option<Decimal>,
}

/// An airport entry in `airports.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct AirportSource {
    /// Three-letter IATA code.
    pub iata_code: String,
    /// Display name.
    pub name: String,
    /// ISO country code.
    pub country: String,
    /// Latitude in degrees.
    #[serde(default)]
    pub latitude: Option<f64>,
    /// Longitude in degrees.
    #[serde(default)]
    pub longitude: Option<f64>,
    /// Recorded distances keyed by destination code.
    #[serde(default)]
    pub distances: BTreeMap<String, RecordedDistanceSource>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_earning_rates_deserialize() {
        let yaml = "J: 1.25\nY: 1.0\n";
        let source: EarningRateSource = serde_yaml::from_str(yaml).unwrap();

        match source {
            EarningRateSource::Flat(rates) => {
                assert_eq!(rates["J"], Decimal::new(125, 2));
                assert_eq!(rates["Y"], Decimal::ONE);
            }
            other => panic!("Expected flat table, got {:?}", other),
        }
    }

    #[test]
    fn test_regional_earning_rates_deserialize() {
        let yaml = r#"
Domestic:
  "*":
    Basic: 0.10
    Flex: 1.0
Transborder:
  "*":
    Basic: 0.25
"#;
        let source: EarningRateSource = serde_yaml::from_str(yaml).unwrap();

        match source {
            EarningRateSource::Regional(regions) => {
                assert_eq!(regions["Domestic"]["*"]["Basic"], Decimal::new(10, 2));
                assert_eq!(regions["Transborder"]["*"]["Basic"], Decimal::new(25, 2));
            }
            other => panic!("Expected regional table, got {:?}", other),
        }
    }

    #[test]
    fn test_airline_accepts_legacy_flag_names() {
        let yaml = r#"
id: united
name: United Airlines
region: United States
earns_app: true
earns_sqm: false
earning_rates: {}
"#;
        let source: AirlineSource = serde_yaml::from_str(yaml).unwrap();

        assert!(source.earns_points);
        assert!(!source.earns_status_miles);
        assert!(!source.star_alliance_member);
        assert!(source.website.is_none());
    }

    #[test]
    fn test_airline_missing_flag_is_rejected() {
        let yaml = "id: united\nname: United\nregion: US\nearns_points: true\nearning_rates: {}\n";
        let result: Result<AirlineSource, _> = serde_yaml::from_str(yaml);

        assert!(result.is_err());
    }

    #[test]
    fn test_airport_distances_deserialize() {
        let yaml = r#"
iata_code: YYZ
name: Toronto Pearson
country: CA
latitude: 43.6777
longitude: -79.6248
distances:
  YUL: { distance: 316 }
  YOW: { old_distance: 226 }
"#;
        let source: AirportSource = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(source.distances["YUL"].distance, Some(Decimal::new(316, 0)));
        assert_eq!(source.distances["YUL"].old_distance, None);
        assert_eq!(source.distances["YOW"].old_distance, Some(Decimal::new(226, 0)));
    }
}
