//! Catalog loading functionality.
//!
//! This module provides the [`CatalogLoader`] type for loading the reference
//! catalog from YAML files.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::{AeroplanStatus, Airline, Airport, Coordinates, DistanceRecord, FareBrand};

use super::catalog::Catalog;
use super::types::{AirlineSource, AirportSource, CatalogMetadata, EarningRateSource};

/// Loads the reference catalog from a directory of YAML files.
///
/// # Directory Structure
///
/// ```text
/// config/catalog/
/// ├── catalog.yaml      # Catalog metadata, earning region and defaults
/// ├── airlines.yaml     # Airlines and their earning-rate tables
/// ├── airports.yaml     # Airports, coordinates and recorded distances
/// ├── fare_brands.yaml  # Fare brands, including the "None" sentinel
/// └── statuses.yaml     # Aeroplan status tiers
/// ```
///
/// Any missing file, parse failure or invalid entry is a configuration
/// error. Nothing is loaded lazily: once [`CatalogLoader::load`] returns,
/// the catalog is complete.
///
/// # Example
///
/// ```no_run
/// use ac_calc::config::CatalogLoader;
///
/// let catalog = CatalogLoader::load("./config/catalog")?;
/// let airline = catalog.airline("air-canada")?;
/// println!("Loaded airline: {}", airline.name);
/// # Ok::<(), ac_calc::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CatalogLoader;

impl CatalogLoader {
    /// Loads and validates the catalog in `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Catalog> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<CatalogMetadata>(&path.join("catalog.yaml"))?;
        let airlines = Self::load_yaml::<Vec<AirlineSource>>(&path.join("airlines.yaml"))?;
        let airports = Self::load_yaml::<Vec<AirportSource>>(&path.join("airports.yaml"))?;
        let fare_brands = Self::load_yaml::<Vec<FareBrand>>(&path.join("fare_brands.yaml"))?;
        let statuses = Self::load_yaml::<Vec<AeroplanStatus>>(&path.join("statuses.yaml"))?;

        let airlines = airlines
            .into_iter()
            .map(|source| build_airline(source, &metadata.earning_region))
            .collect::<EngineResult<Vec<_>>>()
            .inspect_err(|err| warn!(error = %err, "Invalid airline in catalog"))?;
        let airports = airports
            .into_iter()
            .map(build_airport)
            .collect::<EngineResult<Vec<_>>>()
            .inspect_err(|err| warn!(error = %err, "Invalid airport in catalog"))?;
        fare_brands
            .iter()
            .try_for_each(validate_fare_brand)
            .inspect_err(|err| warn!(error = %err, "Invalid fare brand in catalog"))?;
        statuses
            .iter()
            .try_for_each(validate_status)
            .inspect_err(|err| warn!(error = %err, "Invalid status in catalog"))?;

        let catalog = Catalog::new(metadata, airlines, airports, fare_brands, statuses)
            .inspect_err(|err| warn!(error = %err, "Catalog cross references are invalid"))?;

        info!(
            catalog = %catalog.metadata().name,
            version = %catalog.metadata().version,
            earning_region = %catalog.metadata().earning_region,
            airlines = catalog.airlines().len(),
            airports = catalog.airports().len(),
            fare_brands = catalog.fare_brands().len(),
            statuses = catalog.statuses().len(),
            "Reference catalog loaded"
        );

        Ok(catalog)
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::CatalogNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::CatalogParseError {
            path: path_str,
            message: e.to_string(),
        })
    }
}

fn invalid(entity: &'static str, key: &str, message: impl Into<String>) -> EngineError {
    EngineError::InvalidCatalog {
        entity,
        key: key.to_string(),
        message: message.into(),
    }
}

/// Converts an airline entry, flattening a regional earning-rate table to
/// the selected region.
fn build_airline(source: AirlineSource, earning_region: &str) -> EngineResult<Airline> {
    let earning_rates = flatten_earning_rates(&source.id, source.earning_rates, earning_region)?;

    if let Some((key, rate)) = earning_rates.iter().find(|(_, rate)| rate.is_sign_negative()) {
        return Err(invalid(
            "airline",
            &source.id,
            format!("negative earning rate {} for '{}'", rate, key),
        ));
    }

    Ok(Airline {
        id: source.id,
        name: source.name,
        region: source.region,
        website: source.website,
        logo: source.logo,
        star_alliance_member: source.star_alliance_member,
        earns_points: source.earns_points,
        earns_status_miles: source.earns_status_miles,
        earning_rates,
    })
}

/// Reduces an earning-rate table to a flat fare class/brand to rate map.
///
/// Fare-class groups of the selected region are merged in key order, so
/// the `"*"` wildcard group is applied first and named groups override it.
fn flatten_earning_rates(
    airline_id: &str,
    source: EarningRateSource,
    earning_region: &str,
) -> EngineResult<HashMap<String, Decimal>> {
    match source {
        EarningRateSource::Flat(rates) => Ok(rates),
        EarningRateSource::Regional(mut regions) => {
            let groups = regions.remove(earning_region).ok_or_else(|| {
                invalid(
                    "airline",
                    airline_id,
                    format!("no earning rates for region '{}'", earning_region),
                )
            })?;
            Ok(groups.into_values().flatten().collect())
        }
    }
}

fn build_airport(source: AirportSource) -> EngineResult<Airport> {
    let code = source.iata_code.trim().to_ascii_uppercase();
    if code.len() != 3 || !code.bytes().all(|b| b.is_ascii_uppercase()) {
        return Err(invalid("airport", &source.iata_code, "code must be 3 letters"));
    }

    let coordinates = match (source.latitude, source.longitude) {
        (Some(latitude), Some(longitude)) => {
            if !(-90.0..=90.0).contains(&latitude) {
                let message = format!("latitude {} out of range", latitude);
                return Err(invalid("airport", &code, message));
            }
            if !(-180.0..=180.0).contains(&longitude) {
                let message = format!("longitude {} out of range", longitude);
                return Err(invalid("airport", &code, message));
            }
            Some(Coordinates { latitude, longitude })
        }
        (None, None) => None,
        _ => {
            let message = "latitude and longitude must be given together";
            return Err(invalid("airport", &code, message));
        }
    };

    let mut distances = HashMap::with_capacity(source.distances.len());
    for (destination, recorded) in source.distances {
        let destination = destination.trim().to_ascii_uppercase();
        let record = DistanceRecord {
            destination: destination.clone(),
            distance: recorded.distance,
            old_distance: recorded.old_distance,
        };

        if record.recorded().is_none() {
            return Err(invalid(
                "airport",
                &code,
                format!("recorded distance to '{}' has no value", destination),
            ));
        }
        if [record.distance, record.old_distance]
            .iter()
            .flatten()
            .any(|miles| miles.is_sign_negative())
        {
            return Err(invalid(
                "airport",
                &code,
                format!("negative recorded distance to '{}'", destination),
            ));
        }

        distances.insert(destination, record);
    }

    Ok(Airport {
        iata_code: code,
        name: source.name,
        country: source.country,
        coordinates,
        distances,
    })
}

fn validate_fare_brand(brand: &FareBrand) -> EngineResult<()> {
    if brand.fare_classes.is_empty() {
        return Err(invalid("fare brand", &brand.name, "no fare classes"));
    }
    Ok(())
}

fn validate_status(status: &AeroplanStatus) -> EngineResult<()> {
    if status.bonus_factor.is_sign_negative() {
        return Err(invalid("status", &status.name, "negative bonus factor"));
    }
    if status.min_earning_value.is_sign_negative() {
        return Err(invalid("status", &status.name, "negative minimum earning value"));
    }
    Ok(())
}
