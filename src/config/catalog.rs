//! The in-memory reference catalog.

use std::collections::HashMap;

use crate::error::{EngineError, EngineResult};
use crate::models::{AeroplanStatus, Airline, Airport, DistanceRecord, FareBrand, Segment};

use super::types::CatalogMetadata;

/// The complete reference catalog: airlines, airports, fare brands and
/// status tiers.
///
/// A `Catalog` is immutable once built. Every cross reference (defaults,
/// the "None" fare brand, recorded distance destinations) is checked by
/// [`Catalog::new`], so the default accessors cannot fail.
#[derive(Debug, Clone)]
pub struct Catalog {
    metadata: CatalogMetadata,
    airlines: Vec<Airline>,
    airports: Vec<Airport>,
    fare_brands: Vec<FareBrand>,
    statuses: Vec<AeroplanStatus>,
    airline_index: HashMap<String, usize>,
    airport_index: HashMap<String, usize>,
    default_airline: usize,
    default_origin: usize,
    default_status: usize,
    no_brand: usize,
}

fn invalid(entity: &'static str, key: &str, message: impl Into<String>) -> EngineError {
    EngineError::InvalidCatalog {
        entity,
        key: key.to_string(),
        message: message.into(),
    }
}

fn build_index<T>(
    entity: &'static str,
    items: &[T],
    key: impl Fn(&T) -> &str,
) -> EngineResult<HashMap<String, usize>> {
    let mut index = HashMap::with_capacity(items.len());
    for (position, item) in items.iter().enumerate() {
        if index.insert(key(item).to_string(), position).is_some() {
            return Err(invalid(entity, key(item), "duplicate entry"));
        }
    }
    Ok(index)
}

impl Catalog {
    /// Creates a catalog from its component parts, checking cross references.
    ///
    /// Airports, airlines, fare brands and statuses must have unique keys,
    /// every recorded distance must point at a catalogued airport, and the
    /// defaults named in the metadata must exist, as must the "None" fare
    /// brand.
    pub fn new(
        metadata: CatalogMetadata,
        airlines: Vec<Airline>,
        airports: Vec<Airport>,
        fare_brands: Vec<FareBrand>,
        statuses: Vec<AeroplanStatus>,
    ) -> EngineResult<Self> {
        let airline_index = build_index("airline", &airlines, |a| a.id.as_str())?;
        let airport_index = build_index("airport", &airports, |a| a.iata_code.as_str())?;
        let fare_brand_index = build_index("fare brand", &fare_brands, |b| b.name.as_str())?;
        let status_index = build_index("status", &statuses, |s| s.name.as_str())?;

        for airport in &airports {
            if let Some(record) = airport
                .distances
                .values()
                .find(|record| !airport_index.contains_key(&record.destination))
            {
                return Err(invalid(
                    "airport",
                    &airport.iata_code,
                    format!("recorded distance to unknown airport '{}'", record.destination),
                ));
            }
        }

        let default_airline = *airline_index.get(&metadata.default_airline).ok_or_else(|| {
            invalid("airline", &metadata.default_airline, "default airline is not catalogued")
        })?;
        let default_origin = *airport_index.get(&metadata.default_origin).ok_or_else(|| {
            invalid("airport", &metadata.default_origin, "default origin is not catalogued")
        })?;
        let default_status = *status_index.get(&metadata.default_status).ok_or_else(|| {
            invalid("status", &metadata.default_status, "default status is not catalogued")
        })?;
        let no_brand = *fare_brand_index.get(FareBrand::NO_BRAND_NAME).ok_or_else(|| {
            invalid("fare brand", FareBrand::NO_BRAND_NAME, "sentinel brand is not catalogued")
        })?;

        Ok(Self {
            metadata,
            airlines,
            airports,
            fare_brands,
            statuses,
            airline_index,
            airport_index,
            default_airline,
            default_origin,
            default_status,
            no_brand,
        })
    }

    /// Returns the catalog metadata.
    pub fn metadata(&self) -> &CatalogMetadata {
        &self.metadata
    }

    /// Returns all airlines, in catalog order.
    pub fn airlines(&self) -> &[Airline] {
        &self.airlines
    }

    /// Returns all airports, in catalog order.
    pub fn airports(&self) -> &[Airport] {
        &self.airports
    }

    /// Returns all fare brands, in catalog order.
    pub fn fare_brands(&self) -> &[FareBrand] {
        &self.fare_brands
    }

    /// Returns all status tiers, in catalog order.
    pub fn statuses(&self) -> &[AeroplanStatus] {
        &self.statuses
    }

    /// Gets an airline by id.
    pub fn airline(&self, id: &str) -> EngineResult<&Airline> {
        self.airline_index
            .get(id)
            .map(|&i| &self.airlines[i])
            .ok_or_else(|| EngineError::AirlineNotFound { id: id.to_string() })
    }

    /// Gets an airport by IATA code. The code is matched case-insensitively.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use ac_calc::config::CatalogLoader;
    ///
    /// let catalog = CatalogLoader::load("./config/catalog")?;
    /// let yyz = catalog.airport("yyz")?;
    /// assert_eq!(yyz.iata_code, "YYZ");
    /// # Ok::<(), ac_calc::error::EngineError>(())
    /// ```
    pub fn airport(&self, code: &str) -> EngineResult<&Airport> {
        self.airport_index
            .get(&code.trim().to_ascii_uppercase())
            .map(|&i| &self.airports[i])
            .ok_or_else(|| EngineError::AirportNotFound {
                code: code.to_string(),
            })
    }

    /// Gets a fare brand by name.
    pub fn fare_brand(&self, name: &str) -> EngineResult<&FareBrand> {
        self.fare_brands
            .iter()
            .find(|brand| brand.name == name)
            .ok_or_else(|| EngineError::FareBrandNotFound {
                name: name.to_string(),
            })
    }

    /// Gets a status tier by name.
    pub fn status(&self, name: &str) -> EngineResult<&AeroplanStatus> {
        self.statuses
            .iter()
            .find(|status| status.name == name)
            .ok_or_else(|| EngineError::StatusNotFound {
                name: name.to_string(),
            })
    }

    /// Returns the "No Brand" sentinel used for carriers without fare brands.
    pub fn no_brand(&self) -> &FareBrand {
        &self.fare_brands[self.no_brand]
    }

    /// Returns the airline new segments start with.
    pub fn default_airline(&self) -> &Airline {
        &self.airlines[self.default_airline]
    }

    /// Returns the airport new segments start from.
    pub fn default_origin(&self) -> &Airport {
        &self.airports[self.default_origin]
    }

    /// Returns the status tier new itineraries start with.
    pub fn default_status(&self) -> &AeroplanStatus {
        &self.statuses[self.default_status]
    }

    /// Returns the recorded distances from `origin`, sorted by destination code.
    pub fn recorded_distances(&self, origin: &str) -> EngineResult<Vec<&DistanceRecord>> {
        let mut records: Vec<&DistanceRecord> = self.airport(origin)?.distances.values().collect();
        records.sort_by(|a, b| a.destination.cmp(&b.destination));
        Ok(records)
    }

    /// Builds a segment from catalog keys.
    ///
    /// A missing `fare_brand` selects the "No Brand" sentinel.
    pub fn segment(
        &self,
        airline: &str,
        origin: &str,
        destination: &str,
        fare_brand: Option<&str>,
        fare_class: &str,
    ) -> EngineResult<Segment<'_>> {
        let fare_brand = match fare_brand {
            Some(name) => self.fare_brand(name)?,
            None => self.no_brand(),
        };

        Ok(Segment {
            airline: self.airline(airline)?,
            origin: self.airport(origin)?,
            destination: self.airport(destination)?,
            fare_brand,
            fare_class: fare_class.to_string(),
        })
    }
}
