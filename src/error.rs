//! Error types for the earning calculator.
//!
//! Errors only originate at the catalog boundary: loading the reference
//! catalog, or resolving a caller-supplied key against it. The calculation
//! path itself is total and never returns an [`EngineError`].

use thiserror::Error;

/// The main error type for the earning calculator.
///
/// # Example
///
/// ```
/// use ac_calc::error::EngineError;
///
/// let error = EngineError::CatalogNotFound {
///     path: "/missing/airlines.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Catalog file not found: /missing/airlines.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A catalog file was not found at the specified path.
    #[error("Catalog file not found: {path}")]
    CatalogNotFound {
        /// The path that was not found.
        path: String,
    },

    /// A catalog file could not be parsed.
    #[error("Failed to parse catalog file '{path}': {message}")]
    CatalogParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A catalog entry parsed but holds values the engine cannot use.
    #[error("Invalid {entity} '{key}' in catalog: {message}")]
    InvalidCatalog {
        /// The kind of entity (e.g. "airline", "airport").
        entity: &'static str,
        /// The key of the offending entry.
        key: String,
        /// A description of what made the entry invalid.
        message: String,
    },

    /// The process-wide catalog was already installed.
    #[error("A reference catalog is already installed for this process")]
    CatalogAlreadyInstalled,

    /// No airline with the given id exists in the catalog.
    #[error("Airline not found: {id}")]
    AirlineNotFound {
        /// The airline id that was not found.
        id: String,
    },

    /// No airport with the given code exists in the catalog.
    #[error("Airport not found: {code}")]
    AirportNotFound {
        /// The airport code that was not found.
        code: String,
    },

    /// No fare brand with the given name exists in the catalog.
    #[error("Fare brand not found: {name}")]
    FareBrandNotFound {
        /// The fare brand name that was not found.
        name: String,
    },

    /// No status tier with the given name exists in the catalog.
    #[error("Aeroplan status not found: {name}")]
    StatusNotFound {
        /// The status name that was not found.
        name: String,
    },
}

impl EngineError {
    /// Returns true for errors raised while loading the reference catalog.
    ///
    /// These are fatal: the process should not attempt any calculation.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            EngineError::CatalogNotFound { .. }
                | EngineError::CatalogParseError { .. }
                | EngineError::InvalidCatalog { .. }
                | EngineError::CatalogAlreadyInstalled
        )
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_not_found_displays_path() {
        let error = EngineError::CatalogNotFound {
            path: "/missing/airports.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Catalog file not found: /missing/airports.yaml"
        );
    }

    #[test]
    fn test_catalog_parse_error_displays_path_and_message() {
        let error = EngineError::CatalogParseError {
            path: "/catalog/airlines.yaml".to_string(),
            message: "missing field `earns_app`".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse catalog file '/catalog/airlines.yaml': missing field `earns_app`"
        );
    }

    #[test]
    fn test_invalid_catalog_displays_entity_and_key() {
        let error = EngineError::InvalidCatalog {
            entity: "airline",
            key: "air-canada".to_string(),
            message: "negative earning rate for 'Basic'".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid airline 'air-canada' in catalog: negative earning rate for 'Basic'"
        );
    }

    #[test]
    fn test_lookup_errors_display_key() {
        let error = EngineError::AirportNotFound {
            code: "XXX".to_string(),
        };
        assert_eq!(error.to_string(), "Airport not found: XXX");

        let error = EngineError::StatusNotFound {
            name: "Platinum".to_string(),
        };
        assert_eq!(error.to_string(), "Aeroplan status not found: Platinum");
    }

    #[test]
    fn test_configuration_errors_are_flagged() {
        assert!(
            EngineError::CatalogNotFound {
                path: "x".to_string()
            }
            .is_configuration_error()
        );
        assert!(EngineError::CatalogAlreadyInstalled.is_configuration_error());
        assert!(
            !EngineError::AirlineNotFound {
                id: "x".to_string()
            }
            .is_configuration_error()
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_not_found() -> EngineResult<()> {
            Err(EngineError::FareBrandNotFound {
                name: "Flex".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
