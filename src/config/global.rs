//! Process-wide reference catalog.
//!
//! The catalog is installed once at startup and read for the rest of the
//! process. There is no reload and no teardown.

use std::path::Path;
use std::sync::{Arc, OnceLock};

use crate::error::{EngineError, EngineResult};

use super::catalog::Catalog;
use super::loader::CatalogLoader;

static CATALOG: OnceLock<Arc<Catalog>> = OnceLock::new();

/// Installs `catalog` as the process-wide catalog.
///
/// Fails with [`EngineError::CatalogAlreadyInstalled`] if one is installed
/// already; the existing catalog is kept. The returned handle can be
/// shared with components that hold the catalog by `Arc`.
pub fn install(catalog: Catalog) -> EngineResult<&'static Arc<Catalog>> {
    let mut installed_now = false;
    let catalog = CATALOG.get_or_init(|| {
        installed_now = true;
        Arc::new(catalog)
    });

    if installed_now {
        Ok(catalog)
    } else {
        Err(EngineError::CatalogAlreadyInstalled)
    }
}

/// Returns the process-wide catalog, if one has been installed.
pub fn installed() -> Option<&'static Catalog> {
    CATALOG.get().map(|catalog| &**catalog)
}

/// Loads the catalog in `path` and installs it as the process-wide catalog.
pub fn load_and_install<P: AsRef<Path>>(path: P) -> EngineResult<&'static Arc<Catalog>> {
    install(CatalogLoader::load(path)?)
}
