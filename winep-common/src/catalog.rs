//! The external provider-catalog collaborator.
//!
//! The platform ships a catalog service that enumerates installable
//! execution-provider plugins and can materialize any one of them on
//! demand, producing a filesystem path to its loadable library.

use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog enumeration failed: {0}")]
    Enumeration(String),

    #[error("ensure-ready failed for provider {name}: {reason}")]
    EnsureReady { name: String, reason: String },
}

pub type Result<T> = std::result::Result<T, CatalogError>;

/// One provider entry as the catalog exposes it.
pub trait CatalogProvider: Send + Sync {
    /// Unique provider name, e.g. "OpenVINOExecutionProvider".
    fn name(&self) -> &str;

    /// Block until the platform has materialized this provider's library,
    /// then return the library path.
    ///
    /// There is no timeout and no cancellation; a caller wanting either
    /// must wrap this call externally. An empty returned path means the
    /// platform considers the provider permanently unavailable on this
    /// machine, which is distinct from an error talking to the catalog.
    fn ensure_ready(&self) -> Result<PathBuf>;
}

/// The platform service that enumerates installable EP plugins.
pub trait ProviderCatalog: Send + Sync {
    /// All providers the platform knows about. Enumeration alone does not
    /// load any plugin library.
    fn enumerate(&self) -> Result<Vec<Arc<dyn CatalogProvider>>>;
}
