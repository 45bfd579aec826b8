use thiserror::Error;
use winep_common::{CatalogError, PlatformError};

pub type Result<T> = std::result::Result<T, RegistryError>;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("platform error: {0}")]
    Platform(#[from] PlatformError),

    #[error("failed to load host runtime library: {0}")]
    HostLibrary(String),
}
