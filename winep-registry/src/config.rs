//! Registry configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Construction-time settings for [`crate::ProviderRegistry`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Shared runtime file to delete from the library search path before
    /// activation. Another copy of the same runtime linked into the process
    /// collides with it at symbol resolution otherwise. Removal is
    /// best-effort; failure is logged and never fatal.
    pub conflicting_runtime: Option<PathBuf>,
}
