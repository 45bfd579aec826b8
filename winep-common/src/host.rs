//! Host-module collaborators: runtime libraries that accept EP plugin
//! registrations and report live device listings.

use crate::device::EpDevice;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use thiserror::Error;

/// The two runtime hosts this process registers plugins with.
///
/// They are separate native builds: the generation runtime statically
/// links its own copy of the base runtime, so a plugin library built for
/// one is not necessarily ABI-compatible with the other.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum HostKind {
    /// The base inference runtime.
    Ort,
    /// The generation-oriented runtime built atop it.
    OrtGenai,
}

impl HostKind {
    pub const ALL: [HostKind; 2] = [HostKind::Ort, HostKind::OrtGenai];

    pub fn module_name(&self) -> &'static str {
        match self {
            HostKind::Ort => "onnxruntime",
            HostKind::OrtGenai => "onnxruntime-genai",
        }
    }
}

impl fmt::Display for HostKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.module_name())
    }
}

/// A host module rejected a (name, path) pair, typically because the
/// plugin was built against a different runtime build (ABI mismatch) or
/// the library is corrupt.
#[derive(Debug, Error)]
#[error("host {host} rejected execution provider {provider}: {reason}")]
pub struct RegistrationError {
    pub host: HostKind,
    pub provider: String,
    pub reason: String,
}

/// A runtime library that can load EP plugins by (name, path).
pub trait HostModule: Send + Sync {
    fn kind(&self) -> HostKind;

    /// Native registration entry point.
    fn register_execution_provider_library(
        &self,
        name: &str,
        path: &Path,
    ) -> Result<(), RegistrationError>;
}

/// Live device listing, for hosts that expose one.
///
/// Kept separate from [`HostModule`] so registration-only hosts do not
/// have to fake a device query.
pub trait DeviceSource: Send + Sync {
    fn ep_devices(&self) -> Vec<EpDevice>;
}
