//! Device model shared between the registry, the selector, and diagnostics.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Coarse hardware category, as opposed to a specific hardware instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DeviceType {
    Cpu,
    Gpu,
    Npu,
}

impl DeviceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceType::Cpu => "CPU",
            DeviceType::Gpu => "GPU",
            DeviceType::Npu => "NPU",
        }
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown device type: {0}")]
pub struct UnknownDeviceType(pub String);

impl FromStr for DeviceType {
    type Err = UnknownDeviceType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "CPU" => Ok(DeviceType::Cpu),
            "GPU" => Ok(DeviceType::Gpu),
            "NPU" => Ok(DeviceType::Npu),
            _ => Err(UnknownDeviceType(s.to_string())),
        }
    }
}

/// Metadata an EP plugin reports for one device.
///
/// The two keys diagnostics care about get named optional fields; anything
/// else the plugin reports lands in `extra`. A missing value is `None`,
/// never an empty string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EpMetadata {
    /// Self-reported device identifier, e.g. "GPU" or "GPU.0". Plugins
    /// expose this as the `ov_device` metadata key.
    pub device_identifier: Option<String>,

    /// Plugin version string, when the plugin publishes one.
    pub plugin_version: Option<String>,

    /// Remaining free-form key/value pairs.
    #[serde(default)]
    pub extra: HashMap<String, String>,
}

impl EpMetadata {
    pub fn with_device_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.device_identifier = Some(identifier.into());
        self
    }

    pub fn with_plugin_version(mut self, version: impl Into<String>) -> Self {
        self.plugin_version = Some(version.into());
        self
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// A (provider, hardware device) pair reported by a host module at query
/// time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpDevice {
    pub ep_name: String,
    pub device_type: DeviceType,
    #[serde(default)]
    pub metadata: EpMetadata,
}

impl EpDevice {
    pub fn new(ep_name: impl Into<String>, device_type: DeviceType) -> Self {
        Self {
            ep_name: ep_name.into(),
            device_type,
            metadata: EpMetadata::default(),
        }
    }

    pub fn with_metadata(mut self, metadata: EpMetadata) -> Self {
        self.metadata = metadata;
        self
    }
}
