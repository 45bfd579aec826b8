//! Version-skew diagnosis for plugin-reported device identifiers.
//!
//! Some plugin versions report the device they bound to with an instance
//! suffix ("GPU.0") while older versions report the bare category
//! ("GPU"). Host modules disagree on how that string is compared against
//! the requested device type: some match with exact equality, some with
//! substring containment. The same plugin + host combination can
//! therefore work or fail depending on both versions. [`diagnose`]
//! classifies every reported device so the mismatch is visible before a
//! session ever fails to build.

use serde::Serialize;
use std::fmt;
use winep_common::{DeviceType, EpDevice};

/// Rendered in reports when the plugin did not publish a value.
const NOT_SET: &str = "(not set)";
const UNKNOWN: &str = "(unknown)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkewClassification {
    /// Identifier equals the requested type: every host matching semantic
    /// accepts it.
    Compatible,
    /// Requested type is contained in the identifier but not equal to it:
    /// exact-match hosts fail, substring-match hosts pass.
    VersionSkew,
    /// Neither equal nor contained: no host semantic matches.
    Mismatch,
    /// No device type was requested, so no comparison was made.
    NotChecked,
}

/// Diagnosis of one reported device.
#[derive(Debug, Clone, Serialize)]
pub struct DeviceDiagnosis {
    pub ep_name: String,
    pub device_type: DeviceType,
    /// Self-reported identifier (`ov_device`); `None` when the plugin set
    /// nothing.
    pub device_identifier: Option<String>,
    pub plugin_version: Option<String>,
    pub exact_match: bool,
    pub substring_match: bool,
    pub classification: SkewClassification,
}

/// Per-provider report over a device listing.
#[derive(Debug, Clone, Serialize)]
pub struct DiagnosisReport {
    pub ep_name: String,
    pub requested_device_type: Option<String>,
    pub devices: Vec<DeviceDiagnosis>,
}

/// Cross-check each of the provider's devices against the requested
/// device type.
///
/// `requested_device_type` is a free-form string rather than a
/// [`DeviceType`] because callers probe with the exact value they intend
/// to hand the host ("GPU", "GPU.0"). Missing metadata never raises; it
/// shows up as placeholders in the rendered report and as a
/// [`SkewClassification::Mismatch`] when a device type was requested.
pub fn diagnose(
    devices: &[EpDevice],
    ep_name: &str,
    requested_device_type: Option<&str>,
) -> DiagnosisReport {
    let mut diagnoses = Vec::new();

    for device in devices.iter().filter(|d| d.ep_name == ep_name) {
        let identifier = device.metadata.device_identifier.clone();

        let (exact_match, substring_match, classification) =
            match (requested_device_type, identifier.as_deref()) {
                (None, _) => (false, false, SkewClassification::NotChecked),
                (Some(_), None) => (false, false, SkewClassification::Mismatch),
                (Some(requested), Some(id)) => {
                    let exact = id == requested;
                    let substring = id.contains(requested);
                    let classification = if exact {
                        SkewClassification::Compatible
                    } else if substring {
                        SkewClassification::VersionSkew
                    } else {
                        SkewClassification::Mismatch
                    };
                    (exact, substring, classification)
                }
            };

        diagnoses.push(DeviceDiagnosis {
            ep_name: device.ep_name.clone(),
            device_type: device.device_type,
            device_identifier: identifier,
            plugin_version: device.metadata.plugin_version.clone(),
            exact_match,
            substring_match,
            classification,
        });
    }

    if diagnoses.is_empty() {
        log::warn!("no devices reported for {ep_name}");
    }

    DiagnosisReport {
        ep_name: ep_name.to_string(),
        requested_device_type: requested_device_type.map(str::to_string),
        devices: diagnoses,
    }
}

impl fmt::Display for DiagnosisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.devices.is_empty() {
            return writeln!(f, "no devices found for {}", self.ep_name);
        }

        for device in &self.devices {
            let identifier = device.device_identifier.as_deref().unwrap_or(NOT_SET);
            let version = device.plugin_version.as_deref().unwrap_or(UNKNOWN);
            writeln!(
                f,
                "{}: ov_device='{}', plugin={}, hardware={}",
                device.ep_name, identifier, version, device.device_type
            )?;

            let Some(requested) = self.requested_device_type.as_deref() else {
                writeln!(f, "  (pass a device type to check for identifier skew)")?;
                continue;
            };

            let status = if device.exact_match { "MATCH" } else { "MISMATCH" };
            writeln!(
                f,
                "  device_type='{requested}' vs ov_device='{identifier}': exact={status}"
            )?;
            match device.classification {
                SkewClassification::Compatible => {
                    writeln!(
                        f,
                        "  ov_device exactly matches; exact-match and substring-match hosts both work"
                    )?;
                }
                SkewClassification::VersionSkew => {
                    writeln!(
                        f,
                        "  affected by version skew: ov_device '{identifier}' contains '{requested}' but is not an exact match"
                    )?;
                    writeln!(
                        f,
                        "  hosts matching with exact equality will FAIL; hosts matching by substring will PASS"
                    )?;
                }
                SkewClassification::Mismatch => {
                    writeln!(f, "  no host matching semantic will select this device")?;
                }
                SkewClassification::NotChecked => {}
            }
        }
        Ok(())
    }
}
