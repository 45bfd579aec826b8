//! Exact-match device selection.

use std::collections::HashMap;
use winep_common::{DeviceSource, DeviceType, SessionConfig};

/// Find the first device whose provider name and device type both match
/// exactly, and attach that single device to the session configuration
/// with `options`.
///
/// Matching here is deliberately exact and must stay that way. Plugin
/// versions exist that report a suffixed device identifier ("GPU.0")
/// where others report the bare category ("GPU"); substring matching in
/// this position has previously selected the wrong device when both
/// forms were listed. Do not loosen this to containment — see the
/// diagnostics module for how the skew is surfaced instead.
///
/// Returns `true` when a device was attached. `false` is not an error:
/// the configuration is left untouched and the caller falls back to
/// name-based provider selection.
pub fn select_and_attach(
    source: &dyn DeviceSource,
    config: &mut dyn SessionConfig,
    ep_name: &str,
    device_type: DeviceType,
    options: &HashMap<String, String>,
) -> bool {
    for device in source.ep_devices() {
        if device.ep_name == ep_name && device.device_type == device_type {
            log::info!("adding {ep_name} for {device_type}");
            config.add_provider_for_devices(std::slice::from_ref(&device), options);
            return true;
        }
    }
    log::debug!("no {ep_name} device of type {device_type} reported, falling back to name-based selection");
    false
}
