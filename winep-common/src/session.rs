//! Session configuration surface the device selector attaches to.

use crate::device::EpDevice;
use std::collections::HashMap;

/// A session/run configuration object that can be pinned to concrete
/// devices with provider-specific options.
pub trait SessionConfig {
    fn add_provider_for_devices(
        &mut self,
        devices: &[EpDevice],
        options: &HashMap<String, String>,
    );
}

/// One recorded `add_provider_for_devices` call.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceAttachment {
    pub devices: Vec<EpDevice>,
    pub options: HashMap<String, String>,
}

/// Accumulator implementation of [`SessionConfig`].
///
/// Records attachments in call order so callers (and tests) can inspect
/// exactly what was pinned before handing the choices to a native session.
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    attachments: Vec<DeviceAttachment>,
}

impl SessionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attachments(&self) -> &[DeviceAttachment] {
        &self.attachments
    }

    pub fn is_empty(&self) -> bool {
        self.attachments.is_empty()
    }
}

impl SessionConfig for SessionOptions {
    fn add_provider_for_devices(
        &mut self,
        devices: &[EpDevice],
        options: &HashMap<String, String>,
    ) {
        self.attachments.push(DeviceAttachment {
            devices: devices.to_vec(),
            options: options.clone(),
        });
    }
}
