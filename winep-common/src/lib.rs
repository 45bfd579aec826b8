//! Winep Common
//!
//! Shared data model and collaborator traits for the winep workspace.
//!
//! The provider catalog, the runtime host modules, and the session
//! configuration object are external collaborators. This crate defines the
//! traits the registry and device helpers consume, plus the device and
//! metadata types that cross those seams.
//!
//! # Example
//!
//! ```rust
//! use winep_common::{DeviceType, EpDevice, EpMetadata};
//!
//! let device = EpDevice::new("OpenVINOExecutionProvider", DeviceType::Gpu)
//!     .with_metadata(
//!         EpMetadata::default()
//!             .with_device_identifier("GPU.0")
//!             .with_plugin_version("1.8.63.0"),
//!     );
//!
//! assert_eq!(device.device_type.to_string(), "GPU");
//! ```

pub mod catalog;
pub mod device;
pub mod host;
pub mod platform;
pub mod session;

pub use catalog::{CatalogError, CatalogProvider, ProviderCatalog};
pub use device::{DeviceType, EpDevice, EpMetadata, UnknownDeviceType};
pub use host::{DeviceSource, HostKind, HostModule, RegistrationError};
pub use platform::{ActivationContext, NoopBootstrap, PlatformBootstrap, PlatformError};
pub use session::{DeviceAttachment, SessionConfig, SessionOptions};
