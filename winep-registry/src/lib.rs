//! Winep Registry
//!
//! Mediates between a platform execution-provider catalog and the runtime
//! host modules: resolves each plugin's library path at most once, remembers
//! permanent unavailability, and registers (name, path) pairs with each host
//! idempotently.
//!
//! # Example
//!
//! ```rust,no_run
//! use winep_common::{NoopBootstrap, ProviderCatalog};
//! use winep_registry::{ProviderRegistry, RegistryConfig};
//!
//! fn run(catalog: &dyn ProviderCatalog) -> winep_registry::Result<()> {
//!     let registry = ProviderRegistry::new(catalog, &NoopBootstrap, &RegistryConfig::default())?;
//!     println!("known providers: {:?}", registry.list_providers());
//!     Ok(())
//! }
//! ```

pub mod cleanup;
pub mod config;
pub mod dylib;
pub mod error;
pub mod registry;
pub mod version;

pub use cleanup::remove_conflicting_runtime;
pub use config::RegistryConfig;
pub use dylib::DylibHostModule;
pub use error::{RegistryError, Result};
pub use registry::{ProviderRegistry, RegistrationReport};
pub use version::version_from_path;
