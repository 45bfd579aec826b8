//! The provider registry: lazy readiness, path caching, idempotent
//! per-host registration.

use crate::cleanup::remove_conflicting_runtime;
use crate::config::RegistryConfig;
use crate::error::Result;
use crate::version::version_from_path;
use parking_lot::Mutex;
use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;
use std::sync::Arc;
use winep_common::{
    ActivationContext, CatalogProvider, HostKind, HostModule, PlatformBootstrap, ProviderCatalog,
};

/// Cumulative host -> registered provider names mapping. Names appear in
/// registration order and the set for a host only ever grows.
pub type RegistrationReport = BTreeMap<HostKind, Vec<String>>;

/// Outcome of one path resolution, cached for the process lifetime.
#[derive(Debug, Clone)]
enum Resolution {
    Ready(PathBuf),
    /// The catalog reported an empty library path. Remembered so the
    /// catalog is never asked about this provider again.
    Unavailable,
}

/// Mediator between the platform provider catalog and the runtime host
/// modules.
///
/// Construct one instance at the application entry point and share it by
/// reference; the caches are process-wide state and all call sites must
/// observe the same resolution history. Interior locking keeps the
/// at-most-once invariants intact if callers span threads.
pub struct ProviderRegistry {
    /// Catalog entries in enumeration order.
    providers: Vec<Arc<dyn CatalogProvider>>,
    by_name: HashMap<String, Arc<dyn CatalogProvider>>,
    resolutions: Mutex<HashMap<String, Resolution>>,
    registered: Mutex<RegistrationReport>,
    /// Held for the registry's lifetime; dropping it releases the platform
    /// activation context exactly once.
    _activation: Box<dyn ActivationContext>,
}

impl ProviderRegistry {
    /// Build the registry.
    ///
    /// Order matters: the conflicting shared runtime (if configured) is
    /// removed before activation so the platform never maps the stale
    /// copy, then the activation context is acquired, then the catalog is
    /// enumerated exactly once. Enumeration does not load any plugin
    /// library.
    pub fn new(
        catalog: &dyn ProviderCatalog,
        bootstrap: &dyn PlatformBootstrap,
        config: &RegistryConfig,
    ) -> Result<Self> {
        if let Some(path) = &config.conflicting_runtime {
            remove_conflicting_runtime(path);
        }

        let activation = bootstrap.initialize()?;

        let providers = catalog.enumerate()?;
        let mut by_name = HashMap::with_capacity(providers.len());
        for provider in &providers {
            by_name.insert(provider.name().to_string(), Arc::clone(provider));
        }
        log::info!("catalog enumerated {} execution providers", providers.len());

        let mut registered = RegistrationReport::new();
        for kind in HostKind::ALL {
            registered.insert(kind, Vec::new());
        }

        Ok(Self {
            providers,
            by_name,
            resolutions: Mutex::new(HashMap::new()),
            registered: Mutex::new(registered),
            _activation: activation,
        })
    }

    /// Provider names known from the catalog enumeration, in enumeration
    /// order. No side effects.
    pub fn list_providers(&self) -> Vec<String> {
        self.providers
            .iter()
            .map(|provider| provider.name().to_string())
            .collect()
    }

    /// Cached library path for `name`, if it has been resolved and found.
    pub fn resolved_path(&self, name: &str) -> Option<PathBuf> {
        match self.resolutions.lock().get(name) {
            Some(Resolution::Ready(path)) => Some(path.clone()),
            _ => None,
        }
    }

    /// Register providers with the given host modules.
    ///
    /// `provider_names` of `None` means every provider the catalog knows.
    /// Each provider's library is resolved lazily and at most once; a
    /// provider the catalog reported unavailable is skipped on this and
    /// every later call without touching the catalog again. Registration
    /// is best-effort per provider: a host rejecting one plugin (ABI
    /// mismatch, corrupt library) is logged with its cause and does not
    /// stop the rest of the batch.
    ///
    /// Returns the cumulative mapping of host module to provider names
    /// registered with it over the life of this registry.
    pub fn register(
        &self,
        hosts: &[&dyn HostModule],
        provider_names: Option<&[&str]>,
    ) -> RegistrationReport {
        let names: Vec<String> = match provider_names {
            Some(names) => names.iter().map(|name| name.to_string()).collect(),
            None => self.list_providers(),
        };

        for name in &names {
            let Some(path) = self.ensure_ready(name) else {
                continue;
            };
            let version = version_from_path(&path);

            for host in hosts {
                let kind = host.kind();
                // The lock spans the membership check, the native call, and
                // the insertion: a (host, name) pair can otherwise register
                // twice when callers race between check and call.
                let mut registered = self.registered.lock();
                if registered
                    .get(&kind)
                    .is_some_and(|names| names.iter().any(|registered| registered == name))
                {
                    log::debug!("{name} already registered with {kind}, skipping");
                    continue;
                }
                match host.register_execution_provider_library(name, &path) {
                    Ok(()) => {
                        registered.entry(kind).or_default().push(name.clone());
                        match &version {
                            Some(v) => log::info!("registered {name} v{v} with {kind}"),
                            None => log::info!("registered {name} with {kind}"),
                        }
                    }
                    Err(e) => {
                        log::error!("failed to register execution provider {name} with {kind}: {e}");
                    }
                }
            }
        }

        self.registered.lock().clone()
    }

    /// Resolve the library path for one provider, at most once per
    /// process.
    ///
    /// The lock is held across the catalog's blocking ensure-ready call:
    /// the catalog sees one outstanding request at a time, and concurrent
    /// callers asking for the same provider cannot resolve it twice. Only
    /// the requested provider is materialized, so unrelated hardware
    /// plugins are never loaded into the process as a side effect.
    fn ensure_ready(&self, name: &str) -> Option<PathBuf> {
        let mut resolutions = self.resolutions.lock();
        if let Some(resolution) = resolutions.get(name) {
            return match resolution {
                Resolution::Ready(path) => Some(path.clone()),
                Resolution::Unavailable => None,
            };
        }

        let Some(provider) = self.by_name.get(name) else {
            log::warn!("execution provider {name} is not in the catalog");
            return None;
        };

        let resolution = match provider.ensure_ready() {
            Ok(path) if path.as_os_str().is_empty() => {
                log::warn!("catalog reports execution provider {name} unavailable");
                Resolution::Unavailable
            }
            Ok(path) => {
                log::debug!("resolved {name} to {}", path.display());
                Resolution::Ready(path)
            }
            Err(e) => {
                log::warn!("ensure-ready failed for {name}: {e}");
                Resolution::Unavailable
            }
        };

        let result = match &resolution {
            Resolution::Ready(path) => Some(path.clone()),
            Resolution::Unavailable => None,
        };
        resolutions.insert(name.to_string(), resolution);
        result
    }
}
