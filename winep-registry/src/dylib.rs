//! Host module backed by a dynamically loaded runtime library.

use crate::error::{RegistryError, Result};
use libloading::{Library, Symbol};
use std::ffi::CString;
use std::os::raw::c_char;
use std::path::Path;
use winep_common::{HostKind, HostModule, RegistrationError};

/// Symbol name a host runtime exports for plugin registration.
pub const DEFAULT_REGISTER_SYMBOL: &str = "RegisterExecutionProviderLibrary";

/// C signature of the registration entry point: (provider name, library
/// path), both NUL-terminated UTF-8, returning 0 on success.
type RegisterFn = unsafe extern "C" fn(*const c_char, *const c_char) -> i32;

/// A [`HostModule`] over a runtime library loaded at run time.
///
/// The library stays loaded for the lifetime of this value; symbols are
/// resolved per call so a host without the registration export fails with
/// a [`RegistrationError`] instead of failing to construct.
pub struct DylibHostModule {
    kind: HostKind,
    library: Library,
    /// NUL-terminated symbol name.
    symbol: Vec<u8>,
}

impl DylibHostModule {
    /// Load `library_path` and bind it as host `kind`, using
    /// [`DEFAULT_REGISTER_SYMBOL`].
    pub fn load(kind: HostKind, library_path: &Path) -> Result<Self> {
        Self::load_with_symbol(kind, library_path, DEFAULT_REGISTER_SYMBOL)
    }

    /// Load `library_path` with an explicit registration symbol name, for
    /// runtimes that export it under a different name.
    pub fn load_with_symbol(kind: HostKind, library_path: &Path, symbol: &str) -> Result<Self> {
        let library = unsafe { Library::new(library_path) }.map_err(|e| {
            RegistryError::HostLibrary(format!("{}: {}", library_path.display(), e))
        })?;
        let mut symbol = symbol.as_bytes().to_vec();
        symbol.push(0);
        Ok(Self {
            kind,
            library,
            symbol,
        })
    }
}

impl HostModule for DylibHostModule {
    fn kind(&self) -> HostKind {
        self.kind
    }

    fn register_execution_provider_library(
        &self,
        name: &str,
        path: &Path,
    ) -> std::result::Result<(), RegistrationError> {
        let reject = |reason: String| RegistrationError {
            host: self.kind,
            provider: name.to_string(),
            reason,
        };

        let entry: Symbol<'_, RegisterFn> = unsafe { self.library.get(&self.symbol) }
            .map_err(|e| reject(format!("registration symbol not exported: {e}")))?;

        let c_name =
            CString::new(name).map_err(|_| reject("provider name contains NUL".to_string()))?;
        let c_path = CString::new(path.to_string_lossy().into_owned())
            .map_err(|_| reject("library path contains NUL".to_string()))?;

        let status = unsafe { entry(c_name.as_ptr(), c_path.as_ptr()) };
        if status != 0 {
            return Err(reject(format!("native registration returned status {status}")));
        }
        Ok(())
    }
}
