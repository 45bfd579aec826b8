//! Best-effort removal of a conflicting shared runtime file.

use std::path::Path;

/// Delete `path` if it exists.
///
/// Failure is logged and swallowed: a stale copy only matters if the
/// process later loads the colliding runtime, and the caller cannot do
/// anything useful about a failed delete anyway.
pub fn remove_conflicting_runtime(path: &Path) {
    if !path.exists() {
        log::debug!("no conflicting runtime at {}", path.display());
        return;
    }
    match std::fs::remove_file(path) {
        Ok(()) => log::info!("removed conflicting shared runtime {}", path.display()),
        Err(e) => log::warn!(
            "could not remove conflicting shared runtime {}: {}",
            path.display(),
            e
        ),
    }
}
