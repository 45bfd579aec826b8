//! Platform component activation, modeled as an RAII guard.
//!
//! The plugin catalog only works inside an activated platform component
//! context. The context is acquired once, held for the whole lifetime of
//! the registry that obtained it, and released exactly once when the
//! guard drops.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("platform activation failed: {0}")]
    Activation(String),
}

pub type Result<T> = std::result::Result<T, PlatformError>;

/// Handle to an activated platform component context. Dropping the guard
/// releases the context.
pub trait ActivationContext: Send + Sync {}

/// Acquires the activation context. Called once per registry.
pub trait PlatformBootstrap: Send + Sync {
    fn initialize(&self) -> Result<Box<dyn ActivationContext>>;
}

/// Bootstrap for platforms (and tests) with no component activation step.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopBootstrap;

struct NoopContext;

impl ActivationContext for NoopContext {}

impl Drop for NoopContext {
    fn drop(&mut self) {
        log::debug!("released no-op activation context");
    }
}

impl PlatformBootstrap for NoopBootstrap {
    fn initialize(&self) -> Result<Box<dyn ActivationContext>> {
        log::debug!("acquired no-op activation context");
        Ok(Box::new(NoopContext))
    }
}
