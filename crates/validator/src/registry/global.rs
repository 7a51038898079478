//! Process-wide registry snapshot
//!
//! Validation loads the current [`Registry`] without locking. Changes go
//! through [`configure`]: the current snapshot is copied into a builder,
//! the closure edits it, and the rebuilt registry is swapped in. A failed
//! closure or build installs nothing. Writers are serialized so concurrent
//! `configure` calls never lose each other's edits.
//!
//! The closure must not call back into this module. A nested write on the
//! same thread fails with [`Error::Config`] instead of waiting on itself.

use std::cell::Cell;
use std::sync::{Arc, LazyLock};

use arc_swap::ArcSwap;
use parking_lot::{Mutex, MutexGuard};
use tracing::{debug, warn};

use super::{Descriptor, Registry, RegistryBuilder};
use crate::error::{Error, Result};
use crate::message::MessageSet;

static GLOBAL_REGISTRY: LazyLock<ArcSwap<Registry>> =
    LazyLock::new(|| ArcSwap::from_pointee(Registry::builtin()));

static WRITE_LOCK: Mutex<()> = Mutex::new(());

thread_local! {
    static WRITING: Cell<bool> = const { Cell::new(false) };
}

/// The writer lock, held by at most one frame per thread.
struct WriteGuard {
    _lock: MutexGuard<'static, ()>,
}

impl WriteGuard {
    fn acquire() -> Result<Self> {
        if WRITING.get() {
            warn!("nested global registry write rejected");
            return Err(Error::config("registry is already being configured"));
        }
        let lock = WRITE_LOCK.lock();
        WRITING.set(true);
        Ok(Self { _lock: lock })
    }
}

impl Drop for WriteGuard {
    fn drop(&mut self) {
        WRITING.set(false);
    }
}

/// The current registry snapshot.
pub fn global() -> Arc<Registry> {
    GLOBAL_REGISTRY.load_full()
}

/// Replaces the global registry.
pub fn install(registry: Registry) -> Result<()> {
    let _guard = WriteGuard::acquire()?;
    debug!(validators = registry.len(), "installing global registry");
    GLOBAL_REGISTRY.store(Arc::new(registry));
    Ok(())
}

/// Restores the built-in registry.
pub fn reset() -> Result<()> {
    install(Registry::builtin())
}

/// Edits the global registry.
pub fn configure<F>(edit: F) -> Result<()>
where
    F: FnOnce(&mut RegistryBuilder) -> Result<()>,
{
    let _guard = WriteGuard::acquire()?;
    let mut builder = GLOBAL_REGISTRY.load().to_builder();
    edit(&mut builder)?;
    let registry = builder.build()?;
    debug!(validators = registry.len(), "installing global registry");
    GLOBAL_REGISTRY.store(Arc::new(registry));
    Ok(())
}

pub fn register(descriptor: Descriptor) -> Result<()> {
    configure(|b| b.register(descriptor).map(|_| ()))
}

pub fn replace(descriptor: Descriptor) -> Result<()> {
    configure(|b| {
        b.replace(descriptor);
        Ok(())
    })
}

pub fn set_custom_message(key: &str, text: impl Into<String>) -> Result<()> {
    configure(|b| b.set_custom_message(key, text).map(|_| ()))
}

pub fn set_custom_negated_message(key: &str, text: impl Into<String>) -> Result<()> {
    configure(|b| b.set_custom_negated_message(key, text).map(|_| ()))
}

pub fn set_custom_messages(key: &str, messages: MessageSet) -> Result<()> {
    configure(|b| b.set_custom_messages(key, messages).map(|_| ()))
}

pub fn clear_custom_messages(key: &str) -> Result<()> {
    configure(|b| b.clear_custom_messages(key).map(|_| ()))
}

pub fn load_locale(name: &str) -> Result<()> {
    configure(|b| b.load_locale(name).map(|_| ()))
}
