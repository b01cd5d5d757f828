//! Lock helpers shared by the field and its elements.
//!
//! A panicking listener can never poison these locks because listeners run
//! after every guard is released, but a panic inside a mutation closure
//! could. The guarded data is plain values that stay consistent across such
//! a panic, so poisoned guards are recovered instead of propagated.
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

pub(crate) fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

pub(crate) fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}
