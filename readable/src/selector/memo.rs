// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Debug, Formatter, Result},
          sync::{Arc, Mutex, MutexGuard}};

/// Compares by pointer, not by value. Holding the [Arc] keeps the allocation alive, so
/// the address can't be reused by a different map while it sits in a [MemoSlot].
pub struct ByIdentity<T>(pub Arc<T>);

impl<T> PartialEq for ByIdentity<T> {
    fn eq(&self, other: &Self) -> bool { Arc::ptr_eq(&self.0, &other.0) }
}

impl<T> Debug for ByIdentity<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "ByIdentity({:p})", Arc::as_ptr(&self.0))
    }
}

/// Remembers the most recent key and the value that was computed for it.
pub struct MemoSlot<K, V> {
    slot: Mutex<Option<(K, Arc<V>)>>,
}

impl<K, V> Default for MemoSlot<K, V> {
    fn default() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }
}

impl<K: Debug, V> Debug for MemoSlot<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self.lock().as_ref() {
            Some((key, _)) => write!(f, "MemoSlot[{key:?}]"),
            None => write!(f, "MemoSlot[empty]"),
        }
    }
}

impl<K: PartialEq, V> MemoSlot<K, V> {
    /// Returns the cached value if `key` matches the last key, otherwise runs `compute`
    /// and caches its result.
    pub fn get_or_compute(&self, key: K, compute: impl FnOnce(&K) -> V) -> Arc<V> {
        let mut slot = self.lock();
        if let Some((cached_key, value)) = slot.as_ref() {
            if *cached_key == key {
                return Arc::clone(value);
            }
        }
        let value = Arc::new(compute(&key));
        *slot = Some((key, Arc::clone(&value)));
        value
    }
}

impl<K, V> MemoSlot<K, V> {
    /// A panic inside `compute` can't leave the slot half written, so a poisoned lock is
    /// still usable.
    fn lock(&self) -> MutexGuard<'_, Option<(K, Arc<V>)>> {
        match self.slot.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
