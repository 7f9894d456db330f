use serde::{Deserialize, Serialize};
use std::cell::RefCell;

///
/// OpsSnapshot
/// Ephemeral, in-memory counters for config store operations.
///
/// Counters are thread-local and reset with the process; they are a
/// diagnostic surface, not persisted state.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct OpsSnapshot {
    // Operation entrypoints
    pub save_calls: u64,
    pub load_calls: u64,
    pub remove_calls: u64,

    // Outcomes
    pub load_defaults: u64,
    pub parse_failures: u64,
    pub store_errors: u64,
    pub bytes_written: u64,
}

thread_local! {
    static STATE: RefCell<OpsSnapshot> = RefCell::new(OpsSnapshot::default());
}

fn with_state_mut<R>(f: impl FnOnce(&mut OpsSnapshot) -> R) -> R {
    STATE.with(|cell| f(&mut cell.borrow_mut()))
}

pub(crate) fn record_save_call() {
    with_state_mut(|m| m.save_calls += 1);
}

pub(crate) fn record_saved_bytes(bytes: usize) {
    with_state_mut(|m| m.bytes_written += bytes as u64);
}

pub(crate) fn record_load_call() {
    with_state_mut(|m| m.load_calls += 1);
}

pub(crate) fn record_load_default() {
    with_state_mut(|m| m.load_defaults += 1);
}

pub(crate) fn record_remove_call() {
    with_state_mut(|m| m.remove_calls += 1);
}

pub(crate) fn record_parse_failure() {
    with_state_mut(|m| m.parse_failures += 1);
}

pub(crate) fn record_store_error() {
    with_state_mut(|m| m.store_errors += 1);
}

/// Point-in-time copy of the operation counters.
#[must_use]
pub fn snapshot() -> OpsSnapshot {
    STATE.with(|cell| cell.borrow().clone())
}

/// Reset all counters to zero.
pub fn reset() {
    STATE.with(|cell| *cell.borrow_mut() = OpsSnapshot::default());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        db::{ConfigStore, store::MemoryStore},
        model::CollectionConfig,
        path::CollectionPath,
    };

    #[test]
    fn counters_track_store_operations() {
        reset();

        let mut configs = ConfigStore::new(MemoryStore::new());
        let p = CollectionPath::new("products/1/locales").unwrap();

        let _: CollectionConfig = configs.load(&p).unwrap();
        configs.save(&p, &CollectionConfig::default()).unwrap();
        let _: CollectionConfig = configs.load(&p).unwrap();
        configs.remove(&p).unwrap();

        let m = snapshot();
        assert_eq!(m.save_calls, 1);
        assert_eq!(m.load_calls, 2);
        assert_eq!(m.load_defaults, 1);
        assert_eq!(m.remove_calls, 1);
        assert_eq!(m.parse_failures, 0);
        assert_eq!(m.store_errors, 0);
        assert_eq!(m.bytes_written, 2); // "{}"
    }

    #[test]
    fn reset_zeroes_the_counters() {
        record_save_call();
        assert!(snapshot().save_calls >= 1);

        reset();
        assert_eq!(snapshot(), OpsSnapshot::default());
    }
}
