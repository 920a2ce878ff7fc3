use std::hash::BuildHasherDefault;

use dashmap::DashMap;
use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxHasher;

pub type FxIndexSet<T> = IndexSet<T, BuildHasherDefault<FxHasher>>;
pub type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;

/// Concurrent map shared between serialize calls running on different threads.
pub type FxDashMap<K, V> = DashMap<K, V, BuildHasherDefault<FxHasher>>;
