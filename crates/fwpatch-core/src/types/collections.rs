//! Hash collections used across the workspace.

/// FxHasher-backed `HashMap`, used for all internal maps.
pub type FxHashMap<K, V> = rustc_hash::FxHashMap<K, V>;

/// FxHasher-backed `HashSet`.
pub type FxHashSet<T> = rustc_hash::FxHashSet<T>;
