//! Map and set types used throughout the crate.
//!
//! The index variants preserve insertion order, which everywhere in this
//! crate is document declaration order; diagnostics therefore come out in
//! the order a reader encounters the offending definitions.

pub type IndexMap<K, V> = indexmap::IndexMap<K, V, ahash::RandomState>;
pub type IndexSet<T> = indexmap::IndexSet<T, ahash::RandomState>;
pub type HashMap<K, V> = std::collections::HashMap<K, V, ahash::RandomState>;
pub type HashSet<T> = std::collections::HashSet<T, ahash::RandomState>;
