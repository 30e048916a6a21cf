//! Utility traits for `HopscotchMap`

use crate::HopscotchMap;
use std::hash::{BuildHasher, Hash};

/// Extension trait for map implementations that provides additional utility
/// methods
pub trait MapExtensions<K, V> {
    /// Returns the keys of the map as a Vec
    fn keys(&self) -> Vec<K>;

    /// Returns the values of the map as a Vec
    fn values(&self) -> Vec<V>;

    /// Returns true if the map contains the given key
    fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: std::borrow::Borrow<Q>,
        Q: Hash + Eq + ?Sized;
}

impl<K, V, S> MapExtensions<K, V> for HopscotchMap<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Clone,
    S: BuildHasher,
{
    fn keys(&self) -> Vec<K> {
        self.iter().map(|(k, _)| k.clone()).collect()
    }

    fn values(&self) -> Vec<V> {
        self.iter().map(|(_, v)| v.clone()).collect()
    }

    fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: std::borrow::Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).is_some()
    }
}
