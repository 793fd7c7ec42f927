use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::{Error, Result};

/// A collection mapping keys to values in which each key maps to exactly one value.
///
/// Unlike `HashMap::insert`, inserting an already-present key is an error: callers
/// that want to replace a mapping must `remove` it first.
pub trait KeyValueMap<K, V> {
    /// Adds a new key/value mapping, failing with `DuplicateKey` if the key is present
    fn insert(&mut self, key: K, value: V) -> Result<()>;

    /// Returns true if the key maps to a value
    fn contains_key(&self, key: &K) -> bool;

    /// Retrieves the value a key maps to
    fn get(&self, key: &K) -> Result<&V>;

    /// Removes the mapping for a key and returns its value
    fn remove(&mut self, key: &K) -> Result<V>;

    /// Removes all mappings
    fn clear(&mut self);

    /// Returns the number of keys stored
    fn len(&self) -> usize;

    /// Returns true if no keys are stored
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// `KeyValueMap` backed by a `std::collections::HashMap`
#[derive(Debug, Clone)]
pub struct HashTableMap<K, V>
where
    K: Eq + Hash + Debug,
{
    base: HashMap<K, V>,
}

impl<K, V> HashTableMap<K, V>
where
    K: Eq + Hash + Debug,
{
    /// Creates a new empty map
    pub fn new() -> Self {
        HashTableMap {
            base: HashMap::new(),
        }
    }

    /// Creates a new empty map with room for at least `capacity` keys
    pub fn with_capacity(capacity: usize) -> Self {
        HashTableMap {
            base: HashMap::with_capacity(capacity),
        }
    }

    /// Returns the number of keys the map can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.base.capacity()
    }
}

impl<K, V> Default for HashTableMap<K, V>
where
    K: Eq + Hash + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> KeyValueMap<K, V> for HashTableMap<K, V>
where
    K: Eq + Hash + Debug,
{
    fn insert(&mut self, key: K, value: V) -> Result<()> {
        if self.base.contains_key(&key) {
            return Err(Error::DuplicateKey(format!("{:?}", key)));
        }
        self.base.insert(key, value);
        Ok(())
    }

    fn contains_key(&self, key: &K) -> bool {
        self.base.contains_key(key)
    }

    fn get(&self, key: &K) -> Result<&V> {
        self.base
            .get(key)
            .ok_or_else(|| Error::KeyNotFound(format!("{:?}", key)))
    }

    fn remove(&mut self, key: &K) -> Result<V> {
        self.base
            .remove(key)
            .ok_or_else(|| Error::KeyNotFound(format!("{:?}", key)))
    }

    fn clear(&mut self) {
        self.base.clear();
    }

    fn len(&self) -> usize {
        self.base.len()
    }
}
