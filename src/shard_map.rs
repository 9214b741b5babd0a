use crate::{fnv1a_32, Shard};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// The number of shards created by [`ShardMap::new`].
pub const DEFAULT_SHARD_COUNT: usize = 32;

/// A thread-safe string-to-string hashmap, partitioned into independently
/// locked shards.
///
/// Every key is routed to exactly one shard by a fixed FNV-1a hash, so
/// operations on keys living in different shards never block each other.
/// Within a shard, standard reader/writer semantics apply: any number of
/// concurrent readers, or a single writer.
pub struct ShardMap {
    /// The vector of shards. Its length is fixed at construction.
    shards: Vec<Shard>,
}

impl Default for ShardMap {
    fn default() -> Self {
        Self::new()
    }
}

impl ShardMap {
    /// Creates a new `ShardMap` with the default number of shards.
    ///
    /// # Returns
    ///
    /// A new, empty `ShardMap` instance.
    pub fn new() -> Self {
        Self::with_capacity_and_shard_amount(0, DEFAULT_SHARD_COUNT)
    }

    /// Creates a new `ShardMap` with the specified initial capacity and the
    /// default number of shards.
    ///
    /// # Arguments
    ///
    /// * `capacity` - The total initial capacity, divided across the shards.
    ///
    /// # Returns
    ///
    /// A new, empty `ShardMap` instance.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_shard_amount(capacity, DEFAULT_SHARD_COUNT)
    }

    /// Creates a new `ShardMap` with the specified initial capacity and
    /// number of shards.
    ///
    /// The shard count is fixed for the lifetime of the map: keys are never
    /// migrated between shards.
    ///
    /// # Arguments
    ///
    /// * `capacity` - The total initial capacity, divided across the shards.
    /// * `shard_amount` - The number of shards to create. Must be non-zero.
    ///
    /// # Returns
    ///
    /// A new, empty `ShardMap` instance.
    pub fn with_capacity_and_shard_amount(capacity: usize, shard_amount: usize) -> Self {
        assert!(shard_amount > 0, "shard amount must be non-zero");
        let shard_capacity = capacity / shard_amount;
        Self {
            shards: (0..shard_amount)
                .map(|_| Shard::with_capacity(shard_capacity))
                .collect::<Vec<_>>(),
        }
    }

    /// Gets the value associated with the given key.
    ///
    /// Acquires the key's shard lock in shared mode, so concurrent `get`s
    /// on the same shard do not block each other.
    ///
    /// # Arguments
    /// * `key` - The key to look up
    ///
    /// # Returns
    /// * `Some(String)` holding a clone of the value if the key exists
    /// * `None` if the key doesn't exist
    ///
    /// # Examples
    /// ```
    /// use shardmap::ShardMap;
    ///
    /// let map = ShardMap::new();
    /// map.set("key".to_string(), "value".to_string());
    /// assert_eq!(map.get("key"), Some("value".to_string()));
    /// assert_eq!(map.get("missing"), None);
    /// ```
    pub fn get(&self, key: &str) -> Option<String> {
        self.shard(key).read().get(key).cloned()
    }

    /// Sets a value in the map, overwriting any previous value for the key.
    ///
    /// Acquires the key's shard lock in exclusive mode.
    ///
    /// # Arguments
    /// * `key` - The key to update
    /// * `value` - The value to set
    ///
    /// # Examples
    /// ```
    /// use shardmap::ShardMap;
    ///
    /// let map = ShardMap::new();
    ///
    /// // Set a value
    /// map.set("key".to_string(), "42".to_string());
    ///
    /// // Update existing value
    /// map.set("key".to_string(), "123".to_string());
    /// assert_eq!(map.get("key"), Some("123".to_string()));
    /// ```
    pub fn set(&self, key: String, value: String) {
        self.shard(&key).write().insert(key, value);
    }

    /// Sets a value only if the key is not already present.
    ///
    /// The existence check and the insert happen under a single exclusive
    /// hold of the shard lock, so no concurrent operation can slip between
    /// them.
    ///
    /// # Arguments
    /// * `key` - The key to insert
    /// * `value` - The value to set if the key is absent
    ///
    /// # Returns
    /// * `true` if the value was inserted
    /// * `false` if the key was already present; the stored value is kept
    ///
    /// # Examples
    /// ```
    /// use shardmap::ShardMap;
    ///
    /// let map = ShardMap::new();
    /// assert!(map.set_if_absent("key".to_string(), "first".to_string()));
    /// assert!(!map.set_if_absent("key".to_string(), "second".to_string()));
    /// assert_eq!(map.get("key"), Some("first".to_string()));
    /// ```
    pub fn set_if_absent(&self, key: String, value: String) -> bool {
        let shard = self.shard(&key);
        let mut data = shard.write();
        match data.entry(key) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                entry.insert(value);
                true
            }
        }
    }

    /// Removes a key from the map.
    ///
    /// Acquires the key's shard lock in exclusive mode.
    ///
    /// # Arguments
    /// * `key` - The key to remove
    ///
    /// # Returns
    /// * `Some(String)` holding the removed value if the key existed
    /// * `None` if the key didn't exist (the call is a no-op)
    ///
    /// # Examples
    /// ```
    /// use shardmap::ShardMap;
    ///
    /// let map = ShardMap::new();
    /// map.set("key".to_string(), "42".to_string());
    /// assert_eq!(map.remove("key"), Some("42".to_string()));
    /// assert_eq!(map.remove("key"), None);
    /// ```
    pub fn remove(&self, key: &str) -> Option<String> {
        self.shard(key).write().remove(key)
    }

    /// Returns `true` if the map contains the given key.
    ///
    /// Acquires the key's shard lock in shared mode; no mutation.
    pub fn contains_key(&self, key: &str) -> bool {
        self.shard(key).read().contains_key(key)
    }

    /// Returns the total number of key-value pairs in the map.
    ///
    /// Each shard is read-locked and counted independently, one after
    /// another. Concurrent mutations during the call can therefore make the
    /// returned total reflect a state the map never held at any single
    /// instant. Callers needing an exact count must stop all writers
    /// externally, which this type does not provide for.
    pub fn len(&self) -> usize {
        self.shards.iter().map(|s| s.len()).sum()
    }

    /// Returns `true` if the map holds no key-value pairs.
    ///
    /// Same weak consistency as [`ShardMap::len`].
    pub fn is_empty(&self) -> bool {
        self.shards.iter().all(|s| s.is_empty())
    }

    /// Returns the number of shards. Constant for the map's lifetime.
    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }

    #[inline(always)]
    fn shard(&self, key: &str) -> &Shard {
        let idx = fnv1a_32(key) as usize % self.shards.len();
        &self.shards[idx]
    }
}

impl From<HashMap<String, String>> for ShardMap {
    /// Builds a `ShardMap` out of an existing plain map.
    ///
    /// Each pair is routed to its shard and inserted under that shard's
    /// exclusive lock, one acquisition per pair; no whole-map lock is ever
    /// taken. If the input held duplicate keys the last write wins, with no
    /// defined iteration order.
    fn from(data: HashMap<String, String>) -> Self {
        let map = Self::with_capacity(data.len());
        for (key, value) in data {
            map.set(key, value);
        }
        map
    }
}

impl FromIterator<(String, String)> for ShardMap {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        let map = Self::new();
        for (key, value) in iter {
            map.set(key, value);
        }
        map
    }
}
