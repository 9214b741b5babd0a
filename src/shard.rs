use foldhash::fast::RandomState;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::collections::HashMap;

/// The mapping held by a single shard.
pub type ShardData = HashMap<String, String, RandomState>;

/// One partition of the key space.
///
/// This struct wraps a `HashMap` protected by a reader/writer lock. The
/// inner map is only ever touched through the guards returned by
/// [`Shard::read`] and [`Shard::write`], so every access — including
/// read-modify-write sequences — happens under the matching lock mode for
/// its full duration.
#[derive(Debug)]
pub struct Shard {
    /// The underlying hashmap protected by an `RwLock`.
    data: RwLock<ShardData>,
}

impl Shard {
    /// Creates a new `Shard` with the specified initial capacity.
    ///
    /// # Arguments
    ///
    /// * `capacity` - The initial capacity of the hashmap.
    ///
    /// # Returns
    ///
    /// A new `Shard` instance with an empty mapping and a fresh lock.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: RwLock::new(HashMap::with_capacity_and_hasher(
                capacity,
                RandomState::default(),
            )),
        }
    }

    /// Acquires this shard's lock in shared mode.
    pub fn read(&self) -> RwLockReadGuard<'_, ShardData> {
        self.data.read()
    }

    /// Acquires this shard's lock in exclusive mode.
    pub fn write(&self) -> RwLockWriteGuard<'_, ShardData> {
        self.data.write()
    }

    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }
}
