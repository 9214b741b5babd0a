//! A thread-safe string-to-string hashmap using per-shard locking to reduce contention.
//!
//! # Overview
//! `shardmap` provides a concurrent map from string keys to string values.
//! The key space is partitioned into a fixed number of shards, each guarded
//! by its own reader/writer lock; a deterministic FNV-1a hash routes every
//! key to exactly one shard. Operations on keys in different shards never
//! block each other, and reads on the same shard proceed concurrently.
//!
//! # Features
//! - Thread-safe access with per-shard reader/writer locking
//! - Deterministic key routing, fixed shard count for the map's lifetime
//! - Atomic check-then-insert via `set_if_absent`
//! - Construction from an existing `HashMap` or any pair iterator
//! - No poisoning, locks are released normally on panic
//!
//! # Examples
//! ```
//! use shardmap::ShardMap;
//!
//! let map = ShardMap::new();
//!
//! // Basic operations
//! map.set("key1".to_string(), "42".to_string());
//! assert_eq!(map.get("key1"), Some("42".to_string()));
//! assert!(map.contains_key("key1"));
//!
//! // Insert only when absent
//! assert!(map.set_if_absent("key2".to_string(), "123".to_string()));
//! assert!(!map.set_if_absent("key2".to_string(), "456".to_string()));
//!
//! // Remove a value
//! assert_eq!(map.remove("key1"), Some("42".to_string()));
//! assert_eq!(map.get("key1"), None);
//! assert_eq!(map.len(), 1);
//! ```
mod hash;
mod shard;
#[doc = include_str!("../README.md")]
mod shard_map;

use hash::*;
use shard::*;
pub use shard_map::*;
