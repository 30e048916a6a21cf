//! # Hopscotch Hash Map
//!
//! A Rust implementation of a hash table with a bounded probe neighborhood.
//!
//! Every entry is kept within a small cyclic distance of the bucket its key
//! hashes to, so a lookup scans a short fixed window of slots instead of an
//! unbounded probe sequence. When no free slot exists in range, insertion
//! relocates existing entries toward one (a displacement cascade); only when
//! a neighborhood is genuinely too dense does the bound itself double.
//! Capacity doubles whenever occupancy would exceed one half.
//!
//! Duplicate-key insertion is a deliberate no-op that keeps the first value;
//! the `get_or_insert_*` accessors are the insert-or-update path.
//!
//! ## Basic Usage
//!
//! ```rust
//! use hopscotch::HopscotchMap;
//!
//! // Create a new map
//! let mut map = HopscotchMap::new();
//!
//! // Insert values
//! map.insert("apple".to_string(), 1);
//! map.insert("banana".to_string(), 2);
//!
//! // Retrieve values
//! assert_eq!(map.get("apple"), Some(&1));
//!
//! // Inserting an existing key keeps the resident value
//! map.insert("apple".to_string(), 10);
//! assert_eq!(map.get("apple"), Some(&1));
//!
//! // The index-style accessor is the insert-or-update path
//! *map.get_or_insert_default("apple".to_string()) = 10;
//! assert_eq!(map.get("apple"), Some(&10));
//!
//! // Remove values
//! map.remove("apple");
//! assert_eq!(map.get("apple"), None);
//! ```
//!
//! ## Building from pairs
//!
//! ```rust
//! use hopscotch::HopscotchMap;
//!
//! // The first occurrence of a key wins
//! let map: HopscotchMap<&str, i32> =
//!     [("a", 1), ("a", 2), ("b", 3)].into_iter().collect();
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.try_get(&"a"), Ok(&1));
//! ```

/// Module implementing the bounded-neighborhood hash map
mod hopscotch_map;
/// Utility traits for the hash map
mod utils;

pub use hopscotch_map::{HopscotchMap, Iter, KeyNotFound};
pub use utils::MapExtensions;
