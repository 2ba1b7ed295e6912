//! chained-hashmap: a single-threaded hash table built on separate chaining
//! with load-factor driven, threshold-proportional growth.
//!
//! Internal Design:
//!
//! Summary
//! - Storage is one contiguous bucket array (a `Vec` of buckets), each bucket
//!   an append-friendly `Vec` of entries. Colliding keys chain within their
//!   bucket and are disambiguated by `Eq`.
//! - An entry lives at `hash(key) mod capacity` under the current capacity.
//!   Each entry stores its `u64` hash at insertion; rehashing re-indexes from
//!   the stored hash and never calls back into `K: Hash`.
//! - Growth: once `len >= capacity * load_threshold` (evaluated after every
//!   put), the bucket array grows by a `load_threshold` fraction of its
//!   current capacity and every entry is relocated. Capacity never shrinks.
//!
//! Constraints
//! - Single-threaded: mutation takes `&mut self`; a caller that needs shared
//!   access supplies its own exclusion (one lock around the table, or
//!   independently locked shards).
//! - No removal: entries leave the table only when the table itself drops.
//! - `put` and `contains_key` are total; only `get` can fail, with
//!   [`KeyNotFound`] carrying the queried key.
//!
//! Notes and non-goals
//! - Enumeration visits buckets in index order and entries in insertion
//!   order within a bucket; a put that triggers growth may reorder keys
//!   between traversals.
//! - Hash quality is whatever the configured `BuildHasher` provides
//!   (`RandomState` by default).
//! - No persistence, no wire format, no interior mutability, no
//!   process-wide state: every mutable field is owned by one table instance.

mod hash_table;

// Public surface
pub use hash_table::{HashTable, KeyNotFound, Keys, DEFAULT_CAPACITY, DEFAULT_LOAD_THRESHOLD};
