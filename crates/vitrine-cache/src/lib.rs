//! Tag-keyed caching for storefront reads.
//!
//! Read handlers register their serialized results under named tags with a
//! coarse TTL; write handlers invalidate exactly the tags whose underlying
//! rows they touched. The cache is an explicit value injected through
//! application state (`get`/`put`/`invalidate`), not ambient framework
//! machinery, so the invalidation contract is independently testable.
//!
//! ```text
//! GET request → TagCache → Storage
//!                  ↓           ↓
//!              <1µs hit    recompute + put
//! ```
//!
//! Invalidation is tag-wide; entries are never partially invalidated.

pub mod backend;
pub mod tags;

pub use backend::{CacheStats, CachedEntry, TagCache};
