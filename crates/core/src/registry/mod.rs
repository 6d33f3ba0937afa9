//! Tracked movie registry.
//!
//! [`MovieRegistry`] owns the list of tracked movies for the lifetime of the
//! process. It is mutated only by the feed matcher (torrent appends), the
//! completion matcher (`downloaded` flips) and the add/remove engine
//! commands, never concurrently; the engine task serializes all access.

mod in_memory;
mod types;

pub use in_memory::MovieRegistry;
pub use types::{Movie, MovieTorrent};
