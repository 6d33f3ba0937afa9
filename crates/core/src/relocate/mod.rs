//! File relocation for completed downloads.
//!
//! A tracked movie may declare a `copyTo` directory; when one of its
//! downloads completes, the file is copied there. Directory creation and
//! copy are one logical operation from the engine's point of view, and both
//! are strictly best-effort: a failure is logged and swallowed, never rolled
//! back into the already-committed state transition.

mod error;
mod fs_relocator;
mod traits;

pub use error::RelocateError;
pub use fs_relocator::FsRelocator;
pub use traits::Relocator;
