pub mod animator;
pub mod constants;
pub mod content;
pub mod field;
pub mod geometry;
pub mod host;
pub mod params;
pub mod particle;
// In-memory host used by this crate's tests; not part of the public API.
#[doc(hidden)]
pub mod testing;

pub use animator::*;
pub use constants::*;
pub use field::*;
pub use geometry::*;
pub use host::*;
pub use params::*;
pub use particle::*;
