//! Core primitives shared by input decoding and frame capture.

pub mod side;
pub mod hash;

// Re-export core types
pub use side::PlayerSide;
pub use hash::{SnapshotDigest, SnapshotHasher};
