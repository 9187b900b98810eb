//! Snapshot Hashing
//!
//! Deterministic digests of frame snapshots, used to check that every
//! consumer of a fanned-out snapshot received the same content and to
//! compare replays tick by tick.

use sha2::{Sha256, Digest};

/// Hash output type (256 bits / 32 bytes)
pub type SnapshotDigest = [u8; 32];

/// Deterministic hasher for snapshot content.
///
/// Wraps SHA-256 with helpers for the scalar types snapshots carry.
/// Order of updates is part of the digest.
pub struct SnapshotHasher {
    hasher: Sha256,
}

impl SnapshotHasher {
    /// Create a new hasher with domain separator.
    pub fn new(domain: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(domain);
        Self { hasher }
    }

    /// Create hasher for frame snapshots.
    pub fn for_frame() -> Self {
        Self::new(b"FIGHTING_CORE_FRAME_V1")
    }

    /// Update with a u8 value.
    #[inline]
    pub fn update_u8(&mut self, value: u8) {
        self.hasher.update([value]);
    }

    /// Update with a u32 value (little-endian).
    #[inline]
    pub fn update_u32(&mut self, value: u32) {
        self.hasher.update(value.to_le_bytes());
    }

    /// Update with an i32 value (little-endian).
    #[inline]
    pub fn update_i32(&mut self, value: i32) {
        self.hasher.update(value.to_le_bytes());
    }

    /// Update with an f32 value (bit pattern, little-endian).
    #[inline]
    pub fn update_f32(&mut self, value: f32) {
        self.hasher.update(value.to_bits().to_le_bytes());
    }

    /// Update with a boolean.
    #[inline]
    pub fn update_bool(&mut self, value: bool) {
        self.update_u8(value as u8);
    }

    /// Update with an optional u32; absence and presence hash differently.
    #[inline]
    pub fn update_opt_u32(&mut self, value: Option<u32>) {
        match value {
            Some(v) => {
                self.update_u8(1);
                self.update_u32(v);
            }
            None => self.update_u8(0),
        }
    }

    /// Finalize and return the digest.
    pub fn finalize(self) -> SnapshotDigest {
        self.hasher.finalize().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_hasher_determinism() {
        let make_hash = || {
            let mut hasher = SnapshotHasher::for_frame();
            hasher.update_u32(100);
            hasher.update_i32(-7);
            hasher.update_f32(0.25);
            hasher.update_bool(true);
            hasher.finalize()
        };

        assert_eq!(make_hash(), make_hash());
    }

    #[test]
    fn test_hash_order_matters() {
        let hash1 = {
            let mut h = SnapshotHasher::new(b"test");
            h.update_u32(1);
            h.update_u32(2);
            h.finalize()
        };

        let hash2 = {
            let mut h = SnapshotHasher::new(b"test");
            h.update_u32(2);
            h.update_u32(1);
            h.finalize()
        };

        assert_ne!(hash1, hash2);
    }

    #[test]
    fn test_option_presence_is_hashed() {
        let absent = {
            let mut h = SnapshotHasher::new(b"test");
            h.update_opt_u32(None);
            h.finalize()
        };
        let zero = {
            let mut h = SnapshotHasher::new(b"test");
            h.update_opt_u32(Some(0));
            h.finalize()
        };

        assert_ne!(absent, zero);
    }

    #[test]
    fn test_domain_separation() {
        let hash1 = SnapshotHasher::new(b"DOMAIN_A").finalize();
        let hash2 = SnapshotHasher::new(b"DOMAIN_B").finalize();

        assert_ne!(hash1, hash2);
    }
}
