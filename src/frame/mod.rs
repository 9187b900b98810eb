//! Frame Module
//!
//! What agents and other observers see of one tick.
//!
//! ## Module Structure
//!
//! - `character`: Per-combatant state
//! - `attack`: Attacks and projectiles
//! - `audio`: Rendered audio samples
//! - `snapshot`: The immutable per-tick snapshot

pub mod character;
pub mod attack;
pub mod audio;
pub mod snapshot;

// Re-export key types
pub use character::{CharacterData, CharacterState};
pub use attack::{AttackData, AttackType, HitArea};
pub use audio::{AudioData, AudioSource};
pub use snapshot::FrameData;
