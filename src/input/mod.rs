//! Input Module
//!
//! Everything between raw key samples and the action decoder.
//!
//! ## Module Structure
//!
//! - `key`: Per-tick key state of one or both combatants
//! - `lever`: Facing-relative numpad direction
//! - `edge`: Rising-edge button detection
//! - `history`: Bounded ring buffer of recent key frames
//! - `motion`: Run-length compressed motion patterns

pub mod key;
pub mod lever;
pub mod edge;
pub mod history;
pub mod motion;

// Re-export key types
pub use key::{Button, Key, KeyData, KeySource};
pub use lever::Lever;
pub use edge::PushedButtons;
pub use history::{InputHistory, DEFAULT_HISTORY_CAPACITY};
pub use motion::MotionPattern;
