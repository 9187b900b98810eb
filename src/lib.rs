//! # Fighting Core
//!
//! Command recognition and frame snapshots for a two-combatant fighting
//! simulation.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      FIGHTING CORE                           │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Shared primitives                         │
//! │  ├── side.rs     - P1 / P2 identity                          │
//! │  └── hash.rs     - Snapshot digests                          │
//! │                                                              │
//! │  input/          - Raw keys to motion data                   │
//! │  ├── key.rs      - Per-tick key frames                       │
//! │  ├── lever.rs    - Facing-relative numpad directions         │
//! │  ├── edge.rs     - Rising-edge button detection              │
//! │  ├── history.rs  - Bounded key history                       │
//! │  └── motion.rs   - Run-length motion patterns                │
//! │                                                              │
//! │  command/        - Motion data to actions                    │
//! │  ├── action.rs   - Action vocabulary                         │
//! │  ├── table.rs    - Command grammar as decision rows          │
//! │  └── decoder.rs  - Single decode entry point                 │
//! │                                                              │
//! │  frame/          - What observers see                        │
//! │  ├── character.rs- Combatant state                           │
//! │  ├── attack.rs   - Attacks and projectiles                   │
//! │  ├── audio.rs    - Audio samples                             │
//! │  └── snapshot.rs - Immutable per-tick snapshot               │
//! │                                                              │
//! │  game/           - Per-tick orchestration                    │
//! │  └── cycle.rs    - Decode-and-capture loop                   │
//! │                                                              │
//! │  config.rs       - Display mode and round timing             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Determinism
//!
//! Decoding is a pure function of the key history, facing and posture.
//! Snapshots are plain values: once captured they never change, except
//! for the one-way removal of visual data in audio-only display modes.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod core;
pub mod config;
pub mod input;
pub mod command;
pub mod frame;
pub mod game;

// Re-export commonly used types
pub use crate::core::side::PlayerSide;
pub use config::{DisplayMode, GameConfig};
pub use input::{Key, KeyData, Lever, InputHistory, MotionPattern};
pub use command::{Action, CommandDecoder, CommandError};
pub use frame::{CharacterData, CharacterState, AttackData, FrameData};
pub use game::{TickCycle, TickOutput};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Simulation frames per second
pub const FPS: u32 = 60;

/// Frames in one round (60 seconds * 60 fps)
pub const ROUND_FRAME_NUMBER: u32 = 3600;

/// Round length in milliseconds
pub const ROUND_TIME_MS: u32 = 60_000;
