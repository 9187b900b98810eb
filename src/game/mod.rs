//! Game Loop Module
//!
//! Glue between the input side and the physics side of a fight.
//!
//! ## Module Structure
//!
//! - `cycle`: Per-tick decode-and-capture loop

pub mod cycle;

// Re-export key types
pub use cycle::{TickCycle, TickOutput};
