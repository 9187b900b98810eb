//! Command Module
//!
//! Action vocabulary, the command grammar and the decoder that applies it.
//!
//! ## Module Structure
//!
//! - `action`: Every action a combatant can request
//! - `table`: The grammar as ordered decision rows
//! - `decoder`: Key history to action

pub mod action;
pub mod table;
pub mod decoder;

// Re-export key types
pub use action::Action;
pub use table::{ActionTable, ButtonTier, CommandInput, Regime, SpecialMotion};
pub use decoder::{CommandDecoder, CommandError};
