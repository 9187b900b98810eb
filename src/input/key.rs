//! Key Frames
//!
//! Raw per-tick directional and button state, as delivered by the input
//! collaborator (keyboard, pad or a remote agent's command channel).

use serde::{Serialize, Deserialize};
use crate::core::side::PlayerSide;

/// One of the three attack buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Button {
    /// Light
    A,
    /// Medium
    B,
    /// Heavy
    C,
}

impl Button {
    /// All buttons, lightest first.
    pub const ALL: [Button; 3] = [Button::A, Button::B, Button::C];

    #[inline]
    const fn flag(self) -> u8 {
        match self {
            Button::A => Key::FLAG_A,
            Button::B => Key::FLAG_B,
            Button::C => Key::FLAG_C,
        }
    }
}

/// Key state of one combatant for a single tick.
///
/// Packed into one byte:
/// - Bits 0-3: up, down, left, right
/// - Bits 4-6: buttons A, B, C
/// - Bit 7: reserved
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(C)]
pub struct Key {
    bits: u8,
}

impl Key {
    /// Up direction bit
    pub const FLAG_UP: u8 = 0x01;
    /// Down direction bit
    pub const FLAG_DOWN: u8 = 0x02;
    /// Left direction bit
    pub const FLAG_LEFT: u8 = 0x04;
    /// Right direction bit
    pub const FLAG_RIGHT: u8 = 0x08;
    /// Button A bit
    pub const FLAG_A: u8 = 0x10;
    /// Button B bit
    pub const FLAG_B: u8 = 0x20;
    /// Button C bit
    pub const FLAG_C: u8 = 0x40;

    const VALID_BITS: u8 = 0x7F;

    /// Nothing held.
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// Build from packed bits; the reserved bit is dropped.
    pub const fn from_bits(bits: u8) -> Self {
        Self { bits: bits & Self::VALID_BITS }
    }

    /// Packed representation.
    #[inline]
    pub const fn bits(&self) -> u8 {
        self.bits
    }

    /// Up held.
    #[inline]
    pub fn up(&self) -> bool {
        self.bits & Self::FLAG_UP != 0
    }

    /// Down held.
    #[inline]
    pub fn down(&self) -> bool {
        self.bits & Self::FLAG_DOWN != 0
    }

    /// Left held.
    #[inline]
    pub fn left(&self) -> bool {
        self.bits & Self::FLAG_LEFT != 0
    }

    /// Right held.
    #[inline]
    pub fn right(&self) -> bool {
        self.bits & Self::FLAG_RIGHT != 0
    }

    /// Whether a button is held this tick (level, not edge).
    #[inline]
    pub fn held(&self, button: Button) -> bool {
        self.bits & button.flag() != 0
    }

    /// Check if nothing is held.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.bits == 0
    }

    /// Set a direction or button bit.
    #[inline]
    fn set_flag(&mut self, flag: u8, pressed: bool) {
        if pressed {
            self.bits |= flag;
        } else {
            self.bits &= !flag;
        }
    }

    /// Set up.
    pub fn set_up(&mut self, pressed: bool) {
        self.set_flag(Self::FLAG_UP, pressed);
    }

    /// Set down.
    pub fn set_down(&mut self, pressed: bool) {
        self.set_flag(Self::FLAG_DOWN, pressed);
    }

    /// Set left.
    pub fn set_left(&mut self, pressed: bool) {
        self.set_flag(Self::FLAG_LEFT, pressed);
    }

    /// Set right.
    pub fn set_right(&mut self, pressed: bool) {
        self.set_flag(Self::FLAG_RIGHT, pressed);
    }

    /// Set a button.
    pub fn set_button(&mut self, button: Button, pressed: bool) {
        self.set_flag(button.flag(), pressed);
    }

    /// Copy of this key with a button held.
    pub fn with_button(mut self, button: Button) -> Self {
        self.set_button(button, true);
        self
    }
}

/// Key state of both combatants for a single tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyData {
    keys: [Key; 2],
}

impl KeyData {
    /// Pair P1's and P2's keys.
    pub const fn new(p1: Key, p2: Key) -> Self {
        Self { keys: [p1, p2] }
    }

    /// Key of one side.
    #[inline]
    pub fn key(&self, side: PlayerSide) -> Key {
        self.keys[side.index()]
    }

    /// Both keys, P1 first.
    pub fn keys(&self) -> [Key; 2] {
        self.keys
    }
}

/// A per-tick frame from which one combatant's key can be read.
///
/// Two-player frames select by side; single-player frames (the internal
/// simulation's own queue) ignore it.
pub trait KeySource {
    /// The key belonging to `side` in this frame.
    fn key_for(&self, side: PlayerSide) -> Key;
}

impl KeySource for KeyData {
    #[inline]
    fn key_for(&self, side: PlayerSide) -> Key {
        self.key(side)
    }
}

impl KeySource for Key {
    #[inline]
    fn key_for(&self, _side: PlayerSide) -> Key {
        *self
    }
}
