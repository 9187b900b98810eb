//! Lever Normalization
//!
//! Maps raw up/down/left/right bits plus facing onto numpad notation:
//!
//! ```text
//! 7 8 9
//! 4 5 6
//! 1 2 3
//! ```
//!
//! 6 is always "toward the opponent" and 4 "away", whichever side of the
//! arena the combatant stands on.

use serde::{Serialize, Deserialize};
use crate::input::key::Key;

/// Facing-relative direction in numpad notation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Lever {
    /// 1
    DownBack = 1,
    /// 2
    Down = 2,
    /// 3
    DownForward = 3,
    /// 4
    Back = 4,
    /// 5, also the "nothing recorded" sentinel in motion patterns
    #[default]
    Neutral = 5,
    /// 6
    Forward = 6,
    /// 7
    UpBack = 7,
    /// 8
    Up = 8,
    /// 9
    UpForward = 9,
}

impl Lever {
    /// All levers in numpad order.
    pub const ALL: [Lever; 9] = [
        Lever::DownBack,
        Lever::Down,
        Lever::DownForward,
        Lever::Back,
        Lever::Neutral,
        Lever::Forward,
        Lever::UpBack,
        Lever::Up,
        Lever::UpForward,
    ];

    /// Normalize a key for a combatant facing right (`front == true`) or left.
    ///
    /// Directions are summed from neutral, so opposing inputs cancel:
    /// up+down reads as no vertical input and left+right as no horizontal one.
    pub fn from_key(key: Key, front: bool) -> Lever {
        let mut value: u8 = 5;
        if key.down() {
            value -= 3;
        }
        if key.up() {
            value += 3;
        }
        if key.left() {
            value = if front { value - 1 } else { value + 1 };
        }
        if key.right() {
            value = if front { value + 1 } else { value - 1 };
        }

        // value stays within 1..=9 for every bit combination
        Lever::from_numpad(value).unwrap_or(Lever::Neutral)
    }

    /// Numpad digit.
    #[inline]
    pub const fn numpad(self) -> u8 {
        self as u8
    }

    /// Lever from a numpad digit (1-9).
    pub fn from_numpad(value: u8) -> Option<Lever> {
        match value {
            1 => Some(Lever::DownBack),
            2 => Some(Lever::Down),
            3 => Some(Lever::DownForward),
            4 => Some(Lever::Back),
            5 => Some(Lever::Neutral),
            6 => Some(Lever::Forward),
            7 => Some(Lever::UpBack),
            8 => Some(Lever::Up),
            9 => Some(Lever::UpForward),
            _ => None,
        }
    }

    /// The same physical input read with the opposite facing.
    pub fn mirrored(self) -> Lever {
        match self {
            Lever::DownBack => Lever::DownForward,
            Lever::DownForward => Lever::DownBack,
            Lever::Back => Lever::Forward,
            Lever::Forward => Lever::Back,
            Lever::UpBack => Lever::UpForward,
            Lever::UpForward => Lever::UpBack,
            vertical => vertical,
        }
    }

    /// Raw direction bits that produce this lever for the given facing.
    pub fn to_key(self, front: bool) -> Key {
        let value = self.numpad();
        let mut key = Key::new();
        key.set_down(value <= 3);
        key.set_up(value >= 7);

        // column 0 is back, column 2 is forward
        let points_right = match (value - 1) % 3 {
            0 => Some(!front),
            2 => Some(front),
            _ => None,
        };
        match points_right {
            Some(true) => key.set_right(true),
            Some(false) => key.set_left(true),
            None => {}
        }
        key
    }
}

impl std::fmt::Display for Lever {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.numpad())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(up: bool, down: bool, left: bool, right: bool) -> Key {
        let mut key = Key::new();
        key.set_up(up);
        key.set_down(down);
        key.set_left(left);
        key.set_right(right);
        key
    }

    #[test]
    fn test_forward_independent_of_side() {
        // facing right: right is forward
        assert_eq!(Lever::from_key(key(false, false, false, true), true), Lever::Forward);
        // facing left: left is forward
        assert_eq!(Lever::from_key(key(false, false, true, false), false), Lever::Forward);
        assert_eq!(Lever::from_key(key(false, false, true, false), true), Lever::Back);
    }

    #[test]
    fn test_diagonals() {
        assert_eq!(Lever::from_key(key(false, true, false, true), true), Lever::DownForward);
        assert_eq!(Lever::from_key(key(false, true, true, false), true), Lever::DownBack);
        assert_eq!(Lever::from_key(key(true, false, true, false), true), Lever::UpBack);
        assert_eq!(Lever::from_key(key(true, false, false, true), false), Lever::UpBack);
        assert_eq!(Lever::from_key(key(true, false, false, false), false), Lever::Up);
    }

    #[test]
    fn test_opposites_cancel() {
        assert_eq!(Lever::from_key(key(true, true, false, false), true), Lever::Neutral);
        assert_eq!(Lever::from_key(key(false, false, true, true), false), Lever::Neutral);
        assert_eq!(Lever::from_key(key(true, true, true, false), true), Lever::Back);
        assert_eq!(Lever::from_key(key(false, true, true, true), true), Lever::Down);
    }

    #[test]
    fn test_every_bit_combination_resolves() {
        for bits in 0u8..16 {
            let raw = Key::from_bits(bits);
            for front in [true, false] {
                let lever = Lever::from_key(raw, front);
                assert!((1..=9).contains(&lever.numpad()));
            }
        }
    }

    #[test]
    fn test_facing_flip_mirrors() {
        for bits in 0u8..16 {
            let raw = Key::from_bits(bits);
            assert_eq!(Lever::from_key(raw, false), Lever::from_key(raw, true).mirrored());
        }
        assert_eq!(Lever::Down.mirrored(), Lever::Down);
        assert_eq!(Lever::Up.mirrored(), Lever::Up);
        assert_eq!(Lever::Neutral.mirrored(), Lever::Neutral);
    }

    #[test]
    fn test_to_key_inverts_from_key() {
        for lever in Lever::ALL {
            for front in [true, false] {
                assert_eq!(Lever::from_key(lever.to_key(front), front), lever);
            }
        }
    }
}
