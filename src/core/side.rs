//! Player Side
//!
//! Which of the two combatants a key channel, character or projectile
//! belongs to.

use serde::{Serialize, Deserialize};

/// One of the two combatants in a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum PlayerSide {
    /// Player one (array index 0)
    P1 = 0,
    /// Player two (array index 1)
    P2 = 1,
}

impl PlayerSide {
    /// Both sides in index order.
    pub const BOTH: [PlayerSide; 2] = [PlayerSide::P1, PlayerSide::P2];

    /// Array index for per-player pairs.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The other combatant.
    #[inline]
    pub const fn opponent(self) -> PlayerSide {
        match self {
            PlayerSide::P1 => PlayerSide::P2,
            PlayerSide::P2 => PlayerSide::P1,
        }
    }

    /// Side from a pair index (0 or 1).
    pub fn from_index(index: usize) -> Option<PlayerSide> {
        match index {
            0 => Some(PlayerSide::P1),
            1 => Some(PlayerSide::P2),
            _ => None,
        }
    }
}

impl std::fmt::Display for PlayerSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerSide::P1 => write!(f, "P1"),
            PlayerSide::P2 => write!(f, "P2"),
        }
    }
}
