//! Motion Patterns
//!
//! Streaming run-length reduction of recent levers into at most four
//! direction segments, newest first. A quarter circle held for any number
//! of ticks per direction compresses to `[6, 3, 2, 5]`.
//!
//! Neutral is the empty-slot sentinel. A neutral run sitting in a slot is
//! overwritten by the next older direction instead of closing the segment,
//! so tapping forward twice (`6, 5, 6`) yields `[6, 6, 5, 5]`.

use serde::{Serialize, Deserialize};

use crate::core::side::PlayerSide;
use crate::input::history::InputHistory;
use crate::input::key::KeySource;
use crate::input::lever::Lever;

/// Number of segments a pattern can hold.
pub const MOTION_SLOTS: usize = 4;

/// Up to four direction segments, slot 0 the most recent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MotionPattern([Lever; MOTION_SLOTS]);

impl MotionPattern {
    /// Pattern with every slot empty.
    pub const EMPTY: MotionPattern = MotionPattern([Lever::Neutral; MOTION_SLOTS]);

    /// Build a pattern from explicit slots.
    pub const fn new(slots: [Lever; MOTION_SLOTS]) -> Self {
        Self(slots)
    }

    /// Compress levers given newest first.
    ///
    /// Stops after the cursor has advanced three times or when the input
    /// runs out, whichever comes first.
    pub fn compress<I>(levers: I) -> Self
    where
        I: IntoIterator<Item = Lever>,
    {
        let mut slots = [Lever::Neutral; MOTION_SLOTS];
        let mut cursor = 0usize;

        for lever in levers {
            if cursor >= MOTION_SLOTS - 1 {
                break;
            }
            if lever == slots[cursor] {
                continue;
            }
            if slots[cursor] != Lever::Neutral {
                cursor += 1;
            }
            slots[cursor] = lever;
        }

        Self(slots)
    }

    /// Compress one combatant's channel of a history.
    pub fn from_history<F: KeySource>(
        history: &InputHistory<F>,
        side: PlayerSide,
        front: bool,
    ) -> Self {
        Self::compress(history.channel(side).map(|key| Lever::from_key(key, front)))
    }

    /// All four slots.
    #[inline]
    pub fn slots(&self) -> [Lever; MOTION_SLOTS] {
        self.0
    }

    /// Slot `index` (0 = newest segment).
    #[inline]
    pub fn get(&self, index: usize) -> Option<Lever> {
        self.0.get(index).copied()
    }

    /// True when the leading slots equal `prefix`.
    pub fn starts_with(&self, prefix: &[Lever]) -> bool {
        prefix.len() <= MOTION_SLOTS && self.0[..prefix.len()] == *prefix
    }

    /// Number of leading non-neutral slots.
    pub fn segments(&self) -> usize {
        self.0.iter().take_while(|lever| **lever != Lever::Neutral).count()
    }
}

impl std::fmt::Display for MotionPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c, d] = self.0;
        write!(f, "({},{},{},{})", a, b, c, d)
    }
}
