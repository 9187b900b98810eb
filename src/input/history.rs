//! Input History
//!
//! Bounded ring buffer of the most recent key frames. The tick loop appends
//! one frame per tick; decoding only ever reads it.

use std::collections::VecDeque;
use serde::{Serialize, Deserialize};

use crate::core::side::PlayerSide;
use crate::input::key::{Key, KeyData, KeySource};

/// Default number of retained frames (one second at 60 FPS).
///
/// A special-move motion is a handful of direction segments; anything older
/// than this cannot affect decoding.
pub const DEFAULT_HISTORY_CAPACITY: usize = 60;

/// Edge detection needs the current and the previous frame.
pub const MIN_HISTORY_CAPACITY: usize = 2;

/// Ordered key frames, oldest at the front, newest at the back.
///
/// `F` is [`KeyData`] for the two-player queue and [`Key`] for a
/// single-player simulation queue; both decode through the same path.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InputHistory<F = KeyData> {
    frames: VecDeque<F>,
    capacity: usize,
}

impl<F> InputHistory<F> {
    /// Create an empty history holding at most `capacity` frames.
    ///
    /// Capacities below [`MIN_HISTORY_CAPACITY`] are raised to it.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(MIN_HISTORY_CAPACITY);
        Self {
            frames: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append the newest frame, evicting the oldest when full.
    pub fn push(&mut self, frame: F) {
        if self.frames.len() == self.capacity {
            self.frames.pop_front();
        }
        self.frames.push_back(frame);
    }

    /// Most recent frame.
    #[inline]
    pub fn latest(&self) -> Option<&F> {
        self.frames.back()
    }

    /// Frame immediately before the most recent one.
    #[inline]
    pub fn previous(&self) -> Option<&F> {
        let len = self.frames.len();
        if len < 2 {
            None
        } else {
            self.frames.get(len - 2)
        }
    }

    /// Frames from newest to oldest.
    pub fn iter_newest(&self) -> impl Iterator<Item = &F> + '_ {
        self.frames.iter().rev()
    }

    /// Number of retained frames.
    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Check if no frame has been recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Maximum number of retained frames.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop every frame (between rounds).
    pub fn clear(&mut self) {
        self.frames.clear();
    }
}

impl<F: KeySource> InputHistory<F> {
    /// One combatant's keys from newest to oldest.
    pub fn channel(&self, side: PlayerSide) -> impl Iterator<Item = Key> + '_ {
        self.iter_newest().map(move |frame| frame.key_for(side))
    }
}

impl<F> Default for InputHistory<F> {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

impl<F> Extend<F> for InputHistory<F> {
    fn extend<I: IntoIterator<Item = F>>(&mut self, iter: I) {
        for frame in iter {
            self.push(frame);
        }
    }
}
