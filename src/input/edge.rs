//! Button Edge Detection
//!
//! A button counts only on the tick it goes down. Holding it afterwards
//! does nothing until it is released and pressed again.

use serde::{Serialize, Deserialize};
use crate::input::key::{Button, Key};

/// Buttons freshly pressed this tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PushedButtons {
    /// A (light) went down this tick
    pub a: bool,
    /// B (medium) went down this tick
    pub b: bool,
    /// C (heavy) went down this tick
    pub c: bool,
}

impl PushedButtons {
    /// Rising edges between `previous` and `current`.
    ///
    /// Without a previous frame the current state is taken as-is, so a
    /// button held on the very first recorded tick counts as pressed.
    pub fn detect(current: Key, previous: Option<Key>) -> Self {
        let edge = |button: Button| match previous {
            Some(prev) => current.held(button) && !prev.held(button),
            None => current.held(button),
        };

        Self {
            a: edge(Button::A),
            b: edge(Button::B),
            c: edge(Button::C),
        }
    }

    /// Whether a particular button was pushed.
    #[inline]
    pub fn pushed(&self, button: Button) -> bool {
        match button {
            Button::A => self.a,
            Button::B => self.b,
            Button::C => self.c,
        }
    }

    /// Check if any button was pushed.
    #[inline]
    pub fn any(&self) -> bool {
        self.a || self.b || self.c
    }
}
