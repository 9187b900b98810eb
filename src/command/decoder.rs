//! Command Decoder
//!
//! Turns one combatant's recent key history into the action it requests
//! this tick:
//!
//! 1. Rising-edge detection on the two newest key frames.
//! 2. Lever of the newest frame, relative to facing.
//! 3. Motion compression over the whole history, newest first.
//! 4. Table lookup keyed on buttons, lever, motion and posture.
//!
//! Stateless: all state lives in the history passed in.

use std::iter;

use tracing::{debug, trace};

use crate::command::action::Action;
use crate::command::table::{ActionTable, CommandInput};
use crate::frame::character::{CharacterData, CharacterState};
use crate::input::edge::PushedButtons;
use crate::input::history::InputHistory;
use crate::input::key::{Key, KeySource};
use crate::input::lever::Lever;
use crate::input::motion::MotionPattern;

/// Decoding errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// Nothing has been recorded yet.
    #[error("Input history is empty")]
    EmptyHistory,
}

/// Maps key histories to actions through an [`ActionTable`].
#[derive(Clone, Copy, Debug, Default)]
pub struct CommandDecoder {
    table: ActionTable,
}

impl CommandDecoder {
    /// Decoder over the standard command grammar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decoder over a custom table.
    pub fn with_table(table: ActionTable) -> Self {
        Self { table }
    }

    /// The table in use.
    pub fn table(&self) -> &ActionTable {
        &self.table
    }

    /// Decode the action `character` requests this tick.
    ///
    /// Reads the character's own channel of `history`, so the same call
    /// serves a two-player [`KeyData`](crate::input::KeyData) history and a
    /// single-player [`Key`] history.
    pub fn decode<F: KeySource>(
        &self,
        history: &InputHistory<F>,
        character: &CharacterData,
    ) -> Result<Action, CommandError> {
        self.decode_keys(history.channel(character.player), character.front, character.state)
    }

    /// Decode from one channel of keys given newest first.
    pub fn decode_keys<I>(
        &self,
        newest_first: I,
        front: bool,
        state: CharacterState,
    ) -> Result<Action, CommandError>
    where
        I: IntoIterator<Item = Key>,
    {
        let mut keys = newest_first.into_iter().peekable();
        let current = keys.next().ok_or(CommandError::EmptyHistory)?;
        let previous = keys.peek().copied();

        let input = CommandInput {
            pushed: PushedButtons::detect(current, previous),
            lever: Lever::from_key(current, front),
            pattern: MotionPattern::compress(
                iter::once(current).chain(keys).map(|key| Lever::from_key(key, front)),
            ),
            state,
        };

        Ok(self.resolve(&input))
    }

    /// Look up an assembled input, falling back to `Stand` where the table
    /// has no row.
    pub fn resolve(&self, input: &CommandInput) -> Action {
        #[cfg(feature = "debug-tracing")]
        trace!(
            lever = %input.lever,
            pattern = %input.pattern,
            state = ?input.state,
            "decoding"
        );

        let action = match self.table.lookup(input) {
            Some(action) => action,
            None => {
                debug!(
                    lever = %input.lever,
                    pattern = %input.pattern,
                    "no table row for input, standing"
                );
                Action::Stand
            }
        };

        trace!(%action, "decoded");
        action
    }
}
