//! Decode-and-Capture Cycle
//!
//! Per-tick orchestration around the physics step:
//!
//! 1. Append the tick's key frame to the shared history.
//! 2. Decode an action for each combatant.
//! 3. Capture a snapshot of the state physics left behind.
//! 4. Advance the frame counter.
//!
//! Physics itself lives outside this crate; it consumes the decoded
//! actions and hands back the characters and projectiles for the next
//! capture.

use tracing::{info, trace};

use crate::command::action::Action;
use crate::command::decoder::{CommandDecoder, CommandError};
use crate::config::GameConfig;
use crate::core::side::PlayerSide;
use crate::frame::attack::AttackData;
use crate::frame::audio::AudioSource;
use crate::frame::character::CharacterData;
use crate::frame::snapshot::FrameData;
use crate::input::history::InputHistory;
use crate::input::key::KeyData;

/// Result of one cycle.
#[derive(Clone, Debug, PartialEq)]
pub struct TickOutput {
    /// Decoded action per side (P1 at index 0)
    pub actions: [Action; 2],
    /// Snapshot captured this tick
    pub frame: FrameData,
    /// Whether this tick used up the round's time
    pub round_ended: bool,
}

impl TickOutput {
    /// Decoded action for one side.
    #[inline]
    pub fn action(&self, side: PlayerSide) -> Action {
        self.actions[side.index()]
    }

    /// The snapshot as agents may see it under the captured display mode.
    pub fn agent_view(&self) -> FrameData {
        let mut view = self.frame.clone();
        view.remove_visual_data();
        view
    }
}

/// Shared key history plus round counters for one fight.
pub struct TickCycle {
    config: GameConfig,
    decoder: CommandDecoder,
    history: InputHistory<KeyData>,
    frame_number: u32,
    round: u32,
    last_frame: FrameData,
}

impl TickCycle {
    /// Start the first round.
    pub fn new(config: GameConfig) -> Self {
        Self::with_decoder(config, CommandDecoder::new())
    }

    /// Start the first round with a custom decoder.
    pub fn with_decoder(config: GameConfig, decoder: CommandDecoder) -> Self {
        Self {
            config,
            decoder,
            history: InputHistory::new(config.history_capacity),
            frame_number: 0,
            round: 1,
            last_frame: FrameData::empty(config),
        }
    }

    /// Run one cycle.
    pub fn step(
        &mut self,
        keys: KeyData,
        characters: &[CharacterData; 2],
        projectiles: &[AttackData],
        audio: Option<&dyn AudioSource>,
    ) -> Result<TickOutput, CommandError> {
        self.history.push(keys);

        let mut actions = [Action::Stand; 2];
        for side in PlayerSide::BOTH {
            actions[side.index()] = self.decoder.decode(&self.history, &characters[side.index()])?;
        }

        trace!(
            frame = self.frame_number,
            p1 = %actions[0],
            p2 = %actions[1],
            "decoded actions"
        );

        let frame = FrameData::capture(
            self.config,
            characters,
            projectiles,
            self.frame_number,
            self.round,
            audio,
        );
        self.last_frame = frame.clone();
        self.frame_number += 1;

        let round_ended = self.is_round_over();
        if round_ended {
            info!(round = self.round, frames = self.frame_number, "round time up");
        }

        Ok(TickOutput {
            actions,
            frame,
            round_ended,
        })
    }

    /// Begin the next round: counters reset, history cleared.
    pub fn start_next_round(&mut self) {
        self.round += 1;
        self.frame_number = 0;
        self.history.clear();
        info!(round = self.round, "round started");
    }

    /// True once the round's frames are used up. Never in training mode.
    pub fn is_round_over(&self) -> bool {
        !self.config.unlimited_time && self.frame_number >= self.config.round_frames
    }

    /// Snapshot of the latest tick (empty before the first one).
    pub fn last_frame(&self) -> &FrameData {
        &self.last_frame
    }

    /// Frame number the next tick will be captured at.
    pub fn frame_number(&self) -> u32 {
        self.frame_number
    }

    /// Current round.
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Key history shared by both combatants.
    pub fn history(&self) -> &InputHistory<KeyData> {
        &self.history
    }

    /// Settings in use.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}
