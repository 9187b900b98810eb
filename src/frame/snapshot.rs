//! Frame Snapshots
//!
//! Immutable capture of one tick: both characters, live projectiles, one
//! audio sample and the frame/round counters. Everything is copied in at
//! capture time and copied out by the accessors, so a snapshot handed to a
//! consumer never changes underneath it and cannot be used to reach live
//! game state.
//!
//! The only mutation after capture is [`FrameData::remove_visual_data`],
//! which strips positional data for the audio-only display modes.

use serde::{Serialize, Deserialize};
use tracing::trace;

use crate::config::{DisplayMode, GameConfig};
use crate::core::hash::{SnapshotDigest, SnapshotHasher};
use crate::core::side::PlayerSide;
use crate::frame::attack::AttackData;
use crate::frame::audio::{AudioData, AudioSource};
use crate::frame::character::CharacterData;

/// Observable state of one tick.
///
/// `Clone` is the copy operation for fan-out: every field is a value, so a
/// clone shares nothing with the original.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrameData {
    /// P1 at index 0, P2 at index 1
    characters: [Option<CharacterData>; 2],

    /// Frame of the current round
    frame_number: Option<u32>,

    /// Current round
    round: Option<u32>,

    /// Live projectiles of both characters
    projectiles: Vec<AttackData>,

    /// Nothing was captured
    empty: bool,

    /// Audio of this tick (empty unless rendered)
    audio: AudioData,

    /// Hit points, cached at capture
    hp: Option<[i32; 2]>,

    /// Facing, cached at capture
    front: Option<[bool; 2]>,

    /// Settings the snapshot was captured under
    config: GameConfig,
}

impl FrameData {
    /// Placeholder used before the first tick.
    pub fn empty(config: GameConfig) -> Self {
        Self {
            characters: [None, None],
            frame_number: None,
            round: None,
            projectiles: Vec::new(),
            empty: true,
            audio: AudioData::default(),
            hp: None,
            front: None,
            config,
        }
    }

    /// Capture the current tick.
    ///
    /// Characters and projectiles are copied. Audio is sampled only when a
    /// source is given and the display mode renders audio.
    pub fn capture<'a, P>(
        config: GameConfig,
        characters: &[CharacterData; 2],
        projectiles: P,
        frame_number: u32,
        round: u32,
        audio: Option<&dyn AudioSource>,
    ) -> Self
    where
        P: IntoIterator<Item = &'a AttackData>,
    {
        let audio = match audio {
            Some(source) if config.mode.renders_audio() => source.sample_audio(),
            _ => AudioData::default(),
        };

        let [p1, p2] = *characters;
        debug_assert!(
            p1.player == PlayerSide::P1 && p2.player == PlayerSide::P2,
            "characters must be ordered P1, P2"
        );
        let snapshot = Self {
            characters: [Some(p1), Some(p2)],
            frame_number: Some(frame_number),
            round: Some(round),
            projectiles: projectiles.into_iter().copied().collect(),
            empty: false,
            audio,
            hp: Some([p1.hp, p2.hp]),
            front: Some([p1.front, p2.front]),
            config,
        };

        trace!(
            frame = frame_number,
            round,
            projectiles = snapshot.projectiles.len(),
            audio = !snapshot.audio.is_empty(),
            "captured frame"
        );

        snapshot
    }

    /// Strip visual data for the audio-only display modes.
    ///
    /// Characters, counters and projectiles are dropped; `AudioPlay` also
    /// zeroes the cached hit points. No-op in `Visual` mode. Applying it
    /// again changes nothing.
    pub fn remove_visual_data(&mut self) {
        if !self.config.mode.is_audio_only() {
            return;
        }

        self.characters = [None, None];
        self.frame_number = None;
        self.round = None;
        self.projectiles.clear();
        if self.config.mode.hides_hp() {
            if let Some(hp) = self.hp.as_mut() {
                *hp = [0, 0];
            }
        }
    }

    /// Copy of a character, `None` when not captured or redacted.
    pub fn character(&self, side: PlayerSide) -> Option<CharacterData> {
        self.characters[side.index()]
    }

    /// Cached hit points, `None` when nothing was captured.
    pub fn hp(&self, side: PlayerSide) -> Option<i32> {
        self.hp.map(|hp| hp[side.index()])
    }

    /// Cached facing (true = right), `None` when nothing was captured.
    pub fn is_front(&self, side: PlayerSide) -> Option<bool> {
        self.front.map(|front| front[side.index()])
    }

    /// Copies of every projectile. Empty in audio-only modes.
    pub fn projectiles(&self) -> Vec<AttackData> {
        if self.config.mode.is_audio_only() {
            return Vec::new();
        }
        self.projectiles.clone()
    }

    /// Copies of one side's projectiles. Empty in audio-only modes.
    pub fn projectiles_by(&self, side: PlayerSide) -> Vec<AttackData> {
        if self.config.mode.is_audio_only() {
            return Vec::new();
        }
        self.projectiles
            .iter()
            .filter(|attack| attack.is_owned_by(side))
            .copied()
            .collect()
    }

    /// Horizontal distance between the characters' centers.
    ///
    /// 0 in audio-only modes and when either character is absent.
    pub fn distance_x(&self) -> i32 {
        self.distance_by(CharacterData::center_x)
    }

    /// Vertical distance between the characters' centers.
    ///
    /// 0 in audio-only modes and when either character is absent.
    pub fn distance_y(&self) -> i32 {
        self.distance_by(CharacterData::center_y)
    }

    fn distance_by(&self, axis: fn(&CharacterData) -> i32) -> i32 {
        if self.config.mode.is_audio_only() {
            return 0;
        }
        match &self.characters {
            [Some(p1), Some(p2)] => clamp_i32((i64::from(axis(p1)) - i64::from(axis(p2))).abs()),
            _ => 0,
        }
    }

    /// Expected time left in the round, in milliseconds.
    ///
    /// `i32::MAX` in training mode. A snapshot without a frame number
    /// counts as frame 0.
    pub fn remaining_time_millis(&self) -> i32 {
        if self.config.unlimited_time {
            return i32::MAX;
        }
        let frame = self.frame_number.unwrap_or(0) as f64;
        let elapsed_ms = (frame / self.config.fps as f64 * 1000.0) as i64;
        clamp_i32(i64::from(self.config.round_time_ms).saturating_sub(elapsed_ms))
    }

    /// Expected time left in the round, in whole seconds (rounded up).
    ///
    /// `i32::MAX` in training mode.
    pub fn remaining_time_seconds(&self) -> i32 {
        if self.config.unlimited_time {
            return i32::MAX;
        }
        (self.remaining_time_millis() as f64 / 1000.0).ceil() as i32
    }

    /// Frames left in the round. `i32::MAX` in training mode.
    pub fn remaining_frames(&self) -> i32 {
        if self.config.unlimited_time {
            return i32::MAX;
        }
        clamp_i32(i64::from(self.config.round_frames) - i64::from(self.frame_number.unwrap_or(0)))
    }

    /// Frames since the start of the round.
    pub fn frame_number(&self) -> Option<u32> {
        self.frame_number
    }

    /// Current round.
    pub fn round(&self) -> Option<u32> {
        self.round
    }

    /// True when nothing was captured.
    pub fn is_empty(&self) -> bool {
        self.empty
    }

    /// Audio of this tick.
    pub fn audio(&self) -> &AudioData {
        &self.audio
    }

    /// Settings this snapshot was captured under.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Display mode this snapshot was captured under.
    pub fn mode(&self) -> DisplayMode {
        self.config.mode
    }

    /// Digest of the stored content, for comparing fanned-out copies.
    pub fn digest(&self) -> SnapshotDigest {
        let mut hasher = SnapshotHasher::for_frame();
        hasher.update_u8(self.config.mode as u8);
        hasher.update_bool(self.config.unlimited_time);
        hasher.update_u32(self.config.fps);
        hasher.update_u32(self.config.round_frames);
        hasher.update_u32(self.config.round_time_ms);
        hasher.update_bool(self.empty);
        hasher.update_opt_u32(self.frame_number);
        hasher.update_opt_u32(self.round);
        for character in &self.characters {
            match character {
                Some(c) => {
                    hasher.update_u8(1);
                    c.hash_into(&mut hasher);
                }
                None => hasher.update_u8(0),
            }
        }
        hasher.update_u32(self.projectiles.len() as u32);
        for attack in &self.projectiles {
            attack.hash_into(&mut hasher);
        }
        if let Some(hp) = self.hp {
            hasher.update_i32(hp[0]);
            hasher.update_i32(hp[1]);
        }
        if let Some(front) = self.front {
            hasher.update_bool(front[0]);
            hasher.update_bool(front[1]);
        }
        self.audio.hash_into(&mut hasher);
        hasher.finalize()
    }

    /// Serialize for hand-off across a process boundary.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// Deserialize a snapshot produced by [`FrameData::to_bytes`].
    pub fn from_bytes(data: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(data)
    }
}

fn clamp_i32(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

impl Default for FrameData {
    fn default() -> Self {
        Self::empty(GameConfig::default())
    }
}
