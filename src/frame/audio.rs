//! Audio Data
//!
//! One tick of rendered audio, sampled from the audio collaborator only
//! when the display mode calls for it.

use serde::{Serialize, Deserialize};

use crate::core::hash::SnapshotHasher;

/// Raw samples per channel for one tick.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AudioData {
    /// One sample buffer per channel (left, right)
    raw: Vec<Vec<f32>>,
}

impl AudioData {
    /// Wrap per-channel sample buffers.
    pub fn new(raw: Vec<Vec<f32>>) -> Self {
        Self { raw }
    }

    /// Per-channel samples.
    pub fn raw(&self) -> &[Vec<f32>] {
        &self.raw
    }

    /// Number of channels.
    pub fn channels(&self) -> usize {
        self.raw.len()
    }

    /// True for the placeholder captured when audio is off.
    pub fn is_empty(&self) -> bool {
        self.raw.iter().all(|channel| channel.is_empty())
    }

    pub(crate) fn hash_into(&self, hasher: &mut SnapshotHasher) {
        hasher.update_u32(self.raw.len() as u32);
        for channel in &self.raw {
            hasher.update_u32(channel.len() as u32);
            for sample in channel {
                hasher.update_f32(*sample);
            }
        }
    }
}

/// Something that can render the current tick's audio.
pub trait AudioSource {
    /// Sample the audio of the current tick.
    fn sample_audio(&self) -> AudioData;
}
