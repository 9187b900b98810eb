//! Attack Data
//!
//! Hit area and damage terms of one attack. Projectiles in a snapshot are
//! attacks that outlive the animation that spawned them.

use serde::{Serialize, Deserialize};

use crate::core::hash::SnapshotHasher;
use crate::core::side::PlayerSide;

/// Axis-aligned hit box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HitArea {
    /// Left edge
    pub left: i32,
    /// Right edge
    pub right: i32,
    /// Top edge
    pub top: i32,
    /// Bottom edge
    pub bottom: i32,
}

impl HitArea {
    /// Build a hit box.
    pub const fn new(left: i32, right: i32, top: i32, bottom: i32) -> Self {
        Self { left, right, top, bottom }
    }

    fn hash_into(&self, hasher: &mut SnapshotHasher) {
        hasher.update_i32(self.left);
        hasher.update_i32(self.right);
        hasher.update_i32(self.top);
        hasher.update_i32(self.bottom);
    }
}

/// How an attack must be guarded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum AttackType {
    /// Guardable standing or crouching
    #[default]
    High = 1,
    /// Guardable crouching only
    Low = 2,
    /// Guardable standing only
    Middle = 3,
    /// Unguardable throw
    Throw = 4,
}

/// One attack (and, when `is_projectile`, one projectile).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackData {
    /// Owner of the attack
    pub player: PlayerSide,
    /// Hit box as configured for the move
    pub setting_hit_area: HitArea,
    /// Hit box at its current position
    pub current_hit_area: HitArea,
    /// Horizontal speed
    pub speed_x: i32,
    /// Vertical speed
    pub speed_y: i32,
    /// Frames since the attack started
    pub current_frame: i32,
    /// Frames before the hit box becomes active
    pub startup_frame: i32,
    /// Frames the hit box stays active
    pub active_frame: i32,
    /// Damage on hit
    pub hit_damage: i32,
    /// Damage on guard
    pub guard_damage: i32,
    /// Energy the owner gains on hit
    pub hit_add_energy: i32,
    /// Energy the owner gains on guard
    pub guard_add_energy: i32,
    /// Energy the owner gives to the opponent on hit
    pub give_energy: i32,
    /// Energy the move costs
    pub required_energy: i32,
    /// Guard requirement
    pub attack_type: AttackType,
    /// Whether a hit knocks the opponent down
    pub down_prop: bool,
    /// Whether this attack travels on its own
    pub is_projectile: bool,
}

impl AttackData {
    /// A projectile owned by `player`, with its hit box at the given position.
    pub fn projectile(player: PlayerSide, left: i32, right: i32, top: i32, bottom: i32, speed_x: i32) -> Self {
        let area = HitArea::new(left, right, top, bottom);
        Self {
            player,
            setting_hit_area: area,
            current_hit_area: area,
            speed_x,
            speed_y: 0,
            current_frame: 0,
            startup_frame: 0,
            active_frame: 0,
            hit_damage: 0,
            guard_damage: 0,
            hit_add_energy: 0,
            guard_add_energy: 0,
            give_energy: 0,
            required_energy: 0,
            attack_type: AttackType::High,
            down_prop: false,
            is_projectile: true,
        }
    }

    /// Check ownership.
    #[inline]
    pub fn is_owned_by(&self, side: PlayerSide) -> bool {
        self.player == side
    }

    /// Hash this attack's state.
    pub fn hash_into(&self, hasher: &mut SnapshotHasher) {
        hasher.update_u8(self.player as u8);
        self.setting_hit_area.hash_into(hasher);
        self.current_hit_area.hash_into(hasher);
        hasher.update_i32(self.speed_x);
        hasher.update_i32(self.speed_y);
        hasher.update_i32(self.current_frame);
        hasher.update_i32(self.startup_frame);
        hasher.update_i32(self.active_frame);
        hasher.update_i32(self.hit_damage);
        hasher.update_i32(self.guard_damage);
        hasher.update_i32(self.hit_add_energy);
        hasher.update_i32(self.guard_add_energy);
        hasher.update_i32(self.give_energy);
        hasher.update_i32(self.required_energy);
        hasher.update_u8(self.attack_type as u8);
        hasher.update_bool(self.down_prop);
        hasher.update_bool(self.is_projectile);
    }
}
