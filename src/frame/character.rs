//! Character Data
//!
//! Read-only projection of one combatant as the physics side exposes it.
//! Plain value type: copying it into a snapshot copies everything.

use serde::{Serialize, Deserialize};

use crate::command::action::Action;
use crate::core::hash::SnapshotHasher;
use crate::core::side::PlayerSide;
use crate::frame::attack::AttackData;

/// Posture of a combatant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum CharacterState {
    /// On the ground, upright
    #[default]
    Stand = 0,
    /// On the ground, crouched
    Crouch = 1,
    /// Airborne
    Air = 2,
    /// Knocked down
    Down = 3,
}

/// Snapshot of one combatant.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CharacterData {
    /// Which combatant this is
    pub player: PlayerSide,

    /// Hit points
    pub hp: i32,

    /// Special-move energy
    pub energy: i32,

    /// Top-left x of the graphic box
    pub x: i32,

    /// Top-left y of the graphic box
    pub y: i32,

    /// Hit box: left edge
    pub left: i32,

    /// Hit box: right edge
    pub right: i32,

    /// Hit box: top edge
    pub top: i32,

    /// Hit box: bottom edge
    pub bottom: i32,

    /// Horizontal speed
    pub speed_x: i32,

    /// Vertical speed
    pub speed_y: i32,

    /// Posture
    pub state: CharacterState,

    /// Action currently being executed
    pub action: Action,

    /// True when facing right
    pub front: bool,

    /// Whether a new action can be accepted this tick
    pub control: bool,

    /// Frames left in the current action
    pub remaining_frame: i32,

    /// Whether the current attack has connected
    pub hit_confirm: bool,

    /// Consecutive hits landed
    pub hit_count: i32,

    /// Frame of the last landed hit
    pub last_hit_frame: i32,

    /// Attack currently out, if any
    pub attack: Option<AttackData>,
}

impl CharacterData {
    /// A standing combatant with the given hit box and facing.
    pub fn new(player: PlayerSide, hp: i32, left: i32, right: i32, top: i32, bottom: i32, front: bool) -> Self {
        Self {
            player,
            hp,
            energy: 0,
            x: left,
            y: top,
            left,
            right,
            top,
            bottom,
            speed_x: 0,
            speed_y: 0,
            state: CharacterState::Stand,
            action: Action::Stand,
            front,
            control: true,
            remaining_frame: 0,
            hit_confirm: false,
            hit_count: 0,
            last_hit_frame: 0,
            attack: None,
        }
    }

    /// Horizontal center of the hit box.
    #[inline]
    pub fn center_x(&self) -> i32 {
        ((i64::from(self.left) + i64::from(self.right)) / 2) as i32
    }

    /// Vertical center of the hit box.
    #[inline]
    pub fn center_y(&self) -> i32 {
        ((i64::from(self.top) + i64::from(self.bottom)) / 2) as i32
    }

    /// Check if airborne.
    #[inline]
    pub fn is_airborne(&self) -> bool {
        self.state == CharacterState::Air
    }

    /// Hash this character's state.
    pub fn hash_into(&self, hasher: &mut SnapshotHasher) {
        hasher.update_u8(self.player as u8);
        hasher.update_i32(self.hp);
        hasher.update_i32(self.energy);
        hasher.update_i32(self.x);
        hasher.update_i32(self.y);
        hasher.update_i32(self.left);
        hasher.update_i32(self.right);
        hasher.update_i32(self.top);
        hasher.update_i32(self.bottom);
        hasher.update_i32(self.speed_x);
        hasher.update_i32(self.speed_y);
        hasher.update_u8(self.state as u8);
        hasher.update_u8(self.action as u8);
        hasher.update_bool(self.front);
        hasher.update_bool(self.control);
        hasher.update_i32(self.remaining_frame);
        hasher.update_bool(self.hit_confirm);
        hasher.update_i32(self.hit_count);
        hasher.update_i32(self.last_hit_frame);
        match &self.attack {
            Some(attack) => {
                hasher.update_u8(1);
                attack.hash_into(hasher);
            }
            None => hasher.update_u8(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center() {
        let c = CharacterData::new(PlayerSide::P1, 400, 100, 140, 335, 640, true);
        assert_eq!(c.center_x(), 120);
        assert_eq!(c.center_y(), 487);
        assert!(!c.is_airborne());
    }

    #[test]
    fn test_center_of_extreme_box() {
        let c = CharacterData::new(PlayerSide::P1, 400, i32::MAX - 1, i32::MAX, i32::MIN, i32::MIN + 2, true);
        assert_eq!(c.center_x(), i32::MAX - 1);
        assert_eq!(c.center_y(), i32::MIN + 1);
    }

    #[test]
    fn test_copy_is_independent() {
        let original = CharacterData::new(PlayerSide::P2, 400, 500, 540, 335, 640, false);
        let mut copy = original;
        copy.hp = 10;
        copy.left = 0;
        assert_eq!(original.hp, 400);
        assert_eq!(original.left, 500);
    }

    #[test]
    fn test_hash_sees_attack() {
        let plain = CharacterData::new(PlayerSide::P1, 400, 100, 140, 335, 640, true);
        let mut attacking = plain;
        attacking.attack = Some(AttackData::projectile(PlayerSide::P1, 150, 190, 400, 430, 5));

        let digest = |c: &CharacterData| {
            let mut hasher = SnapshotHasher::for_frame();
            c.hash_into(&mut hasher);
            hasher.finalize()
        };
        assert_ne!(digest(&plain), digest(&attacking));
    }
}
