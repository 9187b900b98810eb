//! Action Decision Table
//!
//! The command grammar as data. Two kinds of rows, both scanned in order
//! with the first match winning:
//!
//! 1. [`MotionRow`] - a special-move motion plus a button tier.
//! 2. [`DirectionRow`] - the latest lever plus a button tier, optionally
//!    upgraded when the previous motion segment repeats the same lever
//!    (66 dash, 44 back step).
//!
//! Motion rows always take precedence over direction rows of the same tier.
//! A lookup with no matching row returns `None`; only the heavy tier on the
//! ground has such a gap (any motion other than 236).

use serde::{Serialize, Deserialize};

use crate::command::action::Action;
use crate::frame::character::CharacterState;
use crate::input::edge::PushedButtons;
use crate::input::lever::Lever;
use crate::input::motion::MotionPattern;

use ButtonTier::{Heavy, Idle, Light, Medium};
use Regime::{Air, Ground};
use SpecialMotion::{DragonPunch, QuarterCircleBack, QuarterCircleForward};

// =============================================================================
// KEYS
// =============================================================================

/// Airborne or grounded half of the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Regime {
    /// Standing, crouching or knocked down
    Ground,
    /// In the air
    Air,
}

impl Regime {
    /// Regime for a character state.
    #[inline]
    pub fn of(state: CharacterState) -> Regime {
        match state {
            CharacterState::Air => Regime::Air,
            CharacterState::Stand | CharacterState::Crouch | CharacterState::Down => Regime::Ground,
        }
    }
}

/// Strongest freshly pressed button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ButtonTier {
    /// C (ground only)
    Heavy,
    /// B
    Medium,
    /// A
    Light,
    /// No button pressed this tick
    Idle,
}

impl ButtonTier {
    /// Pick the tier: C beats B beats A. C is ignored in the air.
    pub fn select(pushed: PushedButtons, regime: Regime) -> ButtonTier {
        if pushed.c && regime == Regime::Ground {
            ButtonTier::Heavy
        } else if pushed.b {
            ButtonTier::Medium
        } else if pushed.a {
            ButtonTier::Light
        } else {
            ButtonTier::Idle
        }
    }
}

/// Special-move motion grammars (directions newest first).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpecialMotion {
    /// 236: down, down-forward, forward
    QuarterCircleForward,
    /// 623: forward, down, down-forward (also 6323 with a wobble)
    DragonPunch,
    /// 214: down, down-back, back
    QuarterCircleBack,
}

impl SpecialMotion {
    /// Check a compressed pattern against this motion.
    pub fn matches(self, pattern: &MotionPattern) -> bool {
        use Lever::*;
        match self {
            SpecialMotion::QuarterCircleForward => {
                pattern.starts_with(&[Forward, DownForward, Down])
            }
            SpecialMotion::DragonPunch => {
                pattern.starts_with(&[DownForward, Down, Forward])
                    || pattern.starts_with(&[DownForward, Down, DownForward, Forward])
            }
            SpecialMotion::QuarterCircleBack => pattern.starts_with(&[Back, DownBack, Down]),
        }
    }
}

/// Which latest lever a direction row accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeverMatch {
    /// Exactly this lever
    Exactly(Lever),
    /// Anything (row is the tier's fallback)
    Any,
}

impl LeverMatch {
    #[inline]
    fn accepts(self, lever: Lever) -> bool {
        match self {
            LeverMatch::Exactly(expected) => expected == lever,
            LeverMatch::Any => true,
        }
    }
}

// =============================================================================
// ROWS
// =============================================================================

/// A special move keyed by motion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotionRow {
    /// Ground or air
    pub regime: Regime,
    /// Button that must have been pressed
    pub tier: ButtonTier,
    /// Required motion
    pub motion: SpecialMotion,
    /// Resulting action
    pub action: Action,
}

/// A normal move or movement keyed by the latest lever.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionRow {
    /// Ground or air
    pub regime: Regime,
    /// Button tier (Idle for movement)
    pub tier: ButtonTier,
    /// Latest lever
    pub lever: LeverMatch,
    /// Action when the previous segment repeats the lever
    pub repeated: Option<Action>,
    /// Resulting action otherwise
    pub action: Action,
}

impl DirectionRow {
    fn resolve(&self, pattern: &MotionPattern) -> Action {
        match (self.lever, self.repeated) {
            (LeverMatch::Exactly(lever), Some(repeated)) if pattern.get(1) == Some(lever) => {
                repeated
            }
            _ => self.action,
        }
    }
}

const fn motion(regime: Regime, tier: ButtonTier, motion: SpecialMotion, action: Action) -> MotionRow {
    MotionRow { regime, tier, motion, action }
}

const fn direction(regime: Regime, tier: ButtonTier, lever: Lever, action: Action) -> DirectionRow {
    DirectionRow { regime, tier, lever: LeverMatch::Exactly(lever), repeated: None, action }
}

const fn repeatable(regime: Regime, lever: Lever, repeated: Action, action: Action) -> DirectionRow {
    DirectionRow {
        regime,
        tier: ButtonTier::Idle,
        lever: LeverMatch::Exactly(lever),
        repeated: Some(repeated),
        action,
    }
}

const fn fallback(regime: Regime, tier: ButtonTier, action: Action) -> DirectionRow {
    DirectionRow { regime, tier, lever: LeverMatch::Any, repeated: None, action }
}

/// Special moves, in priority order within each (regime, tier).
pub static MOTION_ROWS: [MotionRow; 13] = [
    motion(Ground, Heavy, QuarterCircleForward, Action::StandDDfFc),
    motion(Ground, Medium, QuarterCircleForward, Action::StandDDfFb),
    motion(Ground, Medium, DragonPunch, Action::StandFDDfb),
    motion(Ground, Medium, QuarterCircleBack, Action::StandDDbBb),
    motion(Ground, Light, QuarterCircleForward, Action::StandDDfFa),
    motion(Ground, Light, DragonPunch, Action::StandFDDfa),
    motion(Ground, Light, QuarterCircleBack, Action::StandDDbBa),
    motion(Air, Medium, QuarterCircleForward, Action::AirDDfFb),
    motion(Air, Medium, DragonPunch, Action::AirFDDfb),
    motion(Air, Medium, QuarterCircleBack, Action::AirDDbBb),
    motion(Air, Light, QuarterCircleForward, Action::AirDDfFa),
    motion(Air, Light, DragonPunch, Action::AirFDDfa),
    motion(Air, Light, QuarterCircleBack, Action::AirDDbBa),
];

/// Normals and movement, in priority order within each (regime, tier).
/// Every (regime, tier) except (Ground, Heavy) ends in a fallback row.
pub static DIRECTION_ROWS: [DirectionRow; 28] = [
    // ground, B
    direction(Ground, Medium, Lever::DownForward, Action::CrouchFb),
    direction(Ground, Medium, Lever::Down, Action::CrouchB),
    direction(Ground, Medium, Lever::Back, Action::ThrowB),
    direction(Ground, Medium, Lever::Forward, Action::StandFb),
    fallback(Ground, Medium, Action::StandB),
    // ground, A
    direction(Ground, Light, Lever::DownForward, Action::CrouchFa),
    direction(Ground, Light, Lever::Down, Action::CrouchA),
    direction(Ground, Light, Lever::Back, Action::ThrowA),
    direction(Ground, Light, Lever::Forward, Action::StandFa),
    fallback(Ground, Light, Action::StandA),
    // ground, no button
    repeatable(Ground, Lever::Forward, Action::Dash, Action::ForwardWalk),
    repeatable(Ground, Lever::Back, Action::BackStep, Action::StandGuard),
    direction(Ground, Idle, Lever::DownBack, Action::CrouchGuard),
    direction(Ground, Idle, Lever::Down, Action::Crouch),
    direction(Ground, Idle, Lever::UpBack, Action::BackJump),
    direction(Ground, Idle, Lever::UpForward, Action::ForJump),
    direction(Ground, Idle, Lever::Up, Action::Jump),
    fallback(Ground, Idle, Action::Stand),
    // air, B
    direction(Air, Medium, Lever::Down, Action::AirDb),
    direction(Air, Medium, Lever::Up, Action::AirUb),
    direction(Air, Medium, Lever::Forward, Action::AirFb),
    fallback(Air, Medium, Action::AirB),
    // air, A
    direction(Air, Light, Lever::Down, Action::AirDa),
    direction(Air, Light, Lever::Up, Action::AirUa),
    direction(Air, Light, Lever::Forward, Action::AirFa),
    fallback(Air, Light, Action::AirA),
    // air, no button
    direction(Air, Idle, Lever::Back, Action::AirGuard),
    fallback(Air, Idle, Action::Air),
];

// =============================================================================
// LOOKUP
// =============================================================================

/// Everything the table is keyed on for one decode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandInput {
    /// Buttons freshly pressed this tick
    pub pushed: PushedButtons,
    /// Latest lever
    pub lever: Lever,
    /// Compressed recent motion
    pub pattern: MotionPattern,
    /// Character state (selects the regime)
    pub state: CharacterState,
}

/// A motion table paired with a direction table.
#[derive(Clone, Copy, Debug)]
pub struct ActionTable {
    motions: &'static [MotionRow],
    directions: &'static [DirectionRow],
}

impl ActionTable {
    /// The standard command grammar.
    pub fn standard() -> Self {
        Self {
            motions: &MOTION_ROWS,
            directions: &DIRECTION_ROWS,
        }
    }

    /// Build from custom rows.
    pub fn new(motions: &'static [MotionRow], directions: &'static [DirectionRow]) -> Self {
        Self { motions, directions }
    }

    /// Special-move rows.
    pub fn motions(&self) -> &'static [MotionRow] {
        self.motions
    }

    /// Normal and movement rows.
    pub fn directions(&self) -> &'static [DirectionRow] {
        self.directions
    }

    /// First matching action, or `None` when no row covers the input.
    pub fn lookup(&self, input: &CommandInput) -> Option<Action> {
        let regime = Regime::of(input.state);
        let tier = ButtonTier::select(input.pushed, regime);

        let special = self
            .motions
            .iter()
            .find(|row| row.regime == regime && row.tier == tier && row.motion.matches(&input.pattern));
        if let Some(row) = special {
            return Some(row.action);
        }

        self.directions
            .iter()
            .find(|row| row.regime == regime && row.tier == tier && row.lever.accepts(input.lever))
            .map(|row| row.resolve(&input.pattern))
    }
}

impl Default for ActionTable {
    fn default() -> Self {
        Self::standard()
    }
}
