//! Actions
//!
//! Every move the decoder can hand to the physics side. Names follow the
//! usual fighting-game shorthand: `D_DF_F` is the quarter circle forward
//! (236), `F_D_DF` the dragon punch (623), `D_DB_B` the quarter circle back
//! (214); the trailing letter is the button.

use serde::{Serialize, Deserialize};

/// A discrete move chosen for one combatant on one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    // ----- movement -----
    /// 5
    #[default]
    Stand,
    /// 6
    ForwardWalk,
    /// 66
    Dash,
    /// 44
    BackStep,
    /// 2
    Crouch,
    /// 8
    Jump,
    /// 9
    ForJump,
    /// 7
    BackJump,
    /// Airborne, no input
    Air,

    // ----- guard -----
    /// 4
    StandGuard,
    /// 1
    CrouchGuard,
    /// Air 4
    AirGuard,

    // ----- throws -----
    /// 4A
    ThrowA,
    /// 4B
    ThrowB,

    // ----- ground normals -----
    /// 5A
    StandA,
    /// 5B
    StandB,
    /// 6A
    StandFa,
    /// 6B
    StandFb,
    /// 2A
    CrouchA,
    /// 2B
    CrouchB,
    /// 3A
    CrouchFa,
    /// 3B
    CrouchFb,

    // ----- air normals -----
    /// Air 5A
    AirA,
    /// Air 5B
    AirB,
    /// Air 2A
    AirDa,
    /// Air 2B
    AirDb,
    /// Air 6A
    AirFa,
    /// Air 6B
    AirFb,
    /// Air 8A
    AirUa,
    /// Air 8B
    AirUb,

    // ----- ground specials -----
    /// 236A
    StandDDfFa,
    /// 236B
    StandDDfFb,
    /// 623A
    StandFDDfa,
    /// 623B
    StandFDDfb,
    /// 214A
    StandDDbBa,
    /// 214B
    StandDDbBb,
    /// 236C, the super
    StandDDfFc,

    // ----- air specials -----
    /// Air 236A
    AirDDfFa,
    /// Air 236B
    AirDDfFb,
    /// Air 623A
    AirFDDfa,
    /// Air 623B
    AirFDDfb,
    /// Air 214A
    AirDDbBa,
    /// Air 214B
    AirDDbBb,
}

impl Action {
    /// Every action, in declaration order.
    pub const ALL: [Action; 43] = [
        Action::Stand,
        Action::ForwardWalk,
        Action::Dash,
        Action::BackStep,
        Action::Crouch,
        Action::Jump,
        Action::ForJump,
        Action::BackJump,
        Action::Air,
        Action::StandGuard,
        Action::CrouchGuard,
        Action::AirGuard,
        Action::ThrowA,
        Action::ThrowB,
        Action::StandA,
        Action::StandB,
        Action::StandFa,
        Action::StandFb,
        Action::CrouchA,
        Action::CrouchB,
        Action::CrouchFa,
        Action::CrouchFb,
        Action::AirA,
        Action::AirB,
        Action::AirDa,
        Action::AirDb,
        Action::AirFa,
        Action::AirFb,
        Action::AirUa,
        Action::AirUb,
        Action::StandDDfFa,
        Action::StandDDfFb,
        Action::StandFDDfa,
        Action::StandFDDfb,
        Action::StandDDbBa,
        Action::StandDDbBb,
        Action::StandDDfFc,
        Action::AirDDfFa,
        Action::AirDDfFb,
        Action::AirFDDfa,
        Action::AirFDDfb,
        Action::AirDDbBa,
        Action::AirDDbBb,
    ];

    /// Canonical upper-case name, e.g. `STAND_D_DF_FB`.
    pub fn name(self) -> &'static str {
        match self {
            Action::Stand => "STAND",
            Action::ForwardWalk => "FORWARD_WALK",
            Action::Dash => "DASH",
            Action::BackStep => "BACK_STEP",
            Action::Crouch => "CROUCH",
            Action::Jump => "JUMP",
            Action::ForJump => "FOR_JUMP",
            Action::BackJump => "BACK_JUMP",
            Action::Air => "AIR",
            Action::StandGuard => "STAND_GUARD",
            Action::CrouchGuard => "CROUCH_GUARD",
            Action::AirGuard => "AIR_GUARD",
            Action::ThrowA => "THROW_A",
            Action::ThrowB => "THROW_B",
            Action::StandA => "STAND_A",
            Action::StandB => "STAND_B",
            Action::StandFa => "STAND_FA",
            Action::StandFb => "STAND_FB",
            Action::CrouchA => "CROUCH_A",
            Action::CrouchB => "CROUCH_B",
            Action::CrouchFa => "CROUCH_FA",
            Action::CrouchFb => "CROUCH_FB",
            Action::AirA => "AIR_A",
            Action::AirB => "AIR_B",
            Action::AirDa => "AIR_DA",
            Action::AirDb => "AIR_DB",
            Action::AirFa => "AIR_FA",
            Action::AirFb => "AIR_FB",
            Action::AirUa => "AIR_UA",
            Action::AirUb => "AIR_UB",
            Action::StandDDfFa => "STAND_D_DF_FA",
            Action::StandDDfFb => "STAND_D_DF_FB",
            Action::StandFDDfa => "STAND_F_D_DFA",
            Action::StandFDDfb => "STAND_F_D_DFB",
            Action::StandDDbBa => "STAND_D_DB_BA",
            Action::StandDDbBb => "STAND_D_DB_BB",
            Action::StandDDfFc => "STAND_D_DF_FC",
            Action::AirDDfFa => "AIR_D_DF_FA",
            Action::AirDDfFb => "AIR_D_DF_FB",
            Action::AirFDDfa => "AIR_F_D_DFA",
            Action::AirFDDfb => "AIR_F_D_DFB",
            Action::AirDDbBa => "AIR_D_DB_BA",
            Action::AirDDbBb => "AIR_D_DB_BB",
        }
    }

    /// Look up an action by its canonical name.
    pub fn from_name(name: &str) -> Option<Action> {
        Action::ALL.iter().copied().find(|action| action.name() == name)
    }

    /// Motion-triggered moves (specials and the super).
    pub fn is_special(self) -> bool {
        matches!(
            self,
            Action::StandDDfFa
                | Action::StandDDfFb
                | Action::StandFDDfa
                | Action::StandFDDfb
                | Action::StandDDbBa
                | Action::StandDDbBb
                | Action::StandDDfFc
                | Action::AirDDfFa
                | Action::AirDDfFb
                | Action::AirFDDfa
                | Action::AirFDDfb
                | Action::AirDDbBa
                | Action::AirDDbBb
        )
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
