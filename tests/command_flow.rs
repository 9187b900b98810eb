//! End-to-end flow through the public API: keys in, actions and
//! snapshots out.

use fighting_core::config::DisplayMode;
use fighting_core::frame::{AudioData, AudioSource};
use fighting_core::input::{Button, Key};
use fighting_core::{
    Action, AttackData, CharacterData, CharacterState, FrameData, GameConfig, KeyData, Lever,
    PlayerSide, TickCycle,
};

struct Beep;

impl AudioSource for Beep {
    fn sample_audio(&self) -> AudioData {
        AudioData::new(vec![vec![0.25; 32], vec![0.25; 32]])
    }
}

fn fighters() -> [CharacterData; 2] {
    [
        CharacterData::new(PlayerSide::P1, 400, 100, 140, 335, 640, true),
        CharacterData::new(PlayerSide::P2, 400, 500, 540, 335, 640, false),
    ]
}

fn key(numpad: u8, front: bool, button: Option<Button>) -> Key {
    let key = Lever::from_numpad(numpad).unwrap().to_key(front);
    match button {
        Some(button) => key.with_button(button),
        None => key,
    }
}

fn keys(p1: u8, p2: u8) -> KeyData {
    KeyData::new(key(p1, true, None), key(p2, false, None))
}

#[test]
fn fireball_against_dash() {
    let mut cycle = TickCycle::new(GameConfig::default());
    let chars = fighters();

    // P1 rolls 2 3 6 and presses B; P2 taps forward twice
    let script = [(5, 6), (2, 6), (3, 5), (3, 5)];
    for (p1, p2) in script {
        cycle.step(keys(p1, p2), &chars, &[], None).unwrap();
    }

    let last = KeyData::new(key(6, true, Some(Button::B)), key(6, false, None));
    let out = cycle.step(last, &chars, &[], None).unwrap();

    assert_eq!(out.action(PlayerSide::P1), Action::StandDDfFb);
    assert_eq!(out.action(PlayerSide::P2), Action::Dash);
}

#[test]
fn airborne_combatant_uses_air_table() {
    let mut cycle = TickCycle::new(GameConfig::default());
    let mut chars = fighters();
    chars[0].state = CharacterState::Air;

    cycle.step(keys(5, 5), &chars, &[], None).unwrap();

    let pressed = KeyData::new(key(2, true, Some(Button::A)), key(2, false, Some(Button::A)));
    let out = cycle.step(pressed, &chars, &[], None).unwrap();

    assert_eq!(out.action(PlayerSide::P1), Action::AirDa);
    assert_eq!(out.action(PlayerSide::P2), Action::CrouchA);
}

#[test]
fn audio_play_agents_see_no_positions_or_hp() {
    let mut cycle = TickCycle::new(GameConfig::with_mode(DisplayMode::AudioPlay));
    let chars = fighters();
    let shots = [AttackData::projectile(PlayerSide::P2, 450, 490, 400, 430, -6)];

    let out = cycle.step(keys(5, 5), &chars, &shots, Some(&Beep)).unwrap();
    let view = out.agent_view();

    assert_eq!(view.character(PlayerSide::P1), None);
    assert_eq!(view.frame_number(), None);
    assert_eq!(view.hp(PlayerSide::P1), Some(0));
    assert_eq!(view.distance_x(), 0);
    assert!(view.projectiles_by(PlayerSide::P2).is_empty());
    assert_eq!(view.audio().channels(), 2);

    // the unredacted capture is untouched
    assert_eq!(out.frame.hp(PlayerSide::P1), Some(400));
}

#[test]
fn snapshot_survives_json_and_bytes() {
    let mut cycle = TickCycle::new(GameConfig::with_mode(DisplayMode::AudioTrain));
    let chars = fighters();
    let out = cycle.step(keys(5, 5), &chars, &[], Some(&Beep)).unwrap();

    let json = serde_json::to_string(&out.frame).unwrap();
    let from_json: FrameData = serde_json::from_str(&json).unwrap();
    assert_eq!(from_json.digest(), out.frame.digest());

    let from_bytes = FrameData::from_bytes(&out.frame.to_bytes().unwrap()).unwrap();
    assert_eq!(from_bytes, out.frame);
}
