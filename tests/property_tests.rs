//! Property-based tests for lever normalization, motion compression,
//! decoding and snapshot redaction.

use fighting_core::command::CommandDecoder;
use fighting_core::config::{DisplayMode, GameConfig};
use fighting_core::frame::{AttackData, CharacterData, CharacterState, FrameData};
use fighting_core::input::{Button, InputHistory, Key, Lever, MotionPattern};
use fighting_core::PlayerSide;
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_key()(bits in any::<u8>()) -> Key {
        Key::from_bits(bits)
    }
}

prop_compose! {
    fn arbitrary_lever()(numpad in 1..=9u8) -> Lever {
        Lever::from_numpad(numpad).unwrap_or_default()
    }
}

prop_compose! {
    fn moving_lever()(lever in arbitrary_lever().prop_filter("not neutral", |l| *l != Lever::Neutral)) -> Lever {
        lever
    }
}

fn arbitrary_state() -> impl Strategy<Value = CharacterState> {
    prop_oneof![
        Just(CharacterState::Stand),
        Just(CharacterState::Crouch),
        Just(CharacterState::Air),
        Just(CharacterState::Down),
    ]
}

fn arbitrary_mode() -> impl Strategy<Value = DisplayMode> {
    prop_oneof![
        Just(DisplayMode::Visual),
        Just(DisplayMode::AudioTrain),
        Just(DisplayMode::AudioPlay),
    ]
}

fn history_of(keys: &[Key]) -> InputHistory<Key> {
    let mut history = InputHistory::new(keys.len().max(2));
    history.extend(keys.iter().copied());
    history
}

proptest! {
    #[test]
    fn lever_is_always_a_numpad_digit(key in arbitrary_key(), front in any::<bool>()) {
        let lever = Lever::from_key(key, front);
        prop_assert!((1..=9).contains(&lever.numpad()));
    }

    #[test]
    fn facing_mirrors_the_horizontal_axis(key in arbitrary_key()) {
        prop_assert_eq!(Lever::from_key(key, false), Lever::from_key(key, true).mirrored());
    }

    #[test]
    fn lever_ignores_buttons(key in arbitrary_key(), front in any::<bool>()) {
        let pressed = key.with_button(Button::A).with_button(Button::B).with_button(Button::C);
        prop_assert_eq!(Lever::from_key(key, front), Lever::from_key(pressed, front));
    }

    #[test]
    fn to_key_inverts_from_key(lever in arbitrary_lever(), front in any::<bool>()) {
        prop_assert_eq!(Lever::from_key(lever.to_key(front), front), lever);
    }

    #[test]
    fn newest_lever_lands_in_first_slot(levers in prop::collection::vec(arbitrary_lever(), 1..60)) {
        let pattern = MotionPattern::compress(levers.iter().copied());
        prop_assert_eq!(pattern.get(0), Some(levers[0]));
    }

    #[test]
    fn held_direction_is_one_segment(lever in moving_lever(), ticks in 1..60usize) {
        let pattern = MotionPattern::compress(std::iter::repeat(lever).take(ticks));
        prop_assert_eq!(pattern.slots(), [lever, Lever::Neutral, Lever::Neutral, Lever::Neutral]);
        prop_assert_eq!(pattern.segments(), 1);
    }

    #[test]
    fn compression_without_neutral_has_no_repeats(levers in prop::collection::vec(moving_lever(), 0..60)) {
        let slots = MotionPattern::compress(levers.iter().copied()).slots();
        for pair in slots.windows(2) {
            if pair[0] != Lever::Neutral {
                prop_assert_ne!(pair[0], pair[1]);
            }
        }
    }

    #[test]
    fn compression_is_stable_over_its_own_output(levers in prop::collection::vec(moving_lever(), 0..60)) {
        let pattern = MotionPattern::compress(levers.iter().copied());
        let again = MotionPattern::compress(pattern.slots());
        prop_assert_eq!(again, pattern);
    }

    #[test]
    fn decoding_never_fails_on_recorded_input(
        keys in prop::collection::vec(arbitrary_key(), 1..60),
        front in any::<bool>(),
        state in arbitrary_state(),
    ) {
        let decoder = CommandDecoder::new();
        let newest_first: Vec<Key> = keys.iter().rev().copied().collect();
        prop_assert!(decoder.decode_keys(newest_first, front, state).is_ok());
    }

    #[test]
    fn regime_decides_action_family(
        keys in prop::collection::vec(arbitrary_key(), 1..30),
        front in any::<bool>(),
        state in arbitrary_state(),
    ) {
        let decoder = CommandDecoder::new();
        let newest_first: Vec<Key> = keys.iter().rev().copied().collect();
        let action = decoder.decode_keys(newest_first, front, state).unwrap();
        let airborne = action.name().starts_with("AIR");
        prop_assert_eq!(airborne, state == CharacterState::Air);
    }

    #[test]
    fn held_buttons_do_not_retrigger(
        levers in prop::collection::vec(arbitrary_lever(), 2..30),
        mask in 1..8u8,
        state in arbitrary_state(),
    ) {
        let press = |key: Key| {
            Button::ALL
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1u8 << *i) != 0)
                .fold(key, |key, (_, button)| key.with_button(*button))
        };

        let mut held: Vec<Key> = levers.iter().map(|l| l.to_key(true)).collect();
        let mut released = held.clone();
        let n = held.len();
        held[n - 2] = press(held[n - 2]);
        held[n - 1] = press(held[n - 1]);
        released[n - 2] = press(released[n - 2]);

        let mut character = CharacterData::new(PlayerSide::P1, 400, 100, 140, 335, 640, true);
        character.state = state;

        let decoder = CommandDecoder::new();
        prop_assert_eq!(
            decoder.decode(&history_of(&held), &character),
            decoder.decode(&history_of(&released), &character)
        );
    }

    #[test]
    fn redaction_is_idempotent(mode in arbitrary_mode(), frame in 0..3600u32, hp in 0..500i32) {
        let p1 = CharacterData::new(PlayerSide::P1, hp, 100, 140, 335, 640, true);
        let p2 = CharacterData::new(PlayerSide::P2, hp, 500, 540, 335, 640, false);
        let shots = [AttackData::projectile(PlayerSide::P1, 150, 190, 400, 430, 6)];

        let mut snapshot = FrameData::capture(GameConfig::with_mode(mode), &[p1, p2], &shots, frame, 1, None);
        snapshot.remove_visual_data();
        let once = snapshot.clone();
        snapshot.remove_visual_data();

        prop_assert_eq!(&snapshot, &once);
        prop_assert_eq!(snapshot.digest(), once.digest());
    }

    #[test]
    fn remaining_frames_count_down(frame in 0..3600u32) {
        let p1 = CharacterData::new(PlayerSide::P1, 400, 100, 140, 335, 640, true);
        let p2 = CharacterData::new(PlayerSide::P2, 400, 500, 540, 335, 640, false);
        let snapshot = FrameData::capture(GameConfig::default(), &[p1, p2], &[] as &[AttackData], frame, 1, None);

        prop_assert_eq!(snapshot.remaining_frames() + frame as i32, 3600);
        prop_assert!(snapshot.remaining_time_millis() <= 60_000);
        prop_assert!(snapshot.remaining_time_seconds() * 1000 >= snapshot.remaining_time_millis());
    }

    #[test]
    fn remaining_time_never_faults(
        round_frames in any::<u32>(),
        round_time_ms in any::<u32>(),
        fps in any::<u32>(),
        frame in any::<u32>(),
    ) {
        let config = GameConfig { round_frames, round_time_ms, fps, ..GameConfig::default() };
        let p1 = CharacterData::new(PlayerSide::P1, 400, 100, 140, 335, 640, true);
        let p2 = CharacterData::new(PlayerSide::P2, 400, 500, 540, 335, 640, false);
        let snapshot = FrameData::capture(config, &[p1, p2], &[] as &[AttackData], frame, 1, None);

        let expected = (i64::from(round_frames) - i64::from(frame))
            .clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
        prop_assert_eq!(snapshot.remaining_frames(), expected);
        prop_assert!(i64::from(snapshot.remaining_time_millis()) <= i64::from(round_time_ms));
        let _ = snapshot.remaining_time_seconds();
    }
}
