//! Fighting Core Demo
//!
//! Plays a short scripted exchange through the decode-and-capture cycle
//! and logs what each combatant asked for, plus snapshot digests.

use anyhow::Context;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use fighting_core::{
    config::log_level_from_env,
    frame::{AudioData, AudioSource},
    Action, AttackData, CharacterData, CharacterState, GameConfig, KeyData, Lever, PlayerSide,
    TickCycle, FPS, ROUND_FRAME_NUMBER, VERSION,
};
use fighting_core::input::{Button, Key};

/// Constant tone standing in for the audio renderer.
struct TestTone;

impl AudioSource for TestTone {
    fn sample_audio(&self) -> AudioData {
        let samples: Vec<f32> = (0..16).map(|i| (i as f32 * 0.4).sin() * 0.25).collect();
        AudioData::new(vec![samples.clone(), samples])
    }
}

/// One scripted tick for one side: numpad lever plus optional button.
type Step = (u8, Option<Button>);

/// P1 throws a fireball (236A), dashes in (6 5 6) and finishes with a
/// dragon punch (623B).
const P1_SCRIPT: &[Step] = &[
    (5, None), (2, None), (2, None), (3, None), (6, Some(Button::A)),
    (5, None), (5, None), (6, None), (5, None), (6, None),
    (5, None), (6, None), (2, None), (3, Some(Button::B)),
    (5, None), (5, None),
];

/// P2 blocks, crouch-guards, then answers with a heavy fireball (236C).
const P2_SCRIPT: &[Step] = &[
    (4, None), (4, None), (4, None), (1, None), (1, None),
    (1, None), (5, None), (2, None), (3, None), (6, Some(Button::C)),
    (6, None), (5, None), (8, None), (8, None), (5, Some(Button::A)),
    (5, None),
];

fn key_for(step: Step, front: bool) -> anyhow::Result<Key> {
    let (numpad, button) = step;
    let lever = Lever::from_numpad(numpad).context("scripted lever out of range")?;
    let key = lever.to_key(front);
    Ok(match button {
        Some(button) => key.with_button(button),
        None => key,
    })
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::new(log_level_from_env()))
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    let config = GameConfig::from_env().context("Invalid configuration")?;

    info!("Fighting Core v{}", VERSION);
    info!("Frame Rate: {} fps", FPS);
    info!("Round Length: {} frames ({} seconds)", ROUND_FRAME_NUMBER, ROUND_FRAME_NUMBER / FPS);
    info!("Display Mode: {:?}", config.mode);

    demo_exchange(config)
}

/// Run both scripts side by side and report every non-idle action.
fn demo_exchange(config: GameConfig) -> anyhow::Result<()> {
    info!("=== Starting Demo Exchange ===");

    let mut cycle = TickCycle::new(config);
    let tone = TestTone;
    let mut fighters = [
        CharacterData::new(PlayerSide::P1, 400, 100, 140, 335, 640, true),
        CharacterData::new(PlayerSide::P2, 400, 760, 800, 335, 640, false),
    ];

    let mut projectiles: Vec<AttackData> = Vec::new();
    for (p1, p2) in P1_SCRIPT.iter().zip(P2_SCRIPT) {
        let keys = KeyData::new(
            key_for(*p1, fighters[0].front)?,
            key_for(*p2, fighters[1].front)?,
        );

        let out = cycle.step(keys, &fighters, &projectiles, Some(&tone))?;
        let frame_number = out.frame.frame_number().unwrap_or(0);

        for side in PlayerSide::BOTH {
            let action = out.action(side);
            if action != Action::Stand {
                info!("Frame {:>3}: {} -> {}", frame_number, side, action);
            }

            // Crude stand-in for physics: specials spawn a projectile.
            let fighter = &mut fighters[side.index()];
            fighter.action = action;
            fighter.state = if matches!(action, Action::Crouch | Action::CrouchGuard) {
                CharacterState::Crouch
            } else {
                CharacterState::Stand
            };
            if action.is_special() {
                let (left, speed) = if fighter.front {
                    (fighter.right, 8)
                } else {
                    (fighter.left - 40, -8)
                };
                projectiles.push(AttackData::projectile(side, left, left + 40, 400, 430, speed));
            }
        }

        debug!(frame = frame_number, digest = %hex::encode(out.frame.digest()), "captured");
    }

    // Final snapshot, in full and as an agent would receive it
    let last = cycle.last_frame().clone();
    info!("Projectiles in flight: {}", last.projectiles().len());
    info!("Distance: x={} y={}", last.distance_x(), last.distance_y());
    info!("Remaining: {} ms ({} frames)", last.remaining_time_millis(), last.remaining_frames());

    let mut view = last.clone();
    view.remove_visual_data();
    info!("Agent view: {}", serde_json::to_string(&view).context("Failed to encode snapshot")?);

    // Verify the transport bytes reproduce the same snapshot
    info!("=== Verifying Snapshot Transport ===");
    let bytes = last.to_bytes().context("Failed to serialize snapshot")?;
    let restored = fighting_core::FrameData::from_bytes(&bytes).context("Failed to deserialize snapshot")?;

    let digest = last.digest();
    info!("Snapshot Digest: {}", hex::encode(digest));
    info!("Restored Digest: {}", hex::encode(restored.digest()));

    if restored.digest() == digest {
        info!("TRANSPORT VERIFIED: Digests match!");
    } else {
        info!("TRANSPORT FAILURE: Digests differ!");
    }

    Ok(())
}
