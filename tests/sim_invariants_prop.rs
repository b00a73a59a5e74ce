//! Property tests for the simulation step and the save blob
//!
//! Random key sequences drive a fresh play field; whatever the player does,
//! these must hold after every frame:
//! - the paddle stays fully on screen
//! - a docked ball sits on the paddle center
//! - destroyed bricks stay destroyed
//! - lives only ever drop by one, never below zero
//! - a generator is active exactly while one of its particles is
use breakout::consts::{BRICK_LINES, BRICKS_PER_LINE, LIVES, PADDLE_WIDTH, SCREEN_WIDTH};
use breakout::persistence::SaveBlob;
use breakout::sim::{GameEvent, GameState, TickInput, TickOutcome, tick};
use proptest::prelude::*;

fn input_strategy() -> impl Strategy<Value = TickInput> {
    (any::<bool>(), any::<bool>(), prop::bool::weighted(0.05)).prop_map(|(left, right, launch)| {
        TickInput {
            left,
            right,
            launch,
        }
    })
}

fn assert_frame_invariants(before: &GameState, after: &GameState) {
    let paddle = &after.paddle;
    assert!(paddle.pos.x >= 0.0);
    assert!(paddle.pos.x + paddle.size.x <= SCREEN_WIDTH);

    if !after.ball.active {
        assert_eq!(after.ball.pos.x, paddle.center_x());
    }

    for ((_, _, old), (_, _, new)) in before.bricks.iter().zip(after.bricks.iter()) {
        assert!(old.active || !new.active, "brick came back mid-session");
    }

    assert!(after.paddle.lives <= before.paddle.lives);
    assert!(before.paddle.lives - after.paddle.lives <= 1);

    for generator in &after.generators {
        assert_eq!(generator.active, generator.iter().any(|p| p.active));
    }
}

proptest! {
    #[test]
    fn random_play_respects_frame_invariants(
        inputs in prop::collection::vec(input_strategy(), 1..600),
        start_x in 0.0f32..(SCREEN_WIDTH - PADDLE_WIDTH),
    ) {
        let mut state = GameState::new();
        state.paddle.pos.x = start_x;
        let mut events = Vec::new();

        for input in &inputs {
            let before = state.clone();
            events.clear();
            let outcome = tick(&mut state, input, &mut events);
            assert_frame_invariants(&before, &state);

            let lost = events
                .iter()
                .filter(|e| matches!(e, GameEvent::BallLost { .. }))
                .count();
            prop_assert_eq!(lost as u32, before.paddle.lives - state.paddle.lives);

            match outcome {
                TickOutcome::Continue => prop_assert!(state.paddle.lives > 0),
                TickOutcome::Lost => {
                    prop_assert_eq!(state.paddle.lives, 0);
                    break;
                }
                TickOutcome::Won => {
                    prop_assert!(!state.bricks.any_active());
                    break;
                }
            }
        }
    }

    #[test]
    fn bursts_never_exceed_the_pool(
        hits in prop::collection::vec((0..BRICK_LINES, 0..BRICKS_PER_LINE), 1..20),
    ) {
        let mut state = GameState::new();
        let mut claimed = 0;
        for (row, col) in hits {
            let Some(brick) = state.bricks.get(row, col).cloned() else {
                continue;
            };
            if breakout::sim::spawn_burst(&mut state.generators, &brick, row, col).is_some() {
                claimed += 1;
            }
            prop_assert!(state.active_generators() <= state.generators.len());
        }
        prop_assert_eq!(claimed.min(state.generators.len()), state.active_generators());
    }

    #[test]
    fn save_blob_round_trips(
        flags in prop::array::uniform5(prop::array::uniform10(any::<bool>())),
        lives in 1..=LIVES,
    ) {
        let mut state = GameState::new();
        state.bricks.set_active_flags(&flags);
        state.paddle.lives = lives;

        let bytes = SaveBlob::capture(&state).encode();
        let decoded = SaveBlob::decode(&bytes).unwrap();

        let mut restored = GameState::new();
        decoded.apply(&mut restored);
        prop_assert_eq!(restored.bricks.active_flags(), flags);
        prop_assert_eq!(restored.paddle.lives, lives);
    }

    #[test]
    fn decoding_arbitrary_bytes_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
        let _ = SaveBlob::decode(&bytes);
    }
}
