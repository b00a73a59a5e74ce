//! Per-frame simulation step
//!
//! Advances the play field by exactly one frame. There is no delta time: the
//! game runs at a fixed 60 Hz cadence and every speed is in pixels per frame.

use super::collision::circle_intersects_rect;
use super::particles::{spawn_burst, update_particles};
use super::state::GameState;
use crate::consts::{BRICK_LINES, BRICKS_PER_LINE, PADDLE_STEERING};

/// Input commands for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Move left (held)
    pub left: bool,
    /// Move right (held)
    pub right: bool,
    /// Launch a docked ball (pressed this frame)
    pub launch: bool,
}

/// Side effects of a frame, for audio and diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Docked ball left the paddle
    Launched,
    /// Ball bounced off the paddle
    PaddleBounce,
    /// Ball destroyed a brick
    BrickDestroyed { row: usize, col: usize },
    /// No free particle generator for this brick's burst
    BurstDropped { row: usize, col: usize },
    /// Ball fell off the bottom edge
    BallLost { lives_left: u32 },
}

/// How the frame ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    /// The last brick was destroyed
    Won,
    /// The last life was lost
    Lost,
}

/// Advance the play field by one frame
///
/// Events are appended to `events`; the caller owns and clears the buffer.
pub fn tick(state: &mut GameState, input: &TickInput, events: &mut Vec<GameEvent>) -> TickOutcome {
    // Paddle: both keys held cancel out
    let direction = f32::from(u8::from(input.right)) - f32::from(u8::from(input.left));
    state.paddle.steer(direction);
    state.paddle.confine(state.screen_size.x);

    if !state.ball.active && input.launch {
        state.ball.launch();
        events.push(GameEvent::Launched);
    }

    let outcome = if state.ball.active {
        step_ball(state, events)
    } else {
        state.ball.follow(&state.paddle);
        TickOutcome::Continue
    };

    // Debris keeps falling regardless of the ball
    update_particles(&mut state.generators, state.screen_size.y);

    outcome
}

/// Move a free ball and resolve walls, floor, paddle and bricks
fn step_ball(state: &mut GameState, events: &mut Vec<GameEvent>) -> TickOutcome {
    let GameState {
        screen_size,
        paddle,
        ball,
        bricks,
        generators,
    } = state;

    ball.pos += ball.vel;

    // Side walls and ceiling are independent; a corner flips both
    if ball.pos.x - ball.radius <= 0.0 || ball.pos.x + ball.radius >= screen_size.x {
        ball.vel.x = -ball.vel.x;
    }
    if ball.pos.y - ball.radius <= 0.0 {
        ball.vel.y = -ball.vel.y;
    }

    if ball.pos.y >= screen_size.y {
        ball.dock(paddle);
        paddle.lives = paddle.lives.saturating_sub(1);
        events.push(GameEvent::BallLost {
            lives_left: paddle.lives,
        });
        log::info!("Ball lost, {} lives left", paddle.lives);
        return if paddle.lives == 0 {
            TickOutcome::Lost
        } else {
            TickOutcome::Continue
        };
    }

    if circle_intersects_rect(ball.pos, ball.radius, &paddle.bounds) {
        // Steer by where the ball struck, relative to the paddle center
        ball.vel.x = (ball.pos.x - paddle.center_x()) / paddle.size.x * PADDLE_STEERING;
        ball.vel.y = -ball.vel.y;
        events.push(GameEvent::PaddleBounce);
    }

    // Every overlapping brick registers, in row-major order
    let mut outcome = TickOutcome::Continue;
    for row in 0..BRICK_LINES {
        for col in 0..BRICKS_PER_LINE {
            let Some(brick) = bricks.get_mut(row, col) else {
                continue;
            };
            if !brick.active || !circle_intersects_rect(ball.pos, ball.radius, &brick.bounds) {
                continue;
            }

            brick.active = false;
            ball.vel.y = -ball.vel.y;
            events.push(GameEvent::BrickDestroyed { row, col });

            if spawn_burst(generators, brick, row, col).is_none() {
                log::debug!("Particle pool full, dropping burst for brick ({row}, {col})");
                events.push(GameEvent::BurstDropped { row, col });
            }

            if !bricks.any_active() {
                log::info!("Last brick destroyed");
                outcome = TickOutcome::Won;
            }
        }
    }

    outcome
}
