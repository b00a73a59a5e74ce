//! Frame-stepped simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One fixed step per frame, no delta-time scaling
//! - Stable row-major iteration order over bricks and particles
//! - No rendering, audio or platform dependencies (side effects are events)

pub mod collision;
pub mod particles;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::circle_intersects_rect;
pub use particles::{spawn_burst, update_particles};
pub use rect::Rect;
pub use state::{
    Ball, Brick, BrickGrid, BrickShade, GameState, Paddle, Particle, ParticleGenerator,
};
pub use tick::{GameEvent, TickInput, TickOutcome, tick};
