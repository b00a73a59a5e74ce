//! Breakout - a single-screen brick-breaking arcade game
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (paddle, ball, bricks, particles)
//! - `game`: Title / Play / Game Over state machine
//! - `persistence`: Fixed-layout save blob and its storage
//! - `renderer`: Screen layout drawn onto an abstract canvas
//! - `platform`: Keyboard abstraction and per-frame input snapshot
//! - `audio`: Sound effect triggers
//! - `settings`: User preferences loaded from JSON

pub mod audio;
pub mod game;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::{Game, Screen};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// One simulation frame (the physics is tied to a 60 Hz cadence)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum simulation frames run per rendered frame
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Screen dimensions
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;
    pub const WINDOW_TITLE: &str = "Breakout";

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 25.0;
    pub const PADDLE_SPEED: f32 = 8.0; // px per frame
    pub const LIVES: u32 = 3;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_LAUNCH_SPEED: f32 = 5.0;
    /// Horizontal speed gained per paddle-width of offset from paddle center
    pub const PADDLE_STEERING: f32 = 5.0;

    /// Brick grid
    pub const BRICK_LINES: usize = 5;
    pub const BRICKS_PER_LINE: usize = 10;
    pub const BRICK_HEIGHT: f32 = 40.0;

    /// Particle bursts
    pub const PARTICLE_LINES: usize = 5;
    pub const PARTICLES_PER_LINE: usize = 10;
    pub const NUM_PARTICLE_GENERATORS: usize = 3;
    pub const PARTICLE_GRAVITY: f32 = 2.0; // px per frame²
}
