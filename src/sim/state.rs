//! Game state and core simulation types
//!
//! Everything the play field needs lives in [`GameState`]; one instance is
//! created at start-up and reset in place between runs.

use glam::Vec2;

use super::rect::Rect;
use crate::consts::*;

/// The player's paddle
#[derive(Debug, Clone)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Horizontal movement per frame while a direction key is held
    pub speed: f32,
    /// Collision rectangle, refreshed from `pos` every frame
    pub bounds: Rect,
    pub lives: u32,
}

impl Default for Paddle {
    fn default() -> Self {
        let pos = Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT * 7.0 / 8.0);
        let size = Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT);
        Self {
            pos,
            size,
            speed: PADDLE_SPEED,
            bounds: Rect::from_pos_size(pos, size),
            lives: LIVES,
        }
    }
}

impl Paddle {
    /// Horizontal center (where a docked ball sits)
    #[inline]
    pub fn center_x(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }

    /// Move by `direction * speed` (direction is -1, 0 or 1)
    pub fn steer(&mut self, direction: f32) {
        self.pos.x += direction * self.speed;
    }

    /// Keep the paddle fully on screen and refresh its bounds
    pub fn confine(&mut self, screen_width: f32) {
        if self.pos.x <= 0.0 {
            self.pos.x = 0.0;
        }
        if self.pos.x + self.size.x >= screen_width {
            self.pos.x = screen_width - self.size.x;
        }
        self.bounds = Rect::from_pos_size(self.pos, self.size);
    }
}

/// The ball
///
/// Inactive means docked: it rides on top of the paddle until launched.
#[derive(Debug, Clone)]
pub struct Ball {
    /// Center
    pub pos: Vec2,
    pub radius: f32,
    pub vel: Vec2,
    pub active: bool,
}

impl Ball {
    pub fn docked_on(paddle: &Paddle) -> Self {
        let mut ball = Self {
            pos: Vec2::ZERO,
            radius: BALL_RADIUS,
            vel: Vec2::new(4.0, 4.0),
            active: false,
        };
        ball.dock(paddle);
        ball
    }

    /// Deactivate and snap onto the paddle
    pub fn dock(&mut self, paddle: &Paddle) {
        self.active = false;
        self.pos = Vec2::new(paddle.center_x(), paddle.pos.y - self.radius);
    }

    /// Track the paddle horizontally while docked
    pub fn follow(&mut self, paddle: &Paddle) {
        self.pos.x = paddle.center_x();
    }

    /// Leave the paddle straight upward
    pub fn launch(&mut self) {
        self.active = true;
        self.vel = Vec2::new(0.0, -BALL_LAUNCH_SPEED);
    }
}

/// Two alternating shades used for bricks and their debris
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrickShade {
    Gray,
    #[default]
    DarkGray,
}

impl BrickShade {
    /// Odd `row + col` is gray, even is dark gray
    pub fn for_cell(row: usize, col: usize) -> Self {
        if (row + col) % 2 == 1 {
            BrickShade::Gray
        } else {
            BrickShade::DarkGray
        }
    }
}

/// A single brick
#[derive(Debug, Clone)]
pub struct Brick {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub bounds: Rect,
    pub active: bool,
}

impl Brick {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            size,
            bounds: Rect::from_pos_size(pos, size),
            active: true,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.bounds.center()
    }
}

/// Fixed grid of bricks, addressed `[row][col]`
///
/// Row-major order is load-bearing: it is the collision scan order and the
/// save blob layout.
#[derive(Debug, Clone)]
pub struct BrickGrid {
    rows: [[Brick; BRICKS_PER_LINE]; BRICK_LINES],
}

impl BrickGrid {
    /// Lay the grid out across the full screen width from the top edge
    pub fn new(screen_width: f32) -> Self {
        let size = Vec2::new(screen_width / BRICKS_PER_LINE as f32, BRICK_HEIGHT);
        let rows = std::array::from_fn(|row| {
            std::array::from_fn(|col| {
                Brick::new(Vec2::new(col as f32 * size.x, row as f32 * size.y), size)
            })
        });
        Self { rows }
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Brick> {
        self.rows.get(row)?.get(col)
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut Brick> {
        self.rows.get_mut(row)?.get_mut(col)
    }

    /// Bricks with their (row, col) in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &Brick)> {
        self.rows.iter().enumerate().flat_map(|(row, line)| {
            line.iter()
                .enumerate()
                .map(move |(col, brick)| (row, col, brick))
        })
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (usize, usize, &mut Brick)> {
        self.rows.iter_mut().enumerate().flat_map(|(row, line)| {
            line.iter_mut()
                .enumerate()
                .map(move |(col, brick)| (row, col, brick))
        })
    }

    pub fn any_active(&self) -> bool {
        self.iter().any(|(_, _, brick)| brick.active)
    }

    pub fn active_count(&self) -> usize {
        self.iter().filter(|(_, _, brick)| brick.active).count()
    }

    /// Active flags in row-major order
    pub fn active_flags(&self) -> [[bool; BRICKS_PER_LINE]; BRICK_LINES] {
        std::array::from_fn(|row| std::array::from_fn(|col| self.rows[row][col].active))
    }

    pub fn set_active_flags(&mut self, flags: &[[bool; BRICKS_PER_LINE]; BRICK_LINES]) {
        for (row, col, brick) in self.iter_mut() {
            brick.active = flags[row][col];
        }
    }

    /// Bring every brick back
    pub fn reset(&mut self) {
        for (_, _, brick) in self.iter_mut() {
            brick.active = true;
        }
    }
}

/// A piece of debris from a destroyed brick
#[derive(Debug, Clone, Copy, Default)]
pub struct Particle {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,
    pub active: bool,
}

/// Fixed pool of particles for one brick burst
///
/// Active exactly while at least one of its particles is.
#[derive(Debug, Clone, Default)]
pub struct ParticleGenerator {
    pub particles: [[Particle; PARTICLES_PER_LINE]; PARTICLE_LINES],
    pub shade: BrickShade,
    pub active: bool,
}

impl ParticleGenerator {
    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter().flatten()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Particle> {
        self.particles.iter_mut().flatten()
    }

    /// Recompute `active` from the particles
    pub fn refresh_active(&mut self) {
        self.active = self.particles.iter().flatten().any(|p| p.active);
    }

    pub fn clear(&mut self) {
        self.active = false;
        for particle in self.iter_mut() {
            particle.active = false;
        }
    }
}

/// Complete play-field state
#[derive(Debug, Clone)]
pub struct GameState {
    pub screen_size: Vec2,
    pub paddle: Paddle,
    pub ball: Ball,
    pub bricks: BrickGrid,
    pub generators: [ParticleGenerator; NUM_PARTICLE_GENERATORS],
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Fresh play field: full grid, docked ball, full lives
    pub fn new() -> Self {
        let paddle = Paddle::default();
        let ball = Ball::docked_on(&paddle);
        Self {
            screen_size: Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT),
            paddle,
            ball,
            bricks: BrickGrid::new(SCREEN_WIDTH),
            generators: Default::default(),
        }
    }

    /// Restore bricks, lives, ball and particles for a new run
    ///
    /// The paddle keeps its horizontal position.
    pub fn reset(&mut self) {
        self.bricks.reset();
        self.paddle.lives = LIVES;
        self.ball.dock(&self.paddle);
        for generator in &mut self.generators {
            generator.clear();
        }
    }

    pub fn active_generators(&self) -> usize {
        self.generators.iter().filter(|g| g.active).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_layout() {
        let state = GameState::new();
        assert_eq!(state.paddle.pos, Vec2::new(400.0, 525.0));
        assert_eq!(state.paddle.lives, LIVES);
        assert!(!state.ball.active);
        assert_eq!(state.ball.pos, Vec2::new(450.0, 515.0));
        assert_eq!(state.bricks.active_count(), BRICK_LINES * BRICKS_PER_LINE);
        assert_eq!(state.active_generators(), 0);
    }

    #[test]
    fn test_brick_grid_geometry() {
        let grid = BrickGrid::new(800.0);
        let brick = grid.get(2, 3).unwrap();
        assert_eq!(brick.size, Vec2::new(80.0, 40.0));
        assert_eq!(brick.pos, Vec2::new(240.0, 80.0));
        assert_eq!(brick.bounds, Rect::new(240.0, 80.0, 80.0, 40.0));
        assert!(grid.get(BRICK_LINES, 0).is_none());
        assert!(grid.get(0, BRICKS_PER_LINE).is_none());
    }

    #[test]
    fn test_grid_iterates_row_major() {
        let grid = BrickGrid::new(800.0);
        let order: Vec<_> = grid.iter().take(12).map(|(r, c, _)| (r, c)).collect();
        assert_eq!(order[9], (0, 9));
        assert_eq!(order[10], (1, 0));
        assert_eq!(order[11], (1, 1));
    }

    #[test]
    fn test_paddle_confine() {
        let mut paddle = Paddle::default();
        paddle.pos.x = -12.0;
        paddle.confine(800.0);
        assert_eq!(paddle.pos.x, 0.0);
        assert_eq!(paddle.bounds.x, 0.0);

        paddle.pos.x = 750.0;
        paddle.confine(800.0);
        assert_eq!(paddle.pos.x, 700.0);
    }

    #[test]
    fn test_shade_alternates() {
        assert_eq!(BrickShade::for_cell(0, 0), BrickShade::DarkGray);
        assert_eq!(BrickShade::for_cell(0, 1), BrickShade::Gray);
        assert_eq!(BrickShade::for_cell(1, 0), BrickShade::Gray);
        assert_eq!(BrickShade::for_cell(3, 5), BrickShade::DarkGray);
    }

    #[test]
    fn test_generator_active_tracks_particles() {
        let mut generator = ParticleGenerator::default();
        generator.particles[2][7].active = true;
        generator.refresh_active();
        assert!(generator.active);

        generator.particles[2][7].active = false;
        generator.refresh_active();
        assert!(!generator.active);
    }

    #[test]
    fn test_reset_restores_run() {
        let mut state = GameState::new();
        state.bricks.get_mut(0, 0).unwrap().active = false;
        state.paddle.lives = 1;
        state.paddle.pos.x = 100.0;
        state.ball.launch();
        state.generators[1].active = true;

        state.reset();
        assert!(state.bricks.get(0, 0).unwrap().active);
        assert_eq!(state.paddle.lives, LIVES);
        assert!(!state.ball.active);
        assert_eq!(state.ball.pos.x, 150.0);
        assert_eq!(state.active_generators(), 0);
    }
}
