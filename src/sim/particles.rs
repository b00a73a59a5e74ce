//! Brick debris bursts
//!
//! A bounded pool of generators; each destroyed brick claims the first idle
//! one. When every generator is busy the burst is simply not shown.

use glam::Vec2;

use super::state::{Brick, BrickShade, ParticleGenerator};
use crate::consts::{PARTICLE_GRAVITY, PARTICLE_LINES, PARTICLES_PER_LINE};

/// Spawn a burst for the brick at (`row`, `col`)
///
/// Returns the index of the generator that took it, or `None` if the pool
/// was full.
pub fn spawn_burst(
    generators: &mut [ParticleGenerator],
    brick: &Brick,
    row: usize,
    col: usize,
) -> Option<usize> {
    let index = generators.iter().position(|g| !g.active)?;
    let generator = &mut generators[index];

    generator.active = true;
    generator.shade = BrickShade::for_cell(row, col);

    let cell = Vec2::new(
        brick.size.x / PARTICLES_PER_LINE as f32,
        brick.size.y / PARTICLE_LINES as f32,
    );
    let center = brick.center();

    for (line, particles) in generator.particles.iter_mut().enumerate() {
        for (slot, particle) in particles.iter_mut().enumerate() {
            let pos = brick.pos + Vec2::new(slot as f32 * cell.x, line as f32 * cell.y);
            particle.pos = pos;
            particle.size = cell;
            // Fly away from the brick center, faster the further out
            particle.vel = pos - center;
            particle.active = true;
        }
    }

    Some(index)
}

/// Advance every live particle by one frame
///
/// Particles fall under constant gravity and die once below `floor`.
pub fn update_particles(generators: &mut [ParticleGenerator], floor: f32) {
    for generator in generators.iter_mut().filter(|g| g.active) {
        for particle in generator.iter_mut().filter(|p| p.active) {
            particle.vel.y += PARTICLE_GRAVITY;
            particle.pos += particle.vel;
            if particle.pos.y >= floor {
                particle.active = false;
            }
        }
        generator.refresh_active();
    }
}
