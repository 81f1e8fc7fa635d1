//! Cosmetic particle bursts
//!
//! Particles are visual only and never affect gameplay. They still draw
//! their randomness from the session RNG so replays stay bit-identical.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::state::Color;
use crate::consts::*;

/// A single burst particle
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub color: Color,
    /// Remaining life in [0, 1]; doubles as the draw alpha
    pub life: f32,
}

/// Emit `count` particles at `pos` with small random velocities. The
/// oldest particles are evicted once the cap is reached.
pub fn burst(particles: &mut Vec<Particle>, rng: &mut Pcg32, pos: Vec2, color: Color, count: usize) {
    for _ in 0..count {
        let vel = Vec2::new(
            (rng.random::<f32>() - 0.5) * PARTICLE_SPREAD,
            (rng.random::<f32>() - 0.5) * PARTICLE_SPREAD,
        );
        particles.push(Particle {
            pos,
            vel,
            color,
            life: 1.0,
        });
    }
    if particles.len() > MAX_PARTICLES {
        let excess = particles.len() - MAX_PARTICLES;
        particles.drain(..excess);
    }
}

/// Advance and expire particles for one tick
pub fn step(particles: &mut Vec<Particle>) {
    for p in particles.iter_mut() {
        p.pos += p.vel;
        p.life -= PARTICLE_DECAY;
    }
    particles.retain(|p| p.life > 0.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_burst_count_and_spread() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut particles = Vec::new();
        burst(
            &mut particles,
            &mut rng,
            Vec2::new(10.0, 20.0),
            Color::new(255, 0, 0),
            10,
        );
        assert_eq!(particles.len(), 10);
        for p in &particles {
            assert_eq!(p.pos, Vec2::new(10.0, 20.0));
            assert_eq!(p.life, 1.0);
            assert!(p.vel.x.abs() <= PARTICLE_SPREAD / 2.0);
            assert!(p.vel.y.abs() <= PARTICLE_SPREAD / 2.0);
        }
    }

    #[test]
    fn test_burst_evicts_oldest_at_cap() {
        let mut rng = Pcg32::seed_from_u64(2);
        let mut particles = Vec::new();
        burst(&mut particles, &mut rng, Vec2::ZERO, Color::new(0, 255, 0), MAX_PARTICLES);
        let newer = Vec2::new(50.0, 50.0);
        burst(&mut particles, &mut rng, newer, Color::new(0, 255, 0), 5);
        assert_eq!(particles.len(), MAX_PARTICLES);
        // The five oldest made room for the five newest
        assert!(particles[MAX_PARTICLES - 5..].iter().all(|p| p.pos == newer));
        assert!(particles[..MAX_PARTICLES - 5].iter().all(|p| p.pos == Vec2::ZERO));
    }

    #[test]
    fn test_step_moves_and_expires() {
        let mut particles = vec![
            Particle {
                pos: Vec2::ZERO,
                vel: Vec2::new(1.0, -1.0),
                color: Color::new(255, 255, 0),
                life: 1.0,
            },
            Particle {
                pos: Vec2::ZERO,
                vel: Vec2::ZERO,
                color: Color::new(255, 255, 0),
                life: 0.01,
            },
        ];
        step(&mut particles);
        assert_eq!(particles.len(), 1);
        assert_eq!(particles[0].pos, Vec2::new(1.0, -1.0));
        assert!((particles[0].life - (1.0 - PARTICLE_DECAY)).abs() < 1e-6);
    }

    #[test]
    fn test_particle_lifetime() {
        let mut particles = vec![Particle {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            color: Color::new(0, 0, 255),
            life: 1.0,
        }];
        for _ in 0..49 {
            step(&mut particles);
        }
        // 0.02/tick decay keeps it alive just under 50 ticks
        assert_eq!(particles.len(), 1);
        for _ in 0..3 {
            step(&mut particles);
        }
        assert!(particles.is_empty());
    }
}
