//! Mutavore - a mutant-creature arcade survival game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (creature, enemies, food, mutations)
//! - `render`: Canvas 2D presentation (wasm only)
//! - `platform`: Telegram Mini App host bridge
//!
//! The simulation is fully deterministic: given the same seed and the same
//! sequence of [`sim::TickInput`] frames it replays the identical game. All
//! platform effects (haptics, score delivery) are surfaced as events and
//! handled outside the sim.

pub mod platform;
#[cfg(target_arch = "wasm32")]
pub mod render;
pub mod sim;

pub use platform::{HapticKind, SessionReport};
pub use sim::{GameEvent, GameState, TickInput};

use glam::Vec2;

/// Game tuning constants
pub mod consts {
    /// Playfield dimensions in CSS pixels
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Nominal tick rate. Durations below are tick counts assuming one
    /// sim tick per animation frame at 60 Hz.
    pub const TICK_HZ: u32 = 60;

    /// Creature defaults
    pub const CREATURE_START_SIZE: f32 = 20.0;
    pub const CREATURE_BASE_SPEED: f32 = 5.0;
    /// Collision damage can never shrink the creature below this
    pub const CREATURE_MIN_SIZE: f32 = 1.0;
    /// Speed lost per unit of size above SIZE_PENALTY_THRESHOLD
    pub const SIZE_PENALTY_RATE: f32 = 0.02;
    pub const SIZE_PENALTY_THRESHOLD: f32 = 20.0;
    /// Multiplier on base speed while a speed boost is active
    pub const SPEED_BOOST_FACTOR: f32 = 1.5;
    /// Effective speed floor regardless of size penalty
    pub const MIN_EFFECTIVE_SPEED: f32 = 1.0;
    /// Base speed gained per speed mutation level
    pub const SPEED_PER_MUTATION: f32 = 0.5;

    /// Food defaults
    pub const MAX_FOOD: usize = 5;
    pub const FOOD_SIZE: f32 = 10.0;
    /// Food spawns keep this margin from the right/bottom edges
    pub const FOOD_SPAWN_MARGIN: f32 = 20.0;

    /// Enemy defaults
    pub const MAX_ENEMIES: usize = 3;
    pub const ENEMY_SIZE: f32 = 15.0;
    pub const ENEMY_SPEED: f32 = 3.0;
    pub const ENEMY_BOOSTED_SPEED: f32 = 4.5;
    pub const ENEMY_DETECTION_RADIUS: f32 = 150.0;
    /// Enemies spawn this far outside the canvas edge
    pub const ENEMY_SPAWN_MARGIN: f32 = 20.0;
    /// Wandering enemies pick a new heading once their timer passes this
    pub const WANDER_TURN_TICKS: u32 = 60;

    /// Timed boosts last this many ticks (5 seconds at 60 Hz)
    pub const BOOST_DURATION_TICKS: u32 = 300;

    /// Collision damage
    pub const COLLISION_BASE_DAMAGE: f32 = 2.0;
    pub const COLLISION_MIN_DAMAGE: f32 = 0.5;
    /// Damage multiplier while the enemy holds a power boost
    pub const POWER_BOOST_MULTIPLIER: f32 = 1.5;
    /// Fractional damage reduction per defense mutation level
    pub const DEFENSE_REDUCTION_PER_LEVEL: f32 = 0.2;
    /// The creature only takes contact damage above this size
    pub const COLLISION_SIZE_GATE: f32 = 15.0;
    pub const COLLISION_SCORE_PENALTY: u32 = 20;

    /// Growth gained between mutation point awards
    pub const MUTATION_MILESTONE_STEP: f32 = 5.0;

    /// Mutation menu layout
    pub const MENU_BUTTON_WIDTH: f32 = 150.0;
    pub const MENU_BUTTON_HEIGHT: f32 = 40.0;
    pub const MENU_BUTTON_SPACING: f32 = 50.0;
    /// First button sits this far above the canvas midline
    pub const MENU_TOP_OFFSET: f32 = 60.0;

    /// Visual state rates, per tick
    pub const ORBIT_STEP: f32 = 0.05;
    pub const PULSE_STEP: f32 = 0.1;
    pub const GLOW_STEP: f32 = 0.1;
    pub const TRAIL_ALPHA_DECAY: f32 = 0.1;

    /// Particle defaults
    pub const PARTICLE_DECAY: f32 = 0.02;
    /// Velocity components are uniform in +-(PARTICLE_SPREAD / 2) per axis
    pub const PARTICLE_SPREAD: f32 = 4.0;
    pub const FOOD_BURST: usize = 10;
    pub const ENEMY_BURST: usize = 5;
    /// Hard cap; oldest particles are evicted first
    pub const MAX_PARTICLES: usize = 256;
}

/// Center of the playfield. Wandering enemies retarget here when they
/// drift off the canvas.
#[inline]
pub fn canvas_center() -> Vec2 {
    Vec2::new(consts::CANVAS_WIDTH / 2.0, consts::CANVAS_HEIGHT / 2.0)
}

/// Playfield extent as a vector
#[inline]
pub fn canvas_size() -> Vec2 {
    Vec2::new(consts::CANVAS_WIDTH, consts::CANVAS_HEIGHT)
}
