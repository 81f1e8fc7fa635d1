//! Game state and core simulation types
//!
//! Everything the tick function mutates and the renderer reads lives here.
//! All randomness flows through the seeded RNG carried in `GameState`, so a
//! session replays identically from its seed and input sequence.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::mutation::MutationKind;
use super::particles::Particle;
use super::spawn;
use crate::canvas_center;
use crate::consts::*;

/// RGB color triple, formatted as CSS on demand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS `rgb(...)` string
    pub fn css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// CSS `rgba(...)` string with the given alpha
    pub fn css_alpha(&self, alpha: f32) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

/// Food varieties. The enum is the whole food table: color, point value
/// and spawn weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoodKind {
    Normal,
    Speed,
    Defense,
    Bonus,
}

impl FoodKind {
    pub const ALL: [FoodKind; 4] = [
        FoodKind::Normal,
        FoodKind::Speed,
        FoodKind::Defense,
        FoodKind::Bonus,
    ];

    /// Score awarded when the player eats this kind
    pub fn points(self) -> u32 {
        match self {
            FoodKind::Normal => 10,
            FoodKind::Speed => 15,
            FoodKind::Defense => 15,
            FoodKind::Bonus => 30,
        }
    }

    pub fn color(self) -> Color {
        match self {
            FoodKind::Normal => Color::new(0, 255, 0),
            FoodKind::Speed => Color::new(255, 0, 0),
            FoodKind::Defense => Color::new(0, 0, 255),
            FoodKind::Bonus => Color::new(255, 255, 0),
        }
    }

    /// Relative spawn weight; the weights sum to 1
    pub fn weight(self) -> f32 {
        match self {
            FoodKind::Normal => 0.7,
            FoodKind::Speed => 0.1,
            FoodKind::Defense => 0.1,
            FoodKind::Bonus => 0.1,
        }
    }
}

/// A food pellet
#[derive(Debug, Clone, Copy)]
pub struct Food {
    pub pos: Vec2,
    pub size: f32,
    pub kind: FoodKind,
}

/// Per-stat mutation levels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Mutations {
    pub speed: u32,
    pub defense: u32,
    pub attack: u32,
}

impl Mutations {
    pub fn level(&self, kind: MutationKind) -> u32 {
        match kind {
            MutationKind::Speed => self.speed,
            MutationKind::Defense => self.defense,
            MutationKind::Attack => self.attack,
        }
    }

    pub fn level_mut(&mut self, kind: MutationKind) -> &mut u32 {
        match kind {
            MutationKind::Speed => &mut self.speed,
            MutationKind::Defense => &mut self.defense,
            MutationKind::Attack => &mut self.attack,
        }
    }
}

/// Trail segment dropped behind the creature while speed-boosted
#[derive(Debug, Clone, Copy)]
pub struct TrailPoint {
    pub pos: Vec2,
    pub size: f32,
    pub alpha: f32,
}

/// The player's creature
#[derive(Debug, Clone)]
pub struct Creature {
    pub pos: Vec2,
    /// Body radius in pixels
    pub size: f32,
    /// Effective speed, recomputed every tick
    pub speed: f32,
    /// Facing angle for rendering
    pub angle: f32,
    pub mutations: Mutations,
    /// Body color, refreshed when a mutation is applied
    pub color: Color,
    /// Remaining ticks of each timed boost
    pub speed_boost: u32,
    pub defense_boost: u32,
    pub trail: Vec<TrailPoint>,
    /// Aura intensity in [0, 1]
    pub glow: f32,
}

impl Creature {
    pub fn new() -> Self {
        Self {
            pos: canvas_center(),
            size: CREATURE_START_SIZE,
            speed: CREATURE_BASE_SPEED,
            angle: 0.0,
            mutations: Mutations::default(),
            color: Color::new(0, 255, 0),
            speed_boost: 0,
            defense_boost: 0,
            trail: Vec::new(),
            glow: 0.0,
        }
    }

    /// Speed for this tick: the base (multiplied by the boost factor
    /// before the size penalty is taken) minus the over-threshold size
    /// penalty plus the mutation bonus, floored at 1.
    pub fn effective_speed(&self, boosted: bool) -> f32 {
        let penalty = ((self.size - SIZE_PENALTY_THRESHOLD) * SIZE_PENALTY_RATE).max(0.0);
        let bonus = self.mutations.speed as f32 * SPEED_PER_MUTATION;
        let base = if boosted {
            CREATURE_BASE_SPEED * SPEED_BOOST_FACTOR
        } else {
            CREATURE_BASE_SPEED
        };
        (base - penalty + bonus).max(MIN_EFFECTIVE_SPEED)
    }

    /// Body color from mutation levels: attack reddens, defense blues
    pub fn body_color(&self) -> Color {
        Color::new(
            (self.mutations.attack * 50).min(255) as u8,
            255,
            (self.mutations.defense * 50).min(255) as u8,
        )
    }
}

impl Default for Creature {
    fn default() -> Self {
        Self::new()
    }
}

/// A roaming enemy
#[derive(Debug, Clone)]
pub struct Enemy {
    pub pos: Vec2,
    pub size: f32,
    /// How far it senses the creature
    pub detection_radius: f32,
    /// Wander heading in radians
    pub heading: f32,
    /// Ticks since the last wander turn
    pub turn_timer: u32,
    pub speed_boost: u32,
    pub power_boost: u32,
    pub glow: f32,
}

impl Enemy {
    pub const COLOR: Color = Color::new(255, 0, 0);
}

/// Shared animation counters for food effects
#[derive(Debug, Clone, Copy)]
pub struct VisualFx {
    /// Orbit angle for the speed/defense food dots
    pub orbit_angle: f32,
    /// Pulse offset for bonus food rings, swings across [-1, 1]
    pub pulse: f32,
    pub pulse_dir: f32,
}

impl VisualFx {
    fn new() -> Self {
        Self {
            orbit_angle: 0.0,
            pulse: 0.0,
            pulse_dir: 1.0,
        }
    }
}

/// Observable things that happened during a tick. The harness drains
/// these each frame for haptics and logging; the sim never reads them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    FoodEaten { kind: FoodKind, points: u32 },
    EnemyAteFood { kind: FoodKind },
    EnemyCollision { damage: f32 },
    MutationPointEarned,
    MutationApplied { kind: MutationKind },
}

/// Complete game state. Owned by the harness; `tick` mutates it in place.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// All simulation randomness comes from here
    pub rng: Pcg32,
    pub tick_count: u64,
    pub score: u32,
    /// Growth metric shown in the HUD; drives mutation milestones
    pub growth: f32,
    pub mutation_points: u32,
    /// Growth level at the last mutation point award
    pub last_milestone: f32,
    pub creature: Creature,
    pub enemies: Vec<Enemy>,
    pub food: Vec<Food>,
    pub particles: Vec<Particle>,
    pub fx: VisualFx,
    /// Mutation menu visibility; gates the whole sim while open
    pub menu_open: bool,
    /// Events since the last drain
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a session: creature centered, one food item and one enemy
    /// on the board. Per-tick maintenance fills the enemy count.
    pub fn new(seed: u64) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tick_count: 0,
            score: 0,
            growth: 1.0,
            mutation_points: 0,
            last_milestone: 1.0,
            creature: Creature::new(),
            enemies: Vec::new(),
            food: Vec::new(),
            particles: Vec::new(),
            fx: VisualFx::new(),
            menu_open: false,
            events: Vec::new(),
        };
        spawn::spawn_food(&mut state);
        spawn::spawn_enemy(&mut state);
        state
    }

    /// Take the events accumulated since the previous drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
