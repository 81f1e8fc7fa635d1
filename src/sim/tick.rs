//! Per-frame simulation step
//!
//! `tick` advances the world exactly one frame: timed effects, visual
//! counters, player movement, enemy AI, feeding, collisions, population
//! maintenance, particles. One call per animation frame; all per-tick
//! rates assume 60 Hz. No rendering, no platform calls.

use glam::Vec2;
use rand::Rng;
use std::f32::consts::{FRAC_PI_2, PI, TAU};

use super::mutation;
use super::particles;
use super::spawn;
use super::state::{Enemy, FoodKind, GameEvent, GameState, TrailPoint};
use crate::canvas_center;
use crate::consts::*;

/// Input snapshot for a single tick. The held directions persist across
/// frames; `toggle_menu` and `click` are one-shots the harness clears
/// after the tick has seen them.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Menu key pressed this frame
    pub toggle_menu: bool,
    /// Canvas click this frame, in canvas coordinates
    pub click: Option<Vec2>,
}

impl TickInput {
    /// Reset the one-shot fields once a tick has consumed them
    pub fn clear_one_shots(&mut self) {
        self.toggle_menu = false;
        self.click = None;
    }
}

/// Advance the game by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    // Menu interactions always run; the world below only moves while the
    // menu is closed.
    if input.toggle_menu && state.mutation_points > 0 {
        state.menu_open = !state.menu_open;
    }
    if state.menu_open && state.mutation_points > 0 {
        if let Some(p) = input.click {
            if let Some(kind) = mutation::option_at(p) {
                mutation::apply(state, kind);
            }
        }
    }
    if state.menu_open {
        return;
    }

    step_creature_effects(state);
    step_shared_visuals(state);
    step_creature_visuals(state);
    move_creature(state, input);
    step_enemies(state);
    eat_food(state);

    // Population maintenance, one enemy per tick
    if state.enemies.len() < MAX_ENEMIES {
        spawn::spawn_enemy(state);
    }

    particles::step(&mut state.particles);
    state.tick_count = state.tick_count.wrapping_add(1);
}

/// Decrement the creature's boost timers and recompute its speed. The
/// boost still counts on the tick it reaches zero.
fn step_creature_effects(state: &mut GameState) {
    let c = &mut state.creature;
    let boosted = c.speed_boost > 0;
    if boosted {
        c.speed_boost -= 1;
    }
    c.speed = c.effective_speed(boosted);
    if c.defense_boost > 0 {
        c.defense_boost -= 1;
    }
}

/// Advance the shared food-effect counters
fn step_shared_visuals(state: &mut GameState) {
    state.fx.orbit_angle += ORBIT_STEP;
    if state.fx.pulse_dir > 0.0 {
        state.fx.pulse += PULSE_STEP;
        if state.fx.pulse >= 1.0 {
            state.fx.pulse_dir = -1.0;
        }
    } else {
        state.fx.pulse -= PULSE_STEP;
        if state.fx.pulse <= -1.0 {
            state.fx.pulse_dir = 1.0;
        }
    }
}

/// Trail accumulates while the speed boost is live, then clears; glow
/// eases toward 1 while any boost is active, back to 0 otherwise.
fn step_creature_visuals(state: &mut GameState) {
    let c = &mut state.creature;
    if c.speed_boost > 0 {
        c.trail.push(TrailPoint {
            pos: c.pos,
            size: c.size,
            alpha: 1.0,
        });
        for point in c.trail.iter_mut() {
            point.alpha -= TRAIL_ALPHA_DECAY;
        }
        c.trail.retain(|point| point.alpha > 0.0);
    } else {
        c.trail.clear();
    }
    if c.speed_boost > 0 || c.defense_boost > 0 {
        c.glow = (c.glow + GLOW_STEP).min(1.0);
    } else {
        c.glow = (c.glow - GLOW_STEP).max(0.0);
    }
}

/// Apply held directions, clamp to the canvas, refresh the facing angle
fn move_creature(state: &mut GameState, input: &TickInput) {
    let c = &mut state.creature;
    if input.up {
        c.pos.y -= c.speed;
    }
    if input.down {
        c.pos.y += c.speed;
    }
    if input.left {
        c.pos.x -= c.speed;
    }
    if input.right {
        c.pos.x += c.speed;
    }

    c.pos.x = c.pos.x.min(CANVAS_WIDTH - c.size).max(c.size);
    c.pos.y = c.pos.y.min(CANVAS_HEIGHT - c.size).max(c.size);

    // The last held key in this order wins the facing
    if input.right {
        c.angle = 0.0;
    }
    if input.left {
        c.angle = PI;
    }
    if input.up {
        c.angle = -FRAC_PI_2;
    }
    if input.down {
        c.angle = FRAC_PI_2;
    }
}

/// Move every enemy, feed it, and resolve its contact with the player.
/// Index walk: removals keep the visit order, and anything spawned during
/// the walk waits until the next tick.
fn step_enemies(state: &mut GameState) {
    let mut i = 0;
    let mut live = state.enemies.len();
    while i < live {
        let speed = step_enemy_effects(&mut state.enemies[i]);

        // Distance before moving; the player contact test below reuses it
        let to_player = state.creature.pos - state.enemies[i].pos;
        let player_dist = to_player.length();

        if player_dist < state.enemies[i].detection_radius {
            // Chase
            if player_dist > 0.0 {
                state.enemies[i].pos += to_player / player_dist * speed;
            }
        } else {
            wander(state, i, speed);
        }

        feed_enemy(state, i);

        if player_dist < state.creature.size + state.enemies[i].size {
            resolve_player_collision(state, i);
            state.enemies.remove(i);
            live -= 1;
            spawn::spawn_enemy(state);
        } else {
            i += 1;
        }
    }
}

/// Decrement the enemy's boost timers; returns its speed for this tick
fn step_enemy_effects(enemy: &mut Enemy) -> f32 {
    let speed = if enemy.speed_boost > 0 {
        enemy.speed_boost -= 1;
        ENEMY_BOOSTED_SPEED
    } else {
        ENEMY_SPEED
    };
    if enemy.power_boost > 0 {
        enemy.power_boost -= 1;
    }
    if enemy.speed_boost > 0 || enemy.power_boost > 0 {
        enemy.glow = (enemy.glow + GLOW_STEP).min(1.0);
    } else {
        enemy.glow = (enemy.glow - GLOW_STEP).max(0.0);
    }
    speed
}

/// Undirected roaming: hold a heading, re-roll it on a timer, and aim
/// back at the canvas center after drifting off the board.
fn wander(state: &mut GameState, idx: usize, speed: f32) {
    state.enemies[idx].turn_timer += 1;
    if state.enemies[idx].turn_timer > WANDER_TURN_TICKS {
        let heading = state.rng.random::<f32>() * TAU;
        state.enemies[idx].heading = heading;
        state.enemies[idx].turn_timer = 0;
    }

    let enemy = &mut state.enemies[idx];
    enemy.pos += Vec2::from_angle(enemy.heading) * speed;

    if enemy.pos.x < 0.0
        || enemy.pos.x > CANVAS_WIDTH
        || enemy.pos.y < 0.0
        || enemy.pos.y > CANVAS_HEIGHT
    {
        let to_center = canvas_center() - enemy.pos;
        enemy.heading = to_center.y.atan2(to_center.x);
    }
}

/// Let enemy `idx` eat any overlapping food, replacing each item eaten
fn feed_enemy(state: &mut GameState, idx: usize) {
    let mut j = 0;
    let mut live = state.food.len();
    while j < live {
        let food = state.food[j];
        let dist = state.enemies[idx].pos.distance(food.pos);
        if dist < state.enemies[idx].size + food.size {
            state.food.remove(j);
            live -= 1;
            match food.kind {
                FoodKind::Normal => state.enemies[idx].size += 0.5,
                FoodKind::Speed => state.enemies[idx].speed_boost = BOOST_DURATION_TICKS,
                FoodKind::Defense => state.enemies[idx].power_boost = BOOST_DURATION_TICKS,
                FoodKind::Bonus => {
                    state.enemies[idx].size += 1.0;
                    state.enemies[idx].detection_radius += 20.0;
                }
            }
            particles::burst(
                &mut state.particles,
                &mut state.rng,
                food.pos,
                food.kind.color(),
                ENEMY_BURST,
            );
            spawn::spawn_food(state);
            state.events.push(GameEvent::EnemyAteFood { kind: food.kind });
        } else {
            j += 1;
        }
    }
}

/// Contact damage to the player, gated on creature size. The enemy is
/// consumed by the caller regardless of the gate.
fn resolve_player_collision(state: &mut GameState, idx: usize) {
    let mut damage = 0.0;
    if state.creature.size > COLLISION_SIZE_GATE {
        let reduction = state.creature.mutations.defense as f32 * DEFENSE_REDUCTION_PER_LEVEL;
        let power = if state.enemies[idx].power_boost > 0 {
            POWER_BOOST_MULTIPLIER
        } else {
            1.0
        };
        damage = (COLLISION_BASE_DAMAGE * power * (1.0 - reduction)).max(COLLISION_MIN_DAMAGE);
        state.creature.size = (state.creature.size - damage).max(CREATURE_MIN_SIZE);
        state.growth = (state.growth - damage / 10.0).max(1.0);
        state.score = state.score.saturating_sub(COLLISION_SCORE_PENALTY);
    }
    let pos = state.enemies[idx].pos;
    particles::burst(
        &mut state.particles,
        &mut state.rng,
        pos,
        Enemy::COLOR,
        ENEMY_BURST,
    );
    state.events.push(GameEvent::EnemyCollision { damage });
}

/// Player food consumption pass
fn eat_food(state: &mut GameState) {
    let mut j = 0;
    let mut live = state.food.len();
    while j < live {
        let food = state.food[j];
        let dist = state.creature.pos.distance(food.pos);
        if dist < state.creature.size + food.size {
            state.food.remove(j);
            live -= 1;
            let points = food.kind.points();
            state.score += points;
            match food.kind {
                FoodKind::Normal => {
                    state.growth += 0.1;
                    state.creature.size += 1.0;
                }
                FoodKind::Speed => state.creature.speed_boost = BOOST_DURATION_TICKS,
                FoodKind::Defense => state.creature.defense_boost = BOOST_DURATION_TICKS,
                FoodKind::Bonus => {
                    state.growth += 0.2;
                    state.creature.size += 2.0;
                }
            }
            mutation::check_milestone(state);
            particles::burst(
                &mut state.particles,
                &mut state.rng,
                food.pos,
                food.kind.color(),
                FOOD_BURST,
            );
            spawn::spawn_food(state);
            state.events.push(GameEvent::FoodEaten { kind: food.kind, points });
        } else {
            j += 1;
        }
    }
}
