//! Entity spawning under population caps

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use std::f32::consts::TAU;

use super::state::{Enemy, Food, FoodKind, GameState};
use crate::consts::*;

/// Weighted food-kind draw: one uniform roll walked along the cumulative
/// weights. Falls back to Normal if the walk runs off the table.
fn pick_food_kind(rng: &mut Pcg32) -> FoodKind {
    let roll: f32 = rng.random();
    let mut accumulated = 0.0;
    for kind in FoodKind::ALL {
        accumulated += kind.weight();
        if roll <= accumulated {
            return kind;
        }
    }
    FoodKind::Normal
}

/// Add one food item unless the board is full
pub fn spawn_food(state: &mut GameState) {
    if state.food.len() >= MAX_FOOD {
        return;
    }
    let kind = pick_food_kind(&mut state.rng);
    let pos = Vec2::new(
        state.rng.random::<f32>() * (CANVAS_WIDTH - FOOD_SPAWN_MARGIN),
        state.rng.random::<f32>() * (CANVAS_HEIGHT - FOOD_SPAWN_MARGIN),
    );
    state.food.push(Food {
        pos,
        size: FOOD_SIZE,
        kind,
    });
}

/// Add one enemy just outside a random canvas edge, unless at the cap
pub fn spawn_enemy(state: &mut GameState) {
    if state.enemies.len() >= MAX_ENEMIES {
        return;
    }
    let pos = match state.rng.random_range(0..4u8) {
        // top
        0 => Vec2::new(
            state.rng.random::<f32>() * CANVAS_WIDTH,
            -ENEMY_SPAWN_MARGIN,
        ),
        // right
        1 => Vec2::new(
            CANVAS_WIDTH + ENEMY_SPAWN_MARGIN,
            state.rng.random::<f32>() * CANVAS_HEIGHT,
        ),
        // bottom
        2 => Vec2::new(
            state.rng.random::<f32>() * CANVAS_WIDTH,
            CANVAS_HEIGHT + ENEMY_SPAWN_MARGIN,
        ),
        // left
        _ => Vec2::new(
            -ENEMY_SPAWN_MARGIN,
            state.rng.random::<f32>() * CANVAS_HEIGHT,
        ),
    };
    state.enemies.push(Enemy {
        pos,
        size: ENEMY_SIZE,
        detection_radius: ENEMY_DETECTION_RADIUS,
        heading: state.rng.random::<f32>() * TAU,
        turn_timer: 0,
        speed_boost: 0,
        power_boost: 0,
        glow: 0.0,
    });
}
