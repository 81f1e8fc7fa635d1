//! Canvas 2D renderer
//!
//! Pure read-side of the frame: takes the current [`GameState`] and
//! repaints the whole canvas. Draw order is background, boost bars,
//! enemies, food, trail, creature, particles, then the mutation menu
//! on top when it is open.

use std::f64::consts::TAU;

use web_sys::CanvasRenderingContext2d;

use crate::consts::*;
use crate::sim::{Color, Enemy, FoodKind, GameState, MutationKind, menu_buttons};

const GLOW_SCALE: f64 = 1.2;
const TRAIL_SHRINK: f64 = 0.8;
const ORBIT_RADIUS: f64 = 15.0;
const ORBIT_DOT_RADIUS: f64 = 2.0;
const PARTICLE_RADIUS: f64 = 2.0;
const TRAIL_COLOR: Color = Color::new(255, 100, 100);

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    pub fn draw(&self, state: &GameState) {
        self.ctx.set_fill_style_str("#000000");
        self.ctx
            .fill_rect(0.0, 0.0, CANVAS_WIDTH as f64, CANVAS_HEIGHT as f64);

        self.draw_boost_bars(state);
        self.draw_enemies(state);
        self.draw_food(state);
        self.draw_trail(state);
        self.draw_creature(state);
        self.draw_particles(state);
        if state.menu_open {
            self.draw_menu(state);
        }
    }

    fn fill_circle(&self, x: f64, y: f64, radius: f64, style: &str) {
        self.ctx.set_fill_style_str(style);
        self.ctx.begin_path();
        self.ctx.arc(x, y, radius, 0.0, TAU).unwrap();
        self.ctx.fill();
    }

    /// Active-boost indicators in the top-left corner
    fn draw_boost_bars(&self, state: &GameState) {
        if state.creature.speed_boost > 0 {
            self.ctx.set_fill_style_str("rgba(255, 0, 0, 0.3)");
            self.ctx.fill_rect(10.0, 10.0, 30.0, 10.0);
        }
        if state.creature.defense_boost > 0 {
            self.ctx.set_fill_style_str("rgba(0, 0, 255, 0.3)");
            self.ctx.fill_rect(50.0, 10.0, 30.0, 10.0);
        }
    }

    fn draw_enemies(&self, state: &GameState) {
        for enemy in &state.enemies {
            if enemy.glow > 0.0 {
                let glow_color = if enemy.speed_boost > 0 {
                    Color::new(255, 100, 100)
                } else {
                    Enemy::COLOR
                };
                self.fill_circle(
                    enemy.pos.x as f64,
                    enemy.pos.y as f64,
                    enemy.size as f64 * GLOW_SCALE,
                    &glow_color.css_alpha(enemy.glow * 0.3),
                );
            }
            self.fill_circle(
                enemy.pos.x as f64,
                enemy.pos.y as f64,
                enemy.size as f64,
                &Enemy::COLOR.css(),
            );
        }
    }

    fn draw_food(&self, state: &GameState) {
        for food in &state.food {
            let color = food.kind.color();
            self.fill_circle(
                food.pos.x as f64,
                food.pos.y as f64,
                food.size as f64,
                &color.css(),
            );

            match food.kind {
                FoodKind::Speed | FoodKind::Defense => {
                    // Three dots orbiting the pellet
                    for i in 0..3 {
                        let angle = state.fx.orbit_angle as f64 + i as f64 * (TAU / 3.0);
                        let px = food.pos.x as f64 + angle.cos() * ORBIT_RADIUS;
                        let py = food.pos.y as f64 + angle.sin() * ORBIT_RADIUS;
                        self.fill_circle(px, py, ORBIT_DOT_RADIUS, &color.css());
                    }
                }
                FoodKind::Bonus => {
                    // Pulsing ring
                    let radius = (food.size + 3.0 * state.fx.pulse) as f64;
                    self.ctx.set_stroke_style_str(&color.css_alpha(0.5));
                    self.ctx.begin_path();
                    self.ctx
                        .arc(food.pos.x as f64, food.pos.y as f64, radius, 0.0, TAU)
                        .unwrap();
                    self.ctx.stroke();
                }
                FoodKind::Normal => {}
            }
        }
    }

    fn draw_trail(&self, state: &GameState) {
        for point in &state.creature.trail {
            self.fill_circle(
                point.pos.x as f64,
                point.pos.y as f64,
                point.size as f64 * TRAIL_SHRINK,
                &TRAIL_COLOR.css_alpha(point.alpha * 0.3),
            );
        }
    }

    fn draw_creature(&self, state: &GameState) {
        let c = &state.creature;
        self.ctx.save();
        self.ctx.translate(c.pos.x as f64, c.pos.y as f64).unwrap();
        self.ctx.rotate(c.angle as f64).unwrap();

        if c.glow > 0.0 {
            let glow_color = if c.speed_boost > 0 {
                Color::new(255, 0, 0)
            } else {
                Color::new(0, 0, 255)
            };
            self.fill_circle(
                0.0,
                0.0,
                c.size as f64 * GLOW_SCALE,
                &glow_color.css_alpha(c.glow * 0.3),
            );
        }

        self.fill_circle(0.0, 0.0, c.size as f64, &c.color.css());

        // Both eyes on one path, facing along +x before rotation
        let size = c.size as f64;
        self.ctx.set_fill_style_str("#000000");
        self.ctx.begin_path();
        self.ctx
            .arc(size / 2.0, -size / 3.0, size / 5.0, 0.0, TAU)
            .unwrap();
        self.ctx
            .arc(size / 2.0, size / 3.0, size / 5.0, 0.0, TAU)
            .unwrap();
        self.ctx.fill();

        self.ctx.restore();
    }

    fn draw_particles(&self, state: &GameState) {
        for p in &state.particles {
            self.fill_circle(
                p.pos.x as f64,
                p.pos.y as f64,
                PARTICLE_RADIUS,
                &p.color.css_alpha(p.life),
            );
        }
    }

    /// Full-screen mutation picker. Geometry comes from `menu_buttons` so
    /// the hit test and the pixels can never disagree.
    fn draw_menu(&self, state: &GameState) {
        self.ctx.set_fill_style_str("rgba(0, 0, 0, 0.8)");
        self.ctx
            .fill_rect(0.0, 0.0, CANVAS_WIDTH as f64, CANVAS_HEIGHT as f64);

        self.ctx.set_font("20px Courier New");
        self.ctx.set_text_align("center");

        let buttons = menu_buttons();
        let center_x = CANVAS_WIDTH as f64 / 2.0;
        for button in &buttons {
            self.ctx.set_fill_style_str("rgba(50, 50, 50, 0.8)");
            self.ctx.fill_rect(
                button.pos.x as f64,
                button.pos.y as f64,
                button.size.x as f64,
                button.size.y as f64,
            );

            let (label, style) = match button.kind {
                MutationKind::Speed => ("Speed +0.5", "#00FF00"),
                MutationKind::Defense => ("Defense +1", "#0000FF"),
                MutationKind::Attack => ("Attack +1", "#FF0000"),
            };
            self.ctx.set_fill_style_str(style);
            self.ctx
                .fill_text(label, center_x, button.pos.y as f64 + 25.0)
                .unwrap();
        }

        self.ctx.set_fill_style_str("#FFFFFF");
        self.ctx
            .fill_text(
                &format!("Mutation Points: {}", state.mutation_points),
                center_x,
                buttons[0].pos.y as f64 - 30.0,
            )
            .unwrap();
    }
}
