//! Deterministic game simulation
//!
//! The sim is a plain state machine: [`GameState`] plus [`tick`], fed one
//! [`TickInput`] per frame. It never touches the DOM, the canvas or the
//! host platform, which keeps it runnable and testable on native targets.

pub mod mutation;
pub mod particles;
pub mod spawn;
pub mod state;
pub mod tick;

pub use mutation::{MenuButton, MutationKind, menu_buttons};
pub use particles::Particle;
pub use state::{
    Color, Creature, Enemy, Food, FoodKind, GameEvent, GameState, Mutations, TrailPoint, VisualFx,
};
pub use tick::{TickInput, tick};
