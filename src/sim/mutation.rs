//! Mutation points, stat upgrades and the upgrade menu
//!
//! Growth milestones earn points; points are spent through the three-button
//! menu. The menu geometry lives here so click hit-testing and rendering
//! agree on it.

use glam::Vec2;

use super::state::{GameEvent, GameState};
use crate::consts::*;

/// Upgradeable stats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    Speed,
    Defense,
    Attack,
}

impl MutationKind {
    pub const ALL: [MutationKind; 3] = [
        MutationKind::Speed,
        MutationKind::Defense,
        MutationKind::Attack,
    ];
}

/// One upgrade button in the mutation menu
#[derive(Debug, Clone, Copy)]
pub struct MenuButton {
    pub kind: MutationKind,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl MenuButton {
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.pos.x
            && p.x <= self.pos.x + self.size.x
            && p.y >= self.pos.y
            && p.y <= self.pos.y + self.size.y
    }
}

/// The three menu buttons, horizontally centered and stacked from just
/// above the canvas midline.
pub fn menu_buttons() -> [MenuButton; 3] {
    let x = (CANVAS_WIDTH - MENU_BUTTON_WIDTH) / 2.0;
    let top = CANVAS_HEIGHT / 2.0 - MENU_TOP_OFFSET;
    let size = Vec2::new(MENU_BUTTON_WIDTH, MENU_BUTTON_HEIGHT);
    let mut buttons = [MenuButton {
        kind: MutationKind::Speed,
        pos: Vec2::new(x, top),
        size,
    }; 3];
    for (i, kind) in MutationKind::ALL.into_iter().enumerate() {
        buttons[i] = MenuButton {
            kind,
            pos: Vec2::new(x, top + i as f32 * MENU_BUTTON_SPACING),
            size,
        };
    }
    buttons
}

/// Map a canvas click to the button under it, if any
pub fn option_at(p: Vec2) -> Option<MutationKind> {
    menu_buttons().iter().find(|b| b.contains(p)).map(|b| b.kind)
}

/// Spend one mutation point on `kind`. Returns false, changing nothing,
/// when the balance is empty.
pub fn apply(state: &mut GameState, kind: MutationKind) -> bool {
    if state.mutation_points == 0 {
        return false;
    }
    state.mutation_points -= 1;
    *state.creature.mutations.level_mut(kind) += 1;
    if kind == MutationKind::Speed {
        // The per-tick speed recompute reaches the same value from the
        // level; bumping here keeps the stat live within this frame.
        state.creature.speed += SPEED_PER_MUTATION;
    }
    state.creature.color = state.creature.body_color();
    state.menu_open = false;
    state.events.push(GameEvent::MutationApplied { kind });
    true
}

/// Award a mutation point when growth crosses the next milestone and pop
/// the menu open.
pub fn check_milestone(state: &mut GameState) {
    if state.growth >= state.last_milestone + MUTATION_MILESTONE_STEP {
        state.mutation_points += 1;
        state.last_milestone = state.growth.floor();
        state.menu_open = true;
        state.events.push(GameEvent::MutationPointEarned);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Color;

    #[test]
    fn test_milestone_award_and_floor() {
        let mut state = GameState::new(1);
        state.growth = 6.3;
        check_milestone(&mut state);
        assert_eq!(state.mutation_points, 1);
        assert_eq!(state.last_milestone, 6.0);
        assert!(state.menu_open);
        assert!(state.events.contains(&GameEvent::MutationPointEarned));

        // The next point needs growth 11, not 11.3
        state.menu_open = false;
        state.growth = 10.9;
        check_milestone(&mut state);
        assert_eq!(state.mutation_points, 1);
        state.growth = 11.0;
        check_milestone(&mut state);
        assert_eq!(state.mutation_points, 2);
        assert_eq!(state.last_milestone, 11.0);
    }

    #[test]
    fn test_milestone_below_step() {
        let mut state = GameState::new(2);
        state.growth = 5.9;
        check_milestone(&mut state);
        assert_eq!(state.mutation_points, 0);
        assert!(!state.menu_open);
    }

    #[test]
    fn test_apply_without_points_is_noop() {
        let mut state = GameState::new(3);
        let speed_before = state.creature.speed;
        assert!(!apply(&mut state, MutationKind::Speed));
        assert_eq!(state.creature.mutations.speed, 0);
        assert_eq!(state.creature.speed, speed_before);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_apply_speed() {
        let mut state = GameState::new(4);
        state.mutation_points = 1;
        state.menu_open = true;
        assert!(apply(&mut state, MutationKind::Speed));
        assert_eq!(state.mutation_points, 0);
        assert_eq!(state.creature.mutations.speed, 1);
        assert_eq!(state.creature.speed, CREATURE_BASE_SPEED + SPEED_PER_MUTATION);
        assert!(!state.menu_open);
        assert!(state
            .events
            .contains(&GameEvent::MutationApplied { kind: MutationKind::Speed }));
    }

    #[test]
    fn test_apply_recolors_creature() {
        let mut state = GameState::new(5);
        state.mutation_points = 2;
        apply(&mut state, MutationKind::Attack);
        assert_eq!(state.creature.color, Color::new(50, 255, 0));
        apply(&mut state, MutationKind::Defense);
        assert_eq!(state.creature.color, Color::new(50, 255, 50));
    }

    #[test]
    fn test_menu_geometry() {
        let buttons = menu_buttons();
        assert_eq!(buttons[0].pos, Vec2::new(325.0, 240.0));
        assert_eq!(buttons[1].pos.y, 290.0);
        assert_eq!(buttons[2].pos.y, 340.0);
        assert!(buttons.iter().all(|b| b.size == Vec2::new(150.0, 40.0)));
        assert_eq!(buttons[0].kind, MutationKind::Speed);
        assert_eq!(buttons[2].kind, MutationKind::Attack);
    }

    #[test]
    fn test_option_at_hits_and_misses() {
        assert_eq!(option_at(Vec2::new(400.0, 260.0)), Some(MutationKind::Speed));
        // Button edges are inclusive
        assert_eq!(option_at(Vec2::new(325.0, 290.0)), Some(MutationKind::Defense));
        assert_eq!(option_at(Vec2::new(475.0, 380.0)), Some(MutationKind::Attack));
        assert_eq!(option_at(Vec2::new(400.0, 1.0)), None);
        assert_eq!(option_at(Vec2::new(324.0, 260.0)), None);
        // The gap between buttons is not a hit
        assert_eq!(option_at(Vec2::new(400.0, 285.0)), None);
    }
}
