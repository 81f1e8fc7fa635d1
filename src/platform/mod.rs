//! Host platform abstraction
//!
//! The game runs inside a messenger webview when one is present, and
//! headless otherwise. Everything the game wants from the host goes
//! through [`HostPlatform`]: haptic feedback, the player's identity and
//! score delivery at the end of a session. [`NullHost`] is the no-op
//! stand-in for native runs and tests.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sim::GameEvent;

#[cfg(target_arch = "wasm32")]
pub mod telegram;

/// Haptic feedback categories, mapped onto whatever the host offers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HapticKind {
    /// Physical contact, e.g. eating food
    Impact,
    /// Something was earned
    Notification,
    /// A menu choice was made
    Selection,
}

/// Player identity as reported by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostUser {
    pub id: String,
    pub username: String,
}

impl Default for HostUser {
    fn default() -> Self {
        Self {
            id: "unknown".into(),
            username: "anonymous".into(),
        }
    }
}

/// End-of-session result sent back to the host. Field names follow the
/// bot-side contract, hence the camelCase wire form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionReport {
    pub score: u32,
    /// Final growth level
    pub size: f32,
    pub user_id: String,
    pub username: String,
    /// ISO-8601, supplied by the caller
    pub timestamp: String,
}

impl SessionReport {
    pub fn new(score: u32, growth: f32, user: &HostUser, timestamp: String) -> Self {
        Self {
            score,
            size: growth,
            user_id: user.id.clone(),
            username: user.username.clone(),
            timestamp,
        }
    }
}

#[derive(Debug, Error)]
pub enum HostError {
    #[error("host API unavailable: {0}")]
    Unavailable(&'static str),
    #[error("host call failed: {0}")]
    Call(String),
    #[error("report encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Haptic cue for a game event, if it warrants one. Enemy activity
/// stays silent; only things the player did directly buzz.
pub fn haptic_for(event: &GameEvent) -> Option<HapticKind> {
    match event {
        GameEvent::FoodEaten { .. } => Some(HapticKind::Impact),
        GameEvent::MutationPointEarned => Some(HapticKind::Notification),
        GameEvent::MutationApplied { .. } => Some(HapticKind::Selection),
        GameEvent::EnemyAteFood { .. } | GameEvent::EnemyCollision { .. } => None,
    }
}

/// What the game needs from whatever is hosting it
pub trait HostPlatform {
    fn haptic(&self, kind: HapticKind);

    fn user(&self) -> HostUser;

    /// Hand the session result to the host
    fn deliver(&self, report: &SessionReport) -> Result<(), HostError>;
}

/// Host that logs instead of talking to anything
#[derive(Debug, Default)]
pub struct NullHost;

impl HostPlatform for NullHost {
    fn haptic(&self, kind: HapticKind) {
        log::trace!("haptic: {kind:?}");
    }

    fn user(&self) -> HostUser {
        HostUser::default()
    }

    fn deliver(&self, report: &SessionReport) -> Result<(), HostError> {
        log::info!(
            "session over: score {} size {:.1} for {}",
            report.score,
            report.size,
            report.username
        );
        Ok(())
    }
}
