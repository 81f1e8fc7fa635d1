//! Telegram Mini App host
//!
//! Thin bridge over `window.Telegram.WebApp`. Every shim tolerates the
//! page running outside Telegram, so the game still works in a plain
//! browser tab; the host just reports itself unavailable.

use wasm_bindgen::prelude::*;

use super::{HapticKind, HostError, HostPlatform, HostUser, SessionReport};

#[wasm_bindgen(inline_js = "
    export function tg_init() {
        const tg = window.Telegram?.WebApp;
        if (!tg) return false;
        tg.ready();
        tg.expand();
        document.body.className = tg.colorScheme;
        return true;
    }

    export function tg_haptic(kind) {
        const haptic = window.Telegram?.WebApp?.HapticFeedback;
        if (!haptic) return;
        switch (kind) {
            case 'impact': haptic.impactOccurred('medium'); break;
            case 'notification': haptic.notificationOccurred('success'); break;
            case 'selection': haptic.selectionChanged(); break;
        }
    }

    export function tg_user_id() {
        const user = window.Telegram?.WebApp?.initDataUnsafe?.user;
        return user?.id != null ? String(user.id) : '';
    }

    export function tg_username() {
        return window.Telegram?.WebApp?.initDataUnsafe?.user?.username ?? '';
    }

    export function tg_send_data(data) {
        window.Telegram.WebApp.sendData(data);
    }

    export function tg_on_back(cb) {
        const tg = window.Telegram?.WebApp;
        if (!tg) return;
        tg.BackButton.show();
        tg.BackButton.onClick(() => cb());
    }

    export function tg_close() {
        window.Telegram?.WebApp?.close();
    }
")]
extern "C" {
    fn tg_init() -> bool;
    fn tg_haptic(kind: &str);
    fn tg_user_id() -> String;
    fn tg_username() -> String;
    #[wasm_bindgen(catch)]
    fn tg_send_data(data: &str) -> Result<(), JsValue>;
    fn tg_on_back(cb: &js_sys::Function);
    fn tg_close();
}

/// Telegram-backed [`HostPlatform`]
pub struct TelegramHost {
    available: bool,
}

impl TelegramHost {
    /// Attach to the webview. Calls `ready`/`expand` and picks up the
    /// host color scheme when Telegram is present.
    pub fn init() -> Self {
        let available = tg_init();
        if available {
            log::info!("telegram host attached");
        } else {
            log::info!("no telegram host, running standalone");
        }
        Self { available }
    }

    pub fn available(&self) -> bool {
        self.available
    }

    /// Show the host back button and route presses to `cb`
    pub fn on_back(&self, cb: &js_sys::Function) {
        if self.available {
            tg_on_back(cb);
        }
    }

    /// Close the webview
    pub fn close(&self) {
        tg_close();
    }
}

impl HostPlatform for TelegramHost {
    fn haptic(&self, kind: HapticKind) {
        if !self.available {
            return;
        }
        let name = match kind {
            HapticKind::Impact => "impact",
            HapticKind::Notification => "notification",
            HapticKind::Selection => "selection",
        };
        tg_haptic(name);
    }

    fn user(&self) -> HostUser {
        if !self.available {
            return HostUser::default();
        }
        let id = tg_user_id();
        let username = tg_username();
        let fallback = HostUser::default();
        HostUser {
            id: if id.is_empty() { fallback.id } else { id },
            username: if username.is_empty() {
                fallback.username
            } else {
                username
            },
        }
    }

    fn deliver(&self, report: &SessionReport) -> Result<(), HostError> {
        if !self.available {
            return Err(HostError::Unavailable("telegram webview"));
        }
        let payload = serde_json::to_string(report)?;
        tg_send_data(&payload)
            .map_err(|e| HostError::Call(e.as_string().unwrap_or_else(|| format!("{e:?}"))))
    }
}
