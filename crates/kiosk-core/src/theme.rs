//! Shared display-mode store.
//!
//! One store per application session holds the current [`ThemeMode`] and
//! notifies subscribers when it flips. Visual code reads the mode every
//! render; nothing caches it.

use std::sync::Mutex;
use std::sync::atomic::{AtomicU8, Ordering};

use serde::{Deserialize, Serialize};

/// Display mode for every themed surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Returns the opposite mode.
    pub fn flipped(self) -> ThemeMode {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Returns the short display name for this mode.
    pub fn display_name(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    fn from_u8(raw: u8) -> ThemeMode {
        if raw == 1 {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    fn as_u8(self) -> u8 {
        match self {
            ThemeMode::Light => 0,
            ThemeMode::Dark => 1,
        }
    }
}

/// Notify-on-change callback registered via [`ThemeStore::subscribe`].
type Subscriber = Box<dyn Fn(ThemeMode) + Send + Sync>;

/// Session-lived holder of the current display mode.
///
/// Created once at startup (Light unless the config file says otherwise)
/// and shared as an `Arc`. [`ThemeStore::toggle`] is the only mutation.
pub struct ThemeStore {
    mode: AtomicU8,
    subscribers: Mutex<Vec<Subscriber>>,
}

impl ThemeStore {
    pub fn new(initial: ThemeMode) -> Self {
        Self {
            mode: AtomicU8::new(initial.as_u8()),
            subscribers: Mutex::new(Vec::new()),
        }
    }

    /// Returns the current mode. No side effects.
    pub fn mode(&self) -> ThemeMode {
        ThemeMode::from_u8(self.mode.load(Ordering::Relaxed))
    }

    /// Flips Light and Dark, notifies every subscriber with the new mode,
    /// and returns it. Total over the two-value domain.
    pub fn toggle(&self) -> ThemeMode {
        let prior = self.mode.fetch_xor(1, Ordering::Relaxed);
        let next = ThemeMode::from_u8(prior ^ 1);
        tracing::debug!(mode = next.display_name(), "theme toggled");
        self.notify(next);
        next
    }

    /// Registers a callback invoked after every toggle with the new mode.
    ///
    /// Subscriptions live for the rest of the session; there is no
    /// unsubscribe because consumers are session-lived too.
    pub fn subscribe(&self, callback: impl Fn(ThemeMode) + Send + Sync + 'static) {
        if let Ok(mut subs) = self.subscribers.lock() {
            subs.push(Box::new(callback));
        }
    }

    fn notify(&self, mode: ThemeMode) {
        // Notification is best-effort: a poisoned list skips the wake-up,
        // never the mode change itself.
        if let Ok(subs) = self.subscribers.lock() {
            for sub in subs.iter() {
                sub(mode);
            }
        }
    }
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::new(ThemeMode::Light)
    }
}
