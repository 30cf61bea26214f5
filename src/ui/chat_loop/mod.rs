//! Main chat event loop and its supporting pieces.
//!
//! The loop owns the terminal, reads keys, applies [`AppAction`]s to the
//! shared [`App`] and spawns executors for the [`AppCommand`]s they return.
//!
//! [`AppAction`]: crate::core::app::AppAction
//! [`AppCommand`]: crate::core::app::AppCommand

mod event_loop;
mod executors;
mod keybindings;
mod lifecycle;
mod setup;

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::core::app::App;

pub use event_loop::run_chat;
pub use setup::ChatOptions;

/// Shared handle to the [`App`] used by the loop and background tasks.
#[derive(Clone)]
pub struct AppHandle {
    inner: Arc<Mutex<App>>,
}

impl AppHandle {
    pub fn new(inner: Arc<Mutex<App>>) -> Self {
        Self { inner }
    }

    pub async fn read<R>(&self, f: impl FnOnce(&App) -> R) -> R {
        let guard = self.inner.lock().await;
        f(&guard)
    }

    pub async fn update<R>(&self, f: impl FnOnce(&mut App) -> R) -> R {
        let mut guard = self.inner.lock().await;
        f(&mut guard)
    }
}
