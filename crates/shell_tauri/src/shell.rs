//! Shell context object: reducer state plus the effect executor.

use std::sync::Mutex;

use shell_runtime::{reduce_shell, Platform, ShellAction, ShellEffect, ShellState};

use crate::{external_url, window};

/// Managed application context wrapping the lifecycle reducer state.
///
/// The mutex only satisfies the `Send` bound on host callbacks; all dispatches
/// happen on the main control thread.
pub struct ShellContext {
    state: Mutex<ShellState>,
}

impl ShellContext {
    /// Creates the context in its initial no-window state.
    pub fn new(platform: Platform) -> Self {
        Self {
            state: Mutex::new(ShellState::new(platform)),
        }
    }

    /// Applies `action` to the shell state and executes the emitted effects in
    /// order.
    ///
    /// Rejected actions are logged and produce no effects. Returns the
    /// executed effect list so callers can inspect the outcome (the exit flow
    /// checks for [`ShellEffect::Quit`]).
    pub fn dispatch(&self, app: &tauri::AppHandle, action: ShellAction) -> Vec<ShellEffect> {
        let effects = {
            let mut state = match self.state.lock() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            match reduce_shell(&mut state, action) {
                Ok(effects) => effects,
                Err(err) => {
                    log::warn!("shell action rejected: {err}");
                    Vec::new()
                }
            }
        };
        for effect in &effects {
            self.run_effect(app, effect);
        }
        effects
    }

    fn run_effect(&self, app: &tauri::AppHandle, effect: &ShellEffect) {
        match effect {
            ShellEffect::CreateWindow { frame } => {
                // Construction failures are fatal for the shell; there is no
                // recovery policy beyond surfacing them.
                if let Err(err) = window::create_window(app, *frame) {
                    log::error!("window construction failed: {err}");
                }
            }
            ShellEffect::ShowApp => window::show_app(app),
            ShellEffect::SyncContentBounds { rect } => {
                if let Err(err) = window::apply_content_bounds(app, *rect) {
                    log::warn!("content bounds sync failed: {err}");
                }
            }
            ShellEffect::RevealContent => {
                if let Err(err) = window::reveal_content(app) {
                    log::warn!("content reveal failed: {err}");
                }
            }
            ShellEffect::OpenExternal(url) => {
                if let Err(err) = external_url::open_external(app, url) {
                    log::warn!("{err}");
                }
            }
            ShellEffect::AcknowledgePing => log::info!("pong"),
            // Satisfied by the exit flow in `handle_run_event`: the pending
            // exit simply proceeds.
            ShellEffect::Quit => {}
        }
    }
}
