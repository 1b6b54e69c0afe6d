//! Actions, side-effect intents, and transition logic for the shell lifecycle.

use thiserror::Error;

use crate::model::{ShellPhase, ShellState, WindowRect, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use crate::platform::FrameStyle;

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_shell`] to mutate [`ShellState`].
pub enum ShellAction {
    /// The application became active: host-ready at launch, or reactivation
    /// (for example a macOS dock click) while the app is already running.
    Activated,
    /// The window was resized or moved; `rect` is re-queried from the window
    /// by the host, never taken from the event payload.
    WindowResized {
        /// Current window rectangle as reported by the window itself.
        rect: WindowRect,
    },
    /// The content view finished its initial document load.
    ContentReady,
    /// Content requested a new in-app window (for example a `target="_blank"`
    /// link).
    PopupRequested {
        /// URL the popup would have opened.
        url: String,
    },
    /// The content layer sent the `ping` handshake signal.
    PingReceived,
    /// The last top-level window was closed by the user or the OS.
    AllWindowsClosed,
}

#[derive(Debug, Clone, PartialEq)]
/// Side-effect intents emitted by [`reduce_shell`] and executed by the host in
/// order.
pub enum ShellEffect {
    /// Construct the single top-level window and its content view.
    ///
    /// The host loads persisted geometry (falling back to defaults) as part of
    /// executing this effect.
    CreateWindow {
        /// Frame style selected for the current platform.
        frame: FrameStyle,
    },
    /// Make the application visible and focused.
    ShowApp,
    /// Re-apply `rect` as the content-view bounds.
    SyncContentBounds {
        /// Origin-anchored rectangle filling the window client area.
        rect: WindowRect,
    },
    /// Reveal the content view after its initial load.
    RevealContent,
    /// Open a URL with the OS default external handler.
    OpenExternal(String),
    /// Emit the fixed `pong` acknowledgment for the ping handshake.
    AcknowledgePing,
    /// Let the pending process exit proceed.
    Quit,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for actions that are invalid in the current phase.
pub enum ShellError {
    /// A window-scoped action arrived while no window exists.
    #[error("no window is open")]
    WindowNotOpen,
}

/// Applies a [`ShellAction`] to the shell state and collects resulting side
/// effects.
///
/// This function is the authoritative transition engine for the window
/// lifecycle: window existence, content-bounds synchronization, content
/// reveal, popup delegation, and the quit policy all pass through here.
///
/// # Errors
///
/// Returns [`ShellError::WindowNotOpen`] when a resize arrives with no window
/// open.
pub fn reduce_shell(
    state: &mut ShellState,
    action: ShellAction,
) -> Result<Vec<ShellEffect>, ShellError> {
    let mut effects = Vec::new();
    match action {
        ShellAction::Activated => {
            if !state.window_open() {
                state.phase = ShellPhase::WindowOpen;
                state.content_visible = false;
                effects.push(ShellEffect::CreateWindow {
                    frame: state.platform.frame_style(),
                });
            }
            // Covers the app-hidden case after all windows closed on a
            // resident platform; harmless when the window is already visible.
            effects.push(ShellEffect::ShowApp);
        }
        ShellAction::WindowResized { rect } => {
            if !state.window_open() {
                return Err(ShellError::WindowNotOpen);
            }
            let rect = rect.clamped_min(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT);
            state.window_rect = Some(rect);
            effects.push(ShellEffect::SyncContentBounds {
                rect: rect.at_origin(),
            });
        }
        ShellAction::ContentReady => {
            // One-shot: later loads (navigations, reloads) keep the view visible.
            if state.window_open() && !state.content_visible {
                state.content_visible = true;
                effects.push(ShellEffect::RevealContent);
            }
        }
        ShellAction::PopupRequested { url } => {
            // The popup itself is always denied; the URL leaves the shell.
            effects.push(ShellEffect::OpenExternal(url));
        }
        ShellAction::PingReceived => {
            effects.push(ShellEffect::AcknowledgePing);
        }
        ShellAction::AllWindowsClosed => {
            state.phase = ShellPhase::NoWindow;
            state.content_visible = false;
            state.window_rect = None;
            if !state.platform.stays_resident() {
                effects.push(ShellEffect::Quit);
            }
        }
    }
    Ok(effects)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
    use crate::platform::Platform;

    fn activated(state: &mut ShellState) -> Vec<ShellEffect> {
        reduce_shell(state, ShellAction::Activated).expect("activate")
    }

    fn create_window_count(effects: &[ShellEffect]) -> usize {
        effects
            .iter()
            .filter(|effect| matches!(effect, ShellEffect::CreateWindow { .. }))
            .count()
    }

    #[test]
    fn activation_from_no_window_creates_exactly_one_window() {
        let mut state = ShellState::new(Platform::Linux);

        let effects = activated(&mut state);

        assert_eq!(create_window_count(&effects), 1);
        assert_eq!(effects.last(), Some(&ShellEffect::ShowApp));
        assert!(state.window_open());
    }

    #[test]
    fn activation_with_window_open_only_shows_the_app() {
        let mut state = ShellState::new(Platform::Linux);
        activated(&mut state);

        let effects = activated(&mut state);

        assert_eq!(effects, vec![ShellEffect::ShowApp]);
        assert!(state.window_open());
    }

    #[test]
    fn every_resize_syncs_content_bounds_to_the_window_client_area() {
        let mut state = ShellState::new(Platform::Linux);
        activated(&mut state);

        for (w, h) in [(1280, 768), (1600, 900), (1024, 768)] {
            let effects = reduce_shell(
                &mut state,
                ShellAction::WindowResized {
                    rect: WindowRect { x: 200, y: 120, w, h },
                },
            )
            .expect("resize");
            assert_eq!(
                effects,
                vec![ShellEffect::SyncContentBounds {
                    rect: WindowRect { x: 0, y: 0, w, h }
                }]
            );
        }
    }

    #[test]
    fn resize_clamps_to_minimum_extent_before_syncing() {
        let mut state = ShellState::new(Platform::Linux);
        activated(&mut state);

        let effects = reduce_shell(
            &mut state,
            ShellAction::WindowResized {
                rect: WindowRect {
                    x: 0,
                    y: 0,
                    w: 320,
                    h: 240,
                },
            },
        )
        .expect("resize");

        assert_eq!(
            effects,
            vec![ShellEffect::SyncContentBounds {
                rect: WindowRect {
                    x: 0,
                    y: 0,
                    w: 1024,
                    h: 768
                }
            }]
        );
    }

    #[test]
    fn resize_without_a_window_is_rejected() {
        let mut state = ShellState::new(Platform::Linux);

        let err = reduce_shell(
            &mut state,
            ShellAction::WindowResized {
                rect: WindowRect::default(),
            },
        )
        .expect_err("resize with no window should fail");

        assert_eq!(err, ShellError::WindowNotOpen);
    }

    #[test]
    fn content_stays_hidden_until_ready_and_reveal_fires_once() {
        let mut state = ShellState::new(Platform::Linux);
        activated(&mut state);
        assert!(!state.content_visible);

        let first = reduce_shell(&mut state, ShellAction::ContentReady).expect("first ready");
        assert_eq!(first, vec![ShellEffect::RevealContent]);
        assert!(state.content_visible);

        let second = reduce_shell(&mut state, ShellAction::ContentReady).expect("second ready");
        assert_eq!(second, Vec::new());
    }

    #[test]
    fn popup_request_is_denied_and_delegated_externally_exactly_once() {
        let mut state = ShellState::new(Platform::Linux);
        activated(&mut state);
        let before = state.clone();

        let effects = reduce_shell(
            &mut state,
            ShellAction::PopupRequested {
                url: "https://example.com/".to_string(),
            },
        )
        .expect("popup request");

        assert_eq!(
            effects,
            vec![ShellEffect::OpenExternal("https://example.com/".to_string())]
        );
        assert_eq!(state, before);
    }

    #[test]
    fn ping_produces_exactly_one_acknowledgment_and_nothing_else() {
        let mut state = ShellState::new(Platform::Linux);
        let before = state.clone();

        let effects = reduce_shell(&mut state, ShellAction::PingReceived).expect("ping");

        assert_eq!(effects, vec![ShellEffect::AcknowledgePing]);
        assert_eq!(state, before);
    }

    #[test]
    fn closing_all_windows_quits_except_on_resident_platforms() {
        let mut linux = ShellState::new(Platform::Linux);
        activated(&mut linux);
        let effects = reduce_shell(&mut linux, ShellAction::AllWindowsClosed).expect("close");
        assert_eq!(effects, vec![ShellEffect::Quit]);
        assert!(!linux.window_open());

        let mut macos = ShellState::new(Platform::MacOs);
        activated(&mut macos);
        let effects = reduce_shell(&mut macos, ShellAction::AllWindowsClosed).expect("close");
        assert_eq!(effects, Vec::new());
        assert!(!macos.window_open());
    }

    #[test]
    fn dock_reactivation_after_close_reopens_a_single_window() {
        let mut state = ShellState::new(Platform::MacOs);
        activated(&mut state);
        reduce_shell(&mut state, ShellAction::ContentReady).expect("ready");
        reduce_shell(&mut state, ShellAction::AllWindowsClosed).expect("close");

        let effects = activated(&mut state);

        assert_eq!(create_window_count(&effects), 1);
        // The new window's content starts hidden again.
        assert!(!state.content_visible);
        assert_eq!(state.window_rect, None);
    }

    #[test]
    fn default_rect_carries_the_default_extent() {
        let rect = WindowRect::default();
        assert_eq!(rect.w, DEFAULT_WINDOW_WIDTH);
        assert_eq!(rect.h, DEFAULT_WINDOW_HEIGHT);
    }
}
