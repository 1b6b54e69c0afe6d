//! Host-agnostic window lifecycle runtime for the paneshell desktop host.
//!
//! The runtime owns no windows and talks to no GUI toolkit. Host callbacks are
//! translated into [`ShellAction`] values, [`reduce_shell`] applies them to
//! [`ShellState`], and the resulting [`ShellEffect`] intents are executed by the
//! host layer in order.

pub mod content;
pub mod model;
pub mod platform;
pub mod reducer;

pub use content::{
    resolve_content_source, ContentError, ContentSource, NavigationDecision, NavigationPolicy,
    BUNDLED_INDEX_PATH,
};
pub use model::*;
pub use platform::{FrameStyle, Platform, TitleBarOverlay, TITLEBAR_OVERLAY_HEIGHT};
pub use reducer::{reduce_shell, ShellAction, ShellEffect, ShellError};
