//! IPC command handlers for the content-layer handshake.

use shell_runtime::ShellAction;

use crate::shell::ShellContext;

/// Fixed acknowledgment returned for the `ping` handshake signal.
pub const PING_ACK: &str = "pong";

/// Acknowledges the `ping` handshake from the content layer.
#[tauri::command]
pub fn ping(app: tauri::AppHandle, shell: tauri::State<'_, ShellContext>) -> &'static str {
    shell.dispatch(&app, ShellAction::PingReceived);
    PING_ACK
}
