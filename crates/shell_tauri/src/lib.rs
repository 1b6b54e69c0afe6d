//! Tauri desktop host for the paneshell web UI.
//!
//! The host owns the real window and content webview and defers every
//! lifecycle decision to [`shell_runtime`]: host callbacks dispatch actions
//! through the managed `ShellContext`, which applies the reducer and executes
//! the resulting effect intents in order.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod external_url;
mod ipc;
mod shell;
mod window;
#[doc(hidden)]
pub mod window_state;

use tauri::Manager;

use shell::ShellContext;
use shell_runtime::{Platform, ShellAction, ShellEffect};

/// Starts the Tauri desktop host process.
pub fn run() {
    tauri::Builder::default()
        .plugin(
            tauri_plugin_log::Builder::new()
                .level(if cfg!(debug_assertions) {
                    log::LevelFilter::Debug
                } else {
                    log::LevelFilter::Info
                })
                .build(),
        )
        .plugin(tauri_plugin_opener::init())
        .manage(ShellContext::new(Platform::current()))
        .invoke_handler(tauri::generate_handler![
            external_url::external_open_url,
            ipc::ping
        ])
        .setup(|app| {
            let shell = app.state::<ShellContext>();
            shell.dispatch(app.handle(), ShellAction::Activated);
            Ok(())
        })
        .build(tauri::generate_context!())
        .expect("shell_tauri failed to build Tauri application")
        .run(handle_run_event);
}

fn handle_run_event(app: &tauri::AppHandle, event: tauri::RunEvent) {
    match event {
        // macOS dock reactivation; re-creates the window when none is open.
        tauri::RunEvent::Reopen { .. } => {
            let shell = app.state::<ShellContext>();
            shell.dispatch(app, ShellAction::Activated);
        }
        // Fires without an exit code when the last window closes; the reducer
        // decides whether the process quits or the app stays resident.
        tauri::RunEvent::ExitRequested {
            code: None, api, ..
        } => {
            let shell = app.state::<ShellContext>();
            let effects = shell.dispatch(app, ShellAction::AllWindowsClosed);
            if !effects.contains(&ShellEffect::Quit) {
                api.prevent_exit();
            }
        }
        _ => {}
    }
}
