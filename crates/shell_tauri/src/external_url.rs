//! External URL delegation for links that must leave the shell.

use tauri_plugin_opener::OpenerExt;

/// Opens `url` with the OS default external handler.
///
/// Used both by the IPC command below and by the navigation handler when a
/// popup or foreign-origin navigation is denied in-app.
pub fn open_external(app: &tauri::AppHandle, url: &str) -> Result<(), String> {
    app.opener()
        .open_url(url, None::<String>)
        .map_err(|err| format!("external URL open failed: {err}"))
}

/// Opens a URL with the system default external handler.
#[tauri::command]
pub fn external_open_url(app: tauri::AppHandle, url: String) -> Result<(), String> {
    open_external(&app, &url)
}
