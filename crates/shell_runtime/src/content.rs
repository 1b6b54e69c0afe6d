//! Content-source resolution and the in-app navigation policy.

use std::path::PathBuf;

use thiserror::Error;
use url::Url;

/// Bundle-relative path of the built UI document loaded in production.
pub const BUNDLED_INDEX_PATH: &str = "index.html";

// Origins the host app protocol serves bundled content from. Windows maps the
// custom scheme onto http, the other platforms keep it as-is.
const APP_PROTOCOL_ORIGINS: [&str; 2] = ["tauri://localhost", "http://tauri.localhost"];

#[derive(Debug, Clone, PartialEq, Eq)]
/// Where the content view loads its document from.
pub enum ContentSource {
    /// Remote dev-server origin, development builds only.
    DevServer(Url),
    /// Bundle-relative document served through the host app protocol.
    BundledAsset(PathBuf),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Content-source resolution errors.
pub enum ContentError {
    /// The configured dev-server URL did not parse.
    #[error("invalid dev server URL `{url}`: {reason}")]
    InvalidDevServerUrl {
        /// Raw value taken from the environment.
        url: String,
        /// Parser diagnostic.
        reason: String,
    },
}

/// Resolves the content source for this launch.
///
/// A configured dev-server URL wins in development builds; everything else
/// loads the bundled document.
///
/// # Errors
///
/// Returns [`ContentError::InvalidDevServerUrl`] when a dev-server URL is
/// configured but unparseable; callers fall back to the bundled document.
pub fn resolve_content_source(
    dev_build: bool,
    dev_server_url: Option<&str>,
) -> Result<ContentSource, ContentError> {
    if dev_build {
        if let Some(raw) = dev_server_url {
            let url = Url::parse(raw).map_err(|err| ContentError::InvalidDevServerUrl {
                url: raw.to_string(),
                reason: err.to_string(),
            })?;
            return Ok(ContentSource::DevServer(url));
        }
    }
    Ok(ContentSource::BundledAsset(PathBuf::from(
        BUNDLED_INDEX_PATH,
    )))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Outcome of classifying a navigation request.
pub enum NavigationDecision {
    /// The URL belongs to the app and loads inside the content view.
    AllowInApp,
    /// The URL leaves the shell and goes to the OS default handler.
    OpenExternal,
}

#[derive(Debug, Clone)]
/// Origin allow-list deciding which navigations stay inside the content view.
///
/// Anything off the allow-list is denied in-app and delegated to the OS
/// default handler, which also covers popup requests: the host surfaces those
/// as navigations.
pub struct NavigationPolicy {
    app_origins: Vec<Url>,
}

impl NavigationPolicy {
    /// Builds the policy for a resolved content source.
    ///
    /// The app-protocol origins are always allowed; a dev-server source adds
    /// its own origin.
    pub fn for_source(source: &ContentSource) -> Self {
        let mut app_origins: Vec<Url> = APP_PROTOCOL_ORIGINS
            .iter()
            .filter_map(|origin| Url::parse(origin).ok())
            .collect();
        if let ContentSource::DevServer(url) = source {
            app_origins.push(url.clone());
        }
        Self { app_origins }
    }

    /// Classifies a navigation target.
    pub fn decide(&self, url: &Url) -> NavigationDecision {
        if self
            .app_origins
            .iter()
            .any(|origin| same_origin(origin, url))
        {
            NavigationDecision::AllowInApp
        } else {
            NavigationDecision::OpenExternal
        }
    }
}

fn same_origin(a: &Url, b: &Url) -> bool {
    a.scheme() == b.scheme()
        && a.host_str() == b.host_str()
        && a.port_or_known_default() == b.port_or_known_default()
}
