use std::path::PathBuf;

use dossier_core::profile::ImagePolicy;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Directory holding the HTML templates.
    pub templates_dir: PathBuf,
    /// Directory served read-only under `/favicon`.
    pub static_dir: PathBuf,
    /// JSON fixture backing the offline sample page.
    pub sample_fixture: PathBuf,
    /// Route path of the sample page.
    pub sample_path: String,
    /// Mount prefix of the profile route. Empty mounts `/{charid}` at the
    /// root, matching the shortest historical route shape.
    pub profile_prefix: String,
    /// Substitution policy for records without an image.
    pub image_placeholder: ImagePolicy,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                 |
    /// |------------------------|-------------------------|
    /// | `HOST`                 | `0.0.0.0`               |
    /// | `PORT`                 | `3000`                  |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                    |
    /// | `TEMPLATES_DIR`        | `templates`             |
    /// | `STATIC_DIR`           | `favicon`               |
    /// | `SAMPLE_FIXTURE`       | `fixtures/sample.json`  |
    /// | `SAMPLE_PATH`          | `/test`                 |
    /// | `PROFILE_PREFIX`       | `/profile`              |
    /// | `IMAGE_PLACEHOLDER`    | `markup`                |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let templates_dir =
            PathBuf::from(std::env::var("TEMPLATES_DIR").unwrap_or_else(|_| "templates".into()));

        let static_dir =
            PathBuf::from(std::env::var("STATIC_DIR").unwrap_or_else(|_| "favicon".into()));

        let sample_fixture = PathBuf::from(
            std::env::var("SAMPLE_FIXTURE").unwrap_or_else(|_| "fixtures/sample.json".into()),
        );

        let sample_path = route_path_var("SAMPLE_PATH", "/test");

        let profile_prefix = std::env::var("PROFILE_PREFIX").unwrap_or_else(|_| "/profile".into());
        assert!(
            profile_prefix.is_empty() || profile_prefix.starts_with('/'),
            "PROFILE_PREFIX must be empty or start with '/'"
        );

        let image_placeholder = match std::env::var("IMAGE_PLACEHOLDER")
            .unwrap_or_else(|_| "markup".into())
            .as_str()
        {
            "markup" => ImagePolicy::Placeholder,
            "empty" => ImagePolicy::Empty,
            other => panic!("IMAGE_PLACEHOLDER must be 'markup' or 'empty', got '{other}'"),
        };

        Self {
            host,
            port,
            request_timeout_secs,
            templates_dir,
            static_dir,
            sample_fixture,
            sample_path,
            profile_prefix,
            image_placeholder,
        }
    }
}

/// Read a route path env var, panicking at startup on a malformed value.
fn route_path_var(name: &str, default: &str) -> String {
    let path = std::env::var(name).unwrap_or_else(|_| default.into());
    assert!(
        path.starts_with('/') && path.len() > 1,
        "{name} must be a non-root path starting with '/'"
    );
    path
}
