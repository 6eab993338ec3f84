//! Server configuration, loaded from environment variables.

/// Port used when `PORT` is unset or invalid.
pub const DEFAULT_PORT: u16 = 5000;

/// Bind address used when `HOST` is unset or empty.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Filter directives used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "hello_api=info,tower_http=info";

/// Listening address of the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Listen address (e.g., "0.0.0.0").
    pub host: String,
    /// Listen port, always in 1..=65535.
    pub port: u16,
}

impl ApiConfig {
    /// Load config from the process environment (`HOST`, `PORT`).
    pub fn from_env() -> Self {
        Self::from_lookup(process_env)
    }

    /// Load config through an arbitrary variable lookup.
    ///
    /// An invalid `PORT` is logged and replaced by [`DEFAULT_PORT`]
    /// rather than treated as fatal.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST")
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(raw) => parse_port(&raw).unwrap_or_else(|| {
                tracing::warn!(
                    value = %raw,
                    default = DEFAULT_PORT,
                    "invalid PORT, falling back to default"
                );
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        Self { host, port }
    }

    /// Socket address string suitable for `TcpListener::bind`.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

/// Non-UTF-8 values are kept (lossily) so they are reported as invalid
/// instead of looking unset.
fn process_env(key: &str) -> Option<String> {
    std::env::var_os(key).map(|value| value.to_string_lossy().into_owned())
}

/// Port 0 asks the OS for an ephemeral port, which a hosted service can't advertise.
fn parse_port(raw: &str) -> Option<u16> {
    raw.trim().parse::<u16>().ok().filter(|port| *port != 0)
}

/// Log output format, selected with `LOG_FORMAT`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per line (production default).
    #[default]
    Json,
    /// Human-readable lines for local development.
    Text,
}

impl LogFormat {
    pub fn from_env() -> Self {
        Self::from_lookup(process_env)
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup("LOG_FORMAT")
            .map(|v| v.trim().to_ascii_lowercase())
            .as_deref()
        {
            Some("text" | "pretty") => Self::Text,
            _ => Self::Json,
        }
    }
}
