/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development. In production,
/// override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Mock credential/token configuration.
    pub auth: AuthConfig,
}

/// PLACEHOLDER auth: a single hard-coded credential pair and a static
/// bearer token string. This is a demo mock, not a security design; a real
/// deployment needs a proper credential and session layer.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub admin_username: String,
    pub admin_password: String,
    /// The one token the API accepts on protected routes.
    pub api_token: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default                 |
    /// |---------------------------|-------------------------|
    /// | `HOST`                    | `0.0.0.0`               |
    /// | `PORT`                    | `3000`                  |
    /// | `CORS_ORIGINS`            | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`    | `30`                    |
    /// | `MESHDECK_ADMIN_USER`     | `admin`                 |
    /// | `MESHDECK_ADMIN_PASSWORD` | `password123`           |
    /// | `MESHDECK_API_TOKEN`      | `meshdeck-demo-token`   |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            auth: AuthConfig::from_env(),
        }
    }
}

impl AuthConfig {
    pub fn from_env() -> Self {
        Self {
            admin_username: std::env::var("MESHDECK_ADMIN_USER").unwrap_or_else(|_| "admin".into()),
            admin_password: std::env::var("MESHDECK_ADMIN_PASSWORD")
                .unwrap_or_else(|_| "password123".into()),
            api_token: std::env::var("MESHDECK_API_TOKEN")
                .unwrap_or_else(|_| "meshdeck-demo-token".into()),
        }
    }
}
