//! MongoDB connection settings loaded via OrthoConfig.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::form_urlencoded::byte_serialize;

const DEFAULT_HOST: &str = "localhost:27017";
const DEFAULT_DATABASE: &str = "sample_db";
const DEFAULT_SERVER_SELECTION_TIMEOUT_MS: u64 = 5_000;

/// Connection settings read from `MONGODB_*` environment variables.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "MONGODB")]
pub struct MongoSettings {
    /// Server address as `host[:port]`.
    pub host: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    /// Database holding the `users` and `items` collections.
    pub database: Option<String>,
    /// How long the driver waits to find a reachable server.
    pub server_selection_timeout_ms: Option<u64>,
}

impl MongoSettings {
    /// Return the configured host, falling back to the local default.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Return the configured database name, falling back to the default.
    pub fn database(&self) -> &str {
        self.database.as_deref().unwrap_or(DEFAULT_DATABASE)
    }

    pub fn server_selection_timeout(&self) -> Duration {
        Duration::from_millis(
            self.server_selection_timeout_ms
                .unwrap_or(DEFAULT_SERVER_SELECTION_TIMEOUT_MS),
        )
    }

    fn credentials(&self) -> Option<(&str, &str)> {
        match (self.username.as_deref(), self.password.as_deref()) {
            (Some(user), Some(pass)) if !user.is_empty() && !pass.is_empty() => {
                Some((user, pass))
            }
            _ => None,
        }
    }

    /// Build the connection string.
    ///
    /// Credentials are only included when both a username and a password are
    /// set. Each is form-encoded, so spaces become `+` and reserved
    /// characters are percent-escaped.
    ///
    /// # Examples
    /// ```
    /// use backend::outbound::persistence::MongoSettings;
    ///
    /// let settings = MongoSettings {
    ///     host: Some("db:27017".into()),
    ///     username: Some("app".into()),
    ///     password: Some("p@ss word".into()),
    ///     database: None,
    ///     server_selection_timeout_ms: None,
    /// };
    /// assert_eq!(
    ///     settings.connection_uri(),
    ///     "mongodb://app:p%40ss+word@db:27017/sample_db"
    /// );
    /// ```
    pub fn connection_uri(&self) -> String {
        match self.credentials() {
            Some((user, pass)) => format!(
                "mongodb://{}:{}@{}/{}",
                encode_component(user),
                encode_component(pass),
                self.host(),
                self.database()
            ),
            None => format!("mongodb://{}/{}", self.host(), self.database()),
        }
    }

    /// Connection string safe to log: the password is masked.
    pub fn redacted_uri(&self) -> String {
        match self.credentials() {
            Some((user, _)) => format!(
                "mongodb://{}:***@{}/{}",
                encode_component(user),
                self.host(),
                self.database()
            ),
            None => self.connection_uri(),
        }
    }
}

fn encode_component(raw: &str) -> String {
    byte_serialize(raw.as_bytes()).collect()
}
