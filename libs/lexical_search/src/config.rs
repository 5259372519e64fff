#[cfg(feature = "config")]
use core_config::{ConfigError, FromEnv, env_or_default, env_required};

/// Connection settings for the Cassandra/ScyllaDB cluster
///
/// ```ignore
/// use lexical_search::CassandraConfig;
///
/// let config = CassandraConfig::new(vec!["127.0.0.1:9042"])
///     .with_keyspace("search")
///     .with_credentials("cassandra", "cassandra");
///
/// // From environment variables (requires `config` feature)
/// let config = CassandraConfig::from_env()?;
/// ```
#[derive(Clone, Debug)]
pub struct CassandraConfig {
    /// Contact points as host:port pairs
    pub contact_points: Vec<String>,

    /// Keyspace selected right after connecting
    pub keyspace: Option<String>,

    pub username: Option<String>,
    pub password: Option<String>,

    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,
}

impl CassandraConfig {
    pub fn new<S: Into<String>>(contact_points: Vec<S>) -> Self {
        Self {
            contact_points: contact_points.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_keyspace(mut self, keyspace: impl Into<String>) -> Self {
        self.keyspace = Some(keyspace.into());
        self
    }

    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    pub fn with_connect_timeout(mut self, secs: u64) -> Self {
        self.connect_timeout_secs = secs;
        self
    }

    pub fn keyspace(&self) -> Option<&str> {
        self.keyspace.as_deref()
    }
}

impl Default for CassandraConfig {
    fn default() -> Self {
        Self {
            contact_points: vec!["127.0.0.1:9042".to_string()],
            keyspace: None,
            username: None,
            password: None,
            connect_timeout_secs: 10,
        }
    }
}

/// Environment variables:
/// - `CASSANDRA_CONTACT_POINTS` (required) - comma-separated host:port list
/// - `CASSANDRA_KEYSPACE` (optional)
/// - `CASSANDRA_USERNAME` / `CASSANDRA_PASSWORD` (optional)
/// - `CASSANDRA_CONNECT_TIMEOUT_SECS` (optional, default: 10)
#[cfg(feature = "config")]
impl FromEnv for CassandraConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let contact_points: Vec<String> = env_required("CASSANDRA_CONTACT_POINTS")?
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        if contact_points.is_empty() {
            return Err(ConfigError::ParseError {
                key: "CASSANDRA_CONTACT_POINTS".to_string(),
                details: "No valid contact points provided".to_string(),
            });
        }

        let connect_timeout_secs = env_or_default("CASSANDRA_CONNECT_TIMEOUT_SECS", "10")
            .parse()
            .map_err(|e| ConfigError::ParseError {
                key: "CASSANDRA_CONNECT_TIMEOUT_SECS".to_string(),
                details: format!("{}", e),
            })?;

        Ok(Self {
            contact_points,
            keyspace: std::env::var("CASSANDRA_KEYSPACE").ok(),
            username: std::env::var("CASSANDRA_USERNAME").ok(),
            password: std::env::var("CASSANDRA_PASSWORD").ok(),
            connect_timeout_secs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_new_uses_defaults() {
        let config = CassandraConfig::new(vec!["10.0.0.1:9042", "10.0.0.2:9042"]);
        assert_eq!(config.contact_points.len(), 2);
        assert!(config.keyspace().is_none());
        assert_eq!(config.connect_timeout_secs, 10);
    }

    #[test]
    fn test_config_builder() {
        let config = CassandraConfig::default()
            .with_keyspace("search")
            .with_credentials("user", "pass")
            .with_connect_timeout(3);

        assert_eq!(config.contact_points, vec!["127.0.0.1:9042"]);
        assert_eq!(config.keyspace(), Some("search"));
        assert_eq!(config.username.as_deref(), Some("user"));
        assert_eq!(config.password.as_deref(), Some("pass"));
        assert_eq!(config.connect_timeout_secs, 3);
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_config_from_env() {
        temp_env::with_vars(
            [
                ("CASSANDRA_CONTACT_POINTS", Some("127.0.0.1:9042, 127.0.0.2:9042,")),
                ("CASSANDRA_KEYSPACE", Some("search")),
                ("CASSANDRA_USERNAME", None),
                ("CASSANDRA_PASSWORD", None),
                ("CASSANDRA_CONNECT_TIMEOUT_SECS", Some("5")),
            ],
            || {
                let config = CassandraConfig::from_env().unwrap();
                assert_eq!(
                    config.contact_points,
                    vec!["127.0.0.1:9042", "127.0.0.2:9042"]
                );
                assert_eq!(config.keyspace(), Some("search"));
                assert!(config.username.is_none());
                assert_eq!(config.connect_timeout_secs, 5);
            },
        );
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_config_from_env_missing_contact_points() {
        temp_env::with_var_unset("CASSANDRA_CONTACT_POINTS", || {
            let err = CassandraConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("CASSANDRA_CONTACT_POINTS"));
        });
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_config_from_env_bad_timeout() {
        temp_env::with_vars(
            [
                ("CASSANDRA_CONTACT_POINTS", Some("127.0.0.1:9042")),
                ("CASSANDRA_CONNECT_TIMEOUT_SECS", Some("soon")),
            ],
            || {
                let err = CassandraConfig::from_env().unwrap_err();
                assert!(matches!(err, ConfigError::ParseError { ref key, .. }
                    if key == "CASSANDRA_CONNECT_TIMEOUT_SECS"));
            },
        );
    }
}
