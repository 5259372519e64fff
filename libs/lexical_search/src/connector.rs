use scylla::client::session::Session;
use scylla::client::session_builder::SessionBuilder;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use crate::config::CassandraConfig;
use crate::error::LexicalSearchResult;

/// Shared handle to a connected scylla session
pub type CassandraSession = Arc<Session>;

/// Connect to Cassandra/ScyllaDB using a CassandraConfig
///
/// Credentials and the default keyspace are applied when set.
///
/// ```ignore
/// use lexical_search::{CassandraConfig, LexicalSearchSession, connect};
///
/// let config = CassandraConfig::new(vec!["127.0.0.1:9042"]);
/// let session = connect(&config).await?;
/// let search = LexicalSearchSession::new(session);
/// ```
pub async fn connect(config: &CassandraConfig) -> LexicalSearchResult<CassandraSession> {
    info!(
        "Attempting to connect to Cassandra at {:?}",
        config.contact_points
    );

    let mut builder = SessionBuilder::new()
        .known_nodes(&config.contact_points)
        .connection_timeout(Duration::from_secs(config.connect_timeout_secs));

    if let (Some(username), Some(password)) = (&config.username, &config.password) {
        builder = builder.user(username, password);
    }

    if let Some(keyspace) = config.keyspace() {
        builder = builder.use_keyspace(keyspace, false);
    }

    let session: Session = builder.build().await?;

    info!("Successfully connected to Cassandra");
    Ok(Arc::new(session))
}

/// Create a SimpleStrategy keyspace if it doesn't exist
pub async fn create_keyspace_if_not_exists(
    session: &Session,
    keyspace: &str,
    replication_factor: u32,
) -> LexicalSearchResult<()> {
    let query = format!(
        "CREATE KEYSPACE IF NOT EXISTS {} WITH replication = {{'class': 'SimpleStrategy', 'replication_factor': {}}}",
        keyspace, replication_factor
    );

    session.query_unpaged(query, &[]).await?;

    info!("Keyspace '{}' ready", keyspace);
    Ok(())
}
