//! Live-cluster tests. Run with:
//!
//! ```text
//! CASSANDRA_CONTACT_POINTS=127.0.0.1:9042 cargo test -p lexical_search -- --ignored
//! ```

use core_config::tracing::init_tracing;
use core_config::{Environment, env_or_default};
use lexical_search::{
    CassandraConfig, CassandraSession, CqlValue, IndexKind, LexicalSearchSession, Statement,
    connect, create_keyspace_if_not_exists,
};

async fn setup() -> (LexicalSearchSession<lexical_search::Session>, String) {
    init_tracing(&Environment::from_env());

    let contact_points = env_or_default("CASSANDRA_CONTACT_POINTS", "127.0.0.1:9042");
    let config = CassandraConfig::new(contact_points.split(',').collect::<Vec<_>>());
    let session: CassandraSession = connect(&config).await.unwrap();

    let keyspace = format!("lexical_{}", uuid::Uuid::new_v4().simple());
    create_keyspace_if_not_exists(&session, &keyspace, 1)
        .await
        .unwrap();

    (LexicalSearchSession::new(session), keyspace)
}

#[tokio::test]
#[ignore] // Requires actual Cassandra
async fn test_create_table_is_idempotent() {
    let (search, keyspace) = setup().await;
    let fields = [("id", "int"), ("body", "text")];

    search
        .create_table(&keyspace, "docs", &fields, &["id"])
        .await
        .unwrap();
    search
        .create_table(&keyspace, "docs", &fields, &["id"])
        .await
        .unwrap();
}

#[tokio::test]
#[ignore] // Requires actual Cassandra
async fn test_index_insert_and_search() {
    let (search, keyspace) = setup().await;

    search
        .create_table(&keyspace, "docs", &[("id", "int"), ("body", "text")], &["id"])
        .await
        .unwrap();
    search
        .create_index(
            &keyspace,
            "docs",
            "body",
            "body_idx",
            IndexKind::Sai,
            Some("WITH OPTIONS = {'index_analyzer': 'standard'}"),
        )
        .await
        .unwrap();
    search
        .insert_row(
            &keyspace,
            "docs",
            &["id", "body"],
            vec![
                CqlValue::Int(1),
                CqlValue::Text("the quick brown fox".to_string()),
            ],
        )
        .await
        .unwrap();

    let rows = search
        .execute(format!(
            "SELECT id FROM {}.docs WHERE body : 'fox'",
            keyspace
        ))
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);

    let rows = search
        .execute(Statement::with_values(
            format!("SELECT body FROM {}.docs WHERE id = ?", keyspace),
            vec![CqlValue::Int(1)],
        ))
        .await
        .unwrap();
    assert_eq!(
        rows[0].columns[0],
        Some(CqlValue::Text("the quick brown fox".to_string()))
    );
}

#[tokio::test]
#[ignore] // Requires actual Cassandra
async fn test_use_keyspace() {
    let (search, keyspace) = setup().await;
    search.use_keyspace(&keyspace).await.unwrap();
}
