//! Lexical search schema helpers for Cassandra/ScyllaDB
//!
//! Wraps a live session handle and issues the DDL and DML a lexical search
//! table needs: the table itself, custom secondary indexes (SAI or SASI,
//! optionally with analyzer options) and parameterised row inserts.
//!
//! # Features
//!
//! - `config` - `CassandraConfig` loading through `core_config::FromEnv`
//!
//! # Example
//!
//! ```ignore
//! use lexical_search::{CassandraConfig, IndexKind, LexicalSearchSession, connect};
//! use scylla::value::CqlValue;
//!
//! let session = connect(&CassandraConfig::new(vec!["127.0.0.1:9042"])).await?;
//! let search = LexicalSearchSession::new(session);
//!
//! search
//!     .create_table("ks1", "docs", &[("id", "int"), ("body", "text")], &["id"])
//!     .await?;
//! search
//!     .create_index(
//!         "ks1",
//!         "docs",
//!         "body",
//!         "body_idx",
//!         IndexKind::Sai,
//!         Some("WITH OPTIONS = {'index_analyzer': 'standard'}"),
//!     )
//!     .await?;
//! search
//!     .insert_row(
//!         "ks1",
//!         "docs",
//!         &["id", "body"],
//!         vec![CqlValue::Int(1), CqlValue::Text("hello world".into())],
//!     )
//!     .await?;
//! ```

pub mod config;
pub mod connector;
pub mod error;
pub mod lexical;
pub mod session;
pub mod statement;

pub use config::CassandraConfig;
pub use connector::{CassandraSession, connect, create_keyspace_if_not_exists};
pub use error::{LexicalSearchError, LexicalSearchResult};
pub use lexical::LexicalSearchSession;
pub use session::{CqlSession, Rows};
pub use statement::{AnalyzerOptions, IndexKind, Statement};

// Re-export scylla types for convenience
pub use scylla::client::session::Session;
pub use scylla::value::{CqlValue, Row};
