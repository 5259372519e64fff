use async_trait::async_trait;
use scylla::client::session::Session;
use scylla::response::query_result::QueryResult;
use scylla::value::Row;

use crate::error::{LexicalSearchError, LexicalSearchResult};
use crate::statement::Statement;

/// Fully materialised result rows
pub type Rows = Vec<Row>;

/// Session handle the wrapper sends statements through
///
/// Implemented for the scylla driver's [`Session`]. Any other handle (a test
/// double, a proxy) only needs keyspace selection and statement execution.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CqlSession: Send + Sync {
    /// Make `keyspace` the default for unqualified statements on this handle
    async fn use_keyspace(&self, keyspace: &str) -> LexicalSearchResult<()>;

    /// Execute a statement and return every result row
    async fn execute(&self, statement: Statement) -> LexicalSearchResult<Rows>;
}

#[async_trait]
impl CqlSession for Session {
    async fn use_keyspace(&self, keyspace: &str) -> LexicalSearchResult<()> {
        // Statements render identifiers unquoted, so match them case-insensitively
        Session::use_keyspace(self, keyspace, false).await?;
        Ok(())
    }

    async fn execute(&self, statement: Statement) -> LexicalSearchResult<Rows> {
        let result = self
            .query_unpaged(statement.text, statement.values)
            .await?;

        collect_rows(result)
    }
}

/// Drain a query result into owned rows
///
/// DDL and INSERT come back as non-row results and yield no rows.
fn collect_rows(result: QueryResult) -> LexicalSearchResult<Rows> {
    if !result.is_rows() {
        return Ok(Vec::new());
    }

    let rows_result = result
        .into_rows_result()
        .map_err(|e| LexicalSearchError::Rows(e.to_string()))?;

    let rows = rows_result
        .rows::<Row>()
        .map_err(|e| LexicalSearchError::Rows(e.to_string()))?
        .collect::<Result<Rows, _>>()
        .map_err(|e| LexicalSearchError::Rows(e.to_string()))?;

    Ok(rows)
}
