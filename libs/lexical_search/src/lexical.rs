use std::sync::Arc;

use scylla::value::CqlValue;
use tracing::{debug, info, instrument};

use crate::error::LexicalSearchResult;
use crate::session::{CqlSession, Rows};
use crate::statement::{
    IndexKind, Statement, create_index_statement, create_table_statement, insert_statement,
};

/// Schema and row helpers over one live session handle
///
/// Every statement is keyspace-qualified, so the wrapper never changes the
/// handle's active keyspace behind the caller's back. Each operation sends
/// exactly one statement and drains its result before returning.
pub struct LexicalSearchSession<S: CqlSession> {
    session: Arc<S>,
}

impl<S: CqlSession> Clone for LexicalSearchSession<S> {
    fn clone(&self) -> Self {
        Self {
            session: Arc::clone(&self.session),
        }
    }
}

impl<S: CqlSession> LexicalSearchSession<S> {
    pub fn new(session: Arc<S>) -> Self {
        Self { session }
    }

    /// The underlying session handle
    pub fn session(&self) -> &Arc<S> {
        &self.session
    }

    /// Select the active keyspace on the underlying handle
    #[instrument(skip(self))]
    pub async fn use_keyspace(&self, keyspace: &str) -> LexicalSearchResult<()> {
        self.session.use_keyspace(keyspace).await?;
        debug!("Using keyspace '{}'", keyspace);
        Ok(())
    }

    /// Create `keyspace.table_name` if it does not exist yet
    ///
    /// `fields` are `(column, cql_type)` pairs rendered in order;
    /// `primary_key` keeps its order.
    #[instrument(skip(self, fields, primary_key))]
    pub async fn create_table(
        &self,
        keyspace: &str,
        table_name: &str,
        fields: &[(&str, &str)],
        primary_key: &[&str],
    ) -> LexicalSearchResult<()> {
        let statement = create_table_statement(keyspace, table_name, fields, primary_key)?;
        self.execute(statement).await?;

        info!("Table {}.{} created successfully", keyspace, table_name);
        Ok(())
    }

    /// Create a custom secondary index on a single column
    ///
    /// `analyzer_options` is appended to the statement untouched, e.g.
    /// `WITH OPTIONS = {'index_analyzer': 'standard'}` or the rendering of an
    /// [`AnalyzerOptions`](crate::AnalyzerOptions).
    #[instrument(skip(self, analyzer_options))]
    pub async fn create_index(
        &self,
        keyspace: &str,
        table_name: &str,
        field_name: &str,
        index_name: &str,
        index_type: IndexKind,
        analyzer_options: Option<&str>,
    ) -> LexicalSearchResult<()> {
        let statement = create_index_statement(
            keyspace,
            table_name,
            field_name,
            index_name,
            index_type,
            analyzer_options,
        );
        self.execute(statement).await?;

        info!(
            "Index {} created on {}.{}({})",
            index_name, keyspace, table_name, field_name
        );
        Ok(())
    }

    /// Insert one row, binding `values` positionally to `columns`
    #[instrument(skip(self, columns, values))]
    pub async fn insert_row(
        &self,
        keyspace: &str,
        table_name: &str,
        columns: &[&str],
        values: Vec<CqlValue>,
    ) -> LexicalSearchResult<()> {
        let statement = insert_statement(keyspace, table_name, columns, values)?;
        self.execute(statement).await?;

        debug!(
            "Inserted row into {}.{} ({} columns)",
            keyspace,
            table_name,
            columns.len()
        );
        Ok(())
    }

    /// Insert a row whose values are the column names themselves
    ///
    /// Kept for callers of the older single-list form, which bound each
    /// column name as a text value. New code should use [`Self::insert_row`].
    pub async fn insert_column_names(
        &self,
        keyspace: &str,
        table_name: &str,
        columns: &[&str],
    ) -> LexicalSearchResult<()> {
        let values = columns
            .iter()
            .map(|c| CqlValue::Text(c.to_string()))
            .collect();
        self.insert_row(keyspace, table_name, columns, values).await
    }

    /// Send a statement to the handle unchanged and return its rows
    pub async fn execute(&self, statement: impl Into<Statement>) -> LexicalSearchResult<Rows> {
        self.session.execute(statement.into()).await
    }
}
