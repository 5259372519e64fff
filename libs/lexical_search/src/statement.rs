//! CQL statement rendering
//!
//! Pure string assembly for the DDL and DML issued by
//! [`LexicalSearchSession`](crate::LexicalSearchSession). Nothing here talks
//! to the cluster and nothing checks CQL syntax: the store validates every
//! statement when it executes.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use scylla::value::CqlValue;
use strum::EnumString;

use crate::error::{LexicalSearchError, LexicalSearchResult};

/// Custom secondary index implementations understood by the store
///
/// The class names are part of the CQL grammar and must be sent verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum IndexKind {
    /// Storage-attached index
    #[default]
    #[strum(serialize = "sai", serialize = "StorageAttachedIndex")]
    Sai,
    /// Legacy SSTable-attached token index
    #[strum(serialize = "sasi", serialize = "org.apache.cassandra.index.sasi.SASIIndex")]
    Sasi,
}

impl IndexKind {
    /// Class name placed in the `USING '...'` clause
    pub const fn class_name(&self) -> &'static str {
        match self {
            IndexKind::Sai => "StorageAttachedIndex",
            IndexKind::Sasi => "org.apache.cassandra.index.sasi.SASIIndex",
        }
    }

    /// Parse an index kind by short name (`sai`, `sasi`) or class name
    pub fn parse(name: &str) -> LexicalSearchResult<Self> {
        Self::from_str(name.trim())
            .map_err(|_| LexicalSearchError::UnknownIndexKind(name.to_string()))
    }
}

impl fmt::Display for IndexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

/// `WITH OPTIONS = {...}` clause for custom indexes
///
/// Renders its pairs in insertion order. Single quotes inside keys and
/// values are doubled so the map stays a valid CQL literal.
///
/// ```ignore
/// let opts = AnalyzerOptions::new()
///     .with("index_analyzer", "standard")
///     .with("case_sensitive", "false");
/// assert_eq!(
///     opts.to_string(),
///     "WITH OPTIONS = {'index_analyzer': 'standard', 'case_sensitive': 'false'}"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalyzerOptions {
    options: Vec<(String, String)>,
}

impl AnalyzerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an option, replacing an earlier value for the same key
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        match self.options.iter_mut().find(|(k, _)| *k == key) {
            Some(existing) => existing.1 = value,
            None => self.options.push((key, value)),
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

impl fmt::Display for AnalyzerOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pairs = self
            .options
            .iter()
            .map(|(k, v)| format!("'{}': '{}'", quote(k), quote(v)))
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "WITH OPTIONS = {{{}}}", pairs)
    }
}

fn quote(literal: &str) -> String {
    literal.replace('\'', "''")
}

/// A CQL statement with its positional bound values
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub text: String,
    pub values: Vec<CqlValue>,
}

impl Statement {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            values: Vec::new(),
        }
    }

    pub fn with_values(text: impl Into<String>, values: Vec<CqlValue>) -> Self {
        Self {
            text: text.into(),
            values,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn values(&self) -> &[CqlValue] {
        &self.values
    }
}

impl From<&str> for Statement {
    fn from(text: &str) -> Self {
        Statement::new(text)
    }
}

impl From<String> for Statement {
    fn from(text: String) -> Self {
        Statement::new(text)
    }
}

/// Render `CREATE TABLE IF NOT EXISTS`
///
/// Columns are emitted in the order given and the primary key keeps its
/// order, since it defines partitioning and clustering.
pub fn create_table_statement(
    keyspace: &str,
    table_name: &str,
    fields: &[(&str, &str)],
    primary_key: &[&str],
) -> LexicalSearchResult<Statement> {
    if fields.is_empty() {
        return Err(LexicalSearchError::InvalidInput(format!(
            "table {}.{} needs at least one column",
            keyspace, table_name
        )));
    }
    if primary_key.is_empty() {
        return Err(LexicalSearchError::InvalidInput(format!(
            "table {}.{} needs a primary key",
            keyspace, table_name
        )));
    }

    let mut seen = HashSet::with_capacity(fields.len());
    for (name, _) in fields {
        if !seen.insert(*name) {
            return Err(LexicalSearchError::InvalidInput(format!(
                "duplicate column '{}' in table {}.{}",
                name, keyspace, table_name
            )));
        }
    }

    let columns = fields
        .iter()
        .map(|(name, cql_type)| format!("{} {}", name, cql_type))
        .collect::<Vec<_>>()
        .join(", ");

    Ok(Statement::new(format!(
        "CREATE TABLE IF NOT EXISTS {}.{} ({}, PRIMARY KEY ({}));",
        keyspace,
        table_name,
        columns,
        primary_key.join(", ")
    )))
}

/// Render `CREATE CUSTOM INDEX`
///
/// `analyzer_options` is appended after a single space exactly as given.
pub fn create_index_statement(
    keyspace: &str,
    table_name: &str,
    field_name: &str,
    index_name: &str,
    index_type: IndexKind,
    analyzer_options: Option<&str>,
) -> Statement {
    let mut text = format!(
        "CREATE CUSTOM INDEX {} ON {}.{}({}) USING '{}'",
        index_name,
        keyspace,
        table_name,
        field_name,
        index_type.class_name()
    );
    if let Some(options) = analyzer_options {
        text.push(' ');
        text.push_str(options);
    }
    text.push(';');

    Statement::new(text)
}

/// Render a parameterised `INSERT INTO`
///
/// One `?` placeholder per column; values are bound, never interpolated.
pub fn insert_statement(
    keyspace: &str,
    table_name: &str,
    columns: &[&str],
    values: Vec<CqlValue>,
) -> LexicalSearchResult<Statement> {
    if columns.is_empty() {
        return Err(LexicalSearchError::InvalidInput(format!(
            "insert into {}.{} needs at least one column",
            keyspace, table_name
        )));
    }
    if columns.len() != values.len() {
        return Err(LexicalSearchError::InvalidInput(format!(
            "insert into {}.{} has {} columns but {} values",
            keyspace,
            table_name,
            columns.len(),
            values.len()
        )));
    }

    let placeholders = vec!["?"; columns.len()].join(", ");

    Ok(Statement::with_values(
        format!(
            "INSERT INTO {}.{} ({}) VALUES ({});",
            keyspace,
            table_name,
            columns.join(", "),
            placeholders
        ),
        values,
    ))
}
