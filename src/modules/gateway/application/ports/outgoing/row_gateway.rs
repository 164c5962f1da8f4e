// src/modules/gateway/application/ports/outgoing/row_gateway.rs

use std::sync::{Arc, OnceLock};

use async_trait::async_trait;
use regex::Regex;
use serde_json::Value as JsonValue;

/// One row as returned by the backing store: a JSON object keyed by column.
pub type Row = JsonValue;

//
// ──────────────────────────────────────────────────────────
// Query description
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Bool(bool),
    Int(i64),
    Text(String),
}

impl FilterValue {
    /// Equality against a stored JSON cell. `null` never matches.
    pub fn matches(&self, cell: &JsonValue) -> bool {
        match (self, cell) {
            (FilterValue::Bool(b), JsonValue::Bool(c)) => b == c,
            (FilterValue::Int(i), JsonValue::Number(n)) => n.as_i64() == Some(*i),
            (FilterValue::Text(s), JsonValue::String(c)) => s == c,
            // ids are sometimes numeric in the store but arrive as path text
            (FilterValue::Text(s), JsonValue::Number(n)) => n.to_string() == *s,
            _ => false,
        }
    }
}

impl From<bool> for FilterValue {
    fn from(v: bool) -> Self {
        FilterValue::Bool(v)
    }
}

impl From<i64> for FilterValue {
    fn from(v: i64) -> Self {
        FilterValue::Int(v)
    }
}

impl From<&str> for FilterValue {
    fn from(v: &str) -> Self {
        FilterValue::Text(v.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(v: String) -> Self {
        FilterValue::Text(v)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderBy {
    pub column: String,
    pub direction: Direction,
}

/// Read-only query against a named collection.
///
/// Filters are equality-only and combined with AND. `single` asks for exactly
/// one row; zero or several matches are errors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowQuery {
    pub columns: Vec<String>,
    pub filters: Vec<(String, FilterValue)>,
    pub order_by: Option<OrderBy>,
    pub limit: Option<u64>,
    pub single: bool,
}

impl RowQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn columns(mut self, columns: &[&str]) -> Self {
        self.columns = columns.iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn eq(mut self, column: &str, value: impl Into<FilterValue>) -> Self {
        self.filters.push((column.to_string(), value.into()));
        self
    }

    pub fn order_by(mut self, column: &str, direction: Direction) -> Self {
        self.order_by = Some(OrderBy {
            column: column.to_string(),
            direction,
        });
        self
    }

    /// Shorthand for `order_by("created_at", Descending)`.
    pub fn newest_first(self) -> Self {
        self.order_by("created_at", Direction::Descending)
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn single(mut self) -> Self {
        self.single = true;
        self
    }

    /// Row cap sent to the store. Single-row queries fetch at most two rows,
    /// enough to tell "exactly one" from "several".
    pub fn effective_limit(&self) -> Option<u64> {
        if self.single {
            Some(self.limit.map_or(2, |l| l.min(2)))
        } else {
            self.limit
        }
    }

    /// Applies the `single` contract to an already fetched result.
    pub fn finish(&self, rows: Vec<Row>) -> Result<Vec<Row>, GatewayError> {
        if !self.single {
            return Ok(rows);
        }

        match rows.len() {
            0 => Err(GatewayError::NoMatchingRow),
            1 => Ok(rows),
            n => Err(GatewayError::MultipleRows(n)),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GatewayError {
    #[error("Unknown collection: {0}")]
    UnknownCollection(String),

    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    #[error("Backend unreachable: {0}")]
    Unreachable(String),

    #[error("No matching row")]
    NoMatchingRow,

    #[error("Expected one row, got {0}")]
    MultipleRows(usize),

    #[error("Malformed response: {0}")]
    Malformed(String),
}

/// Collection and column names are interpolated as identifiers, so only plain
/// snake_case names are accepted.
pub fn validate_identifier(name: &str) -> Result<(), GatewayError> {
    static IDENTIFIER: OnceLock<Regex> = OnceLock::new();
    let re = IDENTIFIER.get_or_init(|| {
        Regex::new(r"^[a-z_][a-z0-9_]*$").expect("identifier pattern is valid")
    });

    if re.is_match(name) {
        Ok(())
    } else {
        Err(GatewayError::InvalidIdentifier(name.to_string()))
    }
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait RowGateway: Send + Sync {
    async fn fetch_rows(&self, collection: &str, query: RowQuery)
        -> Result<Vec<Row>, GatewayError>;

    /// Single-row fetch; the returned row is the only match.
    async fn fetch_one(&self, collection: &str, query: RowQuery) -> Result<Row, GatewayError> {
        self.fetch_rows(collection, query.single())
            .await?
            .into_iter()
            .next()
            .ok_or(GatewayError::NoMatchingRow)
    }
}

#[async_trait]
impl<G> RowGateway for Arc<G>
where
    G: RowGateway + ?Sized,
{
    async fn fetch_rows(
        &self,
        collection: &str,
        query: RowQuery,
    ) -> Result<Vec<Row>, GatewayError> {
        (**self).fetch_rows(collection, query).await
    }
}
