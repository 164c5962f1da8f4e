// src/modules/gateway/adapter/outgoing/row_gateway_memory.rs

use std::cmp::Ordering;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::DateTime;
use serde_json::{Map, Value as JsonValue};

use crate::modules::gateway::application::ports::outgoing::row_gateway::validate_identifier;
use crate::modules::gateway::application::ports::outgoing::{
    Direction, GatewayError, Row, RowGateway, RowQuery,
};

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Seed file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Seed document must be an object of collections")]
    NotAnObject,

    #[error("Collection `{0}` must be an array of row objects")]
    NotAnArray(String),
}

/// Row store held in process memory.
///
/// Same query semantics as the Postgres gateway; backs local runs without a
/// database and repository tests.
#[derive(Debug, Clone, Default)]
pub struct RowGatewayMemory {
    collections: Arc<HashMap<String, Vec<Row>>>,
}

impl RowGatewayMemory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_collection(self, name: &str, rows: Vec<Row>) -> Self {
        let mut collections = (*self.collections).clone();
        collections.insert(name.to_string(), rows);
        Self {
            collections: Arc::new(collections),
        }
    }

    /// Builds the store from `{ "collection": [ {row}, ... ], ... }`.
    pub fn from_seed(seed: JsonValue) -> Result<Self, SeedError> {
        let JsonValue::Object(map) = seed else {
            return Err(SeedError::NotAnObject);
        };

        let mut collections = HashMap::with_capacity(map.len());
        for (name, rows) in map {
            let JsonValue::Array(rows) = rows else {
                return Err(SeedError::NotAnArray(name));
            };
            if !rows.iter().all(JsonValue::is_object) {
                return Err(SeedError::NotAnArray(name));
            }
            collections.insert(name, rows);
        }

        Ok(Self {
            collections: Arc::new(collections),
        })
    }

    pub fn from_seed_file(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_seed(serde_json::from_str(&raw)?)
    }

    pub fn collection_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.collections.keys().cloned().collect();
        names.sort();
        names
    }
}

#[async_trait]
impl RowGateway for RowGatewayMemory {
    async fn fetch_rows(
        &self,
        collection: &str,
        query: RowQuery,
    ) -> Result<Vec<Row>, GatewayError> {
        validate_identifier(collection)?;

        let rows = self
            .collections
            .get(collection)
            .ok_or_else(|| GatewayError::UnknownCollection(collection.to_string()))?;

        for (column, _) in &query.filters {
            validate_identifier(column)?;
        }

        let mut matched: Vec<&Row> = rows
            .iter()
            .filter(|row| {
                query.filters.iter().all(|(column, value)| {
                    row.get(column).is_some_and(|cell| value.matches(cell))
                })
            })
            .collect();

        if let Some(order) = &query.order_by {
            validate_identifier(&order.column)?;
            matched.sort_by(|a, b| {
                let ord = compare_cells(a.get(&order.column), b.get(&order.column));
                match order.direction {
                    Direction::Ascending => ord,
                    Direction::Descending => ord.reverse(),
                }
            });
        }

        if let Some(limit) = query.effective_limit() {
            matched.truncate(limit as usize);
        }

        let projected = matched
            .into_iter()
            .map(|row| project(row, &query.columns))
            .collect::<Result<Vec<_>, _>>()?;

        query.finish(projected)
    }
}

fn project(row: &Row, columns: &[String]) -> Result<Row, GatewayError> {
    if columns.is_empty() {
        return Ok(row.clone());
    }

    let mut out = Map::new();
    for column in columns {
        validate_identifier(column)?;
        if let Some(cell) = row.get(column) {
            out.insert(column.clone(), cell.clone());
        }
    }
    Ok(JsonValue::Object(out))
}

/// Missing and null sort first, like NULLS FIRST on an ascending scan.
fn compare_cells(a: Option<&JsonValue>, b: Option<&JsonValue>) -> Ordering {
    let a = a.filter(|v| !v.is_null());
    let b = b.filter(|v| !v.is_null());

    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(JsonValue::Number(x)), Some(JsonValue::Number(y))) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Some(JsonValue::String(x)), Some(JsonValue::String(y))) => {
            match (
                DateTime::parse_from_rfc3339(x),
                DateTime::parse_from_rfc3339(y),
            ) {
                (Ok(x), Ok(y)) => x.cmp(&y),
                _ => x.cmp(y),
            }
        }
        (Some(JsonValue::Bool(x)), Some(JsonValue::Bool(y))) => x.cmp(y),
        _ => Ordering::Equal,
    }
}
