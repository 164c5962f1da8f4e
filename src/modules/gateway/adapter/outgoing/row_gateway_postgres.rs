// src/modules/gateway/adapter/outgoing/row_gateway_postgres.rs

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::sea_query::{
    Alias, Asterisk, Expr, Order, Query, SelectStatement, SimpleExpr, Value,
};
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, FromQueryResult, JsonValue};

use crate::modules::gateway::application::ports::outgoing::row_gateway::validate_identifier;
use crate::modules::gateway::application::ports::outgoing::{
    Direction, FilterValue, GatewayError, Row, RowGateway, RowQuery,
};

// ============================================================================
// Gateway Implementation
// ============================================================================

#[derive(Clone)]
pub struct RowGatewayPostgres {
    db: Arc<DatabaseConnection>,
    collections: Arc<HashSet<String>>,
}

impl RowGatewayPostgres {
    /// Only the listed collections can be queried.
    pub fn new<I, S>(db: Arc<DatabaseConnection>, collections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            db,
            collections: Arc::new(collections.into_iter().map(Into::into).collect()),
        }
    }
}

#[async_trait]
impl RowGateway for RowGatewayPostgres {
    async fn fetch_rows(
        &self,
        collection: &str,
        query: RowQuery,
    ) -> Result<Vec<Row>, GatewayError> {
        if !self.collections.contains(collection) {
            return Err(GatewayError::UnknownCollection(collection.to_string()));
        }

        let select = build_select(collection, &query)?;
        let statement = self.db.get_database_backend().build(&select);

        let rows = JsonValue::find_by_statement(statement)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        if let Some(bad) = rows.iter().find(|r| !r.is_object()) {
            return Err(GatewayError::Malformed(format!(
                "expected row object, got {bad}"
            )));
        }

        query.finish(rows)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn build_select(collection: &str, query: &RowQuery) -> Result<SelectStatement, GatewayError> {
    validate_identifier(collection)?;

    let mut select = Query::select();
    select.from(Alias::new(collection));

    if query.columns.is_empty() {
        select.column(Asterisk);
    } else {
        for column in &query.columns {
            validate_identifier(column)?;
            select.column(Alias::new(column));
        }
    }

    for (column, value) in &query.filters {
        validate_identifier(column)?;
        select.and_where(filter_expr(column, value));
    }

    if let Some(order) = &query.order_by {
        validate_identifier(&order.column)?;
        let direction = match order.direction {
            Direction::Ascending => Order::Asc,
            Direction::Descending => Order::Desc,
        };
        select.order_by(Alias::new(&order.column), direction);
    }

    if let Some(limit) = query.effective_limit() {
        select.limit(limit);
    }

    Ok(select)
}

/// Text filters compare the column's text form, so uuid keys match a bound string.
fn filter_expr(column: &str, value: &FilterValue) -> SimpleExpr {
    let column = Expr::col(Alias::new(column));
    match value {
        FilterValue::Bool(b) => column.eq(Value::from(*b)),
        FilterValue::Int(i) => column.eq(Value::from(*i)),
        FilterValue::Text(s) => Expr::expr(column.cast_as(Alias::new("text"))).eq(s.as_str()),
    }
}

fn map_db_err(e: DbErr) -> GatewayError {
    GatewayError::Unreachable(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
