mod row_gateway_memory;
mod row_gateway_postgres;

pub use row_gateway_memory::{RowGatewayMemory, SeedError};
pub use row_gateway_postgres::RowGatewayPostgres;
