pub mod row_gateway;

pub use row_gateway::{
    Direction, FilterValue, GatewayError, OrderBy, Row, RowGateway, RowQuery,
};
