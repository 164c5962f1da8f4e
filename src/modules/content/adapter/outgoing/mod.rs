mod gateway_content_query;

pub use gateway_content_query::GatewayContentQuery;
