mod response;

pub use response::{ApiError, ApiResponse};
