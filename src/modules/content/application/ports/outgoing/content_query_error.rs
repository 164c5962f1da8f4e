// src/modules/content/application/ports/outgoing/content_query_error.rs

use crate::modules::gateway::application::ports::outgoing::GatewayError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ContentQueryError {
    #[error("Row not found")]
    NotFound,

    #[error("Content unavailable: {0}")]
    Unavailable(String),

    #[error("Malformed row: {0}")]
    Malformed(String),
}

impl From<GatewayError> for ContentQueryError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::NoMatchingRow => ContentQueryError::NotFound,
            GatewayError::MultipleRows(n) => {
                ContentQueryError::Malformed(format!("expected one row, got {n}"))
            }
            GatewayError::Malformed(msg) => ContentQueryError::Malformed(msg),
            other @ (GatewayError::UnknownCollection(_)
            | GatewayError::InvalidIdentifier(_)
            | GatewayError::Unreachable(_)) => ContentQueryError::Unavailable(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for ContentQueryError {
    fn from(err: serde_json::Error) -> Self {
        ContentQueryError::Malformed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gateway_errors_map_by_kind() {
        assert_eq!(
            ContentQueryError::from(GatewayError::NoMatchingRow),
            ContentQueryError::NotFound
        );
        assert!(matches!(
            ContentQueryError::from(GatewayError::MultipleRows(2)),
            ContentQueryError::Malformed(_)
        ));
        assert!(matches!(
            ContentQueryError::from(GatewayError::Unreachable("down".into())),
            ContentQueryError::Unavailable(msg) if msg.contains("down")
        ));
        assert!(matches!(
            ContentQueryError::from(GatewayError::UnknownCollection("x".into())),
            ContentQueryError::Unavailable(_)
        ));
    }
}
