use async_trait::async_trait;

use crate::modules::content::application::ports::outgoing::ContentQueryError;
use crate::modules::content::domain::entities::PastProject;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GetPastProjectsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<ContentQueryError> for GetPastProjectsError {
    fn from(err: ContentQueryError) -> Self {
        GetPastProjectsError::QueryFailed(err.to_string())
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait GetPastProjectsUseCase: Send + Sync {
    /// Full set, newest first.
    async fn execute(&self) -> Result<Vec<PastProject>, GetPastProjectsError>;
}
