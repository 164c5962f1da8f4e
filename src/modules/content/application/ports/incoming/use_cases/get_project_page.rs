use async_trait::async_trait;

use crate::modules::content::application::ports::outgoing::ContentQueryError;
use crate::modules::content::domain::entities::{Project, ProjectDetails, RowId};

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectPage {
    pub project: Project,
    pub details: ProjectDetails,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GetProjectPageError {
    #[error("Project not found")]
    NotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<ContentQueryError> for GetProjectPageError {
    fn from(err: ContentQueryError) -> Self {
        match err {
            ContentQueryError::NotFound => GetProjectPageError::NotFound,
            other => GetProjectPageError::QueryFailed(other.to_string()),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait GetProjectPageUseCase: Send + Sync {
    /// Both the project row and its details row must exist.
    async fn execute(&self, id: &RowId) -> Result<ProjectPage, GetProjectPageError>;
}
