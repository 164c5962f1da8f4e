// src/modules/content/application/ports/outgoing/project_query.rs

use async_trait::async_trait;

use super::ContentQueryError;
use crate::modules::content::domain::entities::{Project, ProjectDetails, RowId};

#[async_trait]
pub trait ProjectQuery: Send + Sync {
    /// Newest non-archived projects; `featured_only` narrows to featured ones.
    async fn list_active(
        &self,
        featured_only: bool,
        limit: u64,
    ) -> Result<Vec<Project>, ContentQueryError>;

    async fn get_by_id(&self, id: &RowId) -> Result<Project, ContentQueryError>;
}

#[async_trait]
pub trait ProjectDetailsQuery: Send + Sync {
    async fn get_by_project_id(&self, id: &RowId) -> Result<ProjectDetails, ContentQueryError>;
}
