// src/modules/content/application/ports/outgoing/past_project_query.rs

use async_trait::async_trait;

use super::ContentQueryError;
use crate::modules::content::domain::entities::PastProject;

#[async_trait]
pub trait PastProjectQuery: Send + Sync {
    async fn list_newest_first(&self) -> Result<Vec<PastProject>, ContentQueryError>;
}
