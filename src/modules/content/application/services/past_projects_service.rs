use async_trait::async_trait;

use crate::modules::content::application::ports::incoming::use_cases::{
    GetPastProjectsError, GetPastProjectsUseCase,
};
use crate::modules::content::application::ports::outgoing::PastProjectQuery;
use crate::modules::content::domain::entities::PastProject;

pub struct PastProjectsService<Q>
where
    Q: PastProjectQuery,
{
    query: Q,
}

impl<Q> PastProjectsService<Q>
where
    Q: PastProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetPastProjectsUseCase for PastProjectsService<Q>
where
    Q: PastProjectQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<PastProject>, GetPastProjectsError> {
        self.query
            .list_newest_first()
            .await
            .map_err(GetPastProjectsError::from)
    }
}
