use async_trait::async_trait;

use crate::modules::content::application::ports::incoming::use_cases::{
    GetProjectPageError, GetProjectPageUseCase, ProjectPage,
};
use crate::modules::content::application::ports::outgoing::{ProjectDetailsQuery, ProjectQuery};
use crate::modules::content::domain::entities::RowId;

pub struct ProjectPageService<Q> {
    query: Q,
}

impl<Q> ProjectPageService<Q>
where
    Q: ProjectQuery + ProjectDetailsQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetProjectPageUseCase for ProjectPageService<Q>
where
    Q: ProjectQuery + ProjectDetailsQuery,
{
    async fn execute(&self, id: &RowId) -> Result<ProjectPage, GetProjectPageError> {
        let (project, details) = futures::join!(
            self.query.get_by_id(id),
            self.query.get_by_project_id(id)
        );

        Ok(ProjectPage {
            project: project?,
            details: details?,
        })
    }
}
