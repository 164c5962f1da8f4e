use async_trait::async_trait;

use crate::content::application::ports::incoming::use_cases::{
    GetHomeSectionsUseCase, GetPastProjectsError, GetPastProjectsUseCase, GetProjectPageError,
    GetProjectPageUseCase, ProjectPage,
};
use crate::content::domain::entities::{About, Hero, PastProject, Post, Project, RowId, Skill};

/* --------------------------------------------------
 * Home sections
 * -------------------------------------------------- */

/// Every section empty, as if nothing had been stored yet.
#[derive(Clone, Default)]
pub struct StubHomeSections;

#[async_trait]
impl GetHomeSectionsUseCase for StubHomeSections {
    async fn hero(&self) -> Option<Hero> {
        None
    }

    async fn about(&self) -> Option<About> {
        None
    }

    async fn skills(&self) -> Vec<Skill> {
        vec![]
    }

    async fn projects(&self) -> Vec<Project> {
        vec![]
    }

    async fn posts(&self) -> Vec<Post> {
        vec![]
    }
}

/* --------------------------------------------------
 * Past projects
 * -------------------------------------------------- */

#[derive(Clone)]
pub struct StubGetPastProjectsUseCase {
    pub result: Result<Vec<PastProject>, GetPastProjectsError>,
}

impl StubGetPastProjectsUseCase {
    pub fn success(items: Vec<PastProject>) -> Self {
        Self { result: Ok(items) }
    }
}

#[async_trait]
impl GetPastProjectsUseCase for StubGetPastProjectsUseCase {
    async fn execute(&self) -> Result<Vec<PastProject>, GetPastProjectsError> {
        self.result.clone()
    }
}

/* --------------------------------------------------
 * Project page
 * -------------------------------------------------- */

#[derive(Clone)]
pub struct StubGetProjectPageUseCase {
    pub result: Result<ProjectPage, GetProjectPageError>,
}

impl StubGetProjectPageUseCase {
    pub fn not_found() -> Self {
        Self {
            result: Err(GetProjectPageError::NotFound),
        }
    }
}

#[async_trait]
impl GetProjectPageUseCase for StubGetProjectPageUseCase {
    async fn execute(&self, _id: &RowId) -> Result<ProjectPage, GetProjectPageError> {
        self.result.clone()
    }
}
