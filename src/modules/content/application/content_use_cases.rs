use std::sync::Arc;

use crate::modules::content::application::ports::incoming::use_cases::{
    GetHomeSectionsUseCase, GetPastProjectsUseCase, GetProjectPageUseCase,
};

#[derive(Clone)]
pub struct ContentUseCases {
    pub home: Arc<dyn GetHomeSectionsUseCase + Send + Sync>,
    pub past_projects: Arc<dyn GetPastProjectsUseCase + Send + Sync>,
    pub project_page: Arc<dyn GetProjectPageUseCase + Send + Sync>,
}
