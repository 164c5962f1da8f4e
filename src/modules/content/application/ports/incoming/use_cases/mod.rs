mod get_home_sections;
mod get_past_projects;
mod get_project_page;

pub use get_home_sections::{
    GetHomeSectionsUseCase, HomeSections, FEATURED_PROJECT_LIMIT, LATEST_POST_LIMIT,
};
pub use get_past_projects::{GetPastProjectsError, GetPastProjectsUseCase};
pub use get_project_page::{GetProjectPageError, GetProjectPageUseCase, ProjectPage};
