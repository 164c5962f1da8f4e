mod home_sections_service;
mod past_projects_service;
mod project_page_service;

pub use home_sections_service::HomeSectionsService;
pub use past_projects_service::PastProjectsService;
pub use project_page_service::ProjectPageService;
