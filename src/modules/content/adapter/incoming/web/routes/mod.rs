pub mod home;
pub mod past_projects;
pub mod project_page;
