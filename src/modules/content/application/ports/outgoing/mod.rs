mod content_query_error;
mod home_content_query;
mod past_project_query;
mod project_query;

pub use content_query_error::ContentQueryError;
pub use home_content_query::{AboutQuery, HeroQuery, PostQuery, SkillQuery};
pub use past_project_query::PastProjectQuery;
pub use project_query::{ProjectDetailsQuery, ProjectQuery};
