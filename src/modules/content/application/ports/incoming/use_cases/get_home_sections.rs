use async_trait::async_trait;

use crate::modules::content::domain::entities::{About, Hero, Post, Project, Skill};

pub const FEATURED_PROJECT_LIMIT: u64 = 3;
pub const LATEST_POST_LIMIT: u64 = 2;

/// Everything the home page shows. Each field degrades on its own: a failed
/// section stays `None` or empty while the others carry data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HomeSections {
    pub hero: Option<Hero>,
    pub about: Option<About>,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub posts: Vec<Post>,
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

/// One method per section. Failures are absorbed (logged) so that callers
/// never see an error for a single section.
#[async_trait]
pub trait GetHomeSectionsUseCase: Send + Sync {
    async fn hero(&self) -> Option<Hero>;

    async fn about(&self) -> Option<About>;

    async fn skills(&self) -> Vec<Skill>;

    /// Newest featured active projects, or newest active ones when none
    /// are featured.
    async fn projects(&self) -> Vec<Project>;

    async fn posts(&self) -> Vec<Post>;

    /// All sections, queried concurrently.
    async fn load_all(&self) -> HomeSections {
        let (hero, about, skills, projects, posts) = futures::join!(
            self.hero(),
            self.about(),
            self.skills(),
            self.projects(),
            self.posts()
        );

        HomeSections {
            hero,
            about,
            skills,
            projects,
            posts,
        }
    }
}
