use async_trait::async_trait;
use tracing::warn;

use crate::modules::content::application::ports::incoming::use_cases::{
    GetHomeSectionsUseCase, FEATURED_PROJECT_LIMIT, LATEST_POST_LIMIT,
};
use crate::modules::content::application::ports::outgoing::{
    AboutQuery, ContentQueryError, HeroQuery, PostQuery, ProjectQuery, SkillQuery,
};
use crate::modules::content::domain::entities::{About, Hero, Post, Project, Skill};
use crate::modules::content::domain::sections::{Collection, Section};

// ============================================================================
// Service Implementation
// ============================================================================

pub struct HomeSectionsService<Q> {
    query: Q,
}

impl<Q> HomeSectionsService<Q>
where
    Q: HeroQuery + AboutQuery + SkillQuery + ProjectQuery + PostQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

/// Logs a failed section query and hands back its empty value.
fn degrade<T: Default>(section: Section, result: Result<T, ContentQueryError>) -> T {
    result.unwrap_or_else(|err| {
        warn!(
            section = section.anchor(),
            collection = section.collection().map(Collection::table).unwrap_or_default(),
            error = %err,
            "Section query failed, rendering placeholder"
        );
        T::default()
    })
}

#[async_trait]
impl<Q> GetHomeSectionsUseCase for HomeSectionsService<Q>
where
    Q: HeroQuery + AboutQuery + SkillQuery + ProjectQuery + PostQuery,
{
    async fn hero(&self) -> Option<Hero> {
        degrade(Section::Hero, HeroQuery::latest(&self.query).await)
    }

    async fn about(&self) -> Option<About> {
        degrade(Section::About, AboutQuery::latest(&self.query).await)
    }

    async fn skills(&self) -> Vec<Skill> {
        degrade(Section::Skills, self.query.list_newest_first().await)
    }

    async fn projects(&self) -> Vec<Project> {
        let featured = self
            .query
            .list_active(true, FEATURED_PROJECT_LIMIT)
            .await
            .unwrap_or_else(|err| {
                warn!(error = %err, "Featured project query failed, falling back to active projects");
                Vec::new()
            });

        if !featured.is_empty() {
            return featured;
        }

        degrade(
            Section::Projects,
            self.query.list_active(false, FEATURED_PROJECT_LIMIT).await,
        )
    }

    async fn posts(&self) -> Vec<Post> {
        degrade(
            Section::Blog,
            PostQuery::latest(&self.query, LATEST_POST_LIMIT).await,
        )
    }
}
