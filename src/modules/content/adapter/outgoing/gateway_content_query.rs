// src/modules/content/adapter/outgoing/gateway_content_query.rs

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::modules::content::application::ports::outgoing::{
    AboutQuery, ContentQueryError, HeroQuery, PastProjectQuery, PostQuery, ProjectDetailsQuery,
    ProjectQuery, SkillQuery,
};
use crate::modules::content::domain::entities::{
    About, Hero, PastProject, Post, Project, ProjectDetails, RowId, Skill,
};
use crate::modules::content::domain::sections::Collection;
use crate::modules::gateway::application::ports::outgoing::{
    GatewayError, Row, RowGateway, RowQuery,
};

/// Columns a project card needs; the flags stay server-side.
const PROJECT_CARD_COLUMNS: [&str; 5] = ["id", "title", "summary", "cover_url", "created_at"];

// ============================================================================
// Repository Implementation
// ============================================================================

/// Every read-only content port, answered through one row gateway.
#[derive(Clone)]
pub struct GatewayContentQuery<G> {
    gateway: G,
}

impl<G> GatewayContentQuery<G>
where
    G: RowGateway,
{
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    async fn latest_one<T: DeserializeOwned>(
        &self,
        collection: Collection,
    ) -> Result<Option<T>, ContentQueryError> {
        let query = RowQuery::new().newest_first().limit(1);

        match self.gateway.fetch_one(collection.table(), query).await {
            Ok(row) => decode(row).map(Some),
            Err(GatewayError::NoMatchingRow) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn list<T: DeserializeOwned>(
        &self,
        collection: Collection,
        query: RowQuery,
    ) -> Result<Vec<T>, ContentQueryError> {
        self.gateway
            .fetch_rows(collection.table(), query)
            .await?
            .into_iter()
            .map(decode)
            .collect()
    }

    async fn one<T: DeserializeOwned>(
        &self,
        collection: Collection,
        query: RowQuery,
    ) -> Result<T, ContentQueryError> {
        let row = self.gateway.fetch_one(collection.table(), query).await?;
        decode(row)
    }
}

#[async_trait]
impl<G> HeroQuery for GatewayContentQuery<G>
where
    G: RowGateway,
{
    async fn latest(&self) -> Result<Option<Hero>, ContentQueryError> {
        self.latest_one(Collection::Hero).await
    }
}

#[async_trait]
impl<G> AboutQuery for GatewayContentQuery<G>
where
    G: RowGateway,
{
    async fn latest(&self) -> Result<Option<About>, ContentQueryError> {
        self.latest_one(Collection::About).await
    }
}

#[async_trait]
impl<G> SkillQuery for GatewayContentQuery<G>
where
    G: RowGateway,
{
    async fn list_newest_first(&self) -> Result<Vec<Skill>, ContentQueryError> {
        self.list(Collection::Skills, RowQuery::new().newest_first())
            .await
    }
}

#[async_trait]
impl<G> PostQuery for GatewayContentQuery<G>
where
    G: RowGateway,
{
    async fn latest(&self, limit: u64) -> Result<Vec<Post>, ContentQueryError> {
        self.list(Collection::Posts, RowQuery::new().newest_first().limit(limit))
            .await
    }
}

#[async_trait]
impl<G> ProjectQuery for GatewayContentQuery<G>
where
    G: RowGateway,
{
    async fn list_active(
        &self,
        featured_only: bool,
        limit: u64,
    ) -> Result<Vec<Project>, ContentQueryError> {
        let mut query = RowQuery::new()
            .columns(&PROJECT_CARD_COLUMNS)
            .eq("is_archived", false);

        if featured_only {
            query = query.eq("is_featured", true);
        }

        self.list(Collection::Projects, query.newest_first().limit(limit))
            .await
    }

    async fn get_by_id(&self, id: &RowId) -> Result<Project, ContentQueryError> {
        let query = RowQuery::new()
            .columns(&PROJECT_CARD_COLUMNS)
            .eq("id", id.as_str());

        self.one(Collection::Projects, query).await
    }
}

#[async_trait]
impl<G> ProjectDetailsQuery for GatewayContentQuery<G>
where
    G: RowGateway,
{
    async fn get_by_project_id(&self, id: &RowId) -> Result<ProjectDetails, ContentQueryError> {
        let query = RowQuery::new().eq("project_id", id.as_str());
        self.one(Collection::ProjectDetails, query).await
    }
}

#[async_trait]
impl<G> PastProjectQuery for GatewayContentQuery<G>
where
    G: RowGateway,
{
    async fn list_newest_first(&self) -> Result<Vec<PastProject>, ContentQueryError> {
        self.list(Collection::PastProjects, RowQuery::new().newest_first())
            .await
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn decode<T: DeserializeOwned>(row: Row) -> Result<T, ContentQueryError> {
    serde_json::from_value(row).map_err(ContentQueryError::from)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::gateway::adapter::outgoing::RowGatewayMemory;
    use serde_json::json;

    fn seeded() -> GatewayContentQuery<RowGatewayMemory> {
        let gateway = RowGatewayMemory::new()
            .with_collection(
                "hero",
                vec![
                    json!({"id": "h1", "title": "Old", "created_at": "2023-01-01T00:00:00Z"}),
                    json!({"id": "h2", "title": "New", "subtitle": "Hi", "created_at": "2024-01-01T00:00:00Z"}),
                ],
            )
            .with_collection("about", vec![])
            .with_collection(
                "projects",
                vec![
                    json!({"id": "p1", "title": "One", "is_archived": false, "is_featured": true, "created_at": "2024-01-01T00:00:00Z"}),
                    json!({"id": "p2", "title": "Two", "is_archived": false, "is_featured": false, "created_at": "2024-02-01T00:00:00Z"}),
                ],
            )
            .with_collection(
                "project_details",
                vec![json!({"project_id": "p1", "description": "Details", "tech_stack": ["Rust"], "screenshots": []})],
            )
            .with_collection(
                "posts",
                vec![
                    json!({"id": 1, "content": "first", "created_at": "2024-01-01T00:00:00Z"}),
                    json!({"id": 2, "content": "second", "created_at": "2024-01-02T00:00:00Z"}),
                    json!({"id": 3, "content": "third", "created_at": "2024-01-03T00:00:00Z"}),
                ],
            )
            .with_collection(
                "skills",
                vec![json!({"id": "s1", "name": "Rust", "created_at": "nope"})],
            );

        GatewayContentQuery::new(gateway)
    }

    #[tokio::test]
    async fn hero_latest_picks_newest_row() {
        let hero = HeroQuery::latest(&seeded()).await.unwrap().unwrap();
        assert_eq!(hero.id, RowId::from("h2"));
        assert_eq!(hero.subtitle.as_deref(), Some("Hi"));
    }

    #[tokio::test]
    async fn about_latest_on_empty_table_is_none() {
        let about = AboutQuery::latest(&seeded()).await.unwrap();
        assert!(about.is_none());
    }

    #[tokio::test]
    async fn posts_latest_respects_limit() {
        let posts = PostQuery::latest(&seeded(), 2).await.unwrap();
        let contents: Vec<_> = posts.iter().map(|p| p.content.as_str()).collect();
        assert_eq!(contents, vec!["third", "second"]);
    }

    #[tokio::test]
    async fn featured_only_narrows_active_projects() {
        let q = seeded();

        let featured = q.list_active(true, 3).await.unwrap();
        assert_eq!(featured.len(), 1);
        assert_eq!(featured[0].title, "One");

        let active = q.list_active(false, 3).await.unwrap();
        let titles: Vec<_> = active.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Two", "One"]);
    }

    #[tokio::test]
    async fn project_lookup_by_id() {
        let q = seeded();

        let project = q.get_by_id(&RowId::from("p2")).await.unwrap();
        assert_eq!(project.title, "Two");

        let missing = q.get_by_id(&RowId::from("nope")).await;
        assert_eq!(missing, Err(ContentQueryError::NotFound));
    }

    #[tokio::test]
    async fn details_lookup_by_project_id() {
        let q = seeded();

        let details = q.get_by_project_id(&RowId::from("p1")).await.unwrap();
        assert_eq!(details.tech_stack, vec!["Rust"]);

        let missing = q.get_by_project_id(&RowId::from("p2")).await;
        assert_eq!(missing, Err(ContentQueryError::NotFound));
    }

    #[tokio::test]
    async fn undecodable_row_is_malformed() {
        let result = SkillQuery::list_newest_first(&seeded()).await;
        assert!(matches!(result, Err(ContentQueryError::Malformed(_))));
    }

    #[tokio::test]
    async fn missing_collection_is_unavailable() {
        let result = PastProjectQuery::list_newest_first(&seeded()).await;
        assert!(matches!(result, Err(ContentQueryError::Unavailable(_))));
    }
}
