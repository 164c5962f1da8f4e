// src/modules/content/application/ports/outgoing/home_content_query.rs

use async_trait::async_trait;

use super::ContentQueryError;
use crate::modules::content::domain::entities::{About, Hero, Post, Skill};

/// Active hero = newest row. `Ok(None)` when the table is empty.
#[async_trait]
pub trait HeroQuery: Send + Sync {
    async fn latest(&self) -> Result<Option<Hero>, ContentQueryError>;
}

#[async_trait]
pub trait AboutQuery: Send + Sync {
    async fn latest(&self) -> Result<Option<About>, ContentQueryError>;
}

#[async_trait]
pub trait SkillQuery: Send + Sync {
    async fn list_newest_first(&self) -> Result<Vec<Skill>, ContentQueryError>;
}

#[async_trait]
pub trait PostQuery: Send + Sync {
    async fn latest(&self, limit: u64) -> Result<Vec<Post>, ContentQueryError>;
}
