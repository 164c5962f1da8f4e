pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_table_hero;
mod m20260301_000002_create_table_about;
mod m20260301_000003_create_table_skills;
mod m20260301_000004_create_table_projects;
mod m20260301_000005_create_table_project_details;
mod m20260301_000006_create_table_past_projects;
mod m20260301_000007_create_table_posts;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_table_hero::Migration),
            Box::new(m20260301_000002_create_table_about::Migration),
            Box::new(m20260301_000003_create_table_skills::Migration),
            Box::new(m20260301_000004_create_table_projects::Migration),
            Box::new(m20260301_000005_create_table_project_details::Migration),
            Box::new(m20260301_000006_create_table_past_projects::Migration),
            Box::new(m20260301_000007_create_table_posts::Migration),
        ]
    }
}
