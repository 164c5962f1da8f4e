use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PastProjects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PastProjects::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(PastProjects::Title).string_len(150).not_null())
                    .col(ColumnDef::new(PastProjects::Description).text().not_null())
                    .col(ColumnDef::new(PastProjects::TechStack).json_binary())
                    .col(ColumnDef::new(PastProjects::RepoUrl).text())
                    .col(ColumnDef::new(PastProjects::DemoUrl).text())
                    .col(ColumnDef::new(PastProjects::Screenshots).json_binary())
                    .col(
                        ColumnDef::new(PastProjects::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PastProjects::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum PastProjects {
    Table,
    Id,
    Title,
    Description,
    TechStack,
    RepoUrl,
    DemoUrl,
    Screenshots,
    CreatedAt,
}
