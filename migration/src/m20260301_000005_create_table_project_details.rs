use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProjectDetails::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProjectDetails::ProjectId)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ProjectDetails::Description).text())
                    .col(
                        ColumnDef::new(ProjectDetails::TechStack)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(ColumnDef::new(ProjectDetails::RepoUrl).text())
                    .col(ColumnDef::new(ProjectDetails::DemoUrl).text())
                    .col(
                        ColumnDef::new(ProjectDetails::Screenshots)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_details_project_id")
                            .from(ProjectDetails::Table, ProjectDetails::ProjectId)
                            .to(Projects::Table, Projects::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProjectDetails::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ProjectDetails {
    Table,
    ProjectId,
    Description,
    TechStack,
    RepoUrl,
    DemoUrl,
    Screenshots,
}

#[derive(DeriveIden)]
enum Projects {
    Table,
    Id,
}
