use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Hero::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Hero::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Hero::Title).string_len(200).not_null())
                    .col(ColumnDef::new(Hero::Subtitle).text())
                    .col(ColumnDef::new(Hero::BackgroundUrl).text())
                    .col(ColumnDef::new(Hero::BackgroundColor).string_len(32))
                    .col(
                        ColumnDef::new(Hero::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Only the newest row is ever shown
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_hero_created_at
                ON hero (created_at DESC);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Hero::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Hero {
    Table,
    Id,
    Title,
    Subtitle,
    BackgroundUrl,
    BackgroundColor,
    CreatedAt,
}
