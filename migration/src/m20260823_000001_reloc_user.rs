use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RelocUser::Table)
                    .if_not_exists()
                    .col(pk_auto(RelocUser::Id))
                    .col(string_uniq(RelocUser::Username))
                    .col(string(RelocUser::PasswordHash))
                    .col(string(RelocUser::Email))
                    .col(string(RelocUser::HomePlaceCode))
                    .col(string(RelocUser::HomeStateCode))
                    .col(timestamp(RelocUser::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RelocUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum RelocUser {
    Table,
    Id,
    Username,
    PasswordHash,
    Email,
    HomePlaceCode,
    HomeStateCode,
    CreatedAt,
}
