use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260823_000001_reloc_user::RelocUser;

static FK_FAVORITE_USER_ID: &str = "fk_favorite_user_id";
static IDX_FAVORITE_USER_CITY: &str = "idx_favorite_user_city";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Favorite::Table)
                    .if_not_exists()
                    .col(pk_auto(Favorite::Id))
                    .col(integer(Favorite::UserId))
                    .col(string(Favorite::PlaceCode))
                    .col(string(Favorite::StateCode))
                    .col(timestamp(Favorite::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FAVORITE_USER_ID)
                    .from_tbl(Favorite::Table)
                    .from_col(Favorite::UserId)
                    .to_tbl(RelocUser::Table)
                    .to_col(RelocUser::Id)
                    .to_owned(),
            )
            .await?;

        // At most one favorite row per (user, city).
        manager
            .create_index(
                Index::create()
                    .name(IDX_FAVORITE_USER_CITY)
                    .table(Favorite::Table)
                    .col(Favorite::UserId)
                    .col(Favorite::PlaceCode)
                    .col(Favorite::StateCode)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FAVORITE_USER_CITY)
                    .table(Favorite::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FAVORITE_USER_ID)
                    .table(Favorite::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Favorite::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Favorite {
    Table,
    Id,
    UserId,
    PlaceCode,
    StateCode,
    CreatedAt,
}
