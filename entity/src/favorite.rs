use sea_orm::entity::prelude::*;

/// A city a user has favorited, keyed by Census place/state codes.
///
/// At most one row exists per (user, place, state); the row is toggled
/// (inserted or deleted), never updated.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "favorite")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub place_code: String,
    pub state_code: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::reloc_user::Entity",
        from = "Column::UserId",
        to = "super::reloc_user::Column::Id"
    )]
    RelocUser,
}

impl Related<super::reloc_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RelocUser.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
