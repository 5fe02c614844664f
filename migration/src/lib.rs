pub use sea_orm_migration::prelude::*;

mod m20260823_000001_reloc_user;
mod m20260823_000002_favorite;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260823_000001_reloc_user::Migration),
            Box::new(m20260823_000002_favorite::Migration),
        ]
    }
}
