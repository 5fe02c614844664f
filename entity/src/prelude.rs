pub use super::favorite::Entity as Favorite;
pub use super::reloc_user::Entity as RelocUser;
