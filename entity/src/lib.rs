pub mod favorite;
pub mod prelude;
pub mod reloc_user;
