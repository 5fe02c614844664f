//! Database model type aliases.
//!
//! Convenient aliases for the SeaORM entity models used throughout the application,
//! so call sites don't import from the generated `entity` crate directly.

/// Type alias for the Reloc user database model.
///
/// Represents a registered account. Each user stores the Census place/state codes of
/// their home city and can favorite any number of other cities.
pub type UserModel = entity::reloc_user::Model;

/// Type alias for the favorite-city database model.
///
/// Links a user to a Census place they favorited. At most one row exists per
/// (user, place, state) triple.
pub type FavoriteModel = entity::favorite::Model;
