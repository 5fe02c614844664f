//! Tests for user profile and favorites controller endpoints.

mod delete_account;
mod delete_favorite;
mod update_profile;
