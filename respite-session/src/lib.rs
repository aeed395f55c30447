//! # respite-session
//!
//! Persistence for the one artifact Respite stores: the [`UserProfile`]
//! blob. A [`ProfileStore`] is read once at startup and rewritten wholesale
//! after onboarding and after each feedback submission.
//!
//! [`UserProfile`]: respite_core::UserProfile

pub mod store;

pub use store::{FileProfileStore, InMemoryProfileStore, ProfileStore};
