//! Core types for evently.
//!
//! This crate provides everything below the terminal front end:
//! - `Event`, `Catalog` and `UserProfile` data types with their seed data
//! - `query` and `calendar` for deriving view data from a catalog snapshot
//! - `store` and `session` for loading, saving and toggling RSVPs/favorites

pub mod calendar;
pub mod catalog;
pub mod category;
pub mod config;
pub mod constants;
pub mod dates;
pub mod error;
pub mod event;
pub mod query;
pub mod seed;
pub mod session;
pub mod store;
pub mod user;

pub use catalog::Catalog;
pub use category::{Category, CategoryFilter};
pub use error::{EventlyError, EventlyResult};
pub use event::Event;
pub use session::{EventSession, ToggleOutcome};
