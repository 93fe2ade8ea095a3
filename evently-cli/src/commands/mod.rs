pub mod calendar;
pub mod categories;
pub mod config;
pub mod home;
pub mod profile;
pub mod refresh;
pub mod search;
pub mod show;
pub mod toggle;
