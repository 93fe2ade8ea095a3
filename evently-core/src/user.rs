//! The local user's profile and the per-viewer event partitions.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::category::Category;
use crate::error::EventlyError;
use crate::event::Event;
use crate::query;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub bio: String,
    pub interests: Vec<Category>,
    pub rsvped_events: BTreeSet<String>,
    pub favorite_events: BTreeSet<String>,
    /// Lifetime count, kept independently of the current catalog.
    pub events_attended: u32,
}

impl UserProfile {
    /// Replace the RSVP and favorite id sets with the ones flagged in `catalog`.
    ///
    /// The per-event flags in the persisted catalog are what RSVP/favorite
    /// toggles write to, so they win over whatever the profile carried.
    pub fn with_catalog(mut self, catalog: &Catalog) -> Self {
        self.rsvped_events = catalog.rsvped_ids();
        self.favorite_events = catalog.favorite_ids();
        self
    }

    pub fn events_for<'a>(
        &self,
        tab: ProfileTab,
        catalog: &'a Catalog,
        today: NaiveDate,
    ) -> Vec<&'a Event> {
        match tab {
            ProfileTab::Rsvp => query::rsvped(catalog, &self.rsvped_events),
            ProfileTab::Favorites => query::favorites(catalog, &self.favorite_events),
            ProfileTab::Attended => query::attended(catalog, &self.rsvped_events, today),
        }
    }

    pub fn summary(&self, catalog: &Catalog, today: NaiveDate) -> ProfileSummary {
        ProfileSummary {
            rsvped: self.events_for(ProfileTab::Rsvp, catalog, today).len(),
            favorites: self.events_for(ProfileTab::Favorites, catalog, today).len(),
            attended: self.events_for(ProfileTab::Attended, catalog, today).len(),
            lifetime_attended: self.events_attended,
        }
    }
}

/// Event lists on the profile view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileTab {
    #[default]
    Rsvp,
    Favorites,
    Attended,
}

impl fmt::Display for ProfileTab {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            ProfileTab::Rsvp => "RSVP'd",
            ProfileTab::Favorites => "Favorites",
            ProfileTab::Attended => "Attended",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for ProfileTab {
    type Err = EventlyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rsvp" | "rsvped" => Ok(ProfileTab::Rsvp),
            "favorites" | "favourites" | "fav" => Ok(ProfileTab::Favorites),
            "attended" => Ok(ProfileTab::Attended),
            _ => Err(EventlyError::UnknownProfileTab(s.to_string())),
        }
    }
}

/// Counts shown in the profile header and tab labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileSummary {
    pub rsvped: usize,
    pub favorites: usize,
    pub attended: usize,
    pub lifetime_attended: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_seed_profile_agrees_with_seed_flags() {
        let catalog = seed::catalog();
        let profile = seed::user_profile();
        assert_eq!(profile.clone().with_catalog(&catalog), profile);
    }

    #[test]
    fn test_with_catalog_follows_toggles() {
        let catalog = seed::catalog().toggle_rsvp("4").toggle_favorite("2");
        let profile = seed::user_profile().with_catalog(&catalog);

        assert!(profile.rsvped_events.contains("4"));
        assert!(!profile.favorite_events.contains("2"));
        assert_eq!(profile.events_attended, 23);
    }

    #[test]
    fn test_summary_counts() {
        let catalog = seed::catalog();
        let profile = seed::user_profile();
        let summary = profile.summary(&catalog, date("2025-03-01"));

        assert_eq!(
            summary,
            ProfileSummary {
                rsvped: 2,
                favorites: 2,
                attended: 1,
                lifetime_attended: 23,
            }
        );
    }

    #[test]
    fn test_parse_tab() {
        assert_eq!("Favorites".parse::<ProfileTab>().unwrap(), ProfileTab::Favorites);
        assert!("history".parse::<ProfileTab>().is_err());
    }

    #[test]
    fn test_profile_serializes_id_sets_as_arrays() {
        let value = serde_json::to_value(seed::user_profile()).unwrap();
        assert_eq!(value["rsvpedEvents"], serde_json::json!(["2", "5"]));
        assert_eq!(value["eventsAttended"], 23);
    }
}
