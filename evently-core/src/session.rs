//! The live catalog for one process, plus the favorite/RSVP write policy.
//!
//! Mutating methods take `&mut self`, so a session is the single writer for
//! its store.

use tracing::{info, warn};

use crate::catalog::Catalog;
use crate::error::EventlyResult;
use crate::event::Event;
use crate::seed;
use crate::store::{EventStore, KeyValueStore};
use crate::user::UserProfile;

/// What happened to a favorite or RSVP toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The flag flipped to `active`. `persisted` is false when the save
    /// failed and the change only lives in memory.
    Toggled { active: bool, persisted: bool },
    /// The save failed and the in-memory change was undone.
    RolledBack,
    /// No event with that id.
    NotFound,
}

pub struct EventSession<S> {
    store: EventStore<S>,
    catalog: Catalog,
}

impl<S: KeyValueStore> EventSession<S> {
    /// Load the catalog from `backend`, seeding it on first use.
    pub fn open(backend: S) -> Self {
        let mut store = EventStore::new(backend);
        let catalog = store.load();
        EventSession { store, catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn store(&self) -> &EventStore<S> {
        &self.store
    }

    /// The local user, with RSVP and favorite sets taken from the catalog.
    pub fn profile(&self) -> UserProfile {
        seed::user_profile().with_catalog(&self.catalog)
    }

    /// Re-read the catalog from storage.
    pub fn reload(&mut self) {
        self.catalog = self.store.load();
    }

    /// Replace the stored catalog with the seed data.
    pub fn reset(&mut self) -> EventlyResult<()> {
        self.catalog = self.store.reset()?;
        Ok(())
    }

    /// Flip the favorite flag and persist.
    ///
    /// A failed save is logged and the in-memory change is kept.
    pub fn toggle_favorite(&mut self, id: &str) -> ToggleOutcome {
        if !self.catalog.contains(id) {
            return ToggleOutcome::NotFound;
        }

        self.catalog = self.catalog.toggle_favorite(id);
        let active = self.flag(id, |e| e.is_favorite);

        let persisted = match self.store.save(&self.catalog) {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, event = id, "could not save favorite, keeping local change");
                false
            }
        };

        ToggleOutcome::Toggled { active, persisted }
    }

    /// Flip the RSVP flag (and attendee count) and persist.
    ///
    /// A failed save is logged and the catalog goes back to what storage holds.
    pub fn toggle_rsvp(&mut self, id: &str) -> ToggleOutcome {
        if !self.catalog.contains(id) {
            return ToggleOutcome::NotFound;
        }

        let next = self.catalog.toggle_rsvp(id);
        match self.store.save(&next) {
            Ok(()) => {
                self.catalog = next;
                let active = self.flag(id, |e| e.is_rsvped);
                info!(event = id, rsvped = active, "updated rsvp");
                ToggleOutcome::Toggled {
                    active,
                    persisted: true,
                }
            }
            Err(e) => {
                warn!(error = %e, event = id, "could not save rsvp, reverting");
                self.revert_to_stored();
                ToggleOutcome::RolledBack
            }
        }
    }

    /// Replace the in-memory catalog with the stored one. Unsaved favorite
    /// changes are dropped too. Keeps the current catalog if storage can't be read.
    fn revert_to_stored(&mut self) {
        match self.store.try_load() {
            Ok(Some(stored)) => self.catalog = stored,
            Ok(None) => {}
            Err(e) => warn!(error = %e, "could not re-read catalog, keeping it in memory"),
        }
    }

    fn flag(&self, id: &str, get: impl Fn(&Event) -> bool) -> bool {
        self.catalog.find(id).is_some_and(get)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::EVENTS_KEY;
    use crate::store::MemoryStore;

    fn stored_catalog(session: &EventSession<MemoryStore>) -> Catalog {
        let raw = session.store().backend().entry(EVENTS_KEY).unwrap();
        serde_json::from_str(raw).unwrap()
    }

    fn read_only_session() -> EventSession<MemoryStore> {
        let json = serde_json::to_string(&seed::catalog()).unwrap();
        EventSession::open(
            MemoryStore::new()
                .with_entry(EVENTS_KEY, json)
                .failing_writes(),
        )
    }

    #[test]
    fn test_open_seeds_empty_store() {
        let session = EventSession::open(MemoryStore::new());
        assert_eq!(session.catalog(), &seed::catalog());
        assert_eq!(stored_catalog(&session), seed::catalog());
    }

    #[test]
    fn test_toggle_favorite_persists() {
        let mut session = EventSession::open(MemoryStore::new());

        let outcome = session.toggle_favorite("1");
        assert_eq!(
            outcome,
            ToggleOutcome::Toggled {
                active: true,
                persisted: true
            }
        );
        assert!(stored_catalog(&session).find("1").unwrap().is_favorite);
    }

    #[test]
    fn test_toggle_rsvp_persists_counter() {
        let mut session = EventSession::open(MemoryStore::new());

        // Event 2 starts RSVP'd with 156 attendees
        let outcome = session.toggle_rsvp("2");
        assert_eq!(
            outcome,
            ToggleOutcome::Toggled {
                active: false,
                persisted: true
            }
        );
        assert_eq!(stored_catalog(&session).find("2").unwrap().current_attendees, 155);

        session.toggle_rsvp("2");
        assert_eq!(stored_catalog(&session).find("2").unwrap().current_attendees, 156);
    }

    #[test]
    fn test_failed_favorite_save_keeps_local_change() {
        let mut session = read_only_session();

        let outcome = session.toggle_favorite("1");
        assert_eq!(
            outcome,
            ToggleOutcome::Toggled {
                active: true,
                persisted: false
            }
        );
        assert!(session.catalog().find("1").unwrap().is_favorite);
        assert!(!stored_catalog(&session).find("1").unwrap().is_favorite);
    }

    #[test]
    fn test_failed_rsvp_save_rolls_back() {
        let mut session = read_only_session();
        let before = session.catalog().clone();

        assert_eq!(session.toggle_rsvp("4"), ToggleOutcome::RolledBack);
        assert_eq!(session.catalog(), &before);
        assert_eq!(session.catalog(), &stored_catalog(&session));
    }

    #[test]
    fn test_failed_rsvp_save_drops_unsaved_favorite() {
        let mut session = read_only_session();

        session.toggle_favorite("1");
        assert!(session.catalog().find("1").unwrap().is_favorite);

        assert_eq!(session.toggle_rsvp("4"), ToggleOutcome::RolledBack);
        assert_eq!(session.catalog(), &stored_catalog(&session));
        assert!(!session.catalog().find("1").unwrap().is_favorite);
    }

    #[test]
    fn test_failed_rsvp_save_with_unreadable_store_keeps_catalog() {
        let mut session = EventSession::open(MemoryStore::new().failing_reads().failing_writes());
        let before = session.catalog().clone();

        assert_eq!(session.toggle_rsvp("4"), ToggleOutcome::RolledBack);
        assert_eq!(session.catalog(), &before);
    }

    #[test]
    fn test_unknown_id() {
        let mut session = EventSession::open(MemoryStore::new());
        assert_eq!(session.toggle_favorite("nope"), ToggleOutcome::NotFound);
        assert_eq!(session.toggle_rsvp("nope"), ToggleOutcome::NotFound);
        assert_eq!(session.catalog(), &seed::catalog());
    }

    #[test]
    fn test_profile_follows_catalog_flags() {
        let mut session = EventSession::open(MemoryStore::new());
        session.toggle_rsvp("6");
        session.toggle_favorite("3");

        let profile = session.profile();
        assert!(profile.rsvped_events.contains("6"));
        assert!(!profile.favorite_events.contains("3"));
    }

    #[test]
    fn test_reload_and_reset() {
        let mut session = EventSession::open(MemoryStore::new());
        session.toggle_rsvp("1");
        let changed = session.catalog().clone();

        session.reload();
        assert_eq!(session.catalog(), &changed);

        session.reset().unwrap();
        assert_eq!(session.catalog(), &seed::catalog());
        assert_eq!(stored_catalog(&session), seed::catalog());
    }
}
