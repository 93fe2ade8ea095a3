//! The event catalog: the ordered list of events persisted as one blob.

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::EventlyError;
use crate::event::Event;

/// Ordered list of events with unique ids.
///
/// Mutations never patch in place; every toggle returns a new catalog that
/// replaces the stored one wholesale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Event>", into = "Vec<Event>")]
pub struct Catalog {
    events: Vec<Event>,
}

impl Catalog {
    /// Build a catalog from events already known to have unique ids.
    pub(crate) fn from_unique(events: Vec<Event>) -> Self {
        Catalog { events }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    /// Ids of events the local user has RSVP'd to.
    pub fn rsvped_ids(&self) -> BTreeSet<String> {
        self.ids_where(|e| e.is_rsvped)
    }

    /// Ids of events the local user has favorited.
    pub fn favorite_ids(&self) -> BTreeSet<String> {
        self.ids_where(|e| e.is_favorite)
    }

    fn ids_where(&self, predicate: impl Fn(&Event) -> bool) -> BTreeSet<String> {
        self.events
            .iter()
            .filter(|e| predicate(e))
            .map(|e| e.id.clone())
            .collect()
    }

    /// Flip `is_favorite` on the event with this id. Attendee counts are untouched.
    /// Unknown ids return an identical catalog.
    pub fn toggle_favorite(&self, id: &str) -> Catalog {
        self.with_event(id, Event::toggle_favorite)
    }

    /// Flip `is_rsvped` on the event with this id, moving its attendee counter
    /// up on RSVP and down (floored at zero) on cancel.
    /// Unknown ids return an identical catalog.
    pub fn toggle_rsvp(&self, id: &str) -> Catalog {
        self.with_event(id, Event::toggle_rsvp)
    }

    fn with_event(&self, id: &str, update: impl FnOnce(&mut Event)) -> Catalog {
        let mut next = self.clone();
        if let Some(event) = next.events.iter_mut().find(|e| e.id == id) {
            update(event);
        }
        next
    }
}

impl TryFrom<Vec<Event>> for Catalog {
    type Error = EventlyError;

    fn try_from(events: Vec<Event>) -> Result<Self, Self::Error> {
        if let Some(dup) = first_duplicate_id(&events) {
            return Err(EventlyError::DuplicateEventId(dup.to_string()));
        }
        if let Some(event) = events.iter().find(|e| e.price < 0.0 || e.price.is_nan()) {
            return Err(EventlyError::NegativePrice {
                id: event.id.clone(),
                price: event.price,
            });
        }
        Ok(Catalog { events })
    }
}

fn first_duplicate_id(events: &[Event]) -> Option<&str> {
    let mut seen = HashSet::new();
    events
        .iter()
        .map(|e| e.id.as_str())
        .find(|id| !seen.insert(*id))
}

impl From<Catalog> for Vec<Event> {
    fn from(catalog: Catalog) -> Self {
        catalog.events
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}
