//! Catalog queries shared by every view.
//!
//! All functions here are pure: they take a catalog snapshot and return the
//! matching events in catalog order unless stated otherwise.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::catalog::Catalog;
use crate::category::{Category, CategoryFilter};
use crate::constants::{FEATURED_ATTENDEE_THRESHOLD, TRENDING_LIMIT};
use crate::error::EventlyError;
use crate::event::Event;

/// Price filter from the search view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriceTier {
    #[default]
    All,
    Free,
    Paid,
}

impl PriceTier {
    pub fn matches(self, event: &Event) -> bool {
        match self {
            PriceTier::All => true,
            PriceTier::Free => event.price == 0.0,
            PriceTier::Paid => event.price > 0.0,
        }
    }
}

impl fmt::Display for PriceTier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            PriceTier::All => "all",
            PriceTier::Free => "free",
            PriceTier::Paid => "paid",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for PriceTier {
    type Err = EventlyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(PriceTier::All),
            "free" => Ok(PriceTier::Free),
            "paid" => Ok(PriceTier::Paid),
            _ => Err(EventlyError::UnknownPriceTier(s.to_string())),
        }
    }
}

/// Case-insensitive substring match against title, description, location
/// name and tags. An empty query matches every event.
pub fn matches_text(event: &Event, query: &str) -> bool {
    let needle = query.to_lowercase();
    matches_lowercase(event, &needle)
}

fn matches_lowercase(event: &Event, needle: &str) -> bool {
    needle.is_empty()
        || event
            .searchable_fields()
            .any(|field| field.to_lowercase().contains(needle))
}

pub fn by_category(catalog: &Catalog, filter: CategoryFilter) -> Vec<&Event> {
    catalog.iter().filter(|e| filter.matches(e.category)).collect()
}

pub fn search<'a>(catalog: &'a Catalog, query: &str) -> Vec<&'a Event> {
    let needle = query.to_lowercase();
    catalog
        .iter()
        .filter(|e| matches_lowercase(e, &needle))
        .collect()
}

pub fn by_price_tier(catalog: &Catalog, tier: PriceTier) -> Vec<&Event> {
    catalog.iter().filter(|e| tier.matches(e)).collect()
}

/// Events on or after `today`, earliest first. Events sharing a date keep
/// their catalog order.
pub fn upcoming(catalog: &Catalog, today: NaiveDate) -> Vec<&Event> {
    let mut events: Vec<&Event> = catalog.iter().filter(|e| e.date >= today).collect();
    events.sort_by_key(|e| e.date);
    events
}

/// Events drawing more than [`FEATURED_ATTENDEE_THRESHOLD`] attendees.
pub fn featured(catalog: &Catalog) -> Vec<&Event> {
    catalog
        .iter()
        .filter(|e| e.current_attendees > FEATURED_ATTENDEE_THRESHOLD)
        .collect()
}

/// The first few featured events, as shown in the home view.
pub fn trending(catalog: &Catalog) -> Vec<&Event> {
    let mut events = featured(catalog);
    events.truncate(TRENDING_LIMIT);
    events
}

pub fn for_date(catalog: &Catalog, date: NaiveDate) -> Vec<&Event> {
    catalog.iter().filter(|e| e.date == date).collect()
}

/// Past events (strictly before `today`) the viewer RSVP'd to.
pub fn attended<'a>(
    catalog: &'a Catalog,
    rsvped_ids: &BTreeSet<String>,
    today: NaiveDate,
) -> Vec<&'a Event> {
    catalog
        .iter()
        .filter(|e| e.date < today && rsvped_ids.contains(&e.id))
        .collect()
}

pub fn rsvped<'a>(catalog: &'a Catalog, rsvped_ids: &BTreeSet<String>) -> Vec<&'a Event> {
    catalog.iter().filter(|e| rsvped_ids.contains(&e.id)).collect()
}

pub fn favorites<'a>(catalog: &'a Catalog, favorite_ids: &BTreeSet<String>) -> Vec<&'a Event> {
    catalog
        .iter()
        .filter(|e| favorite_ids.contains(&e.id))
        .collect()
}

/// Compound filter used by the search view: text AND category AND price.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventQuery {
    pub text: String,
    pub category: CategoryFilter,
    pub price: PriceTier,
}

impl EventQuery {
    pub fn new(text: impl Into<String>) -> Self {
        EventQuery {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    pub fn with_price(mut self, price: PriceTier) -> Self {
        self.price = price;
        self
    }

    pub fn matches(&self, event: &Event) -> bool {
        matches_text(event, &self.text)
            && self.category.matches(event.category)
            && self.price.matches(event)
    }

    pub fn run<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Event> {
        let needle = self.text.to_lowercase();
        catalog
            .iter()
            .filter(|e| {
                matches_lowercase(e, &needle)
                    && self.category.matches(e.category)
                    && self.price.matches(e)
            })
            .collect()
    }
}

/// Aggregate counts over a catalog snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogStats {
    pub total: usize,
    pub upcoming: usize,
    pub featured: usize,
    pub free: usize,
    pub paid: usize,
    pub rsvped: usize,
    pub favorites: usize,
    pub per_category: BTreeMap<Category, usize>,
}

impl CatalogStats {
    pub fn compute(catalog: &Catalog, today: NaiveDate) -> Self {
        let mut per_category = BTreeMap::new();
        for event in catalog {
            *per_category.entry(event.category).or_insert(0) += 1;
        }

        CatalogStats {
            total: catalog.len(),
            upcoming: catalog.iter().filter(|e| e.date >= today).count(),
            featured: featured(catalog).len(),
            free: by_price_tier(catalog, PriceTier::Free).len(),
            paid: by_price_tier(catalog, PriceTier::Paid).len(),
            rsvped: catalog.iter().filter(|e| e.is_rsvped).count(),
            favorites: catalog.iter().filter(|e| e.is_favorite).count(),
            per_category,
        }
    }

    pub fn count_for(&self, category: Category) -> usize {
        self.per_category.get(&category).copied().unwrap_or(0)
    }
}
