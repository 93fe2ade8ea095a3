use anyhow::Result;
use chrono::NaiveDate;
use evently_core::category::CategoryFilter;
use evently_core::query;
use evently_core::session::EventSession;
use evently_core::store::KeyValueStore;
use owo_colors::OwoColorize;

use crate::render::{pluralize, render_event_list};

pub fn run<S: KeyValueStore>(
    session: &EventSession<S>,
    category: CategoryFilter,
    today: NaiveDate,
) -> Result<()> {
    let catalog = session.catalog();

    let upcoming = query::upcoming(catalog, today).len();
    println!(
        "{} {}",
        "Discover Events".bold(),
        format!("({} {} coming up)", upcoming, pluralize("event", upcoming)).dimmed()
    );

    let trending = query::trending(catalog);
    if !trending.is_empty() {
        println!();
        println!("{}", "Trending Now".bold());
        println!("{}", render_event_list(&trending, ""));
    }

    let events = query::by_category(catalog, category);
    println!();
    let heading = match category {
        CategoryFilter::All => "All Events".to_string(),
        CategoryFilter::Only(c) => format!("{} Events", c.label()),
    };
    println!("{}", heading.bold());
    println!(
        "{}",
        render_event_list(&events, "No events found in this category")
    );

    Ok(())
}
