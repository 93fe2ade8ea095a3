use anyhow::Result;
use evently_core::query::EventQuery;
use evently_core::session::EventSession;
use evently_core::store::KeyValueStore;
use owo_colors::OwoColorize;

use crate::render::{pluralize, render_event_list};

pub fn run<S: KeyValueStore>(session: &EventSession<S>, query: &EventQuery) -> Result<()> {
    let results = query.run(session.catalog());

    let mut filters = Vec::new();
    if !query.text.is_empty() {
        filters.push(format!("\"{}\"", query.text));
    }
    filters.push(format!("category: {}", query.category));
    filters.push(format!("price: {}", query.price));

    println!(
        "{} {}",
        format!("{} {} found", results.len(), pluralize("event", results.len())).bold(),
        format!("({})", filters.join(", ")).dimmed()
    );
    println!(
        "{}",
        render_event_list(&results, "Try adjusting your search or filters")
    );

    Ok(())
}
