use anyhow::Result;
use chrono::NaiveDate;
use evently_core::calendar::{self, MonthGrid};
use evently_core::query;
use evently_core::session::EventSession;
use evently_core::store::KeyValueStore;
use owo_colors::OwoColorize;

use crate::render::{render_event_list, render_month};

pub fn run<S: KeyValueStore>(
    session: &EventSession<S>,
    reference: NaiveDate,
    selected: Option<NaiveDate>,
    today: NaiveDate,
) -> Result<()> {
    let catalog = session.catalog();
    let grid = MonthGrid::build(reference, today, catalog);

    println!("{}", render_month(&grid, selected));
    println!(
        "{}",
        format!(
            "   prev: --month {}   next: --month {}",
            calendar::previous_month(reference).format("%Y-%m"),
            calendar::next_month(reference).format("%Y-%m")
        )
        .dimmed()
    );

    if let Some(date) = selected {
        let events = calendar::events_on(catalog, date);
        println!();
        println!("{}", format!("Events on {}", date.format("%A, %B %-d")).bold());
        println!("{}", render_event_list(&events, "No events on this day"));
    }

    println!();
    println!("{}", "All Upcoming Events".bold());
    let upcoming = query::upcoming(catalog, today);
    println!("{}", render_event_list(&upcoming, "No upcoming events"));

    Ok(())
}
