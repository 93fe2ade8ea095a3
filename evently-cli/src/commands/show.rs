use anyhow::Result;
use evently_core::session::EventSession;
use evently_core::store::KeyValueStore;
use owo_colors::OwoColorize;

use crate::render::{Render, render_attendance_bar, render_price};

const BAR_WIDTH: usize = 30;

pub fn run<S: KeyValueStore>(session: &EventSession<S>, id: &str) -> Result<()> {
    let Some(event) = session.catalog().find(id) else {
        anyhow::bail!("Event '{}' not found", id);
    };

    println!("{}  {}", event.title.bold(), event.category.render());
    println!(
        "  {} at {}",
        event.date.format("%A, %B %-d, %Y"),
        event.time.format("%-I:%M %p")
    );
    println!("  {}", event.location.name);
    println!("  {}", event.location.address.dimmed());
    println!("  {}", render_price(event));
    println!();
    println!(
        "  {} of {} attending ({} spots left)",
        event.current_attendees, event.max_attendees, event.spots_left()
    );
    println!("  {}", render_attendance_bar(event, BAR_WIDTH));
    println!();
    println!("{}", event.description);
    println!();
    println!("  {} {}", "Organized by".dimmed(), event.organizer.name);
    println!("  {} {}", "Tags:".dimmed(), event.tags.join(", "));

    let mut status = Vec::new();
    if event.is_rsvped {
        status.push("✓ Going".green().to_string());
    }
    if event.is_favorite {
        status.push("♥ Favorite".red().to_string());
    }
    if !status.is_empty() {
        println!();
        println!("  {}", status.join("  "));
    }

    Ok(())
}
