use anyhow::Result;
use chrono::NaiveDate;
use evently_core::session::EventSession;
use evently_core::store::KeyValueStore;
use evently_core::user::ProfileTab;
use owo_colors::OwoColorize;

use crate::render::{Render, render_event_list};

pub fn run<S: KeyValueStore>(
    session: &EventSession<S>,
    tab: ProfileTab,
    today: NaiveDate,
) -> Result<()> {
    let catalog = session.catalog();
    let profile = session.profile();
    let summary = profile.summary(catalog, today);

    println!("{}", profile.name.bold());
    println!("{}", profile.email.dimmed());
    println!("{}", profile.bio);
    println!();
    println!(
        "  {} Upcoming   {} Favorites   {} Attended",
        summary.rsvped.bold(),
        summary.favorites.bold(),
        summary.lifetime_attended.bold()
    );

    let interests: Vec<String> = profile.interests.iter().map(|c| c.render()).collect();
    println!("  Interests: {}", interests.join(", "));
    println!();

    let tabs = [
        (ProfileTab::Rsvp, summary.rsvped),
        (ProfileTab::Favorites, summary.favorites),
        (ProfileTab::Attended, summary.attended),
    ];
    let header: Vec<String> = tabs
        .iter()
        .map(|(t, count)| {
            let label = format!("{} ({})", t, count);
            if *t == tab {
                label.bold().underline().to_string()
            } else {
                label.dimmed().to_string()
            }
        })
        .collect();
    println!("{}", header.join("   "));

    let events = profile.events_for(tab, catalog, today);
    let empty = match tab {
        ProfileTab::Rsvp => "No RSVP'd events yet",
        ProfileTab::Favorites => "No favorite events yet",
        ProfileTab::Attended => "No attended events yet",
    };
    println!("{}", render_event_list(&events, empty));

    Ok(())
}
