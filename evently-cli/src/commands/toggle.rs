use anyhow::Result;
use evently_core::session::{EventSession, ToggleOutcome};
use evently_core::store::KeyValueStore;
use owo_colors::OwoColorize;

pub fn favorite<S: KeyValueStore>(session: &mut EventSession<S>, id: &str) -> Result<()> {
    match session.toggle_favorite(id) {
        ToggleOutcome::Toggled { active, persisted } => {
            let message = if active {
                "Added to favorites"
            } else {
                "Removed from favorites"
            };
            println!("{} {}", "♥".red(), message);
            if !persisted {
                println!("{}", "(could not save, change is not stored)".yellow());
            }
            Ok(())
        }
        ToggleOutcome::RolledBack => {
            anyhow::bail!("Could not update favorite for event '{}'", id)
        }
        ToggleOutcome::NotFound => anyhow::bail!("Event '{}' not found", id),
    }
}

pub fn rsvp<S: KeyValueStore>(session: &mut EventSession<S>, id: &str) -> Result<()> {
    match session.toggle_rsvp(id) {
        ToggleOutcome::Toggled { active, .. } => {
            let attendees = session
                .catalog()
                .find(id)
                .map(|e| e.current_attendees)
                .unwrap_or_default();

            if active {
                println!("{}", "RSVP Confirmed!".green().bold());
                println!("You have successfully RSVP'd to this event.");
            } else {
                println!("{}", "RSVP Cancelled".yellow().bold());
                println!("Your RSVP has been cancelled.");
            }
            println!("{}", format!("{} attending", attendees).dimmed());
            Ok(())
        }
        ToggleOutcome::RolledBack => {
            anyhow::bail!("Could not save your RSVP for event '{}', nothing was changed", id)
        }
        ToggleOutcome::NotFound => anyhow::bail!("Event '{}' not found", id),
    }
}
