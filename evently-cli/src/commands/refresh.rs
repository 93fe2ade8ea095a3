use std::time::Duration;

use anyhow::Result;
use evently_core::session::EventSession;
use evently_core::store::KeyValueStore;
use owo_colors::OwoColorize;

use crate::render::pluralize;

pub async fn run<S: KeyValueStore>(
    session: &mut EventSession<S>,
    delay: Duration,
    reset: bool,
) -> Result<()> {
    if reset {
        session.reset()?;
        println!("{}", "Restored the built-in events".green());
        return Ok(());
    }

    println!("{}", "Refreshing...".dimmed());
    tokio::time::sleep(delay).await;
    session.reload();

    let count = session.catalog().len();
    println!("{} {} loaded", count, pluralize("event", count));
    Ok(())
}
