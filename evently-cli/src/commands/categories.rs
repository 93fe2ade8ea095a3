use anyhow::Result;
use chrono::NaiveDate;
use evently_core::category::CATEGORIES;
use evently_core::query::CatalogStats;
use evently_core::session::EventSession;
use evently_core::store::KeyValueStore;
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run<S: KeyValueStore>(session: &EventSession<S>, today: NaiveDate) -> Result<()> {
    let stats = CatalogStats::compute(session.catalog(), today);

    println!("{:<16} {}", "all".bold(), stats.total);
    for descriptor in CATEGORIES.iter() {
        println!(
            "{:<16} {}",
            descriptor.key.key(),
            format!("{} ({})", descriptor.render(), stats.count_for(descriptor.key))
        );
    }

    println!();
    println!(
        "{}",
        format!(
            "{} upcoming · {} free · {} paid · {} featured",
            stats.upcoming, stats.free, stats.paid, stats.featured
        )
        .dimmed()
    );

    Ok(())
}
