//! TUI rendering traits for evently types.
//!
//! This module provides extension traits that add colored terminal rendering
//! to evently-core types using owo_colors.

use chrono::{Datelike, NaiveDate};
use evently_core::calendar::{CalendarCell, MonthGrid, WEEKDAY_LABELS};
use evently_core::category::{Category, CategoryDescriptor};
use evently_core::event::Event;
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for CategoryDescriptor {
    fn render(&self) -> String {
        match self.rgb() {
            Some((r, g, b)) => self.label.truecolor(r, g, b).to_string(),
            None => self.label.to_string(),
        }
    }
}

impl Render for Category {
    fn render(&self) -> String {
        self.descriptor().render()
    }
}

/// One-line event card: date, title, venue, attendance, price and badges.
impl Render for Event {
    fn render(&self) -> String {
        let heart = if self.is_favorite {
            "♥".red().to_string()
        } else {
            "♡".dimmed().to_string()
        };

        let mut line = format!(
            "{} {} {}  {} {}",
            heart,
            format!("[{}]", self.id).dimmed(),
            self.date.format("%b %-d").bold(),
            self.title.bold(),
            format!("({})", self.category.render()),
        );

        line.push_str(&format!(
            "\n      {} · {}/{} · {}",
            self.location.name,
            self.current_attendees,
            self.max_attendees,
            render_price(self)
        ));

        if self.is_rsvped {
            line.push_str(&format!(" · {}", "✓ Going".green()));
        }

        line
    }
}

pub fn render_price(event: &Event) -> String {
    if event.is_free() {
        "Free".green().to_string()
    } else {
        format!("${}", event.price)
    }
}

/// Render a list of events, or a dimmed placeholder when it is empty.
pub fn render_event_list(events: &[&Event], empty_message: &str) -> String {
    if events.is_empty() {
        return format!("  {}", empty_message.dimmed());
    }

    events
        .iter()
        .map(|e| format!("  {}", e.render()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Attendance bar for the detail view, e.g. `[#######-------------] 35%`
pub fn render_attendance_bar(event: &Event, width: usize) -> String {
    let percent = usize::from(event.attendance_percent());
    let filled = percent * width / 100;
    format!(
        "[{}{}] {}%",
        "#".repeat(filled).magenta(),
        "-".repeat(width - filled).dimmed(),
        percent
    )
}

fn render_cell(cell: &CalendarCell, selected: Option<NaiveDate>) -> String {
    let day = format!("{:>2}", cell.date.day());
    let marker = if cell.event_count > 0 { "•" } else { " " };
    let text = format!("{}{}", day, marker);

    if Some(cell.date) == selected {
        text.reversed().to_string()
    } else if cell.is_today {
        text.magenta().bold().to_string()
    } else if !cell.is_current_month {
        text.dimmed().to_string()
    } else {
        text
    }
}

/// Calendar grid with a title row and weekday header.
pub fn render_month(grid: &MonthGrid, selected: Option<NaiveDate>) -> String {
    let mut lines = vec![format!("{:^27}", grid.title()).bold().to_string()];
    lines.push(
        WEEKDAY_LABELS
            .iter()
            .map(|d| format!("{:>3}", &d[..2]))
            .collect::<Vec<_>>()
            .join(" ")
            .dimmed()
            .to_string(),
    );

    for week in grid.weeks() {
        lines.push(
            week.iter()
                .map(|cell| render_cell(cell, selected))
                .collect::<Vec<_>>()
                .join(" "),
        );
    }

    lines.join("\n")
}

/// Simple pluralization helper
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}
