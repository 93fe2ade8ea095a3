//! Month grid for the calendar view.
//!
//! A grid is always six full weeks (42 days) starting on the Sunday on or
//! before the first of the month, so leading and trailing cells can belong
//! to the neighbouring months.

use chrono::{Datelike, Days, Months, NaiveDate};

use crate::catalog::Catalog;
use crate::event::Event;
use crate::query;

pub const DAYS_PER_WEEK: usize = 7;
pub const WEEKS_PER_GRID: usize = 6;
pub const GRID_CELLS: usize = DAYS_PER_WEEK * WEEKS_PER_GRID;

/// Column headers, Sunday first.
pub const WEEKDAY_LABELS: [&str; DAYS_PER_WEEK] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarCell {
    pub date: NaiveDate,
    pub is_current_month: bool,
    pub is_today: bool,
    pub event_count: usize,
}

#[derive(Debug, Clone)]
pub struct MonthGrid {
    reference: NaiveDate,
    cells: Vec<CalendarCell>,
}

impl MonthGrid {
    pub fn build(reference: NaiveDate, today: NaiveDate, catalog: &Catalog) -> Self {
        let cells = grid_start(reference)
            .iter_days()
            .take(GRID_CELLS)
            .map(|date| CalendarCell {
                date,
                is_current_month: same_month(date, reference),
                is_today: date == today,
                event_count: query::for_date(catalog, date).len(),
            })
            .collect();

        MonthGrid { reference, cells }
    }

    pub fn reference(&self) -> NaiveDate {
        self.reference
    }

    pub fn cells(&self) -> &[CalendarCell] {
        &self.cells
    }

    /// The grid as six rows of seven days.
    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarCell]> {
        self.cells.chunks(DAYS_PER_WEEK)
    }

    /// e.g. "March 2025"
    pub fn title(&self) -> String {
        self.reference.format("%B %Y").to_string()
    }

    pub fn cell(&self, date: NaiveDate) -> Option<&CalendarCell> {
        self.cells.iter().find(|c| c.date == date)
    }
}

/// First cell of the grid for the month containing `reference`.
pub fn grid_start(reference: NaiveDate) -> NaiveDate {
    let first_of_month = reference - Days::new(u64::from(reference.day0()));
    let back = first_of_month.weekday().num_days_from_sunday();
    first_of_month - Days::new(u64::from(back))
}

/// Same day one month earlier; days past the end of the shorter month clamp
/// to its last day (Mar 31 -> Feb 28).
pub fn previous_month(date: NaiveDate) -> NaiveDate {
    date.checked_sub_months(Months::new(1)).unwrap_or(date)
}

/// Same day one month later; days past the end of the shorter month clamp
/// to its last day (Jan 31 -> Feb 28).
pub fn next_month(date: NaiveDate) -> NaiveDate {
    date.checked_add_months(Months::new(1)).unwrap_or(date)
}

/// Events on a selected day.
pub fn events_on(catalog: &Catalog, date: NaiveDate) -> Vec<&Event> {
    query::for_date(catalog, date)
}

fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use chrono::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_grid_shape_for_every_month() {
        let catalog = Catalog::default();
        for year in [2024, 2025, 2026] {
            for month in 1..=12 {
                let reference = date(year, month, 15);
                let grid = MonthGrid::build(reference, date(2025, 1, 1), &catalog);

                assert_eq!(grid.cells().len(), GRID_CELLS);
                assert_eq!(grid.cells()[0].date.weekday(), Weekday::Sun);
                assert_eq!(grid.weeks().count(), WEEKS_PER_GRID);

                let in_month = grid.cells().iter().filter(|c| c.is_current_month).count();
                let days_in_month = next_month(date(year, month, 1))
                    .signed_duration_since(date(year, month, 1))
                    .num_days() as usize;
                assert_eq!(in_month, days_in_month);

                for cell in grid.cells() {
                    assert_eq!(cell.is_current_month, cell.date.month() == month);
                }
            }
        }
    }

    #[test]
    fn test_cells_are_consecutive_days() {
        let grid = MonthGrid::build(date(2025, 3, 1), date(2025, 3, 1), &Catalog::default());
        for pair in grid.cells().windows(2) {
            assert_eq!(pair[1].date, pair[0].date.succ_opt().unwrap());
        }
    }

    #[test]
    fn test_grid_start_when_month_begins_on_sunday() {
        // June 1st 2025 is a Sunday
        assert_eq!(grid_start(date(2025, 6, 20)), date(2025, 6, 1));
    }

    #[test]
    fn test_grid_start_walks_back_into_previous_month() {
        // March 1st 2025 is a Saturday
        assert_eq!(grid_start(date(2025, 3, 31)), date(2025, 2, 23));
    }

    #[test]
    fn test_today_and_event_counts() {
        let catalog = seed::catalog();
        let grid = MonthGrid::build(date(2025, 3, 1), date(2025, 3, 5), &catalog);

        let today: Vec<_> = grid.cells().iter().filter(|c| c.is_today).collect();
        assert_eq!(today.len(), 1);
        assert_eq!(today[0].date, date(2025, 3, 5));

        assert_eq!(grid.cell(date(2025, 3, 5)).unwrap().event_count, 1);
        assert_eq!(grid.cell(date(2025, 3, 10)).unwrap().event_count, 1);
        assert_eq!(grid.cell(date(2025, 3, 6)).unwrap().event_count, 0);
        // Leading cell from February still reports its events
        let feb = grid.cell(date(2025, 2, 28)).unwrap();
        assert!(!feb.is_current_month);
        assert_eq!(feb.event_count, 1);
    }

    #[test]
    fn test_today_outside_grid() {
        let grid = MonthGrid::build(date(2025, 3, 1), date(2030, 1, 1), &Catalog::default());
        assert!(grid.cells().iter().all(|c| !c.is_today));
    }

    #[test]
    fn test_title() {
        let grid = MonthGrid::build(date(2025, 3, 18), date(2025, 3, 1), &Catalog::default());
        assert_eq!(grid.title(), "March 2025");
    }

    #[test]
    fn test_month_navigation_clamps_day() {
        assert_eq!(next_month(date(2025, 1, 31)), date(2025, 2, 28));
        assert_eq!(next_month(date(2024, 1, 31)), date(2024, 2, 29));
        assert_eq!(previous_month(date(2025, 3, 31)), date(2025, 2, 28));
        assert_eq!(next_month(date(2025, 12, 15)), date(2026, 1, 15));
        assert_eq!(previous_month(date(2025, 1, 15)), date(2024, 12, 15));
    }

    #[test]
    fn test_events_on_selected_day() {
        let catalog = seed::catalog();
        let events = events_on(&catalog, date(2025, 4, 20));
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, "5");
    }
}
