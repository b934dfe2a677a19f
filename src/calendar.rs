// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Month-grid computation for the calendar view.
//!
//! The grid is always 6 weeks (42 cells) regardless of how many weeks the
//! month actually spans, so the layout height is stable across months;
//! short months simply carry a few more adjacent-month padding cells.

use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Fixed grid size: 6 rows x 7 columns.
pub const GRID_LEN: usize = 42;

/// One cell of the month grid, tagged by whether it belongs to the
/// displayed month or an adjacent padding month. Recomputed on every
/// month change; carries no identity of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarCell {
    pub date: NaiveDate,
    pub in_displayed_month: bool,
}

/// Build the 42-day grid for the month containing `month_anchor`.
///
/// The first cell is the `first_weekday`-aligned start of the week
/// containing the 1st of the month, so columns line up exactly with the
/// weekday headers; the leading cells are trailing days of the previous
/// month.
pub fn build_grid(month_anchor: NaiveDate, first_weekday: Weekday) -> [NaiveDate; GRID_LEN] {
    let first_of_month = month_anchor
        .with_day(1)
        .expect("every month has a first day");

    // Weekday index of the 1st under the first_weekday convention
    // (0 = first_weekday, ascending), which is also how many cells of
    // previous-month padding the grid needs.
    let offset = (first_of_month.weekday().num_days_from_monday() + 7
        - first_weekday.num_days_from_monday())
        % 7;
    let grid_start = first_of_month - Days::new(u64::from(offset));

    core::array::from_fn(|i| grid_start + Days::new(i as u64))
}

/// Build the grid with each cell tagged against the anchor's month/year.
pub fn build_cells(month_anchor: NaiveDate, first_weekday: Weekday) -> [CalendarCell; GRID_LEN] {
    build_grid(month_anchor, first_weekday).map(|date| CalendarCell {
        date,
        in_displayed_month: date.month() == month_anchor.month()
            && date.year() == month_anchor.year(),
    })
}
