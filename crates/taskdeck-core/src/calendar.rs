//! Month-grid construction and per-date task lookup.
//!
//! Months are 0-based (0 = January) throughout this module, matching
//! the grid's rendering contract; out-of-range months carry into the
//! following years.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::task::Task;

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// 6 rows x 7 columns.
pub const GRID_CELLS: usize = 42;

/// One cell of the month grid. Ephemeral; identity is its position in
/// the returned sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    pub day: u32,
    pub current_month: bool,
}

fn normalize(year: i32, month: u32) -> (i32, u32) {
    (year + (month / 12) as i32, month % 12)
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 11 {
        (year + 1, 0)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month + 1, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(30)
}

/// Build the 42-cell grid for a month.
///
/// Leading cells show the tail of the previous month, trailing cells
/// count up from 1 into the next month; both are marked
/// `current_month: false`. Weeks start on Sunday.
pub fn calendar_days(year: i32, month: u32) -> Vec<CalendarDay> {
    let (year, month) = normalize(year, month);
    let start_pad = NaiveDate::from_ymd_opt(year, month + 1, 1)
        .map(|d| d.weekday().num_days_from_sunday())
        .unwrap_or(0);
    let total_days = days_in_month(year, month);
    let (prev_year, prev_month) = if month == 0 {
        (year - 1, 11)
    } else {
        (year, month - 1)
    };
    let prev_last_day = days_in_month(prev_year, prev_month);

    let mut days = Vec::with_capacity(GRID_CELLS);
    for offset in (0..start_pad).rev() {
        days.push(CalendarDay {
            day: prev_last_day - offset,
            current_month: false,
        });
    }
    for day in 1..=total_days {
        days.push(CalendarDay {
            day,
            current_month: true,
        });
    }
    let remaining = (GRID_CELLS - days.len()) as u32;
    for day in 1..=remaining {
        days.push(CalendarDay {
            day,
            current_month: false,
        });
    }
    days
}

/// Tasks whose deadline string equals the zero-padded `YYYY-MM-DD` for
/// the given date. Month is 0-based. Deadlines carrying a time suffix
/// never match a date-only query.
pub fn tasks_for_date(tasks: &[Task], year: i32, month: u32, day: u32) -> Vec<&Task> {
    let date_str = format!("{}-{:02}-{:02}", year, month + 1, day);
    tasks
        .iter()
        .filter(|task| task.deadline.as_deref() == Some(date_str.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use proptest::prelude::*;

    fn make_task(deadline: Option<&str>) -> Task {
        Task {
            id: "t-1".to_string(),
            name: "Test task".to_string(),
            project: "other".to_string(),
            importance: 3,
            length: 3,
            difficulty: 3,
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap(),
            deadline: deadline.map(String::from),
        }
    }

    #[test]
    fn february_leap_year_layout() {
        // Feb 2024: 29 days, starts on a Thursday.
        let days = calendar_days(2024, 1);
        assert_eq!(days.len(), GRID_CELLS);

        let leading: Vec<_> = days.iter().take_while(|d| !d.current_month).collect();
        assert_eq!(leading.len(), 4);
        // Tail of January, in ascending order.
        assert_eq!(
            leading.iter().map(|d| d.day).collect::<Vec<_>>(),
            vec![28, 29, 30, 31]
        );

        let current = days.iter().filter(|d| d.current_month).count();
        assert_eq!(current, 29);

        let trailing: Vec<_> = days.iter().skip(4 + 29).collect();
        assert_eq!(trailing.len(), 9);
        assert_eq!(trailing[0].day, 1);
        assert_eq!(trailing[8].day, 9);
        assert!(trailing.iter().all(|d| !d.current_month));
    }

    #[test]
    fn month_overflow_carries_into_next_year() {
        assert_eq!(calendar_days(2024, 12), calendar_days(2025, 0));
    }

    #[test]
    fn current_month_cells_match_month_length() {
        let june = calendar_days(2024, 5);
        assert_eq!(june.iter().filter(|d| d.current_month).count(), 30);
        let february_common = calendar_days(2023, 1);
        assert_eq!(
            february_common.iter().filter(|d| d.current_month).count(),
            28
        );
    }

    proptest! {
        #[test]
        fn grid_is_always_42_cells(year in 1600i32..=3000, month in 0u32..12) {
            prop_assert_eq!(calendar_days(year, month).len(), GRID_CELLS);
        }

        #[test]
        fn current_cells_are_contiguous(year in 1600i32..=3000, month in 0u32..12) {
            let days = calendar_days(year, month);
            let first = days.iter().position(|d| d.current_month).unwrap();
            let last = days.iter().rposition(|d| d.current_month).unwrap();
            prop_assert!(days[first..=last].iter().all(|d| d.current_month));
            prop_assert_eq!(days[first].day, 1);
        }
    }

    #[test]
    fn tasks_for_date_uses_exact_string_equality() {
        let tasks = vec![
            make_task(Some("2024-03-15")),
            make_task(Some("2024-03-15T09:00")),
            make_task(Some("2024-03-16")),
            make_task(None),
        ];

        let matches = tasks_for_date(&tasks, 2024, 2, 15);
        // The date-time deadline does not match the date-only query.
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].deadline.as_deref(), Some("2024-03-15"));
    }

    #[test]
    fn tasks_for_date_zero_pads() {
        let tasks = vec![make_task(Some("2024-04-05"))];
        assert_eq!(tasks_for_date(&tasks, 2024, 3, 5).len(), 1);
        assert!(tasks_for_date(&tasks, 2024, 3, 6).is_empty());
    }
}
