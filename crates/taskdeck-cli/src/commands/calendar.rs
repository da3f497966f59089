//! Month calendar view for CLI.
//!
//! Renders the 42-cell grid; current-month days carrying a task
//! deadline are marked with `*`.

use chrono::{Datelike, Utc};
use taskdeck_core::{calendar_days, tasks_for_date, TaskStore, DAY_NAMES, MONTH_NAMES};

pub fn run(year: Option<i32>, month: Option<u32>) -> Result<(), Box<dyn std::error::Error>> {
    let now = Utc::now();
    let year = year.unwrap_or_else(|| now.year());
    let month = month.unwrap_or_else(|| now.month0());
    let store = TaskStore::load()?;

    let display_year = year + (month / 12) as i32;
    let display_month = (month % 12) as usize;
    println!("{} {display_year}", MONTH_NAMES[display_month]);
    println!(
        "{}",
        DAY_NAMES
            .iter()
            .map(|d| format!("{d:>4}"))
            .collect::<String>()
    );

    let days = calendar_days(year, month);
    for week in days.chunks(7) {
        let mut line = String::new();
        for cell in week {
            let marker = if cell.current_month
                && !tasks_for_date(store.tasks(), year, month, cell.day).is_empty()
            {
                '*'
            } else if cell.current_month {
                ' '
            } else {
                '.'
            };
            line.push_str(&format!("{:>3}{marker}", cell.day));
        }
        println!("{line}");
    }
    Ok(())
}
