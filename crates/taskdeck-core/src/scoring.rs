//! Task priority scoring.
//!
//! Produces a single unitless score per task combining its attributes
//! with time-based urgency. The reference instant is an explicit
//! parameter so results are reproducible without wall-clock mocking.
//!
//! The score is the sum of five terms:
//!
//! - base: `importance * 2 - (length + difficulty) / 3`
//! - age: half a point per week since creation, capped at 2
//! - quick bonus: 1.5 for tasks of length <= 2
//! - easy bonus: 1 for tasks of difficulty <= 2
//! - deadline urgency: tiered by days remaining, amplified by length
//!
//! A deadline string that fails to parse poisons the score with NaN;
//! callers are expected to validate task data up front, and every
//! downstream comparison treats NaN as "not greater".

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::date;
use crate::task::Task;

/// Per-term breakdown of a priority score, for explainability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriorityBreakdown {
    /// `importance * 2 - (length + difficulty) / 3`
    pub base: f64,
    /// Capped linear growth with task age
    pub age_factor: f64,
    /// 1.5 when length <= 2, else 0
    pub quick_bonus: f64,
    /// 1 when difficulty <= 2, else 0
    pub easy_bonus: f64,
    /// Deadline urgency, 0 when no deadline is set
    pub deadline_factor: f64,
    /// Sum of all terms, rounded to one decimal
    pub total: f64,
}

/// Compute the full per-term breakdown for a task at `now`.
pub fn priority_breakdown(task: &Task, now: DateTime<Utc>) -> PriorityBreakdown {
    let days_since_creation = date::days_since(task.created_at, now);
    let age_factor = (days_since_creation / 7.0 * 0.5).min(2.0);
    let quick_bonus = if task.length <= 2 { 1.5 } else { 0.0 };
    let easy_bonus = if task.difficulty <= 2 { 1.0 } else { 0.0 };
    let base = f64::from(task.importance) * 2.0
        - (f64::from(task.length) + f64::from(task.difficulty)) / 3.0;

    let deadline_factor = match task.deadline.as_deref() {
        None => 0.0,
        Some(deadline) => {
            let urgency = match date::days_until(deadline, now) {
                None => f64::NAN,
                Some(d) if d < 0.0 => 5.0,
                Some(d) if d < 7.0 => 4.0 * (1.0 - d / 7.0),
                Some(d) if d < 30.0 => 2.0 * (1.0 - d / 30.0),
                Some(_) => 0.0,
            };
            // Longer tasks get more deadline pressure.
            urgency * (1.0 + f64::from(task.length) / 5.0)
        }
    };

    let total = round_to_tenth(base + age_factor + quick_bonus + easy_bonus + deadline_factor);

    PriorityBreakdown {
        base,
        age_factor,
        quick_bonus,
        easy_bonus,
        deadline_factor,
        total,
    }
}

/// Priority score for a task at `now`, rounded to one decimal.
pub fn priority_score(task: &Task, now: DateTime<Utc>) -> f64 {
    priority_breakdown(task, now).total
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
