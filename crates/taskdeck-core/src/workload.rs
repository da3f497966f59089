//! Aggregate workload analysis over the full task list.
//!
//! Produces a coarse pressure reading with a human-facing message and
//! advice pair. Classification rules form an ordered chain; the first
//! matching rule wins.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::date;
use crate::scoring;
use crate::task::Task;

/// Priority threshold above which a task counts as high-priority.
const HIGH_PRIORITY_THRESHOLD: f64 = 10.0;
/// Days-until-deadline below which a deadline counts as upcoming.
const UPCOMING_DEADLINE_DAYS: f64 = 7.0;

/// Workload level, from lightest to heaviest reading.
///
/// Ordering of the classification chain matters: a very high total
/// workload wins over the high-priority and deadline rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkloadLevel {
    /// No tasks at all
    AllClear,
    /// Total workload above 25
    Overloaded,
    /// Total workload above 15
    Busy,
    /// At least three high-priority tasks and total workload above 10
    ImportantTasks,
    /// At least two deadlines inside the upcoming window
    DeadlineWatch,
    /// Everything else
    Balanced,
}

impl WorkloadLevel {
    /// Headline message for this level.
    pub fn message(&self) -> &'static str {
        match self {
            WorkloadLevel::AllClear => "All clear! \u{1f31f}",
            WorkloadLevel::Overloaded => "Your plate is quite full! \u{1f30a}",
            WorkloadLevel::Busy => "Getting busy! \u{1f331}",
            WorkloadLevel::ImportantTasks => "Some important tasks need attention \u{1f4cb}",
            WorkloadLevel::DeadlineWatch => "Keep an eye on those deadlines \u{23f0}",
            WorkloadLevel::Balanced => "Workload looks balanced! \u{1f4ab}",
        }
    }

    /// Advice accompanying the headline.
    pub fn advice(&self) -> &'static str {
        match self {
            WorkloadLevel::AllClear => "Enjoy your free time, you've earned it!",
            WorkloadLevel::Overloaded => {
                "Consider delegating or rescheduling some tasks. Your well-being comes first."
            }
            WorkloadLevel::Busy => "Be careful about taking on new commitments right now.",
            WorkloadLevel::ImportantTasks => {
                "Focus on high-priority items first, but take breaks between them."
            }
            WorkloadLevel::DeadlineWatch => "Plan your week carefully around these key dates.",
            WorkloadLevel::Balanced => "You're maintaining a good pace. Keep it up!",
        }
    }
}

/// Workload analysis result with detailed breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkloadReport {
    /// Selected level
    pub level: WorkloadLevel,
    /// Aggregate workload score (unrounded)
    pub total_workload: f64,
    /// Tasks whose priority exceeds the high-priority threshold
    pub high_priority_count: usize,
    /// Tasks with a deadline inside the upcoming window, overdue included
    pub upcoming_deadline_count: usize,
    /// Headline message
    pub message: String,
    /// Accompanying advice
    pub advice: String,
    /// Summary string embedding the rounded workload score
    pub workload: String,
}

/// Analyze a task list at `now`.
///
/// Priority is computed once per task; the scorer only depends on the
/// reference instant, so memoizing it per call changes nothing.
pub fn analyze_workload(tasks: &[Task], now: DateTime<Utc>) -> WorkloadReport {
    let mut high_priority_count = 0;
    let mut upcoming_deadline_count = 0;
    let mut total_workload = 0.0;

    for task in tasks {
        let priority = scoring::priority_score(task, now);
        let high_priority = priority > HIGH_PRIORITY_THRESHOLD;
        let upcoming_deadline = task
            .deadline
            .as_deref()
            .and_then(|d| date::days_until(d, now))
            .is_some_and(|d| d < UPCOMING_DEADLINE_DAYS);

        if high_priority {
            high_priority_count += 1;
        }
        if upcoming_deadline {
            upcoming_deadline_count += 1;
        }

        // Length has more impact than the other attributes.
        let length_weight = f64::from(task.length) * 0.8;
        let priority_bonus = if high_priority { 1.5 } else { 1.0 };
        let deadline_bonus = if upcoming_deadline { 1.3 } else { 1.0 };
        total_workload += length_weight * priority_bonus * deadline_bonus;
    }

    let level = if tasks.is_empty() {
        WorkloadLevel::AllClear
    } else if total_workload > 25.0 {
        WorkloadLevel::Overloaded
    } else if total_workload > 15.0 {
        WorkloadLevel::Busy
    } else if high_priority_count >= 3 && total_workload > 10.0 {
        WorkloadLevel::ImportantTasks
    } else if upcoming_deadline_count >= 2 {
        WorkloadLevel::DeadlineWatch
    } else {
        WorkloadLevel::Balanced
    };

    WorkloadReport {
        level,
        total_workload,
        high_priority_count,
        upcoming_deadline_count,
        message: level.message().to_string(),
        advice: level.advice().to_string(),
        workload: format!(
            "Your workload score is {} It's okay to take breaks",
            total_workload.round() as i64
        ),
    }
}
