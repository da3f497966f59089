//! iCalendar (RFC 5545 subset) export of deadline-bearing tasks.
//!
//! The builder is pure text generation; delivering the document (file
//! download, notice when nothing is exportable) belongs to the caller.
//! Date-only deadlines become all-day events, date-time deadlines become
//! timed events with a fixed one-hour duration. Naive deadline values
//! are interpreted as UTC.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};
use tracing::debug;

use crate::date;
use crate::error::ExportError;
use crate::scoring;
use crate::storage::ProjectRegistry;
use crate::task::Task;

pub const PROD_ID: &str = "-//TaskManager//EN";
pub const CALENDAR_NAME: &str = "Task Manager";

/// ICS-mandated line terminator.
const CRLF: &str = "\r\n";

fn format_ics_date(day: NaiveDate) -> String {
    day.format("%Y%m%d").to_string()
}

/// Basic-format UTC timestamp, `YYYYMMDDTHHMMSSZ`.
fn format_ics_datetime(instant: NaiveDateTime) -> String {
    format!("{}Z", instant.format("%Y%m%dT%H%M%S"))
}

/// Build the calendar document for all deadline-bearing tasks.
///
/// Returns [`ExportError::NoEligibleTasks`] when no task has a deadline
/// (callers surface that as a notice, not a failure) and
/// [`ExportError::InvalidDeadline`] when a deadline string does not
/// parse; task data is expected to be validated before it gets here.
pub fn build_ics(
    tasks: &[Task],
    registry: &ProjectRegistry,
    now: DateTime<Utc>,
) -> Result<String, ExportError> {
    let eligible: Vec<&Task> = tasks.iter().filter(|t| t.has_deadline()).collect();
    if eligible.is_empty() {
        return Err(ExportError::NoEligibleTasks);
    }

    let mut lines: Vec<String> = vec![
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        format!("PRODID:{PROD_ID}"),
        "CALSCALE:GREGORIAN".to_string(),
        "METHOD:PUBLISH".to_string(),
        format!("X-WR-CALNAME:{CALENDAR_NAME}"),
    ];

    let stamp = format_ics_datetime(now.naive_utc());
    for task in &eligible {
        let Some(deadline) = task.deadline.as_deref() else {
            continue;
        };
        let parsed = date::parse_deadline(deadline).ok_or_else(|| ExportError::InvalidDeadline {
            task: task.name.clone(),
            value: deadline.to_string(),
        })?;
        let project_name = registry
            .get(&task.project)
            .map(|p| p.name.as_str())
            .unwrap_or("Other");

        lines.push("BEGIN:VEVENT".to_string());
        lines.push(format!("UID:task-{}@taskmanager", task.id));
        lines.push(format!("DTSTAMP:{stamp}"));

        if deadline.contains('T') {
            let end = parsed + Duration::hours(1);
            lines.push(format!("DTSTART:{}", format_ics_datetime(parsed)));
            lines.push(format!("DTEND:{}", format_ics_datetime(end)));
        } else {
            let start = parsed.date();
            let end = start.succ_opt().unwrap_or(start);
            lines.push(format!("DTSTART;VALUE=DATE:{}", format_ics_date(start)));
            lines.push(format!("DTEND;VALUE=DATE:{}", format_ics_date(end)));
        }

        lines.push(format!("SUMMARY:[{project_name}] {}", task.name));
        lines.push(format!(
            "DESCRIPTION:Importance: {}/5\\nLength: {}/5\\nDifficulty: {}/5\\nPriority Score: {:.1}",
            task.importance,
            task.length,
            task.difficulty,
            scoring::priority_score(task, now)
        ));
        lines.push(format!("CATEGORIES:{project_name}"));
        lines.push("STATUS:NEEDS-ACTION".to_string());
        lines.push("END:VEVENT".to_string());
    }

    lines.push("END:VCALENDAR".to_string());
    debug!(events = eligible.len(), "built calendar document");
    Ok(lines.join(CRLF))
}

/// File name for an export generated at `now`, e.g. `tasks-2024-03-15.ics`.
pub fn export_filename(now: DateTime<Utc>) -> String {
    format!("tasks-{}.ics", now.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Project;
    use chrono::TimeZone;

    fn reference_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 10, 30, 0).unwrap()
    }

    fn make_task(id: &str, project: &str, deadline: Option<&str>) -> Task {
        Task {
            id: id.to_string(),
            name: format!("Task {}", id),
            project: project.to_string(),
            importance: 4,
            length: 2,
            difficulty: 3,
            created_at: reference_now(),
            deadline: deadline.map(String::from),
        }
    }

    fn registry_with_project(key: &str, name: &str) -> ProjectRegistry {
        let mut registry = ProjectRegistry::defaults();
        registry.insert(key, Project::new(name, "#10b981"));
        registry
    }

    #[test]
    fn no_deadlines_is_a_no_op_failure() {
        let registry = ProjectRegistry::defaults();
        let tasks = vec![make_task("1", "other", None)];
        let err = build_ics(&tasks, &registry, reference_now()).unwrap_err();
        assert!(matches!(err, ExportError::NoEligibleTasks));
    }

    #[test]
    fn all_day_event_spans_one_day() {
        let registry = registry_with_project("home", "Home");
        let tasks = vec![make_task("7", "home", Some("2024-03-20"))];
        let doc = build_ics(&tasks, &registry, reference_now()).unwrap();

        assert!(doc.contains("DTSTART;VALUE=DATE:20240320"));
        assert!(doc.contains("DTEND;VALUE=DATE:20240321"));
        assert!(doc.contains("UID:task-7@taskmanager"));
        assert!(doc.contains("SUMMARY:[Home] Task 7"));
        assert!(doc.contains("CATEGORIES:Home"));
        assert!(doc.contains("STATUS:NEEDS-ACTION"));
    }

    #[test]
    fn all_day_event_rolls_over_year_end() {
        let registry = ProjectRegistry::defaults();
        let tasks = vec![make_task("1", "other", Some("2024-12-31"))];
        let doc = build_ics(&tasks, &registry, reference_now()).unwrap();
        assert!(doc.contains("DTSTART;VALUE=DATE:20241231"));
        assert!(doc.contains("DTEND;VALUE=DATE:20250101"));
    }

    #[test]
    fn timed_event_gets_one_hour_duration() {
        let registry = ProjectRegistry::defaults();
        let tasks = vec![make_task("1", "other", Some("2024-03-20T09:00"))];
        let doc = build_ics(&tasks, &registry, reference_now()).unwrap();
        assert!(doc.contains("DTSTART:20240320T090000Z"));
        assert!(doc.contains("DTEND:20240320T100000Z"));
    }

    #[test]
    fn dangling_project_key_falls_back_to_other() {
        let registry = ProjectRegistry::defaults();
        let tasks = vec![make_task("1", "no-such-project", Some("2024-03-20"))];
        let doc = build_ics(&tasks, &registry, reference_now()).unwrap();
        assert!(doc.contains("SUMMARY:[Other] Task 1"));
    }

    #[test]
    fn description_embeds_attributes_and_priority() {
        let registry = ProjectRegistry::defaults();
        let tasks = vec![make_task("1", "other", Some("2024-03-20"))];
        let doc = build_ics(&tasks, &registry, reference_now()).unwrap();
        // One escaped-newline-separated field list, priority to one decimal.
        assert!(doc.contains("DESCRIPTION:Importance: 4/5\\nLength: 2/5\\nDifficulty: 3/5\\nPriority Score: "));
        let line = doc
            .split(CRLF)
            .find(|l| l.starts_with("DESCRIPTION:"))
            .unwrap();
        let score = line.rsplit(' ').next().unwrap();
        assert!(score.parse::<f64>().is_ok());
        assert!(score.contains('.'));
    }

    #[test]
    fn document_uses_crlf_and_calendar_envelope() {
        let registry = ProjectRegistry::defaults();
        let tasks = vec![make_task("1", "other", Some("2024-03-20"))];
        let doc = build_ics(&tasks, &registry, reference_now()).unwrap();

        assert!(doc.starts_with("BEGIN:VCALENDAR\r\nVERSION:2.0\r\n"));
        assert!(doc.ends_with("END:VCALENDAR"));
        assert!(doc.contains("PRODID:-//TaskManager//EN"));
        assert!(doc.contains("X-WR-CALNAME:Task Manager"));
        assert!(doc.contains("DTSTAMP:20240315T103000Z"));
        assert!(!doc.contains("\n\n"));
        // Every line break is CRLF; no bare newlines sneak in.
        assert_eq!(doc.matches('\n').count(), doc.matches(CRLF).count());
    }

    #[test]
    fn unparseable_deadline_is_an_explicit_error() {
        let registry = ProjectRegistry::defaults();
        let tasks = vec![make_task("1", "other", Some("March 20th"))];
        let err = build_ics(&tasks, &registry, reference_now()).unwrap_err();
        assert!(matches!(err, ExportError::InvalidDeadline { .. }));
    }

    #[test]
    fn filename_embeds_generation_date() {
        assert_eq!(export_filename(reference_now()), "tasks-2024-03-15.ics");
    }
}
