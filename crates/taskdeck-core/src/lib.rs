//! # Taskdeck Core Library
//!
//! This library provides the core business logic for Taskdeck, a small
//! personal task manager. It implements a CLI-first philosophy where all
//! operations are available via a standalone CLI binary; any GUI layer is
//! expected to be a thin shell over the same core library.
//!
//! ## Architecture
//!
//! - **Scoring**: deadline- and age-aware priority scores per task, computed
//!   against an explicit reference instant
//! - **Workload**: aggregate pressure analysis over the full task list
//! - **Calendar**: fixed 42-cell month grids and per-date task lookup
//! - **ICS**: iCalendar (RFC 5545 subset) export of deadline-bearing tasks
//! - **Storage**: JSON documents for the project registry and task list,
//!   TOML-based application configuration
//!
//! ## Key Components
//!
//! - [`Task`]: the task record every operation reads
//! - [`ProjectRegistry`]: named/colored project lookup with the guaranteed
//!   `"other"` fallback entry
//! - [`priority_score`] / [`analyze_workload`]: the scoring engines
//! - [`build_ics`]: calendar-file generation

pub mod calendar;
pub mod date;
pub mod error;
pub mod ics;
pub mod scoring;
pub mod storage;
pub mod task;
pub mod workload;

pub use calendar::{calendar_days, tasks_for_date, CalendarDay, DAY_NAMES, MONTH_NAMES};
pub use error::{CoreError, ExportError, StorageError};
pub use ics::{build_ics, export_filename};
pub use scoring::{priority_breakdown, priority_score, PriorityBreakdown};
pub use storage::{Config, Project, ProjectRegistry, TaskStore};
pub use task::Task;
pub use workload::{analyze_workload, WorkloadLevel, WorkloadReport};
