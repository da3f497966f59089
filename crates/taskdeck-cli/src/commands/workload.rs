//! Workload report command for CLI.

use chrono::Utc;
use taskdeck_core::{analyze_workload, TaskStore};

pub fn run(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = TaskStore::load()?;
    let report = analyze_workload(store.tasks(), Utc::now());

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.message);
        println!("{}", report.advice);
        println!("{}", report.workload);
    }
    Ok(())
}
