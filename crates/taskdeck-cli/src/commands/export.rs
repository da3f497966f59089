//! Calendar-file export command for CLI.
//!
//! Owns the side effects around the pure builder: writing the `.ics`
//! file, and turning the nothing-to-export case into a notice with a
//! clean exit rather than a failure.

use chrono::Utc;
use std::path::PathBuf;
use taskdeck_core::storage::Config;
use taskdeck_core::{build_ics, export_filename, ExportError, ProjectRegistry, TaskStore};

pub fn run(output: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let now = Utc::now();
    let store = TaskStore::load()?;
    let registry = ProjectRegistry::load()?;

    match build_ics(store.tasks(), &registry, now) {
        Ok(document) => {
            let dir = output
                .unwrap_or_else(|| PathBuf::from(Config::load_or_default().export.directory));
            std::fs::create_dir_all(&dir)?;
            let path = dir.join(export_filename(now));
            std::fs::write(&path, &document)?;
            println!("Exported {}", path.display());
            Ok(())
        }
        Err(ExportError::NoEligibleTasks) => {
            eprintln!("No tasks with deadlines to export to calendar.");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
