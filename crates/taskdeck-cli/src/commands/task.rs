//! Task management commands for CLI.

use chrono::Utc;
use clap::Subcommand;
use taskdeck_core::{date, priority_score, ProjectRegistry, Task, TaskStore};
use uuid::Uuid;

#[derive(Subcommand)]
pub enum TaskAction {
    /// Create a new task
    Add {
        /// Task name
        name: String,
        /// Project registry key
        #[arg(long, default_value = "other")]
        project: String,
        /// Importance on a 1-5 scale
        #[arg(long, default_value_t = 3)]
        importance: u8,
        /// Length on a 1-5 scale
        #[arg(long, default_value_t = 3)]
        length: u8,
        /// Difficulty on a 1-5 scale
        #[arg(long, default_value_t = 3)]
        difficulty: u8,
        /// Deadline as YYYY-MM-DD or YYYY-MM-DDTHH:MM
        #[arg(long)]
        deadline: Option<String>,
    },
    /// List tasks sorted by priority, highest first
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Remove a task
    Remove {
        /// Task id
        id: String,
    },
}

pub fn run(action: TaskAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = TaskStore::load()?;

    match action {
        TaskAction::Add {
            name,
            project,
            importance,
            length,
            difficulty,
            deadline,
        } => {
            if let Some(value) = &deadline {
                if date::parse_deadline(value).is_none() {
                    return Err(format!(
                        "invalid deadline: {value} (expected YYYY-MM-DD or YYYY-MM-DDTHH:MM)"
                    )
                    .into());
                }
            }
            let task = Task {
                id: Uuid::new_v4().to_string(),
                name,
                project,
                importance,
                length,
                difficulty,
                created_at: Utc::now(),
                deadline,
            };
            store.add(task.clone());
            store.save()?;
            println!("Task created: {}", task.id);
            println!("{}", serde_json::to_string_pretty(&task)?);
        }
        TaskAction::List { json } => {
            let now = Utc::now();
            let registry = ProjectRegistry::load()?;
            let mut tasks: Vec<&Task> = store.tasks().iter().collect();
            tasks.sort_by(|a, b| {
                priority_score(b, now)
                    .partial_cmp(&priority_score(a, now))
                    .unwrap_or(std::cmp::Ordering::Equal)
            });

            if json {
                let rows: Vec<serde_json::Value> = tasks
                    .iter()
                    .map(|task| {
                        let mut value = serde_json::to_value(task)?;
                        if let Some(obj) = value.as_object_mut() {
                            obj.insert(
                                "priority".to_string(),
                                serde_json::json!(priority_score(task, now)),
                            );
                        }
                        Ok(value)
                    })
                    .collect::<Result<_, serde_json::Error>>()?;
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                for task in tasks {
                    let project = registry
                        .get(&task.project)
                        .map(|p| p.name.as_str())
                        .unwrap_or("Other");
                    let deadline = task
                        .deadline
                        .as_deref()
                        .map(|d| format!("  due {d}"))
                        .unwrap_or_default();
                    println!(
                        "{:>5.1}  {}  [{project}] {}  created {} ({}d old){deadline}",
                        priority_score(task, now),
                        task.id,
                        task.name,
                        date::format_date(task.created_at),
                        date::days_old(task.created_at, now),
                    );
                }
            }
        }
        TaskAction::Remove { id } => match store.remove(&id) {
            Some(_) => {
                store.save()?;
                println!("Task removed: {id}");
            }
            None => return Err(format!("unknown task: {id}").into()),
        },
    }
    Ok(())
}
