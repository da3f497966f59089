//! Project registry commands for CLI.

use clap::Subcommand;
use taskdeck_core::storage::Config;
use taskdeck_core::{Project, ProjectRegistry};

#[derive(Subcommand)]
pub enum ProjectAction {
    /// Create a new project
    Add {
        /// Registry key
        key: String,
        /// Display name
        name: String,
        /// Hex color; defaults to cycling the configured palette
        #[arg(long)]
        color: Option<String>,
    },
    /// Rename an existing project
    Rename {
        key: String,
        name: String,
    },
    /// Change a project's color
    Color {
        key: String,
        color: String,
    },
    /// List all projects
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: ProjectAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut registry = ProjectRegistry::load()?;

    match action {
        ProjectAction::Add { key, name, color } => {
            let color = color.unwrap_or_else(|| {
                let config = Config::load_or_default();
                config.next_color(registry.len()).to_string()
            });
            registry.insert(key.clone(), Project::new(name, color));
            registry.save()?;
            println!("Project created: {key}");
        }
        ProjectAction::Rename { key, name } => {
            let project = registry
                .get_mut(&key)
                .ok_or_else(|| format!("unknown project: {key}"))?;
            project.name = name;
            registry.save()?;
            println!("Project updated: {key}");
        }
        ProjectAction::Color { key, color } => {
            let project = registry
                .get_mut(&key)
                .ok_or_else(|| format!("unknown project: {key}"))?;
            project.color = color;
            registry.save()?;
            println!("Project updated: {key}");
        }
        ProjectAction::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&registry)?);
            } else {
                for (key, project) in registry.iter() {
                    println!("{key}\t{}\t{}", project.name, project.color);
                }
            }
        }
    }
    Ok(())
}
