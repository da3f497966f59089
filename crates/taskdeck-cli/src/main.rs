use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "taskdeck", version, about = "Taskdeck CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Project registry management
    Project {
        #[command(subcommand)]
        action: commands::project::ProjectAction,
    },
    /// Task management
    Task {
        #[command(subcommand)]
        action: commands::task::TaskAction,
    },
    /// Workload analysis over all tasks
    Workload {
        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Month calendar view
    Calendar {
        /// Year, defaults to the current one
        #[arg(long)]
        year: Option<i32>,
        /// Month, 0-based (0 = January), defaults to the current one
        #[arg(long)]
        month: Option<u32>,
    },
    /// Export deadline-bearing tasks as an iCalendar file
    Export {
        /// Output directory, defaults to the configured one
        #[arg(long)]
        output: Option<std::path::PathBuf>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Project { action } => commands::project::run(action),
        Commands::Task { action } => commands::task::run(action),
        Commands::Workload { json } => commands::workload::run(json),
        Commands::Calendar { year, month } => commands::calendar::run(year, month),
        Commands::Export { output } => commands::export::run(output),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
