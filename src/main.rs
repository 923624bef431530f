use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use paradise::config::Config;
use paradise::session::Session;

mod cli;

#[derive(Parser)]
#[command(name = "paradise")]
#[command(about = "ParadisePlanner - satirical personal productivity with attitude")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.paradise/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Override the state directory (defaults to ~/.paradise)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the errand clipboard
    Task {
        #[command(subcommand)]
        action: TaskAction,
    },

    /// Manage the ramblings pad
    Note {
        #[command(subcommand)]
        action: NoteAction,
    },

    /// Show today's chaos forecast
    Madness {
        /// Force a fresh event even if one was already drawn today
        #[arg(long)]
        reroll: bool,
    },

    /// Mash the stress-relief button
    Vent {
        /// How many times to mash it
        #[arg(default_value_t = 1)]
        clicks: u64,
    },

    /// Show (and edit) the personal file
    Dossier {
        /// Rename the suspect
        #[arg(long)]
        name: Option<String>,

        /// Ask for a fresh psych write-up
        #[arg(long)]
        refresh_bio: bool,
    },

    /// Show the trophy shelf
    Achievements,

    /// Run a photo through the evidence-camera look
    Snap {
        /// Input image (PNG)
        input: PathBuf,

        /// Output image (PNG)
        output: PathBuf,

        /// Fix the noise seed (reproducible output)
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Subcommand)]
enum TaskAction {
    /// Add a chore; the oracle rewrites it as a quest objective
    Add { text: String },
    /// List all tasks
    List,
    /// Toggle a task's completion state
    Done { id: String },
    /// Delete a task without doing it
    Rm { id: String },
    /// Ditch a task with a generated excuse
    Excuse { id: String },
}

#[derive(Subcommand)]
enum NoteAction {
    /// Write a note down
    Add { text: String },
    /// List all notes
    List,
    /// Shred a note
    Rm { id: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::load_global()?,
    };
    if let Some(data_dir) = cli.data_dir {
        config.settings.data_dir = Some(data_dir);
    }

    let mut session = Session::open(&config)?;

    match cli.command {
        Some(Commands::Task { action }) => match action {
            TaskAction::Add { text } => cli::task::add_command(&mut session, &text)?,
            TaskAction::List => cli::task::list_command(&session)?,
            TaskAction::Done { id } => cli::task::done_command(&mut session, &id)?,
            TaskAction::Rm { id } => cli::task::rm_command(&mut session, &id)?,
            TaskAction::Excuse { id } => cli::task::excuse_command(&mut session, &id)?,
        },
        Some(Commands::Note { action }) => match action {
            NoteAction::Add { text } => cli::note::add_command(&mut session, &text)?,
            NoteAction::List => cli::note::list_command(&session)?,
            NoteAction::Rm { id } => cli::note::rm_command(&mut session, &id)?,
        },
        Some(Commands::Madness { reroll }) => {
            cli::madness::madness_command(&mut session, reroll)?;
        }
        Some(Commands::Vent { clicks }) => cli::vent::vent_command(&mut session, clicks)?,
        Some(Commands::Dossier { name, refresh_bio }) => {
            cli::dossier::dossier_command(&mut session, name.as_deref(), refresh_bio)?;
        }
        Some(Commands::Achievements) => cli::achievements::achievements_command(&session)?,
        Some(Commands::Snap {
            input,
            output,
            seed,
        }) => cli::snap::snap_command(&session, &input, &output, seed)?,
        None => {
            // Default: show the task list
            cli::task::list_command(&session)?;
        }
    }

    Ok(())
}
