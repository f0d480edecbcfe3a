use clap::{Parser, Subcommand};

mod commands;
mod common;

#[derive(Parser)]
#[command(name = "liftplan", version, about = "Liftplan workout planner CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Timeline block management
    Block {
        #[command(subcommand)]
        action: commands::block::BlockAction,
    },
    /// Workout-level operations
    Workout {
        #[command(subcommand)]
        action: commands::workout::WorkoutAction,
    },
    /// Palette templates
    Template {
        #[command(subcommand)]
        action: commands::template::TemplateAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Block { action } => commands::block::run(action),
        Commands::Workout { action } => commands::workout::run(action),
        Commands::Template { action } => commands::template::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
