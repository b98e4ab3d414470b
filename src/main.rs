use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use twobodyproblem::config::storage::default_values_path;
use twobodyproblem::SimulationConfig;

#[derive(Parser)]
#[command(name = "twobody")]
#[command(about = "Initial values for the two-body problem")]
struct Cli {
    /// Values file (default: ~/Documents/TwoBodyProblem/default/values.yml)
    #[arg(short, long, global = true)]
    path: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the saved values
    Show,

    /// Enter the values interactively
    Input {
        /// Only print the result, leave the file untouched
        #[arg(long)]
        no_save: bool,
    },

    /// Overwrite the file with the default values
    Reset,
}

fn main() -> Result<()> {
    // Logs go to stderr so the prompt on stdout stays readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let path = cli.path.unwrap_or_else(default_values_path);

    match cli.command {
        Commands::Show => {
            let values = SimulationConfig::from_file(&path)
                .with_context(|| format!("failed to load values from {}", path.display()))?;
            println!("{}", values);
        }
        Commands::Input { no_save } => {
            let values = SimulationConfig::from_stdin()?;
            println!();
            println!("{}", values);
            if !no_save {
                values
                    .save(&path)
                    .with_context(|| format!("failed to save values to {}", path.display()))?;
                println!("Values have been written to {}", path.display());
            }
        }
        Commands::Reset => {
            SimulationConfig::default()
                .save(&path)
                .with_context(|| format!("failed to save values to {}", path.display()))?;
            println!("Default values have been written to {}", path.display());
        }
    }

    Ok(())
}
