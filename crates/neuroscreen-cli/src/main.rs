//! CLI for neuroscreen — seeded EEG risk screening from the terminal.

mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "neuroscreen")]
#[command(about = "neuroscreen — demonstration EEG risk screening pipeline")]
#[command(version = neuroscreen_core::VERSION)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the simulated pipeline: seeded synthetic band powers, risk
    /// score, tier, attribution, and coherence
    Analyze {
        /// Seed for every pipeline stage (random when omitted)
        #[arg(long)]
        seed: Option<u32>,

        /// Generate the modeled pathological profile instead of healthy
        #[arg(long)]
        pathology: bool,

        /// Write the full analysis report as JSON
        #[arg(long)]
        output: Option<String>,
    },

    /// Ingest and score an EEG CSV recording (time,Fp1,F3,C3,P3,O1)
    Ingest {
        /// Path to the CSV file
        file: String,

        /// Seed for the coherence stage (random when omitted)
        #[arg(long)]
        seed: Option<u32>,

        /// Write the full analysis report as JSON
        #[arg(long)]
        output: Option<String>,
    },

    /// Start the HTTP analysis server
    Serve {
        /// Bind address
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to listen on
        #[arg(long, default_value = "8045")]
        port: u16,

        /// Artificial pre-analysis delay in milliseconds
        #[arg(long, default_value = "0")]
        delay_ms: u64,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            seed,
            pathology,
            output,
        } => commands::analyze::run(seed, pathology, output.as_deref()),
        Commands::Ingest { file, seed, output } => {
            commands::ingest::run(&file, seed, output.as_deref())
        }
        Commands::Serve {
            host,
            port,
            delay_ms,
        } => commands::serve::run(&host, port, delay_ms),
    }
}
