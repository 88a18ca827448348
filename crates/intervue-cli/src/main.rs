//! intervue CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "intervue", version, about = "Guided interview sessions with scored reports")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a full interview session
    Run {
        /// Document (resume) to extract skills from
        #[arg(long)]
        document: PathBuf,

        /// Role label for question generation
        #[arg(long)]
        role: Option<String>,

        /// Service backend name from the config (e.g. "local", "remote")
        #[arg(long)]
        service: Option<String>,

        /// TOML answer script for a non-interactive session
        #[arg(long)]
        answers: Option<PathBuf>,

        /// Output directory
        #[arg(long, default_value = "./intervue-results")]
        output: PathBuf,

        /// Export format: text, json, all
        #[arg(long, default_value = "text")]
        format: String,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Re-export a saved session report
    Export {
        /// Session report JSON produced by `run`
        #[arg(long)]
        session: PathBuf,

        /// Output directory
        #[arg(long, default_value = "./intervue-results")]
        output: PathBuf,

        /// Export format: text, json, all
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Extract skills from a document without starting a session
    Skills {
        /// Document to extract skills from
        #[arg(long)]
        document: PathBuf,

        /// Service backend name from the config
        #[arg(long)]
        service: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create starter config and a sample document
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("intervue=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            document,
            role,
            service,
            answers,
            output,
            format,
            config,
        } => commands::run::execute(document, role, service, answers, output, format, config).await,
        Commands::Export {
            session,
            output,
            format,
        } => commands::export::execute(session, output, format),
        Commands::Skills {
            document,
            service,
            config,
        } => commands::skills::execute(document, service, config).await,
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
