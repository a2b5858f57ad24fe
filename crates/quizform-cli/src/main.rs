//! quizform CLI — turns extracted document text into evaluation templates.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "quizform",
    version,
    about = "Evaluation template builder for extracted document text"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a template from a text file, a directory of .txt files, or stdin ("-")
    Parse {
        /// Text file, directory, or "-" for stdin
        #[arg(long)]
        input: PathBuf,

        /// Output file (or directory when the input is a directory); stdout if omitted
        #[arg(long)]
        output: Option<PathBuf>,

        /// Id strategy: random, sequential (overrides config)
        #[arg(long)]
        ids: Option<String>,

        /// Prompt for options that appear without a question (overrides config)
        #[arg(long)]
        default_prompt: Option<String>,

        /// Emit single-line JSON
        #[arg(long)]
        compact: bool,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Show how each line of a text file is classified
    Explain {
        /// Text file or "-" for stdin
        #[arg(long)]
        input: PathBuf,

        /// Only show lines matched by more than one rule
        #[arg(long)]
        conflicts: bool,
    },

    /// Summarize a template JSON file
    Inspect {
        /// Template JSON file
        #[arg(long)]
        template: PathBuf,
    },

    /// Check a template JSON file for structural problems
    Validate {
        /// Template JSON file
        #[arg(long)]
        template: PathBuf,

        /// Exit code 1 if any warning is found
        #[arg(long)]
        strict: bool,
    },

    /// Create a starter config file
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quizform=info".parse().expect("valid log directive")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Parse {
            input,
            output,
            ids,
            default_prompt,
            compact,
            config,
        } => commands::parse::execute(input, output, ids, default_prompt, compact, config),
        Commands::Explain { input, conflicts } => commands::explain::execute(input, conflicts),
        Commands::Inspect { template } => commands::inspect::execute(template),
        Commands::Validate { template, strict } => commands::validate::execute(template, strict),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
