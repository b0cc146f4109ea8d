mod diagram;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "model-erd")]
#[command(version)]
#[command(about = "Render a deduplicated Mermaid ER diagram from model relationship definitions", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the ER diagram for a model definitions file
    Diagram {
        /// Model definitions file (.json, .yaml, .yml)
        file: PathBuf,

        /// Only include models from this scope
        #[arg(short, long)]
        scope: Option<String>,

        /// Allow list of models (comma-separated, repeatable)
        #[arg(short = 'm', long = "model")]
        model: Vec<String>,

        /// Disallow list of models (comma-separated, repeatable)
        #[arg(short = 'M', long = "no-model")]
        no_model: Vec<String>,

        /// Only relationships between exactly these two models (A,B)
        #[arg(short, long)]
        between: Option<String>,

        /// Print a mermaid.live edit link instead of the diagram text
        #[arg(short, long)]
        link: bool,

        /// Write the diagram to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Diagram {
            file,
            scope,
            model,
            no_model,
            between,
            link,
            output,
        } => diagram::run(file, scope, model, no_model, between, link, output),
        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "model-erd", &mut io::stdout());
            Ok(())
        }
    }
}
