mod cli;
mod config;
mod engine;
mod format;
mod stats;
mod utils;

use clap::Parser;
use config::ToolConfig;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "huffpack")]
#[command(about = "Static Huffman file compressor")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, help = "Config file path")]
    config: Option<String>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Compress a file into a self-describing container
    Compress {
        input: PathBuf,
        #[arg(short, long, help = "Output path (default: <input>.huf)")]
        output: Option<PathBuf>,
        #[arg(long, help = "Overwrite an existing output file")]
        force: bool,
    },
    /// Restore the original bytes from a container
    Decompress {
        input: PathBuf,
        #[arg(short, long, help = "Output path (default: input minus suffix)")]
        output: Option<PathBuf>,
        #[arg(long, help = "Overwrite an existing output file")]
        force: bool,
    },
    /// Show a container's header and symbol table
    Inspect {
        input: PathBuf,
        #[arg(long, help = "Output as JSON")]
        json: bool,
    },
    /// Decompress a container and compare it against the original file
    Verify {
        original: PathBuf,
        container: PathBuf,
    },
    /// Write the default configuration file
    GenerateConfig {
        #[arg(long, default_value = config::DEFAULT_CONFIG_PATH, help = "Config file path")]
        output: String,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("huffpack=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = ToolConfig::load_or_default(cli.config.as_deref())?;

    match cli.command {
        Commands::Compress { input, output, force } => {
            cli::compress_file(&input, output, force, &config)
        }
        Commands::Decompress { input, output, force } => {
            cli::decompress_file(&input, output, force, &config)
        }
        Commands::Inspect { input, json } => cli::inspect_file(&input, json),
        Commands::Verify { original, container } => cli::verify_file(&original, &container),
        Commands::GenerateConfig { output } => cli::generate_config(&output),
    }
}
