mod commands;
mod emit;
mod scan;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "routegen")]
#[command(version, about = "Routegen CLI - file-based route configuration generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a route configuration from a page directory
    Generate {
        /// Page directory to scan
        pages_dir: PathBuf,

        /// File extension treated as page components
        #[arg(short, long, default_value = "ts")]
        ext: String,

        /// Output file (prints to stdout when omitted)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "ts")]
        format: OutputFormat,

        /// Catch-all wildcard syntax of the target router
        #[arg(long, default_value = "double-star")]
        catch_all: CatchAllArg,

        /// Enable debug logging
        #[arg(short, long)]
        verbose: bool,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// TypeScript route-configuration module
    Ts,
    /// JSON route forest
    Json,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum CatchAllArg {
    /// `**` (Angular-style)
    DoubleStar,
    /// `*`
    Star,
}

impl From<CatchAllArg> for routegen::CatchAllStyle {
    fn from(arg: CatchAllArg) -> Self {
        match arg {
            CatchAllArg::DoubleStar => routegen::CatchAllStyle::DoubleStar,
            CatchAllArg::Star => routegen::CatchAllStyle::Star,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            pages_dir,
            ext,
            out,
            format,
            catch_all,
            verbose,
        } => commands::generate::execute(&pages_dir, &ext, out.as_deref(), format, catch_all, verbose),
    }
}
