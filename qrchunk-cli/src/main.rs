use anyhow::Result;
use clap::{Parser, Subcommand};
use qrchunk_cli::commands;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "qrchunk")]
#[command(about = "Qrchunk - Batch converter between chunk files and QR images", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert chunk files into symbol images
    Encode {
        /// Directory holding the chunk files
        #[arg(short, long)]
        dir: String,

        /// Module size of rendered symbols, in pixels
        #[arg(long, default_value = "8")]
        scale: u32,

        /// Remove each source chunk once its image was written
        #[arg(long)]
        remove_source: bool,

        /// Show a progress bar
        #[arg(long)]
        progress: bool,

        /// Write a JSON report of per-item outcomes
        #[arg(long)]
        report: Option<String>,
    },

    /// Convert symbol images back into chunk files
    Decode {
        /// Directory holding the symbol images
        #[arg(short, long)]
        dir: String,

        /// Remove each image once its chunk was written
        #[arg(long)]
        remove_source: bool,

        /// Show a progress bar
        #[arg(long)]
        progress: bool,

        /// Write a JSON report of per-item outcomes
        #[arg(long)]
        report: Option<String>,
    },

    /// Check in memory that every chunk survives the image round trip
    Verify {
        /// Directory holding the chunk files
        #[arg(short, long)]
        dir: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    // Execute command
    match cli.command {
        Commands::Encode {
            dir,
            scale,
            remove_source,
            progress,
            report,
        } => {
            commands::encode::execute(&dir, scale, remove_source, progress, report.as_deref())?;
        }

        Commands::Decode {
            dir,
            remove_source,
            progress,
            report,
        } => {
            commands::decode::execute(&dir, remove_source, progress, report.as_deref())?;
        }

        Commands::Verify { dir } => {
            commands::verify::execute(&dir)?;
        }
    }

    Ok(())
}
