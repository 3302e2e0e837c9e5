//! navigator CLI - Kotlin extension generator
//!
//! Commands:
//! - `navigator generate` - Generate Kotlin extensions from a class manifest
//! - `navigator check` - Validate a class manifest

use clap::{Parser, Subcommand};

mod generate;
mod logging;
mod manifest;

#[derive(Parser)]
#[command(name = "navigator")]
#[command(author, version, about = "Kotlin extension generator for navigator", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate Kotlin extensions for the classes in a manifest
    Generate {
        /// Path to the class manifest
        #[arg(short, long, default_value = "navigator.toml")]
        classes: String,

        /// Output directory (overrides the manifest)
        #[arg(short, long)]
        output: Option<String>,

        /// Print generated files instead of writing them
        #[arg(long)]
        dry_run: bool,
    },

    /// Validate a class manifest
    Check {
        /// Path to the class manifest
        #[arg(short, long, default_value = "navigator.toml")]
        classes: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init_logging(cli.verbose);

    match cli.command {
        Commands::Generate {
            classes,
            output,
            dry_run,
        } => {
            generate::run(&classes, output.as_deref(), dry_run)?;
        }
        Commands::Check { classes } => {
            manifest::check(&classes)?;
        }
    }

    Ok(())
}
