//! `jot` CLI — validate and canonicalize Jot documents from the command
//! line.
//!
//! ## Usage
//!
//! ```sh
//! # Validate a document (stdin → exit status)
//! echo '[1, 2, 3,]' | jot check
//!
//! # Validate a file; parse errors report the 1-based line/column
//! jot check -i config.jot
//!
//! # Print the canonical rendering (comments and formatting stripped)
//! jot render -i config.jot
//!
//! # Canonicalize from file to file
//! jot render -i config.jot -o config.canonical
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Read};

#[derive(Parser)]
#[command(name = "jot", version, about = "Jot document checker and canonicalizer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a document and report whether it is well formed
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Parse a document and print its canonical rendering
    Render {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { input } => {
            let text = read_input(input.as_deref())?;
            jot_core::parse(&text).context("document is not well formed")?;
            println!("ok");
        }
        Commands::Render { input, output } => {
            let text = read_input(input.as_deref())?;
            let value = jot_core::parse(&text).context("document is not well formed")?;
            write_output(output.as_deref(), &value.to_string())?;
        }
    }

    Ok(())
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
