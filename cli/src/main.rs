#![deny(missing_docs)]

//! # API Description CLI
//!
//! One-shot generator for the Burger Restaurant API description: builds the
//! burger catalog, compiles it into an OpenAPI 3.1 document, and writes the
//! YAML artifact. Any declaration or write failure exits non-zero with the
//! error rendered on stderr.

use apidesc_core::{burger_document, emit_to_path, to_yaml, AppResult};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Burger Restaurant API description generator")]
struct Cli {
    /// Output path for the OpenAPI document.
    #[clap(long, default_value = "openapi.yaml")]
    output: PathBuf,

    /// Print the document to stdout instead of writing a file.
    #[clap(long)]
    stdout: bool,
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();

    let document = burger_document()?;
    if cli.stdout {
        print!("{}", to_yaml(&document)?);
    } else {
        emit_to_path(&document, &cli.output)?;
        println!("OpenAPI document written to {:?}", cli.output);
    }

    Ok(())
}
