//! Minimal CLI: one run-to-completion generation pass.
use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;

use crate::pipeline::{self, Options};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// infer an annotatable schema skeleton from one sample message payload
#[derive(Parser, Debug)]
pub struct CommandLineInterface {
    /// input .json file whose top-level `message` field holds the sample
    input: PathBuf,

    /// output .json file for the generated schema
    output: PathBuf,

    /// union object-array element schemas instead of sampling the first element
    #[arg(long, default_value_t = false)]
    merge_items: bool,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    pub fn run(&self) -> anyhow::Result<()> {
        let options = Options {
            merge_array_items: self.merge_items,
        };
        match pipeline::generate_schema(&self.input, &self.output, options) {
            Ok(()) => {
                println!(
                    "schema written to {}",
                    self.output.display().to_string().green()
                );
                Ok(())
            }
            // load failures are reported, not fatal: no output file, and the
            // run still ends with a zero status
            Err(error) if error.is_input_error() => {
                eprintln!("{} {} => {error}", "error:".red().bold(), error.kind());
                Ok(())
            }
            Err(error) => Err(error.into()),
        }
    }
}
