// SPDX-License-Identifier: AGPL-3.0-or-later
//! Subcommands and their arguments

use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Sheet read when no source is given
pub const DEFAULT_SOURCE: &str = "PREGUNTERO_TECNICO.md";

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a question sheet to a paginated PDF
    Pdf(ConvertArgs),

    /// Convert a question sheet to a standalone HTML page
    Html(ConvertArgs),

    /// Print the parsed document tree as JSON
    Tree(TreeArgs),

    /// Run an interactive mock interview
    Quiz(QuizArgs),
}

#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Question sheet to read
    #[arg(default_value = DEFAULT_SOURCE)]
    pub source: PathBuf,

    /// Output file; defaults to the source name with the format's extension
    pub dest: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct TreeArgs {
    /// Question sheet to read
    #[arg(default_value = DEFAULT_SOURCE)]
    pub source: PathBuf,
}

#[derive(Args, Debug)]
pub struct QuizArgs {
    /// Draw questions from this sheet instead of the built-in table
    #[arg(long)]
    pub source: Option<PathBuf>,

    /// Seed for reproducible question order
    #[arg(long)]
    pub seed: Option<u64>,
}
