// SPDX-License-Identifier: AGPL-3.0-or-later
//! Command-line entry: argument parsing and dispatch

pub mod commands;

use crate::config::AppConfig;
use anyhow::{bail, Context, Result};
use clap::Parser;
use commands::{Commands, ConvertArgs, QuizArgs, TreeArgs};
use preguntero_core::{
    load_source, to_json, Document, HtmlRenderer, OutputFormat, PdfRenderer, RendererExt,
    SheetParser,
};
use preguntero_quiz::{run_console, QuestionBank};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "preguntero",
    version,
    about = "Convert technical interview question sheets to PDF or HTML, or drill them as a mock interview."
)]
pub struct Cli {
    /// TOML configuration file (default: ./preguntero.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log debug events to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let config = AppConfig::resolve(self.config.as_deref())?;
        match self.command {
            Commands::Pdf(args) => {
                let dest = convert(OutputFormat::Pdf, &args, &config)?;
                println!("PDF generado: {}", dest.display());
            }
            Commands::Html(args) => {
                let dest = convert(OutputFormat::Html, &args, &config)?;
                println!("HTML generado: {}", dest.display());
            }
            Commands::Tree(args) => println!("{}", tree(&args, &config)?),
            Commands::Quiz(args) => quiz(&args, &config)?,
        }
        Ok(())
    }
}

/// Read and parse a sheet; diagnostics are logged by the builder
fn parse_sheet(source: &Path, config: &AppConfig) -> Result<Document> {
    let content =
        load_source(source).with_context(|| format!("reading {}", source.display()))?;
    let parsed = SheetParser::new(&config.parse).parse_with_diagnostics(&content);
    if !parsed.diagnostics.is_empty() {
        tracing::warn!(
            source = %source.display(),
            count = parsed.diagnostics.len(),
            "sheet has structural problems"
        );
    }
    tracing::debug!(
        categories = parsed.document.categories.len(),
        items = parsed.document.item_count(),
        "sheet parsed"
    );
    Ok(parsed.document)
}

/// Convert `args.source` and return the path written
fn convert(format: OutputFormat, args: &ConvertArgs, config: &AppConfig) -> Result<PathBuf> {
    let doc = parse_sheet(&args.source, config)?;
    let dest = args
        .dest
        .clone()
        .unwrap_or_else(|| args.source.with_extension(format.extension()));

    let written = match format {
        OutputFormat::Pdf => PdfRenderer::new(config.render.clone()).render_to_path(&doc, &dest),
        OutputFormat::Html => HtmlRenderer::new(config.render.clone()).render_to_path(&doc, &dest),
    };
    written.with_context(|| format!("writing {}", dest.display()))?;
    Ok(dest)
}

fn tree(args: &TreeArgs, config: &AppConfig) -> Result<String> {
    let doc = parse_sheet(&args.source, config)?;
    Ok(to_json(&doc)?)
}

fn quiz(args: &QuizArgs, config: &AppConfig) -> Result<()> {
    let bank = match &args.source {
        Some(source) => {
            let bank = QuestionBank::from_document(&parse_sheet(source, config)?);
            if bank.is_empty() {
                bail!("no quiz categories found in {}", source.display());
            }
            bank
        }
        None => QuestionBank::builtin(),
    };
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_console(&bank, &mut rng, &mut stdin.lock(), &mut stdout.lock())?;
    Ok(())
}
