//! Command-line interface for doctto
//!
//! # Usage Examples
//!
//! ```bash
//! # Two copies as a pretty JSON array, using the config's own `copies`
//! doctto generate --config invoice.yaml --pretty
//!
//! # Reproducible JSON lines
//! doctto generate --config invoice.json --copies 1000 --seed 42 --format jsonl
//!
//! # Inspect a config without generating anything
//! doctto describe --config invoice.yaml
//!
//! # List every data type with a dedicated generator
//! doctto generators
//! ```
//!
//! Logs go to stderr (set `RUST_LOG=debug` for details); stdout carries only
//! generated data.

use anyhow::Context;
use clap::{Parser, Subcommand};
use doctto::output::{write_json, write_jsonl};
use doctto::{Document, GenerateOpts, GeneratorRegistry, OutputFormat};
use std::io;
use std::path::{Path, PathBuf};
use synth_registry::providers;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "doctto")]
#[command(about = "Generate synthetic document data from declarative field schemas")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate records from a document config
    Generate(GenerateOpts),

    /// Print the document summary and its fields
    Describe {
        /// Document config file (.yaml, .yml or .json)
        #[arg(long, env = "DOCTTO_CONFIG")]
        config: PathBuf,
    },

    /// List the built-in generators by provider
    Generators,
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(opts) => run_generate(opts),
        Commands::Describe { config } => run_describe(config),
        Commands::Generators => {
            run_generators();
            Ok(())
        }
    }
}

fn load_document(config: &Path) -> anyhow::Result<Document> {
    Document::create_document(config)
        .with_context(|| format!("Failed to load document config {}", config.display()))
}

fn run_generate(opts: GenerateOpts) -> anyhow::Result<()> {
    let mut document = load_document(&opts.config)?;
    let copies = document.resolve_copies(opts.copies);
    info!("Generating {} copies of {}", copies, document);

    let stdout = io::stdout().lock();
    match opts.format {
        OutputFormat::Json => {
            let records = document
                .synthesize_data_seeded(Some(copies), opts.seed)
                .context("Failed to synthesize records")?;
            write_json(stdout, &records, opts.pretty).context("Failed to write records")?;
        }
        OutputFormat::Jsonl => {
            if opts.pretty {
                warn!("--pretty has no effect with --format jsonl");
            }
            let mut synthesizer = document.synthesizer(opts.seed);
            let written = write_jsonl(stdout, synthesizer.records(copies))
                .context("Failed to write records")?;
            info!("Wrote {} records", written);
        }
    }

    Ok(())
}

fn run_describe(config: PathBuf) -> anyhow::Result<()> {
    let document = load_document(&config)?;
    let registry = GeneratorRegistry::global();

    println!("{document}");
    if let Some(copies) = document.metadata().copies() {
        println!("copies: {copies}");
    }
    if let Some(seed) = document.metadata().seed() {
        println!("seed: {seed}");
    }

    for field in document.fields() {
        if registry.contains(field.data_type.as_str()) {
            println!("  {field} bbox={}", field.bbox);
        } else {
            println!(
                "  {field} bbox={} [falls back to '{}']",
                field.bbox,
                field.generator().name()
            );
        }
    }

    Ok(())
}

fn run_generators() {
    for provider in providers() {
        let names: Vec<&str> = provider.generators.iter().map(|g| g.name).collect();
        println!("{}: {}", provider.name, names.join(", "));
    }
}
