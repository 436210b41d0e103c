//! localplan-chunk: turn Local Plan PDFs into section-tagged chunks.
//!
//! Reads one or more PDF/TXT files, chunks each document independently
//! (in parallel across files), and writes the chunks as JSON Lines for the
//! embedding/indexing stage.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};

use localplan_core::config::{load_dotenv, Config};
use localplan_ingest::{extract_file, ChunkPipeline, ExtractedDocument};

// ── CLI ─────────────────────────────────────────────────────────────

/// Chunk Local Plan documents into retrieval-ready JSON Lines.
#[derive(Parser, Debug)]
#[command(name = "localplan-chunk", version, about)]
struct Cli {
    /// Input files (.pdf or .txt).
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Owning authority identifier stamped on every chunk.
    #[arg(long)]
    council: Option<String>,

    /// Maximum characters per chunk.
    #[arg(long)]
    max_chunk_chars: Option<usize>,

    /// Minimum characters for a chunk to be kept.
    #[arg(long)]
    min_chunk_chars: Option<usize>,

    /// Output JSONL path (stdout when omitted).
    #[arg(long, short)]
    output: Option<PathBuf>,
}

/// Flags override the profiled env config only when passed.
fn apply_overrides(cli: &Cli, config: &mut Config) {
    if let Some(council) = &cli.council {
        config.ingest.council = council.clone();
    }
    if let Some(max) = cli.max_chunk_chars {
        config.chunking.max_chunk_chars = max;
    }
    if let Some(min) = cli.min_chunk_chars {
        config.chunking.min_chunk_chars = min;
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    load_dotenv();
    let cli = Cli::parse();

    let mut config = Config::from_env();
    apply_overrides(&cli, &mut config);
    config.log_summary();
    tracing::debug!(config = %config.redacted_summary(), "effective configuration");

    let pipeline = ChunkPipeline::new(config.chunking).context("invalid chunking configuration")?;

    if config.ingest.workers > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(config.ingest.workers)
            .build_global()
            .context("failed to configure worker pool")?;
    }

    let mut docs: Vec<ExtractedDocument> = Vec::with_capacity(cli.inputs.len());
    for path in &cli.inputs {
        match extract_file(path) {
            Ok(doc) => {
                info!(path = %path.display(), pages = doc.pages.len(), lines = doc.total_lines(), "extracted");
                docs.push(doc);
            }
            Err(e) => warn!(path = %path.display(), error = %e, "skipping file"),
        }
    }
    if docs.is_empty() {
        anyhow::bail!("no input could be extracted");
    }

    let batches = pipeline.chunk_batch(&docs, &config.ingest.council);

    let mut out: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("failed to create {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    let mut total = 0usize;
    for chunks in &batches {
        for chunk in chunks {
            serde_json::to_writer(&mut out, chunk)?;
            out.write_all(b"\n")?;
        }
        total += chunks.len();
    }
    out.flush()?;

    info!(documents = docs.len(), chunks = total, "done");
    Ok(())
}
