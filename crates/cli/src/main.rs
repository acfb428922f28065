//! CLI tool for generating PowerPoint presentations from PDF documents.

use anyhow::{bail, Context, Result};
use clap::Parser;
use deck_core::{GeminiConfig, PipelineConfig, SlidePlan};
use deck_gen::{generate_outline, GeminiClient, SlideContentGenerator};
use deck_pdf::TextExtractor;
use deck_pptx::PresentationAssembler;
use std::fs;
use std::path::{Path, PathBuf};

/// Generate a PowerPoint presentation from a PDF document.
#[derive(Parser, Debug)]
#[command(name = "pdf2deck")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input PDF file
    input: PathBuf,

    /// Presentation title
    #[arg(short, long, default_value = "Business Report")]
    title: String,

    /// Output directory (default: same as input file)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Generate and print the slide outline, then stop
    #[arg(long)]
    outline_only: bool,

    /// Use an edited outline from this file instead of generating one
    #[arg(long, value_name = "FILE")]
    outline: Option<PathBuf>,

    /// Maximum number of content slides
    #[arg(long, default_value = "10")]
    max_slides: usize,

    /// Gemini model identifier (default: gemini-1.5-pro)
    #[arg(long)]
    model: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    dotenvy::dotenv().ok();

    let cfg = PipelineConfig::default().with_max_slides(args.max_slides);

    // The generation service must come up before any document is read;
    // a missing credential halts the whole run here.
    let mut gemini_cfg = GeminiConfig::from_env()?;
    if let Some(model) = &args.model {
        gemini_cfg = gemini_cfg.with_model(model.clone());
    }
    let client = GeminiClient::new(gemini_cfg)?;

    // Enforce the size bound before extraction.
    let metadata = fs::metadata(&args.input)
        .with_context(|| format!("Failed to open {}", args.input.display()))?;
    if metadata.len() > cfg.max_pdf_size_bytes() {
        bail!("File too large (max {}MB)", cfg.max_pdf_size_mb);
    }

    let pdf_bytes =
        fs::read(&args.input).with_context(|| format!("Failed to read {}", args.input.display()))?;

    if args.verbose {
        eprintln!("Extracting text from {}", args.input.display());
    }
    let doc = TextExtractor::new().extract(&pdf_bytes, &cfg)?;
    log::debug!("extracted {} characters", doc.text.len());

    let outline_text = match &args.outline {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read outline from {}", path.display()))?,
        None => {
            if args.verbose {
                eprintln!("Generating slide outline");
            }
            generate_outline(&client, &cfg, &doc, &args.title)?
        }
    };

    if args.outline_only {
        // Print for review; the edited text can come back via --outline.
        print!("{outline_text}");
        if !outline_text.ends_with('\n') {
            println!();
        }
        return Ok(());
    }

    let plan = SlidePlan::from_outline(&outline_text);
    if plan.is_empty() {
        log::warn!("outline contained no well-formed slide lines");
    }
    if args.verbose {
        eprintln!("Planned {} slides", plan.len());
    }

    let generator = SlideContentGenerator::new(&client, &cfg, &doc);
    let assembler = PresentationAssembler::new(&cfg);
    let artifact = assembler.assemble(&args.title, &plan, &generator)?;

    let output_path = output_path(&args.input, args.output.as_deref(), &args.title)?;
    deliver(&artifact, &output_path)?;

    println!("Presentation written to {}", output_path.display());
    Ok(())
}

/// Resolve the artifact destination: output filename is derived from the
/// title with spaces replaced by underscores.
fn output_path(input: &Path, output: Option<&Path>, title: &str) -> Result<PathBuf> {
    let filename = format!("{}.pptx", title.replace(' ', "_"));

    let path = match output {
        Some(path) if path.extension().is_some() => path.to_path_buf(),
        Some(dir) => {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
            dir.join(filename)
        }
        None => match input.parent() {
            Some(parent) => parent.join(filename),
            None => PathBuf::from(filename),
        },
    };

    Ok(path)
}

/// Stage the artifact through a temp file, then move it into place.
///
/// Cleanup of the temp file after delivery is best-effort: a leftover file
/// is logged, never surfaced as a pipeline error.
fn deliver(artifact: &[u8], output_path: &Path) -> Result<()> {
    let tmp_path = std::env::temp_dir().join(format!("pdf2deck-{}.pptx", std::process::id()));

    fs::write(&tmp_path, artifact)
        .with_context(|| format!("Failed to write {}", tmp_path.display()))?;
    fs::copy(&tmp_path, output_path)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    if let Err(e) = fs::remove_file(&tmp_path) {
        log::warn!("could not remove temp artifact {}: {e}", tmp_path.display());
    }

    Ok(())
}
