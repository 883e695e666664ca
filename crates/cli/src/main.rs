// ABOUTME: CLI for running the clipper extraction pipeline over fetched HTML files.
// ABOUTME: Reads pages from files or stdin and prints Article records (or all candidates) as JSON.

use std::fs;
use std::io::{self, Read};

use anyhow::{bail, Context, Result};
use chrono::Utc;
use clap::Parser;
use clipper_collect::load_builtin_sources;
use clipper_extract::{build_article, ExtractionPipeline};
use serde_json::json;
use tracing_subscriber::EnvFilter;

/// Extract article content from already-fetched HTML pages.
#[derive(Parser, Debug)]
#[command(name = "clipper")]
#[command(about = "Extract article content from fetched HTML and print JSON", long_about = None)]
struct Args {
    /// HTML file path(s). Use "-" to read one page from stdin.
    #[arg(required_unless_present = "list_sources")]
    files: Vec<String>,

    /// Print the builtin source catalog and exit.
    #[arg(long, default_value_t = false)]
    list_sources: bool,

    /// Page URL for domain matching and diagnostics (single file only).
    #[arg(long)]
    url: Option<String>,

    /// Print every valid candidate from every strategy instead of the
    /// composed article record.
    #[arg(long, default_value_t = false)]
    all: bool,

    /// Minimum quality score for an extraction to be accepted.
    #[arg(long)]
    min_quality: Option<f64>,

    /// Output compact JSON instead of pretty.
    #[arg(long, default_value_t = false)]
    compact: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    if args.list_sources {
        let sources = load_builtin_sources();
        println!("{}", serde_json::to_string_pretty(&sources)?);
        return Ok(());
    }

    if args.files.len() > 1 && args.url.is_some() {
        bail!("--url is only valid when processing a single file");
    }

    let mut pipeline = ExtractionPipeline::default();
    if let Some(min_quality) = args.min_quality {
        pipeline = pipeline.with_min_quality(min_quality);
    }

    let mut results = Vec::new();
    for file in &args.files {
        let url = args
            .url
            .clone()
            .unwrap_or_else(|| format!("file://{}", file));

        match load_html(file) {
            Ok(html) => {
                if args.all {
                    let candidates = pipeline.extract_all(&html, &url);
                    results.push(json!({
                        "file": file,
                        "ok": true,
                        "candidates": candidates,
                        "error": null
                    }));
                } else {
                    let article = build_article(&html, &url, Utc::now(), &pipeline);
                    results.push(json!({
                        "file": file,
                        "ok": true,
                        "article": article,
                        "error": null
                    }));
                }
            }
            Err(err) => results.push(json!({
                "file": file,
                "ok": false,
                "article": null,
                "error": err.to_string()
            })),
        }
    }

    // Single file: emit the record itself. Batch: emit an envelope.
    let output = if results.len() == 1 {
        let first = &results[0];
        if first["ok"].as_bool() == Some(true) {
            if args.all {
                first["candidates"].clone()
            } else {
                first["article"].clone()
            }
        } else {
            first.clone()
        }
    } else {
        let processed = results
            .iter()
            .filter(|r| r["ok"].as_bool() == Some(true))
            .count();
        json!({
            "pages": results,
            "total": results.len(),
            "processed": processed,
            "failed": results.len() - processed
        })
    };

    if args.compact {
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("{}", serde_json::to_string_pretty(&output)?);
    }

    Ok(())
}

fn load_html(target: &str) -> Result<String> {
    if target == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        Ok(buf)
    } else {
        fs::read_to_string(target).with_context(|| format!("failed to read {}", target))
    }
}
