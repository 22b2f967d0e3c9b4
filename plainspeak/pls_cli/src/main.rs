use std::{
    fs::{self, OpenOptions},
    io::{BufRead, BufReader, Read, Write},
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use plainspeak_engine::{
    BatchSimplifyController, ComplexityTier, CorpusLoader, Domain, EngineTelemetry,
    SimplifyEngine, SimplifyJob, SimplifyPipeline,
};
use serde::{Deserialize, Serialize};
use shared_event_bus::FileEventPublisher;
use tokio::runtime::Runtime;
use uuid::Uuid;

#[derive(Parser, Debug)]
#[command(name = "pls", version, about = "Plain-language text simplification toolkit")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Simplifies text toward a target reading level.
    Simplify {
        /// Input file; stdin when omitted.
        input: Option<PathBuf>,
        #[arg(long, default_value = "standard")]
        tier: String,
        #[arg(long, default_value = "auto")]
        domain: String,
        /// Emit a JSON object instead of plain text.
        #[arg(long)]
        json: bool,
        #[arg(long)]
        log_dir: Option<PathBuf>,
        #[arg(long)]
        event_log: Option<PathBuf>,
    },
    /// Extracts up to five key sentences.
    Keypoints {
        /// Input file; stdin when omitted.
        input: Option<PathBuf>,
        /// Emit a JSON array instead of a bulleted list.
        #[arg(long)]
        json: bool,
    },
    /// Scores readability; always prints JSON metrics.
    Readability {
        /// Input file; stdin when omitted.
        input: Option<PathBuf>,
    },
    /// Runs a corpus batch and records the run in a manifest.
    Batch {
        #[arg(long)]
        index: PathBuf,
        #[arg(long)]
        corpus_dir: PathBuf,
        #[arg(long, default_value = "simplified.jsonl")]
        output: PathBuf,
        #[arg(long, default_value = "plainspeak/logs/runs/index.jsonl")]
        manifest: PathBuf,
        #[arg(long)]
        log_dir: Option<PathBuf>,
        #[arg(long)]
        event_log: Option<PathBuf>,
    },
    /// Lists most recent batch runs.
    Runs {
        /// Number of entries to display.
        #[arg(long, default_value_t = 10)]
        limit: usize,
        #[arg(long, default_value = "plainspeak/logs/runs/index.jsonl")]
        manifest: PathBuf,
    },
}

#[derive(Debug, Serialize, Deserialize, Clone)]
struct RunManifestEntry {
    run_id: String,
    submitted_at: DateTime<Utc>,
    corpus: String,
    documents: usize,
    output: PathBuf,
    status: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Simplify {
            input,
            tier,
            domain,
            json,
            log_dir,
            event_log,
        } => handle_simplify(input, &tier, &domain, json, log_dir, event_log),
        Commands::Keypoints { input, json } => handle_keypoints(input, json),
        Commands::Readability { input } => {
            let text = read_input(input)?;
            let metrics = SimplifyEngine::default().readability(&text);
            println!("{}", serde_json::to_string_pretty(&metrics)?);
            Ok(())
        }
        Commands::Batch {
            index,
            corpus_dir,
            output,
            manifest,
            log_dir,
            event_log,
        } => handle_batch(&index, &corpus_dir, output, &manifest, log_dir, event_log),
        Commands::Runs { limit, manifest } => {
            let entries = read_manifest(&manifest)?;
            for entry in entries.into_iter().rev().take(limit) {
                println!(
                    "{} | {} | {} docs | {} | {}",
                    entry.run_id,
                    entry.corpus,
                    entry.documents,
                    entry.status,
                    entry.submitted_at
                );
            }
            Ok(())
        }
    }
}

fn handle_simplify(
    input: Option<PathBuf>,
    tier: &str,
    domain: &str,
    json: bool,
    log_dir: Option<PathBuf>,
    event_log: Option<PathBuf>,
) -> Result<()> {
    // Enum validation happens here, before the engine is reached.
    let tier: ComplexityTier = tier.parse()?;
    let domain: Domain = domain.parse()?;
    let text = read_input(input)?;
    let telemetry = build_telemetry("cli.simplify", log_dir, event_log)?;
    let engine = SimplifyEngine::new(telemetry);
    let output = engine.simplify(&text, domain, tier);
    if json {
        let metrics = engine.readability(&output);
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "tier": tier,
                "domain": domain,
                "output": output,
                "metrics": metrics,
            }))?
        );
    } else {
        println!("{output}");
    }
    Ok(())
}

fn handle_keypoints(input: Option<PathBuf>, json: bool) -> Result<()> {
    let text = read_input(input)?;
    let points = SimplifyEngine::default().extract_key_points(&text);
    if json {
        println!("{}", serde_json::to_string_pretty(&points)?);
    } else {
        for point in points {
            println!("- {point}");
        }
    }
    Ok(())
}

fn handle_batch(
    index: &Path,
    corpus_dir: &Path,
    output: PathBuf,
    manifest: &Path,
    log_dir: Option<PathBuf>,
    event_log: Option<PathBuf>,
) -> Result<()> {
    let telemetry = build_telemetry("cli.batch", log_dir, event_log)?;
    let loader = CorpusLoader::new(corpus_dir.to_string_lossy().to_string());
    let corpus = loader.load_index(index)?;
    let documents = loader.load_documents(&corpus)?;
    let jobs: Vec<SimplifyJob> = documents
        .into_iter()
        .map(|doc| SimplifyJob {
            text: doc.text,
            domain: doc.document.domain,
            tier: doc.document.tier,
            correlation_id: doc.document.id.to_string(),
        })
        .collect();
    let entry = RunManifestEntry {
        run_id: format!("run-{}", Uuid::new_v4()),
        submitted_at: Utc::now(),
        corpus: corpus.name.clone(),
        documents: jobs.len(),
        output: output.clone(),
        status: "complete".into(),
    };

    let controller_telemetry = telemetry.clone();
    let controller =
        BatchSimplifyController::new(SimplifyPipeline::new(telemetry.clone()), telemetry);
    let runtime = Runtime::new()?;
    let outcomes = runtime.block_on(controller.process_batch(jobs))?;

    let mut writer = fs::File::create(&output)
        .with_context(|| format!("creating output file {output:?}"))?;
    for outcome in &outcomes {
        serde_json::to_writer(&mut writer, outcome)?;
        writer.write_all(b"\n")?;
    }
    append_manifest(manifest, &entry)?;
    if let Some(tel) = &controller_telemetry {
        let _ = tel.log(
            shared_logging::LogLevel::Info,
            "cli.batch.complete",
            serde_json::json!({ "run_id": entry.run_id, "documents": entry.documents }),
        );
    }
    println!(
        "{} | {} documents simplified -> {:?}",
        entry.run_id,
        outcomes.len(),
        output
    );
    Ok(())
}

fn build_telemetry(
    component: &str,
    log_dir: Option<PathBuf>,
    event_log: Option<PathBuf>,
) -> Result<Option<EngineTelemetry>> {
    if log_dir.is_none() && event_log.is_none() {
        return Ok(None);
    }
    let mut builder = EngineTelemetry::builder(component);
    if let Some(dir) = log_dir {
        builder = builder.log_path(dir.join("plainspeak.log"));
    }
    if let Some(path) = event_log {
        builder = builder.event_publisher(Arc::new(FileEventPublisher::new(path)?));
    }
    Ok(Some(builder.build()?))
}

fn read_input(input: Option<PathBuf>) -> Result<String> {
    match input {
        Some(path) => {
            fs::read_to_string(&path).with_context(|| format!("reading input {path:?}"))
        }
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("reading stdin")?;
            Ok(buffer)
        }
    }
}

fn append_manifest(path: &Path, entry: &RunManifestEntry) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    serde_json::to_writer(&mut file, entry)?;
    file.write_all(b"\n")?;
    Ok(())
}

fn read_manifest(path: &Path) -> Result<Vec<RunManifestEntry>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let file = fs::File::open(path).with_context(|| format!("opening manifest {path:?}"))?;
    let mut entries = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        entries.push(serde_json::from_str(&line)?);
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn cli_parses_simplify_arguments() {
        let cli = Cli::parse_from([
            "pls", "simplify", "--tier", "simple", "--domain", "medical", "--json",
        ]);
        match cli.command {
            Commands::Simplify {
                tier, domain, json, ..
            } => {
                assert_eq!(tier, "simple");
                assert_eq!(domain, "medical");
                assert!(json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn manifest_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("runs").join("index.jsonl");
        let entry = RunManifestEntry {
            run_id: "run-1".into(),
            submitted_at: Utc::now(),
            corpus: "contracts".into(),
            documents: 2,
            output: PathBuf::from("simplified.jsonl"),
            status: "complete".into(),
        };
        append_manifest(&path, &entry).unwrap();
        append_manifest(&path, &entry).unwrap();
        let entries = read_manifest(&path).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].corpus, "contracts");
    }

    #[test]
    fn missing_manifest_reads_empty() {
        let dir = tempdir().unwrap();
        let entries = read_manifest(&dir.path().join("absent.jsonl")).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn invalid_tier_is_rejected_before_the_engine() {
        let err = handle_simplify(
            Some(PathBuf::from("/nonexistent")),
            "expert",
            "auto",
            false,
            None,
            None,
        )
        .unwrap_err();
        assert!(err.to_string().contains("tier"));
    }
}
