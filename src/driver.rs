//! Batch driver: one scheduler instance per named input source.
//!
//! Every source gets its own [`MlqScheduler`], so batches are fully isolated
//! and can be simulated on worker threads. Workers push their outcomes
//! through a channel into a mutex-guarded map; the first malformed batch
//! fails the whole run with the source named.

use anyhow::{Context, Result};
use crossbeam_channel::unbounded;
use log::info;
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread;

use crate::input;
use crate::process::Process;
use crate::report::{self, Summary};
use crate::scheduler::{MlqScheduler, DEFAULT_QUANTUM_LEVEL1, DEFAULT_QUANTUM_LEVEL2};

/// Driver tuning knobs.
#[derive(Debug, Clone)]
pub struct DriverConfig {
    /// Round-robin quantum for queue level 1.
    pub quantum_level1: u64,
    /// Round-robin quantum for queue level 2.
    pub quantum_level2: u64,
    /// Also write a `<stem>_summary.json` next to each text report.
    pub json_summaries: bool,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            quantum_level1: DEFAULT_QUANTUM_LEVEL1,
            quantum_level2: DEFAULT_QUANTUM_LEVEL2,
            json_summaries: false,
        }
    }
}

/// A named in-memory input source.
#[derive(Debug, Clone)]
pub struct BatchSpec {
    /// Display name, also the key in the outcome map (unique per run).
    pub name: String,
    /// Raw semicolon-delimited record lines.
    pub contents: String,
}

/// Everything the simulation produced for one input source.
#[derive(Debug)]
pub struct BatchOutcome {
    pub name: String,
    /// Global dispatch order: one label per slice, level 1 before 2 before 3.
    pub dispatch_order: Vec<String>,
    /// Rendered text report (rows in ingestion order plus averages).
    pub report: String,
    /// Batch averages; `None` for an empty batch.
    pub summary: Option<Summary>,
    /// Final records with all metrics fixed.
    pub processes: Vec<Process>,
}

/// Simulate a single batch with a fresh scheduler instance.
pub fn run_batch(batch: &BatchSpec, config: &DriverConfig) -> Result<BatchOutcome> {
    let records =
        input::parse_batch(&batch.contents).with_context(|| format!("batch {}", batch.name))?;

    let mut scheduler = MlqScheduler::new(config.quantum_level1, config.quantum_level2);
    for record in records {
        scheduler.ingest(record);
    }
    let dispatch_order = scheduler.run();
    let processes = scheduler.into_processes();
    let report = report::render_report(&processes);
    let summary = Summary::from_processes(&processes);

    Ok(BatchOutcome {
        name: batch.name.clone(),
        dispatch_order,
        report,
        summary,
        processes,
    })
}

/// Simulate every batch on its own worker thread and collect the outcomes.
///
/// Each scheduler owns its clock, so the batches share nothing and the
/// per-batch results are identical to sequential runs. Returns an error if
/// any source is malformed; batch names must be unique.
pub fn run_batches(
    batches: &[BatchSpec],
    config: &DriverConfig,
) -> Result<BTreeMap<String, BatchOutcome>> {
    let outcomes: Arc<Mutex<BTreeMap<String, BatchOutcome>>> =
        Arc::new(Mutex::new(BTreeMap::new()));

    let collected = thread::scope(|scope| {
        let (tx, rx) = unbounded::<Result<BatchOutcome>>();
        for batch in batches {
            let tx = tx.clone();
            scope.spawn(move || {
                // The receiver is only gone after an earlier batch failed.
                let _ = tx.send(run_batch(batch, config));
            });
        }
        drop(tx);

        let sink = Arc::clone(&outcomes);
        let collector = scope.spawn(move || -> Result<()> {
            for result in rx {
                let outcome = result?;
                info!(
                    "batch {}: {} records, {} dispatches",
                    outcome.name,
                    outcome.processes.len(),
                    outcome.dispatch_order.len()
                );
                sink.lock().insert(outcome.name.clone(), outcome);
            }
            Ok(())
        });
        collector.join().expect("collector thread panicked")
    });
    collected?;

    let map = Arc::try_unwrap(outcomes)
        .expect("all worker references dropped with the scope")
        .into_inner();
    Ok(map)
}

/// Read, simulate, and report a set of input files.
///
/// For each input `<dir>/<stem>.<ext>` this writes `output_<stem>.txt` into
/// `output_dir` (plus `<stem>_summary.json` when configured). Outcomes come
/// back in input order so the caller can echo dispatch orders per source.
pub fn run_files(
    inputs: &[PathBuf],
    config: &DriverConfig,
    output_dir: &Path,
) -> Result<Vec<BatchOutcome>> {
    let mut batches = Vec::with_capacity(inputs.len());
    for path in inputs {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read input file {}", path.display()))?;
        batches.push(BatchSpec {
            name: path.display().to_string(),
            contents,
        });
    }

    let mut map = run_batches(&batches, config)?;

    let mut ordered = Vec::with_capacity(inputs.len());
    for path in inputs {
        let name = path.display().to_string();
        let outcome = map
            .remove(&name)
            .with_context(|| format!("missing outcome for {} (duplicate input?)", name))?;

        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "batch".to_string());

        let report_path = output_dir.join(format!("output_{stem}.txt"));
        fs::write(&report_path, &outcome.report)
            .with_context(|| format!("failed to write report {}", report_path.display()))?;
        info!("wrote {}", report_path.display());

        if config.json_summaries {
            if let Some(summary) = &outcome.summary {
                let summary_path = output_dir.join(format!("{stem}_summary.json"));
                let json = serde_json::to_string_pretty(summary)
                    .context("failed to serialize batch summary")?;
                fs::write(&summary_path, json)
                    .with_context(|| format!("failed to write {}", summary_path.display()))?;
                info!("wrote {}", summary_path.display());
            }
        }

        ordered.push(outcome);
    }
    Ok(ordered)
}
