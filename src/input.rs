//! Record-source adapter for semicolon-delimited process lists.
//!
//! One line per record: `label;burst_time;arrival_time;queue;priority`.
//! Lines starting with `#` are comments; blank lines are ignored. A
//! malformed record rejects the whole batch before anything is ingested,
//! so the engine only ever sees well-formed data.

use crate::level::QueueLevel;
use crate::process::Process;
use anyhow::{bail, Context, Result};

/// Parse a whole input document into a batch of records.
///
/// Errors name the offending 1-based line number and the field that failed.
pub fn parse_batch(input: &str) -> Result<Vec<Process>> {
    let mut batch = Vec::new();
    for (index, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let record = parse_record(line).with_context(|| format!("line {}", index + 1))?;
        batch.push(record);
    }
    Ok(batch)
}

fn parse_record(line: &str) -> Result<Process> {
    let fields: Vec<&str> = line.split(';').map(str::trim).collect();
    if fields.len() != 5 {
        bail!("expected 5 fields, found {}", fields.len());
    }

    let label = fields[0];
    if label.is_empty() {
        bail!("empty label");
    }

    let burst_time: u64 = fields[1]
        .parse()
        .with_context(|| format!("invalid burst time {:?}", fields[1]))?;
    if burst_time == 0 {
        bail!("burst time must be positive");
    }

    let arrival_time: u64 = fields[2]
        .parse()
        .with_context(|| format!("invalid arrival time {:?}", fields[2]))?;

    let queue: u32 = fields[3]
        .parse()
        .with_context(|| format!("invalid queue number {:?}", fields[3]))?;
    let Some(level) = QueueLevel::from_number(queue) else {
        bail!("queue number must be 1, 2 or 3, got {}", queue);
    };

    let priority: u32 = fields[4]
        .parse()
        .with_context(|| format!("invalid priority {:?}", fields[4]))?;

    Ok(Process::new(label, burst_time, arrival_time, level, priority))
}
