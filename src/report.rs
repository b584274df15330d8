//! Report-sink adapter: per-process metrics plus batch averages.
//!
//! The text format mirrors the input convention: a commented header, one
//! semicolon-delimited row per process in batch order, then a summary line
//! with the arithmetic mean of each metric. The [`Summary`] snapshot is
//! serde-serializable so the driver can also emit machine-readable output.

use crate::process::Process;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Header line preceding the per-process rows.
pub const REPORT_HEADER: &str = "# label; BT; AT; Q; Pr; WT; CT; RT; TAT";

/// Aggregate metrics over one finished batch.
///
/// Never constructed for an empty batch; [`Summary::from_processes`] returns
/// `None` instead of averaging over zero records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub process_count: usize,
    pub avg_wait_time: f64,
    pub avg_completion_time: f64,
    pub avg_response_time: f64,
    pub avg_turnaround_time: f64,
}

impl Summary {
    /// Compute the four batch averages, or `None` for an empty batch.
    pub fn from_processes(processes: &[Process]) -> Option<Summary> {
        if processes.is_empty() {
            return None;
        }
        let count = processes.len() as f64;
        let sum_of = |metric: fn(&Process) -> u64| {
            processes.iter().map(metric).sum::<u64>() as f64 / count
        };
        Some(Summary {
            process_count: processes.len(),
            avg_wait_time: sum_of(|p| p.wait_time),
            avg_completion_time: sum_of(|p| p.completion_time),
            avg_response_time: sum_of(|p| p.response_time.unwrap_or(0)),
            avg_turnaround_time: sum_of(|p| p.turnaround_time),
        })
    }
}

/// Render the full text report for a finished batch.
///
/// Rows appear in the order the records were ingested. An empty batch
/// produces the header alone: no rows and no summary line.
pub fn render_report(processes: &[Process]) -> String {
    let mut out = String::new();
    out.push_str(REPORT_HEADER);
    out.push('\n');

    for p in processes {
        writeln!(
            out,
            "{}; {}; {}; {}; {}; {}; {}; {}; {}",
            p.label,
            p.burst_time,
            p.arrival_time,
            p.level,
            p.priority,
            p.wait_time,
            p.completion_time,
            p.response_time.unwrap_or(0),
            p.turnaround_time
        )
        .expect("writing to a String cannot fail");
    }

    if let Some(summary) = Summary::from_processes(processes) {
        writeln!(
            out,
            "\nWT={}; CT={}; RT={}; TAT={};",
            summary.avg_wait_time,
            summary.avg_completion_time,
            summary.avg_response_time,
            summary.avg_turnaround_time
        )
        .expect("writing to a String cannot fail");
    }

    out
}
