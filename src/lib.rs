//! Offline simulator of a multilevel-queue (MLQ) CPU scheduling discipline.
//!
//! Three ready queues: levels 1 and 2 run round-robin with distinct quanta,
//! level 3 runs FCFS, all sharing one global clock in strict priority-band
//! order. The engine computes wait, response, completion, and turnaround
//! times per process plus the global dispatch order; the [`input`],
//! [`report`], and [`driver`] modules supply the record-source, report-sink,
//! and multi-batch plumbing around it.

pub mod driver;
pub mod input;
pub mod level;
pub mod process;
pub mod report;
pub mod scheduler;

// Re-export for easier testing
pub use level::{LevelTable, QueueLevel};
pub use process::Process;
pub use scheduler::{MlqScheduler, Policy};
