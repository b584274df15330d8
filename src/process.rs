//! Process records tracked by the simulator.

use crate::level::QueueLevel;
use serde::{Deserialize, Serialize};

/// One schedulable unit of work and the metrics the engine fills in.
///
/// Each [`Process`] captures the static attributes read from the input record
/// (burst time, arrival time, queue level, priority) alongside the mutable
/// simulation state. `remaining_time` counts down as the process is serviced
/// and reaching zero makes the record terminal; the response time stays
/// `None` until the first dispatch so an unserviced record can never be
/// mistaken for one that responded instantly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Opaque identifier, unique within a run; used for reporting and the
    /// dispatch-order sequence.
    pub label: String,
    /// Total CPU time required, always > 0 (enforced at the record boundary).
    pub burst_time: u64,
    /// Time unit at which the process becomes ready.
    pub arrival_time: u64,
    /// Ready queue this record belongs to; membership never changes.
    pub level: QueueLevel,
    /// Informational only; neither discipline consults it.
    pub priority: u32,
    /// CPU time still owed; zero means terminal.
    pub remaining_time: u64,
    /// Elapsed time from arrival to first dispatch; set exactly once.
    pub response_time: Option<u64>,
    /// Turnaround time minus burst time, fixed at completion.
    pub wait_time: u64,
    /// Clock value at which the final slice finished, fixed at completion.
    pub completion_time: u64,
    /// Completion time minus arrival time, fixed at completion.
    pub turnaround_time: u64,
}

impl Process {
    /// Create a record with default simulation state.
    ///
    /// Construction constraints (positive burst, valid queue number) are
    /// validated by the record-source adapter, not here.
    pub fn new(
        label: impl Into<String>,
        burst_time: u64,
        arrival_time: u64,
        level: QueueLevel,
        priority: u32,
    ) -> Process {
        Process {
            label: label.into(),
            burst_time,
            arrival_time,
            level,
            priority,
            remaining_time: burst_time,
            response_time: None,
            wait_time: 0,
            completion_time: 0,
            turnaround_time: 0,
        }
    }

    /// Whether the record is terminal and must never be re-queued.
    pub fn is_finished(&self) -> bool {
        self.remaining_time == 0
    }
}
