//! Multilevel-queue orchestration.
//!
//! The scheduler owns the record store, the three ready queues, and the
//! global clock. `run` drains level 1 under round-robin with the first
//! quantum, then level 2 with the second, then level 3 under FCFS, threading
//! one clock through all three phases. This is a strict priority-band
//! policy: a level is exhausted before the next one starts.

use crate::level::{LevelTable, QueueLevel};
use crate::process::Process;
use crate::scheduler::{fcfs, round_robin};
use log::{debug, info};
use std::collections::VecDeque;

/// Default round-robin quantum for queue level 1.
pub const DEFAULT_QUANTUM_LEVEL1: u64 = 3;
/// Default round-robin quantum for queue level 2.
pub const DEFAULT_QUANTUM_LEVEL2: u64 = 5;

/// Discipline applied to one queue level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Time-sliced servicing with forced preemption after `quantum` units.
    RoundRobin { quantum: u64 },
    /// No preemption; each record runs to completion in one dispatch.
    Fcfs,
}

/// Offline multilevel-queue scheduler.
///
/// Records are handed over at ingestion and kept in input order; the ready
/// queues hold indexes into that store so the report adapter can read the
/// finished batch back in the order it arrived. Each instance owns its own
/// clock, so independent batches can be simulated in parallel without any
/// shared state.
pub struct MlqScheduler {
    /// All ingested records in ingestion order, mutated in place by the drains.
    records: Vec<Process>,
    /// Per-level FIFO of indexes into `records`.
    queues: LevelTable<VecDeque<usize>>,
    /// Per-level discipline, fixed at construction.
    policies: LevelTable<Policy>,
    /// Current simulated time, advanced by every dispatch.
    clock: u64,
}

impl MlqScheduler {
    /// Create a scheduler with the given round-robin quanta for levels 1
    /// and 2. Level 3 is always FCFS.
    ///
    /// # Panics
    /// Panics if either quantum is zero; a zero quantum would never drain a
    /// preempted record.
    pub fn new(quantum_level1: u64, quantum_level2: u64) -> MlqScheduler {
        assert!(
            quantum_level1 > 0 && quantum_level2 > 0,
            "round-robin quanta must be positive, got {} and {}",
            quantum_level1,
            quantum_level2
        );
        MlqScheduler {
            records: Vec::new(),
            queues: LevelTable::from_fn(|_| VecDeque::new()),
            policies: LevelTable::from_fn(|level| match level {
                QueueLevel::Level1 => Policy::RoundRobin {
                    quantum: quantum_level1,
                },
                QueueLevel::Level2 => Policy::RoundRobin {
                    quantum: quantum_level2,
                },
                QueueLevel::Level3 => Policy::Fcfs,
            }),
            clock: 0,
        }
    }

    /// Append a record to the ready queue matching its level.
    ///
    /// Input order is preserved within each queue; membership is decided
    /// here once and never changes.
    pub fn ingest(&mut self, process: Process) {
        let level = process.level;
        debug!("ingest {} into queue {}", process.label, level);
        let slot = self.records.len();
        self.records.push(process);
        self.queues[level].push_back(slot);
    }

    /// Run the full simulation and return the global dispatch order.
    ///
    /// Levels drain in [`QueueLevel::ALL`] order under their configured
    /// policies, sharing one clock. Empty queues contribute nothing. After
    /// this returns every ingested record is terminal and its metrics are
    /// final.
    pub fn run(&mut self) -> Vec<String> {
        let mut order = Vec::new();
        for level in QueueLevel::ALL {
            let queue = self.queues.get_mut(level);
            match self.policies[level] {
                Policy::RoundRobin { quantum } => {
                    round_robin::drain(&mut self.records, queue, quantum, &mut self.clock, &mut order)
                }
                Policy::Fcfs => fcfs::drain(&mut self.records, queue, &mut self.clock, &mut order),
            }
        }
        info!(
            "simulation finished: {} records, {} dispatches, clock={}",
            self.records.len(),
            order.len(),
            self.clock
        );
        order
    }

    /// Current simulated time.
    pub fn clock(&self) -> u64 {
        self.clock
    }

    /// All ingested records, in ingestion order.
    pub fn processes(&self) -> &[Process] {
        &self.records
    }

    /// Consume the scheduler and hand the records back, in ingestion order.
    pub fn into_processes(self) -> Vec<Process> {
        self.records
    }
}

impl Default for MlqScheduler {
    fn default() -> Self {
        MlqScheduler::new(DEFAULT_QUANTUM_LEVEL1, DEFAULT_QUANTUM_LEVEL2)
    }
}
