//! Multilevel-queue scheduling engine.
//!
//! One file per discipline: round-robin drains the two time-sliced levels,
//! FCFS drains the third, and [`mlq`] owns the queues and the shared clock
//! that ties the three phases together.

mod fcfs;
pub mod mlq;
mod round_robin;

pub use mlq::{MlqScheduler, Policy, DEFAULT_QUANTUM_LEVEL1, DEFAULT_QUANTUM_LEVEL2};
