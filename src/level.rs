//! Queue level definitions and helpers used across the scheduling engine.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};

/// The three ready-queue levels, ordered from highest to lowest priority band.
///
/// The ordering is stable so the engine can drain levels by iterating
/// [`QueueLevel::ALL`] and address per-level state through integer indexes
/// instead of branching on specific labels. Level 1 is always drained fully
/// before level 2, and level 2 before level 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum QueueLevel {
    Level1,
    Level2,
    Level3,
}

impl QueueLevel {
    /// Ordered list of all levels (drain order) for iteration utilities.
    pub const ALL: [QueueLevel; 3] = [QueueLevel::Level1, QueueLevel::Level2, QueueLevel::Level3];

    /// Stable index for level based tables.
    pub const fn index(self) -> usize {
        match self {
            QueueLevel::Level1 => 0,
            QueueLevel::Level2 => 1,
            QueueLevel::Level3 => 2,
        }
    }

    /// Numeric identifier used by the external record format.
    ///
    /// Input records carry the queue assignment as an integer column and
    /// reports echo it back in the `Q` field.
    ///
    /// # Mapping
    /// - `Level1` → 1
    /// - `Level2` → 2
    /// - `Level3` → 3
    pub const fn number(self) -> u32 {
        match self {
            QueueLevel::Level1 => 1,
            QueueLevel::Level2 => 2,
            QueueLevel::Level3 => 3,
        }
    }

    /// Parse the external numeric identifier back into a level.
    ///
    /// Returns `None` for anything outside 1..=3; the record-source adapter
    /// turns that into a batch rejection.
    pub const fn from_number(number: u32) -> Option<QueueLevel> {
        match number {
            1 => Some(QueueLevel::Level1),
            2 => Some(QueueLevel::Level2),
            3 => Some(QueueLevel::Level3),
            _ => None,
        }
    }
}

impl fmt::Display for QueueLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Helper structure wrapping a value per [`QueueLevel`].
///
/// This keeps the orchestrator free of hardcoded per-level fields: the ready
/// queues and the per-level policy table both live in one of these, and all
/// call sites iterate [`QueueLevel::ALL`] dynamically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelTable<T> {
    values: Vec<T>,
}

impl<T> LevelTable<T> {
    /// Build a table by executing a closure for each level.
    ///
    /// The closure is called once per level in [`QueueLevel::ALL`] order, so
    /// construction order always matches drain order.
    ///
    /// # Arguments
    /// * `f` - Closure that maps each level to a value of type `T`
    ///
    /// # Returns
    /// A new `LevelTable` with values computed by the closure
    pub fn from_fn(mut f: impl FnMut(QueueLevel) -> T) -> Self {
        let mut values = Vec::with_capacity(QueueLevel::ALL.len());
        for level in QueueLevel::ALL {
            values.push(f(level));
        }
        LevelTable { values }
    }

    /// Borrow the value for a given level.
    pub fn get(&self, level: QueueLevel) -> &T {
        &self.values[level.index()]
    }

    /// Mutably borrow the value for a given level.
    pub fn get_mut(&mut self, level: QueueLevel) -> &mut T {
        &mut self.values[level.index()]
    }
}

impl<T> Index<QueueLevel> for LevelTable<T> {
    type Output = T;

    fn index(&self, index: QueueLevel) -> &Self::Output {
        self.get(index)
    }
}

impl<T> IndexMut<QueueLevel> for LevelTable<T> {
    fn index_mut(&mut self, index: QueueLevel) -> &mut Self::Output {
        self.get_mut(index)
    }
}
