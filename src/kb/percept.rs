/*!
Percepts --- what the agent senses at a cell --- and their write-once store.

A record is immutable once made: re-observing a visited cell can teach
nothing, as percepts are truthful and the world does not change. Records are
retained for the lifetime of the episode.
*/

use std::collections::BTreeSet;

use crate::symbols::Sensation;

/// The sensations perceived at a visited cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Percept {
    sensations: BTreeSet<Sensation>,
}

impl Percept {
    /// A percept from a list of sensations. Duplicates collapse.
    pub fn from_sensations(sensations: &[Sensation]) -> Self {
        Percept {
            sensations: sensations.iter().copied().collect(),
        }
    }

    /// Whether `sensation` was perceived.
    pub fn senses(&self, sensation: Sensation) -> bool {
        self.sensations.contains(&sensation)
    }

    /// The perceived sensations, in a fixed order.
    pub fn sensations(&self) -> impl Iterator<Item = Sensation> + '_ {
        self.sensations.iter().copied()
    }
}

impl std::fmt::Display for Percept {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.sensations.is_empty() {
            true => write!(f, "nothing"),
            false => {
                let listed = self
                    .sensations
                    .iter()
                    .map(|sensation| sensation.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "{listed}")
            }
        }
    }
}

/// Percept records for every cell of the grid, by scan-order index.
#[derive(Debug)]
pub(super) struct PerceptStore {
    records: Vec<Option<Percept>>,
}

impl PerceptStore {
    /// A store of `cell_count` empty records.
    pub(super) fn new(cell_count: usize) -> Self {
        PerceptStore {
            records: vec![None; cell_count],
        }
    }

    /// The record for the cell at `index`, if one has been made.
    pub(super) fn get(&self, index: usize) -> Option<&Percept> {
        self.records[index].as_ref()
    }

    /// Record the percept for the cell at `index`. The caller ensures no
    /// record exists.
    pub(super) fn record(&mut self, index: usize, percept: Percept) {
        debug_assert!(self.records[index].is_none());
        self.records[index] = Some(percept);
    }
}
