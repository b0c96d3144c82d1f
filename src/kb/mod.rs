/*!
The hazard knowledge base --- domain axioms, percept intake, and the
per-cell safety classification read by a decision layer.

A [KnowledgeBase] owns a [Prover] one-to-one and is the only writer to it.
Construction loads the domain axioms generated from the
[hazard configuration](crate::config::HazardConfig); each
[observe](KnowledgeBase::observe) call turns a percept into unit clauses and
eagerly re-derives the classification of every still-unknown cell, so
[classify](KnowledgeBase::classify) and
[safe_unvisited_neighbors](KnowledgeBase::safe_unvisited_neighbors) are pure
reads.

A knowledge base lives for one exploration episode. Resetting is
constructing a fresh instance --- nothing is cleared in place, and no state
is shared between instances.
*/

mod axioms;
pub mod classification;
mod observe;
pub mod percept;

pub use classification::Classification;
pub use percept::Percept;

use classification::ClassificationMap;
use percept::PerceptStore;

use crate::{
    config::Config,
    grid::{Coordinate, Dimensions},
    prover::Prover,
    symbols::SymbolTable,
    types::err::{self},
};

/// The hazard knowledge base.
#[derive(Debug)]
pub struct KnowledgeBase {
    /// The configuration the knowledge base was built from.
    config: Config,

    /// The grid being explored.
    dimensions: Dimensions,

    /// Interning of grounded domain symbols.
    symbols: SymbolTable,

    /// The owned prover.
    prover: Prover,

    /// Write-once percept records.
    percepts: PerceptStore,

    /// Monotonic per-cell verdicts.
    classifications: ClassificationMap,
}

impl KnowledgeBase {
    /// A knowledge base over a `width` × `height` grid, with the domain
    /// axioms of `config` loaded.
    pub fn new(width: usize, height: usize, config: Config) -> Self {
        let dimensions = Dimensions::new(width, height);

        let mut kb = KnowledgeBase {
            prover: Prover::new(config.step_budget),
            symbols: SymbolTable::new(),
            percepts: PerceptStore::new(dimensions.cell_count()),
            classifications: ClassificationMap::new(dimensions.cell_count()),
            dimensions,
            config,
        };

        kb.load_axioms();
        kb
    }

    /// The grid being explored.
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// The verdict on `at`. A pure read: all inference happens inside
    /// [observe](KnowledgeBase::observe).
    pub fn classify(&self, at: Coordinate) -> Result<Classification, err::KbError> {
        if !self.dimensions.contains(at) {
            return Err(err::KbError::OutOfBounds(at));
        }

        Ok(self.classifications.get(self.dimensions.index_of(at)))
    }

    /// The percept recorded at `at`, if the cell has been observed.
    pub fn percept(&self, at: Coordinate) -> Result<Option<&Percept>, err::KbError> {
        if !self.dimensions.contains(at) {
            return Err(err::KbError::OutOfBounds(at));
        }

        Ok(self.percepts.get(self.dimensions.index_of(at)))
    }

    /// The neighbors of `at` classified [ProvenSafe](Classification::ProvenSafe)
    /// and not yet visited, in scan order.
    ///
    /// The order is fixed so agent behavior is reproducible for identical
    /// percept histories.
    pub fn safe_unvisited_neighbors(
        &self,
        at: Coordinate,
    ) -> Result<Vec<Coordinate>, err::KbError> {
        if !self.dimensions.contains(at) {
            return Err(err::KbError::OutOfBounds(at));
        }

        Ok(self
            .dimensions
            .neighbors(at)
            .into_iter()
            .filter(|&neighbor| {
                self.classifications.get(self.dimensions.index_of(neighbor))
                    == Classification::ProvenSafe
            })
            .collect())
    }

    /// A count of clauses held by the owned prover.
    pub fn clause_count(&self) -> usize {
        self.prover.clause_count()
    }
}
