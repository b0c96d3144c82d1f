/*!
Percept intake, and the eager reclassification which follows it.

[observe](crate::kb::KnowledgeBase::observe) is the only mutator of the
clause set and the classification map. Calls must arrive in the order the
percepts occurred --- later inference leans on the accumulated clause set
reflecting what has already been ruled out.
*/

use crate::{
    db::ClauseSource,
    grid::Coordinate,
    kb::{classification::Classification, percept::Percept, KnowledgeBase},
    misc::log::targets::{self},
    structures::literal::{CLiteral, Literal},
    symbols::Sensation,
    types::err::{self, Violation},
};

impl KnowledgeBase {
    /// Record the percept at `at` and re-derive cell classifications.
    ///
    /// Idempotent per coordinate: re-observing a recorded cell with the
    /// same sensations is a no-op. Anything else that contradicts recorded
    /// state fails loudly with
    /// [ContractViolation](err::KbError::ContractViolation) before the
    /// clause set is touched.
    pub fn observe(
        &mut self,
        at: Coordinate,
        sensations: &[Sensation],
    ) -> Result<(), err::KbError> {
        if !self.dimensions.contains(at) {
            return Err(err::KbError::OutOfBounds(at));
        }

        let rules = self.config.hazards.rules.clone();

        for &sensation in sensations {
            if !rules.iter().any(|rule| rule.sensation == sensation) {
                return Err(Violation::ForeignSensation(sensation).into());
            }
        }

        let percept = Percept::from_sensations(sensations);
        let index = self.dimensions.index_of(at);

        if let Some(existing) = self.percepts.get(index) {
            if *existing == percept {
                log::trace!(target: targets::OBSERVE, "Repeat observation of {at}.");
                return Ok(());
            }
            return Err(Violation::PerceptConflict(at).into());
        }

        if self.classifications.get(index) == Classification::ProvenHazard {
            return Err(Violation::HazardRevisited(at).into());
        }

        log::info!(target: targets::OBSERVE, "At {at}: {percept}.");

        self.classifications.mark_visited(index);

        // The agent is alive here, so no configured kind is hosted here.
        for rule in &rules {
            let cleared = self.symbols.hosts(rule.hazard, at, false);
            log::debug!(target: targets::OBSERVE, "Asserting {}.", self.symbols.label(&cleared));
            let _ = self.prover.add_clause_from(cleared, ClauseSource::Percept);
        }

        // One unit per configured sensation, present or absent.
        for rule in &rules {
            let polarity = percept.senses(rule.sensation);
            let sensed = self.symbols.senses(rule.sensation, at, polarity);
            log::debug!(target: targets::OBSERVE, "Asserting {}.", self.symbols.label(&sensed));
            let _ = self.prover.add_clause_from(sensed, ClauseSource::Percept);
        }

        self.percepts.record(index, percept);
        self.reclassify();

        Ok(())
    }

    /// Query the prover for every still-unknown cell of the grid, in scan
    /// order, and record what is now provable.
    ///
    /// The whole grid is scanned, not just the neighbors of the last
    /// observation: at-most-one axioms let a percept rule a hazard out far
    /// from any sensed cell.
    fn reclassify(&mut self) {
        let rules = self.config.hazards.rules.clone();

        for cell in self.dimensions.coordinates() {
            let index = self.dimensions.index_of(cell);

            if self.classifications.get(index) != Classification::Unknown {
                continue;
            }

            let hosted: Vec<CLiteral> = rules
                .iter()
                .map(|rule| self.symbols.hosts(rule.hazard, cell, true))
                .collect();

            // Hazard-present first: under a contradictory clause set both
            // directions prove, and a consumer walking only on ProvenSafe
            // is better served by the hazardous verdict.
            if hosted.iter().any(|literal| self.prover.prove(literal)) {
                self.classifications.mark_hazard(index);
                log::info!(target: targets::CLASSIFY, "{cell} proven hazardous.");
                continue;
            }

            if hosted.iter().all(|literal| self.prover.prove(literal.negate())) {
                self.classifications.mark_safe(index);
                log::info!(target: targets::CLASSIFY, "{cell} proven safe.");
            }
        }
    }
}
