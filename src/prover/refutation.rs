/*!
Refutation search --- the prover methods which decide entailment.

# Overview

To prove a literal, its negation is added as a unit clause to a working copy
of the clause set, and pairs of clauses sharing a complementary literal are
resolved until the empty clause appears (proved), no novel resolvent can be
generated (not proved), or the step budget runs out (treated as not proved:
resolution over unrestricted clause sets must not be allowed to run
unbounded).

The working copy is transient. A search borrows the permanent clause set,
copies it, and is discarded when the query returns, so queries have no side
effects and a fresh budget applies to each.

# Ordering

Candidate clauses wait in a queue ordered by (length, admission sequence):
unit clauses first, and first-in-first-out among clauses of a length. Unit
preference reaches the short refutations percept reasoning produces quickly,
and the sequence tiebreak keeps the search fully deterministic --- no step
depends on the iteration order of a map.

Partners for a clause under resolution are found through a literal index
over the working copy, maintained as resolvents are admitted, so only
clauses holding a complement of some literal of the current clause are ever
touched.
*/

use std::{
    cmp::Reverse,
    collections::{BinaryHeap, HashMap, HashSet},
};

use crate::{
    config::StepBudget,
    misc::log::targets::{self},
    prover::{resolve, Prover},
    structures::{
        clause::{self, CClause},
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

/// A transient refutation search over a working copy of some clause set.
struct Search {
    /// The working copy, in admission order.
    clauses: Vec<CClause>,

    /// Canonical forms admitted so far, to collapse duplicate resolvents.
    seen: HashSet<CClause>,

    /// Positions (in the working copy) of the clauses containing a literal.
    index: HashMap<CLiteral, Vec<usize>>,

    /// (length, admission sequence) of clauses awaiting resolution.
    queue: BinaryHeap<Reverse<(usize, usize)>>,
}

impl Search {
    /// A search seeded with the permanent clause set of `prover`.
    ///
    /// The working index starts as a translation of the permanent literal
    /// index --- clause keys to working-copy positions --- rather than being
    /// re-derived from clause literals.
    fn over(prover: &Prover) -> Self {
        let db = prover.clause_db();
        let capacity = db.clause_count() + 1;

        let mut positions = HashMap::with_capacity(capacity);
        let mut clauses = Vec::with_capacity(capacity);
        let mut seen = HashSet::with_capacity(capacity);
        let mut queue = BinaryHeap::with_capacity(capacity);

        for (sequence, (key, stored)) in db.entries().enumerate() {
            positions.insert(key, sequence);
            seen.insert(stored.clause().clone());
            queue.push(Reverse((stored.clause().len(), sequence)));
            clauses.push(stored.clause().clone());
        }

        let mut index: HashMap<CLiteral, Vec<usize>> = HashMap::new();
        for (literal, keys) in db.literal_index() {
            // Every indexed key is a stored key, translated above.
            index.insert(*literal, keys.iter().map(|key| positions[key]).collect());
        }

        Search {
            clauses,
            seen,
            index,
            queue,
        }
    }

    /// Admit a novel clause to the working copy, indexing its literals and
    /// queueing it for resolution. Known clauses are skipped.
    fn admit(&mut self, clause: CClause) {
        if self.seen.contains(&clause) {
            return;
        }

        let sequence = self.clauses.len();
        for literal in &clause {
            self.index.entry(*literal).or_default().push(sequence);
        }
        self.queue.push(Reverse((clause.len(), sequence)));
        self.seen.insert(clause.clone());
        self.clauses.push(clause);
    }

    /// Saturate the working copy, returning true on deriving the empty
    /// clause and false on exhausting either the queue or `budget`.
    fn run(&mut self, budget: StepBudget) -> bool {
        let mut steps: StepBudget = 0;

        while let Some(Reverse((_, sequence))) = self.queue.pop() {
            // The clause may be resolved against later admissions, so take a copy.
            let current = self.clauses[sequence].clone();

            for literal in &current {
                let complement = literal.negate();
                let Some(partners) = self.index.get(&complement) else {
                    continue;
                };

                // Snapshot: partners admitted during this pass queue their own turn.
                let partners = partners.clone();

                for partner in partners {
                    if steps == budget {
                        log::debug!(target: targets::REFUTATION, "Budget of {budget} steps exhausted.");
                        return false;
                    }
                    steps += 1;

                    let resolvent =
                        resolve::resolve_on(&current, &self.clauses[partner], literal);

                    if resolvent.is_empty() {
                        log::debug!(target: targets::REFUTATION, "Empty clause after {steps} steps.");
                        return true;
                    }

                    if clause::is_tautological(&resolvent) {
                        continue;
                    }

                    self.admit(resolvent);
                }
            }
        }

        log::debug!(target: targets::REFUTATION, "Saturated after {steps} steps.");
        false
    }
}

impl Prover {
    /// Whether `literal` is entailed by the clause set, within the
    /// configured step budget.
    ///
    /// Failure to prove within the budget is reported as `false`: the
    /// procedure is sound, and complete only up to the budget. A caller
    /// needing proved-false as well should query the negation separately
    /// and read "neither provable" as undetermined.
    pub fn prove(&self, literal: impl std::borrow::Borrow<CLiteral>) -> bool {
        self.prove_within(literal, self.budget)
    }

    /// As [prove](Prover::prove), with a caller-supplied step budget.
    pub fn prove_within(
        &self,
        literal: impl std::borrow::Borrow<CLiteral>,
        budget: StepBudget,
    ) -> bool {
        let literal = *literal.borrow();

        let mut search = Search::over(self);
        search.admit(vec![literal.negate()]);

        let proved = search.run(budget);
        log::debug!(
            target: targets::REFUTATION,
            "{literal} {}.",
            match proved {
                true => "proved",
                false => "not proved",
            }
        );
        proved
    }

    /// Whether any of `alternatives` is entailed by the clause set.
    ///
    /// Alternatives are evaluated independently, short-circuiting on the
    /// first success. A query with zero alternatives fails with
    /// [InvalidQuery](err::ProverError::InvalidQuery).
    pub fn prove_any(&self, alternatives: &[CLiteral]) -> Result<bool, err::ProverError> {
        if alternatives.is_empty() {
            return Err(err::ProverError::InvalidQuery);
        }

        Ok(alternatives.iter().any(|literal| self.prove(literal)))
    }
}
