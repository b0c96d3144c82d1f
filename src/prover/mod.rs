/*!
The resolution prover --- a monotonically growing clause set and the
procedures which decide entailment over it.

A [Prover] owns a [clause database](crate::db::ClauseDB) and answers whether
a literal (or any of a disjunction of alternatives) is a logical consequence
of the stored clauses, by resolution refutation. Queries never
mutate the permanent clause set, and for identical clause sets and queries
return identical results.

The prover is deliberately narrow: clauses go in through [add_clause](Prover::add_clause),
truth comes out through [prove](Prover::prove) and friends. How clauses are
obtained --- axioms, percepts --- is the business of the
[knowledge base](crate::kb).
*/

pub mod resolve;
pub use resolve::Resolution;

mod refutation;

use crate::{
    config::{defaults, StepBudget},
    db::{ClauseDB, ClauseOk, ClauseSource},
    structures::clause::Clause,
    types::err::{self},
};

/// The resolution prover: a clause set together with a step budget for queries.
#[derive(Debug)]
pub struct Prover {
    /// Resolution steps allowed to a single query.
    budget: StepBudget,

    /// The permanent clause set.
    clause_db: ClauseDB,
}

impl Default for Prover {
    fn default() -> Self {
        Prover::new(defaults::STEP_BUDGET)
    }
}

impl Prover {
    /// An empty prover whose queries are bounded by `budget` steps each.
    pub fn new(budget: StepBudget) -> Self {
        Prover {
            budget,
            clause_db: ClauseDB::new(),
        }
    }

    /// Add a clause to the permanent clause set.
    ///
    /// The input is canonicalized. Tautologies are discarded (they are
    /// logically vacuous, not an error) and duplicates are collapsed; both
    /// outcomes are reported through [ClauseOk]. An empty input fails with
    /// [InvalidClause](err::ProverError::InvalidClause).
    pub fn add_clause(&mut self, clause: impl Clause) -> Result<ClauseOk, err::ProverError> {
        self.add_clause_from(clause, ClauseSource::Direct)
    }

    /// As [add_clause](Prover::add_clause), recording the source of the clause.
    pub fn add_clause_from(
        &mut self,
        clause: impl Clause,
        source: ClauseSource,
    ) -> Result<ClauseOk, err::ProverError> {
        if clause.size() == 0 {
            return Err(err::ProverError::InvalidClause);
        }

        Ok(self.clause_db.insert(clause.canonical(), source))
    }

    /// A count of stored clauses.
    pub fn clause_count(&self) -> usize {
        self.clause_db.clause_count()
    }

    /// Read access to the clause database.
    pub fn clause_db(&self) -> &ClauseDB {
        &self.clause_db
    }

    /// The step budget applied to each query.
    pub fn budget(&self) -> StepBudget {
        self.budget
    }
}
