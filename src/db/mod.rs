/*!
A database of clause related things.

The database owns the permanent clause set: a slotmap of canonical clauses
addressed by [ClauseKey], a registry which collapses duplicates, and an index
from each literal to the keys of the clauses containing it. The index is
maintained incrementally on insertion and is what lets
[refutation search](crate::prover) consider only clauses holding a
complement of some literal under resolution, rather than scanning all pairs.

The clause set only grows. Nothing here removes a clause, so keys are stable
and iteration order is insertion order.
*/

use std::collections::{HashMap, HashSet};

use slotmap::{DefaultKey, SlotMap};

use crate::{
    misc::log::targets::{self},
    structures::{
        clause::{self, CClause, Clause},
        literal::CLiteral,
    },
};

/// A key to a stored clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClauseKey(DefaultKey);

/// The source of a stored clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseSource {
    /// A clause added directly through the prover.
    Direct,

    /// A domain axiom, loaded when the knowledge base is constructed.
    Axiom,

    /// A clause derived from a percept observation.
    Percept,
}

/// Ok results when adding a clause to the database.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseOk {
    /// The clause was added to the database.
    Added,

    /// An identical clause is already stored (and so the clause was not added).
    Duplicate,

    /// The clause was a tautology (and so was not added).
    Tautology,
}

/// A stored clause, with its source.
#[derive(Clone, Debug)]
pub struct DBClause {
    clause: CClause,
    source: ClauseSource,
}

impl DBClause {
    /// The stored clause, in canonical form.
    pub fn clause(&self) -> &CClause {
        &self.clause
    }

    /// The source of the stored clause.
    pub fn source(&self) -> ClauseSource {
        self.source
    }
}

/// The clause database.
#[derive(Debug, Default)]
pub struct ClauseDB {
    /// Stored clauses.
    clauses: SlotMap<DefaultKey, DBClause>,

    /// Canonical forms of stored clauses, to collapse duplicates.
    registry: HashSet<CClause>,

    /// Keys of the clauses containing a literal.
    literal_index: HashMap<CLiteral, Vec<ClauseKey>>,
}

impl ClauseDB {
    /// An empty database.
    pub fn new() -> Self {
        ClauseDB::default()
    }

    /// Store a canonical, non-empty clause, keeping the literal index current.
    ///
    /// Tautologies and duplicates are skipped, not stored.
    pub(crate) fn insert(&mut self, clause: CClause, source: ClauseSource) -> ClauseOk {
        debug_assert!(!clause.is_empty());

        if clause::is_tautological(&clause) {
            log::trace!(target: targets::CLAUSE_DB, "Skipped tautology {}", clause.as_string());
            return ClauseOk::Tautology;
        }

        if self.registry.contains(&clause) {
            log::trace!(target: targets::CLAUSE_DB, "Skipped duplicate {}", clause.as_string());
            return ClauseOk::Duplicate;
        }

        self.registry.insert(clause.clone());
        let key = ClauseKey(self.clauses.insert(DBClause {
            clause: clause.clone(),
            source,
        }));
        for literal in clause {
            self.literal_index.entry(literal).or_default().push(key);
        }

        log::trace!(target: targets::CLAUSE_DB, "Stored {source:?} clause {}", self.clauses[key.0].clause.as_string());
        ClauseOk::Added
    }

    /// The stored clause at `key`, if any.
    pub fn get(&self, key: ClauseKey) -> Option<&DBClause> {
        self.clauses.get(key.0)
    }

    /// A count of stored clauses.
    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    /// A count of stored clauses from `source`.
    pub fn source_count(&self, source: ClauseSource) -> usize {
        self.clauses
            .values()
            .filter(|stored| stored.source == source)
            .count()
    }

    /// All stored clauses, in insertion order.
    pub fn clauses(&self) -> impl Iterator<Item = &CClause> {
        self.clauses.values().map(|stored| &stored.clause)
    }

    /// All stored clauses with their keys, in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (ClauseKey, &DBClause)> {
        self.clauses.iter().map(|(key, stored)| (ClauseKey(key), stored))
    }

    /// Keys of the stored clauses containing `literal`, in insertion order.
    pub fn those_containing(&self, literal: &CLiteral) -> &[ClauseKey] {
        self.literal_index
            .get(literal)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The full literal index: each indexed literal with the keys of the
    /// clauses containing it.
    pub(crate) fn literal_index(&self) -> impl Iterator<Item = (&CLiteral, &[ClauseKey])> {
        self.literal_index
            .iter()
            .map(|(literal, keys)| (literal, keys.as_slice()))
    }
}
