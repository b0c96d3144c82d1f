/*!
Clauses, aka. a collection of literals, interpreted as the disjunction of
those literals.

The canonical representation of a clause is a vector of literals sorted by
(atom, polarity) with duplicates collapsed. Canonical form makes equality and
hashing structural, complement membership a binary search, and tautology
detection an adjacency check — a complementary pair of literals is adjacent
once sorted.

- The empty clause is always false, and is the termination signal of a
  refutation. It is never stored.
- A single literal is identified with the clause containing that literal
  (aka. a 'unit' clause).
- A clause containing a complementary pair is a *tautology* and carries no
  information.
*/

use crate::structures::{
    atom::Atom,
    literal::{CLiteral, Literal},
};

/// The clause trait.
pub trait Clause {
    /// Some string representation of the clause.
    fn as_string(&self) -> String;

    /// An iterator over all literals in the clause, order is not guaranteed.
    fn literals(&self) -> impl Iterator<Item = &CLiteral>;

    /// The number of literals in the clause.
    fn size(&self) -> usize;

    /// An iterator over all atoms in the clause, order is not guaranteed.
    fn atoms(&self) -> impl Iterator<Item = Atom>;

    /// The clause in canonical form: sorted by (atom, polarity), duplicates collapsed.
    fn canonical(self) -> CClause;
}

/// The implementation of a clause as a vector of literals.
pub type VClause = Vec<CLiteral>;

/// The canonical implementation of a clause.
pub type CClause = VClause;

impl Clause for VClause {
    fn as_string(&self) -> String {
        self.iter()
            .map(|literal| literal.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        self.iter()
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn atoms(&self) -> impl Iterator<Item = Atom> {
        self.iter().map(|literal| literal.atom())
    }

    fn canonical(mut self) -> CClause {
        self.sort_unstable();
        self.dedup();
        self
    }
}

impl Clause for CLiteral {
    fn as_string(&self) -> String {
        self.to_string()
    }

    fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        std::iter::once(self)
    }

    fn size(&self) -> usize {
        1
    }

    fn atoms(&self) -> impl Iterator<Item = Atom> {
        std::iter::once(self.atom())
    }

    fn canonical(self) -> CClause {
        vec![self]
    }
}

/// Whether a canonical clause contains a complementary pair of literals.
pub fn is_tautological(canonical: &[CLiteral]) -> bool {
    canonical
        .windows(2)
        .any(|pair| pair[0].atom() == pair[1].atom() && pair[0].polarity() != pair[1].polarity())
}

/// Whether a canonical clause contains `literal`.
pub fn contains_literal(canonical: &[CLiteral], literal: &CLiteral) -> bool {
    canonical.binary_search(literal).is_ok()
}
