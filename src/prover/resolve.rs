/*!
The binary resolution step.

Two clauses resolve on a *pivot*: a literal of one whose complement appears
in the other. The resolvent is the union of both clauses with the pivot pair
removed. Every complementary pair between two clauses yields its own
resolvent, and a resolvent may well be tautological --- resolving
`{P, Q}` against `{¬P, ¬Q}` on either pivot leaves the other pair behind ---
so tautologies are discarded here, before a caller sees them.

An *empty* resolvent is a contradiction between the two clauses. It is
reported distinctly, as [Resolution::Refutation], since it terminates any
refutation search on the spot.
*/

use crate::structures::{
    clause::{self, CClause},
    literal::{CLiteral, Literal},
};

/// The outcome of resolving two clauses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// Some complementary pair resolved to the empty clause.
    Refutation,

    /// Every non-tautological resolvent of the pair, possibly none.
    Resolvents(Vec<CClause>),
}

/// Resolve two canonical clauses on every complementary pair.
pub fn resolve(clause_a: &[CLiteral], clause_b: &[CLiteral]) -> Resolution {
    let mut resolvents = Vec::new();

    for pivot in clause_a {
        if !clause::contains_literal(clause_b, &pivot.negate()) {
            continue;
        }

        let resolvent = resolve_on(clause_a, clause_b, pivot);

        if resolvent.is_empty() {
            return Resolution::Refutation;
        }

        if clause::is_tautological(&resolvent) {
            continue;
        }

        resolvents.push(resolvent);
    }

    Resolution::Resolvents(resolvents)
}

/// The canonical resolvent of two canonical clauses on `pivot`, which must
/// appear in `clause_a` with its complement in `clause_b`.
pub(crate) fn resolve_on(
    clause_a: &[CLiteral],
    clause_b: &[CLiteral],
    pivot: &CLiteral,
) -> CClause {
    let complement = pivot.negate();

    let mut resolvent: CClause =
        Vec::with_capacity(clause_a.len() + clause_b.len() - 2);
    resolvent.extend(clause_a.iter().filter(|literal| *literal != pivot).copied());
    resolvent.extend(
        clause_b
            .iter()
            .filter(|literal| **literal != complement)
            .copied(),
    );

    resolvent.sort_unstable();
    resolvent.dedup();
    resolvent
}
