//! The abstract elements of a clause set: atoms, literals, and clauses.

pub mod atom;
pub mod clause;
pub mod literal;
