/*!
(The internal representation of) an atom, aka. a proposition.

Each atom is a `u32` issued by the [symbol table](crate::symbols::SymbolTable)
when a grounded symbol — a semantic tag at a coordinate — is first interned.
Atoms are dense from zero, so they double as indices into table-ordered
structures, and their external reading is recovered through the table rather
than carried around the prover.
*/

/// An atom, aka. a proposition: an interned symbol id.
pub type Atom = u32;
