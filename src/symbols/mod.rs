/*!
The vocabulary of the domain, and the interning of grounded symbols as atoms.

A proposition of the domain is a [Tag] — "hosts hazard kind H", "senses
sensation S" — grounded at a [Coordinate]. The [SymbolTable] interns each
distinct `(coordinate, tag)` pair as a fresh [Atom], so equality and hashing
of propositions are integer operations and distinct symbols can never
collide. The table also keeps the reverse mapping, which exists purely to
label literals in diagnostics.
*/

use std::collections::HashMap;

use serde::Serialize;

use crate::{
    grid::Coordinate,
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
    },
};

/// Kinds of hazard a cell may host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum HazardKind {
    /// A pit. Any number may appear on a board.
    Pit,

    /// The wumpus. At most one roams a classic board.
    Wumpus,
}

impl HazardKind {
    /// A one-character code for labels.
    pub fn code(&self) -> char {
        match self {
            Self::Pit => 'P',
            Self::Wumpus => 'W',
        }
    }
}

impl std::fmt::Display for HazardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pit => write!(f, "Pit"),
            Self::Wumpus => write!(f, "Wumpus"),
        }
    }
}

/// Sensations an agent may perceive at a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Sensation {
    /// Air movement from an adjacent pit.
    Breeze,

    /// The smell of an adjacent wumpus.
    Stench,
}

impl Sensation {
    /// A one-character code for labels.
    pub fn code(&self) -> char {
        match self {
            Self::Breeze => 'B',
            Self::Stench => 'S',
        }
    }
}

impl std::fmt::Display for Sensation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Breeze => write!(f, "Breeze"),
            Self::Stench => write!(f, "Stench"),
        }
    }
}

/// The semantic tag of a proposition, prior to grounding at a coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Tag {
    /// The cell hosts a hazard of the given kind.
    Hosts(HazardKind),

    /// The given sensation is present at the cell.
    Senses(Sensation),
}

/// A grounded proposition: a tag at a coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Symbol {
    /// Where the proposition is grounded.
    pub at: Coordinate,

    /// What the proposition says about the cell.
    pub tag: Tag,
}

/// An interning table from grounded symbols to atoms.
///
/// Interning is injective by construction: the table is keyed by the full
/// symbol, and an atom is only ever issued once.
#[derive(Debug, Default)]
pub struct SymbolTable {
    /// The atom issued for each interned symbol.
    ids: HashMap<Symbol, Atom>,

    /// Symbols by atom, for diagnostics.
    symbols: Vec<Symbol>,
}

impl SymbolTable {
    /// An empty table.
    pub fn new() -> Self {
        SymbolTable::default()
    }

    /// The atom for `symbol`, interning the symbol on first use.
    pub fn atom(&mut self, symbol: Symbol) -> Atom {
        match self.ids.get(&symbol) {
            Some(atom) => *atom,
            None => {
                let atom = self.symbols.len() as Atom;
                self.symbols.push(symbol);
                self.ids.insert(symbol, atom);
                atom
            }
        }
    }

    /// The symbol `atom` was interned from, if any.
    pub fn symbol(&self, atom: Atom) -> Option<Symbol> {
        self.symbols.get(atom as usize).copied()
    }

    /// A count of interned symbols.
    pub fn count(&self) -> usize {
        self.symbols.len()
    }

    /// The literal asserting (or denying) that `at` hosts a hazard of kind `hazard`.
    pub fn hosts(&mut self, hazard: HazardKind, at: Coordinate, polarity: bool) -> CLiteral {
        let atom = self.atom(Symbol {
            at,
            tag: Tag::Hosts(hazard),
        });
        CLiteral::new(atom, polarity)
    }

    /// The literal asserting (or denying) that `sensation` is present at `at`.
    pub fn senses(&mut self, sensation: Sensation, at: Coordinate, polarity: bool) -> CLiteral {
        let atom = self.atom(Symbol {
            at,
            tag: Tag::Senses(sensation),
        });
        CLiteral::new(atom, polarity)
    }

    /// A readable label for `literal`, e.g. `¬W(2, 3)`.
    pub fn label(&self, literal: &CLiteral) -> String {
        let sign = match literal.polarity() {
            true => "",
            false => "¬",
        };

        match self.symbol(literal.atom()) {
            Some(symbol) => {
                let code = match symbol.tag {
                    Tag::Hosts(hazard) => hazard.code(),
                    Tag::Senses(sensation) => sensation.code(),
                };
                format!("{sign}{code}{}", symbol.at)
            }

            None => format!("{sign}{}", literal.atom()),
        }
    }
}
