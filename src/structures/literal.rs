/*!
Literals are atoms paired with a (boolean) polarity.

The canonical implementation of the literal trait is the [CLiteral]
structure. Two literals are *complementary* when they share an atom and
differ in polarity.

```rust
# use wumpus_kb::structures::literal::{CLiteral, Literal};
let literal = CLiteral::new(79, true);

assert!(literal.polarity());
assert_eq!(literal.atom(), 79);
assert_eq!(-literal, literal.negate());
assert!(literal != literal.negate());
```

Literals are ordered by atom and then polarity, with `false` (strictly) less
than `true`, and are hashable so clause sets and indices may be keyed by them.
*/

use crate::structures::atom::Atom;

/// Something which has methods for returning an atom and a polarity, etc.
pub trait Literal: std::cmp::Ord + std::hash::Hash {
    /// A fresh literal, specified by pairing an atom with a boolean.
    fn new(atom: Atom, polarity: bool) -> Self;

    /// The negation of the literal.
    fn negate(&self) -> Self;

    /// The atom of the literal.
    fn atom(&self) -> Atom;

    /// The polarity of the literal.
    fn polarity(&self) -> bool;

    /// The literal in its canonical form of an atom paired with a boolean.
    fn canonical(&self) -> CLiteral;
}

/// The canonical representation of a literal: an atom paired with a boolean.
// Field order fixes the derived Ord: atom first, then polarity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CLiteral {
    /// The atom of the literal.
    atom: Atom,

    /// The polarity of the literal.
    polarity: bool,
}

impl Literal for CLiteral {
    fn new(atom: Atom, polarity: bool) -> Self {
        CLiteral { atom, polarity }
    }

    fn negate(&self) -> Self {
        CLiteral {
            atom: self.atom,
            polarity: !self.polarity,
        }
    }

    fn atom(&self) -> Atom {
        self.atom
    }

    fn polarity(&self) -> bool {
        self.polarity
    }

    fn canonical(&self) -> CLiteral {
        *self
    }
}

impl std::ops::Neg for CLiteral {
    type Output = CLiteral;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl std::fmt::Display for CLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.polarity {
            true => write!(f, "{}", self.atom),
            false => write!(f, "-{}", self.atom),
        }
    }
}
