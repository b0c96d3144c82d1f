//! A library for hazard inference in grid-world exploration games.
//!
//! wumpus_kb turns the local percepts of an exploring agent --- "breeze
//! here", "no stench here" --- into a growing set of propositional clauses,
//! and answers, by resolution refutation, whether a cell is provably free of
//! a hazard or provably hosts one. It is the reasoning core of a
//! Wumpus-World style game: the surrounding program supplies percepts and
//! reads per-cell verdicts; everything between is logic.
//!
//! # Orientation
//!
//! The library is designed around two structures, built bottom-up:
//!
//! - The [prover](crate::prover) maintains a monotonically growing set of
//!   clauses in conjunctive normal form and decides whether a queried
//!   literal is a logical consequence of the set, within a per-query step
//!   budget.
//! - The [knowledge base](crate::kb) owns a prover one-to-one. Construction
//!   loads domain axioms --- adjacency biconditionals, mutual exclusivity,
//!   at-most-one-instance constraints --- generated from a
//!   [configuration](crate::config); each observation becomes unit clauses,
//!   after which the classification of every still-unknown cell is
//!   re-derived eagerly.
//!
//! A decision layer reads classifications (never the prover) to pick a
//! direction. Knowledge is monotonic throughout: clauses are never
//! retracted, and a cell classified safe or hazardous never reverts.
//!
//! Useful starting points:
//! - [KnowledgeBase](crate::kb::KnowledgeBase) for the external surface.
//! - The [prover](crate::prover) for the refutation search itself.
//! - [structures](crate::structures) for atoms, literals, and clauses.
//! - [config](crate::config) for the domain rules and the step budget.
//!
//! # Example
//!
//! ```rust
//! # use wumpus_kb::config::Config;
//! # use wumpus_kb::grid::Coordinate;
//! # use wumpus_kb::kb::{Classification, KnowledgeBase};
//! let mut kb = KnowledgeBase::new(3, 3, Config::default());
//!
//! // The agent starts at the origin and senses nothing.
//! assert!(kb.observe(Coordinate::new(0, 0), &[]).is_ok());
//!
//! assert_eq!(kb.classify(Coordinate::new(0, 0)), Ok(Classification::Visited));
//!
//! // No breeze and no stench: both neighbors are provably clear.
//! assert_eq!(
//!     kb.safe_unvisited_neighbors(Coordinate::new(0, 0)).unwrap(),
//!     vec![Coordinate::new(1, 0), Coordinate::new(0, 1)],
//! );
//!
//! // The far corner remains an open question.
//! assert_eq!(kb.classify(Coordinate::new(2, 2)), Ok(Classification::Unknown));
//! ```
//!
//! # Logs
//!
//! To help diagnose issues, calls to [log!](log) are made with a variety of
//! targets so output can be narrowed to relevant parts of the library. The
//! targets are listed in [misc::log]. No log implementation is provided.
//!
//! For example, when used with env_logger:
//! - Logs of the refutation search can be filtered with `RUST_LOG=refutation …`
//! - Classification changes can be found with `RUST_LOG=classify=info …`

pub mod config;
pub mod grid;
pub mod structures;
pub mod symbols;
pub mod types;

pub mod db;
pub mod prover;

pub mod kb;

pub mod misc;
