/*!
Configuration of a knowledge base.

All configuration is fixed at construction: the per-query resolution step
budget, and the hazard rules from which the construction-time axioms are
generated. Episodes with different configuration use different knowledge
base instances.

The structures serialize (kebab-case) so a host may dump the effective
configuration alongside a transcript.
*/

use serde::Serialize;

use crate::symbols::{HazardKind, Sensation};

pub mod defaults {
    //! Default configuration values.

    use super::StepBudget;

    /// Default resolution step budget for a single query.
    pub const STEP_BUDGET: StepBudget = 10_000;
}

/// A bound on the resolution steps taken by a single query.
pub type StepBudget = usize;

/// Ties a hazard kind to the sensation it causes in adjacent cells.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct HazardRule {
    /// The hazard kind.
    pub hazard: HazardKind,

    /// The sensation present in every valid neighbor of a host cell, and
    /// absent from any cell with no hosting neighbor.
    pub sensation: Sensation,

    /// Whether at most one instance of the kind exists on the whole grid.
    pub unique: bool,
}

/// The hazard axioms to load when a knowledge base is constructed.
#[derive(Clone, Debug, Serialize)]
pub struct HazardConfig {
    /// One rule per hazard kind of the domain.
    pub rules: Vec<HazardRule>,

    /// Pairs of kinds which cannot share a cell.
    pub exclusive: Vec<(HazardKind, HazardKind)>,
}

impl HazardConfig {
    /// The classic board: any number of pits announced by breezes, a single
    /// wumpus announced by stenches, never both in one cell.
    pub fn classic() -> Self {
        HazardConfig {
            rules: vec![
                HazardRule {
                    hazard: HazardKind::Pit,
                    sensation: Sensation::Breeze,
                    unique: false,
                },
                HazardRule {
                    hazard: HazardKind::Wumpus,
                    sensation: Sensation::Stench,
                    unique: true,
                },
            ],
            exclusive: vec![(HazardKind::Pit, HazardKind::Wumpus)],
        }
    }
}

impl Default for HazardConfig {
    fn default() -> Self {
        HazardConfig::classic()
    }
}

/// The primary configuration structure.
#[derive(Clone, Debug, Serialize)]
pub struct Config {
    /// Resolution step budget applied to each query, where one step is one
    /// attempted pair resolution. Enforced per call: an expensive query
    /// cannot starve later ones beyond its own budget.
    pub step_budget: StepBudget,

    /// The hazard axioms to load at construction.
    pub hazards: HazardConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            step_budget: defaults::STEP_BUDGET,
            hazards: HazardConfig::default(),
        }
    }
}
