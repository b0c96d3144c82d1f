/*!
Generation of the construction-time axioms.

Three axiom families, loaded once, before any percept:

1. *Mutual exclusivity*: for each cell and each configured exclusive pair of
   kinds, a two-literal clause forbidding the cell hosting both.
2. *At most one instance*: for each kind marked unique, and every unordered
   pair of distinct cells, a clause forbidding both hosting the kind. This
   family is quadratic in cells and is generated here exactly once, never
   per percept.
3. *Sensory biconditionals*: a sensation at a cell holds exactly when some
   valid neighbor hosts the tied hazard kind. Both directions are needed:
   the sensation implies the disjunction of neighboring hosts (one clause),
   and each neighboring host implies the sensation (one clause per
   neighbor).

Loading also interns every symbol the grid can ground, so later queries
only ever look atoms up.
*/

use crate::{
    db::{ClauseOk, ClauseSource},
    kb::KnowledgeBase,
    misc::log::targets::{self},
    prover::Prover,
    structures::clause::CClause,
};

impl KnowledgeBase {
    /// Generate and store the domain axioms for the configured hazards.
    pub(super) fn load_axioms(&mut self) {
        let rules = self.config.hazards.rules.clone();
        let exclusive = self.config.hazards.exclusive.clone();

        let mut loaded: usize = 0;
        let mut store = |prover: &mut Prover, clause: CClause| {
            if let Ok(ClauseOk::Added) = prover.add_clause_from(clause, ClauseSource::Axiom) {
                loaded += 1;
            }
        };

        // A cell hosts at most one kind of each exclusive pair.
        for cell in self.dimensions.coordinates() {
            for &(first, second) in &exclusive {
                if first == second {
                    continue;
                }

                let clause = vec![
                    self.symbols.hosts(first, cell, false),
                    self.symbols.hosts(second, cell, false),
                ];
                store(&mut self.prover, clause);
            }
        }

        // A unique kind appears in at most one cell of the whole grid.
        let cells: Vec<_> = self.dimensions.coordinates().collect();
        for rule in rules.iter().filter(|rule| rule.unique) {
            for (position, &first) in cells.iter().enumerate() {
                for &second in &cells[position + 1..] {
                    let clause = vec![
                        self.symbols.hosts(rule.hazard, first, false),
                        self.symbols.hosts(rule.hazard, second, false),
                    ];
                    store(&mut self.prover, clause);
                }
            }
        }

        // A sensation holds exactly when some valid neighbor hosts the kind.
        for cell in self.dimensions.coordinates() {
            for rule in &rules {
                let neighbors = self.dimensions.neighbors(cell);

                let mut implied: CClause =
                    vec![self.symbols.senses(rule.sensation, cell, false)];
                implied.extend(
                    neighbors
                        .iter()
                        .map(|&neighbor| self.symbols.hosts(rule.hazard, neighbor, true)),
                );
                store(&mut self.prover, implied);

                for &neighbor in &neighbors {
                    let clause = vec![
                        self.symbols.hosts(rule.hazard, neighbor, false),
                        self.symbols.senses(rule.sensation, cell, true),
                    ];
                    store(&mut self.prover, clause);
                }
            }
        }

        log::info!(
            target: targets::AXIOMS,
            "Loaded {loaded} axiom clauses over {} symbols for a {}×{} grid.",
            self.symbols.count(),
            self.dimensions.width,
            self.dimensions.height,
        );
    }
}
