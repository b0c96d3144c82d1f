use wumpus_kb::{
    config::{Config, HazardConfig, HazardRule},
    grid::Coordinate,
    kb::{Classification, KnowledgeBase},
    symbols::{HazardKind, Sensation},
    types::err::{KbError, Violation},
};

fn at(x: usize, y: usize) -> Coordinate {
    Coordinate::new(x, y)
}

mod construction {
    use super::*;

    #[test]
    fn classic_axiom_count() {
        // On 2×2: 4 exclusivity clauses, C(4, 2) = 6 at-most-one-wumpus
        // clauses, and per rule 4 sensation-implies-hosts clauses plus 8
        // host-implies-sensation clauses (each cell has two neighbors).
        let kb = KnowledgeBase::new(2, 2, Config::default());
        assert_eq!(kb.clause_count(), 4 + 6 + 2 * (4 + 8));
    }

    #[test]
    fn all_cells_start_unknown() {
        let kb = KnowledgeBase::new(3, 3, Config::default());

        for cell in kb.dimensions().coordinates() {
            assert_eq!(kb.classify(cell), Ok(Classification::Unknown));
        }
    }
}

mod observation {
    use super::*;

    #[test]
    fn out_of_bounds_everywhere() {
        let mut kb = KnowledgeBase::new(2, 2, Config::default());
        let outside = at(2, 0);

        assert_eq!(kb.observe(outside, &[]), Err(KbError::OutOfBounds(outside)));
        assert_eq!(kb.classify(outside), Err(KbError::OutOfBounds(outside)));
        assert_eq!(kb.percept(outside), Err(KbError::OutOfBounds(outside)));
        assert_eq!(
            kb.safe_unvisited_neighbors(outside),
            Err(KbError::OutOfBounds(outside))
        );
    }

    #[test]
    fn quiet_cell_clears_neighbors() {
        let mut kb = KnowledgeBase::new(3, 3, Config::default());
        assert!(kb.observe(at(0, 0), &[]).is_ok());

        assert_eq!(kb.classify(at(0, 0)), Ok(Classification::Visited));
        assert_eq!(kb.classify(at(1, 0)), Ok(Classification::ProvenSafe));
        assert_eq!(kb.classify(at(0, 1)), Ok(Classification::ProvenSafe));
        assert_eq!(kb.classify(at(2, 2)), Ok(Classification::Unknown));

        let percept = kb.percept(at(0, 0)).unwrap().unwrap();
        assert_eq!(percept.sensations().count(), 0);
    }

    #[test]
    fn observation_adds_one_unit_per_proposition() {
        let mut kb = KnowledgeBase::new(2, 2, Config::default());
        let axioms = kb.clause_count();

        assert!(kb.observe(at(0, 0), &[]).is_ok());

        // ¬Pit, ¬Wumpus, ¬Breeze, ¬Stench at the observed cell.
        assert_eq!(kb.clause_count(), axioms + 4);
    }

    #[test]
    fn repeat_observation_is_a_noop() {
        let mut kb = KnowledgeBase::new(3, 3, Config::default());

        assert!(kb.observe(at(0, 0), &[]).is_ok());
        let clauses = kb.clause_count();
        let verdicts: Vec<_> = kb
            .dimensions()
            .coordinates()
            .map(|cell| kb.classify(cell))
            .collect();

        assert!(kb.observe(at(0, 0), &[]).is_ok());

        assert_eq!(kb.clause_count(), clauses);
        for (cell, verdict) in kb.dimensions().coordinates().zip(verdicts) {
            assert_eq!(kb.classify(cell), verdict);
        }
    }

    #[test]
    fn conflicting_reobservation_fails_loudly() {
        let mut kb = KnowledgeBase::new(3, 3, Config::default());
        assert!(kb.observe(at(0, 0), &[]).is_ok());

        assert_eq!(
            kb.observe(at(0, 0), &[Sensation::Breeze]),
            Err(KbError::ContractViolation(Violation::PerceptConflict(at(
                0, 0
            ))))
        );
    }

    #[test]
    fn foreign_sensation_fails_loudly() {
        let config = Config {
            hazards: HazardConfig {
                rules: vec![HazardRule {
                    hazard: HazardKind::Wumpus,
                    sensation: Sensation::Stench,
                    unique: true,
                }],
                exclusive: Vec::new(),
            },
            ..Config::default()
        };
        let mut kb = KnowledgeBase::new(3, 3, config);

        assert_eq!(
            kb.observe(at(0, 0), &[Sensation::Breeze]),
            Err(KbError::ContractViolation(Violation::ForeignSensation(
                Sensation::Breeze
            )))
        );
        // Nothing was recorded by the failed call.
        assert_eq!(kb.classify(at(0, 0)), Ok(Classification::Unknown));
    }
}

mod classification {
    use super::*;

    #[test]
    fn verdicts_are_monotone() {
        // A hazard-free world: every percept is empty.
        let mut kb = KnowledgeBase::new(3, 3, Config::default());

        assert!(kb.observe(at(0, 0), &[]).is_ok());
        let settled: Vec<_> = kb
            .dimensions()
            .coordinates()
            .filter(|&cell| kb.classify(cell) != Ok(Classification::Unknown))
            .collect();

        assert!(kb.observe(at(1, 0), &[]).is_ok());
        assert!(kb.observe(at(1, 1), &[]).is_ok());

        for cell in settled {
            assert_ne!(kb.classify(cell), Ok(Classification::Unknown));
        }
        assert_eq!(kb.classify(at(1, 0)), Ok(Classification::Visited));
    }

    #[test]
    fn safe_neighbors_listed_in_scan_order() {
        let mut kb = KnowledgeBase::new(3, 3, Config::default());
        assert!(kb.observe(at(1, 1), &[]).is_ok());

        assert_eq!(
            kb.safe_unvisited_neighbors(at(1, 1)).unwrap(),
            vec![at(1, 0), at(0, 1), at(2, 1), at(1, 2)],
        );
    }

    #[test]
    fn visited_neighbors_are_not_listed() {
        let mut kb = KnowledgeBase::new(3, 3, Config::default());
        assert!(kb.observe(at(1, 1), &[]).is_ok());
        assert!(kb.observe(at(1, 0), &[]).is_ok());

        assert_eq!(
            kb.safe_unvisited_neighbors(at(1, 1)).unwrap(),
            vec![at(0, 1), at(2, 1), at(1, 2)],
        );
    }

    #[test]
    fn a_domain_without_hazards_is_all_safe() {
        let config = Config {
            hazards: HazardConfig {
                rules: Vec::new(),
                exclusive: Vec::new(),
            },
            ..Config::default()
        };
        let mut kb = KnowledgeBase::new(2, 2, config);

        assert!(kb.observe(at(0, 0), &[]).is_ok());

        assert_eq!(kb.classify(at(0, 0)), Ok(Classification::Visited));
        for cell in [at(1, 0), at(0, 1), at(1, 1)] {
            assert_eq!(kb.classify(cell), Ok(Classification::ProvenSafe));
        }
    }

    #[test]
    fn an_exhausted_budget_leaves_cells_unknown() {
        let config = Config {
            step_budget: 0,
            ..Config::default()
        };
        let mut kb = KnowledgeBase::new(3, 3, config);

        assert!(kb.observe(at(0, 0), &[]).is_ok());

        assert_eq!(kb.classify(at(0, 0)), Ok(Classification::Visited));
        assert_eq!(kb.classify(at(1, 0)), Ok(Classification::Unknown));
    }
}
