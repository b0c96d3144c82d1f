use wumpus_kb::{
    db::{ClauseOk, ClauseSource},
    prover::Prover,
    structures::literal::{CLiteral, Literal},
    types::err::ProverError,
};

fn lit(atom: u32, polarity: bool) -> CLiteral {
    CLiteral::new(atom, polarity)
}

mod basic {
    use super::*;

    #[test]
    fn empty_prover_proves_nothing() {
        let prover = Prover::default();

        assert!(!prover.prove(lit(0, true)));
        assert!(!prover.prove(lit(0, false)));
    }

    #[test]
    fn single_fact() {
        let mut prover = Prover::default();
        assert_eq!(Ok(ClauseOk::Added), prover.add_clause(lit(0, true)));

        assert!(prover.prove(lit(0, true)));
        assert!(!prover.prove(lit(0, false)));
    }

    #[test]
    fn unit_propagation() {
        let (p, q) = (lit(0, true), lit(1, true));

        let mut prover = Prover::default();
        assert!(prover.add_clause(vec![-p, q]).is_ok());
        assert!(prover.add_clause(p).is_ok());

        assert!(prover.prove(q));
        assert!(!prover.prove(-q));
    }

    #[test]
    fn chain_reasoning() {
        let (p, q, r) = (lit(0, true), lit(1, true), lit(2, true));

        let mut prover = Prover::default();
        assert!(prover.add_clause(vec![-p, q]).is_ok());
        assert!(prover.add_clause(vec![-q, r]).is_ok());
        assert!(prover.add_clause(p).is_ok());

        assert!(prover.prove(r));
    }

    #[test]
    fn soundness_on_a_satisfiable_set() {
        // P, Q, R all true satisfies the set, so no negation is entailed.
        let (p, q, r) = (lit(0, true), lit(1, true), lit(2, true));

        let mut prover = Prover::default();
        assert!(prover.add_clause(vec![-p, q]).is_ok());
        assert!(prover.add_clause(vec![-q, r]).is_ok());
        assert!(prover.add_clause(p).is_ok());

        for negation in [-p, -q, -r] {
            assert!(!prover.prove(negation));
        }
    }

    #[test]
    fn repeated_queries_agree() {
        let (p, q) = (lit(0, true), lit(1, true));

        let mut prover = Prover::default();
        assert!(prover.add_clause(vec![-p, q]).is_ok());
        assert!(prover.add_clause(p).is_ok());

        for _ in 0..3 {
            assert!(prover.prove(q));
            assert!(!prover.prove(-q));
        }
        assert_eq!(prover.clause_count(), 2);
    }
}

mod clause_management {
    use super::*;

    #[test]
    fn tautology_discarded() {
        let a = lit(0, true);

        let mut prover = Prover::default();
        assert_eq!(Ok(ClauseOk::Tautology), prover.add_clause(vec![a, -a]));
        assert_eq!(prover.clause_count(), 0);
    }

    #[test]
    fn duplicate_collapsed() {
        let (a, b) = (lit(0, true), lit(1, true));

        let mut prover = Prover::default();
        assert_eq!(Ok(ClauseOk::Added), prover.add_clause(vec![a, b]));
        assert_eq!(Ok(ClauseOk::Duplicate), prover.add_clause(vec![b, a]));
        assert_eq!(prover.clause_count(), 1);
        assert_eq!(prover.clause_db().source_count(ClauseSource::Direct), 1);
    }

    #[test]
    fn duplicate_literals_collapse() {
        let (a, b) = (lit(0, true), lit(1, true));

        let mut prover = Prover::default();
        assert!(prover.add_clause(vec![a, a, b, b]).is_ok());

        let stored = prover.clause_db().clauses().next().unwrap();
        assert_eq!(stored.len(), 2);
    }

    #[test]
    fn empty_clause_invalid() {
        let mut prover = Prover::default();
        assert_eq!(
            Err(ProverError::InvalidClause),
            prover.add_clause(Vec::<CLiteral>::new())
        );
    }
}

mod resolution {
    use super::*;
    use wumpus_kb::{
        prover::{resolve::resolve, Resolution},
        structures::clause::Clause,
    };

    #[test]
    fn complementary_units_refute() {
        let p = lit(0, true);

        assert_eq!(
            Resolution::Refutation,
            resolve(&p.canonical(), &(-p).canonical())
        );
    }

    #[test]
    fn single_pivot_resolvent() {
        let (p, q, r) = (lit(0, true), lit(1, true), lit(2, true));

        let left = vec![p, q].canonical();
        let right = vec![-p, r].canonical();

        assert_eq!(
            Resolution::Resolvents(vec![vec![q, r].canonical()]),
            resolve(&left, &right)
        );
    }

    #[test]
    fn tautological_resolvents_discarded() {
        // Both pivots of {P, Q} × {¬P, ¬Q} leave the other pair behind.
        let (p, q) = (lit(0, true), lit(1, true));

        let left = vec![p, q].canonical();
        let right = vec![-p, -q].canonical();

        assert_eq!(Resolution::Resolvents(Vec::new()), resolve(&left, &right));
    }
}

mod refutation {
    use super::*;

    #[test]
    fn contradiction_explodes() {
        // An inconsistent set entails everything, including unrelated literals.
        let (a, b) = (lit(0, true), lit(1, true));

        let mut prover = Prover::default();
        assert!(prover.add_clause(a).is_ok());
        assert!(prover.add_clause(-a).is_ok());

        assert!(prover.prove(b));
        assert!(prover.prove(-b));
    }

    #[test]
    fn disjunctive_queries_check_alternatives_independently() {
        let (a, b, c, d) = (lit(0, true), lit(1, true), lit(2, true), lit(3, true));

        let mut prover = Prover::default();
        assert!(prover.add_clause(a).is_ok());

        assert_eq!(Ok(true), prover.prove_any(&[a, c]));
        assert_eq!(Ok(false), prover.prove_any(&[c, d]));

        // {B, C} entails neither B nor C alone.
        assert!(prover.add_clause(vec![b, c]).is_ok());
        assert_eq!(Ok(false), prover.prove_any(&[b, c]));
    }

    #[test]
    fn empty_disjunction_invalid() {
        let prover = Prover::default();
        assert_eq!(Err(ProverError::InvalidQuery), prover.prove_any(&[]));
    }
}

mod budget {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn zero_budget_proves_nothing() {
        let z = lit(0, true);

        let mut prover = Prover::default();
        assert!(prover.add_clause(z).is_ok());

        assert!(!prover.prove_within(z, 0));
        assert!(prover.prove(z));
    }

    #[test]
    fn exhaustion_reads_as_unproved() {
        // A consistent pile of random implications over ordered atoms: no
        // positive unit exists, so nothing positive is ever provable, however
        // many resolvents the search wades through.
        let mut rng = StdRng::seed_from_u64(0xA4);

        let mut prover = Prover::default();
        let mut added = 0;
        while added < 120 {
            let i: u32 = rng.gen_range(0..39);
            let j: u32 = rng.gen_range(i + 1..40);
            if let Ok(ClauseOk::Added) = prover.add_clause(vec![lit(i, false), lit(j, true)]) {
                added += 1;
            }
        }

        assert!(!prover.prove_within(lit(39, true), 10));
        assert!(!prover.prove(lit(39, true)));
    }
}
