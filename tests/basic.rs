use meerkat_sat::{
    config::{Config, Selector},
    context::Context,
    reports::Report,
    structures::{formula::Formula, literal::CLiteral},
};

fn clause(literals: &[i32]) -> Vec<CLiteral> {
    literals.iter().map(CLiteral::from).collect()
}

mod basic {
    use super::*;

    #[test]
    fn no_clauses_no_flips() {
        let formula = Formula::new(3, vec![]).unwrap();

        for selector in [Selector::Gsat, Selector::Walk] {
            let mut config = Config::default();
            config.selection.selector = selector;
            config.max_tries.value = 1;
            config.max_flips.value = 1;

            let mut ctx = Context::from_config(&formula, config);

            assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
            assert_eq!(ctx.tries_used(), 1);
            assert_eq!(ctx.flips_used(), 0);
        }
    }

    #[test]
    fn one_literal() {
        let formula = Formula::new(1, vec![clause(&[1])]).unwrap();

        for selector in [Selector::Gsat, Selector::Walk] {
            for seed in [0, 1, 7, 2026] {
                let mut config = Config::default();
                config.selection.selector = selector;
                config.seed.value = seed;

                let mut ctx = Context::from_config(&formula, config);

                assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
                assert_eq!(ctx.tries_used(), 1);
                assert!(ctx.flips_used() <= 1);
                assert!(formula.satisfied_on(ctx.solution().unwrap()));
            }
        }
    }

    #[test]
    fn conflicting_units_exhaust_the_budget() {
        let formula = Formula::new(1, vec![clause(&[1]), clause(&[-1])]).unwrap();

        for selector in [Selector::Gsat, Selector::Walk] {
            for noise in [0.0, 0.5, 1.0] {
                let mut config = Config::default();
                config.selection.selector = selector;
                config.noise.value = noise;
                config.max_tries.value = 3;
                config.max_flips.value = 5;

                let mut ctx = Context::from_config(&formula, config);

                assert_eq!(ctx.solve(), Ok(Report::Exhausted));
                assert_eq!(ctx.tries_used(), 3);
                assert_eq!(ctx.flips_used(), 5);
                assert_eq!(ctx.solution(), None);
                assert_eq!(ctx.valuation_string(), None);
            }
        }
    }

    #[test]
    fn a_small_scenario_for_every_selector() {
        let formula = Formula::new(
            2,
            vec![clause(&[1, 2]), clause(&[-1, 2]), clause(&[1, -2])],
        )
        .unwrap();

        for selector in [Selector::Gsat, Selector::Walk] {
            for seed in [0, 3, 7, 11, 2026] {
                let mut config = Config::default();
                config.selection.selector = selector;
                config.seed.value = seed;
                config.max_tries.value = 10;
                config.max_flips.value = 10;

                let mut ctx = Context::from_config(&formula, config);

                assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
                assert!(formula.satisfied_on(ctx.solution().unwrap()));
            }
        }
    }

    #[test]
    fn solves_repeat() {
        let formula = Formula::new(
            2,
            vec![clause(&[1, 2]), clause(&[-1, 2]), clause(&[1, -2])],
        )
        .unwrap();

        let mut ctx = Context::from_config(&formula, Config::default());

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        let first = ctx.solution().unwrap().clone();

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert!(formula.satisfied_on(ctx.solution().unwrap()));
        assert!(formula.satisfied_on(&first));
    }

    #[test]
    fn zero_budgets_are_rejected() {
        let formula = Formula::new(1, vec![clause(&[1])]).unwrap();

        let mut config = Config::default();
        config.max_tries.value = 0;

        let mut ctx = Context::from_config(&formula, config);
        assert!(ctx.solve().is_err());
        assert_eq!(ctx.report(), Report::Unknown);
    }

    #[test]
    fn reproducible_given_a_seed() {
        let formula = Formula::new(
            4,
            vec![
                clause(&[1, 2, -3]),
                clause(&[-1, 3, 4]),
                clause(&[2, -3, -4]),
                clause(&[-2, 3, -4]),
            ],
        )
        .unwrap();

        let mut config = Config::default();
        config.seed.value = 7;

        let mut first = Context::from_config(&formula, config.clone());
        let mut second = Context::from_config(&formula, config);

        assert_eq!(first.solve(), second.solve());
        assert_eq!(first.solution(), second.solution());
        assert_eq!(first.tries_used(), second.tries_used());
        assert_eq!(first.flips_used(), second.flips_used());
    }
}

mod planted {
    use super::*;

    /// A monotone formula: pairs of positive literals chained in a cycle.
    ///
    /// With no negative literal anywhere, a flip to true breaks nothing, so any unsatisfied
    /// clause offers both selectors a strictly improving move and success is certain within
    /// one flip per clause.
    fn monotone_formula(atoms: i32) -> Formula {
        let mut clauses = Vec::default();
        for atom in 1..=atoms {
            clauses.push(clause(&[atom, atom % atoms + 1]));
        }
        Formula::new(atoms as u32, clauses).unwrap()
    }

    /// A formula satisfied by the all-true valuation: every clause holds a positive literal.
    fn planted_formula(atoms: i32) -> Formula {
        let mut clauses = Vec::default();
        for index in 0..atoms * 2 {
            let a = index % atoms + 1;
            let b = (index * 3 + 1) % atoms + 1;
            let c = (index * 7 + 2) % atoms + 1;
            clauses.push(clause(&[a, -b, c]));
        }
        Formula::new(atoms as u32, clauses).unwrap()
    }

    #[test]
    fn monotone_formulas_ascend_for_every_selector() {
        let formula = monotone_formula(12);

        for selector in [Selector::Gsat, Selector::Walk] {
            for seed in [0, 7, 2026] {
                let mut config = Config::default();
                config.selection.selector = selector;
                config.seed.value = seed;
                config.max_tries.value = 1;
                config.max_flips.value = 24;

                let mut ctx = Context::from_config(&formula, config);

                assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
                assert!(formula.satisfied_on(ctx.solution().unwrap()));
            }
        }
    }

    #[test]
    fn walk_finds_a_planted_solution() {
        let formula = planted_formula(20);

        let mut config = Config::default();
        config.seed.value = 2026;
        config.max_tries.value = 20;
        config.max_flips.value = 10_000;

        let mut ctx = Context::from_config(&formula, config);

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert!(formula.satisfied_on(ctx.solution().unwrap()));
    }
}
