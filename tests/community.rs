use meerkat_sat::{
    community::Partition,
    config::{ClauseSelection, Config, FreebieFilter, TieBreak},
    context::Context,
    reports::Report,
    structures::{formula::Formula, literal::CLiteral},
};

fn clause(literals: &[i32]) -> Vec<CLiteral> {
    literals.iter().map(CLiteral::from).collect()
}

mod guided_solves {
    use super::*;

    /// Two clusters of atoms, clauses mostly within a cluster, satisfiable by the all-true valuation.
    fn clustered_formula() -> Formula {
        Formula::new(
            8,
            vec![
                clause(&[1, 2]),
                clause(&[-1, 3]),
                clause(&[2, -3, 4]),
                clause(&[1, 4]),
                clause(&[5, 6]),
                clause(&[-5, 7]),
                clause(&[6, -7, 8]),
                clause(&[5, 8]),
                clause(&[4, 5]),
            ],
        )
        .unwrap()
    }

    fn clustered_partition(formula: &Formula) -> Partition {
        Partition::derive(formula, &[1, 1, 1, 1, 2, 2, 2, 2]).unwrap()
    }

    #[test]
    fn community_ranked_selection_solves() {
        let formula = clustered_formula();
        let partition = clustered_partition(&formula);

        for seed in [0, 7, 2026] {
            let mut config = Config::default();
            config.seed.value = seed;
            config.selection.clause_selection = ClauseSelection::CommunityRanked;

            let mut ctx = Context::from_config(&formula, config).with_partition(&partition);

            assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
            assert!(formula.satisfied_on(ctx.solution().unwrap()));
        }
    }

    #[test]
    fn every_policy_flag_solves() {
        let formula = clustered_formula();
        let partition = clustered_partition(&formula);

        let mut config = Config::default();
        config.seed.value = 7;
        config.selection.clause_selection = ClauseSelection::CommunityRanked;
        config.selection.freebie_filter = FreebieFilter::SharedCommunity;
        config.selection.tie_break = TieBreak::FirstSeen;
        config.selection.community_tie_preference = true;

        let mut ctx = Context::from_config(&formula, config).with_partition(&partition);

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert!(formula.satisfied_on(ctx.solution().unwrap()));
    }

    #[test]
    fn ranked_selection_without_a_partition_falls_back() {
        let formula = clustered_formula();

        let mut config = Config::default();
        config.selection.clause_selection = ClauseSelection::CommunityRanked;

        let mut ctx = Context::from_config(&formula, config);

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert!(formula.satisfied_on(ctx.solution().unwrap()));
    }
}

mod single_flips {
    use super::*;

    /// The atom whose value differs between the two valuations, which must differ in exactly one place.
    fn flipped_atom(before: &[bool], after: &[bool]) -> u32 {
        let differing: Vec<u32> = (0..before.len())
            .filter(|index| before[*index] != after[*index])
            .map(|index| index as u32)
            .collect();
        assert_eq!(differing.len(), 1, "expected exactly one flip");
        differing[0]
    }

    #[test]
    fn ranked_selection_directs_to_the_larger_group() {
        // One unsatisfied clause dominated by community 1, two by community 2.
        let formula = Formula::new(
            5,
            vec![clause(&[1, 2]), clause(&[3, 4]), clause(&[4, 5])],
        )
        .unwrap();
        let partition = Partition::derive(&formula, &[1, 1, 2, 2, 2]).unwrap();

        let mut config = Config::default();
        config.selection.clause_selection = ClauseSelection::CommunityRanked;

        // The context starts on the all-false valuation, so every clause is unsatisfied.
        let mut ctx = Context::from_config(&formula, config).with_partition(&partition);

        let before = ctx.score_db.valuation().clone();
        ctx.walk_flip();
        let chosen = flipped_atom(&before, ctx.score_db.valuation());

        assert!([3, 4, 5].contains(&chosen));
    }

    #[test]
    fn first_seen_ties_fall_to_clause_order() {
        // Flipping either atom of the unsatisfied clause breaks one unit clause.
        let formula = Formula::new(2, vec![clause(&[1, 2]), clause(&[-1]), clause(&[-2])]).unwrap();

        let mut config = Config::default();
        config.noise.value = 0.0;
        config.selection.tie_break = TieBreak::FirstSeen;

        let mut ctx = Context::from_config(&formula, config);

        let before = ctx.score_db.valuation().clone();
        ctx.walk_flip();

        assert_eq!(flipped_atom(&before, ctx.score_db.valuation()), 1);
    }

    #[test]
    fn community_preference_narrows_a_tie() {
        // As above, with the second atom of the clause sharing the clause's dominant community.
        let formula = Formula::new(
            3,
            vec![clause(&[1, 2, 2]), clause(&[-1]), clause(&[-2])],
        )
        .unwrap();
        let partition = Partition::derive(&formula, &[7, 4, 4]).unwrap();

        let mut config = Config::default();
        config.noise.value = 0.0;
        config.selection.tie_break = TieBreak::FirstSeen;
        config.selection.community_tie_preference = true;

        let mut ctx = Context::from_config(&formula, config).with_partition(&partition);

        let before = ctx.score_db.valuation().clone();
        ctx.walk_flip();

        assert_eq!(flipped_atom(&before, ctx.score_db.valuation()), 2);
    }

    #[test]
    fn a_filtered_freebie_passes_to_a_shared_atom() {
        // Both atoms of the clause are free flips; the first is affiliated to a foreign community.
        let formula = Formula::new(5, vec![clause(&[1, 2, 4])]).unwrap();
        let partition = Partition::derive(&formula, &[3, 2, 9, 2, 3]).unwrap();

        let mut config = Config::default();
        config.selection.freebie_filter = FreebieFilter::SharedCommunity;

        let mut ctx = Context::from_config(&formula, config).with_partition(&partition);

        let before = ctx.score_db.valuation().clone();
        ctx.walk_flip();

        assert_eq!(flipped_atom(&before, ctx.score_db.valuation()), 2);
    }

    #[test]
    fn an_unrestricted_freebie_takes_the_first_atom() {
        let formula = Formula::new(5, vec![clause(&[1, 2, 4])]).unwrap();
        let partition = Partition::derive(&formula, &[3, 2, 9, 2, 3]).unwrap();

        let config = Config::default();

        let mut ctx = Context::from_config(&formula, config).with_partition(&partition);

        let before = ctx.score_db.valuation().clone();
        ctx.walk_flip();

        assert_eq!(flipped_atom(&before, ctx.score_db.valuation()), 1);
    }
}
