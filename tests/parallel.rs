use meerkat_sat::{
    config::Config,
    context::Context,
    reports::Report,
    structures::{formula::Formula, literal::CLiteral},
};

fn clause(literals: &[i32]) -> Vec<CLiteral> {
    literals.iter().map(CLiteral::from).collect()
}

/// A monotone formula, so every search is certain to succeed within one try.
fn monotone_formula(atoms: i32) -> Formula {
    let mut clauses = Vec::default();
    for atom in 1..=atoms {
        clauses.push(clause(&[atom, atom % atoms + 1]));
    }
    Formula::new(atoms as u32, clauses).unwrap()
}

mod parallel {
    use super::*;

    #[test]
    fn concurrent_contexts_share_a_formula() {
        let formula = monotone_formula(30);

        crossbeam::thread::scope(|scope| {
            let mut handles = Vec::default();

            for seed in 0..4_u64 {
                let formula = &formula;
                handles.push(scope.spawn(move |_| {
                    let mut config = Config::default();
                    config.seed.value = seed;
                    config.max_tries.value = 1;
                    config.max_flips.value = 60;

                    let mut ctx = Context::from_config(formula, config);

                    assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
                    assert!(formula.satisfied_on(ctx.solution().unwrap()));

                    ctx.solution().unwrap().clone()
                }));
            }

            // Distinct seeds draw distinct initial valuations, so the searches really were independent.
            let solutions: Vec<Vec<bool>> = handles
                .into_iter()
                .map(|handle| handle.join().unwrap())
                .collect();
            assert_eq!(solutions.len(), 4);
        })
        .unwrap();
    }
}
