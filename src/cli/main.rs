use meerkat_sat::{config::Config, context::Context, reports::Report};

use parse_args::parse_args;

mod parse_args;
mod read;

#[derive(Default)]
struct CliOptions {
    /// Write the satisfying valuation, if one is found.
    model: bool,

    /// A path to a partition file to bias the search with.
    partition: Option<String>,
}

fn main() {
    let mut config = Config::default();
    let mut cli_options = CliOptions::default();

    let args: Vec<String> = std::env::args().collect();

    parse_args(&args, &mut config, &mut cli_options);

    let Some(path) = args.last().filter(|_| args.len() > 1) else {
        println!("c Path to CNF required");
        std::process::exit(1);
    };

    let formula = match read::read_dimacs(path) {
        Ok(formula) => formula,
        Err(e) => {
            println!("c {e}");
            std::process::exit(1);
        }
    };

    println!(
        "c Formula has {} atoms and {} clauses",
        formula.atom_count(),
        formula.clause_count()
    );

    let partition = match &cli_options.partition {
        Some(partition_path) => match read::read_partition(partition_path, &formula) {
            Ok(partition) => Some(partition),
            Err(e) => {
                println!("c {e}");
                std::process::exit(1);
            }
        },
        None => None,
    };

    let mut ctx: Context = Context::from_config(&formula, config);
    if let Some(partition) = &partition {
        ctx = ctx.with_partition(partition);
    }

    let result = match ctx.solve() {
        Ok(report) => report,

        Err(e) => {
            println!("c Solve error: {e:?}");
            std::process::exit(2);
        }
    };

    if result == Report::Satisfiable {
        // The valuation is rechecked against the clauses before anything is claimed.
        let verified = match ctx.solution() {
            Some(valuation) => formula.satisfied_on(valuation),
            None => false,
        };

        if !verified {
            println!("c Valuation failed independent verification");
            std::process::exit(2);
        }

        println!(
            "c Satisfied on try {} after {} flips",
            ctx.tries_used(),
            ctx.flips_used()
        );
    }

    println!("s {}", ctx.report());

    if result == Report::Satisfiable && cli_options.model {
        match ctx.valuation_string() {
            Some(valuation) => println!("v {valuation}"),
            None => {}
        }
    }
}
