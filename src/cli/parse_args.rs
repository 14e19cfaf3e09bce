use meerkat_sat::config::{
    ClauseSelection, Config, FreebieFilter, NoiseProbability, Selector, TieBreak,
};

use crate::CliOptions;

/// Parse CLI arguments to a [Config] struct or a [CliOptions] struct.
///
/// If an unrecognised argument or invalid option is found a message is sent and the process is terminated.
pub fn parse_args(args: &[String], cfg: &mut Config, cli_options: &mut CliOptions) {
    'arg_examination: for arg in args.iter().skip(1).rev().skip(1) {
        let mut split = arg.split("=");
        match split.next() {
            Some("--model") | Some("--valuation") => {
                println!("c A model will be written, if one is found.");
                cli_options.model = true;
            }

            // The remaining cases follow a common template.
            // If a value is present, may be parsed appropriately, and is valid, the config is updated.
            // Otherwise, a message is sent.
            //
            // Further, the cases should be in lexicographic order.
            //
            Some("--clause_selection") => match split.next() {
                Some("uniform") => cfg.selection.clause_selection = ClauseSelection::Uniform,
                Some("community") => {
                    println!("c Unsatisfied clauses will be chosen by community rank.");
                    cfg.selection.clause_selection = ClauseSelection::CommunityRanked;
                }
                _ => {
                    println!("clause_selection requires a value of uniform or community");
                    std::process::exit(1);
                }
            },

            Some("--community_preference") => {
                println!("c Greedy choices will prefer the dominant community.");
                cfg.selection.community_tie_preference = true;
            }

            Some("--flips") => {
                let (min, max) = cfg.max_flips.min_max();

                if let Some(request) = split.next() {
                    if let Ok(value) = request.parse::<usize>() {
                        if min <= value && value <= max {
                            println!("c flips set to: {value}");
                            cfg.max_flips.value = value;
                            continue 'arg_examination;
                        }
                    }
                }

                println!("flips requires a value between {min} and {max}");
                std::process::exit(1);
            }

            Some("--freebie") => match split.next() {
                Some("any") => cfg.selection.freebie_filter = FreebieFilter::Unrestricted,
                Some("shared") => {
                    println!("c Freebie flips will be filtered by community.");
                    cfg.selection.freebie_filter = FreebieFilter::SharedCommunity;
                }
                _ => {
                    println!("freebie requires a value of any or shared");
                    std::process::exit(1);
                }
            },

            Some("--noise") => {
                let (min, max) = cfg.noise.min_max();

                if let Some(request) = split.next() {
                    if let Ok(value) = request.parse::<NoiseProbability>() {
                        if min <= value && value <= max {
                            println!("c noise set to: {value}");
                            cfg.noise.value = value;
                            continue 'arg_examination;
                        }
                    }
                }

                println!("noise requires a value between {min} and {max}");
                std::process::exit(1);
            }

            Some("--partition") => match split.next() {
                Some(path) => {
                    println!("c A partition will be read from {path}");
                    cli_options.partition = Some(path.to_owned());
                }
                None => {
                    println!("partition requires a path to a partition file");
                    std::process::exit(1);
                }
            },

            Some("--seed") => {
                if let Some(request) = split.next() {
                    if let Ok(value) = request.parse::<u64>() {
                        println!("c seed set to: {value}");
                        cfg.seed.value = value;
                        continue 'arg_examination;
                    }
                }

                println!("seed requires an unsigned integer value");
                std::process::exit(1);
            }

            Some("--selector") => match split.next() {
                Some("gsat") => {
                    println!("c Flips will be chosen by steepest descent.");
                    cfg.selection.selector = Selector::Gsat;
                }
                Some("walk") => cfg.selection.selector = Selector::Walk,
                _ => {
                    println!("selector requires a value of gsat or walk");
                    std::process::exit(1);
                }
            },

            Some("--tie_break") => match split.next() {
                Some("uniform") => cfg.selection.tie_break = TieBreak::Uniform,
                Some("first") => {
                    println!("c Ties will go to the first atom in clause order.");
                    cfg.selection.tie_break = TieBreak::FirstSeen;
                }
                _ => {
                    println!("tie_break requires a value of uniform or first");
                    std::process::exit(1);
                }
            },

            Some("--tries") => {
                let (min, max) = cfg.max_tries.min_max();

                if let Some(request) = split.next() {
                    if let Ok(value) = request.parse::<usize>() {
                        if min <= value && value <= max {
                            println!("c tries set to: {value}");
                            cfg.max_tries.value = value;
                            continue 'arg_examination;
                        }
                    }
                }

                println!("tries requires a value between {min} and {max}");
                std::process::exit(1);
            }

            Some(unknown) => {
                println!("Unrecognised argument: {unknown}");
                std::process::exit(1);
            }

            None => {}
        }
    }
}
