use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;

use cdcl_sat_solver::solver::{SolveResult, Solver};
use cdcl_sat_solver::{dimacs, Variable};

/// A CDCL based SAT solver (command line solver).
#[derive(Debug, Parser)]
#[command(name = "cdcl", about = "Solve a DIMACS CNF file with a CDCL SAT solver")]
struct Cli {
    /// Path to a DIMACS CNF file.
    cnf_file: PathBuf,

    /// Increase logging verbosity (-v, -vv, ...).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_env("RUST_LOG")
        .init();
}

fn print_result(result: SolveResult) {
    match result {
        SolveResult::Sat(model) => {
            println!("Formula is SAT");

            let mut variables: Vec<Variable> = model.keys().copied().collect();
            variables.sort();

            for variable in variables {
                let value = if model[&variable] { "⊤" } else { "⊥" };
                println!("Variable {variable} = {value}");
            }
        }
        SolveResult::Unsat => {
            println!("Formula is UNSAT.");
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let formula = dimacs::parse_file(&cli.cnf_file)
        .with_context(|| format!("failed to read DIMACS file '{}'", cli.cnf_file.display()))?;

    println!("{formula}\n");

    let mut solver = Solver::new(formula);
    let result = solver.solve();
    print_result(result);

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
