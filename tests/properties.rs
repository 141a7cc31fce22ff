//! Property tests over the invariants from SPEC_FULL.md §8: soundness of any
//! SAT verdict against the *original* clauses, entailment of every learnt
//! clause by the original formula, and determinism of the full model (not
//! just the SAT/UNSAT verdict) across repeat runs on byte-identical input.

use proptest::collection::vec;
use proptest::prelude::*;

use cdcl_sat_solver::clause::Clause;
use cdcl_sat_solver::literal::{Literal, Variable};
use cdcl_sat_solver::solver::{SolveResult, Solver};
use cdcl_sat_solver::Formula;

const MAX_VARIABLES: u32 = 5;
const MAX_CLAUSE_LEN: usize = 3;
const MAX_CLAUSES: usize = 8;

fn arbitrary_literal() -> impl Strategy<Value = Literal> {
    (1..=MAX_VARIABLES, any::<bool>())
        .prop_map(|(id, negated)| Literal::new(Variable::from_dimacs(id), negated))
}

fn arbitrary_clause() -> impl Strategy<Value = Clause> {
    vec(arbitrary_literal(), 1..=MAX_CLAUSE_LEN).prop_map(Clause::new)
}

fn arbitrary_formula() -> impl Strategy<Value = Formula> {
    vec(arbitrary_clause(), 0..=MAX_CLAUSES)
        .prop_map(|clauses| Formula::with_clauses(MAX_VARIABLES as usize, clauses))
}

fn clause_satisfied(clause: &Clause, model: &std::collections::HashMap<Variable, bool>) -> bool {
    clause.literals().iter().any(|&literal| {
        model
            .get(&literal.variable())
            .map(|&value| value ^ literal.negated())
            .unwrap_or(false)
    })
}

/// A full truth assignment over `1..=MAX_VARIABLES`, indexed by `variable.index()`.
fn assignment_from_mask(mask: u32, num_variables: u32) -> Vec<bool> {
    (0..num_variables).map(|i| (mask >> i) & 1 == 1).collect()
}

fn literal_holds(literal: Literal, assignment: &[bool]) -> bool {
    assignment[literal.variable().index()] ^ literal.negated()
}

fn clause_holds(clause: &Clause, assignment: &[bool]) -> bool {
    clause.literals().iter().any(|&literal| literal_holds(literal, assignment))
}

/// Brute-force entailment check, tractable at `MAX_VARIABLES == 5`: `clause` is
/// a logical consequence of `premises` iff every assignment over all
/// variables that satisfies every premise also satisfies `clause`.
fn is_entailed_by(clause: &Clause, premises: &[Clause], num_variables: u32) -> bool {
    (0..(1u32 << num_variables)).all(|mask| {
        let assignment = assignment_from_mask(mask, num_variables);
        let premises_hold = premises.iter().all(|premise| clause_holds(premise, &assignment));
        !premises_hold || clause_holds(clause, &assignment)
    })
}

proptest! {
    #[test]
    fn sat_models_satisfy_every_original_clause(formula in arbitrary_formula()) {
        let original_clauses = formula.clauses().to_vec();

        let mut solver = Solver::new(formula);
        if let SolveResult::Sat(model) = solver.solve() {
            for clause in &original_clauses {
                prop_assert!(clause_satisfied(clause, &model));
            }
        }
    }

    #[test]
    fn learnt_clauses_are_entailed_by_the_original_formula(formula in arbitrary_formula()) {
        let original_clauses = formula.clauses().to_vec();
        let original_len = original_clauses.len();

        let mut solver = Solver::new(formula);
        let _ = solver.solve();

        for learnt in &solver.formula().clauses()[original_len..] {
            prop_assert!(is_entailed_by(learnt, &original_clauses, MAX_VARIABLES));
        }
    }

    #[test]
    fn solving_is_deterministic(formula in arbitrary_formula()) {
        let clauses = formula.clauses().to_vec();
        let num_variables = formula.num_variables();

        let mut first_solver = Solver::new(Formula::with_clauses(num_variables, clauses.clone()));
        let mut second_solver = Solver::new(Formula::with_clauses(num_variables, clauses));

        let sorted_model = |model: std::collections::HashMap<Variable, bool>| {
            let mut entries: Vec<(Variable, bool)> = model.into_iter().collect();
            entries.sort_by_key(|&(variable, _)| variable);
            entries
        };

        match (first_solver.solve(), second_solver.solve()) {
            (SolveResult::Sat(first_model), SolveResult::Sat(second_model)) => {
                prop_assert_eq!(sorted_model(first_model), sorted_model(second_model));
            }
            (SolveResult::Unsat, SolveResult::Unsat) => {}
            _ => prop_assert!(false, "repeat solves of identical input disagreed on SAT/UNSAT"),
        }
    }
}
