use std::collections::HashMap;

use log::debug;

use crate::analyzer::{analyze, AnalysisResult};
use crate::decider::pick_branching_variable;
use crate::formula::Formula;
use crate::literal::Variable;
use crate::propagator::{propagate, PropagationResult};
use crate::trail::Trail;

/// The result of a completed solve: either a model, or a proof of
/// unsatisfiability.
pub enum SolveResult {
    Sat(HashMap<Variable, bool>),
    Unsat,
}

/// Orchestrates decision branching, propagation, conflict analysis and
/// backtracking until the formula is decided.
///
/// The formula grows over the course of a solve as the analyzer learns
/// clauses; `Solver` owns that growing formula together with the trail it
/// drives.
pub struct Solver {
    formula: Formula,
    trail: Trail,
}

impl Solver {
    pub fn new(formula: Formula) -> Solver {
        let trail = Trail::new(formula.num_variables());
        Solver { formula, trail }
    }

    /// The formula as it stands right now, original clauses followed by any
    /// learnt during search. Exposed so callers (and tests) can inspect what
    /// the analyzer added once a solve has run.
    pub fn formula(&self) -> &Formula {
        &self.formula
    }

    /// Runs the CDCL search loop to completion.
    pub fn solve(&mut self) -> SolveResult {
        self.trail.set_decision_level(0);

        if let PropagationResult::Conflict(_) = propagate(&self.formula, &mut self.trail) {
            debug!("conflict during initial propagation at decision level 0");
            return SolveResult::Unsat;
        }

        while let Some((variable, polarity)) =
            pick_branching_variable(&self.formula, &self.trail)
        {
            let decision_level = self.trail.decision_level() + 1;
            self.trail.set_decision_level(decision_level);
            self.trail.assign(variable, polarity, None);
            debug!("decision: variable {variable} = {polarity} at level {decision_level}");

            loop {
                match propagate(&self.formula, &mut self.trail) {
                    PropagationResult::Ok => break,
                    PropagationResult::Conflict(conflict) => {
                        debug!("conflict on clause {conflict}");

                        match analyze(&conflict, &self.trail) {
                            AnalysisResult::Unsat => return SolveResult::Unsat,
                            AnalysisResult::Backjump { level, learnt } => {
                                debug!(
                                    "backjumping from level {} to level {level}, learnt {learnt}",
                                    self.trail.decision_level()
                                );
                                self.formula.add_clause(learnt);
                                self.trail.backtrack(level);
                                self.trail.set_decision_level(level);
                            }
                        }
                    }
                }
            }
        }

        SolveResult::Sat(self.trail.model())
    }
}
