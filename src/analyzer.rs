use std::collections::HashSet;

use crate::clause::Clause;
use crate::literal::{Literal, Variable};
use crate::trail::Trail;

/// Outcome of conflict analysis: either a proof of unsatisfiability, or a
/// learnt clause together with the decision level to backjump to.
pub enum AnalysisResult {
    Unsat,
    Backjump { level: usize, learnt: Clause },
}

/// Finds a variable occurring with one polarity in `a` and the complementary
/// polarity in `b` — one occurrence from each clause, not merely both
/// polarities present somewhere in their union (which a tautology internal to
/// a single input clause could trigger without this being a true resolution
/// step).
fn find_resolvent(a: &Clause, b: &Clause) -> Option<Variable> {
    a.literals()
        .iter()
        .find(|&&literal| b.contains(literal.complement()))
        .map(|literal| literal.variable())
}

/// Resolves `a` and `b` on `variable`: the union of their literals, minus both
/// polarities of `variable`.
fn resolve(a: &Clause, b: &Clause, variable: Variable) -> Clause {
    a.literals()
        .iter()
        .chain(b.literals())
        .filter(|literal| literal.variable() != variable)
        .copied()
        .collect()
}

/// Performs 1UIP conflict analysis at the current decision level of `trail`.
///
/// `conflict` is the unsatisfied clause the propagator returned. Per §4.5: a
/// level-0 conflict proves unsatisfiability outright; otherwise the conflict
/// clause is resolved against antecedents of level-d forced assignments,
/// latest-assigned first, until exactly one level-d literal remains, and the
/// backjump level is the shallowest level at which the learnt clause is unit.
pub fn analyze(conflict: &Clause, trail: &Trail) -> AnalysisResult {
    let conflict_level = trail.decision_level();

    if conflict_level == 0 {
        return AnalysisResult::Unsat;
    }

    let mut learnt = conflict.clone();

    let mut remaining: Vec<Variable> = trail
        .forced_entries_at_level(conflict_level)
        .into_iter()
        .map(|(variable, _)| variable)
        .collect();

    let level_d_literal_count = |clause: &Clause, trail: &Trail| -> usize {
        clause
            .literals()
            .iter()
            .filter(|literal| {
                trail
                    .entry(literal.variable())
                    .map(|entry| entry.decision_level == conflict_level)
                    .unwrap_or(false)
            })
            .count()
    };

    let bound = remaining.len().max(1);
    for _ in 0..bound {
        if level_d_literal_count(&learnt, trail) <= 1 {
            break;
        }

        // Resolve with the most recently assigned remaining candidate that
        // actually has a resolvent against the current learnt clause; by the
        // trail invariants this is always the latest-assigned one still in
        // `remaining`, but we search explicitly rather than assume it.
        remaining.sort_by_key(|&v| trail.assignment_order(v).unwrap_or(0));

        let found = remaining.iter().rev().enumerate().find_map(|(idx, &v)| {
            let antecedent = &trail.entry(v).expect("forced entry must exist").antecedent;
            let antecedent = antecedent.as_ref().expect("forced entry must have an antecedent");
            find_resolvent(&learnt, antecedent).map(|x| (idx, v, antecedent.clone(), x))
        });

        match found {
            Some((rev_idx, v, antecedent, x)) => {
                learnt = resolve(&learnt, &antecedent, x);
                let remove_at = remaining.len() - 1 - rev_idx;
                remaining.remove(remove_at);
                debug_assert_eq!(remaining.iter().position(|&r| r == v), None);
            }
            None => {
                unreachable!(
                    "no resolvable variable found during conflict analysis; the conflict \
                     clause is not derivable from the level-{conflict_level} antecedents, \
                     which should be impossible given a sound propagator"
                );
            }
        }
    }

    debug_assert_eq!(
        level_d_literal_count(&learnt, trail),
        1,
        "1UIP learnt clause must retain exactly one level-d literal"
    );

    let backjump_level = choose_backjump_level(&learnt, trail, conflict_level);

    AnalysisResult::Backjump {
        level: backjump_level,
        learnt,
    }
}

/// Picks the shallowest decision level at which the learnt clause becomes
/// unit: the smallest `k` such that exactly one variable assigned at level
/// `k` is *not* one of the learnt clause's variables.
fn choose_backjump_level(learnt: &Clause, trail: &Trail, conflict_level: usize) -> usize {
    let learnt_variables: HashSet<Variable> =
        learnt.literals().iter().map(Literal::variable).collect();

    for level in 0..conflict_level {
        let unrepresented = trail
            .entries_at_level(level)
            .into_iter()
            .filter(|(variable, _)| !learnt_variables.contains(variable))
            .count();

        if unrepresented == 1 {
            return level;
        }
    }

    0
}
