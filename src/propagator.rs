use crate::clause::Clause;
use crate::formula::Formula;
use crate::literal::Literal;
use crate::trail::Trail;

/// The classification of a clause under a partial assignment.
#[derive(Debug, Clone)]
pub enum ClauseStatus {
    Satisfied,
    Unsatisfied,
    Unit(Literal),
    Unresolved,
}

/// Classifies `clause` under `trail`.
pub fn clause_status(clause: &Clause, trail: &Trail) -> ClauseStatus {
    // A true literal settles the status as Satisfied no matter how many other
    // literals are unassigned, so it's checked for first; only once no literal
    // is true does the unassigned count distinguish Unit/Unresolved/Unsatisfied.
    let mut unassigned_count = 0;
    let mut first_unassigned = None;

    for &literal in clause.literals() {
        if trail.is_assigned(literal.variable()) {
            if trail.value(literal) {
                return ClauseStatus::Satisfied;
            }
        } else {
            unassigned_count += 1;
            first_unassigned.get_or_insert(literal);
        }
    }

    match unassigned_count {
        0 => ClauseStatus::Unsatisfied,
        1 => ClauseStatus::Unit(first_unassigned.expect("unassigned_count == 1")),
        _ => ClauseStatus::Unresolved,
    }
}

/// The outcome of a completed `propagate` call.
pub enum PropagationResult {
    Ok,
    Conflict(Clause),
}

/// Applies unit propagation to a fixpoint.
///
/// This is the naive propagator required by the design: every clause in
/// `formula` is rescanned on every pass, rather than tracked via watched
/// literals. Watched-literal propagation is an explicit non-goal; this
/// implementation favors being straightforwardly checkable against the trail
/// invariants over raw propagation speed.
pub fn propagate(formula: &Formula, trail: &mut Trail) -> PropagationResult {
    loop {
        let mut assigned_this_pass = false;

        for clause in formula.clauses() {
            match clause_status(clause, trail) {
                ClauseStatus::Unsatisfied => return PropagationResult::Conflict(clause.clone()),
                ClauseStatus::Unit(literal) => {
                    trail.assign(literal.variable(), !literal.negated(), Some(clause.clone()));
                    assigned_this_pass = true;
                }
                ClauseStatus::Satisfied | ClauseStatus::Unresolved => {}
            }
        }

        if !assigned_this_pass {
            return PropagationResult::Ok;
        }
    }
}
