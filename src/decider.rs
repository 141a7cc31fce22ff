use crate::formula::Formula;
use crate::literal::Variable;
use crate::trail::Trail;

/// Picks the next branching variable and its polarity.
///
/// This is the naive baseline policy the design mandates: the unassigned
/// variable with the smallest identifier, assigned to `true`. VSIDS and other
/// activity-based heuristics are an explicit non-goal.
///
/// Returns `None` once every variable is assigned.
pub fn pick_branching_variable(formula: &Formula, trail: &Trail) -> Option<(Variable, bool)> {
    (1..=formula.num_variables() as u32)
        .map(Variable::from_dimacs)
        .find(|&variable| !trail.is_assigned(variable))
        .map(|variable| (variable, true))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_the_smallest_unassigned_variable_with_positive_polarity() {
        let formula = Formula::new(3);
        let mut trail = Trail::new(3);
        trail.assign(Variable::from_dimacs(1), true, None);

        let (variable, polarity) = pick_branching_variable(&formula, &trail).unwrap();
        assert_eq!(variable, Variable::from_dimacs(2));
        assert!(polarity);
    }

    #[test]
    fn returns_none_once_everything_is_assigned() {
        let formula = Formula::new(1);
        let mut trail = Trail::new(1);
        trail.assign(Variable::from_dimacs(1), true, None);

        assert!(pick_branching_variable(&formula, &trail).is_none());
    }
}
