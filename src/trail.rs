use std::collections::HashMap;

use fixedbitset::FixedBitSet;

use crate::clause::Clause;
use crate::literal::{Literal, Variable};

/// Why and at what depth a variable was bound.
#[derive(Debug, Clone)]
pub struct AssignmentEntry {
    pub value: bool,
    pub antecedent: Option<Clause>,
    pub decision_level: usize,
}

/// The partial assignment under construction during search.
///
/// Besides the per-variable [`AssignmentEntry`] map, the trail keeps an explicit
/// insertion-ordered list of assigned variables: a keyed map alone cannot
/// reconstruct the order assignments were made in, which conflict analysis needs
/// to pick the 1UIP deterministically.
pub struct Trail {
    decision_level: usize,
    entries: HashMap<Variable, AssignmentEntry>,
    assigned: FixedBitSet,
    order: Vec<Variable>,
    num_variables: usize,
}

impl Trail {
    pub fn new(num_variables: usize) -> Trail {
        Trail {
            decision_level: 0,
            entries: HashMap::new(),
            assigned: FixedBitSet::with_capacity(num_variables),
            order: Vec::new(),
            num_variables,
        }
    }

    pub fn decision_level(&self) -> usize {
        self.decision_level
    }

    pub fn set_decision_level(&mut self, level: usize) {
        self.decision_level = level;
    }

    pub fn is_assigned(&self, variable: Variable) -> bool {
        self.assigned.contains(variable.index())
    }

    /// Returns the truth value of `literal` under the current assignment.
    ///
    /// Panics if the literal's variable is unassigned; callers must check
    /// `is_assigned` first, matching the precondition in the component design.
    pub fn value(&self, literal: Literal) -> bool {
        let entry = self
            .entries
            .get(&literal.variable())
            .expect("value() called on an unassigned literal");
        entry.value ^ literal.negated()
    }

    /// Binds `variable` to `value` at the current decision level.
    ///
    /// Panics if `variable` is already assigned.
    pub fn assign(&mut self, variable: Variable, value: bool, antecedent: Option<Clause>) {
        assert!(
            !self.is_assigned(variable),
            "attempted to assign an already-assigned variable"
        );

        self.entries.insert(
            variable,
            AssignmentEntry {
                value,
                antecedent,
                decision_level: self.decision_level,
            },
        );
        self.assigned.insert(variable.index());
        self.order.push(variable);
    }

    pub fn unassign(&mut self, variable: Variable) {
        self.entries.remove(&variable);
        self.assigned.set(variable.index(), false);
        self.order.retain(|&v| v != variable);
    }

    pub fn entry(&self, variable: Variable) -> Option<&AssignmentEntry> {
        self.entries.get(&variable)
    }

    pub fn assigned_count(&self) -> usize {
        self.entries.len()
    }

    pub fn num_variables(&self) -> usize {
        self.num_variables
    }

    /// Variables forced (antecedent-bearing) at exactly decision level `level`.
    pub fn forced_entries_at_level(&self, level: usize) -> Vec<(Variable, &AssignmentEntry)> {
        self.order
            .iter()
            .filter_map(|&v| {
                let entry = &self.entries[&v];
                (entry.decision_level == level && entry.antecedent.is_some()).then_some((v, entry))
            })
            .collect()
    }

    /// All variables assigned at exactly decision level `level`, decisions included.
    pub fn entries_at_level(&self, level: usize) -> Vec<(Variable, &AssignmentEntry)> {
        self.order
            .iter()
            .filter_map(|&v| {
                let entry = &self.entries[&v];
                (entry.decision_level == level).then_some((v, entry))
            })
            .collect()
    }

    /// Removes every entry assigned above decision level `level`. Does not
    /// change `decision_level()` itself; the caller sets that separately.
    pub fn backtrack(&mut self, level: usize) {
        while let Some(&variable) = self.order.last() {
            let above_level = self.entries[&variable].decision_level > level;
            if !above_level {
                break;
            }
            self.order.pop();
            self.entries.remove(&variable);
            self.assigned.set(variable.index(), false);
        }
    }

    /// A snapshot of the current value of every assigned variable.
    pub fn model(&self) -> HashMap<Variable, bool> {
        self.entries
            .iter()
            .map(|(&variable, entry)| (variable, entry.value))
            .collect()
    }

    /// The order in which variables were assigned. Exposed for the (i+1)th
    /// assignment ordering the analyzer needs when choosing which level-d
    /// literal to resolve next.
    pub fn assignment_order(&self, variable: Variable) -> Option<usize> {
        self.order.iter().position(|&v| v == variable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assign_then_unassign_round_trips() {
        let mut trail = Trail::new(4);
        let v = Variable::from_dimacs(2);

        trail.assign(v, true, None);
        assert!(trail.is_assigned(v));
        assert_eq!(trail.value(Literal::positive(v)), true);
        assert_eq!(trail.value(Literal::negative(v)), false);

        trail.unassign(v);
        assert!(!trail.is_assigned(v));
    }

    #[test]
    fn backtrack_removes_only_entries_above_the_target_level() {
        let mut trail = Trail::new(4);
        let v1 = Variable::from_dimacs(1);
        let v2 = Variable::from_dimacs(2);
        let v3 = Variable::from_dimacs(3);

        trail.set_decision_level(0);
        trail.assign(v1, true, None);

        trail.set_decision_level(1);
        trail.assign(v2, true, None);

        trail.set_decision_level(2);
        trail.assign(v3, true, None);

        trail.backtrack(1);

        assert!(trail.is_assigned(v1));
        assert!(trail.is_assigned(v2));
        assert!(!trail.is_assigned(v3));
    }

    #[test]
    fn forced_entries_at_level_excludes_decisions() {
        let mut trail = Trail::new(4);
        let decision = Variable::from_dimacs(1);
        let forced = Variable::from_dimacs(2);
        let conflict_clause = Clause::new(vec![Literal::positive(forced)]);

        trail.set_decision_level(1);
        trail.assign(decision, true, None);
        trail.assign(forced, true, Some(conflict_clause));

        let at_level = trail.forced_entries_at_level(1);
        assert_eq!(at_level.len(), 1);
        assert_eq!(at_level[0].0, forced);
    }
}
