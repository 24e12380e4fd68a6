//! Declared re-validation edges between form fields.
//!
//! A change to a field re-validates the field itself and then each direct
//! dependent whose trigger holds. Edges are not followed transitively.

#[cfg(test)]
#[path = "validation_graph_test.rs"]
mod validation_graph_test;

use super::validation::{Field, FieldValues};

/// When a dependent is re-checked after its source changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    Always,
    /// Only once the dependent holds some text.
    WhenDependentFilled,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dependency {
    pub source: Field,
    pub dependent: Field,
    pub trigger: Trigger,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationGraph {
    edges: Vec<Dependency>,
}

impl ValidationGraph {
    /// Graph for the signup form: editing the password re-checks a filled
    /// confirmation.
    pub fn signup() -> Self {
        Self::default().with_dependency(Field::Password, Field::ConfirmPassword, Trigger::WhenDependentFilled)
    }

    #[must_use]
    pub fn with_dependency(mut self, source: Field, dependent: Field, trigger: Trigger) -> Self {
        self.edges.push(Dependency { source, dependent, trigger });
        self
    }

    pub fn dependencies(&self) -> &[Dependency] {
        &self.edges
    }

    /// Fields to re-validate after `changed` was edited, in order.
    pub fn affected_by(&self, changed: Field, values: &FieldValues) -> Vec<Field> {
        let mut fields = vec![changed];
        for edge in self.edges.iter().filter(|e| e.source == changed) {
            let fires = match edge.trigger {
                Trigger::Always => true,
                Trigger::WhenDependentFilled => !values.get(edge.dependent).is_empty(),
            };
            if fires && !fields.contains(&edge.dependent) {
                fields.push(edge.dependent);
            }
        }
        fields
    }
}
