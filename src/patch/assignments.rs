//! Assignments - the ordered field set approved for persistence.

use crate::value::Value;

/// One approved (column, value) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    /// SQL column name.
    pub column: &'static str,
    /// JSON attribute name.
    pub field: &'static str,
    pub value: Value,
}

/// Ordered list of assignments. Order carries no meaning; fields are
/// independent of each other.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Assignments {
    items: Vec<Assignment>,
}

impl Assignments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an assignment.
    pub fn push(&mut self, column: &'static str, field: &'static str, value: Value) {
        self.items.push(Assignment {
            column,
            field,
            value,
        });
    }

    /// Builder form of [`push`](Self::push).
    pub fn with(mut self, column: &'static str, field: &'static str, value: Value) -> Self {
        self.push(column, field, value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Assignment> {
        self.items.iter()
    }

    /// Look up the value assigned to a column.
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.items
            .iter()
            .find(|a| a.column == column)
            .map(|a| &a.value)
    }

    /// Column names, in order.
    pub fn columns(&self) -> Vec<&'static str> {
        self.items.iter().map(|a| a.column).collect()
    }
}

impl<'a> IntoIterator for &'a Assignments {
    type Item = &'a Assignment;
    type IntoIter = std::slice::Iter<'a, Assignment>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
