use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The values of the variables to use when evaluating an expression.
///
/// Names are case-insensitive, the same way they are in the parser: every name is stored
/// lowercase, and lookups normalize the name they are given.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "HashMap<String, f64>", into = "HashMap<String, f64>"))]
pub struct Bindings {
    /// The variables and their values.
    vars: HashMap<String, f64>,
}

impl Bindings {
    /// Creates an empty set of bindings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a value to a variable, replacing any previous value.
    pub fn add_var(&mut self, name: &str, value: f64) {
        self.vars.insert(name.to_lowercase(), value);
    }

    /// Binds a value to a variable, and returns the bindings.
    pub fn with_var(mut self, name: &str, value: f64) -> Self {
        self.add_var(name, value);
        self
    }

    /// Get the value of a variable.
    pub fn get_var(&self, name: &str) -> Option<f64> {
        match self.vars.get(name) {
            Some(value) => Some(*value),
            None => self.vars.get(&name.to_lowercase()).copied(),
        }
    }

    /// Returns the variables and their values.
    pub fn get_vars(&self) -> &HashMap<String, f64> {
        &self.vars
    }

    /// Returns the names of the bound variables.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.vars.keys().map(String::as_str)
    }
}

impl<K: AsRef<str>> FromIterator<(K, f64)> for Bindings {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let mut bindings = Self::new();
        for (name, value) in iter {
            bindings.add_var(name.as_ref(), value);
        }
        bindings
    }
}

impl<K: AsRef<str>, const N: usize> From<[(K, f64); N]> for Bindings {
    fn from(vars: [(K, f64); N]) -> Self {
        vars.into_iter().collect()
    }
}

impl From<HashMap<String, f64>> for Bindings {
    fn from(vars: HashMap<String, f64>) -> Self {
        vars.into_iter().collect()
    }
}

impl From<Bindings> for HashMap<String, f64> {
    fn from(bindings: Bindings) -> Self {
        bindings.vars
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_case_insensitive() {
        let bindings = Bindings::from([("X", 3.0), ("y", 4.0)]);
        assert_eq!(bindings.get_var("x"), Some(3.0));
        assert_eq!(bindings.get_var("X"), Some(3.0));
        assert_eq!(bindings.get_var("Y"), Some(4.0));
        assert_eq!(bindings.get_var("z"), None);
    }

    #[test]
    fn later_bindings_replace_earlier() {
        let bindings = Bindings::new().with_var("t", 1.0).with_var("T", 2.0);
        assert_eq!(bindings.get_vars().len(), 1);
        assert_eq!(bindings.get_var("t"), Some(2.0));
    }
}
