/// Stores the bindings produced by a program run.
///
/// The environment maps identifiers to their resolved integers and remembers
/// first-insertion order for enumeration. Rebinding an existing name
/// overwrites its value in place and keeps its original position.
///
/// ## Usage
///
/// `Environment` is created once by the driver, written exactly once per
/// statement after that statement's value has been resolved, and passed by
/// reference into evaluation. Programs are a handful of bindings, so lookups
/// are a linear scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    bindings: Vec<(String, i64)>,
}

impl Environment {
    /// Creates a new, empty environment.
    #[must_use]
    pub const fn new() -> Self {
        Self { bindings: Vec::new() }
    }

    /// Looks up the value bound to `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<i64> {
        self.bindings.iter()
            .find(|(bound, _)| bound == name)
            .map(|&(_, value)| value)
    }

    /// Binds `name` to `value`.
    ///
    /// A fresh name is appended; an existing name keeps its position and has
    /// its value replaced.
    pub fn insert(&mut self, name: String, value: i64) {
        match self.bindings.iter_mut().find(|(bound, _)| *bound == name) {
            Some(binding) => binding.1 = value,
            None => self.bindings.push((name, value)),
        }
    }

    /// Iterates over the bindings in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.bindings.iter().map(|(name, value)| (name.as_str(), *value))
    }

    /// Returns the number of bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns `true` if no binding has been made yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
