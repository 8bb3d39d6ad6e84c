use std::collections::HashMap;

/// The reserved binding name that always holds the most recent unnamed
/// evaluation result.
pub const ANSWER: &str = "_";

/// Stores the variable bindings of an evaluation session.
///
/// A binding maps a case-sensitive name to its last computed value. Bindings
/// live for the lifetime of the session only; nothing is persisted across
/// process runs. No operation on the store can fail.
#[derive(Debug, Default)]
pub struct Bindings {
    values: HashMap<String, f64>,
}

impl Bindings {
    /// Creates an empty binding store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up the value bound to `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// Binds `name` to `value`, replacing any previous binding.
    pub fn set(&mut self, name: &str, value: f64) {
        self.values.insert(name.to_string(), value);
    }

    /// Returns all bindings sorted by name.
    ///
    /// # Example
    /// ```
    /// use calcyard::interpreter::bindings::Bindings;
    ///
    /// let mut bindings = Bindings::new();
    /// bindings.set("y", 2.0);
    /// bindings.set("x", 1.0);
    ///
    /// assert_eq!(bindings.list(),
    ///            vec![("x".to_string(), 1.0), ("y".to_string(), 2.0)]);
    /// ```
    #[must_use]
    pub fn list(&self) -> Vec<(String, f64)> {
        let mut entries: Vec<_> = self.values
                                      .iter()
                                      .map(|(name, value)| (name.clone(), *value))
                                      .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }

    /// Removes the named bindings. Absent names are ignored.
    pub fn remove<S: AsRef<str>>(&mut self, names: &[S]) {
        for name in names {
            self.values.remove(name.as_ref());
        }
    }

    /// Removes every binding, including the reserved answer entry.
    pub fn clear(&mut self) {
        self.values.clear();
    }
}
