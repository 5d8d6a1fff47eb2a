use im::HashMap;

use crate::interpreter::value::core::Value;

/// An immutable snapshot of variable bindings.
///
/// Commands never change an environment in place. Assignment and removal
/// return a new snapshot; the old one stays valid and unchanged. Bindings live
/// in a persistent hash trie, so a new snapshot shares every untouched node
/// with its parent and cloning one only bumps a reference count.
///
/// # Example
/// ```
/// use rcalc::{Environment, Value};
///
/// let empty = Environment::new();
/// let one = empty.with_binding("a", Value::from(1.0));
///
/// assert!(empty.get("a").is_none());
/// assert_eq!(one.get("a"), Some(&Value::from(1.0)));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    bindings: HashMap<String, Value>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a binding.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    /// Returns `true` if `name` is bound.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Number of bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns `true` if there are no bindings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Returns a new snapshot with `name` bound to `value`, replacing any
    /// previous binding.
    #[must_use]
    pub fn with_binding(&self, name: impl Into<String>, value: Value) -> Self {
        Self { bindings: self.bindings.update(name.into(), value) }
    }

    /// Returns a new snapshot without `name`.
    ///
    /// Removing an absent name yields an equal snapshot.
    #[must_use]
    pub fn without_binding(&self, name: &str) -> Self {
        if !self.contains(name) {
            return self.clone();
        }
        Self { bindings: self.bindings.without(name) }
    }
}

impl<K> FromIterator<(K, Value)> for Environment where K: Into<String>
{
    fn from_iter<T: IntoIterator<Item = (K, Value)>>(iter: T) -> Self {
        Self { bindings: iter.into_iter().map(|(k, v)| (k.into(), v)).collect() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshots_are_independent() {
        let base: Environment = [("a", Value::from(1.0)), ("b", Value::from("x"))].into_iter()
                                                                                  .collect();
        let changed = base.with_binding("a", Value::from(2.0)).without_binding("b");

        assert_eq!(base.get("a"), Some(&Value::from(1.0)));
        assert!(base.contains("b"));
        assert_eq!(changed.get("a"), Some(&Value::from(2.0)));
        assert!(!changed.contains("b"));
        assert_eq!(changed.len(), 1);
    }

    #[test]
    fn removing_absent_name_is_a_no_op() {
        let env = Environment::new().with_binding("a", Value::from(1.0));
        assert_eq!(env.without_binding("zzz"), env);
        assert!(Environment::new().without_binding("a").is_empty());
    }

    #[test]
    fn old_snapshots_survive_many_rebinds() {
        let base = Environment::new().with_binding("v", Value::from(vec![1.0, 2.0]));
        let mut current = base.clone();
        for i in 0..1000 {
            current = current.with_binding(format!("x{i}"), Value::from(f64::from(i)))
                             .with_binding("v", Value::from(f64::from(i)));
            if i % 3 == 0 {
                current = current.without_binding(&format!("x{}", i / 2));
            }
        }

        assert_eq!(base.len(), 1);
        assert_eq!(base.get("v"), Some(&Value::from(vec![1.0, 2.0])));
        assert_eq!(current.get("v"), Some(&Value::from(999.0)));
        assert_eq!(current.get("x999"), Some(&Value::from(999.0)));
        assert!(!current.contains("x0"));
    }

    #[test]
    fn untouched_values_are_shared() {
        let base = Environment::new().with_binding("v", Value::from(vec![1.0, 2.0]));
        let next = base.with_binding("w", Value::from(3.0));

        let (Some(Value::Vector(a)), Some(Value::Vector(b))) = (base.get("v"), next.get("v"))
        else {
            panic!("expected vectors");
        };
        assert!(std::rc::Rc::ptr_eq(a, b));
    }
}
