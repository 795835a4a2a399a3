use serde::{Deserialize, Serialize};

/// An application descriptor: name, version and author.
///
/// All three values are supplied at construction and never change afterwards;
/// the fields are private and only read accessors are exposed. No validation is
/// performed, so empty strings are accepted.
///
/// ```rust
/// use casekit_domain::ValueRecord;
///
/// let app = ValueRecord::new("MyApp", "v1", "Ravi");
/// assert_eq!(app.name(), "MyApp");
/// assert_eq!(app.version(), "v1");
/// assert_eq!(app.author(), "Ravi");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValueRecord {
    name: String,
    version: String,
    author: String,
}

impl ValueRecord {
    #[must_use]
    pub fn new(name: impl Into<String>, version: impl Into<String>, author: impl Into<String>) -> Self {
        Self { name: name.into(), version: version.into(), author: author.into() }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_strings_are_accepted() {
        let record = ValueRecord::new("", "", "");
        assert!(record.name().is_empty());
        assert!(record.version().is_empty());
        assert!(record.author().is_empty());
    }

    #[test]
    fn clones_are_independent_values() {
        let original = ValueRecord::new("MyApp", "v1", "Ravi");
        let copy = original.clone();
        drop(original);
        assert_eq!(copy.name(), "MyApp");
    }
}
