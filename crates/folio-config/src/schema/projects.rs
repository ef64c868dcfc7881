//! Project catalog entries shown in the detail view.

use serde::{Deserialize, Serialize};

/// One portfolio project. Ids are assigned 1-based in file order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ProjectEntry {
    /// Display title; an English name may follow in parentheses,
    /// e.g. `"星图 (Star Map)"`.
    pub title: String,
    pub summary: String,
    pub images: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_entry_partial_toml() {
        let entry: ProjectEntry = toml::from_str(r#"title = "Orbit (Orbit Lab)""#).unwrap();
        assert_eq!(entry.title, "Orbit (Orbit Lab)");
        assert!(entry.summary.is_empty());
        assert!(entry.images.is_empty());
    }
}
