//! Parsed ruleset types.
//!
//! A [`Ruleset`] is built once per load by [`crate::parse::parse`] and never
//! mutated afterwards; a reload produces a new value.

use crate::glob::Glob;

/// One `pattern:` line: globs (lower-cased at parse time) mapped to a target folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternRule {
    /// Non-empty, evaluated in declared order.
    pub globs: Vec<Glob>,
    /// Raw text after ` -> `, trailing slash kept.
    pub target: String,
}

impl PatternRule {
    /// Target folder with trailing slashes stripped.
    pub fn target_dir(&self) -> &str {
        self.target.trim_end_matches('/')
    }

    /// First glob matching `text`, in declared order.
    pub fn first_match(&self, text: &str) -> Option<&Glob> {
        self.globs.iter().find(|g| g.is_match(text))
    }
}

/// Allowed categories, pattern rules, and the source text they came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ruleset {
    /// Category names in file order, verbatim, duplicates kept.
    pub allowed: Vec<String>,
    /// Pattern rules in file order.
    pub patterns: Vec<PatternRule>,
    /// The unmodified ruleset text.
    pub raw: String,
}

impl Ruleset {
    /// Categories shown to users: every allowed entry not starting with `.`.
    pub fn visible_categories(&self) -> Vec<&str> {
        visible_categories(self)
    }

    /// Exact, case-sensitive membership in `allowed` (hidden entries included).
    pub fn is_allowed(&self, category: &str) -> bool {
        self.allowed.iter().any(|c| c == category)
    }
}

/// Allowed entries excluding hidden ones (leading `.`), order preserved.
pub fn visible_categories(rules: &Ruleset) -> Vec<&str> {
    rules
        .allowed
        .iter()
        .map(String::as_str)
        .filter(|c| !c.starts_with('.'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ruleset(allowed: &[&str]) -> Ruleset {
        Ruleset {
            allowed: allowed.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn hidden_entries_are_filtered() {
        let rules = ruleset(&[".claude", "clients", ".git", "research"]);
        assert_eq!(rules.visible_categories(), vec!["clients", "research"]);
    }

    #[test]
    fn inner_dots_are_visible() {
        let rules = ruleset(&["v1.2", "notes.old", ".hidden"]);
        assert_eq!(visible_categories(&rules), vec!["v1.2", "notes.old"]);
    }

    #[test]
    fn duplicates_are_kept_in_order() {
        let rules = ruleset(&["b", "a", "b"]);
        assert_eq!(rules.visible_categories(), vec!["b", "a", "b"]);
    }

    #[test]
    fn membership_includes_hidden_and_is_case_sensitive() {
        let rules = ruleset(&[".claude", "Clients"]);
        assert!(rules.is_allowed(".claude"));
        assert!(rules.is_allowed("Clients"));
        assert!(!rules.is_allowed("clients"));
    }

    #[test]
    fn target_dir_strips_trailing_slashes() {
        let rule = PatternRule {
            globs: vec![Glob::new("*x*")],
            target: "research//".to_string(),
        };
        assert_eq!(rule.target_dir(), "research");
        assert_eq!(rule.first_match("box").map(Glob::as_str), Some("*x*"));
        assert!(rule.first_match("abc").is_none());
    }
}
