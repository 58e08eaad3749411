//! Validation of caller-proposed relative paths against a ruleset.

use std::fmt;
use std::path::Path;

use tracing::debug;

use crate::matcher::{suggest, Suggestion};
use crate::schema::Ruleset;

/// Why a path was rejected before the ruleset was consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Absolute path, or a `..` segment somewhere in it.
    NotRelative,
    /// No segments at all.
    Empty,
}

/// Outcome of [`validate`]. `Display` renders the text handed to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Rejected(Rejection),
    /// First segment is an allowed category.
    Valid { path: String, category: String },
    /// First segment is not allowed; carries an alternative from the matcher.
    NotAllowed {
        top_level: String,
        categories: Vec<String>,
        suggestion: Suggestion,
    },
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid { .. })
    }
}

impl fmt::Display for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Validation::Rejected(Rejection::NotRelative) => f.write_str(
                "Invalid: only relative paths are accepted (no absolute paths or ..)",
            ),
            Validation::Rejected(Rejection::Empty) => f.write_str("Invalid: empty path"),
            Validation::Valid { path, category } => {
                write!(f, "Valid: {path} is in allowed category '{category}/'")
            }
            Validation::NotAllowed {
                top_level,
                categories,
                suggestion,
            } => write!(
                f,
                "Invalid: '{top_level}/' is not an allowed top-level folder.\nAllowed: {}\n\n{suggestion}",
                categories.join(", ")
            ),
        }
    }
}

/// Check a proposed relative path.
///
/// The top-level check is exact and case-sensitive against every declared
/// category, hidden ones included.
pub fn validate(rules: &Ruleset, path: &str) -> Validation {
    let segments = segments(path);

    if path.starts_with('/') || Path::new(path).has_root() || segments.contains(&"..") {
        debug!(path = %path, "rejected non-relative path");
        return Validation::Rejected(Rejection::NotRelative);
    }

    let Some(top_level) = segments.first() else {
        return Validation::Rejected(Rejection::Empty);
    };

    if rules.is_allowed(top_level) {
        return Validation::Valid {
            path: path.to_string(),
            category: top_level.to_string(),
        };
    }

    debug!(path = %path, top_level = %top_level, "top-level folder not allowed");
    let suggestion = suggest(rules, &segments.join(" "), "file");
    Validation::NotAllowed {
        top_level: top_level.to_string(),
        categories: rules
            .visible_categories()
            .into_iter()
            .map(str::to_string)
            .collect(),
        suggestion,
    }
}

/// Path components, ignoring empty and `.` segments.
fn segments(path: &str) -> Vec<&str> {
    path.split('/')
        .filter(|s| !s.is_empty() && *s != ".")
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::Tier;
    use crate::parse::parse;

    const SAMPLE_RULES: &str = "
clients
personal
products
research
skills
.claude

pattern:*research*|*analysis*|*comparison* -> research/
pattern:*client*|*invoice*|*proposal* -> clients/
";

    fn rules() -> Ruleset {
        parse(SAMPLE_RULES)
    }

    #[test]
    fn valid_path() {
        let result = validate(&rules(), "clients/acme/invoice.pdf");
        assert!(result.is_valid());
        assert_eq!(
            result.to_string(),
            "Valid: clients/acme/invoice.pdf is in allowed category 'clients/'"
        );
    }

    #[test]
    fn valid_nested_and_dotted_prefix() {
        assert!(validate(&rules(), "research/standing-desks.md").is_valid());
        assert!(validate(&rules(), "./research/x.md").is_valid());
        assert!(validate(&rules(), "research//x.md").is_valid());
    }

    #[test]
    fn hidden_category_is_still_valid() {
        let result = validate(&rules(), ".claude/settings.json");
        assert_eq!(
            result,
            Validation::Valid {
                path: ".claude/settings.json".to_string(),
                category: ".claude".to_string(),
            }
        );
    }

    #[test]
    fn top_level_match_is_case_sensitive() {
        let result = validate(&rules(), "Clients/acme.pdf");
        assert!(!result.is_valid());
    }

    #[test]
    fn invalid_path_suggests_alternative() {
        let result = validate(&rules(), "misc/random-file.txt");
        match &result {
            Validation::NotAllowed {
                top_level,
                categories,
                suggestion,
            } => {
                assert_eq!(top_level, "misc");
                assert_eq!(
                    categories,
                    &vec!["clients", "personal", "products", "research", "skills"]
                );
                assert_eq!(suggestion.tier(), Tier::Fallback);
            }
            other => panic!("expected NotAllowed, got {other:?}"),
        }
        let text = result.to_string();
        assert!(text.starts_with("Invalid: 'misc/' is not an allowed top-level folder.\n"));
        assert!(text.contains("\n\nNo pattern match for: misc random-file.txt"));
        assert!(text.contains("Suggested filename: misc-random-file.txt"));
    }

    #[test]
    fn invalid_path_with_pattern_hit() {
        let result = validate(&rules(), "docs/client proposal.md");
        match result {
            Validation::NotAllowed { suggestion, .. } => {
                assert_eq!(
                    suggestion.path(),
                    Some("clients/docs-client-proposal.md")
                );
            }
            other => panic!("expected NotAllowed, got {other:?}"),
        }
    }

    #[test]
    fn empty_path() {
        assert_eq!(
            validate(&rules(), ""),
            Validation::Rejected(Rejection::Empty)
        );
        assert_eq!(validate(&rules(), "./"), Validation::Rejected(Rejection::Empty));
        assert_eq!(validate(&rules(), "").to_string(), "Invalid: empty path");
    }

    #[test]
    fn absolute_path_rejected_regardless_of_rules() {
        let result = validate(&Ruleset::default(), "/etc/passwd");
        assert_eq!(result, Validation::Rejected(Rejection::NotRelative));
        assert_eq!(
            validate(&rules(), "/clients/a.pdf"),
            Validation::Rejected(Rejection::NotRelative)
        );
        assert!(result.to_string().contains("only relative paths"));
    }

    #[test]
    fn traversal_rejected_even_under_allowed_category() {
        assert_eq!(
            validate(&rules(), "clients/../../etc/passwd"),
            Validation::Rejected(Rejection::NotRelative)
        );
        assert_eq!(
            validate(&rules(), "../clients"),
            Validation::Rejected(Rejection::NotRelative)
        );
    }

    #[test]
    fn dotted_names_are_not_traversal() {
        let rules = parse("notes..old");
        assert!(validate(&rules, "notes..old/a.md").is_valid());
    }
}
