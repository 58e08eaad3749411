//! Three-tier folder suggestion: pattern rules, then category names, then
//! a fallback listing the categories for the caller to choose from.

use std::fmt;

use tracing::debug;

use crate::schema::Ruleset;
use crate::slug::{filename_for, FileType};

/// Which decision stage produced a [`Suggestion`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Pattern,
    Category,
    Fallback,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Tier::Pattern => "pattern",
            Tier::Category => "category",
            Tier::Fallback => "fallback",
        };
        f.write_str(s)
    }
}

/// Outcome of [`suggest`]. `Display` renders the text handed to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Suggestion {
    /// A glob of a pattern rule matched the description.
    Pattern {
        path: String,
        glob: String,
        /// Target as written in the ruleset.
        target: String,
        /// Target without trailing slash.
        category: String,
    },
    /// A visible category name occurs as a whole word in the description.
    Category { path: String, category: String },
    /// Nothing matched; the caller picks a category.
    Fallback {
        description: String,
        categories: Vec<String>,
        filename: String,
    },
}

impl Suggestion {
    pub fn tier(&self) -> Tier {
        match self {
            Suggestion::Pattern { .. } => Tier::Pattern,
            Suggestion::Category { .. } => Tier::Category,
            Suggestion::Fallback { .. } => Tier::Fallback,
        }
    }

    /// Suggested relative path, if a tier matched.
    pub fn path(&self) -> Option<&str> {
        match self {
            Suggestion::Pattern { path, .. } | Suggestion::Category { path, .. } => Some(path),
            Suggestion::Fallback { .. } => None,
        }
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Suggestion::Pattern {
                path,
                glob,
                target,
                category,
            } => write!(
                f,
                "Suggested: {path}\nReason: Matched pattern {glob} -> {target}\nCategory: {category}"
            ),
            Suggestion::Category { path, category } => write!(
                f,
                "Suggested: {path}\nReason: Description contains category name '{category}'\nCategory: {category}"
            ),
            Suggestion::Fallback {
                description,
                categories,
                filename,
            } => write!(
                f,
                "No pattern match for: {description}\nAvailable categories: {}\nSuggested filename: {filename}\nPick the best category and use: <category>/{filename}",
                categories.join(", ")
            ),
        }
    }
}

/// Suggest a destination for a new file described by `description`.
///
/// Globs are lower-cased at parse time and compared against the lower-cased
/// description; category names are matched case-insensitively on word
/// boundaries. First hit wins.
pub fn suggest(rules: &Ruleset, description: &str, file_type: &str) -> Suggestion {
    let file_type = FileType::from(file_type);
    let filename = filename_for(description, &file_type);
    let desc_lower = description.to_lowercase();

    for rule in &rules.patterns {
        if let Some(glob) = rule.first_match(&desc_lower) {
            let category = rule.target_dir().to_string();
            debug!(glob = %glob, target = %rule.target, "pattern tier matched");
            return Suggestion::Pattern {
                path: format!("{category}/{filename}"),
                glob: glob.to_string(),
                target: rule.target.clone(),
                category,
            };
        }
    }

    let categories = rules.visible_categories();

    if let Some(category) = categories
        .iter()
        .find(|c| contains_word(&desc_lower, &c.to_lowercase()))
    {
        debug!(category = %category, "category tier matched");
        return Suggestion::Category {
            path: format!("{category}/{filename}"),
            category: category.to_string(),
        };
    }

    debug!(description = %description, "no tier matched");
    Suggestion::Fallback {
        description: description.to_string(),
        categories: categories.into_iter().map(str::to_string).collect(),
        filename,
    }
}

/// Whether `word` occurs in `text` delimited by word boundaries.
///
/// Same boundary rule as regex `\b`: the characters on either side of the
/// boundary differ in being word characters; string ends count as non-word.
fn contains_word(text: &str, word: &str) -> bool {
    let (Some(first), Some(last)) = (word.chars().next(), word.chars().next_back()) else {
        return false;
    };

    let mut from = 0;
    while let Some(offset) = text[from..].find(word) {
        let start = from + offset;
        let end = start + word.len();
        let before = text[..start].chars().next_back();
        let after = text[end..].chars().next();
        if is_word_char(before) != is_word_char(Some(first))
            && is_word_char(after) != is_word_char(Some(last))
        {
            return true;
        }
        // Advance one character so overlapping occurrences are tried too.
        from = start + first.len_utf8();
    }
    false
}

fn is_word_char(c: Option<char>) -> bool {
    c.is_some_and(|c| c.is_alphanumeric() || c == '_')
}
