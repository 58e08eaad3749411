//! Shell-style wildcard patterns (`*`, `?`, `[seq]`, `[!seq]`) matched
//! against a whole string.
//!
//! Patterns are translated once into an anchored [`Regex`]. Reversed ranges
//! inside a class (`[z-a]`) are dropped; a class left with nothing to match
//! makes the whole pattern match nothing.

use std::fmt;

use regex::Regex;
use tracing::{debug, warn};

/// A compiled wildcard pattern.
#[derive(Debug, Clone)]
pub struct Glob {
    pattern: String,
    regex: Option<Regex>,
}

impl Glob {
    pub fn new(pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        let regex = match translate(&pattern).map(|source| Regex::new(&source)) {
            Some(Ok(re)) => Some(re),
            Some(Err(e)) => {
                warn!(glob = %pattern, error = %e, "glob does not compile, it will never match");
                None
            }
            None => {
                debug!(glob = %pattern, "glob has an empty character class, it will never match");
                None
            }
        };
        Self { pattern, regex }
    }

    /// The pattern text as written (after parse-time normalization).
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Whether `text` matches the whole pattern. Case-sensitive.
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.as_ref().is_some_and(|re| re.is_match(text))
    }
}

impl PartialEq for Glob {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern
    }
}

impl Eq for Glob {}

impl fmt::Display for Glob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

/// Translate a wildcard pattern into an anchored regex source string.
///
/// `None` when the pattern cannot match anything.
pub(crate) fn translate(pattern: &str) -> Option<String> {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::from("(?s)^");
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        i += 1;
        match c {
            '*' => {
                while i < chars.len() && chars[i] == '*' {
                    i += 1;
                }
                out.push_str(".*");
            }
            '?' => out.push('.'),
            '[' => match class_end(&chars, i) {
                Some(end) => {
                    push_class(&mut out, &chars[i..end])?;
                    i = end + 1;
                }
                // Unclosed bracket is a literal.
                None => out.push_str(r"\["),
            },
            c => {
                let mut buf = [0u8; 4];
                out.push_str(&regex::escape(c.encode_utf8(&mut buf)));
            }
        }
    }

    out.push('$');
    Some(out)
}

/// Index of the `]` closing a class whose body starts at `start`.
///
/// A leading `!` and a `]` directly after the opening bracket (or after `!`)
/// belong to the body.
fn class_end(chars: &[char], start: usize) -> Option<usize> {
    let mut j = start;
    if chars.get(j) == Some(&'!') {
        j += 1;
    }
    if chars.get(j) == Some(&']') {
        j += 1;
    }
    while j < chars.len() && chars[j] != ']' {
        j += 1;
    }
    (j < chars.len()).then_some(j)
}

/// Append the regex class for a glob class body.
///
/// Returns `None` for a non-negated class whose every range was reversed.
fn push_class(out: &mut String, body: &[char]) -> Option<()> {
    let (negated, body) = match body.split_first() {
        Some((&'!', rest)) => (true, rest),
        _ => (false, body),
    };

    let mut items = String::new();
    let mut i = 0;
    while i < body.len() {
        let lo = body[i];
        if i + 2 < body.len() && body[i + 1] == '-' {
            let hi = body[i + 2];
            if lo <= hi {
                push_class_char(&mut items, lo);
                items.push('-');
                push_class_char(&mut items, hi);
            }
            i += 3;
        } else {
            push_class_char(&mut items, lo);
            i += 1;
        }
    }

    match (items.is_empty(), negated) {
        (true, false) => return None,
        (true, true) => out.push('.'),
        (false, _) => {
            out.push('[');
            if negated {
                out.push('^');
            }
            out.push_str(&items);
            out.push(']');
        }
    }
    Some(())
}

/// Class members that are special inside a regex class get a backslash.
fn push_class_char(out: &mut String, c: char) {
    if matches!(c, '\\' | '[' | ']' | '^' | '&' | '~' | '-') {
        out.push('\\');
    }
    out.push(c);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(pattern: &str, text: &str) -> bool {
        Glob::new(pattern).is_match(text)
    }

    #[test]
    fn star_matches_any_run() {
        assert!(matches("*research*", "standing desk research"));
        assert!(matches("*research*", "research"));
        assert!(matches("*", ""));
        assert!(!matches("*research*", "reserch"));
    }

    #[test]
    fn whole_string_not_substring() {
        assert!(!matches("research", "market research"));
        assert!(matches("research*", "research notes"));
        assert!(!matches("research*", "market research notes"));
    }

    #[test]
    fn question_mark_is_one_char() {
        assert!(matches("q?", "q1"));
        assert!(!matches("q?", "q"));
        assert!(!matches("q?", "q12"));
    }

    #[test]
    fn regex_metacharacters_are_literal() {
        assert!(matches("c++ notes*", "c++ notes v2"));
        assert!(matches("*(draft)*", "plan (draft) 2"));
        assert!(!matches("a.b", "axb"));
        assert!(matches("$5 deal", "$5 deal"));
    }

    #[test]
    fn character_classes() {
        assert!(matches("report-[0-9]", "report-7"));
        assert!(!matches("report-[0-9]", "report-x"));
        assert!(matches("[!a]*", "bcd"));
        assert!(!matches("[!a]*", "abc"));
        assert!(matches("[]]x", "]x"));
        assert!(matches("[&&]", "&"));
    }

    #[test]
    fn unclosed_bracket_is_literal() {
        assert!(matches("[abc", "[abc"));
        assert!(!matches("[abc", "a"));
    }

    #[test]
    fn star_crosses_newlines() {
        assert!(matches("*notes*", "meeting\nnotes"));
    }

    #[test]
    fn reversed_range_alone_never_matches() {
        let glob = Glob::new("[z-a]");
        assert!(!glob.is_match("m"));
        assert!(!glob.is_match("z"));
        assert_eq!(glob.as_str(), "[z-a]");
    }

    #[test]
    fn reversed_range_dropped_from_class() {
        assert!(matches("[a-cz-x]", "b"));
        assert!(!matches("[a-cz-x]", "y"));
        assert!(matches("[!z-a]", "q"));
    }

    #[test]
    fn angle_brackets_in_class_are_literal() {
        assert!(matches("[<>]x", "<x"));
        assert!(matches("[<>]x", ">x"));
        assert!(!matches("[<>]x", "ax"));
    }

    #[test]
    fn class_specials_are_literal() {
        assert!(matches("[\\^]", "^"));
        assert!(matches("[~~]", "~"));
        assert!(matches("[a-]", "-"));
        assert!(!matches("[a-]", "b"));
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert!(!matches("*research*", "RESEARCH"));
    }
}
