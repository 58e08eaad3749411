//! Ruleset text format.
//!
//! ```text
//! # comment
//! clients
//! research
//! .claude
//! pattern:*research*|*analysis* -> research/
//! ```
//!
//! Parsing is total: malformed `pattern:` lines are dropped, nothing fails.

use tracing::debug;

use crate::glob::Glob;
use crate::schema::{PatternRule, Ruleset};

const PATTERN_PREFIX: &str = "pattern:";
const TARGET_SEPARATOR: &str = " -> ";

/// Characters that end a line, including bare `\r` and the Unicode separators.
const LINE_BREAKS: [char; 10] = [
    '\n', '\r', '\u{0b}', '\u{0c}', '\u{1c}', '\u{1d}', '\u{1e}', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Parse ruleset text into a [`Ruleset`]. `raw` keeps `text` verbatim.
pub fn parse(text: &str) -> Ruleset {
    let mut allowed = Vec::new();
    let mut patterns = Vec::new();

    // `\r\n` yields an extra empty piece, skipped below like any blank line.
    for line in text.split(LINE_BREAKS) {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match line.strip_prefix(PATTERN_PREFIX) {
            Some(rest) => {
                if let Some(rule) = parse_pattern(rest) {
                    patterns.push(rule);
                } else {
                    debug!(line = %line, "dropping malformed pattern line");
                }
            }
            None => allowed.push(line.to_string()),
        }
    }

    Ruleset {
        allowed,
        patterns,
        raw: text.to_string(),
    }
}

fn parse_pattern(rest: &str) -> Option<PatternRule> {
    let (globs, target) = rest.split_once(TARGET_SEPARATOR)?;
    let globs: Vec<Glob> = globs
        .split('|')
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .map(|g| Glob::new(g.to_lowercase()))
        .collect();

    if globs.is_empty() {
        return None;
    }

    Some(PatternRule {
        globs,
        target: target.trim().to_string(),
    })
}
