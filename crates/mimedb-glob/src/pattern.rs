//! Filename glob patterns
//!
//! Patterns are classified at construction into one of three shapes so the
//! common cases stay cheap at match time:
//!
//! - **Literal** — no wildcards at all; plain string equality
//! - **Suffix** — `*.ext` with a wildcard-free extension; `ends_with`
//! - **General** — anything else; full glob evaluation with `*`, `?`, and
//!   `[...]` character classes (ranges and `[!...]` negation)
//!
//! Case-insensitive patterns fold both the pattern (once, at construction)
//! and the name (at match time). Malformed bracket expressions are not a
//! construction error; a pattern containing one simply never matches.

use crate::error::{GlobError, Result};

/// Default pattern weight when a definition does not specify one
pub const DEFAULT_WEIGHT: u32 = 50;

/// Backtracking step limit for general-glob evaluation, so adversarial
/// patterns like `*a*a*a*a*b` terminate against long names
const BACKTRACK_LIMIT: usize = 100_000;

/// Shape-specific comparison data, pre-folded for case-insensitive patterns
#[derive(Debug, Clone)]
enum PatternShape {
    /// Whole-name equality
    Literal(String),
    /// `*.ext` form: the required trailing text, dot included
    Suffix(String),
    /// Full glob evaluation over these pattern chars
    General(Vec<char>),
}

/// A filename pattern with its weight and case sensitivity.
///
/// Immutable once built; safe to share read-only across threads.
#[derive(Debug, Clone)]
pub struct GlobPattern {
    pattern: String,
    weight: u32,
    case_sensitive: bool,
    shape: PatternShape,
}

impl GlobPattern {
    /// The pattern text as originally supplied
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Resolution weight, 1-100 (higher wins)
    pub fn weight(&self) -> u32 {
        self.weight
    }

    /// Whether matching compares case-sensitively
    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Specificity used to break ties between equal-weight patterns:
    /// the length of the literal or suffix text, or the number of
    /// non-wildcard characters for general globs. A longer suffix
    /// (`*.tar.gz`) outranks a shorter one (`*.gz`).
    pub fn specificity(&self) -> usize {
        match &self.shape {
            PatternShape::Literal(text) => text.chars().count(),
            PatternShape::Suffix(suffix) => suffix.chars().count(),
            PatternShape::General(chars) => {
                let mut count = 0;
                let mut iter = chars.iter();
                while let Some(&c) = iter.next() {
                    match c {
                        '*' | '?' => {}
                        '[' => {
                            for &c in iter.by_ref() {
                                if c == ']' {
                                    break;
                                }
                            }
                        }
                        _ => count += 1,
                    }
                }
                count
            }
        }
    }

    /// Test a filename against this pattern. Total: malformed bracket
    /// expressions yield `false`, never an error.
    pub fn matches(&self, name: &str) -> bool {
        let folded;
        let name = if self.case_sensitive {
            name
        } else {
            folded = name.to_lowercase();
            &folded
        };
        match &self.shape {
            PatternShape::Literal(text) => name == text,
            PatternShape::Suffix(suffix) => name.ends_with(suffix.as_str()),
            PatternShape::General(chars) => {
                let name: Vec<char> = name.chars().collect();
                let mut steps = BACKTRACK_LIMIT;
                glob_match(chars, &name, &mut steps)
            }
        }
    }
}

/// Build a glob pattern. The only construction-time check is that the
/// pattern is non-empty; shape classification never fails.
pub fn build_glob_pattern(pattern: &str, weight: u32, case_sensitive: bool) -> Result<GlobPattern> {
    if pattern.is_empty() {
        return Err(GlobError::InvalidPattern("Empty pattern".to_string()));
    }

    let comparison = if case_sensitive {
        pattern.to_string()
    } else {
        pattern.to_lowercase()
    };

    let shape = if !has_wildcard(&comparison) {
        PatternShape::Literal(comparison)
    } else if let Some(suffix) = comparison.strip_prefix('*') {
        if suffix.starts_with('.') && !has_wildcard(suffix) {
            PatternShape::Suffix(suffix.to_string())
        } else {
            PatternShape::General(comparison.chars().collect())
        }
    } else {
        PatternShape::General(comparison.chars().collect())
    };

    Ok(GlobPattern {
        pattern: pattern.to_string(),
        weight,
        case_sensitive,
        shape,
    })
}

fn has_wildcard(text: &str) -> bool {
    text.chars().any(|c| matches!(c, '*' | '?' | '['))
}

/// Recursive glob evaluation. `steps` bounds total recursion across all
/// backtracking branches; hitting the bound rejects the name.
fn glob_match(pattern: &[char], name: &[char], steps: &mut usize) -> bool {
    if *steps == 0 {
        return false;
    }
    *steps -= 1;

    let Some(&p) = pattern.first() else {
        return name.is_empty();
    };
    match p {
        '*' => {
            // Try consuming zero chars first, then one more at a time
            let mut skip = 0;
            loop {
                if glob_match(&pattern[1..], &name[skip..], steps) {
                    return true;
                }
                if skip >= name.len() {
                    return false;
                }
                skip += 1;
            }
        }
        '?' => !name.is_empty() && glob_match(&pattern[1..], &name[1..], steps),
        '[' => {
            let Some(&c) = name.first() else {
                return false;
            };
            match match_class(&pattern[1..], c) {
                Some((rest, matched)) => matched && glob_match(rest, &name[1..], steps),
                // Unterminated class: malformed pattern, never matches
                None => false,
            }
        }
        _ => name.first() == Some(&p) && glob_match(&pattern[1..], &name[1..], steps),
    }
}

/// Evaluate one bracket expression given the pattern chars after `[`.
/// Returns the pattern remainder after `]` and whether `c` is in the
/// class, or `None` if the class is unterminated. A leading `!` or `^`
/// negates; `]` as the first member char is literal; `a-z` spans a range
/// unless the `-` is the final char before `]`.
fn match_class(pattern: &[char], c: char) -> Option<(&[char], bool)> {
    let mut i = 0;
    let negated = matches!(pattern.first(), Some('!') | Some('^'));
    if negated {
        i = 1;
    }
    let mut in_class = false;
    let mut first = true;
    while i < pattern.len() {
        if pattern[i] == ']' && !first {
            let matched = if negated { !in_class } else { in_class };
            return Some((&pattern[i + 1..], matched));
        }
        first = false;
        if i + 2 < pattern.len() && pattern[i + 1] == '-' && pattern[i + 2] != ']' {
            if pattern[i] <= c && c <= pattern[i + 2] {
                in_class = true;
            }
            i += 3;
        } else {
            if pattern[i] == c {
                in_class = true;
            }
            i += 1;
        }
    }
    None
}
