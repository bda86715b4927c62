//! Ranked multi-pattern filename matching
//!
//! Evaluates one filename against a whole pattern table and returns every
//! hit, ranked. Distinct candidate types may all legitimately match the
//! same name (aliasing); picking a single winner across evidence sources
//! is the resolution policy's job, not this module's.

use crate::pattern::GlobPattern;

/// Match a filename against a pattern table.
///
/// Returns `(candidate, weight, specificity)` for every pattern that
/// matches, ranked by weight descending, then specificity descending
/// (longer suffixes first, so `*.tar.gz` outranks `*.gz`), then
/// declaration order.
pub fn match_name<'a, C>(
    name: &str,
    patterns: &'a [(C, GlobPattern)],
) -> Vec<(&'a C, u32, usize)> {
    let mut hits: Vec<(&C, u32, usize)> = patterns
        .iter()
        .filter(|(_, pattern)| pattern.matches(name))
        .map(|(candidate, pattern)| (candidate, pattern.weight(), pattern.specificity()))
        .collect();
    // Stable sort keeps declaration order for full ties
    hits.sort_by(|a, b| b.1.cmp(&a.1).then(b.2.cmp(&a.2)));
    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::{build_glob_pattern, DEFAULT_WEIGHT};

    fn table(entries: &[(&'static str, &str, u32)]) -> Vec<(&'static str, GlobPattern)> {
        entries
            .iter()
            .map(|&(candidate, pattern, weight)| {
                (candidate, build_glob_pattern(pattern, weight, false).unwrap())
            })
            .collect()
    }

    #[test]
    fn test_longer_suffix_ranks_first() {
        let patterns = table(&[
            ("application/gzip", "*.gz", DEFAULT_WEIGHT),
            ("application/x-compressed-tar", "*.tar.gz", DEFAULT_WEIGHT),
        ]);
        let hits = match_name("archive.tar.gz", &patterns);
        assert_eq!(hits.len(), 2);
        assert_eq!(*hits[0].0, "application/x-compressed-tar");
        assert_eq!(*hits[1].0, "application/gzip");
    }

    #[test]
    fn test_weight_beats_specificity() {
        let patterns = table(&[
            ("text/x-specific", "*.in.c", 40),
            ("text/x-csrc", "*.c", 80),
        ]);
        let hits = match_name("config.in.c", &patterns);
        assert_eq!(hits.len(), 2);
        assert_eq!(*hits[0].0, "text/x-csrc");
    }

    #[test]
    fn test_full_tie_keeps_declaration_order() {
        let patterns = table(&[
            ("first/declared", "*.abc", DEFAULT_WEIGHT),
            ("second/declared", "*.abc", DEFAULT_WEIGHT),
        ]);
        let hits = match_name("x.abc", &patterns);
        assert_eq!(*hits[0].0, "first/declared");
        assert_eq!(*hits[1].0, "second/declared");
    }

    #[test]
    fn test_no_hits() {
        let patterns = table(&[("image/png", "*.png", DEFAULT_WEIGHT)]);
        assert!(match_name("notes.txt", &patterns).is_empty());
    }
}
