//! Candidate resolution policy
//!
//! Merges filename evidence (ranked glob candidates) and content evidence
//! (the single best magic candidate) into one final type, following the
//! Shared MIME-info precedence rules. Resolution is a total function:
//! every input combination, including both sources empty, yields exactly
//! one type.

/// Generic fallback type when neither filename nor content produced a
/// candidate
pub const FALLBACK_TYPE: &str = "application/octet-stream";

/// Magic priority at or above which content evidence overrides filename
/// evidence outright. Used by e.g. executable and script sniffing rules so
/// a misleading extension cannot hide a script.
pub const MAGIC_AUTHORITATIVE_PRIORITY: u32 = 80;

/// Pick the final type from both evidence sources.
///
/// `glob_candidates` must already be ranked best-first (the order
/// [`mimedb_glob::match_name`] returns). Precedence:
///
/// 1. a magic candidate with priority >= [`MAGIC_AUTHORITATIVE_PRIORITY`]
/// 2. the best glob candidate
/// 3. any magic candidate, regardless of priority
/// 4. [`FALLBACK_TYPE`]
pub fn resolve<'a>(
    glob_candidates: &[(&'a str, u32, usize)],
    magic_candidate: Option<(&'a str, u32)>,
) -> &'a str {
    if let Some((mime, priority)) = magic_candidate {
        if priority >= MAGIC_AUTHORITATIVE_PRIORITY {
            return mime;
        }
    }
    if let Some(&(mime, _, _)) = glob_candidates.first() {
        return mime;
    }
    if let Some((mime, _)) = magic_candidate {
        return mime;
    }
    FALLBACK_TYPE
}
