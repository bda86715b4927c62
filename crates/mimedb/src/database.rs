//! Unified MIME database API
//!
//! Aggregates glob patterns and magic rule sets per MIME type and answers
//! the three query shapes consumers need:
//!
//! - filename only ([`MimeDatabase::match_filename`])
//! - content only ([`MimeDatabase::match_data`])
//! - both, merged through the resolution policy
//!   ([`MimeDatabase::guess_type`])
//!
//! The database owns no files and performs no I/O: a loader collaborator
//! (XML walk or cache reader) feeds it already-textual definitions through
//! the builder. One malformed definition fails only its own `add_*` call;
//! the rest of the database is unaffected.

use crate::error::Result;
use crate::resolve::resolve;
use mimedb_glob::{build_glob_pattern, match_name, GlobPattern};
use mimedb_magic::{best_magic_candidate, MagicRuleSet};
use rustc_hash::FxHashMap;

/// Builder for a [`MimeDatabase`].
///
/// MIME names are interned once; patterns and rule sets reference them by
/// index so a type with many patterns costs one string.
#[derive(Debug, Default)]
pub struct MimeDatabaseBuilder {
    names: Vec<String>,
    index: FxHashMap<String, u32>,
    patterns: Vec<(u32, GlobPattern)>,
    magic: Vec<(u32, MagicRuleSet)>,
}

impl MimeDatabaseBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    fn intern(&mut self, mime: &str) -> u32 {
        if let Some(&id) = self.index.get(mime) {
            return id;
        }
        let id = self.names.len() as u32;
        self.names.push(mime.to_string());
        self.index.insert(mime.to_string(), id);
        id
    }

    /// Register a filename pattern for a MIME type.
    ///
    /// Fails only for an empty pattern; the failure does not affect
    /// definitions already added.
    pub fn add_glob(
        &mut self,
        mime: &str,
        pattern: &str,
        weight: u32,
        case_sensitive: bool,
    ) -> Result<()> {
        let glob = build_glob_pattern(pattern, weight, case_sensitive)?;
        let id = self.intern(mime);
        self.patterns.push((id, glob));
        Ok(())
    }

    /// Register a magic rule set for a MIME type. Rule sets are declared
    /// in call order, which breaks priority ties.
    pub fn add_magic(&mut self, mime: &str, rule_set: MagicRuleSet) {
        let id = self.intern(mime);
        self.magic.push((id, rule_set));
    }

    /// Finish construction. The database is immutable from here on.
    pub fn build(self) -> MimeDatabase {
        MimeDatabase {
            names: self.names,
            patterns: self.patterns,
            magic: self.magic,
        }
    }
}

/// An immutable, queryable set of MIME type definitions.
///
/// All state is read-only after [`MimeDatabaseBuilder::build`]; queries
/// may run concurrently from any number of threads without locking.
#[derive(Debug)]
pub struct MimeDatabase {
    names: Vec<String>,
    patterns: Vec<(u32, GlobPattern)>,
    magic: Vec<(u32, MagicRuleSet)>,
}

impl MimeDatabase {
    /// Ranked glob candidates for a filename:
    /// `(mime, weight, specificity)`, best first.
    pub fn match_filename(&self, name: &str) -> Vec<(&str, u32, usize)> {
        match_name(name, &self.patterns)
            .into_iter()
            .map(|(id, weight, specificity)| {
                (self.names[*id as usize].as_str(), weight, specificity)
            })
            .collect()
    }

    /// Best magic candidate for a content buffer: `(mime, priority)`.
    /// Callers typically pass the first few kilobytes of the file.
    pub fn match_data(&self, buffer: &[u8]) -> Option<(&str, u32)> {
        best_magic_candidate(buffer, &self.magic)
            .map(|(id, priority)| (self.names[*id as usize].as_str(), priority))
    }

    /// Resolve a final type from whichever evidence is available, falling
    /// back to `application/octet-stream` when neither source matches.
    pub fn guess_type(&self, name: Option<&str>, buffer: Option<&[u8]>) -> &str {
        let glob_candidates = name.map(|n| self.match_filename(n)).unwrap_or_default();
        let magic_candidate = buffer.and_then(|b| self.match_data(b));
        resolve(&glob_candidates, magic_candidate)
    }

    /// Number of distinct MIME types registered
    pub fn type_count(&self) -> usize {
        self.names.len()
    }

    /// Number of glob patterns registered
    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    /// Number of magic rule sets registered
    pub fn rule_set_count(&self) -> usize {
        self.magic.len()
    }
}
