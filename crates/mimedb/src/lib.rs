//! Mimedb - MIME Type Detection from Filenames and Content
//!
//! Mimedb resolves the MIME type of a file from its name and/or its
//! leading bytes, following the freedesktop Shared MIME-info matching
//! rules: weighted filename globs, prioritized magic byte rules, and the
//! precedence policy that merges both into a single answer.
//!
//! # Quick Start
//!
//! ```rust
//! use mimedb::{build_match_node, build_rule_set, MimeDatabaseBuilder};
//!
//! let mut builder = MimeDatabaseBuilder::new();
//!
//! // Filename pattern
//! builder.add_glob("image/png", "*.png", 50, false)?;
//!
//! // Content rule: PNG signature at offset 0
//! let signature = build_match_node("string", "\\x89PNG", None, "0")?;
//! builder.add_magic("image/png", build_rule_set(50, vec![signature]));
//!
//! let db = builder.build();
//!
//! assert_eq!(db.guess_type(Some("photo.png"), None), "image/png");
//! assert_eq!(db.guess_type(None, Some(b"\x89PNG\r\n\x1a\n")), "image/png");
//! assert_eq!(db.guess_type(Some("unknown.bin"), None), "application/octet-stream");
//! # Ok::<(), mimedb::MimedbError>(())
//! ```
//!
//! # Key Features
//!
//! - **Two evidence sources**: filename globs and content magic, merged
//!   by the Shared MIME-info precedence rules (authoritative magic >
//!   glob > magic)
//! - **Weighted ranking**: pattern weight, then suffix specificity
//!   (`*.tar.gz` beats `*.gz`), then declaration order
//! - **Total evaluation**: queries never fail; unmatched inputs fall back
//!   to `application/octet-stream`
//! - **Lock-free sharing**: databases are immutable after build and safe
//!   to query from any number of threads
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  Definitions (from XML walk / cache reader) │
//! ├─────────────────────────────────────────────┤
//! │  globs:  "*.png" w=50      → image/png      │
//! │  magic:  \x89PNG @0 p=50   → image/png      │
//! └─────────────────────────────────────────────┘
//!          │ MimeDatabaseBuilder
//!          ▼
//! ┌──────────────────────┐   ┌──────────────────────┐
//! │  mimedb-glob         │   │  mimedb-magic        │
//! │  match_name(name)    │   │  best_candidate(buf) │
//! └──────────┬───────────┘   └──────────┬───────────┘
//!            └──────── resolve ─────────┘
//!                         │
//!                         ▼
//!                  final MIME type
//! ```
//!
//! Loading database files (XML, binary cache) is a collaborator concern;
//! mimedb performs no I/O of its own.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Unified database API
pub mod database;
/// Error types for mimedb operations
pub mod error;
/// Candidate resolution policy
pub mod resolve;

// Re-export the matching subcrates for direct access to the engines
pub use mimedb_glob as glob;
pub use mimedb_magic as magic;

pub use database::{MimeDatabase, MimeDatabaseBuilder};
pub use error::{MimedbError, Result};
pub use mimedb_glob::{build_glob_pattern, match_name, GlobPattern, DEFAULT_WEIGHT};
pub use mimedb_magic::{
    best_magic_candidate, build_match_node, build_rule_set, MagicMatchNode, MagicMatchType,
    MagicRuleSet, OffsetRange, DEFAULT_PRIORITY,
};
pub use resolve::{resolve, FALLBACK_TYPE, MAGIC_AUTHORITATIVE_PRIORITY};
