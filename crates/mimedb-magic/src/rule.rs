//! Magic rule tree construction
//!
//! A magic rule is a small tree of match nodes: each node carries a typed
//! value, an optional mask, and the byte-offset range where the value may
//! appear. Child nodes refine a match (the parent must hit AND at least one
//! child must hit). A rule set groups the top-level nodes for one candidate
//! type together with its priority.
//!
//! Everything here is immutable once built: construction either fully
//! succeeds or fails with a [`MagicError`], and nodes are exclusively owned
//! by their parent, so rule sets are safe to share read-only across threads.

use crate::error::{MagicError, Result};
use crate::value::{self, MagicMatchType};

/// Default rule set priority when a definition does not specify one
pub const DEFAULT_PRIORITY: u32 = 50;

/// Byte-offset range where a match value may begin.
///
/// The value may start at any offset in `[start, start + length)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffsetRange {
    /// First candidate offset
    pub start: usize,
    /// Number of candidate offsets (1 = exact offset)
    pub length: usize,
}

impl OffsetRange {
    /// Parse an offset specification: `"start"` for an exact offset or
    /// `"start:end"` for a range covering `end - start` candidate offsets.
    pub fn parse(text: &str) -> Result<Self> {
        let malformed = || MagicError::MalformedOffset(format!("{:?}", text));
        match text.split_once(':') {
            None => {
                let start = text.parse::<usize>().map_err(|_| malformed())?;
                Ok(OffsetRange { start, length: 1 })
            }
            Some((start, end)) => {
                let start = start.parse::<usize>().map_err(|_| malformed())?;
                let end = end.parse::<usize>().map_err(|_| malformed())?;
                if end < start {
                    return Err(malformed());
                }
                Ok(OffsetRange {
                    start,
                    length: end - start,
                })
            }
        }
    }
}

/// One node of a magic rule tree.
///
/// A node matches a buffer iff its own byte test succeeds at some offset in
/// its range AND (it has no children OR at least one child matches). See
/// [`crate::eval::evaluate_node`] for the exact semantics.
#[derive(Debug, Clone)]
pub struct MagicMatchNode {
    /// Declared value type; fixes width and byte order
    pub match_type: MagicMatchType,
    /// Decoded value bytes to compare against the buffer
    pub value: Vec<u8>,
    /// Optional bitwise mask, same length as `value`
    pub mask: Option<Vec<u8>>,
    /// Where in the buffer the value may begin
    pub offset: OffsetRange,
    /// Refining sub-matches, in source order
    pub children: Vec<MagicMatchNode>,
}

impl MagicMatchNode {
    /// Attach a refining sub-match. Children are tested in the order they
    /// were attached.
    pub fn add_child(&mut self, child: MagicMatchNode) {
        self.children.push(child);
    }
}

/// All magic rules for one candidate type.
///
/// The rule set matches a buffer iff at least one top-level node matches.
#[derive(Debug, Clone)]
pub struct MagicRuleSet {
    /// Resolution priority, 0-100 (higher wins)
    pub priority: u32,
    /// Top-level match nodes, in declaration order
    pub matches: Vec<MagicMatchNode>,
}

/// Build a match node from the textual fields of a `<match>` element or
/// cache record. Children are attached afterwards with
/// [`MagicMatchNode::add_child`].
///
/// Unrecognized `type_str` keywords fall back to the `string` type rather
/// than failing; see [`MagicMatchType::from_keyword`].
pub fn build_match_node(
    type_str: &str,
    value_str: &str,
    mask_str: Option<&str>,
    offset_str: &str,
) -> Result<MagicMatchNode> {
    let match_type = MagicMatchType::from_keyword(type_str);
    let offset = OffsetRange::parse(offset_str)?;

    let value = match match_type.numeric_width() {
        None => value::decode_string_literal(value_str),
        Some(width) => {
            let n = value::decode_numeric_literal(value_str, width).map_err(|_| {
                MagicError::MalformedValue(format!(
                    "{:?} cannot be decoded as {}",
                    value_str,
                    match_type.name()
                ))
            })?;
            value::apply_endianness(n, match_type)
        }
    };

    let mask = match mask_str {
        None => None,
        Some(text) => {
            let mask = match match_type.numeric_width() {
                // String masks are hex byte sequences, never escaped text
                None => value::decode_mask(text)?,
                Some(width) => {
                    let n = value::decode_numeric_literal(text, width)
                        .map_err(|e| MagicError::MalformedMask(e.to_string()))?;
                    value::apply_endianness(n, match_type)
                }
            };
            if mask.len() != value.len() {
                return Err(MagicError::MalformedMask(format!(
                    "mask is {} bytes but value is {} bytes",
                    mask.len(),
                    value.len()
                )));
            }
            Some(mask)
        }
    };

    Ok(MagicMatchNode {
        match_type,
        value,
        mask,
        offset,
        children: Vec::new(),
    })
}

/// Group top-level match nodes into a rule set at the given priority.
pub fn build_rule_set(priority: u32, matches: Vec<MagicMatchNode>) -> MagicRuleSet {
    MagicRuleSet { priority, matches }
}
