//! Magic rule evaluation over byte buffers
//!
//! Evaluation is total and allocation-free: a node either matches a buffer
//! or it does not, and unmatched buffers simply yield no candidate. The
//! offset scan stops at the first satisfying offset and sibling evaluation
//! stops at the first matching child, so typical buffers are rejected after
//! inspecting a handful of bytes.

use crate::rule::{MagicMatchNode, MagicRuleSet};

/// Masked byte comparison at a fixed offset. The caller guarantees
/// `offset + value.len() <= buffer.len()`.
fn matches_at(buffer: &[u8], offset: usize, value: &[u8], mask: Option<&[u8]>) -> bool {
    let window = &buffer[offset..offset + value.len()];
    match mask {
        None => window == value,
        Some(mask) => window
            .iter()
            .zip(value)
            .zip(mask)
            .all(|((&b, &v), &m)| b & m == v & m),
    }
}

/// First offset in the node's range where its value test succeeds, or
/// `None`. Offsets without room for the full value are never candidates.
fn first_matching_offset(buffer: &[u8], node: &MagicMatchNode) -> Option<usize> {
    let end = node.offset.start.checked_add(node.offset.length)?;
    (node.offset.start..end)
        .take_while(|&o| {
            o.checked_add(node.value.len())
                .is_some_and(|value_end| value_end <= buffer.len())
        })
        .find(|&o| matches_at(buffer, o, &node.value, node.mask.as_deref()))
}

/// Test one match node against a buffer.
///
/// The node succeeds iff its own byte test succeeds at some offset in its
/// range AND (it has no children OR at least one child succeeds). Children
/// are OR-refinements tested in source order against the full buffer:
/// child offsets are absolute, never relative to where the parent matched.
pub fn evaluate_node(buffer: &[u8], node: &MagicMatchNode) -> bool {
    if first_matching_offset(buffer, node).is_none() {
        return false;
    }
    if node.children.is_empty() {
        return true;
    }
    node.children.iter().any(|child| evaluate_node(buffer, child))
}

/// Test a whole rule set: true iff any top-level node matches.
pub fn evaluate_rule_set(buffer: &[u8], rule_set: &MagicRuleSet) -> bool {
    rule_set.matches.iter().any(|node| evaluate_node(buffer, node))
}

/// Evaluate every rule set against the buffer and pick the winner.
///
/// The highest-priority matching rule set wins; ties go to the first
/// declared. Rule sets that cannot beat the current best are skipped
/// without being evaluated. Returns `None` for an empty buffer or when
/// nothing matches.
pub fn best_magic_candidate<'a, C>(
    buffer: &[u8],
    rule_sets: &'a [(C, MagicRuleSet)],
) -> Option<(&'a C, u32)> {
    if buffer.is_empty() {
        return None;
    }
    let mut best: Option<(&C, u32)> = None;
    for (id, rule_set) in rule_sets {
        if let Some((_, best_priority)) = best {
            if best_priority >= rule_set.priority {
                continue;
            }
        }
        if evaluate_rule_set(buffer, rule_set) {
            best = Some((id, rule_set.priority));
        }
    }
    best
}
