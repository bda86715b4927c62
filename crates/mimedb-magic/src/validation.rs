//! Rule set validation for programmatically assembled rules
//!
//! [`crate::rule::build_match_node`] already rejects malformed text, but
//! node fields are public and loaders may assemble trees directly. This
//! module inspects a finished rule set and reports anything the evaluator
//! would silently mis-handle, plus statistics about the tree shape.

use crate::rule::{MagicMatchNode, MagicRuleSet};

/// Validation result for a magic rule set
#[derive(Debug, Clone)]
pub struct MagicValidationResult {
    /// Critical errors that make the rule set unusable
    pub errors: Vec<String>,
    /// Warnings about potential issues (non-fatal)
    pub warnings: Vec<String>,
    /// Statistics gathered during validation
    pub stats: MagicStats,
}

/// Statistics gathered during rule set validation
#[derive(Debug, Clone, Default)]
pub struct MagicStats {
    /// Total number of match nodes in the tree
    pub node_count: u32,
    /// Depth of the deepest node (top-level nodes are depth 1)
    pub max_depth: u32,
    /// Length of the longest value in bytes
    pub max_value_len: usize,
}

impl MagicValidationResult {
    fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
            stats: MagicStats::default(),
        }
    }

    /// Check if validation passed (no errors)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validate a rule set.
///
/// Errors: a mask whose length differs from its value. Warnings: priority
/// above 100, an empty match list, zero-length offset ranges (the node can
/// never match), and empty string values (the node matches everything).
pub fn validate_rule_set(rule_set: &MagicRuleSet) -> MagicValidationResult {
    let mut result = MagicValidationResult::new();

    if rule_set.priority > 100 {
        result.warnings.push(format!(
            "priority {} is outside the 0-100 range",
            rule_set.priority
        ));
    }
    if rule_set.matches.is_empty() {
        result
            .warnings
            .push("rule set has no match nodes and can never match".to_string());
    }

    for node in &rule_set.matches {
        validate_node(node, 1, &mut result);
    }
    result
}

fn validate_node(node: &MagicMatchNode, depth: u32, result: &mut MagicValidationResult) {
    result.stats.node_count += 1;
    result.stats.max_depth = result.stats.max_depth.max(depth);
    result.stats.max_value_len = result.stats.max_value_len.max(node.value.len());

    if let Some(mask) = &node.mask {
        if mask.len() != node.value.len() {
            result.errors.push(format!(
                "node at offset {} has a {}-byte mask for a {}-byte value",
                node.offset.start,
                mask.len(),
                node.value.len()
            ));
        }
    }
    if node.offset.length == 0 {
        result.warnings.push(format!(
            "node at offset {} has an empty offset range and can never match",
            node.offset.start
        ));
    }
    if node.value.is_empty() {
        result.warnings.push(format!(
            "node at offset {} has an empty value and matches any buffer",
            node.offset.start
        ));
    }

    for child in &node.children {
        validate_node(child, depth + 1, result);
    }
}
