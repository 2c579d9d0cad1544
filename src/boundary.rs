//! Top-level sibling boundaries
//!
//! Only the last top-level section drops its trailing separator. Nested nodes never count as
//! siblings of top-level ones.

use crate::document::Node;

/// Whether `sections[index]` is a level-1 node with no later level-1 sibling.
pub fn is_last_top_level_sibling(sections: &[Node], index: usize) -> bool {
    match sections.get(index) {
        Some(node) if node.level == 1 => !sections[index + 1..].iter().any(|n| n.level == 1),
        _ => false,
    }
}
