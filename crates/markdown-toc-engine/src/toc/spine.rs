//! Rightmost-spine descent used to find where a nested heading goes.
//!
//! The descent is split in two so no reference into the tree is held while
//! it is walked: [`dive_path`] reads the tree and records child indices,
//! [`children_at_mut`] resolves those indices to the live child list.

use crate::models::TocNode;

/// Child indices leading from `node` to the list a heading `levels` below
/// it should be appended to.
///
/// Follows the last child at each step. Stops after `levels - 1` steps, or
/// earlier when the spine runs out; an empty path means "`node`'s own
/// children". `levels` never exceeds the span of the depth range.
pub(crate) fn dive_path(node: &TocNode, levels: i64) -> Vec<usize> {
    let mut path = Vec::new();
    let mut current = node;
    let mut remaining = levels;

    while remaining > 1 {
        let Some(last_child) = current.subheadings.last() else {
            break;
        };
        path.push(current.subheadings.len() - 1);
        current = last_child;
        remaining -= 1;
    }

    path
}

/// The child list at the end of `path`, starting from `node`
pub(crate) fn children_at_mut<'a>(
    node: &'a mut TocNode,
    path: &[usize],
) -> &'a mut Vec<TocNode> {
    let mut current = node;
    for &index in path {
        current = &mut current.subheadings[index];
    }
    &mut current.subheadings
}
