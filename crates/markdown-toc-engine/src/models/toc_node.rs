use serde::{Deserialize, Serialize};

use super::Heading;

/// Key the builder owns on every output node
const SUBHEADINGS_KEY: &str = "subheadings";

/// A heading placed in the ToC, together with the headings nested under it.
///
/// Serializes as the heading's own fields plus a `subheadings` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocNode {
    #[serde(flatten)]
    pub heading: Heading,
    #[serde(default)]
    pub subheadings: Vec<TocNode>,
}

impl TocNode {
    /// Wrap a heading with no children yet.
    ///
    /// A passthrough field called `subheadings` would clash with the node's
    /// own children, so it is discarded.
    pub fn new(mut heading: Heading) -> Self {
        heading.extra.remove(SUBHEADINGS_KEY);
        Self {
            heading,
            subheadings: Vec::new(),
        }
    }

    pub fn depth(&self) -> Option<i64> {
        self.heading.depth
    }

    pub fn text(&self) -> &str {
        &self.heading.text
    }

    pub fn slug(&self) -> &str {
        &self.heading.slug
    }

    /// Depth-first, pre-order walk of this node and everything below it
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            stack: vec![(0, self)],
        }
    }
}

/// Pre-order iterator over ToC nodes, yielding each node with its nesting
/// level (0 for the node the walk started from).
#[derive(Debug, Clone)]
pub struct Walk<'a> {
    stack: Vec<(usize, &'a TocNode)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a TocNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (level, node) = self.stack.pop()?;
        self.stack
            .extend(node.subheadings.iter().rev().map(|child| (level + 1, child)));
        Some((level, node))
    }
}

/// Walk every tree of a forest in document order
pub fn walk_forest(forest: &[TocNode]) -> Walk<'_> {
    Walk {
        stack: forest.iter().rev().map(|node| (0, node)).collect(),
    }
}

/// Total number of nodes in a forest, at every level
pub fn node_count(forest: &[TocNode]) -> usize {
    walk_forest(forest).count()
}

/// First node (in document order) carrying the given slug
pub fn find_by_slug<'a>(forest: &'a [TocNode], slug: &str) -> Option<&'a TocNode> {
    walk_forest(forest)
        .map(|(_, node)| node)
        .find(|node| node.slug() == slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn node(depth: i64, text: &str, subheadings: Vec<TocNode>) -> TocNode {
        TocNode {
            heading: Heading::new(depth, text.to_lowercase(), text),
            subheadings,
        }
    }

    fn sample_forest() -> Vec<TocNode> {
        vec![
            node(1, "Intro", vec![]),
            node(
                2,
                "Usage",
                vec![
                    node(3, "Install", vec![node(4, "Linux", vec![])]),
                    node(3, "Run", vec![]),
                ],
            ),
        ]
    }

    #[test]
    fn test_new_node_has_no_children() {
        let node = TocNode::new(Heading::new(2, "a", "A"));
        assert!(node.subheadings.is_empty());
        assert_eq!(node.depth(), Some(2));
        assert_eq!(node.text(), "A");
        assert_eq!(node.slug(), "a");
    }

    #[test]
    fn test_new_node_drops_passthrough_subheadings() {
        let heading = Heading::new(1, "a", "A")
            .with_extra("subheadings", json!(["stale"]))
            .with_extra("line", json!(4));
        let node = TocNode::new(heading);

        assert!(!node.heading.extra.contains_key("subheadings"));
        assert_eq!(node.heading.extra.get("line"), Some(&json!(4)));
    }

    #[test]
    fn test_walk_forest_is_pre_order_with_levels() {
        let forest = sample_forest();
        let visited: Vec<(usize, &str)> = walk_forest(&forest)
            .map(|(level, node)| (level, node.text()))
            .collect();

        assert_eq!(
            visited,
            vec![
                (0, "Intro"),
                (0, "Usage"),
                (1, "Install"),
                (2, "Linux"),
                (1, "Run"),
            ]
        );
    }

    #[test]
    fn test_walk_from_single_node() {
        let forest = sample_forest();
        let texts: Vec<&str> = forest[1].walk().map(|(_, node)| node.text()).collect();
        assert_eq!(texts, vec!["Usage", "Install", "Linux", "Run"]);
    }

    #[test]
    fn test_node_count_and_find() {
        let forest = sample_forest();
        assert_eq!(node_count(&forest), 5);
        assert_eq!(node_count(&[]), 0);

        let linux = find_by_slug(&forest, "linux").unwrap();
        assert_eq!(linux.depth(), Some(4));
        assert!(find_by_slug(&forest, "missing").is_none());
    }

    #[test]
    fn test_serializes_heading_fields_flat() {
        let node = node(2, "Usage", vec![node(3, "Run", vec![])]);
        let value = serde_json::to_value(&node).unwrap();

        assert_eq!(
            value,
            json!({
                "depth": 2,
                "slug": "usage",
                "text": "Usage",
                "subheadings": [
                    {"depth": 3, "slug": "run", "text": "Run", "subheadings": []}
                ]
            })
        );
    }
}
