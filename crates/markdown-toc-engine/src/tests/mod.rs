use crate::models::{Heading, TocNode, walk_forest};

/// Heading with a slug derived from its text
pub fn heading(depth: i64, text: &str) -> Heading {
    Heading::new(depth, text.to_lowercase().replace(' ', "-"), text)
}

/// Indented outline of a forest, one node per line, for snapshot assertions
pub fn outline(forest: &[TocNode]) -> String {
    walk_forest(forest)
        .map(|(level, node)| {
            let depth = node
                .depth()
                .map_or_else(|| "?".to_string(), |depth| depth.to_string());
            format!("{}- {} ({depth})", "  ".repeat(level), node.text())
        })
        .collect::<Vec<_>>()
        .join("\n")
}
