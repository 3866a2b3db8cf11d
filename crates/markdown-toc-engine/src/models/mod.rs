pub mod heading;
pub mod toc_node;

pub use heading::{Heading, MAX_DEPTH, MIN_DEPTH};
pub use toc_node::{TocNode, Walk, find_by_slug, node_count, walk_forest};
