//! Table-of-contents construction.
//!
//! [`generate_toc`] turns the flat, ordered heading list of a document into
//! a forest of [`TocNode`]s. Placement is deliberately forgiving: headings
//! that cannot be nested sensibly are kept at the top level and reported to
//! a [`DiagnosticSink`] instead of failing the build.
//!
//! ## Placement
//!
//! - Depth 1 and 2 always start a new top-level entry.
//! - Deeper headings nest under the last top-level entry, descending its
//!   rightmost spine by the depth gap.
//! - A deeper heading with no usable top-level parent, or shallower than
//!   that parent, becomes a top-level entry itself.
//!
//! ```text
//! # A          A
//! ## B    →    B
//! ### C          └── C
//! ```

pub mod diagnostics;
mod spine;

pub use diagnostics::{DiagnosticSink, LogSink, TocDiagnostic};

use crate::models::{Heading, TocNode};

pub(crate) const LOG_TARGET: &str = "markdown_toc::toc";

/// Build a ToC forest, reporting anomalies through the `log` facade.
pub fn generate_toc(headings: &[Heading]) -> Vec<TocNode> {
    generate_toc_with(headings, &mut LogSink)
}

/// Build a ToC forest, reporting anomalies to `sink`.
///
/// Headings without an integer depth in `MIN_DEPTH..=MAX_DEPTH` are dropped
/// silently before placement. Never fails; the worst case is a flat list.
pub fn generate_toc_with<S>(headings: &[Heading], sink: &mut S) -> Vec<TocNode>
where
    S: DiagnosticSink + ?Sized,
{
    let body: Vec<&Heading> = headings
        .iter()
        .filter(|heading| heading.valid_depth().is_some())
        .collect();
    log::debug!(
        target: LOG_TARGET,
        "building toc from {} of {} headings",
        body.len(),
        headings.len()
    );

    let mut toc = Vec::new();
    for heading in body {
        let node = TocNode::new(heading.clone());

        // Unreachable behind the filter above; kept in case the filter is relaxed.
        let Some(depth) = node.depth() else {
            sink.warn(TocDiagnostic::MissingDepth {
                text: node.text().to_string(),
            });
            continue;
        };

        place(&mut toc, node, depth, sink);
    }
    toc
}

fn place<S>(toc: &mut Vec<TocNode>, node: TocNode, depth: i64, sink: &mut S)
where
    S: DiagnosticSink + ?Sized,
{
    if depth == 1 || depth == 2 {
        toc.push(node);
        return;
    }

    let Some(parent) = toc.last_mut() else {
        sink.warn(TocDiagnostic::NoParentAvailable {
            depth,
            text: node.text().to_string(),
        });
        toc.push(node);
        return;
    };

    let Some(parent_depth) = parent.depth() else {
        sink.warn(TocDiagnostic::InvalidParentDepth {
            text: node.text().to_string(),
            parent_text: parent.text().to_string(),
        });
        toc.push(node);
        return;
    };

    if depth < parent_depth {
        sink.warn(TocDiagnostic::OrphanDepthRegression {
            depth,
            parent_depth,
            text: node.text().to_string(),
        });
        toc.push(node);
        return;
    }

    let path = spine::dive_path(parent, depth - parent_depth);
    spine::children_at_mut(parent, &path).push(node);
}
