//! Non-fatal anomalies reported while placing headings.
//!
//! None of these stop a build: the heading is either skipped or falls back
//! to the top level, and the diagnostic goes to whichever [`DiagnosticSink`]
//! the caller supplied.

use super::LOG_TARGET;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TocDiagnostic {
    /// The node had no usable depth; it was skipped
    #[error("Invalid heading depth for: {text}")]
    MissingDepth { text: String },

    /// A deep heading arrived before any top-level node; placed at top level
    #[error("No parent heading found for depth {depth}: {text}")]
    NoParentAvailable { depth: i64, text: String },

    /// The candidate parent had no usable depth; placed at top level
    #[error("Invalid parent heading depth for: {text} (parent: {parent_text})")]
    InvalidParentDepth { text: String, parent_text: String },

    /// Depth went back up past the last top-level node; placed at top level
    #[error("Orphan heading found: {text}. Adding as top level.")]
    OrphanDepthRegression {
        depth: i64,
        parent_depth: i64,
        text: String,
    },
}

/// Receiver for builder diagnostics
pub trait DiagnosticSink {
    fn warn(&mut self, diagnostic: TocDiagnostic);
}

/// Forwards every diagnostic to the `log` facade at warn level
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn warn(&mut self, diagnostic: TocDiagnostic) {
        log::warn!(target: LOG_TARGET, "{diagnostic}");
    }
}

impl DiagnosticSink for Vec<TocDiagnostic> {
    fn warn(&mut self, diagnostic: TocDiagnostic) {
        self.push(diagnostic);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn warn(&mut self, diagnostic: TocDiagnostic) {
        (**self).warn(diagnostic);
    }
}
