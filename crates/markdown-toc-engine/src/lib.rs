//! # markdown-toc-engine
//!
//! Builds a hierarchical table of contents from the flat, ordered list of
//! headings of a document.
//!
//! ```rust
//! use markdown_toc_engine::{Heading, generate_toc};
//!
//! let headings = vec![
//!     Heading::new(1, "guide", "Guide"),
//!     Heading::new(2, "install", "Install"),
//!     Heading::new(3, "linux", "Linux"),
//! ];
//!
//! let toc = generate_toc(&headings);
//! assert_eq!(toc.len(), 2);
//! assert_eq!(toc[1].subheadings[0].text(), "Linux");
//! ```

pub mod io;
pub mod models;
pub mod toc;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use io::{IoError, read_headings, read_headings_from_path, write_toc};
pub use models::*;
pub use toc::{DiagnosticSink, LogSink, TocDiagnostic, generate_toc, generate_toc_with};
