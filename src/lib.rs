//! Outline tree to LaTeX CV transcoding
//!
//!     This crate turns a tree of titled sections (each with tags, properties and already
//!     rendered inline text) into a single LaTeX document that follows a fixed CV schema:
//!     a header block, a summary, timeline entries, skills and generic sections.
//!
//!     This is a pure lib: parsing the authoring format into a tree and typesetting the
//!     resulting LaTeX belong to other tools. The only I/O here is the optional loading of a
//!     serialized tree (JSON or YAML) in [document].
//!
//! Architecture
//!
//!     The pipeline is a single pass over the tree:
//!
//!     .
//!     ├── document.rs       # Node, Document, DocumentMetadata and loading
//!     ├── locale.rs         # Locale detection from preamble text
//!     ├── dates.rs          # Date token parsing and rendering
//!     ├── roles.rs          # Role classification
//!     ├── boundary.rs       # Last top-level sibling detection
//!     ├── render.rs         # Per-role renderers, context and text fixups
//!     ├── schema.rs         # The fixed LaTeX schema (style + envelope)
//!     └── assemble.rs       # Header building and document assembly
//!
//!     Classification never looks at rendered text, and renderers never look at preamble
//!     text: everything they need arrives through [render::RenderContext].
//!
//! Error handling
//!
//!     Transcoding is infallible. Missing fields are omitted, free-text dates pass through,
//!     unknown sections fall back to the pass-through renderer. [VitaeError] only covers
//!     loading input.
//!
pub mod assemble;
pub mod boundary;
pub mod dates;
pub mod document;
pub mod error;
pub mod locale;
pub mod render;
pub mod roles;
pub mod schema;

pub use assemble::{AssembleOptions, Assembler};
pub use dates::{DateContext, DateToken};
pub use document::{load_document, Document, DocumentMetadata, Node};
pub use error::{VitaeError, VitaeResult};
pub use locale::Locale;
pub use render::{HeadingPassThrough, PassThrough, PlainPassThrough, RenderContext};
pub use roles::Role;
pub use schema::Schema;

/// Converts a document to LaTeX using the bundled schema and default options.
///
/// Shorthand for `Assembler::new(Schema::bundled()).assemble(doc)`.
pub fn to_latex(doc: &Document) -> String {
    Assembler::new(Schema::bundled()).assemble(doc)
}
