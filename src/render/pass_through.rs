//! Fallback rendering for sections without a CV role
//!
//! Sections that classify as [Role::Plain](crate::roles::Role::Plain) are handed to a
//! [PassThrough] collaborator, which stands in for the host's generic LaTeX export. The
//! assembler receives it as a value so callers can substitute their own.

use crate::document::Node;

/// Generic conversion for unclassified sections.
pub trait PassThrough: Send + Sync {
    fn name(&self) -> &str;

    /// Render `node` around its already rendered `content` (own text followed by children).
    fn render(&self, node: &Node, content: &str) -> String;
}

/// Starred sectioning commands chosen by depth, like a plain article export.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadingPassThrough;

impl PassThrough for HeadingPassThrough {
    fn name(&self) -> &str {
        "headings"
    }

    fn render(&self, node: &Node, content: &str) -> String {
        let command = match node.level {
            0 | 1 => "section*",
            2 => "subsection*",
            3 => "subsubsection*",
            4 => "paragraph",
            _ => "subparagraph",
        };
        format!("\\{command}{{{}}}\n{content}", node.title)
    }
}

/// Bold run-in title followed by the content, no sectioning.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainPassThrough;

impl PassThrough for PlainPassThrough {
    fn name(&self) -> &str {
        "plain"
    }

    fn render(&self, node: &Node, content: &str) -> String {
        if node.title.trim().is_empty() {
            return content.to_string();
        }
        format!("\\textbf{{{}}}\\par\n{content}", node.title)
    }
}
