//! Section rendering
//!
//!     The renderer walks the section tree once. For each node it resolves the role (using the
//!     parent's role from the context), renders the children with a descended context, fixes up
//!     the node's own paragraphs, and hands everything to the role's renderer in [blocks].
//!
//!     Top-level sections get a context that knows whether they are the last top-level sibling,
//!     which is what suppresses the trailing separator of the final section.
//!
//!     A top-level section tagged `newpage` or `pagebreak` is preceded by `\clearpage`.

pub mod blocks;
pub mod context;
pub mod fixup;
pub mod pass_through;

pub use context::RenderContext;
pub use pass_through::{HeadingPassThrough, PassThrough, PlainPassThrough};

use crate::boundary::is_last_top_level_sibling;
use crate::document::Node;
use crate::locale::Locale;
use crate::roles::{classify, Role};

const PAGE_BREAK_TAGS: [&str; 2] = ["newpage", "pagebreak"];

pub struct Renderer<'a> {
    pass_through: &'a dyn PassThrough,
}

impl<'a> Renderer<'a> {
    pub fn new(pass_through: &'a dyn PassThrough) -> Self {
        Renderer { pass_through }
    }

    /// Render the top-level sections in document order, separated by blank lines.
    pub fn render_sections(&self, sections: &[Node], locale: Locale) -> String {
        let fragments: Vec<String> = sections
            .iter()
            .enumerate()
            .map(|(index, node)| {
                let ctx =
                    RenderContext::top_level(locale, is_last_top_level_sibling(sections, index));
                let fragment = self.render_node(node, &ctx);
                if PAGE_BREAK_TAGS.iter().any(|tag| node.has_tag(tag)) {
                    format!("\\clearpage\n{fragment}")
                } else {
                    fragment
                }
            })
            .collect();
        fragments.join("\n")
    }

    pub fn render_node(&self, node: &Node, ctx: &RenderContext) -> String {
        let role = classify(node, ctx.parent_role());
        let child_ctx = ctx.descend(node, role);
        let children: String = node
            .children
            .iter()
            .map(|child| self.render_node(child, &child_ctx))
            .collect();
        let text = fixup::paragraphs(&node.text, ctx.in_entry || role == Role::Entry);
        let content = format!("{text}{children}");

        match role {
            Role::Summary => blocks::summary(node, &content),
            Role::Entry => blocks::entry(node, &content, ctx),
            Role::Skills | Role::SkillsSubsection => blocks::skills(node, &content, &children, ctx),
            Role::Group => blocks::group(node, &content, ctx),
            Role::Generic => blocks::generic(node, &content),
            Role::Plain => self.pass_through.render(node, &content),
        }
    }
}
