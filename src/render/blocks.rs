//! One renderer per role
//!
//! Every function takes the node, its rendered content (own fixed-up text followed by the
//! rendered children) and the node's [RenderContext], and returns a fragment ending in a
//! newline. The macros used here are defined by the bundled schema style.

use super::context::RenderContext;
use super::fixup::{split_paragraphs, strip_trailing_break};
use crate::dates::{self, DateContext};
use crate::document::Node;

/// Emitted by skills subsections; its presence changes the spacing before the separator.
pub const INLINE_LABEL_MARKER: &str = "\\cvlabel{";

const SEPARATOR: &str = "\\cvseparator\n";

fn date_range(node: &Node, ctx: &RenderContext) -> String {
    dates::format_range(
        node.property("FROM"),
        node.property("TO"),
        ctx.date_context,
        ctx.locale,
    )
}

pub fn summary(node: &Node, content: &str) -> String {
    let groups = split_paragraphs(content);
    let mut out = format!("\\cvsection{{{}}}\n\\begin{{cvsummary}}\n", node.title);
    match groups.as_slice() {
        [] => {}
        [only] => {
            out.push_str(only);
            out.push('\n');
        }
        [first, second, rest @ ..] => {
            out.push_str(&format!("\\cvcolumns{{{first}}}{{{second}}}\n"));
            if !rest.is_empty() {
                out.push_str(&rest.join("\n\n"));
                out.push('\n');
            }
        }
    }
    out.push_str("\\end{cvsummary}\n");
    out.push_str(SEPARATOR);
    out
}

pub fn entry(node: &Node, content: &str, ctx: &RenderContext) -> String {
    let dates = date_range(node, ctx);
    let body = strip_trailing_break(content);
    let body = match (ctx.date_context, node.property("EMPLOYER")) {
        (DateContext::Education, Some(employer)) if body.is_empty() => {
            format!("\\textit{{{employer}}}")
        }
        (DateContext::Education, Some(employer)) => {
            format!("\\textit{{{employer}}}\\newline{{}}{body}")
        }
        _ => body.to_string(),
    };
    format!("\\cventry{{{}}}{{{dates}}}{{{body}}}\n", node.title)
}

/// Skills sections and their subsections.
///
/// At the top level this is a heading over the children; deeper down the node collapses into
/// an inline `label: body` run.
pub fn skills(node: &Node, content: &str, children: &str, ctx: &RenderContext) -> String {
    if node.level > 1 {
        let body = split_paragraphs(content).join(" ");
        return format!("\\cvlabel{{{}}}{{{body}}}\n", node.title);
    }
    let mut out = format!("\\cvsection{{{}}}\n{content}", node.title);
    if !ctx.is_last_top_level_sibling {
        if children.contains(INLINE_LABEL_MARKER) {
            out.push_str("\\medskip\n");
        }
        out.push_str(SEPARATOR);
    }
    out
}

pub fn group(node: &Node, content: &str, ctx: &RenderContext) -> String {
    let dates = date_range(node, ctx);
    let mut out = if dates.is_empty() {
        format!("\\cvsection{{{}}}\n{content}", node.title)
    } else {
        format!("\\cvsection[{dates}]{{{}}}\n{content}", node.title)
    };
    if !ctx.is_last_top_level_sibling {
        out.push_str(SEPARATOR);
    }
    out
}

pub fn generic(node: &Node, content: &str) -> String {
    let name = match node.property("URL") {
        Some(url) => format!("\\href{{{url}}}{{{}}}", node.title),
        None => node.title.clone(),
    };
    let location = node
        .property("LOCATION")
        .map(|l| format!("\\cvlocation{{{l}}}"))
        .unwrap_or_default();
    format!("\\cvblock{{{name}}}{{{location}}}\n{content}")
}
