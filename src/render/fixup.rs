//! Paragraph-level text fixups
//!
//! Host-rendered text can contain emphasis wrapped twice (`\textbf{\textbf{x}}`) when nested
//! markup was composed, and Entry bodies must not end in a paragraph break because the entry
//! macro adds its own spacing.
//!
//! Paragraph splitting leaves leading indentation alone and never splits inside verbatim-like
//! environments, whose blank lines belong to their content.

use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

const EMPHASIS: [&str; 4] = ["textbf", "textit", "emph", "underline"];

static EMPTY_EMPHASIS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\\(?:textbf|textit|emph|underline)\{\}").expect("valid empty emphasis regex")
});

static PARAGRAPH_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n[ \t]*\n(?:[ \t]*\n)*").expect("valid paragraph break regex"));

static VERBATIM_ENV: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?s)\\begin\{(?:verbatim\*?|Verbatim|lstlisting|minted)\}.*?\\end\{(?:verbatim\*?|Verbatim|lstlisting|minted)\}",
    )
    .expect("valid verbatim environment regex")
});

/// Split text into non-empty paragraphs on blank lines.
///
/// Trailing whitespace is trimmed from each paragraph; indentation of its first line is kept.
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    let verbatim: Vec<Range<usize>> = VERBATIM_ENV.find_iter(text).map(|m| m.range()).collect();
    let mut paragraphs = Vec::new();
    let mut start = 0;
    for brk in PARAGRAPH_BREAK.find_iter(text) {
        if verbatim
            .iter()
            .any(|env| env.start < brk.start() && brk.end() <= env.end)
        {
            continue;
        }
        paragraphs.push(&text[start..brk.start()]);
        start = brk.end();
    }
    paragraphs.push(&text[start..]);
    paragraphs
        .into_iter()
        .map(|p| p.trim_start_matches(['\r', '\n']).trim_end())
        .filter(|p| !p.is_empty())
        .collect()
}

/// Apply the fixups to every paragraph of a node's own text.
///
/// Returns the paragraphs joined by blank lines with a final newline, or an empty string.
pub fn paragraphs(text: &str, in_entry: bool) -> String {
    let fixed: Vec<String> = split_paragraphs(text)
        .into_iter()
        .map(|p| fix_paragraph(p, in_entry))
        .filter(|p| !p.is_empty())
        .collect();
    if fixed.is_empty() {
        String::new()
    } else {
        format!("{}\n", fixed.join("\n\n"))
    }
}

pub fn fix_paragraph(paragraph: &str, in_entry: bool) -> String {
    let collapsed = collapse_emphasis(paragraph);
    if in_entry {
        strip_trailing_break(&collapsed).to_string()
    } else {
        collapsed.trim_end().to_string()
    }
}

/// Collapse directly nested identical emphasis and drop empty emphasis groups.
pub fn collapse_emphasis(text: &str) -> String {
    let mut out = text.to_string();
    for command in EMPHASIS {
        out = collapse_nested(&out, command);
    }
    EMPTY_EMPHASIS.replace_all(&out, "").into_owned()
}

fn collapse_nested(text: &str, command: &str) -> String {
    let open = format!("\\{command}{{");
    let doubled = format!("{open}{open}");
    let mut out = text.to_string();
    let mut search_from = 0;
    while let Some(offset) = out[search_from..].find(&doubled) {
        let start = search_from + offset;
        let inner_open = start + open.len();
        let inner_body = inner_open + open.len();
        match matching_brace(&out, inner_body) {
            Some(close) if out[close + 1..].starts_with('}') => {
                out.replace_range(close..close + 1, "");
                out.replace_range(inner_open..inner_body, "");
                // Stay put: a third level of nesting may now be directly inside.
                search_from = start;
            }
            _ => search_from = start + 1,
        }
    }
    out
}

/// Byte index of the brace closing a group whose body starts at `from`.
fn matching_brace(text: &str, from: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut depth = 1usize;
    let mut i = from;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => {
                i += 2;
                continue;
            }
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
        i += 1;
    }
    None
}

/// Remove trailing `\par`, `\\` and whitespace.
pub fn strip_trailing_break(text: &str) -> &str {
    let mut rest = text.trim_end();
    loop {
        let stripped = rest
            .strip_suffix("\\par")
            .or_else(|| rest.strip_suffix("\\\\"))
            .map(str::trim_end);
        match stripped {
            Some(s) => rest = s,
            None => return rest,
        }
    }
}
