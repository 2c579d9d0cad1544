//! The fixed LaTeX schema
//!
//! The schema is two constant texts: the style (macro and environment definitions) and the
//! envelope (document class, placeholders, begin/end markers). Both ship inside the binary;
//! the assembler only fills the envelope's placeholders:
//!
//! | Placeholder           | Filled with                                 |
//! |-----------------------|---------------------------------------------|
//! | `%%VITAE-STYLE%%`     | the style text                              |
//! | `%%VITAE-PREAMBLE%%`  | the document's own preamble lines and stamp |
//! | `%%VITAE-HEADER%%`    | name, contact and address lines             |
//! | `%%VITAE-BODY%%`      | the rendered sections                       |
//!
//! A placeholder whose value is empty disappears together with its line.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::borrow::Cow;

const BUNDLED_STYLE: &str = include_str!("../templates/vitae.sty");
const BUNDLED_ENVELOPE: &str = include_str!("../templates/envelope.tex");

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"%%VITAE-([A-Z]+)%%\n?").expect("valid placeholder regex"));

/// Values for the envelope placeholders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Slots<'a> {
    pub preamble: &'a str,
    pub header: &'a str,
    pub body: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    style: Cow<'static, str>,
    envelope: Cow<'static, str>,
}

impl Schema {
    /// The schema shipped with this crate.
    pub fn bundled() -> Self {
        Schema {
            style: Cow::Borrowed(BUNDLED_STYLE),
            envelope: Cow::Borrowed(BUNDLED_ENVELOPE),
        }
    }

    /// A custom schema. The envelope should contain the same placeholders as the bundled one.
    pub fn new(style: impl Into<String>, envelope: impl Into<String>) -> Self {
        Schema {
            style: Cow::Owned(style.into()),
            envelope: Cow::Owned(envelope.into()),
        }
    }

    /// The style text on its own, for use outside of generated documents.
    pub fn style(&self) -> &str {
        &self.style
    }

    pub fn envelope(&self) -> &str {
        &self.envelope
    }

    /// Fill the envelope in a single pass; inserted text is never rescanned.
    pub fn fill(&self, slots: &Slots<'_>) -> String {
        PLACEHOLDER
            .replace_all(&self.envelope, |caps: &Captures<'_>| {
                let value = match &caps[1] {
                    "STYLE" => &*self.style,
                    "PREAMBLE" => slots.preamble,
                    "HEADER" => slots.header,
                    "BODY" => slots.body,
                    _ => return caps[0].to_string(),
                };
                let value = value.trim_end_matches('\n');
                if value.is_empty() {
                    String::new()
                } else {
                    format!("{value}\n")
                }
            })
            .into_owned()
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::bundled()
    }
}
