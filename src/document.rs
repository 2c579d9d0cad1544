//! Document tree consumed by the transcoder
//!
//! A [Document] is the host's finished outline: header metadata plus the ordered top-level
//! sections. Nodes carry their own rendered body text; children are rendered separately and
//! never appear inside a parent's `text`.
//!
//! Trees can be built in code or loaded from JSON/YAML. Loaded trees have their levels
//! recomputed from nesting so that `child.level == parent.level + 1` always holds.

use crate::error::{VitaeError, VitaeResult};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

/// One section of the outline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Depth in the outline, starting at 1 for top-level sections
    #[serde(default)]
    pub level: usize,
    /// Heading text, already converted to inline LaTeX by the host
    pub title: String,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    /// Raw property values keyed by name; lookups ignore key case
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
    /// Body content directly under this heading, excluding children
    #[serde(default, alias = "inline_text")]
    pub text: String,
    #[serde(default)]
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(level: usize, title: impl Into<String>) -> Self {
        Node {
            level,
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Append a child, re-levelling its subtree under this node.
    pub fn with_child(mut self, mut child: Node) -> Self {
        child.set_level(self.level + 1);
        self.children.push(child);
        self
    }

    /// Case-insensitive tag membership.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    /// Case-insensitive property lookup. Blank values count as absent.
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.trim())
            .filter(|v| !v.is_empty())
    }

    fn set_level(&mut self, level: usize) {
        self.level = level;
        for child in &mut self.children {
            child.set_level(level + 1);
        }
    }
}

/// Header fields taken from document-level settings.
///
/// Every field is optional; blank strings are treated the same as missing ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentMetadata {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub author: Option<String>,
    /// Tagline shown under the name (current position, headline)
    pub title: Option<String>,
    pub birthdate: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub mobile: Option<String>,
    pub homepage: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    /// Raw preamble lines collected by the host (package loads, language settings)
    pub preamble: String,
}

/// Trimmed, non-blank view of an optional field.
pub(crate) fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// A complete CV outline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub metadata: DocumentMetadata,
    #[serde(default)]
    pub sections: Vec<Node>,
}

impl Document {
    pub fn new(metadata: DocumentMetadata, sections: Vec<Node>) -> Self {
        let mut doc = Document { metadata, sections };
        doc.normalize_levels();
        doc
    }

    pub fn from_json(source: &str) -> VitaeResult<Self> {
        let mut doc: Document = serde_json::from_str(source)?;
        doc.normalize_levels();
        Ok(doc)
    }

    pub fn from_yaml(source: &str) -> VitaeResult<Self> {
        let mut doc: Document = serde_yaml::from_str(source)?;
        doc.normalize_levels();
        Ok(doc)
    }

    /// Recompute every node level from its nesting depth.
    pub fn normalize_levels(&mut self) {
        for section in &mut self.sections {
            section.set_level(1);
        }
    }
}

/// Load a document tree from a `.json`, `.yaml` or `.yml` file.
pub fn load_document(path: impl AsRef<Path>) -> VitaeResult<Document> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    let source = fs::read_to_string(path).map_err(|e| VitaeError::io(path, e))?;
    tracing::debug!(path = %path.display(), format = %extension, "loading document");
    match extension.as_str() {
        "json" => Document::from_json(&source),
        "yaml" | "yml" => Document::from_yaml(&source),
        other => Err(VitaeError::UnknownInputFormat(other.to_string())),
    }
}
