//! Document assembly
//!
//! The [Assembler] is the top-level driver: it resolves the locale once, builds the header
//! block from [DocumentMetadata], renders the sections and fills the [Schema] envelope.
//!
//! Header lines are built from whatever fields are present. Absent or blank fields are skipped
//! without leaving separators behind, and a line with no fields is omitted entirely.

use crate::document::{present, Document, DocumentMetadata};
use crate::locale::{self, Locale};
use crate::render::{HeadingPassThrough, PassThrough, Renderer};
use crate::schema::{Schema, Slots};

/// Joins fields on the contact and address lines.
pub const FIELD_SEPARATOR: &str = " \\cvbullet{} ";

/// Knobs that change the output for the same input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssembleOptions {
    /// Use this locale instead of detecting it from the preamble
    pub locale: Option<Locale>,
    /// Text of a `% Generated by vitae on ...` comment; no comment when `None`
    pub stamp: Option<String>,
}

pub struct Assembler {
    schema: Schema,
    pass_through: Box<dyn PassThrough>,
    options: AssembleOptions,
}

impl Assembler {
    pub fn new(schema: Schema) -> Self {
        Assembler {
            schema,
            pass_through: Box::new(HeadingPassThrough),
            options: AssembleOptions::default(),
        }
    }

    pub fn with_pass_through(mut self, pass_through: impl PassThrough + 'static) -> Self {
        self.pass_through = Box::new(pass_through);
        self
    }

    pub fn with_options(mut self, options: AssembleOptions) -> Self {
        self.options = options;
        self
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Locale for `doc`: the configured override, else detection from its preamble.
    pub fn locale_for(&self, doc: &Document) -> Locale {
        self.options
            .locale
            .unwrap_or_else(|| locale::detect(&doc.metadata.preamble))
    }

    pub fn assemble(&self, doc: &Document) -> String {
        let locale = self.locale_for(doc);
        tracing::debug!(
            %locale,
            sections = doc.sections.len(),
            pass_through = self.pass_through.name(),
            "assembling document"
        );
        let body = Renderer::new(&*self.pass_through).render_sections(&doc.sections, locale);
        let header = header_block(&doc.metadata);
        let preamble = self.preamble(&doc.metadata);
        self.schema.fill(&Slots {
            preamble: &preamble,
            header: &header,
            body: &body,
        })
    }

    fn preamble(&self, metadata: &DocumentMetadata) -> String {
        let mut lines = Vec::new();
        if let Some(stamp) = &self.options.stamp {
            lines.push(format!("% Generated by vitae on {stamp}"));
        }
        let own = metadata.preamble.trim();
        if !own.is_empty() {
            lines.push(own.to_string());
        }
        lines.join("\n")
    }
}

/// Name, tagline, birthdate, contact and address lines.
pub fn header_block(metadata: &DocumentMetadata) -> String {
    let lines = [
        name_line(metadata).map(|name| format!("\\cvname{{{name}}}")),
        present(&metadata.title).map(|title| format!("\\cvtagline{{{title}}}")),
        present(&metadata.birthdate).map(|date| format!("\\cvbirth{{{date}}}")),
        contact_line(metadata).map(|line| format!("\\cvcontact{{{line}}}")),
        address_line(metadata).map(|line| format!("\\cvaddress{{{line}}}")),
    ];
    lines
        .into_iter()
        .flatten()
        .map(|line| line + "\n")
        .collect()
}

/// First and last name, or the author field when both are missing.
pub fn name_line(metadata: &DocumentMetadata) -> Option<String> {
    let parts: Vec<&str> = [present(&metadata.first_name), present(&metadata.last_name)]
        .into_iter()
        .flatten()
        .collect();
    if parts.is_empty() {
        present(&metadata.author).map(str::to_string)
    } else {
        Some(parts.join(" "))
    }
}

pub fn contact_line(metadata: &DocumentMetadata) -> Option<String> {
    let phone = present(&metadata.phone).or_else(|| present(&metadata.mobile));
    let fields = [
        present(&metadata.email).map(|email| format!("\\href{{mailto:{email}}}{{{email}}}")),
        phone.map(format_phone),
        present(&metadata.homepage).map(website_link),
        present(&metadata.github).map(|h| profile_link("https://github.com/", h)),
        present(&metadata.linkedin).map(|h| profile_link("https://www.linkedin.com/in/", h)),
    ];
    join_fields(fields.into_iter().flatten().collect())
}

pub fn address_line(metadata: &DocumentMetadata) -> Option<String> {
    let fields = [
        present(&metadata.street),
        present(&metadata.city),
        present(&metadata.state),
        present(&metadata.country),
    ];
    join_fields(fields.into_iter().flatten().map(str::to_string).collect())
}

fn join_fields(fields: Vec<String>) -> Option<String> {
    if fields.is_empty() {
        None
    } else {
        Some(fields.join(FIELD_SEPARATOR))
    }
}

/// Set a leading international `+` apart from the digits.
pub fn format_phone(raw: &str) -> String {
    match raw.trim().strip_prefix('+') {
        Some(rest) => format!("\\cvdial{{+}}{}", rest.trim_start()),
        None => raw.trim().to_string(),
    }
}

fn website_link(url: &str) -> String {
    let label = url
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_end_matches('/');
    let target = if url.contains("://") {
        url.to_string()
    } else {
        format!("https://{url}")
    };
    format!("\\href{{{target}}}{{{label}}}")
}

/// Link a handle (or a full profile URL) to a profile page.
fn profile_link(base: &str, handle: &str) -> String {
    if handle.contains("://") {
        let label = handle
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or(handle);
        return format!("\\href{{{handle}}}{{{label}}}");
    }
    let handle = handle.trim_start_matches('@');
    format!("\\href{{{base}{handle}}}{{{handle}}}")
}
