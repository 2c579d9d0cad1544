//! Subcommand handlers
//!
//! Each handler returns a printable error message; `main` reports it and exits non-zero.

use std::fs;
use vitae::roles::{classify, Role};
use vitae::{load_document, Node, Schema};
use vitae_config::Loader;

pub struct ConvertArgs {
    pub path: String,
    pub output: Option<String>,
    pub locale: Option<String>,
    pub config: Option<String>,
    pub stamp: bool,
}

pub fn convert(args: ConvertArgs) -> Result<(), String> {
    let mut loader = Loader::new();
    if let Some(config) = &args.config {
        loader = loader.with_file(config);
    }
    if let Some(locale) = &args.locale {
        loader = loader
            .set_override("render.locale", locale.as_str())
            .map_err(|e| format!("Invalid locale: {}", e))?;
    }
    if args.stamp {
        loader = loader
            .set_override("output.timestamp", true)
            .map_err(|e| format!("Invalid option: {}", e))?;
    }
    let config = loader
        .build()
        .map_err(|e| format!("Configuration failed: {}", e))?;

    let doc = load_document(&args.path).map_err(|e| e.to_string())?;
    tracing::info!(path = %args.path, sections = doc.sections.len(), "loaded outline");

    let latex = config
        .assembler(|| chrono::Local::now().format("%Y-%m-%d").to_string())
        .assemble(&doc);
    emit(&latex, args.output.as_deref())
}

pub fn schema(output: Option<&str>) -> Result<(), String> {
    emit(Schema::bundled().style(), output)
}

pub fn roles(path: &str) -> Result<(), String> {
    let doc = load_document(path).map_err(|e| e.to_string())?;
    print!("{}", role_outline(&doc.sections));
    Ok(())
}

/// One line per node: indented role name and title.
pub fn role_outline(sections: &[Node]) -> String {
    let mut out = String::new();
    for node in sections {
        push_outline(&mut out, node, None);
    }
    out
}

fn push_outline(out: &mut String, node: &Node, parent: Option<Role>) {
    let role = classify(node, parent);
    let indent = "  ".repeat(node.level.saturating_sub(1));
    out.push_str(&format!("{indent}{:<18}{}\n", role.name(), node.title));
    for child in &node.children {
        push_outline(out, child, Some(role));
    }
}

fn emit(text: &str, output: Option<&str>) -> Result<(), String> {
    match output {
        Some(path) => {
            fs::write(path, text).map_err(|e| format!("Error writing {}: {}", path, e))?;
            tracing::info!(path, bytes = text.len(), "wrote output");
        }
        None => print!("{}", text),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outline_shows_roles_by_depth() {
        let engineer = Node::new(3, "Engineer").with_tag("cventry");
        let sections = vec![
            Node::new(1, "Profile").with_tag("summary"),
            Node::new(1, "Work").with_child(Node::new(2, "Acme").with_child(engineer)),
        ];
        let outline = role_outline(&sections);
        assert_eq!(
            outline,
            concat!(
                "summary           Profile\n",
                "group             Work\n",
                "  generic           Acme\n",
                "    entry             Engineer\n",
            )
        );
    }
}
