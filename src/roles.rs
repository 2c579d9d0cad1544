//! Section role classification
//!
//! Every node is mapped to exactly one [Role], which picks its renderer. Explicit markers on the
//! node itself (a tag, or the `CV_ENV` property) always win; otherwise the role follows from the
//! parent's role and from the node's depth:
//!
//! | Check                                   | Role             |
//! |-----------------------------------------|------------------|
//! | `summary` / `cvsummary` marker          | Summary          |
//! | `entry` / `cventry` marker              | Entry            |
//! | `skills` / `cvskills` marker            | Skills           |
//! | parent is Skills or SkillsSubsection    | SkillsSubsection |
//! | level 1                                 | Group            |
//! | level 2                                 | Generic          |
//! | anything else                           | Plain            |

use crate::document::Node;
use std::fmt;

/// Property that names a role explicitly.
pub const ROLE_PROPERTY: &str = "CV_ENV";

/// Semantic category of a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Summary,
    Entry,
    Skills,
    SkillsSubsection,
    /// Top-level section without an explicit role
    Group,
    /// Second-level block such as an employer or institution
    Generic,
    /// No role; rendered by the pass-through collaborator
    Plain,
}

impl Role {
    pub fn name(self) -> &'static str {
        match self {
            Role::Summary => "summary",
            Role::Entry => "entry",
            Role::Skills => "skills",
            Role::SkillsSubsection => "skills-subsection",
            Role::Group => "group",
            Role::Generic => "generic",
            Role::Plain => "plain",
        }
    }

    fn is_skills_family(self) -> bool {
        matches!(self, Role::Skills | Role::SkillsSubsection)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Explicit markers in precedence order; each role accepts a short and a `cv`-prefixed spelling.
const EXPLICIT: [(Role, [&str; 2]); 3] = [
    (Role::Summary, ["summary", "cvsummary"]),
    (Role::Entry, ["entry", "cventry"]),
    (Role::Skills, ["skills", "cvskills"]),
];

/// Classify a node given the resolved role of its parent (`None` for top-level nodes).
pub fn classify(node: &Node, parent_role: Option<Role>) -> Role {
    let declared = node.property(ROLE_PROPERTY);
    let explicit = EXPLICIT.iter().find_map(|(role, names)| {
        let marked = names.iter().any(|name| {
            node.has_tag(name) || declared.is_some_and(|d| d.eq_ignore_ascii_case(name))
        });
        marked.then_some(*role)
    });

    let role = match explicit {
        Some(role) => role,
        None if parent_role.is_some_and(Role::is_skills_family) => Role::SkillsSubsection,
        None if node.level == 1 => Role::Group,
        None if node.level == 2 => Role::Generic,
        None => Role::Plain,
    };
    tracing::debug!(level = node.level, title = %node.title, %role, "classified section");
    role
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_tags() {
        assert_eq!(
            classify(&Node::new(1, "About").with_tag("summary"), None),
            Role::Summary
        );
        assert_eq!(
            classify(
                &Node::new(3, "Engineer").with_tag("cventry"),
                Some(Role::Generic)
            ),
            Role::Entry
        );
        assert_eq!(
            classify(&Node::new(1, "Skills").with_tag("cvskills"), None),
            Role::Skills
        );
    }

    #[test]
    fn test_role_property() {
        let node = Node::new(2, "Engineer").with_property("cv_env", "CVENTRY");
        assert_eq!(classify(&node, Some(Role::Group)), Role::Entry);
    }

    #[test]
    fn test_summary_beats_entry() {
        let node = Node::new(1, "x").with_tag("entry").with_tag("summary");
        assert_eq!(classify(&node, None), Role::Summary);
    }

    #[test]
    fn test_skills_children_inherit() {
        let node = Node::new(2, "Languages");
        assert_eq!(classify(&node, Some(Role::Skills)), Role::SkillsSubsection);
        let node = Node::new(3, "Rust");
        assert_eq!(
            classify(&node, Some(Role::SkillsSubsection)),
            Role::SkillsSubsection
        );
    }

    #[test]
    fn test_tagged_skills_under_skills_stays_skills() {
        let node = Node::new(2, "Tools").with_tag("skills");
        assert_eq!(classify(&node, Some(Role::Skills)), Role::Skills);
    }

    #[test]
    fn test_structural_fallbacks() {
        assert_eq!(classify(&Node::new(1, "Experience"), None), Role::Group);
        assert_eq!(
            classify(&Node::new(2, "Acme"), Some(Role::Group)),
            Role::Generic
        );
        assert_eq!(
            classify(&Node::new(3, "Notes"), Some(Role::Generic)),
            Role::Plain
        );
    }

    #[test]
    fn test_entry_parent_does_not_propagate() {
        let node = Node::new(4, "Details");
        assert_eq!(classify(&node, Some(Role::Entry)), Role::Plain);
    }
}
