//! Per-call render context
//!
//! A context is created for each top-level section and extended as the walk descends. Child
//! contexts are fresh values; nothing is shared or mutated across siblings.

use crate::dates::DateContext;
use crate::document::Node;
use crate::locale::Locale;
use crate::roles::Role;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    pub locale: Locale,
    /// Roles of the enclosing sections, outermost first
    pub ancestor_roles: Vec<Role>,
    /// Set once an ancestor's title marks the education subtree
    pub date_context: DateContext,
    pub is_last_top_level_sibling: bool,
    /// Some ancestor is an Entry
    pub in_entry: bool,
}

impl RenderContext {
    /// Context for a top-level section.
    pub fn top_level(locale: Locale, is_last_top_level_sibling: bool) -> Self {
        RenderContext {
            locale,
            ancestor_roles: Vec::new(),
            date_context: DateContext::Default,
            is_last_top_level_sibling,
            in_entry: false,
        }
    }

    pub fn parent_role(&self) -> Option<Role> {
        self.ancestor_roles.last().copied()
    }

    /// Context for the children of `node`, which resolved to `role`.
    pub fn descend(&self, node: &Node, role: Role) -> Self {
        let mut ancestor_roles = self.ancestor_roles.clone();
        ancestor_roles.push(role);
        let date_context = if self.locale.is_education_title(&node.title) {
            DateContext::Education
        } else {
            self.date_context
        };
        RenderContext {
            locale: self.locale,
            ancestor_roles,
            date_context,
            is_last_top_level_sibling: false,
            in_entry: self.in_entry || role == Role::Entry,
        }
    }
}
