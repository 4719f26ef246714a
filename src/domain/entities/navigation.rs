//! Collection structure: the document tree behind the site navigation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::utils::markup::escape_markup;

/// Marker in a document title that hides the page (and its subtree) from the site.
pub const PRIVATE_MARKER: &str = "[private]";

/// A node of the collection structure as delivered by the upstream API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationNode {
    pub id: String,
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub children: Vec<NavigationNode>,
}

/// A flattened navigation entry. Children are indices into the owning tree.
#[derive(Debug, Clone, PartialEq)]
pub struct NavEntry {
    pub id: String,
    pub title: String,
    pub url: String,
    pub updated_at: Option<DateTime<Utc>>,
    pub depth: usize,
    pub children: Vec<usize>,
}

impl NavEntry {
    /// Returns true if the title carries the [`PRIVATE_MARKER`] (case-insensitive).
    pub fn is_private(&self) -> bool {
        self.title.to_lowercase().contains(PRIVATE_MARKER)
    }
}

/// Owned, index-based view of the collection structure.
///
/// Built once from the nested upstream payload; every traversal afterwards
/// walks indices with an explicit queue or stack.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavigationTree {
    entries: Vec<NavEntry>,
    roots: Vec<usize>,
}

enum RenderStep {
    Enter(usize),
    Leave,
}

impl NavigationTree {
    /// Flattens nested nodes breadth-first, preserving sibling order.
    pub fn from_nodes(nodes: Vec<NavigationNode>) -> Self {
        let mut tree = Self::default();
        let mut queue: VecDeque<(NavigationNode, Option<usize>, usize)> =
            nodes.into_iter().map(|node| (node, None, 0)).collect();

        while let Some((node, parent, depth)) = queue.pop_front() {
            let index = tree.entries.len();
            tree.entries.push(NavEntry {
                id: node.id,
                title: node.title,
                url: node.url,
                updated_at: node.updated_at,
                depth,
                children: Vec::new(),
            });

            match parent {
                Some(parent) => tree.entries[parent].children.push(index),
                None => tree.roots.push(index),
            }

            queue.extend(
                node.children
                    .into_iter()
                    .map(|child| (child, Some(index), depth + 1)),
            );
        }

        tree
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Locates a document by id with a breadth-first walk from the roots.
    pub fn find(&self, id: &str) -> Option<&NavEntry> {
        let mut queue: VecDeque<usize> = self.roots.iter().copied().collect();

        while let Some(index) = queue.pop_front() {
            let entry = &self.entries[index];
            if entry.id == id {
                return Some(entry);
            }
            queue.extend(entry.children.iter().copied());
        }

        None
    }

    /// Direct children of a document, or an empty list when the id is unknown.
    pub fn children_of(&self, id: &str) -> Vec<&NavEntry> {
        self.find(id)
            .map(|entry| entry.children.iter().map(|&i| &self.entries[i]).collect())
            .unwrap_or_default()
    }

    /// Every public page in depth-first (reading) order.
    ///
    /// Private pages are skipped together with their whole subtree.
    pub fn visible_pages(&self) -> Vec<&NavEntry> {
        let mut pages = Vec::new();
        let mut stack: Vec<usize> = self.roots.iter().rev().copied().collect();

        while let Some(index) = stack.pop() {
            let entry = &self.entries[index];
            if entry.is_private() {
                continue;
            }
            pages.push(entry);
            stack.extend(entry.children.iter().rev().copied());
        }

        pages
    }

    /// Renders the navigation as nested `<ul>` lists.
    ///
    /// The entry whose id equals `current_id` is marked with the
    /// `current-page` class.
    pub fn render_html(&self, current_id: Option<&str>) -> String {
        let mut html = String::from("<ul>");
        let mut stack: Vec<RenderStep> = self
            .roots
            .iter()
            .rev()
            .map(|&i| RenderStep::Enter(i))
            .collect();

        while let Some(step) = stack.pop() {
            let index = match step {
                RenderStep::Leave => {
                    html.push_str("</ul></li>");
                    continue;
                }
                RenderStep::Enter(index) => index,
            };

            let entry = &self.entries[index];
            if entry.is_private() {
                continue;
            }

            if current_id == Some(entry.id.as_str()) {
                html.push_str("<li class=\"current-page\">");
            } else {
                html.push_str("<li>");
            }
            html.push_str(&format!(
                "<a href=\"{}\">{}</a>",
                escape_markup(&entry.url),
                escape_markup(&entry.title)
            ));

            let visible: Vec<usize> = entry
                .children
                .iter()
                .copied()
                .filter(|&child| !self.entries[child].is_private())
                .collect();

            if visible.is_empty() {
                html.push_str("</li>");
            } else {
                html.push_str("<ul>");
                stack.push(RenderStep::Leave);
                stack.extend(visible.into_iter().rev().map(RenderStep::Enter));
            }
        }

        html.push_str("</ul>");
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str, title: &str, children: Vec<NavigationNode>) -> NavigationNode {
        NavigationNode {
            id: id.to_string(),
            title: title.to_string(),
            url: format!("/doc/{}", id),
            updated_at: None,
            children,
        }
    }

    fn sample_tree() -> NavigationTree {
        NavigationTree::from_nodes(vec![
            node(
                "a",
                "Guides",
                vec![node("a1", "Setup", vec![]), node("a2", "Deploy", vec![])],
            ),
            node(
                "b",
                "Handbook",
                vec![node(
                    "b1",
                    "Security",
                    vec![node("b1x", "Incident response", vec![])],
                )],
            ),
            node("p", "Drafts [PRIVATE]", vec![node("p1", "Secret", vec![])]),
        ])
    }

    #[test]
    fn test_from_nodes_flattens_everything() {
        let tree = sample_tree();
        assert_eq!(tree.len(), 8);
        assert!(!tree.is_empty());
    }

    #[test]
    fn test_find_nested_entry() {
        let tree = sample_tree();

        let entry = tree.find("b1x").unwrap();
        assert_eq!(entry.title, "Incident response");
        assert_eq!(entry.depth, 2);
        assert!(tree.find("missing").is_none());
    }

    #[test]
    fn test_children_of() {
        let tree = sample_tree();

        let children: Vec<&str> = tree
            .children_of("a")
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(children, vec!["a1", "a2"]);
        assert!(tree.children_of("a1").is_empty());
        assert!(tree.children_of("unknown").is_empty());
    }

    #[test]
    fn test_visible_pages_depth_first_without_private() {
        let tree = sample_tree();

        let ids: Vec<&str> = tree
            .visible_pages()
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "a1", "a2", "b", "b1", "b1x"]);
    }

    #[test]
    fn test_render_html_nesting_and_current_page() {
        let tree = NavigationTree::from_nodes(vec![
            node("a", "Guides", vec![node("a1", "Setup", vec![])]),
            node("b", "Handbook", vec![]),
        ]);

        let html = tree.render_html(Some("a1"));
        assert_eq!(
            html,
            "<ul><li><a href=\"/doc/a\">Guides</a><ul>\
             <li class=\"current-page\"><a href=\"/doc/a1\">Setup</a></li></ul></li>\
             <li><a href=\"/doc/b\">Handbook</a></li></ul>"
        );
    }

    #[test]
    fn test_render_html_skips_private_subtrees() {
        let html = sample_tree().render_html(None);

        assert!(!html.contains("Drafts"));
        assert!(!html.contains("Secret"));
        assert!(html.contains("Incident response"));
    }

    #[test]
    fn test_render_html_escapes_titles() {
        let tree = NavigationTree::from_nodes(vec![node("x", "Q&A <faq>", vec![])]);

        let html = tree.render_html(None);
        assert!(html.contains("Q&amp;A &lt;faq&gt;"));
    }

    #[test]
    fn test_empty_tree_renders_empty_list() {
        assert_eq!(NavigationTree::default().render_html(None), "<ul></ul>");
    }

    #[test]
    fn test_node_deserializes_nested_children() {
        let json = r#"[{"id":"a","title":"A","url":"/doc/a","children":[
            {"id":"b","title":"B","url":"/doc/b","children":[]}
        ]}]"#;

        let nodes: Vec<NavigationNode> = serde_json::from_str(json).unwrap();
        let tree = NavigationTree::from_nodes(nodes);
        assert_eq!(tree.children_of("a")[0].id, "b");
    }
}
