//! The visual tree produced by pages.
//!
//! A page doesn't write HTML directly: it returns a [`VisualTree`], which can then be rendered to HTML (see [`crate::maud`]) or inspected, for instance to find its navigation controls.
use std::borrow::Cow;
use std::fmt;

/// A control requesting a transition to another path when activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: Cow<'static, str>,
    pub to: &'static str,
    pub class: Option<&'static str>,
}

impl NavLink {
    pub fn new(label: impl Into<Cow<'static, str>>, to: &'static str) -> Self {
        Self {
            label: label.into(),
            to,
            class: None,
        }
    }

    pub fn with_class(mut self, class: &'static str) -> Self {
        self.class = Some(class);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Container {
        class: Option<&'static str>,
        children: Vec<Node>,
    },
    Heading {
        class: Option<&'static str>,
        text: Cow<'static, str>,
    },
    Text {
        class: Option<&'static str>,
        text: Cow<'static, str>,
    },
    Link(NavLink),
}

impl Node {
    pub fn container(class: Option<&'static str>, children: Vec<Node>) -> Self {
        Node::Container { class, children }
    }

    pub fn heading(class: Option<&'static str>, text: impl Into<Cow<'static, str>>) -> Self {
        Node::Heading {
            class,
            text: text.into(),
        }
    }

    pub fn text(class: Option<&'static str>, text: impl Into<Cow<'static, str>>) -> Self {
        Node::Text {
            class,
            text: text.into(),
        }
    }

    /// Depth-first walk over this node and all of its descendants.
    pub fn descendants(&self) -> Vec<&Node> {
        let mut nodes = vec![self];
        if let Node::Container { children, .. } = self {
            for child in children {
                nodes.extend(child.descendants());
            }
        }
        nodes
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualTree {
    /// Document title, used in `<title>`.
    pub title: Cow<'static, str>,
    pub root: Node,
}

impl VisualTree {
    pub fn new(title: impl Into<Cow<'static, str>>, root: Node) -> Self {
        Self {
            title: title.into(),
            root,
        }
    }

    /// Text of the first heading of the tree.
    pub fn heading(&self) -> Option<&str> {
        self.root.descendants().into_iter().find_map(|node| match node {
            Node::Heading { text, .. } => Some(text.as_ref()),
            _ => None,
        })
    }

    /// Every navigation control of the tree, in document order.
    pub fn controls(&self) -> Vec<&NavLink> {
        self.root
            .descendants()
            .into_iter()
            .filter_map(|node| match node {
                Node::Link(link) => Some(link),
                _ => None,
            })
            .collect()
    }
}

impl fmt::Display for VisualTree {
    /// Plain-text rendering, for terminals.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in self.root.descendants() {
            match node {
                Node::Container { .. } => {}
                Node::Heading { text, .. } => writeln!(f, "# {}", text)?,
                Node::Text { text, .. } => writeln!(f, "{}", text)?,
                Node::Link(link) => writeln!(f, "[{}]({})", link.label, link.to)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> VisualTree {
        VisualTree::new(
            "Sample",
            Node::container(
                None,
                vec![
                    Node::heading(None, "Title"),
                    Node::container(
                        Some("nested"),
                        vec![
                            Node::heading(None, "Second title"),
                            Node::Link(NavLink::new("First", "/")),
                        ],
                    ),
                    Node::text(None, "Body"),
                    Node::Link(NavLink::new("Second", "/two").with_class("button")),
                ],
            ),
        )
    }

    #[test]
    fn test_heading_is_first_in_document_order() {
        assert_eq!(sample().heading(), Some("Title"));
    }

    #[test]
    fn test_heading_missing() {
        let tree = VisualTree::new("Empty", Node::container(None, vec![]));
        assert_eq!(tree.heading(), None);
    }

    #[test]
    fn test_controls_in_document_order() {
        let tree = sample();
        let targets: Vec<_> = tree.controls().iter().map(|link| link.to).collect();
        assert_eq!(targets, vec!["/", "/two"]);
        assert_eq!(tree.controls()[1].class, Some("button"));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            sample().to_string(),
            "# Title\n# Second title\n[First](/)\nBody\n[Second](/two)\n"
        );
    }
}
