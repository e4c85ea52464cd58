use maud::{DOCTYPE, Markup, Render, html};

use crate::{
    GENERATOR,
    view::{NavLink, Node, VisualTree},
};

impl Render for NavLink {
    fn render(&self) -> Markup {
        html! {
            a href=(self.to) class=[self.class] data-kartki-link { (self.label) }
        }
    }
}

impl Render for Node {
    fn render(&self) -> Markup {
        match self {
            Node::Container { class, children } => html! {
                div class=[class] {
                    @for child in children {
                        (child)
                    }
                }
            },
            Node::Heading { class, text } => html! {
                h1 class=[class] { (text) }
            },
            Node::Text { class, text } => html! {
                p class=[class] { (text) }
            },
            Node::Link(link) => link.render(),
        }
    }
}

impl Render for VisualTree {
    fn render(&self) -> Markup {
        self.root.render()
    }
}

/// Can be used to create a generator tag in the output HTML. See [`GENERATOR`](crate::GENERATOR).
pub fn generator() -> Markup {
    html! {
        meta name="generator" content=(GENERATOR);
    }
}

/// Wraps a visual tree in a complete HTML document.
pub fn layout(tree: &VisualTree) -> Markup {
    html! {
        (DOCTYPE)
        html lang="pl" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                (generator())
                title { (tree.title) }
            }
            body {
                (tree)
            }
        }
    }
}
