use crate::view::{NavLink, Node, VisualTree};

pub fn page_two() -> VisualTree {
    VisualTree::new(
        "Page Two",
        Node::container(
            Some("page-two"),
            vec![
                Node::heading(None, "Page Two"),
                Node::text(None, "Nie wiem co powiedzieć"),
                Node::Link(NavLink::new("Przejdź do Page One", "/").with_class("button")),
            ],
        ),
    )
}
