use crate::view::{NavLink, Node, VisualTree};

pub fn page_one() -> VisualTree {
    VisualTree::new(
        "Page One",
        Node::container(
            Some("min-h-screen flex flex-col items-center justify-center bg-gray-100"),
            vec![
                Node::heading(Some("text-3xl font-bold mb-4 text-black"), "Page One"),
                Node::text(Some("mb-4 text-black"), "Marek Marucha ciągnie druta"),
                Node::Link(
                    NavLink::new("Przejdź do Page Two", "/pagetwo")
                        .with_class("px-4 py-2 bg-black text-white rounded hover:bg-gray-800"),
                ),
            ],
        ),
    )
}
