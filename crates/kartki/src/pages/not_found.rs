use crate::view::{NavLink, Node, VisualTree};

/// Fallback shown when a path isn't bound to any page. Always links back to the root page.
///
/// `path` is named in the text when it's known. The prebuilt `404.html` is served for any missing path, so it gets `None`.
pub fn not_found(path: Option<&str>) -> VisualTree {
    let text = match path {
        Some(path) => format!("Nie ma strony pod adresem {}", path),
        None => "Nie ma takiej strony".to_string(),
    };

    VisualTree::new(
        "404 - Not Found",
        Node::container(
            Some("not-found"),
            vec![
                Node::heading(None, "404 - Not Found"),
                Node::text(None, text),
                Node::Link(NavLink::new("Przejdź do Page One", "/").with_class("button")),
            ],
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_names_path() {
        let tree = not_found(Some("/does-not-exist"));

        assert_eq!(tree.heading(), Some("404 - Not Found"));
        assert!(tree.to_string().contains("/does-not-exist"));
        assert_eq!(tree.controls()[0].to, "/");
    }

    #[test]
    fn test_not_found_without_path() {
        let tree = not_found(None);

        assert_eq!(tree.heading(), Some("404 - Not Found"));
        assert!(tree.to_string().contains("Nie ma takiej strony"));
        assert!(!tree.to_string().contains("pod adresem"));
    }
}
