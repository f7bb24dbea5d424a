mod content;
mod kind;
mod node;

pub use content::{Content, Node};
pub use kind::{Kind, Namespace};
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id.as_deref() == Some(id) {
        return Some(root);
    }

    for child in root.child_elements() {
        if let Some(found) = find_element(child, id) {
            return Some(found);
        }
    }

    None
}

/// Collect every element of the given kind, depth first.
pub fn find_kind(root: &Element, kind: Kind) -> Vec<&Element> {
    let mut found = Vec::new();
    root.walk(&mut |el| {
        if el.kind == kind {
            found.push(el);
        }
    });
    found
}

/// Number of elements of the given kind in the tree, the root included.
pub fn count_kind(root: &Element, kind: Kind) -> usize {
    let mut count = 0;
    root.walk(&mut |el| {
        if el.kind == kind {
            count += 1;
        }
    });
    count
}

/// Collect the IDs of every element in the tree, depth first.
pub fn collect_ids(root: &Element) -> Vec<&str> {
    let mut ids = Vec::new();
    root.walk(&mut |el| {
        if let Some(id) = el.id.as_deref() {
            ids.push(id);
        }
    });
    ids
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Element {
        Element::div()
            .id("root")
            .child(Element::p("Title"))
            .child(
                Element::div()
                    .id("inner")
                    .child(Element::radio_items().id("radio")),
            )
            .child(Element::dropdown().id("drop"))
    }

    #[test]
    fn test_find_element_nested() {
        let root = sample();
        let found = find_element(&root, "radio").unwrap();
        assert_eq!(found.kind, Kind::RadioItems);
        assert!(find_element(&root, "missing").is_none());
    }

    #[test]
    fn test_collect_ids_depth_first() {
        let root = sample();
        assert_eq!(collect_ids(&root), vec!["root", "inner", "radio", "drop"]);
    }

    #[test]
    fn test_find_kind() {
        let root = sample();
        assert_eq!(find_kind(&root, Kind::Div).len(), 2);
        assert_eq!(find_kind(&root, Kind::P).len(), 1);
        assert_eq!(count_kind(&root, Kind::Div), 2);
        assert_eq!(count_kind(&root, Kind::Slider), 0);
    }
}
