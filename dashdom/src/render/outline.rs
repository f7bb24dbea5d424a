use std::fmt::Write;

use crate::element::{Content, Element, Node};

/// Render a compact, indented outline of the tree, one node per line.
///
/// ```text
/// Div.plot_bar
///   Div.plot_bar_sel
///     P "Model"
///     Dropdown#model_dropdown
/// ```
pub fn outline(root: &Element) -> String {
    let mut out = String::new();
    write_element(&mut out, root, 0);
    out
}

fn write_element(out: &mut String, el: &Element, depth: usize) {
    let indent = "  ".repeat(depth);
    let _ = write!(out, "{indent}{}", el.kind);
    if let Some(id) = &el.id {
        let _ = write!(out, "#{id}");
    }
    if let Some(class_name) = &el.class_name {
        for class in class_name.split_whitespace() {
            let _ = write!(out, ".{class}");
        }
    }
    if el.hidden {
        out.push_str(" [hidden]");
    }
    match &el.content {
        Content::None => out.push('\n'),
        Content::Text(text) => {
            let _ = writeln!(out, " {:?}", truncate(text));
        }
        Content::Children(children) => {
            out.push('\n');
            for child in children {
                match child {
                    Node::Element(child) => write_element(out, child, depth + 1),
                    Node::Text(text) => {
                        let _ = writeln!(out, "{indent}  {:?}", truncate(text));
                    }
                }
            }
        }
    }
}

fn truncate(text: &str) -> String {
    const MAX: usize = 60;
    if text.chars().count() <= MAX {
        text.to_string()
    } else {
        let head: String = text.chars().take(MAX).collect();
        format!("{head}...")
    }
}
