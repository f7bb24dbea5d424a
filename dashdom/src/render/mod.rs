//! Serialization of element trees for the front-end.

mod outline;

pub use outline::outline;

use serde::ser::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::element::{Content, Element, Node};

/// Render an element tree to the Dash component JSON format.
///
/// `id`, `className`, `style` and `hidden` (only when set) come first, then
/// the remaining props in insertion order, then `children`. A single child
/// is emitted bare rather than as a one-element list.
pub fn to_value(el: &Element) -> Value {
    let mut props = Map::new();
    if let Some(id) = &el.id {
        props.insert("id".to_string(), Value::String(id.clone()));
    }
    if let Some(class_name) = &el.class_name {
        props.insert("className".to_string(), Value::String(class_name.clone()));
    }
    if let Some(style) = &el.style {
        props.insert("style".to_string(), style.to_value());
    }
    if el.hidden {
        props.insert("hidden".to_string(), Value::Bool(true));
    }
    for (key, value) in &el.props {
        props.insert(key.clone(), value.clone());
    }
    if let Some(children) = children_value(&el.content) {
        props.insert("children".to_string(), children);
    }

    let mut obj = Map::new();
    obj.insert("props".to_string(), Value::Object(props));
    obj.insert("type".to_string(), Value::String(el.kind.type_name().to_string()));
    obj.insert(
        "namespace".to_string(),
        Value::String(el.kind.namespace().as_str().to_string()),
    );
    Value::Object(obj)
}

fn node_value(node: &Node) -> Value {
    match node {
        Node::Text(text) => Value::String(text.clone()),
        Node::Element(el) => to_value(el),
    }
}

fn children_value(content: &Content) -> Option<Value> {
    match content {
        Content::None => None,
        Content::Text(text) => Some(Value::String(text.clone())),
        Content::Children(children) if children.len() == 1 => Some(node_value(&children[0])),
        Content::Children(children) => Some(Value::Array(children.iter().map(node_value).collect())),
    }
}

/// Render an element tree to pretty-printed JSON.
pub fn to_json_pretty(el: &Element) -> String {
    // A `Value` built from string keys always serializes.
    serde_json::to_string_pretty(&to_value(el)).unwrap_or_default()
}

impl Serialize for Element {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        to_value(self).serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{SelectOption, Style};

    #[test]
    fn test_text_child_is_string() {
        let v = to_value(&Element::p("Scenario:"));
        assert_eq!(v["type"], "P");
        assert_eq!(v["namespace"], "dash_html_components");
        assert_eq!(v["props"]["children"], "Scenario:");
    }

    #[test]
    fn test_single_child_is_not_wrapped() {
        let v = to_value(&Element::div().child(Element::br()));
        assert!(v["props"]["children"].is_object());
        assert_eq!(v["props"]["children"]["type"], "Br");
    }

    #[test]
    fn test_empty_div_has_no_children_prop() {
        let v = to_value(&Element::div().id("html-table").class_name("column right"));
        let props = v["props"].as_object().unwrap();
        assert!(!props.contains_key("children"));
        assert_eq!(props["className"], "column right");
    }

    #[test]
    fn test_prop_order() {
        let el = Element::radio_items()
            .id("ui-radio")
            .options([SelectOption::new("None", 0)])
            .value(0)
            .style(Style::new().display("flex"));
        let v = to_value(&el);
        let keys: Vec<&str> = v["props"].as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["id", "style", "options", "value"]);
    }

    #[test]
    fn test_hidden_only_when_set() {
        let shown = to_value(&Element::div());
        assert!(shown["props"].get("hidden").is_none());
        let hidden = to_value(&Element::hidden_wrapper(Element::div()));
        assert_eq!(hidden["props"]["hidden"], true);
    }

    #[test]
    fn test_serialize_matches_to_value() {
        let el = Element::div().child(Element::h2("Notes").id("Notes"));
        assert_eq!(serde_json::to_value(&el).unwrap(), to_value(&el));
    }
}
