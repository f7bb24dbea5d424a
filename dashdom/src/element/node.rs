use serde_json::{Map, Value};

use super::{Content, Kind, Node};
use crate::types::{SelectOption, Style};

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub kind: Kind,

    // Identity
    pub id: Option<String>,

    // Presentation
    pub class_name: Option<String>,
    pub style: Option<Style>,
    pub hidden: bool,

    // Component-specific properties, in insertion order
    pub props: Map<String, Value>,

    // Content
    pub content: Content,
}

impl Element {
    pub fn new(kind: Kind) -> Self {
        Self {
            kind,
            id: None,
            class_name: None,
            style: None,
            hidden: false,
            props: Map::new(),
            content: Content::None,
        }
    }

    // HTML
    pub fn div() -> Self {
        Self::new(Kind::Div)
    }

    pub fn p(text: impl Into<String>) -> Self {
        Self::new(Kind::P).text(text)
    }

    pub fn h2(text: impl Into<String>) -> Self {
        Self::new(Kind::H2).text(text)
    }

    pub fn h3(text: impl Into<String>) -> Self {
        Self::new(Kind::H3).text(text)
    }

    pub fn br() -> Self {
        Self::new(Kind::Br)
    }

    pub fn hr() -> Self {
        Self::new(Kind::Hr)
    }

    /// A link. `target` and `href` are set with [`Element::prop`].
    pub fn a(text: impl Into<String>) -> Self {
        Self::new(Kind::A).text(text)
    }

    pub fn span() -> Self {
        Self::new(Kind::Span)
    }

    // Core components
    pub fn checklist() -> Self {
        Self::new(Kind::Checklist)
    }

    pub fn radio_items() -> Self {
        Self::new(Kind::RadioItems)
    }

    pub fn dropdown() -> Self {
        Self::new(Kind::Dropdown)
    }

    pub fn slider() -> Self {
        Self::new(Kind::Slider)
    }

    pub fn tabs() -> Self {
        Self::new(Kind::Tabs)
    }

    pub fn tab() -> Self {
        Self::new(Kind::Tab)
    }

    /// Markdown block. The source text is passed through untouched.
    pub fn markdown(source: impl Into<String>) -> Self {
        Self::new(Kind::Markdown).text(source)
    }

    pub fn data_table() -> Self {
        Self::new(Kind::DataTable)
    }

    /// Wrap an element in a hidden `Div`.
    pub fn hidden_wrapper(inner: Element) -> Self {
        Self::div().child(inner).hidden(true)
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    // Presentation
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    // Props
    pub fn prop(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }

    pub fn get_prop(&self, key: &str) -> Option<&Value> {
        self.props.get(key)
    }

    pub fn options(self, options: impl IntoIterator<Item = SelectOption>) -> Self {
        let list: Vec<Value> = options.into_iter().map(Value::from).collect();
        self.prop("options", list)
    }

    pub fn value(self, value: impl Into<Value>) -> Self {
        self.prop("value", value)
    }

    pub fn disabled(self, disabled: bool) -> Self {
        self.prop("disabled", disabled)
    }

    pub fn clearable(self, clearable: bool) -> Self {
        self.prop("clearable", clearable)
    }

    pub fn inline(self, inline: bool) -> Self {
        self.prop("inline", inline)
    }

    pub fn label(self, label: impl Into<String>) -> Self {
        self.prop("label", label.into())
    }

    /// Selected options as typed records, if `options` was set through
    /// [`Element::options`].
    pub fn get_options(&self) -> Vec<SelectOption> {
        match self.props.get("options") {
            Some(Value::Array(items)) => items.iter().filter_map(SelectOption::from_value).collect(),
            _ => Vec::new(),
        }
    }

    // Content
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        let child = child.into();
        match &mut self.content {
            Content::Children(children) => children.push(child),
            Content::None => self.content = Content::Children(vec![child]),
            Content::Text(text) => {
                let text = std::mem::take(text);
                self.content = Content::Children(vec![Node::Text(text), child]);
            }
        }
        self
    }

    pub fn children<N: Into<Node>>(mut self, new_children: impl IntoIterator<Item = N>) -> Self {
        for child in new_children {
            self = self.child(child);
        }
        self
    }

    /// Append the child only when present.
    pub fn maybe_child(self, child: Option<Element>) -> Self {
        match child {
            Some(child) => self.child(child),
            None => self,
        }
    }

    /// Direct element children, skipping text runs.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        let nodes: &[Node] = match &self.content {
            Content::Children(children) => children,
            _ => &[],
        };
        nodes.iter().filter_map(Node::as_element)
    }

    /// Visit this element and every descendant, depth first.
    pub fn walk<'a>(&'a self, visit: &mut dyn FnMut(&'a Element)) {
        visit(self);
        for child in self.child_elements() {
            child.walk(visit);
        }
    }

    /// All text directly or indirectly contained in the element, concatenated.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }
}

fn collect_text(el: &Element, out: &mut String) {
    match &el.content {
        Content::None => {}
        Content::Text(text) => out.push_str(text),
        Content::Children(children) => {
            for child in children {
                match child {
                    Node::Text(text) => out.push_str(text),
                    Node::Element(child) => collect_text(child, out),
                }
            }
        }
    }
}
