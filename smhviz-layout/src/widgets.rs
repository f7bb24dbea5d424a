//! Widget factories: a title paragraph above a single input component.
//!
//! Each factory returns a builder; `build()` produces the `Div` wrapping the
//! title and the input.
//!
//! ```
//! use dashdom::SelectOption;
//! use smhviz_layout::widgets::make_dropdown;
//!
//! let model = make_dropdown("Model", "model_dropdown", SelectOption::plain_list(["ensemble"]), "ensemble")
//!     .clearable(false)
//!     .build();
//! assert_eq!(model.class_name.as_deref(), Some("plot_bar_sel"));
//! ```

use dashdom::{Element, SelectOption, Style};
use serde_json::{Map, Value};

/// Default CSS class of a plot bar selector.
pub const PLOT_BAR_SEL: &str = "plot_bar_sel";

/// Default style of a checkbox container.
pub fn default_checkbox_style() -> Style {
    Style::new()
        .display("inline-block")
        .margin_left("5%")
        .width("25%")
}

/// Default slider tooltip: below the handle, always shown.
pub fn default_tooltip() -> Value {
    let mut tooltip = Map::new();
    tooltip.insert("placement".to_string(), Value::from("bottom"));
    tooltip.insert("always_visible".to_string(), Value::Bool(true));
    Value::Object(tooltip)
}

// ============================================================================
// Checkbox
// ============================================================================

/// Builder for a titled checklist. See [`make_checkbox`].
#[derive(Debug, Clone)]
pub struct Checkbox {
    title: String,
    id: String,
    options: Vec<SelectOption>,
    hide: bool,
    style: Option<Style>,
    value: Option<Value>,
    check_style: Option<Style>,
}

/// A titled checklist, styled `inline-block` at 25% width unless overridden.
pub fn make_checkbox(
    title: impl Into<String>,
    id: impl Into<String>,
    options: Vec<SelectOption>,
) -> Checkbox {
    Checkbox {
        title: title.into(),
        id: id.into(),
        options,
        hide: false,
        style: None,
        value: None,
        check_style: None,
    }
}

impl Checkbox {
    /// Wrap the checkbox in a hidden container.
    pub fn hide(mut self, hide: bool) -> Self {
        self.hide = hide;
        self
    }

    /// Container style.
    pub fn style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    /// Container style, or the default one for `None`.
    pub fn maybe_style(mut self, style: Option<Style>) -> Self {
        self.style = style;
        self
    }

    /// Values checked by default.
    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Style applied to the checklist itself.
    pub fn check_style(mut self, style: Style) -> Self {
        self.check_style = Some(style);
        self
    }

    pub fn build(self) -> Element {
        let mut checklist = Element::checklist().id(self.id).options(self.options);
        if let Some(value) = self.value {
            checklist = checklist.value(value);
        }
        if let Some(check_style) = self.check_style {
            checklist = checklist.style(check_style);
        }

        let checkbox = Element::div()
            .child(Element::p(self.title))
            .child(checklist)
            .style(self.style.unwrap_or_else(default_checkbox_style));

        if self.hide {
            Element::hidden_wrapper(checkbox)
        } else {
            checkbox
        }
    }
}

// ============================================================================
// Radio items
// ============================================================================

/// Builder for a titled radio group. See [`make_radio_items`].
#[derive(Debug, Clone)]
pub struct RadioItems {
    title: String,
    id: String,
    options: Vec<SelectOption>,
    value: Value,
    class_name: String,
    inline: bool,
}

/// A titled radio group, inline and classed `plot_bar_sel` by default.
pub fn make_radio_items(
    title: impl Into<String>,
    id: impl Into<String>,
    options: Vec<SelectOption>,
    value: impl Into<Value>,
) -> RadioItems {
    RadioItems {
        title: title.into(),
        id: id.into(),
        options,
        value: value.into(),
        class_name: PLOT_BAR_SEL.to_string(),
        inline: true,
    }
}

impl RadioItems {
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    pub fn inline(mut self, inline: bool) -> Self {
        self.inline = inline;
        self
    }

    pub fn build(self) -> Element {
        Element::div()
            .child(Element::p(self.title))
            .child(
                Element::radio_items()
                    .inline(self.inline)
                    .id(self.id)
                    .options(self.options)
                    .value(self.value),
            )
            .class_name(self.class_name)
    }
}

// ============================================================================
// Dropdown
// ============================================================================

/// Builder for a titled dropdown. See [`make_dropdown`].
#[derive(Debug, Clone)]
pub struct Dropdown {
    title: String,
    id: String,
    options: Vec<SelectOption>,
    value: Value,
    clearable: bool,
    class_name: String,
}

/// A titled dropdown, not clearable and classed `plot_bar_sel` by default.
pub fn make_dropdown(
    title: impl Into<String>,
    id: impl Into<String>,
    options: Vec<SelectOption>,
    value: impl Into<Value>,
) -> Dropdown {
    Dropdown {
        title: title.into(),
        id: id.into(),
        options,
        value: value.into(),
        clearable: false,
        class_name: PLOT_BAR_SEL.to_string(),
    }
}

impl Dropdown {
    pub fn clearable(mut self, clearable: bool) -> Self {
        self.clearable = clearable;
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    pub fn build(self) -> Element {
        Element::div()
            .child(Element::p(self.title))
            .child(
                Element::dropdown()
                    .id(self.id)
                    .clearable(self.clearable)
                    .options(self.options)
                    .value(self.value),
            )
            .class_name(self.class_name)
    }
}

// ============================================================================
// Slider
// ============================================================================

/// Builder for a titled slider. See [`make_slider`].
#[derive(Debug, Clone)]
pub struct Slider {
    title: String,
    id: String,
    min: i64,
    max: i64,
    step: i64,
    class_name: String,
    tooltip: Option<Value>,
}

/// A titled integer slider starting at `min`.
///
/// Marks are placed every `max / step` units from `min` (exclusive of `max`)
/// plus one at `max`. The slider itself moves in unit steps.
pub fn make_slider(
    title: impl Into<String>,
    id: impl Into<String>,
    min: i64,
    max: i64,
    step: i64,
) -> Slider {
    Slider {
        title: title.into(),
        id: id.into(),
        min,
        max,
        step,
        class_name: PLOT_BAR_SEL.to_string(),
        tooltip: None,
    }
}

impl Slider {
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    pub fn tooltip(mut self, tooltip: Option<Value>) -> Self {
        self.tooltip = tooltip;
        self
    }

    pub fn build(self) -> Element {
        let mut marks = Map::new();
        for mark in slider_marks(self.min, self.max, self.step) {
            marks.insert(mark.to_string(), Value::from(mark.to_string()));
        }

        Element::div()
            .child(Element::p(self.title))
            .child(
                Element::slider()
                    .prop("min", self.min)
                    .prop("max", self.max)
                    .prop("step", 1)
                    .prop("marks", Value::Object(marks))
                    .value(self.min)
                    .id(self.id)
                    .prop("tooltip", self.tooltip.unwrap_or_else(default_tooltip)),
            )
            .class_name(self.class_name)
    }
}

/// Sorted, de-duplicated mark positions of a slider.
pub fn slider_marks(min: i64, max: i64, step: i64) -> Vec<i64> {
    // Integer division truncates toward zero; a zero stride would never advance.
    let stride = if step == 0 { 1 } else { (max / step).max(1) };
    let mut marks: Vec<i64> = (min..max).step_by(stride as usize).collect();
    marks.push(max);
    marks.sort_unstable();
    marks.dedup();
    marks
}
