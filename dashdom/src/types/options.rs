use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The value half of a selectable option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl OptionValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(Self::Bool(*b)),
            Value::Number(n) => n
                .as_i64()
                .map(Self::Int)
                .or_else(|| n.as_f64().map(Self::Float)),
            Value::String(s) => Some(Self::Str(s.clone())),
            _ => None,
        }
    }
}

impl std::fmt::Display for OptionValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bool(true) => f.write_str("True"),
            Self::Bool(false) => f.write_str("False"),
            Self::Int(i) => write!(f, "{i}"),
            // Whole floats keep their decimal point ("13.0"), like the front-end shows them.
            Self::Float(x) if x.fract() == 0.0 && x.is_finite() => write!(f, "{x:.1}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Str(s) => f.write_str(s),
        }
    }
}

impl From<OptionValue> for Value {
    fn from(value: OptionValue) -> Self {
        match value {
            OptionValue::Bool(b) => Value::Bool(b),
            OptionValue::Int(i) => Value::from(i),
            OptionValue::Float(x) => Value::from(x),
            OptionValue::Str(s) => Value::String(s),
        }
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<&String> for OptionValue {
    fn from(s: &String) -> Self {
        Self::Str(s.clone())
    }
}

impl From<i64> for OptionValue {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<i32> for OptionValue {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<u32> for OptionValue {
    fn from(i: u32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<usize> for OptionValue {
    fn from(i: usize) -> Self {
        Self::Int(i as i64)
    }
}

impl From<f64> for OptionValue {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<bool> for OptionValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

/// One choice of a checklist, radio group or dropdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub label: String,
    pub value: OptionValue,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub disabled: bool,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            disabled: false,
        }
    }

    /// An option whose label is the textual form of its value.
    pub fn plain(value: impl Into<OptionValue>) -> Self {
        let value = value.into();
        Self {
            label: value.to_string(),
            value,
            disabled: false,
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Options labelled by their own values.
    pub fn plain_list<V: Into<OptionValue>>(values: impl IntoIterator<Item = V>) -> Vec<Self> {
        values.into_iter().map(Self::plain).collect()
    }

    /// Options from `(value, label)` pairs.
    pub fn from_pairs<V, L>(pairs: impl IntoIterator<Item = (V, L)>) -> Vec<Self>
    where
        V: Into<OptionValue>,
        L: Into<String>,
    {
        pairs.into_iter().map(|(value, label)| Self::new(label, value)).collect()
    }

    pub(crate) fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        Some(Self {
            label: obj.get("label")?.as_str()?.to_string(),
            value: OptionValue::from_json(obj.get("value")?)?,
            disabled: obj.get("disabled").and_then(Value::as_bool).unwrap_or(false),
        })
    }
}

impl From<SelectOption> for Value {
    fn from(option: SelectOption) -> Self {
        let mut obj = serde_json::Map::new();
        obj.insert("label".to_string(), Value::String(option.label));
        obj.insert("value".to_string(), option.value.into());
        if option.disabled {
            obj.insert("disabled".to_string(), Value::Bool(true));
        }
        Value::Object(obj)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_labels() {
        let opts = SelectOption::plain_list([0.05, 0.5, 13.0]);
        let labels: Vec<&str> = opts.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["0.05", "0.5", "13.0"]);
    }

    #[test]
    fn test_from_pairs() {
        let opts = SelectOption::from_pairs([("A-2023-08-14", "High vaccine"), ("B-2023-08-14", "Low vaccine")]);
        assert_eq!(opts[1].label, "Low vaccine");
        assert_eq!(opts[1].value.as_str(), Some("B-2023-08-14"));
    }

    #[test]
    fn test_disabled_flag_only_serialized_when_set() {
        let enabled = Value::from(SelectOption::new("A", "a"));
        assert!(enabled.get("disabled").is_none());
        let disabled = Value::from(SelectOption::new("A", "a").disabled(true));
        assert_eq!(disabled["disabled"], Value::Bool(true));
    }

    #[test]
    fn test_untagged_value_deserialize() {
        let opt: SelectOption = serde_json::from_str(r#"{"label": "95%", "value": 95}"#).unwrap();
        assert_eq!(opt.value, OptionValue::Int(95));
        let opt: SelectOption = serde_json::from_str(r#"{"label": "Low", "value": "low"}"#).unwrap();
        assert_eq!(opt.value.as_str(), Some("low"));
    }
}
