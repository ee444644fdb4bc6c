use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;

/// Paths of the text fields that feed the index, in the order they are tokenized.
pub const TEXT_FIELDS: [&[&str]; 3] = [&["name"], &["metadata", "realName"], &["metadata", "categories"]];

/// One entry of the dataset. The shape is not validated; fields are read on demand.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(pub Value);

impl Record {
    pub fn new(value: Value) -> Self { Self(value) }

    /// Text stored at `path`, or empty text when the field or any parent is missing.
    ///
    /// Numbers and booleans are rendered as their JSON text. Nulls, arrays and
    /// objects count as empty.
    pub fn text_at(&self, path: &[&str]) -> Cow<'_, str> {
        let mut cur = &self.0;
        for key in path {
            match cur.get(*key) {
                Some(next) => cur = next,
                None => return Cow::Borrowed(""),
            }
        }
        match cur {
            Value::String(s) => Cow::Borrowed(s.as_str()),
            Value::Number(n) => Cow::Owned(n.to_string()),
            Value::Bool(b) => Cow::Owned(b.to_string()),
            Value::Null | Value::Array(_) | Value::Object(_) => Cow::Borrowed(""),
        }
    }

    pub fn name(&self) -> Cow<'_, str> { self.text_at(TEXT_FIELDS[0]) }

    /// All indexed text sources, in indexing order.
    pub fn text_sources(&self) -> Vec<Cow<'_, str>> {
        TEXT_FIELDS.iter().map(|path| self.text_at(path)).collect()
    }
}

impl From<Value> for Record {
    fn from(value: Value) -> Self { Self(value) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_nested_fields() {
        let r = Record::new(json!({
            "name": "Iron Man",
            "metadata": {"realName": "Tony Stark", "categories": "Hero, Genius"}
        }));
        let sources: Vec<String> = r.text_sources().into_iter().map(Cow::into_owned).collect();
        assert_eq!(sources, vec!["Iron Man", "Tony Stark", "Hero, Genius"]);
    }

    #[test]
    fn missing_parent_is_empty() {
        let r = Record::new(json!({"name": "Iron Man"}));
        assert_eq!(r.text_at(&["metadata", "realName"]), "");
        assert_eq!(r.name(), "Iron Man");
    }

    #[test]
    fn non_object_parent_is_empty() {
        let r = Record::new(json!({"name": "X", "metadata": "not an object"}));
        assert_eq!(r.text_at(&["metadata", "categories"]), "");
        let r = Record::new(json!({"metadata": null}));
        assert_eq!(r.text_at(&["metadata", "categories"]), "");
        let r = Record::new(json!(17));
        assert_eq!(r.name(), "");
    }

    #[test]
    fn coerces_scalars() {
        let r = Record::new(json!({"name": 42, "metadata": {"realName": true, "categories": null}}));
        assert_eq!(r.name(), "42");
        assert_eq!(r.text_at(&["metadata", "realName"]), "true");
        assert_eq!(r.text_at(&["metadata", "categories"]), "");
        let r = Record::new(json!({"name": ["a", "b"]}));
        assert_eq!(r.name(), "");
    }
}
