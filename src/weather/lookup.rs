//! Defensive traversal of provider JSON.
//!
//! Every step of a [`Lookup`] chain may find nothing; leaf accessors then
//! return the zero value of their type instead of an error.

use serde_json::Value;

#[derive(Debug, Clone, Copy)]
pub struct Lookup<'a>(Option<&'a Value>);

impl<'a> Lookup<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self(Some(value))
    }

    /// Member `key` of an object; absent for any other JSON type.
    pub fn key(self, key: &str) -> Self {
        Self(self.0.and_then(|v| v.as_object()).and_then(|m| m.get(key)))
    }

    pub fn is_present(self) -> bool {
        self.0.is_some()
    }

    /// Elements of an array; empty for any other JSON type.
    pub fn items(self) -> impl Iterator<Item = Lookup<'a>> {
        self.0
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .map(|v| Lookup(Some(v)))
    }

    /// Whether the value is a JSON object.
    pub fn is_object(self) -> bool {
        matches!(self.0, Some(Value::Object(_)))
    }

    pub fn str(self) -> String {
        self.0
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_default()
    }

    /// Numbers only, integer or float. Numeric strings such as `"12.5"` are
    /// not parsed and read as `0.0`.
    pub fn f64(self) -> f64 {
        self.0.and_then(Value::as_f64).unwrap_or(0.0)
    }

    /// [`Lookup::f64`] truncated toward zero.
    pub fn int(self) -> i64 {
        self.f64() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_access() {
        let doc = json!({"current": {"condition": {"text": "Sunny", "code": 1000}}});
        let root = Lookup::new(&doc);

        assert_eq!(root.key("current").key("condition").key("text").str(), "Sunny");
        assert_eq!(root.key("current").key("condition").key("code").int(), 1000);
    }

    #[test]
    fn test_missing_and_mistyped_fields_are_zero() {
        let doc = json!({"a": "text", "b": [1, 2], "n": null});
        let root = Lookup::new(&doc);

        assert_eq!(root.key("missing").key("deeper").str(), "");
        assert_eq!(root.key("a").f64(), 0.0);
        assert_eq!(root.key("a").key("x").int(), 0);
        assert_eq!(root.key("b").str(), "");
        assert_eq!(root.key("n").f64(), 0.0);
        assert!(!root.key("missing").is_present());
        assert!(root.key("n").is_present());
    }

    #[test]
    fn test_numeric_strings_read_as_zero() {
        let doc = json!({"temp_c": "21.5"});
        assert_eq!(Lookup::new(&doc).key("temp_c").f64(), 0.0);
    }

    #[test]
    fn test_integers_and_floats() {
        let doc = json!({"i": 7, "f": 7.9, "neg": -3.7});
        let root = Lookup::new(&doc);

        assert_eq!(root.key("i").f64(), 7.0);
        assert_eq!(root.key("f").int(), 7);
        assert_eq!(root.key("neg").int(), -3);
    }

    #[test]
    fn test_items() {
        let doc = json!({"list": [{"v": 1}, {"v": 2}], "obj": {"v": 3}});
        let root = Lookup::new(&doc);

        let values: Vec<i64> = root.key("list").items().map(|l| l.key("v").int()).collect();
        assert_eq!(values, vec![1, 2]);
        assert_eq!(root.key("obj").items().count(), 0);
        assert_eq!(root.key("missing").items().count(), 0);
    }
}
