use crate::domain::model::{Teacher, TeacherPatch};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON truthiness: `null`, `false`, `0`, NaN and `""` are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Strict equality of two values decoded from separate request bodies.
/// Numbers compare by value, arrays and objects never compare equal.
pub fn strict_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => match (x.as_f64(), y.as_f64()) {
            (Some(x), Some(y)) => x == y,
            _ => x == y,
        },
        (Value::Array(_), _) | (Value::Object(_), _) => false,
        _ => a == b,
    }
}

/// 決定 PUT 欄位何時覆寫既有值
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum PatchSemantics {
    /// Only present and truthy values are applied; `""` and `0` are ignored.
    #[default]
    Truthy,
    /// Any present, non-null value is applied.
    Presence,
}

impl PatchSemantics {
    pub fn applies(self, value: &Value) -> bool {
        match self {
            PatchSemantics::Truthy => is_truthy(value),
            PatchSemantics::Presence => !value.is_null(),
        }
    }

    /// Picks the fields of `patch` that overwrite the stored ones, as received.
    pub fn resolve(self, patch: &TeacherPatch) -> FieldUpdates {
        FieldUpdates {
            name: self.pick(patch.name.as_ref()),
            age: self.pick(patch.age.as_ref()),
            department: self.pick(patch.department.as_ref()),
        }
    }

    fn pick(self, value: Option<&Value>) -> Option<Value> {
        value.filter(|v| self.applies(v)).cloned()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldUpdates {
    pub name: Option<Value>,
    pub age: Option<Value>,
    pub department: Option<Value>,
}

impl FieldUpdates {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none() && self.department.is_none()
    }

    pub fn apply_to(self, teacher: &mut Teacher) {
        if let Some(name) = self.name {
            teacher.name = name;
        }
        if let Some(age) = self.age {
            teacher.age = age;
        }
        if let Some(department) = self.department {
            teacher.department = department;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn patch(value: Value) -> TeacherPatch {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_is_truthy() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!(-1)));
        assert!(is_truthy(&json!("0")));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
    }

    #[test]
    fn test_strict_eq() {
        assert!(strict_eq(&json!("9A"), &json!("9A")));
        assert!(strict_eq(&json!(7), &json!(7.0)));
        assert!(!strict_eq(&json!(7), &json!("7")));
        assert!(!strict_eq(&json!([1]), &json!([1])));
        assert!(!strict_eq(&json!({ "a": 1 }), &json!({ "a": 1 })));
        assert!(strict_eq(&json!(true), &json!(true)));
    }

    #[test]
    fn test_truthy_semantics_skip_falsy_values() {
        let updates = PatchSemantics::Truthy
            .resolve(&patch(json!({ "nome": "", "idade": 0, "departamento": "Artes" })));
        assert_eq!(
            updates,
            FieldUpdates {
                name: None,
                age: None,
                department: Some(json!("Artes")),
            }
        );
    }

    #[test]
    fn test_presence_semantics_apply_empty_values() {
        let updates = PatchSemantics::Presence
            .resolve(&patch(json!({ "nome": "", "idade": 0, "departamento": null })));
        assert_eq!(updates.name, Some(json!("")));
        assert_eq!(updates.age, Some(json!(0)));
        assert!(updates.department.is_none());
    }

    #[test]
    fn test_truthy_values_of_any_type_are_taken_as_received() {
        let updates = PatchSemantics::Truthy
            .resolve(&patch(json!({ "nome": 5, "idade": "41", "departamento": ["Artes"] })));
        assert_eq!(updates.name, Some(json!(5)));
        assert_eq!(updates.age, Some(json!("41")));
        assert_eq!(updates.department, Some(json!(["Artes"])));

        let updates = PatchSemantics::Truthy.resolve(&patch(json!({ "idade": 35.5 })));
        assert_eq!(updates.age, Some(json!(35.5)));
    }

    #[test]
    fn test_falsy_values_of_any_type_are_ignored_under_truthy() {
        let updates = PatchSemantics::Truthy.resolve(&patch(json!({ "nome": false })));
        assert!(updates.is_empty());
    }
}
