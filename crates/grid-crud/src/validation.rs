//! Server-side validation errors (HTTP 422).

use std::collections::BTreeMap;

use serde_json::Value;

/// Field-level messages parsed from a 422 body of the shape
/// `{"errors": {"field": ["message", ...]}}`, plus a general message for
/// anything that does not fit that shape.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub fields: BTreeMap<String, Vec<String>>,
    pub general: Option<String>,
}

impl ValidationErrors {
    pub fn general(message: impl Into<String>) -> Self {
        Self {
            fields: BTreeMap::new(),
            general: Some(message.into()),
        }
    }

    /// Parse a 422 response body. Unrecognized shapes collapse into a
    /// general message so the edit dialog always has something to show.
    pub fn from_body(body: &Value) -> Self {
        let Some(Value::Object(errors)) = body.get("errors") else {
            return Self::general("Validation failed");
        };
        let mut fields = BTreeMap::new();
        for (field, messages) in errors {
            let messages = match messages {
                Value::Array(items) => items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect(),
                Value::String(message) => vec![message.clone()],
                _ => Vec::new(),
            };
            if !messages.is_empty() {
                fields.insert(field.clone(), messages);
            }
        }
        if fields.is_empty() {
            Self::general("Validation failed")
        } else {
            Self {
                fields,
                general: None,
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.general.is_none()
    }

    pub fn messages_for(&self, field: &str) -> &[String] {
        self.fields.get(field).map_or(&[], Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::ValidationErrors;
    use serde_json::json;

    #[test]
    fn parses_field_messages() {
        let errors = ValidationErrors::from_body(&json!({
            "errors": {
                "email": ["is invalid", "is taken"],
                "name": "is required"
            }
        }));
        assert_eq!(errors.messages_for("email"), ["is invalid", "is taken"]);
        assert_eq!(errors.messages_for("name"), ["is required"]);
        assert!(errors.general.is_none());
    }

    #[test]
    fn unrecognized_shapes_become_a_general_message() {
        let errors = ValidationErrors::from_body(&json!({"message": "nope"}));
        assert_eq!(errors.general.as_deref(), Some("Validation failed"));
        let errors = ValidationErrors::from_body(&json!({"errors": {"a": 1}}));
        assert_eq!(errors.general.as_deref(), Some("Validation failed"));
    }
}
