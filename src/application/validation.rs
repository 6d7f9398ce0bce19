//! Declarative request field checks.
//!
//! Every rule records a human readable message against the offending field
//! and lets the caller keep going, so one request reports all of its problems
//! at once.
use std::collections::BTreeMap;
use std::fmt;

use serde_json::Value;

use crate::application::ApplicationResult;
use crate::domain::slug::is_url_safe;

pub const SLUG_TAKEN: &str = "The slug has already been taken.";

/// Field name to messages, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn has(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn as_map(&self) -> &BTreeMap<String, Vec<String>> {
        &self.0
    }

    pub fn into_map(self) -> BTreeMap<String, Vec<String>> {
        self.0
    }

    pub fn into_result(self) -> ApplicationResult<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self.into())
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            for message in messages {
                if !first {
                    f.write_str("; ")?;
                }
                first = false;
                write!(f, "{field}: {message}")?;
            }
        }
        Ok(())
    }
}

/// `required|min:{min}|max:{max}` on a text field. Returns the trimmed value
/// when one was supplied, even if a length rule failed.
pub fn required_text<'a>(
    errors: &mut FieldErrors,
    field: &str,
    value: Option<&'a str>,
    min: usize,
    max: Option<usize>,
) -> Option<&'a str> {
    let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        errors.add(field, format!("The {field} field is required."));
        return None;
    };

    let len = value.chars().count();
    if len < min {
        errors.add(
            field,
            format!("The {field} must be at least {min} characters."),
        );
    }
    if let Some(max) = max {
        if len > max {
            errors.add(
                field,
                format!("The {field} may not be greater than {max} characters."),
            );
        }
    }

    Some(value)
}

/// `alpha_dash`: ASCII letters, digits, dashes and underscores.
pub fn alpha_dash(errors: &mut FieldErrors, field: &str, value: &str) -> bool {
    if is_url_safe(value) {
        true
    } else {
        errors.add(
            field,
            format!("The {field} may only contain letters, numbers, dashes and underscores."),
        );
        false
    }
}

/// `required|boolean`. Accepts `true`, `false`, `1`, `0`, `"1"`, `"0"`,
/// `"true"` and `"false"`.
pub fn required_boolean(errors: &mut FieldErrors, field: &str, value: Option<&Value>) -> Option<bool> {
    let value = match value {
        None | Some(Value::Null) => {
            errors.add(field, format!("The {field} field is required."));
            return None;
        }
        Some(Value::String(s)) if s.trim().is_empty() => {
            errors.add(field, format!("The {field} field is required."));
            return None;
        }
        Some(value) => value,
    };

    let parsed = match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => match n.as_i64() {
            Some(1) => Some(true),
            Some(0) => Some(false),
            _ => None,
        },
        Value::String(s) => match s.trim() {
            "1" | "true" => Some(true),
            "0" | "false" => Some(false),
            _ => None,
        },
        _ => None,
    };

    if parsed.is_none() {
        errors.add(field, format!("The {field} field must be true or false."));
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn required_text_reports_missing_and_blank() {
        let mut errors = FieldErrors::new();
        assert!(required_text(&mut errors, "name", None, 2, Some(255)).is_none());
        assert!(required_text(&mut errors, "slug", Some("   "), 1, None).is_none());
        assert_eq!(
            errors.get("name").unwrap(),
            ["The name field is required.".to_string()]
        );
        assert!(errors.has("slug"));
    }

    #[test]
    fn required_text_checks_length_in_chars() {
        let mut errors = FieldErrors::new();
        assert_eq!(
            required_text(&mut errors, "name", Some(" x "), 2, Some(255)),
            Some("x")
        );
        assert_eq!(
            errors.get("name").unwrap(),
            ["The name must be at least 2 characters.".to_string()]
        );

        let mut errors = FieldErrors::new();
        let long = "ü".repeat(256);
        required_text(&mut errors, "title", Some(&long), 2, Some(255));
        assert_eq!(
            errors.get("title").unwrap(),
            ["The title may not be greater than 255 characters.".to_string()]
        );

        let mut errors = FieldErrors::new();
        required_text(&mut errors, "title", Some(&"ü".repeat(255)), 2, Some(255));
        assert!(errors.is_empty());
    }

    #[test]
    fn alpha_dash_rejects_spaces_and_punctuation() {
        let mut errors = FieldErrors::new();
        assert!(alpha_dash(&mut errors, "slug", "my_slug-2"));
        assert!(!alpha_dash(&mut errors, "slug", "my slug"));
        assert!(!alpha_dash(&mut errors, "slug", "a/b"));
        assert_eq!(errors.get("slug").map(<[String]>::len), Some(2));
    }

    #[test]
    fn boolean_accepts_common_encodings() {
        let mut errors = FieldErrors::new();
        for (input, expected) in [
            (json!(true), true),
            (json!(0), false),
            (json!("1"), true),
            (json!("false"), false),
        ] {
            assert_eq!(
                required_boolean(&mut errors, "status", Some(&input)),
                Some(expected)
            );
        }
        assert!(errors.is_empty());

        assert_eq!(required_boolean(&mut errors, "status", Some(&json!("yes"))), None);
        assert_eq!(required_boolean(&mut errors, "status", Some(&json!(2))), None);
        assert_eq!(
            errors.get("status").unwrap()[0],
            "The status field must be true or false."
        );
    }

    #[test]
    fn missing_boolean_is_required_error() {
        let mut errors = FieldErrors::new();
        assert_eq!(required_boolean(&mut errors, "status", None), None);
        assert_eq!(
            errors.get("status").unwrap(),
            ["The status field is required.".to_string()]
        );
    }

    #[test]
    fn display_joins_all_messages() {
        let mut errors = FieldErrors::new();
        errors.add("slug", SLUG_TAKEN);
        errors.add("name", "The name field is required.");
        assert_eq!(
            errors.to_string(),
            "name: The name field is required.; slug: The slug has already been taken."
        );
        assert!(errors.into_result().is_err());
    }
}
