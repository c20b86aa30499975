//! Request parameter coercion helpers.

use serde_json::Value;

/// Coerce loosely-typed boolean parameters in place.
///
/// Form-encoded and query parameters arrive as strings or numbers;
/// `"1"`/`"true"` and `1` become `true`, other strings and integers
/// become `false`. Values that are neither strings nor integers (already
/// booleans, nulls, nested structures) are left untouched, as are absent
/// keys.
pub fn parse_boolean(params: &mut Value, keys: &[&str]) {
    let Some(obj) = params.as_object_mut() else {
        return;
    };
    for key in keys {
        let Some(value) = obj.get_mut(*key) else {
            continue;
        };
        let coerced = match &*value {
            Value::String(s) => Some(Value::Bool(s == "1" || s == "true")),
            Value::Number(n) => n.as_i64().map(|i| Value::Bool(i == 1)),
            _ => None,
        };
        if let Some(coerced) = coerced {
            *value = coerced;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_and_numeric_truthy_values() {
        let mut params = json!({"round": "1", "billable": "true", "locked": 1});
        parse_boolean(&mut params, &["round", "billable", "locked"]);
        assert_eq!(params, json!({"round": true, "billable": true, "locked": true}));
    }

    #[test]
    fn test_other_strings_and_integers_are_false() {
        let mut params = json!({"round": "0", "billable": "yes", "locked": 2});
        parse_boolean(&mut params, &["round", "billable", "locked"]);
        assert_eq!(params, json!({"round": false, "billable": false, "locked": false}));
    }

    #[test]
    fn test_non_coercible_values_are_untouched() {
        let mut params = json!({"round": true, "comment": null, "tags": ["a"], "rate": 1.5});
        parse_boolean(&mut params, &["round", "comment", "tags", "rate", "absent"]);
        assert_eq!(
            params,
            json!({"round": true, "comment": null, "tags": ["a"], "rate": 1.5})
        );
    }
}
