use serde_json::Value;

/// Turn operator text into the value sent on the wire.
///
/// Valid JSON text is sent parsed; anything else is sent as the literal
/// string. Never fails.
pub fn parse_value(raw: &str) -> Value {
    match serde_json::from_str::<Value>(raw) {
        Ok(v) => v,
        Err(_) => Value::String(raw.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn quoted_and_bare_strings_give_the_same_wire_value() {
        assert_eq!(parse_value("\"hello\""), json!("hello"));
        assert_eq!(parse_value("hello"), json!("hello"));
    }

    #[test]
    fn scalars_are_typed() {
        assert_eq!(parse_value("42"), json!(42));
        assert_eq!(parse_value("true"), json!(true));
        assert_eq!(parse_value("null"), Value::Null);
        assert_eq!(parse_value(" 120 \n"), json!(120));
    }

    #[test]
    fn structures_are_parsed() {
        assert_eq!(
            parse_value("{\n  \"a\": [1, 2]\n}"),
            json!({ "a": [1, 2] })
        );
    }

    #[test]
    fn broken_json_is_kept_verbatim() {
        assert_eq!(parse_value("{\"a\": 1"), json!("{\"a\": 1"));
        assert_eq!(parse_value(""), json!(""));
        assert_eq!(parse_value("True"), json!("True"));
    }
}
