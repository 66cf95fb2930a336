use std::fmt;

use reqwest::StatusCode;
use serde_json::Value;

/// Which call failed; used as the message prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Write,
    ClearCache,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Operation::List => "Failed to fetch configs",
            Operation::Write => "Failed to update config",
            Operation::ClearCache => "Failed to clear cache",
        };
        f.write_str(s)
    }
}

/// Uniform failure of a single round trip.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// The request never produced a response.
    #[error("{op}: {source}")]
    Network {
        op: Operation,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("{op}: {detail}")]
    Protocol {
        op: Operation,
        status: StatusCode,
        detail: String,
    },

    /// A success response whose body could not be decoded.
    #[error("{op}: invalid response body: {source}")]
    Decode {
        op: Operation,
        #[source]
        source: serde_json::Error,
    },
}

impl RequestError {
    pub fn operation(&self) -> Operation {
        match self {
            RequestError::Network { op, .. }
            | RequestError::Protocol { op, .. }
            | RequestError::Decode { op, .. } => *op,
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            RequestError::Protocol { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Human message for a failed response: the body's `detail` when truthy,
/// else the status reason phrase.
pub fn extract_detail(status: StatusCode, body: &[u8]) -> String {
    let detail = serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|v| v.get("detail").cloned())
        .filter(is_truthy);

    match detail {
        Some(Value::String(s)) => s,
        Some(other) => other.to_string(),
        None => status
            .canonical_reason()
            .map(str::to_string)
            .unwrap_or_else(|| status.as_u16().to_string()),
    }
}

fn is_truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_string_detail_verbatim() {
        let msg = extract_detail(
            StatusCode::INTERNAL_SERVER_ERROR,
            br#"{"detail":"db unreachable"}"#,
        );
        assert_eq!(msg, "db unreachable");
    }

    #[test]
    fn structured_detail_is_rendered_as_json() {
        let msg = extract_detail(
            StatusCode::UNPROCESSABLE_ENTITY,
            br#"{"detail":[{"loc":["body","key"],"msg":"field required"}]}"#,
        );
        assert_eq!(msg, r#"[{"loc":["body","key"],"msg":"field required"}]"#);
    }

    #[test]
    fn falls_back_to_reason_phrase() {
        assert_eq!(
            extract_detail(StatusCode::SERVICE_UNAVAILABLE, b"<html>down</html>"),
            "Service Unavailable"
        );
        assert_eq!(
            extract_detail(StatusCode::BAD_GATEWAY, br#"{"detail":""}"#),
            "Bad Gateway"
        );
        assert_eq!(
            extract_detail(StatusCode::NOT_FOUND, br#"{"detail":null}"#),
            "Not Found"
        );
    }

    #[test]
    fn unknown_status_falls_back_to_code() {
        let status = StatusCode::from_u16(599).unwrap();
        assert_eq!(extract_detail(status, b""), "599");
    }

    #[test]
    fn message_carries_operation_prefix() {
        let err = RequestError::Protocol {
            op: Operation::Write,
            status: StatusCode::INTERNAL_SERVER_ERROR,
            detail: "db unreachable".into(),
        };
        assert_eq!(err.to_string(), "Failed to update config: db unreachable");
        assert_eq!(err.operation(), Operation::Write);
        assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
    }
}
