//! API error taxonomy.
//!
//! Every call made through the frontend HTTP client resolves to
//! `Result<T, ApiError>`. Transport failures never produced a response;
//! server failures carry the status and the `detail` message returned by the API.

use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// No response was received (DNS, CORS, offline, timeout).
    #[error("Error de red: {0}")]
    Network(String),

    /// The stored credential was rejected. The session must be cleared.
    #[error("Sesión expirada: {0}")]
    Unauthorized(String),

    /// Any other non-2xx response.
    #[error("{detail}")]
    Server { status: u16, detail: String },

    /// The response arrived but its body did not have the expected shape.
    #[error("Respuesta inválida del servidor: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classifies a non-2xx response from its status code and raw body.
    pub fn from_response(status: u16, body: &str) -> Self {
        let detail = extract_detail(body).unwrap_or_else(|| fallback_detail(status, body));
        if status == 401 {
            ApiError::Unauthorized(detail)
        } else {
            ApiError::Server { status, detail }
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized(_))
    }

    /// Message without the category prefix, for inline form errors.
    pub fn detail(&self) -> &str {
        match self {
            ApiError::Network(d) | ApiError::Unauthorized(d) | ApiError::Decode(d) => d,
            ApiError::Server { detail, .. } => detail,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized(_) => Some(401),
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Pulls the human-readable message out of a FastAPI error body.
///
/// `detail` is either a plain string or a list of validation objects carrying
/// a `msg` field; list messages are joined with `"; "`.
fn extract_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}

fn fallback_detail(status: u16, body: &str) -> String {
    let trimmed = body.trim();
    if !trimmed.is_empty() && trimmed.len() <= 200 && !trimmed.starts_with('<') {
        trimmed.to_string()
    } else {
        format!("El servidor respondió con estado {}", status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_detail_is_extracted() {
        let err = ApiError::from_response(400, r#"{"detail":"Template is in use"}"#);
        assert_eq!(
            err,
            ApiError::Server {
                status: 400,
                detail: "Template is in use".to_string()
            }
        );
        assert_eq!(err.to_string(), "Template is in use");
    }

    #[test]
    fn validation_list_is_joined() {
        let body = r#"{"detail":[{"loc":["body","name"],"msg":"field required"},{"msg":"too short"}]}"#;
        let err = ApiError::from_response(422, body);
        assert_eq!(err.to_string(), "field required; too short");
        assert_eq!(err.status(), Some(422));
    }

    #[test]
    fn unauthorized_is_classified() {
        let err = ApiError::from_response(401, r#"{"detail":"Could not validate credentials"}"#);
        assert!(err.is_unauthorized());
        assert_eq!(err.status(), Some(401));
        assert_eq!(err.detail(), "Could not validate credentials");
    }

    #[test]
    fn html_bodies_fall_back_to_status_message() {
        let err = ApiError::from_response(502, "<html>Bad gateway</html>");
        assert_eq!(err.to_string(), "El servidor respondió con estado 502");
    }

    #[test]
    fn short_plain_bodies_are_kept() {
        let err = ApiError::from_response(500, "boom");
        assert_eq!(err.to_string(), "boom");
    }
}
