//! Client Errors
//!
//! Every failure a request can end in, plus the user-facing text for each.

use serde_json::Value;

/// Common result type for client operations
pub type ApiResult<T> = Result<T, ApiError>;

pub const NETWORK_MESSAGE: &str = "Cannot connect to server. Please check if the backend is running.";
pub const SESSION_EXPIRED_MESSAGE: &str = "Your session has expired. Please log in again.";
const FORBIDDEN_MESSAGE: &str = "You don't have permission to access this resource. Please try logging in again.";
const DECODE_MESSAGE: &str = "Unexpected response from server.";

#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Login finished without a usable token
    Auth(String),
    /// HTTP 401; the transport has already torn the session down
    Unauthorized,
    /// Any other non-success status, with the best message found in the body
    Server { status: u16, message: String },
    /// No response was received at all
    Network(String),
    /// A local lookup came up empty (e.g. project id not in the fetched list)
    NotFound(String),
    /// The body did not have the expected shape
    Decode(String),
}

impl ApiError {
    /// Classify a non-success response
    pub fn from_response(status: u16, body: &str) -> Self {
        if status == 401 {
            return ApiError::Unauthorized;
        }
        ApiError::Server { status, message: extract_message(status, body) }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized => Some(401),
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }

    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }

    /// Text suitable for a notification or inline banner
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Auth(msg) => msg.clone(),
            ApiError::Unauthorized => SESSION_EXPIRED_MESSAGE.to_string(),
            ApiError::Server { message, .. } => message.clone(),
            ApiError::Network(_) => NETWORK_MESSAGE.to_string(),
            ApiError::NotFound(what) => what.clone(),
            ApiError::Decode(_) => DECODE_MESSAGE.to_string(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Auth(msg) => write!(f, "Authentication failed: {}", msg),
            ApiError::Unauthorized => write!(f, "Unauthorized"),
            ApiError::Server { status, message } => write!(f, "Server error {}: {}", status, message),
            ApiError::Network(detail) => write!(f, "Network error: {}", detail),
            ApiError::NotFound(what) => write!(f, "Not found: {}", what),
            ApiError::Decode(detail) => write!(f, "Decode error: {}", detail),
        }
    }
}

impl std::error::Error for ApiError {}

/// Pull a readable message out of an error body.
///
/// Order: `message`, `error`, a plain string body, a list of field errors,
/// a field → message map, then a status-based fallback.
pub fn extract_message(status: u16, body: &str) -> String {
    let trimmed = body.trim();
    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Object(map)) => {
            if let Some(message) = non_empty(map.get("message")) {
                return message;
            }
            if let Some(error) = non_empty(map.get("error")) {
                return error;
            }
            let fields: Vec<&str> = map
                .values()
                .filter_map(Value::as_str)
                .filter(|s| !s.trim().is_empty())
                .collect();
            if !fields.is_empty() {
                return fields.join(", ");
            }
        }
        Ok(Value::String(text)) if !text.trim().is_empty() => return text,
        Ok(Value::Array(entries)) => {
            let messages: Vec<String> = entries
                .iter()
                .filter_map(|entry| match entry {
                    Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
                    Value::Object(fields) => {
                        non_empty(fields.get("defaultMessage")).or_else(|| non_empty(fields.get("message")))
                    }
                    _ => None,
                })
                .collect();
            if !messages.is_empty() {
                return messages.join(", ");
            }
        }
        Ok(_) => {}
        Err(_) if !trimmed.is_empty() => return trimmed.to_string(),
        Err(_) => {}
    }

    if status == 403 {
        return FORBIDDEN_MESSAGE.to_string();
    }
    format!("Server error: {}", status)
}

fn non_empty(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_field_wins() {
        let body = r#"{"error":"Internal Server Error","message":"Project not owned by user"}"#;
        assert_eq!(extract_message(500, body), "Project not owned by user");
    }

    #[test]
    fn test_error_field_when_message_missing() {
        assert_eq!(extract_message(500, r#"{"error":"Internal Server Error","message":""}"#), "Internal Server Error");
    }

    #[test]
    fn test_plain_text_body() {
        assert_eq!(extract_message(400, "Task not found"), "Task not found");
        assert_eq!(extract_message(400, r#""Due date is in the past""#), "Due date is in the past");
    }

    #[test]
    fn test_field_error_array_is_joined() {
        let body = r#"[{"field":"title","defaultMessage":"Task title is required"},{"message":"Description too long"}]"#;
        assert_eq!(extract_message(400, body), "Task title is required, Description too long");
    }

    #[test]
    fn test_field_map_is_joined() {
        assert_eq!(extract_message(400, r#"{"title":"Project title is required"}"#), "Project title is required");
    }

    #[test]
    fn test_fallbacks() {
        assert_eq!(extract_message(502, ""), "Server error: 502");
        assert_eq!(extract_message(500, "{}"), "Server error: 500");
        assert!(extract_message(403, "").contains("permission"));
    }

    #[test]
    fn test_401_is_unauthorized() {
        let err = ApiError::from_response(401, r#"{"message":"expired"}"#);
        assert!(err.is_unauthorized());
        assert_eq!(err.status(), Some(401));
    }

    #[test]
    fn test_user_messages() {
        assert_eq!(ApiError::Network("refused".into()).user_message(), NETWORK_MESSAGE);
        let server = ApiError::from_response(400, r#"{"message":"Bad title"}"#);
        assert_eq!(server.user_message(), "Bad title");
        assert_eq!(server.to_string(), "Server error 400: Bad title");
    }
}
