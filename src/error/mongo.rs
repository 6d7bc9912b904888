use serde::{Deserialize, Serialize};

/// Structured error information extracted from MongoDB errors.
///
/// Serialized to JSON for debug logging; the message is also what the
/// user sees as the cause of a failed operation.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ErrorInfo {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub(crate) error_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) code: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) message: Option<String>,
}

impl ErrorInfo {
    /// Convert error info to compact JSON string (single line).
    pub fn to_json_compact(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Human-readable one-line summary, `Name (code): message` when known.
    pub fn summary(&self) -> String {
        let message = self.message.clone().unwrap_or_default();
        match (&self.name, self.code) {
            (Some(name), Some(code)) => format!("{name} ({code}): {message}"),
            (None, Some(code)) => format!("code {code}: {message}"),
            _ => message,
        }
    }
}

/// Describe a MongoDB error as a single user-facing cause line.
pub fn describe_mongodb_error(error: &mongodb::error::Error) -> String {
    let info = extract_error_info(error);
    if let Ok(json) = info.to_json_compact() {
        tracing::debug!("MongoDB error: {}", json);
    }
    info.summary()
}

/// Extract structured information from a MongoDB error using the driver API.
///
/// This avoids string parsing by using the driver's typed error structures.
pub fn extract_error_info(error: &mongodb::error::Error) -> ErrorInfo {
    use mongodb::error::ErrorKind;

    let mut info = ErrorInfo::default();

    match error.kind.as_ref() {
        ErrorKind::Command(command_error) => {
            info.error_type = Some("mongo.command_error".to_string());
            info.code = Some(command_error.code);
            info.message = Some(command_error.message.clone());
            info.name = get_error_name(command_error.code)
                .or_else(|| Some(command_error.code_name.clone()).filter(|n| !n.is_empty()));
        }
        ErrorKind::Authentication { message, .. } => {
            info.error_type = Some("mongo.authentication_error".to_string());
            info.message = Some(message.clone());
        }
        ErrorKind::InvalidArgument { message, .. } => {
            info.error_type = Some("mongo.invalid_argument".to_string());
            info.message = Some(message.clone());
        }
        ErrorKind::ServerSelection { message, .. } => {
            info.error_type = Some("mongo.server_selection_error".to_string());
            info.message = Some(message.clone());
        }
        ErrorKind::DnsResolve { message, .. } => {
            info.error_type = Some("mongo.dns_error".to_string());
            info.message = Some(message.clone());
        }
        ErrorKind::Io(io_error) => {
            info.error_type = Some("mongo.io_error".to_string());
            info.message = Some(io_error.to_string());
        }
        _ => {
            // For other error types, fall back to the Display representation.
            info.message = Some(error.to_string());
        }
    }

    info
}

/// Get a human-readable error name from a MongoDB error code.
fn get_error_name(code: i32) -> Option<String> {
    let name = match code {
        13 => "Unauthorized",
        18 => "AuthenticationFailed",
        26 => "NamespaceNotFound",
        50 => "MaxTimeMSExpired",
        _ => return None,
    };

    Some(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_error_name() {
        assert_eq!(get_error_name(18).as_deref(), Some("AuthenticationFailed"));
        assert_eq!(get_error_name(13).as_deref(), Some("Unauthorized"));
        assert_eq!(get_error_name(424242), None);
    }

    #[test]
    fn test_summary_with_code_and_name() {
        let info = ErrorInfo {
            error_type: Some("mongo.command_error".into()),
            code: Some(13),
            name: Some("Unauthorized".into()),
            message: Some("not authorized on admin".into()),
        };
        assert_eq!(info.summary(), "Unauthorized (13): not authorized on admin");
    }

    #[test]
    fn test_summary_message_only() {
        let info = ErrorInfo {
            message: Some("Server selection timeout".into()),
            ..Default::default()
        };
        assert_eq!(info.summary(), "Server selection timeout");
    }

    #[test]
    fn test_compact_json_skips_missing_fields() {
        let info = ErrorInfo {
            message: Some("boom".into()),
            ..Default::default()
        };
        assert_eq!(info.to_json_compact().unwrap(), r#"{"message":"boom"}"#);
    }
}
