use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    #[error("Review source request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Review source returned {status}: {message}")]
    SourceError { status: u16, message: String },

    #[error("Spreadsheet error: {0}")]
    XlsxError(#[from] rust_xlsxwriter::XlsxError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Background task failed: {0}")]
    TaskError(#[from] tokio::task::JoinError),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

/// 錯誤分類，HTTP 層依此決定狀態碼
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    ClientInput,
    UpstreamFetch,
    Write,
    Configuration,
    Internal,
}

impl ExportError {
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidRequest { .. } => ErrorCategory::ClientInput,
            Self::ApiError(_) | Self::SourceError { .. } | Self::SerializationError(_) => {
                ErrorCategory::UpstreamFetch
            }
            Self::XlsxError(_) | Self::IoError(_) => ErrorCategory::Write,
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
            Self::TaskError(_) => ErrorCategory::Internal,
        }
    }

    /// 回傳給呼叫端的訊息，不含底層細節
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidRequest { message } => format!("❌ {}", message),
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => format!("❌ {}", self),
            _ => "❌ Failed to fetch reviews".to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::ClientInput => "Check the query parameters (appId, rating, limit)",
            ErrorCategory::UpstreamFetch => {
                "Check that the review source endpoint is reachable and the app id exists"
            }
            ErrorCategory::Write => "Check that the output directory exists and is writable",
            ErrorCategory::Configuration => "Fix the configuration value and restart",
            ErrorCategory::Internal => "Retry the request; report it if the problem persists",
        }
    }
}

pub type Result<T> = std::result::Result<T, ExportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_input_keeps_message() {
        let err = ExportError::invalid_request("appId is required");
        assert_eq!(err.category(), ErrorCategory::ClientInput);
        assert_eq!(err.user_friendly_message(), "❌ appId is required");
    }

    #[test]
    fn test_server_side_errors_hide_details() {
        let err = ExportError::SourceError {
            status: 502,
            message: "upstream exploded at 10.0.0.3".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::UpstreamFetch);
        assert_eq!(err.user_friendly_message(), "❌ Failed to fetch reviews");

        let io = ExportError::from(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "/srv/downloads is read-only",
        ));
        assert_eq!(io.category(), ErrorCategory::Write);
        assert!(!io.user_friendly_message().contains("/srv/downloads"));
    }
}
