use crate::utils::error::{ExportError, Result};
use std::fmt::Display;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field: &str, value: impl Display, reason: impl Into<String>) -> ExportError {
    ExportError::InvalidConfigValueError {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// 只接受 http/https 端點
pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(invalid(field_name, url_str, "URL cannot be empty"));
    }

    let url = Url::parse(url_str)
        .map_err(|e| invalid(field_name, url_str, format!("Invalid URL format: {}", e)))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(invalid(
            field_name,
            url_str,
            format!("Unsupported URL scheme: {}", scheme),
        )),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        Err(invalid(field_name, path, "Path cannot be empty"))
    } else if path.contains('\0') {
        Err(invalid(field_name, path.escape_default(), "Path contains null bytes"))
    } else {
        Ok(())
    }
}

/// 缺少或空白都算缺少
pub fn validate_required_field<'a>(field_name: &str, value: &'a Option<String>) -> Result<&'a str> {
    match value.as_deref() {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ExportError::MissingConfigError {
            field: field_name.to_string(),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

/// Inclusive bounds check; also serves as the lower-bound check with `max = T::MAX`.
pub fn validate_range<T: PartialOrd + Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(invalid(
            field_name,
            value,
            format!("Value must be between {} and {}", min, max),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("source_endpoint", "https://example.com").is_ok());
        assert!(validate_url("source_endpoint", "http://localhost:4000/reviews").is_ok());
        assert!(validate_url("source_endpoint", "").is_err());
        assert!(validate_url("source_endpoint", "invalid-url").is_err());
        assert!(validate_url("source_endpoint", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_required_field() {
        assert_eq!(
            validate_required_field("appId", &Some("com.example.app".to_string())).unwrap(),
            "com.example.app"
        );
        assert!(validate_required_field("appId", &None).is_err());
        assert!(validate_required_field("appId", &Some("   ".to_string())).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("request_timeout", 30u64, 1, 600).is_ok());
        assert!(validate_range("request_timeout", 0u64, 1, 600).is_err());
        assert!(validate_range("request_timeout", 601u64, 1, 600).is_err());
    }

    #[test]
    fn test_validate_range_as_lower_bound() {
        assert!(validate_range("port", 3000u16, 1, u16::MAX).is_ok());
        assert!(validate_range("port", u16::MAX, 1, u16::MAX).is_ok());
        let err = validate_range("max_limit", 0u32, 1, u32::MAX).unwrap_err();
        match err {
            ExportError::InvalidConfigValueError { field, value, .. } => {
                assert_eq!(field, "max_limit");
                assert_eq!(value, "0");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output_dir", "./downloads").is_ok());
        assert!(validate_path("output_dir", "").is_err());
        assert!(validate_path("output_dir", "bad\0path").is_err());
    }
}
