//! Shared HTTP utilities for the completion client.

use super::AiError;
use std::error::Error;

/// Convert a reqwest error into an AiError with helpful messages.
pub fn handle_request_error(e: reqwest::Error) -> Box<dyn Error> {
    let error_msg = if e.is_timeout() {
        format!("Request timed out: {}", e)
    } else if e.is_connect() {
        format!(
            "Connection error: {}. Please check your internet connection.",
            e
        )
    } else if let Some(status) = e.status() {
        format!("API error (status {}): {}", status, e)
    } else {
        format!("Unknown error: {}", e)
    };
    Box::new(AiError::ApiError {
        code: e.status().map(|s| s.as_u16()).unwrap_or(500),
        message: error_msg,
    })
}

/// Map a non-success status to a clearer message for common failure modes.
pub fn status_error(code: u16, error_text: String) -> AiError {
    let message = match code {
        520..=524 => format!(
            "Cloudflare/API gateway error (status {}): {}. This is usually transient - please try again.",
            code, error_text
        ),
        429 => format!(
            "Rate limit exceeded (status {}): {}. Please wait a moment and try again.",
            code, error_text
        ),
        503 => format!(
            "Service unavailable (status {}): {}. The API may be temporarily down - please try again.",
            code, error_text
        ),
        _ => format!("API error (status {}): {}", code, error_text),
    };
    AiError::ApiError { code, message }
}
