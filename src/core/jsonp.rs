//! Padded-JSON (JSONP) unwrapping.
//!
//! The course host predates CORS support, so it serves the payload as a
//! JavaScript invocation of a caller-supplied function:
//! `showCourses({"courses": ...});`. This module reduces that body back to the
//! bare JSON argument.

use crate::utils::error::{BadgeError, Result};

fn payload_error(message: impl Into<String>) -> BadgeError {
    BadgeError::PayloadError {
        message: message.into(),
    }
}

/// Strips the `callback(...)` wrapper from a JSONP response body and returns
/// the inner JSON slice. Tolerates surrounding whitespace and a trailing
/// semicolon; rejects bodies that invoke a different callback or are not a
/// callback invocation at all.
pub fn strip_padding<'a>(body: &'a str, callback: &str) -> Result<&'a str> {
    let trimmed = body.trim();

    let rest = trimmed.strip_prefix(callback).ok_or_else(|| {
        payload_error(format!("response does not invoke callback '{}'", callback))
    })?;

    let rest = rest.trim_start();
    let rest = rest
        .strip_prefix('(')
        .ok_or_else(|| payload_error("expected '(' after callback name"))?;

    let rest = rest.trim_end();
    let rest = rest.strip_suffix(';').unwrap_or(rest).trim_end();
    let inner = rest
        .strip_suffix(')')
        .ok_or_else(|| payload_error("unterminated callback invocation"))?;

    let inner = inner.trim();
    if inner.is_empty() {
        return Err(payload_error("callback invoked with no argument"));
    }

    Ok(inner)
}
