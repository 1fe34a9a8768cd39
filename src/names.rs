// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Format and validate logging resource names.
// Author: Lukas Bower

//! Resource-name helpers: `projects/{project}/logs/{log_id}` formatting,
//! the four parent resource kinds, and the percent-encoding applied to log
//! identifiers that contain `/`.

use std::fmt::Write as _;

/// Resource kinds that may parent logs, sinks, exclusions, and metrics.
pub const PARENT_KINDS: &[&str] = &["projects", "organizations", "folders", "billingAccounts"];

/// Errors raised by resource-name validation.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum NameError {
    /// The parent is not `<kind>/<id>` with a known kind.
    #[error("invalid parent resource `{0}`: expected projects/, organizations/, folders/, or billingAccounts/ followed by an id")]
    InvalidParent(String),
    /// The log identifier was empty.
    #[error("log id must not be empty")]
    EmptyLogId,
    /// The log name is not `<parent>/logs/<id>`.
    #[error("invalid log name `{0}`")]
    InvalidLogName(String),
}

/// Check that `parent` is `<kind>/<id>` with a recognised kind and a
/// non-empty id.
pub fn validate_parent(parent: &str) -> Result<(), NameError> {
    let invalid = || NameError::InvalidParent(parent.to_owned());
    let (kind, id) = parent.split_once('/').ok_or_else(invalid)?;
    if !PARENT_KINDS.contains(&kind) || id.is_empty() || id.contains('/') {
        return Err(invalid());
    }
    Ok(())
}

/// Build a fully-qualified log name from a parent and a log id.
///
/// A log id that is already a fully-qualified name under `parent` passes
/// through unchanged; otherwise the id is percent-encoded (slashes in
/// particular) and appended as `{parent}/logs/{id}`.
pub fn format_log_name(parent: &str, log_id: &str) -> Result<String, NameError> {
    validate_parent(parent)?;
    if log_id.is_empty() {
        return Err(NameError::EmptyLogId);
    }
    let qualified_prefix = format!("{parent}/logs/");
    if let Some(rest) = log_id.strip_prefix(&qualified_prefix) {
        if rest.is_empty() {
            return Err(NameError::EmptyLogId);
        }
        return Ok(log_id.to_owned());
    }
    Ok(format!("{parent}/logs/{}", encode_log_id(log_id)))
}

/// Split a fully-qualified log name into its parent and decoded log id.
pub fn parse_log_name(name: &str) -> Result<(String, String), NameError> {
    let invalid = || NameError::InvalidLogName(name.to_owned());
    let (parent, log_id) = name.split_once("/logs/").ok_or_else(invalid)?;
    validate_parent(parent).map_err(|_| invalid())?;
    if log_id.is_empty() || log_id.contains('/') {
        return Err(invalid());
    }
    Ok((parent.to_owned(), decode_log_id(log_id)?))
}

/// Percent-encode a log id the way the service expects: everything outside
/// the unreserved set is escaped, so ids carrying `/` stay one path
/// segment.
#[must_use]
pub fn encode_log_id(log_id: &str) -> String {
    let mut encoded = String::with_capacity(log_id.len());
    for byte in log_id.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char);
            }
            other => {
                let _ = write!(encoded, "%{other:02X}");
            }
        }
    }
    encoded
}

fn decode_log_id(encoded: &str) -> Result<String, NameError> {
    let invalid = || NameError::InvalidLogName(encoded.to_owned());
    let mut bytes = Vec::with_capacity(encoded.len());
    let mut input = encoded.bytes();
    while let Some(byte) = input.next() {
        if byte != b'%' {
            bytes.push(byte);
            continue;
        }
        let high = input.next().ok_or_else(invalid)?;
        let low = input.next().ok_or_else(invalid)?;
        let pair = [high, low];
        let text = std::str::from_utf8(&pair).map_err(|_| invalid())?;
        let value = u8::from_str_radix(text, 16).map_err(|_| invalid())?;
        bytes.push(value);
    }
    String::from_utf8(bytes).map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parents_of_all_four_kinds_validate() {
        for parent in [
            "projects/demo",
            "organizations/123",
            "folders/f",
            "billingAccounts/ba-1",
        ] {
            assert_eq!(validate_parent(parent), Ok(()));
        }
    }

    #[test]
    fn malformed_parents_are_rejected() {
        for parent in ["", "projects", "teams/demo", "projects/", "projects/a/b"] {
            assert!(validate_parent(parent).is_err(), "{parent}");
        }
    }

    #[test]
    fn plain_log_ids_format_directly() {
        assert_eq!(
            format_log_name("projects/demo", "syslog"),
            Ok("projects/demo/logs/syslog".to_owned())
        );
    }

    #[test]
    fn slashed_log_ids_are_percent_encoded() {
        assert_eq!(
            format_log_name("projects/demo", "appengine.googleapis.com/request_log"),
            Ok("projects/demo/logs/appengine.googleapis.com%2Frequest_log".to_owned())
        );
    }

    #[test]
    fn qualified_names_pass_through() {
        let name = "projects/demo/logs/syslog";
        assert_eq!(format_log_name("projects/demo", name), Ok(name.to_owned()));
    }

    #[test]
    fn parse_inverts_format() {
        let name = format_log_name("projects/demo", "a/b c").expect("format");
        let (parent, log_id) = parse_log_name(&name).expect("parse");
        assert_eq!(parent, "projects/demo");
        assert_eq!(log_id, "a/b c");
    }

    #[test]
    fn empty_log_id_is_rejected() {
        assert_eq!(
            format_log_name("projects/demo", ""),
            Err(NameError::EmptyLogId)
        );
    }

    #[test]
    fn truncated_percent_escape_is_rejected() {
        assert!(parse_log_name("projects/demo/logs/bad%2").is_err());
    }
}
