//! Request parameter validation.
//!
//! Turns the four raw user-supplied strings into a well-typed
//! [`RequestParams`] or a descriptive [`RconError::InvalidInput`]. Pure
//! functions only; nothing here touches the network or the filesystem.
//!
//! The check order is host, port presence, command presence, port
//! parseability, port range. The first failing check wins, so an input with
//! an empty host AND an empty port reports the missing host.

use crate::error::{RconError, Result};

/// Validated connection and command parameters, ready for execution.
///
/// An instance only exists if all four fields passed validation; it is never
/// partially valid. Construct one via [`validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestParams {
    /// Remote host name or address. Never empty.
    pub host: String,
    /// Remote TCP port.
    pub port: u16,
    /// RCON password. May be empty (some servers run without one).
    pub password: String,
    /// The single command to execute. Never empty.
    pub command: String,
}

impl RequestParams {
    /// Serialize the fields back to the raw string form they came from.
    ///
    /// Inverse of [`validate`]: `(host, port.to_string(), password, command)`.
    pub fn to_raw(&self) -> (String, String, String, String) {
        (
            self.host.clone(),
            self.port.to_string(),
            self.password.clone(),
            self.command.clone(),
        )
    }
}

/// Validate raw user input into [`RequestParams`].
///
/// # Errors
///
/// Returns [`RconError::InvalidInput`] with one of these messages, checked
/// in this order:
///
/// - `"No host specified."` if `host` is empty
/// - `"No port specified."` if `port` is empty
/// - `"No command entered."` if `command` is empty
/// - `"Invalid port specified."` if `port` is not a base-10 integer
///   or falls outside `0..=65535`
pub fn validate(host: &str, port: &str, password: &str, command: &str) -> Result<RequestParams> {
    if host.is_empty() {
        return Err(RconError::InvalidInput("No host specified.".into()));
    }

    if port.is_empty() {
        return Err(RconError::InvalidInput("No port specified.".into()));
    }

    if command.is_empty() {
        return Err(RconError::InvalidInput("No command entered.".into()));
    }

    let port: i64 = port
        .parse()
        .map_err(|_| RconError::InvalidInput("Invalid port specified.".into()))?;

    if !(0..=65535).contains(&port) {
        return Err(RconError::InvalidInput("Invalid port specified.".into()));
    }

    Ok(RequestParams {
        host: host.to_string(),
        port: port as u16,
        password: password.to_string(),
        command: command.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(result: Result<RequestParams>) -> String {
        match result {
            Err(RconError::InvalidInput(msg)) => msg,
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_host() {
        assert_eq!(
            message(validate("", "27015", "secret", "status")),
            "No host specified."
        );
    }

    #[test]
    fn test_empty_port() {
        assert_eq!(
            message(validate("example.com", "", "secret", "status")),
            "No port specified."
        );
    }

    #[test]
    fn test_empty_command() {
        assert_eq!(
            message(validate("example.com", "27015", "secret", "")),
            "No command entered."
        );
    }

    #[test]
    fn test_host_checked_before_port() {
        // Both missing: the host message wins.
        assert_eq!(message(validate("", "", "", "")), "No host specified.");
    }

    #[test]
    fn test_port_presence_checked_before_command() {
        assert_eq!(
            message(validate("example.com", "", "", "")),
            "No port specified."
        );
    }

    #[test]
    fn test_command_checked_before_port_parse() {
        // Garbage port but missing command: command message wins.
        assert_eq!(
            message(validate("example.com", "abc", "", "")),
            "No command entered."
        );
    }

    #[test]
    fn test_non_numeric_port() {
        assert_eq!(
            message(validate("example.com", "abc", "", "status")),
            "Invalid port specified."
        );
    }

    #[test]
    fn test_port_out_of_range() {
        assert_eq!(
            message(validate("example.com", "-1", "", "status")),
            "Invalid port specified."
        );
        assert_eq!(
            message(validate("example.com", "65536", "", "status")),
            "Invalid port specified."
        );
    }

    #[test]
    fn test_port_range_bounds() {
        assert_eq!(validate("h", "0", "", "c").unwrap().port, 0);
        assert_eq!(validate("h", "65535", "", "c").unwrap().port, 65535);
        assert_eq!(validate("h", "27015", "", "c").unwrap().port, 27015);
    }

    #[test]
    fn test_empty_password_is_valid() {
        let params = validate("example.com", "27015", "", "status").unwrap();
        assert_eq!(params.password, "");
    }

    #[test]
    fn test_round_trip() {
        let params = validate("example.com", "27015", "secret", "status").unwrap();
        assert_eq!(
            params.to_raw(),
            (
                "example.com".to_string(),
                "27015".to_string(),
                "secret".to_string(),
                "status".to_string()
            )
        );
    }
}
