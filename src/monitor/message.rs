//! User-facing notification texts.

use std::fmt::Display;

/// Message announcing the baseline address at startup.
#[must_use]
pub fn baseline(address: &str) -> String {
    format!("Your External IP address is: {address}")
}

/// Message announcing an address change.
#[must_use]
pub fn changed(old: &str, new: &str) -> String {
    format!("Your External IP address CHANGED\nOLD: {old}\nNEW: {new}")
}

/// Message reporting a failed lookup, with the error text quoted.
#[must_use]
pub fn failure(error: &impl Display) -> String {
    format!("error encountered: {:?}", error.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn baseline_contains_exact_address() {
        assert_eq!(
            baseline("203.0.113.5"),
            "Your External IP address is: 203.0.113.5"
        );
    }

    #[test]
    fn changed_lists_old_then_new() {
        let message = changed("203.0.113.5", "203.0.113.9");

        assert_eq!(
            message,
            "Your External IP address CHANGED\nOLD: 203.0.113.5\nNEW: 203.0.113.9"
        );
        assert!(message.find("203.0.113.5") < message.find("203.0.113.9"));
    }

    #[test]
    fn failure_quotes_error_text() {
        let message = failure(&"Request timed out");
        assert_eq!(message, r#"error encountered: "Request timed out""#);
    }

    #[test]
    fn failure_escapes_embedded_quotes() {
        let message = failure(&r#"bad "gateway""#);
        assert_eq!(message, r#"error encountered: "bad \"gateway\"""#);
    }
}
