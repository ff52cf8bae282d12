//! Sensitive data marker for automatic redaction
//!
//! Command lines carry personal data (names, phone numbers, addresses), so
//! raw input and contact values are wrapped in `Sensitive<T>` before they
//! reach a log field.

use std::fmt;

/// Wrapper for sensitive data that redacts itself in Debug and Display
///
/// # Example
///
/// ```
/// use rolo_core_types::Sensitive;
///
/// let line = Sensitive::new("add /name:Alice /phone:91234567");
/// assert_eq!(format!("{:?}", line), "***REDACTED***");
/// assert_eq!(format!("{}", line), "***REDACTED***");
///
/// assert_eq!(line.expose(), &"add /name:Alice /phone:91234567");
/// ```
pub struct Sensitive<T>(T);

impl<T> Sensitive<T> {
    /// Wrap a sensitive value
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Expose the underlying value
    pub fn expose(&self) -> &T {
        &self.0
    }

    /// Consume the wrapper and return the inner value
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> fmt::Debug for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "***REDACTED***")
    }
}

impl<T> fmt::Display for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "***REDACTED***")
    }
}

impl<T: Clone> Clone for Sensitive<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sensitive_debug_redaction() {
        let phone = Sensitive::new("91234567");
        let debug_str = format!("{:?}", phone);
        assert_eq!(debug_str, "***REDACTED***");
        assert!(!debug_str.contains("9123"));
    }

    #[test]
    fn test_sensitive_display_redaction() {
        let line = Sensitive::new("field 1 /company:Acme");
        let display_str = format!("{}", line);
        assert_eq!(display_str, "***REDACTED***");
        assert!(!display_str.contains("Acme"));
    }

    #[test]
    fn test_sensitive_into_inner() {
        let secret = Sensitive::new(String::from("alice@example.com"));
        assert_eq!(secret.into_inner(), "alice@example.com");
    }

    #[test]
    fn test_sensitive_inside_struct_debug() {
        #[derive(Debug)]
        #[allow(dead_code)]
        struct Submitted {
            imperative: String,
            raw: Sensitive<String>,
        }

        let submitted = Submitted {
            imperative: "add".to_string(),
            raw: Sensitive::new("add /name:Alice".to_string()),
        };

        let debug_str = format!("{:?}", submitted);
        assert!(debug_str.contains("add"));
        assert!(debug_str.contains("***REDACTED***"));
        assert!(!debug_str.contains("Alice"));
    }
}
