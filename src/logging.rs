//! Log-safe rendering of credentials.
//!
//! Service connections accept API keys and AWS secrets. They are never stored,
//! and only a short masked prefix may reach the log output.

use std::fmt;

/// Masked credential for log fields: first 7 characters followed by `***`.
#[derive(Clone, Debug)]
pub struct SensitiveValue<'a> {
    inner: &'a str,
}

impl<'a> SensitiveValue<'a> {
    /// # Example
    /// ```
    /// use ai_cost_advisor::logging::SensitiveValue;
    ///
    /// let masked = SensitiveValue::new("sk-proj-abcdef123456");
    /// assert_eq!(masked.to_string(), "sk-proj***");
    /// ```
    pub fn new(value: &'a str) -> Self {
        Self { inner: value }
    }
}

impl fmt::Display for SensitiveValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const VISIBLE: usize = 7;
        // Short values would leak most of themselves
        match self.inner.char_indices().nth(VISIBLE) {
            Some((cut, _)) if self.inner.chars().count() > VISIBLE + 4 => {
                write!(f, "{}***", &self.inner[..cut])
            }
            _ => write!(f, "***"),
        }
    }
}

pub fn mask_secret(value: &str) -> String {
    SensitiveValue::new(value).to_string()
}
