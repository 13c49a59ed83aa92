//! BCP-47 language tag (e.g. "vi-VN").
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Language(pub &'static str);

impl Language {
    /// Create a new language tag.
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    /// Get the underlying language code.
    pub const fn code(&self) -> &'static str {
        self.0
    }

    /// Vietnamese
    pub const VIETNAMESE: Self = Self("vi-VN");

    /// English (US)
    pub const ENGLISH_US: Self = Self("en-US");
}
