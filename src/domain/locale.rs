//! Locales and validated multilingual text.
//!
//! Approved messages are displayed in three fixed locales simultaneously; a
//! locale-switch UI is deliberately absent. [`LocalizedText`] enforces the
//! invariant that all three variants are present and non-empty. A value with
//! a missing or blank locale cannot be constructed, so nothing downstream ever
//! renders a blank translation.

use crate::domain::error::TempleError;
use serde::{Deserialize, Serialize};

/// The fixed set of display locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    /// English.
    En,
    /// Simplified Chinese.
    Zh,
    /// Thai.
    Th,
}

impl Locale {
    /// All locales in display order.
    pub const ALL: [Self; 3] = [Self::En, Self::Zh, Self::Th];

    /// The label shown above each variant, in the locale's own script.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Zh => "中文",
            Self::Th => "ไทย",
        }
    }

    /// The BCP 47-style locale code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Zh => "zh",
            Self::Th => "th",
        }
    }
}

/// Text carried in all three display locales.
///
/// Construction validates that every variant contains at least one
/// non-whitespace character. Deserialization routes through the same
/// validation, so seed data and any future wire format obey the invariant too.
///
/// # Examples
///
/// ```
/// use white_temple::domain::{Locale, LocalizedText};
///
/// let text = LocalizedText::new("hello", "你好", "สวัสดี").unwrap();
/// assert_eq!(text.get(Locale::Zh), "你好");
///
/// assert!(LocalizedText::new("hello", "  ", "สวัสดี").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawLocalizedText")]
pub struct LocalizedText {
    en: String,
    zh: String,
    th: String,
}

impl LocalizedText {
    /// Creates localized text, validating all three variants.
    ///
    /// # Errors
    ///
    /// Returns [`TempleError::InvalidMessage`] naming the offending locale if
    /// any variant is empty or whitespace-only.
    pub fn new(
        en: impl Into<String>,
        zh: impl Into<String>,
        th: impl Into<String>,
    ) -> crate::domain::Result<Self> {
        let text = Self {
            en: en.into(),
            zh: zh.into(),
            th: th.into(),
        };

        for locale in Locale::ALL {
            if text.get(locale).trim().is_empty() {
                return Err(TempleError::InvalidMessage(format!(
                    "missing {} variant",
                    locale.code()
                )));
            }
        }

        Ok(text)
    }

    /// Returns the variant for the given locale.
    #[must_use]
    pub fn get(&self, locale: Locale) -> &str {
        match locale {
            Locale::En => &self.en,
            Locale::Zh => &self.zh,
            Locale::Th => &self.th,
        }
    }
}

/// Unvalidated mirror used as the serde entry point for [`LocalizedText`].
#[derive(Deserialize)]
struct RawLocalizedText {
    en: String,
    zh: String,
    th: String,
}

impl TryFrom<RawLocalizedText> for LocalizedText {
    type Error = TempleError;

    fn try_from(raw: RawLocalizedText) -> crate::domain::Result<Self> {
        Self::new(raw.en, raw.zh, raw.th)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_text_in_all_three_locales() {
        let text = LocalizedText::new("light", "光", "แสง").unwrap();
        assert_eq!(text.get(Locale::En), "light");
        assert_eq!(text.get(Locale::Zh), "光");
        assert_eq!(text.get(Locale::Th), "แสง");
    }

    #[test]
    fn rejects_empty_or_whitespace_variants() {
        assert!(LocalizedText::new("", "光", "แสง").is_err());
        assert!(LocalizedText::new("light", "   ", "แสง").is_err());
        assert!(LocalizedText::new("light", "光", "\n\t").is_err());
    }

    #[test]
    fn deserialization_enforces_the_invariant() {
        let valid: Result<LocalizedText, _> =
            serde_json::from_str(r#"{"en":"a","zh":"b","th":"c"}"#);
        assert!(valid.is_ok());

        let blank: Result<LocalizedText, _> =
            serde_json::from_str(r#"{"en":"a","zh":"","th":"c"}"#);
        assert!(blank.is_err());
    }
}
