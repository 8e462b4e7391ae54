use crate::error::ContentError;

pub const TRUNCATE_ARTICLES_MIN: u32 = 100;
pub const TRUNCATE_ARTICLES_MAX: u32 = 10_000;
pub const TRUNCATE_ARTICLES_DEFAULT: u32 = 1_000;

/// The content-affecting slice of the reader's display settings.
///
/// Field names serialize in camelCase to match the client settings
/// document (requires the `json` feature).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "json",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct DisplaySettings {
    /// Truncate article bodies when rendering entry lists.
    pub truncate_articles: bool,
    /// Visible-character budget applied when truncation is enabled.
    pub truncation_length: u32,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        DisplaySettings {
            truncate_articles: false,
            truncation_length: TRUNCATE_ARTICLES_DEFAULT,
        }
    }
}

impl DisplaySettings {
    /// Rejects truncation lengths outside the allowed range. The truncation
    /// routine itself applies whatever budget it is given; this is the
    /// business-level bound callers are expected to enforce first.
    pub fn validate(&self) -> Result<(), ContentError> {
        if !(TRUNCATE_ARTICLES_MIN..=TRUNCATE_ARTICLES_MAX).contains(&self.truncation_length) {
            return Err(ContentError::TruncationLengthOutOfRange {
                value: self.truncation_length,
                min: TRUNCATE_ARTICLES_MIN,
                max: TRUNCATE_ARTICLES_MAX,
            });
        }
        Ok(())
    }
}
