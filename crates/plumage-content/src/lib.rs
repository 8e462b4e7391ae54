//! # plumage-content: article content processing for plumage
//!
//! This crate implements the content layer of the plumage feed reader:
//! bounded HTML truncation, search-term highlighting, and the display
//! settings that drive both. Its output is handed to a downstream
//! sanitizer/renderer; it enforces no tag allow-list of its own.
//!
//! ## Quick Start
//!
//! ### Truncating article bodies
//!
//! ```rust
//! use plumage_content::truncate_html;
//!
//! let html = "<p>Hello <b>world</b>, this is a test</p>";
//! assert_eq!(truncate_html(html, 9), "<p>Hello <b>wor...</b></p>");
//!
//! // Content that already fits comes back untouched.
//! assert_eq!(truncate_html(html, 100), html);
//! ```
//!
//! ### Highlighting search matches
//!
//! ```rust
//! use plumage_content::Highlighter;
//!
//! let highlighter = Highlighter::new("rust feeds").unwrap();
//! assert_eq!(
//!     highlighter.highlight("<p>Rust news feeds</p>"),
//!     "<p><mark>Rust</mark> news <mark>feeds</mark></p>"
//! );
//! ```
//!
//! ### Rendering with user settings
//!
//! ```rust
//! use plumage_content::{ContentOptions, DisplaySettings, render_content};
//!
//! let settings = DisplaySettings {
//!     truncate_articles: true,
//!     truncation_length: 100,
//! };
//! settings.validate().unwrap();
//!
//! let options = ContentOptions::from(&settings);
//! let html = render_content("<p>short entry</p>", &options).unwrap();
//! assert_eq!(html, "<p>short entry</p>");
//! ```
mod content;
mod error;
mod highlight;
pub mod html;
mod settings;
mod truncate;

pub use content::{ContentOptions, render_content};
pub use error::ContentError;
pub use highlight::Highlighter;
pub use html::visible_text;
pub use settings::{
    DisplaySettings, TRUNCATE_ARTICLES_DEFAULT, TRUNCATE_ARTICLES_MAX, TRUNCATE_ARTICLES_MIN,
};
pub use truncate::{DEFAULT_TRUNCATE_LENGTH, truncate_html};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_then_highlight_pipeline() {
        let options = ContentOptions {
            highlight: Some("aaaa".to_string()),
            truncate: true,
            truncation_length: 4,
        };
        let html = render_content("<div><p>AAAA</p><p>BBBB</p></div>", &options).unwrap();
        assert_eq!(html, "<div><p><mark>AAAA</mark></p></div>");
    }

    #[test]
    fn test_settings_default_matches_truncate_default() {
        assert_eq!(
            TRUNCATE_ARTICLES_DEFAULT as usize,
            DEFAULT_TRUNCATE_LENGTH
        );
    }
}
