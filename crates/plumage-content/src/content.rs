use crate::error::ContentError;
use crate::highlight::Highlighter;
use crate::settings::DisplaySettings;
use crate::truncate::{DEFAULT_TRUNCATE_LENGTH, truncate_html};

/// Per-render options for [`render_content`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentOptions {
    /// Search query whose matches are wrapped in `<mark>` elements.
    pub highlight: Option<String>,
    /// Apply truncation before rendering.
    pub truncate: bool,
    /// Visible-character budget used when `truncate` is set.
    pub truncation_length: u32,
}

impl Default for ContentOptions {
    fn default() -> Self {
        ContentOptions {
            highlight: None,
            truncate: false,
            truncation_length: DEFAULT_TRUNCATE_LENGTH as u32,
        }
    }
}

impl From<&DisplaySettings> for ContentOptions {
    fn from(settings: &DisplaySettings) -> Self {
        ContentOptions {
            highlight: None,
            truncate: settings.truncate_articles,
            truncation_length: settings.truncation_length,
        }
    }
}

/// Produces the HTML handed to the downstream sanitizer/renderer:
/// truncation first (when enabled), then highlighting of whatever
/// remains.
///
/// ```
/// use plumage_content::{ContentOptions, render_content};
///
/// let options = ContentOptions {
///     highlight: Some("world".to_string()),
///     ..Default::default()
/// };
/// let html = render_content("<p>Hello world</p>", &options).unwrap();
/// assert_eq!(html, "<p>Hello <mark>world</mark></p>");
/// ```
pub fn render_content(html: &str, options: &ContentOptions) -> Result<String, ContentError> {
    let content = if options.truncate {
        truncate_html(html, options.truncation_length as usize)
    } else {
        html.to_string()
    };

    match &options.highlight {
        Some(query) => {
            let highlighter = Highlighter::new(query)?;
            Ok(highlighter.highlight(&content))
        }
        None => Ok(content),
    }
}
