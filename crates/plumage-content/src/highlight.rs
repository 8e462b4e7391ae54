use itertools::Itertools;
use regex_lite::Regex;

use crate::error::ContentError;
use crate::html::node::{HtmlElement, HtmlNode};
use crate::html::{parser, serializer};

/// Wraps matches of a search query in `<mark>` elements.
///
/// The query is split on whitespace; each token is matched literally
/// (regex metacharacters are escaped) and case-insensitively. Matching
/// happens inside text nodes only, so markup and attribute values are
/// never touched.
///
/// ```
/// use plumage_content::Highlighter;
///
/// let highlighter = Highlighter::new("world").unwrap();
/// assert_eq!(
///     highlighter.highlight("<p>Hello world</p>"),
///     "<p>Hello <mark>world</mark></p>"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Highlighter {
    regex: Option<Regex>,
}

impl Highlighter {
    pub fn new(query: &str) -> Result<Self, ContentError> {
        let pattern = query.split_whitespace().map(regex_lite::escape).join("|");
        if pattern.is_empty() {
            return Ok(Highlighter { regex: None });
        }

        let regex =
            Regex::new(&format!("(?i){pattern}")).map_err(|e| ContentError::InvalidHighlight {
                query: query.to_string(),
                message: e.to_string(),
            })?;

        Ok(Highlighter { regex: Some(regex) })
    }

    /// Returns the fragment with every match wrapped in a `<mark>` element.
    /// Input without a match is returned unchanged, byte for byte.
    pub fn highlight(&self, html: &str) -> String {
        let Some(regex) = &self.regex else {
            return html.to_string();
        };
        if html.trim().is_empty() {
            return html.to_string();
        }

        let mut nodes = parser::parse_fragment(html);
        if !mark_nodes(&mut nodes, regex) {
            return html.to_string();
        }
        serializer::serialize(&nodes)
    }
}

fn mark_nodes(nodes: &mut Vec<HtmlNode>, regex: &Regex) -> bool {
    let mut changed = false;
    let mut index = 0;

    while index < nodes.len() {
        let replacement = match &mut nodes[index] {
            HtmlNode::Text(text) if regex.is_match(text) => Some(split_text(text, regex)),
            HtmlNode::Element(element) => {
                changed |= mark_nodes(&mut element.children, regex);
                None
            }
            _ => None,
        };

        match replacement {
            Some(parts) => {
                let advance = parts.len();
                nodes.splice(index..=index, parts);
                index += advance;
                changed = true;
            }
            None => index += 1,
        }
    }

    changed
}

fn split_text(text: &str, regex: &Regex) -> Vec<HtmlNode> {
    let mut parts = Vec::new();
    let mut last = 0;

    for found in regex.find_iter(text) {
        if found.start() > last {
            parts.push(HtmlNode::Text(text[last..found.start()].to_string()));
        }
        parts.push(HtmlNode::Element(HtmlElement::new(
            "mark",
            Vec::new(),
            vec![HtmlNode::Text(found.as_str().to_string())],
        )));
        last = found.end();
    }
    if last < text.len() {
        parts.push(HtmlNode::Text(text[last..].to_string()));
    }

    parts
}
