use crate::html::node::HtmlNode;
use crate::html::{parser, serializer};

/// Budget applied when the caller does not specify one.
pub const DEFAULT_TRUNCATE_LENGTH: usize = 1000;

const ELLIPSIS: &str = "...";

/// Outcome of visiting a node during the truncation walk.
enum Walk {
    /// Budget not reached yet, keep going.
    Continue,
    /// The cut happened in or under this node: keep it, drop everything after.
    Truncated,
    /// Budget was already spent before this node: drop it and everything after.
    Exhausted,
}

/// Truncates an HTML fragment to at most `max_chars` visible characters,
/// preserving tag structure and appending `"..."` at the cut point.
///
/// Only text node contents count toward the budget; tags, attributes, and
/// comments are free. Input whose visible text already fits the budget is
/// returned unchanged, byte for byte. A text node that exactly completes
/// the budget is kept whole without an ellipsis; the next node in document
/// order is the first one removed.
///
/// `max_chars` counts Unicode scalar values, so a cut never splits a code
/// point. Budgets of zero are not validated here; callers enforce
/// business-level bounds (see `DisplaySettings::validate`).
///
/// ```
/// use plumage_content::truncate_html;
///
/// let html = "<p>Hello <b>world</b>, this is a test</p>";
/// assert_eq!(truncate_html(html, 9), "<p>Hello <b>wor...</b></p>");
/// assert_eq!(truncate_html(html, 100), html);
/// ```
pub fn truncate_html(html: &str, max_chars: usize) -> String {
    if html.trim().is_empty() {
        return html.to_string();
    }

    let mut nodes = parser::parse_fragment(html);

    let text_len: usize = nodes.iter().map(HtmlNode::text_len).sum();
    if text_len <= max_chars {
        return html.to_string();
    }

    let mut char_count = 0;
    truncate_nodes(&mut nodes, &mut char_count, max_chars);
    serializer::serialize(&nodes)
}

fn truncate_nodes(nodes: &mut Vec<HtmlNode>, char_count: &mut usize, max_chars: usize) -> Walk {
    for index in 0..nodes.len() {
        match truncate_node(&mut nodes[index], char_count, max_chars) {
            Walk::Continue => {}
            Walk::Truncated => {
                nodes.truncate(index + 1);
                return Walk::Truncated;
            }
            Walk::Exhausted => {
                nodes.truncate(index);
                return Walk::Truncated;
            }
        }
    }
    Walk::Continue
}

fn truncate_node(node: &mut HtmlNode, char_count: &mut usize, max_chars: usize) -> Walk {
    if *char_count >= max_chars {
        return Walk::Exhausted;
    }

    match node {
        HtmlNode::Text(text) => {
            let len = text.chars().count();
            if *char_count + len > max_chars {
                let keep = max_chars - *char_count;
                let boundary = text
                    .char_indices()
                    .nth(keep)
                    .map(|(offset, _)| offset)
                    .unwrap_or(text.len());
                text.truncate(boundary);
                text.push_str(ELLIPSIS);
                *char_count = max_chars;
                Walk::Truncated
            } else {
                *char_count += len;
                Walk::Continue
            }
        }
        HtmlNode::Element(element) => truncate_nodes(&mut element.children, char_count, max_chars),
        HtmlNode::Comment(_) => Walk::Continue,
    }
}
