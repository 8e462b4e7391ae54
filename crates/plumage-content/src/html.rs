//! Crate-owned HTML fragment model.
//!
//! Parsing and serialization are isolated here so the truncation and
//! highlighting algorithms operate on plain [`HtmlNode`] trees and can be
//! tested against hand-built ones.

pub mod node;
pub mod parser;
pub mod serializer;

use itertools::Itertools;

pub use node::{HtmlElement, HtmlNode};

/// Returns the visible text of an HTML fragment: the concatenation, in
/// document order, of all text node contents. Tags, attributes, and
/// comments are excluded; entity references are decoded.
///
/// ```
/// use plumage_content::visible_text;
///
/// assert_eq!(visible_text("<p>Hello <b>world</b></p>"), "Hello world");
/// assert_eq!(visible_text("<p>A &amp; B</p>"), "A & B");
/// ```
pub fn visible_text(html: &str) -> String {
    parser::parse_fragment(html)
        .iter()
        .map(HtmlNode::text_content)
        .join("")
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::empty("", "")]
    #[case::text_only("hello", "hello")]
    #[case::nested("<p>Hello <b>world</b>, bye</p>", "Hello world, bye")]
    #[case::siblings("<p>one</p><p>two</p>", "onetwo")]
    #[case::comment_excluded("<p><!-- note -->ab</p>", "ab")]
    #[case::entity("<p>A &amp; B</p>", "A & B")]
    #[case::inner_whitespace("<p>  a  b  </p>", "  a  b  ")]
    fn test_visible_text(#[case] html: &str, #[case] expected: &str) {
        assert_eq!(visible_text(html), expected);
    }
}
