use ego_tree::NodeRef;
use scraper::{Html, Node};

use super::node::{HtmlElement, HtmlNode};

fn map_node(node: NodeRef<'_, Node>) -> Option<HtmlNode> {
    match node.value() {
        Node::Text(text) => Some(HtmlNode::Text(text.text.to_string())),
        Node::Element(element) => {
            let tag_name = element.name().to_string();
            let attributes = element
                .attrs()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect();
            let children = node.children().filter_map(map_node).collect();

            Some(HtmlNode::Element(HtmlElement {
                tag_name,
                attributes,
                children,
            }))
        }
        Node::Comment(comment) => Some(HtmlNode::Comment(comment.comment.to_string())),
        // Doctypes and processing instructions carry no content.
        _ => None,
    }
}

/// Parses an HTML fragment permissively, browser-style, into the crate's
/// node model. Unknown and unclosed tags are tolerated; entity references
/// are decoded into the text nodes.
pub fn parse_fragment(html: &str) -> Vec<HtmlNode> {
    let fragment = Html::parse_fragment(html);
    fragment
        .root_element()
        .children()
        .filter_map(map_node)
        .collect()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::empty("", 0)]
    #[case::single_text("hello", 1)]
    #[case::single_element("<p>hello</p>", 1)]
    #[case::siblings("<p>a</p><p>b</p>", 2)]
    #[case::mixed("text<p>a</p>", 2)]
    fn test_parse_fragment_top_level_count(#[case] html: &str, #[case] expected: usize) {
        assert_eq!(parse_fragment(html).len(), expected);
    }

    #[test]
    fn test_parse_fragment_structure() {
        let nodes = parse_fragment("<p>Hello <b>world</b></p>");

        assert_eq!(
            nodes,
            vec![HtmlNode::Element(HtmlElement {
                tag_name: "p".to_string(),
                attributes: Vec::new(),
                children: vec![
                    HtmlNode::Text("Hello ".to_string()),
                    HtmlNode::Element(HtmlElement {
                        tag_name: "b".to_string(),
                        attributes: Vec::new(),
                        children: vec![HtmlNode::Text("world".to_string())],
                    }),
                ],
            })]
        );
    }

    #[test]
    fn test_parse_fragment_preserves_attribute_order() {
        let nodes = parse_fragment(r#"<a href="x" title="y" rel="z">link</a>"#);

        let HtmlNode::Element(element) = &nodes[0] else {
            panic!("expected an element");
        };
        assert_eq!(
            element.attributes,
            vec![
                ("href".to_string(), "x".to_string()),
                ("title".to_string(), "y".to_string()),
                ("rel".to_string(), "z".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_fragment_decodes_entities() {
        let nodes = parse_fragment("<p>A &amp; B</p>");
        assert_eq!(nodes[0].text_content(), "A & B");
    }

    #[test]
    fn test_parse_fragment_closes_unclosed_tags() {
        let nodes = parse_fragment("<p>Hello <b>bold");

        let HtmlNode::Element(p) = &nodes[0] else {
            panic!("expected an element");
        };
        assert_eq!(p.tag_name, "p");
        assert_eq!(p.children.len(), 2);
        assert_eq!(nodes[0].text_content(), "Hello bold");
    }

    #[test]
    fn test_parse_fragment_keeps_comments() {
        let nodes = parse_fragment("<p><!-- note -->ab</p>");

        let HtmlNode::Element(p) = &nodes[0] else {
            panic!("expected an element");
        };
        assert_eq!(p.children[0], HtmlNode::Comment(" note ".to_string()));
    }
}
