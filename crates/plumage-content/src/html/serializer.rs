use super::node::{HtmlElement, HtmlNode};

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attribute(value: &str) -> String {
    value.replace('&', "&amp;").replace('"', "&quot;")
}

fn write_element(out: &mut String, element: &HtmlElement) {
    out.push('<');
    out.push_str(&element.tag_name);
    for (name, value) in &element.attributes {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape_attribute(value));
        out.push('"');
    }
    out.push('>');

    if element.is_void() {
        return;
    }

    for child in &element.children {
        write_node(out, child);
    }
    out.push_str("</");
    out.push_str(&element.tag_name);
    out.push('>');
}

fn write_node(out: &mut String, node: &HtmlNode) {
    match node {
        HtmlNode::Text(text) => out.push_str(&escape_text(text)),
        HtmlNode::Element(element) => write_element(out, element),
        HtmlNode::Comment(comment) => {
            out.push_str("<!--");
            out.push_str(comment);
            out.push_str("-->");
        }
    }
}

/// Serializes the node model back to an HTML string. Tag names come out
/// lowercased and attribute values double-quoted; text and attribute
/// values are entity-escaped.
pub fn serialize(nodes: &[HtmlNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        write_node(&mut out, node);
    }
    out
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::super::parser::parse_fragment;
    use super::*;

    #[rstest]
    #[case::text_only("hello", "hello")]
    #[case::element("<p>hello</p>", "<p>hello</p>")]
    #[case::nested("<p>Hello <b>world</b></p>", "<p>Hello <b>world</b></p>")]
    #[case::attributes(
        r#"<a href="x" rel="nofollow">link</a>"#,
        r#"<a href="x" rel="nofollow">link</a>"#
    )]
    #[case::comment("<p><!-- note -->ab</p>", "<p><!-- note -->ab</p>")]
    #[case::void_element(r#"<p><img src="a.png">text</p>"#, r#"<p><img src="a.png">text</p>"#)]
    #[case::void_br("<p>a<br>b</p>", "<p>a<br>b</p>")]
    fn test_parse_serialize_round_trip(#[case] html: &str, #[case] expected: &str) {
        assert_eq!(serialize(&parse_fragment(html)), expected);
    }

    #[test]
    fn test_serialize_escapes_text() {
        let nodes = vec![HtmlNode::Text("a < b & c > d".to_string())];
        assert_eq!(serialize(&nodes), "a &lt; b &amp; c &gt; d");
    }

    #[test]
    fn test_serialize_escapes_attribute_values() {
        let nodes = vec![HtmlNode::Element(HtmlElement::new(
            "a",
            vec![("title".to_string(), "say \"hi\" & bye".to_string())],
            vec![HtmlNode::Text("x".to_string())],
        ))];
        assert_eq!(
            serialize(&nodes),
            r#"<a title="say &quot;hi&quot; &amp; bye">x</a>"#
        );
    }

    #[test]
    fn test_serialize_entity_round_trip() {
        let nodes = parse_fragment("<p>A &amp; B</p>");
        assert_eq!(serialize(&nodes), "<p>A &amp; B</p>");
    }
}
