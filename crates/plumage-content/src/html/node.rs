const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

#[derive(Debug, Clone, PartialEq)]
pub enum HtmlNode {
    Text(String),
    Element(HtmlElement),
    Comment(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct HtmlElement {
    pub tag_name: String,
    /// Attributes in document order.
    pub attributes: Vec<(String, String)>,
    pub children: Vec<HtmlNode>,
}

impl HtmlElement {
    pub fn new(tag_name: &str, attributes: Vec<(String, String)>, children: Vec<HtmlNode>) -> Self {
        HtmlElement {
            tag_name: tag_name.to_lowercase(),
            attributes,
            children,
        }
    }

    /// Void elements have no content and no closing tag.
    pub fn is_void(&self) -> bool {
        VOID_TAGS.contains(&self.tag_name.as_str())
    }
}

impl HtmlNode {
    /// Number of visible characters (Unicode scalar values) in this subtree.
    pub fn text_len(&self) -> usize {
        match self {
            HtmlNode::Text(text) => text.chars().count(),
            HtmlNode::Element(element) => element.children.iter().map(HtmlNode::text_len).sum(),
            HtmlNode::Comment(_) => 0,
        }
    }

    /// Concatenation of all text node contents in this subtree, in document order.
    pub fn text_content(&self) -> String {
        match self {
            HtmlNode::Text(text) => text.clone(),
            HtmlNode::Element(element) => {
                let mut text = String::new();
                for child in &element.children {
                    text.push_str(&child.text_content());
                }
                text
            }
            HtmlNode::Comment(_) => String::new(),
        }
    }
}
