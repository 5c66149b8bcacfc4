//! Minimal owned element tree standing in for the host page's DOM.
//!
//! Just enough structure for the renderer to append fragments and for tests to
//! inspect what was appended: tags, ordered attributes, ordered children, text
//! content, and HTML serialization.

const VOID_TAGS: &[&str] = &["img", "br", "hr", "input", "meta", "link"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attrs: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder-style attribute setter; duplicate names overwrite in place so
    /// attribute order stays stable.
    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Builder-style text child.
    pub fn text(mut self, content: &str) -> Self {
        self.append_text(content);
        self
    }

    pub fn set_attr(&mut self, name: &str, value: &str) {
        if let Some(existing) = self.attrs.iter_mut().find(|(n, _)| n == name) {
            existing.1 = value.to_string();
        } else {
            self.attrs.push((name.to_string(), value.to_string()));
        }
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .map(|classes| classes.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    pub fn append_child(&mut self, child: Element) {
        self.children.push(Node::Element(child));
    }

    pub fn append_text(&mut self, content: &str) {
        self.children.push(Node::Text(content.to_string()));
    }

    pub fn child_count(&self) -> usize {
        self.children
            .iter()
            .filter(|n| matches!(n, Node::Element(_)))
            .count()
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|n| match n {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        })
    }

    /// First descendant element with the given tag, depth-first.
    pub fn find(&self, tag: &str) -> Option<&Element> {
        for child in self.child_elements() {
            if child.tag == tag {
                return Some(child);
            }
            if let Some(found) = child.find(tag) {
                return Some(found);
            }
        }
        None
    }

    /// Concatenated text of this element and all descendants, in order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for node in &self.children {
            match node {
                Node::Text(t) => out.push_str(t),
                Node::Element(el) => out.push_str(&el.text_content()),
            }
        }
        out
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape_attr(value));
            out.push('"');
        }
        out.push('>');

        if VOID_TAGS.contains(&self.tag.as_str()) {
            return;
        }

        for node in &self.children {
            match node {
                Node::Text(t) => out.push_str(&escape_text(t)),
                Node::Element(el) => el.write_html(out),
            }
        }

        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

fn escape_text(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attrs_preserve_insertion_order() {
        let el = Element::new("a")
            .attr("class", "btn")
            .attr("target", "_blank")
            .attr("href", "https://example.com");

        assert_eq!(
            el.to_html(),
            r#"<a class="btn" target="_blank" href="https://example.com"></a>"#
        );
    }

    #[test]
    fn test_set_attr_overwrites_in_place() {
        let mut el = Element::new("img").attr("src", "a.png");
        el.set_attr("src", "b.png");
        assert_eq!(el.get_attr("src"), Some("b.png"));
        assert_eq!(el.to_html(), r#"<img src="b.png">"#);
    }

    #[test]
    fn test_void_element_has_no_closing_tag() {
        let el = Element::new("img").attr("src", "badge.png");
        assert_eq!(el.to_html(), r#"<img src="badge.png">"#);
    }

    #[test]
    fn test_child_count_ignores_text_nodes() {
        let mut el = Element::new("div");
        el.append_text("hello");
        el.append_child(Element::new("span"));
        assert_eq!(el.child_count(), 1);
    }

    #[test]
    fn test_text_content_walks_descendants() {
        let mut wrapper = Element::new("div");
        wrapper.append_child(Element::new("h3").text("Ruby "));
        wrapper.append_child(Element::new("span").text("Bootcamp"));
        assert_eq!(wrapper.text_content(), "Ruby Bootcamp");
    }

    #[test]
    fn test_find_is_depth_first() {
        let mut outer = Element::new("div");
        let mut inner = Element::new("div");
        inner.append_child(Element::new("a").attr("href", "first"));
        outer.append_child(inner);
        outer.append_child(Element::new("a").attr("href", "second"));

        assert_eq!(outer.find("a").unwrap().get_attr("href"), Some("first"));
        assert!(outer.find("table").is_none());
    }

    #[test]
    fn test_html_escaping() {
        let el = Element::new("h3")
            .attr("title", "a\"b")
            .text("<script>&</script>");
        assert_eq!(
            el.to_html(),
            r#"<h3 title="a&quot;b">&lt;script&gt;&amp;&lt;/script&gt;</h3>"#
        );
    }

    #[test]
    fn test_has_class() {
        let el = Element::new("a").attr("class", "btn btn-primary");
        assert!(el.has_class("btn"));
        assert!(el.has_class("btn-primary"));
        assert!(!el.has_class("btn-prim"));
    }
}
