//! In-memory XML element tree

/// A child of an [`XmlElement`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlNode {
    Element(XmlElement),
    Text(String),
}

/// An XML element with ordered attributes and mixed content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlElement {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<XmlNode>,
}

impl XmlElement {
    /// Creates an empty element
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Gets an attribute value
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Sets an attribute, replacing an existing value in place
    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.attributes.push((key, value)),
        }
    }

    /// Removes an attribute, returning its value
    pub fn remove_attr(&mut self, key: &str) -> Option<String> {
        let index = self.attributes.iter().position(|(k, _)| k == key)?;
        Some(self.attributes.remove(index).1)
    }

    /// Iterates over attributes in document order
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn children(&self) -> &[XmlNode] {
        &self.children
    }

    /// Iterates over child elements, skipping text
    pub fn elements(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter().filter_map(|c| match c {
            XmlNode::Element(e) => Some(e),
            XmlNode::Text(_) => None,
        })
    }

    /// First child element with the given name
    pub fn find(&self, name: &str) -> Option<&XmlElement> {
        self.elements().find(|e| e.name == name)
    }

    /// All child elements with the given name, in document order
    pub fn find_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlElement> + 'a {
        self.elements().filter(move |e| e.name == name)
    }

    /// Appends a child element
    pub fn push(&mut self, element: XmlElement) {
        self.children.push(XmlNode::Element(element));
    }

    /// Appends text, merging with a trailing text node
    pub fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(XmlNode::Text(last)) = self.children.last_mut() {
            last.push_str(text);
        } else {
            self.children.push(XmlNode::Text(text.to_string()));
        }
    }

    /// Builder form of [`set_attr`](Self::set_attr)
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(key, value);
        self
    }

    /// Builder form of [`set_text`](Self::set_text)
    pub fn with_text(mut self, text: &str) -> Self {
        self.set_text(text);
        self
    }

    /// Builder form of [`push`](Self::push)
    pub fn with_child(mut self, element: XmlElement) -> Self {
        self.push(element);
        self
    }

    /// Removes every direct child element with the given name
    ///
    /// Returns the number of removed elements.
    pub fn remove_all(&mut self, name: &str) -> usize {
        let before = self.children.len();
        self.children
            .retain(|c| !matches!(c, XmlNode::Element(e) if e.name == name));
        before - self.children.len()
    }

    /// Concatenated text of this element and all descendants
    pub fn text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                XmlNode::Text(t) => out.push_str(t),
                XmlNode::Element(e) => e.collect_text(out),
            }
        }
    }

    /// Text of the first child element with the given name
    pub fn child_text(&self, name: &str) -> Option<String> {
        self.find(name).map(XmlElement::text)
    }

    /// Replaces all content with a single text node
    pub fn set_text(&mut self, text: &str) {
        self.children.clear();
        self.push_text(text);
    }

    /// Returns true if the element has neither attributes nor children
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty() && self.children.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_attr_replaces_in_place() {
        let mut e = XmlElement::new("SECTION");
        e.set_attr("type", "0");
        e.set_attr("status", "2");
        e.set_attr("type", "2");

        let attrs: Vec<_> = e.attributes().collect();
        assert_eq!(attrs, vec![("type", "2"), ("status", "2")]);
        assert_eq!(e.remove_attr("type").as_deref(), Some("2"));
        assert_eq!(e.attr("type"), None);
    }

    #[test]
    fn find_and_remove_children() {
        let mut e = XmlElement::new("SECTION");
        e.push(XmlElement::new("Title").with_text("Opening"));
        e.push(XmlElement::new("Characters").with_attr("ids", "cr1"));
        e.push(XmlElement::new("Characters").with_attr("ids", "cr2"));

        assert_eq!(e.find_all("Characters").count(), 2);
        assert_eq!(e.child_text("Title").as_deref(), Some("Opening"));
        assert_eq!(e.remove_all("Characters"), 2);
        assert_eq!(e.elements().count(), 1);
        assert_eq!(e.remove_all("Characters"), 0);
    }

    #[test]
    fn push_text_merges_adjacent_text() {
        let mut e = XmlElement::new("p");
        e.push_text("a ");
        e.push_text("&");
        e.push_text(" b");
        assert_eq!(e.children().len(), 1);
        assert_eq!(e.text(), "a & b");
    }

    #[test]
    fn builders_nest() {
        let notes = XmlElement::new("PlotlineNotes").with_child(
            XmlElement::new("Plotline")
                .with_attr("id", "ac1")
                .with_child(XmlElement::new("p").with_text("Turns")),
        );

        let plotline = notes.find("Plotline").unwrap();
        assert_eq!(plotline.attr("id"), Some("ac1"));
        assert_eq!(plotline.child_text("p").as_deref(), Some("Turns"));
        assert_eq!(notes.text(), "Turns");
    }

    #[test]
    fn text_includes_descendants() {
        let mut p = XmlElement::new("p");
        p.push_text("one ");
        p.push(XmlElement::new("em").with_text("two"));
        p.push_text(" three");
        assert_eq!(p.text(), "one two three");
    }
}
