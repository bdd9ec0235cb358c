//! Element serialization contract and shared XML field helpers
//!
//! Multi-paragraph text is stored with `\n` between paragraphs and written
//! as one `<p>` per paragraph. Id lists are written as a space separated
//! `ids` attribute on an empty tag.

use std::fmt;

use crate::domain::NodeId;
use crate::fragment::XmlElement;

/// A model element that reads and writes its own XML form
///
/// `to_xml` fills an element whose tag was chosen by the caller; it never
/// writes the node id. `from_xml` assigns every field, so loading into a
/// fresh shell and loading into a used element give the same result.
pub trait Element: fmt::Debug {
    fn to_xml(&self, node: &mut XmlElement);
    fn from_xml(&mut self, node: &XmlElement);
}

/// Writes `<tag>text</tag>` unless the text is empty
pub fn write_text(node: &mut XmlElement, tag: &str, text: &str) {
    if !text.is_empty() {
        node.push(XmlElement::new(tag).with_text(text));
    }
}

/// Reads the text of a child tag, empty if absent
pub fn read_text(node: &XmlElement, tag: &str) -> String {
    node.child_text(tag).unwrap_or_default()
}

/// Writes `<tag><p>..</p>..</tag>` unless the text is empty
pub fn write_paragraphs(node: &mut XmlElement, tag: &str, text: &str) {
    if text.is_empty() {
        return;
    }
    let mut container = XmlElement::new(tag);
    for line in text.split('\n') {
        container.push(XmlElement::new("p").with_text(line));
    }
    node.push(container);
}

/// Reads paragraph text; a tag without `<p>` children is read as one paragraph
pub fn read_paragraphs(node: &XmlElement, tag: &str) -> String {
    let Some(container) = node.find(tag) else {
        return String::new();
    };

    if container.find("p").is_none() {
        return container.text();
    }

    container
        .find_all("p")
        .map(XmlElement::text)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Writes `<tag ids="a b c"/>` unless the list is empty
pub fn write_ids(node: &mut XmlElement, tag: &str, ids: &[NodeId]) {
    if ids.is_empty() {
        return;
    }
    let joined = ids.iter().map(NodeId::as_str).collect::<Vec<_>>().join(" ");
    node.push(XmlElement::new(tag).with_attr("ids", joined));
}

/// Reads an id list, skipping anything that is not a valid element id
pub fn read_ids(node: &XmlElement, tag: &str) -> Vec<NodeId> {
    node.find(tag)
        .and_then(|e| e.attr("ids"))
        .map(|ids| {
            ids.split_whitespace()
                .filter_map(|s| NodeId::parse_element(s).ok())
                .collect()
        })
        .unwrap_or_default()
}

/// Writes `key="1"` for set flags; cleared flags are omitted
pub fn write_flag(node: &mut XmlElement, key: &str, value: bool) {
    if value {
        node.set_attr(key, "1");
    }
}

pub fn read_flag(node: &XmlElement, key: &str) -> bool {
    node.attr(key).map(|v| v.trim() == "1").unwrap_or(false)
}

/// Reads an integer attribute, falling back on absent or invalid values
pub fn read_int(node: &XmlElement, key: &str, default: i64) -> i64 {
    node.attr(key)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

/// Writes `<Tags>a;b</Tags>` unless there are no tags
pub fn write_tags(node: &mut XmlElement, tags: &[String]) {
    if !tags.is_empty() {
        node.push(XmlElement::new("Tags").with_text(&tags.join(";")));
    }
}

pub fn read_tags(node: &XmlElement) -> Vec<String> {
    read_text(node, "Tags")
        .split(';')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
