//! Plot lines and plot points

use crate::domain::NodeId;
use crate::fragment::XmlElement;

use super::element::{
    read_ids, read_paragraphs, read_text, write_ids, write_paragraphs, write_text, Element,
};

/// A plot line (`ARC`); its plot points are outline children
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlotLine {
    pub title: String,
    pub short_name: String,
    pub desc: String,
    pub notes: String,
    /// Sections assigned to this plot line
    pub sections: Vec<NodeId>,
}

impl Element for PlotLine {
    fn to_xml(&self, node: &mut XmlElement) {
        write_text(node, "Title", &self.title);
        write_text(node, "ShortName", &self.short_name);
        write_paragraphs(node, "Desc", &self.desc);
        write_paragraphs(node, "Notes", &self.notes);
        write_ids(node, "Sections", &self.sections);
    }

    fn from_xml(&mut self, node: &XmlElement) {
        *self = Self {
            title: read_text(node, "Title"),
            short_name: read_text(node, "ShortName"),
            desc: read_paragraphs(node, "Desc"),
            notes: read_paragraphs(node, "Notes"),
            sections: read_ids(node, "Sections"),
        };
    }
}

/// A plot point (`POINT`) on a plot line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlotPoint {
    pub title: String,
    pub desc: String,
    pub notes: String,
    /// Section this plot point happens in
    pub section: Option<NodeId>,
}

impl Element for PlotPoint {
    fn to_xml(&self, node: &mut XmlElement) {
        write_text(node, "Title", &self.title);
        write_paragraphs(node, "Desc", &self.desc);
        write_paragraphs(node, "Notes", &self.notes);
        if let Some(section) = &self.section {
            node.push(XmlElement::new("Section").with_attr("id", section.as_str()));
        }
    }

    fn from_xml(&mut self, node: &XmlElement) {
        *self = Self {
            title: read_text(node, "Title"),
            desc: read_paragraphs(node, "Desc"),
            notes: read_paragraphs(node, "Notes"),
            section: node
                .find("Section")
                .and_then(|e| e.attr("id"))
                .and_then(|id| NodeId::parse_element(id).ok()),
        };
    }
}
