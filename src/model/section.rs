//! Section element, including the stage sub-kind

use std::collections::BTreeMap;

use crate::domain::{NodeId, MAX_PLAIN_SECTION_TYPE, SECTION_TYPE_ATTR};
use crate::fragment::XmlElement;

use super::element::{
    read_flag, read_ids, read_int, read_paragraphs, read_tags, read_text, write_flag, write_ids,
    write_paragraphs, write_tags, write_text, Element,
};

/// Section type given to new stages
pub const STAGE_TYPE: i64 = 2;

/// Default completion status (outline)
pub const DEFAULT_STATUS: i64 = 1;

/// A section, or a stage when `section_type` is above 1
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub desc: String,
    pub notes: String,
    pub tags: Vec<String>,
    /// 0 = normal, 1 = unused, 2 = stage (level 1), 3 = stage (level 2)
    pub section_type: i64,
    /// 0 = not a scene, 1 = action, 2 = reaction, 3 = other
    pub scene: i64,
    pub status: i64,
    pub append_to_prev: bool,
    pub goal: String,
    pub conflict: String,
    pub outcome: String,
    pub characters: Vec<NodeId>,
    pub locations: Vec<NodeId>,
    pub items: Vec<NodeId>,
    /// Notes keyed by plot line id
    pub plotline_notes: BTreeMap<NodeId, String>,
    pub content: String,
}

impl Default for Section {
    fn default() -> Self {
        Self {
            title: String::new(),
            desc: String::new(),
            notes: String::new(),
            tags: Vec::new(),
            section_type: 0,
            scene: 0,
            status: DEFAULT_STATUS,
            append_to_prev: false,
            goal: String::new(),
            conflict: String::new(),
            outcome: String::new(),
            characters: Vec::new(),
            locations: Vec::new(),
            items: Vec::new(),
            plotline_notes: BTreeMap::new(),
            content: String::new(),
        }
    }
}

impl Section {
    /// Creates an empty stage
    pub fn stage() -> Self {
        Self {
            section_type: STAGE_TYPE,
            ..Self::default()
        }
    }

    pub fn is_stage(&self) -> bool {
        self.section_type > MAX_PLAIN_SECTION_TYPE
    }

    /// Drops every reference to the given element
    pub fn forget(&mut self, id: &NodeId) {
        self.characters.retain(|c| c != id);
        self.locations.retain(|l| l != id);
        self.items.retain(|i| i != id);
        self.plotline_notes.remove(id);
    }
}

impl Element for Section {
    fn to_xml(&self, node: &mut XmlElement) {
        node.set_attr(SECTION_TYPE_ATTR, self.section_type.to_string());
        if self.scene != 0 {
            node.set_attr("scene", self.scene.to_string());
        }
        node.set_attr("status", self.status.to_string());
        write_flag(node, "append", self.append_to_prev);

        write_text(node, "Title", &self.title);
        write_paragraphs(node, "Desc", &self.desc);
        write_paragraphs(node, "Notes", &self.notes);
        write_tags(node, &self.tags);
        write_paragraphs(node, "Goal", &self.goal);
        write_paragraphs(node, "Conflict", &self.conflict);
        write_paragraphs(node, "Outcome", &self.outcome);
        write_ids(node, "Characters", &self.characters);
        write_ids(node, "Locations", &self.locations);
        write_ids(node, "Items", &self.items);

        if !self.plotline_notes.is_empty() {
            let mut notes = XmlElement::new("PlotlineNotes");
            for (plot_line, text) in &self.plotline_notes {
                let mut note = XmlElement::new("Plotline").with_attr("id", plot_line.as_str());
                for line in text.split('\n') {
                    note.push(XmlElement::new("p").with_text(line));
                }
                notes.push(note);
            }
            node.push(notes);
        }

        write_paragraphs(node, "Content", &self.content);
    }

    fn from_xml(&mut self, node: &XmlElement) {
        let mut plotline_notes = BTreeMap::new();
        if let Some(notes) = node.find("PlotlineNotes") {
            for note in notes.find_all("Plotline") {
                let Some(id) = note.attr("id").and_then(|s| NodeId::parse_element(s).ok()) else {
                    continue;
                };
                let text = note
                    .find_all("p")
                    .map(XmlElement::text)
                    .collect::<Vec<_>>()
                    .join("\n");
                plotline_notes.insert(id, text);
            }
        }

        *self = Self {
            title: read_text(node, "Title"),
            desc: read_paragraphs(node, "Desc"),
            notes: read_paragraphs(node, "Notes"),
            tags: read_tags(node),
            section_type: read_int(node, SECTION_TYPE_ATTR, 0),
            scene: read_int(node, "scene", 0),
            status: read_int(node, "status", DEFAULT_STATUS),
            append_to_prev: read_flag(node, "append"),
            goal: read_paragraphs(node, "Goal"),
            conflict: read_paragraphs(node, "Conflict"),
            outcome: read_paragraphs(node, "Outcome"),
            characters: read_ids(node, "Characters"),
            locations: read_ids(node, "Locations"),
            items: read_ids(node, "Items"),
            plotline_notes,
            content: read_paragraphs(node, "Content"),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ElementKind;
    use crate::fragment::strip_references;

    fn sample() -> Section {
        let mut plotline_notes = BTreeMap::new();
        plotline_notes.insert(NodeId::element(ElementKind::PlotLine, 1), "Turns here".to_string());

        Section {
            title: "Ambush".to_string(),
            desc: "On the road.".to_string(),
            notes: "Too long?".to_string(),
            tags: vec!["action".to_string(), "night".to_string()],
            section_type: 0,
            scene: 1,
            status: 3,
            append_to_prev: true,
            goal: "Reach the pass".to_string(),
            conflict: "Bandits".to_string(),
            outcome: "Half make it".to_string(),
            characters: vec![NodeId::element(ElementKind::Character, 1)],
            locations: vec![NodeId::element(ElementKind::Location, 2)],
            items: vec![NodeId::element(ElementKind::Item, 3)],
            plotline_notes,
            content: "It was dark.\nThen it wasn't.".to_string(),
        }
    }

    #[test]
    fn round_trip_keeps_references() {
        let section = sample();
        let mut node = XmlElement::new("SECTION");
        section.to_xml(&mut node);

        let mut loaded = Section::default();
        loaded.from_xml(&node);
        assert_eq!(loaded, section);
    }

    #[test]
    fn stripped_round_trip_drops_only_references() {
        let section = sample();
        let mut node = XmlElement::new("SECTION");
        section.to_xml(&mut node);
        strip_references(&mut node);

        let mut loaded = Section::default();
        loaded.from_xml(&node);

        let expected = Section {
            characters: Vec::new(),
            locations: Vec::new(),
            items: Vec::new(),
            plotline_notes: BTreeMap::new(),
            ..section
        };
        assert_eq!(loaded, expected);
    }

    #[test]
    fn type_attribute_is_always_written() {
        let mut node = XmlElement::new("SECTION");
        Section::default().to_xml(&mut node);
        assert_eq!(node.attr("type"), Some("0"));

        let mut node = XmlElement::new("SECTION");
        Section::stage().to_xml(&mut node);
        assert_eq!(node.attr("type"), Some("2"));
    }

    #[test]
    fn stage_detection() {
        assert!(!Section::default().is_stage());
        assert!(Section::stage().is_stage());
        let unused = Section {
            section_type: 1,
            ..Section::default()
        };
        assert!(!unused.is_stage());
    }

    #[test]
    fn forget_removes_all_references() {
        let mut section = sample();
        section.forget(&NodeId::element(ElementKind::Character, 1));
        section.forget(&NodeId::element(ElementKind::PlotLine, 1));
        assert!(section.characters.is_empty());
        assert!(section.plotline_notes.is_empty());
        assert_eq!(section.locations.len(), 1);
    }
}
