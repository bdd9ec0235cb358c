//! Characters, locations, items and project notes

use crate::fragment::XmlElement;

use super::element::{
    read_flag, read_paragraphs, read_tags, read_text, write_flag, write_paragraphs, write_tags,
    write_text, Element,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Character {
    pub title: String,
    pub full_name: String,
    pub aka: String,
    pub desc: String,
    pub notes: String,
    pub bio: String,
    pub goals: String,
    pub tags: Vec<String>,
    pub is_major: bool,
}

impl Element for Character {
    fn to_xml(&self, node: &mut XmlElement) {
        write_flag(node, "major", self.is_major);
        write_text(node, "Title", &self.title);
        write_text(node, "FullName", &self.full_name);
        write_text(node, "Aka", &self.aka);
        write_paragraphs(node, "Desc", &self.desc);
        write_paragraphs(node, "Notes", &self.notes);
        write_paragraphs(node, "Bio", &self.bio);
        write_paragraphs(node, "Goals", &self.goals);
        write_tags(node, &self.tags);
    }

    fn from_xml(&mut self, node: &XmlElement) {
        *self = Self {
            title: read_text(node, "Title"),
            full_name: read_text(node, "FullName"),
            aka: read_text(node, "Aka"),
            desc: read_paragraphs(node, "Desc"),
            notes: read_paragraphs(node, "Notes"),
            bio: read_paragraphs(node, "Bio"),
            goals: read_paragraphs(node, "Goals"),
            tags: read_tags(node),
            is_major: read_flag(node, "major"),
        };
    }
}

/// Shared shape of locations and items
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorldElement {
    pub title: String,
    pub aka: String,
    pub desc: String,
    pub notes: String,
    pub tags: Vec<String>,
}

pub type Location = WorldElement;
pub type Item = WorldElement;

impl Element for WorldElement {
    fn to_xml(&self, node: &mut XmlElement) {
        write_text(node, "Title", &self.title);
        write_text(node, "Aka", &self.aka);
        write_paragraphs(node, "Desc", &self.desc);
        write_paragraphs(node, "Notes", &self.notes);
        write_tags(node, &self.tags);
    }

    fn from_xml(&mut self, node: &XmlElement) {
        *self = Self {
            title: read_text(node, "Title"),
            aka: read_text(node, "Aka"),
            desc: read_paragraphs(node, "Desc"),
            notes: read_paragraphs(node, "Notes"),
            tags: read_tags(node),
        };
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectNote {
    pub title: String,
    pub desc: String,
}

impl Element for ProjectNote {
    fn to_xml(&self, node: &mut XmlElement) {
        write_text(node, "Title", &self.title);
        write_paragraphs(node, "Desc", &self.desc);
    }

    fn from_xml(&mut self, node: &XmlElement) {
        *self = Self {
            title: read_text(node, "Title"),
            desc: read_paragraphs(node, "Desc"),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round_trip<E: Element + Default + PartialEq + std::fmt::Debug>(tag: &str, element: &E) {
        let mut node = XmlElement::new(tag);
        element.to_xml(&mut node);
        let text = crate::fragment::to_string(&node).unwrap();

        let mut loaded = E::default();
        loaded.from_xml(&crate::fragment::parse(&text).unwrap());
        assert_eq!(&loaded, element);
    }

    #[test]
    fn character_round_trip() {
        round_trip(
            "CHARACTER",
            &Character {
                title: "Mara".to_string(),
                full_name: "Mara O'Neill".to_string(),
                aka: "The Fox".to_string(),
                desc: "Sharp.\nTired.".to_string(),
                notes: String::new(),
                bio: "Born <somewhere> & raised elsewhere".to_string(),
                goals: "Get out".to_string(),
                tags: vec!["lead".to_string()],
                is_major: true,
            },
        );
    }

    #[test]
    fn location_and_item_round_trip() {
        round_trip(
            "LOCATION",
            &Location {
                title: "Harbor".to_string(),
                aka: "The Docks".to_string(),
                desc: "Fog every morning".to_string(),
                notes: "map?".to_string(),
                tags: vec!["coast".to_string(), "night".to_string()],
            },
        );
        round_trip(
            "ITEM",
            &Item {
                title: "Compass".to_string(),
                ..Item::default()
            },
        );
    }

    #[test]
    fn project_note_round_trip() {
        round_trip(
            "PROJECTNOTE",
            &ProjectNote {
                title: "Research".to_string(),
                desc: "Tides\nLighthouses".to_string(),
            },
        );
    }
}
