//! Chapter element

use crate::fragment::XmlElement;

use super::element::{
    read_flag, read_int, read_paragraphs, read_text, write_flag, write_paragraphs, write_text,
    Element,
};

/// Level of a regular chapter; level 1 marks a part heading
pub const DEFAULT_CHAPTER_LEVEL: i64 = 2;

/// A chapter in the narrative outline
///
/// Sections are not fields of the chapter; they are its children in the
/// outline and travel as nested `SECTION` fragments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    pub title: String,
    pub desc: String,
    pub notes: String,
    /// 0 = normal, 1 = unused
    pub chapter_type: i64,
    pub level: i64,
    pub is_trash: bool,
    pub no_number: bool,
}

impl Default for Chapter {
    fn default() -> Self {
        Self {
            title: String::new(),
            desc: String::new(),
            notes: String::new(),
            chapter_type: 0,
            level: DEFAULT_CHAPTER_LEVEL,
            is_trash: false,
            no_number: false,
        }
    }
}

impl Element for Chapter {
    fn to_xml(&self, node: &mut XmlElement) {
        if self.chapter_type != 0 {
            node.set_attr("type", self.chapter_type.to_string());
        }
        node.set_attr("level", self.level.to_string());
        write_flag(node, "isTrash", self.is_trash);
        write_flag(node, "noNumber", self.no_number);
        write_text(node, "Title", &self.title);
        write_paragraphs(node, "Desc", &self.desc);
        write_paragraphs(node, "Notes", &self.notes);
    }

    fn from_xml(&mut self, node: &XmlElement) {
        *self = Self {
            title: read_text(node, "Title"),
            desc: read_paragraphs(node, "Desc"),
            notes: read_paragraphs(node, "Notes"),
            chapter_type: read_int(node, "type", 0),
            level: read_int(node, "level", DEFAULT_CHAPTER_LEVEL),
            is_trash: read_flag(node, "isTrash"),
            no_number: read_flag(node, "noNumber"),
        };
    }
}
