//! Fragment serialization to clipboard text

use std::fmt;

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use super::node::{XmlElement, XmlNode};
use super::FragmentError;

/// Serializes a fragment tree to compact XML text
///
/// No declaration is written. Text and attribute values are escaped, so the
/// result is plain text that can go on the clipboard as is.
pub fn to_string(element: &XmlElement) -> Result<String, FragmentError> {
    let mut writer = Writer::new(Vec::new());
    write_element(&mut writer, element)?;
    String::from_utf8(writer.into_inner()).map_err(write_error)
}

fn write_element(writer: &mut Writer<Vec<u8>>, element: &XmlElement) -> Result<(), FragmentError> {
    let mut start = BytesStart::new(element.name());
    for (key, value) in element.attributes() {
        start.push_attribute((key, value));
    }

    if element.children().is_empty() {
        return writer.write_event(Event::Empty(start)).map_err(write_error);
    }

    writer.write_event(Event::Start(start)).map_err(write_error)?;
    for child in element.children() {
        match child {
            XmlNode::Element(e) => write_element(writer, e)?,
            XmlNode::Text(t) => writer
                .write_event(Event::Text(BytesText::new(t)))
                .map_err(write_error)?,
        }
    }
    writer
        .write_event(Event::End(BytesEnd::new(element.name())))
        .map_err(write_error)
}

fn write_error(e: impl fmt::Display) -> FragmentError {
    FragmentError::Write(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fragment::parse;

    #[test]
    fn writes_compact_xml_without_declaration() {
        let mut root = XmlElement::new("CHARACTER");
        root.set_attr("major", "1");
        root.push(XmlElement::new("Title").with_text("Ann"));
        root.push(XmlElement::new("Bio"));

        let text = to_string(&root).unwrap();
        assert_eq!(text, r#"<CHARACTER major="1"><Title>Ann</Title><Bio/></CHARACTER>"#);
    }

    #[test]
    fn escapes_markup_characters() {
        let mut root = XmlElement::new("ITEM");
        root.set_attr("label", "\"x\" < y");
        root.push(XmlElement::new("Title").with_text("Salt & <Pepper>"));

        let text = to_string(&root).unwrap();
        assert!(!text.contains("& <"));
        assert!(text.contains("&amp;"));
        assert!(text.contains("&lt;Pepper&gt;"));

        let back = parse(&text).unwrap();
        assert_eq!(back, root);
    }

    #[test]
    fn keeps_mixed_content_order() {
        let mut p = XmlElement::new("p");
        p.push_text("before ");
        p.push(XmlElement::new("em").with_text("inside"));
        p.push_text(" after");

        let text = to_string(&p).unwrap();
        assert_eq!(text, "<p>before <em>inside</em> after</p>");
        assert_eq!(parse(&text).unwrap(), p);
    }
}
