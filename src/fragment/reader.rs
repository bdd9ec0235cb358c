//! Fragment parsing from clipboard text

use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use super::node::XmlElement;
use super::FragmentError;

/// Parses clipboard text into a fragment tree
///
/// Exactly one root element is accepted. Declarations, comments and
/// processing instructions are skipped; whitespace outside the root is
/// ignored, any other content there is rejected.
pub fn parse(text: &str) -> Result<XmlElement, FragmentError> {
    let mut reader = Reader::from_str(text);

    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                if root.is_some() {
                    return Err(FragmentError::TrailingContent);
                }
                stack.push(start_element(&e)?);
            }
            Ok(Event::Empty(e)) => {
                if root.is_some() {
                    return Err(FragmentError::TrailingContent);
                }
                let element = start_element(&e)?;
                close(element, &mut stack, &mut root);
            }
            Ok(Event::End(_)) => {
                let element = stack.pop().ok_or_else(|| {
                    FragmentError::Malformed("end tag without start tag".to_string())
                })?;
                close(element, &mut stack, &mut root);
            }
            Ok(Event::Text(e)) => {
                let raw = String::from_utf8_lossy(&e);
                let value = unescape(&raw).map_err(|err| FragmentError::Malformed(err.to_string()))?;
                push_text(&mut stack, &value)?;
            }
            Ok(Event::GeneralRef(e)) => {
                let raw = String::from_utf8_lossy(&e);
                let entity = format!("&{};", raw);
                let value = unescape(&entity)
                    .map_err(|err| FragmentError::Malformed(err.to_string()))?;
                push_text(&mut stack, &value)?;
            }
            Ok(Event::CData(e)) => {
                let raw = String::from_utf8_lossy(&e);
                push_text(&mut stack, &raw)?;
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(FragmentError::Malformed(e.to_string())),
        }
    }

    if let Some(open) = stack.last() {
        return Err(FragmentError::Unclosed(open.name().to_string()));
    }

    root.ok_or(FragmentError::NoRoot)
}

fn start_element(e: &BytesStart<'_>) -> Result<XmlElement, FragmentError> {
    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
    let mut element = XmlElement::new(name);

    for attr in e.attributes() {
        let attr = attr.map_err(|err| FragmentError::Malformed(err.to_string()))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let raw = String::from_utf8_lossy(&attr.value);
        let value = unescape(&raw).map_err(|err| FragmentError::Malformed(err.to_string()))?;
        element.set_attr(key, value.into_owned());
    }

    Ok(element)
}

fn close(element: XmlElement, stack: &mut [XmlElement], root: &mut Option<XmlElement>) {
    match stack.last_mut() {
        Some(parent) => parent.push(element),
        None => *root = Some(element),
    }
}

fn push_text(stack: &mut [XmlElement], text: &str) -> Result<(), FragmentError> {
    match stack.last_mut() {
        Some(parent) => {
            parent.push_text(text);
            Ok(())
        }
        None if text.trim().is_empty() => Ok(()),
        None => Err(FragmentError::TrailingContent),
    }
}
