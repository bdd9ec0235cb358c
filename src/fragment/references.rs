//! Removal of cross-element references before transport

use super::node::XmlElement;

/// Child tags that point at elements outside the fragment
pub const REFERENCE_TAGS: &[&str] = &[
    "Characters",
    "Locations",
    "Items",
    "PlotlineNotes",
    "Sections",
    "Section",
];

/// Removes reference tags from the element's direct children
///
/// Nested element fragments are not touched; each one is stripped on its
/// own before it is attached. Returns the number of removed tags.
pub fn strip_references(element: &mut XmlElement) -> usize {
    REFERENCE_TAGS
        .iter()
        .map(|tag| element.remove_all(tag))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn section_fragment() -> XmlElement {
        let mut e = XmlElement::new("SECTION");
        e.set_attr("type", "0");
        e.push(XmlElement::new("Title").with_text("Ambush"));
        e.push(XmlElement::new("Characters").with_attr("ids", "cr1 cr2"));
        e.push(XmlElement::new("Locations").with_attr("ids", "lc1"));
        e.push(XmlElement::new("Items").with_attr("ids", "it4"));
        e.push(XmlElement::new("PlotlineNotes").with_child(XmlElement::new("Arc")));
        e.push(XmlElement::new("Goal").with_text("Survive"));
        e
    }

    #[test]
    fn removes_every_reference_tag() {
        let mut e = section_fragment();
        assert_eq!(strip_references(&mut e), 4);

        let names: Vec<_> = e.elements().map(XmlElement::name).collect();
        assert_eq!(names, vec!["Title", "Goal"]);
        assert_eq!(e.attr("type"), Some("0"));
    }

    #[test]
    fn leaves_nested_fragments_alone() {
        let mut chapter = XmlElement::new("CHAPTER");
        chapter.push(section_fragment());
        strip_references(&mut chapter);

        let nested = chapter.find("SECTION").unwrap();
        assert!(nested.find("Characters").is_some());
    }

    #[test]
    fn plot_references_are_stripped() {
        let mut arc = XmlElement::new("ARC");
        arc.push(XmlElement::new("Sections").with_attr("ids", "sc1 sc2"));
        let mut point = XmlElement::new("POINT");
        point.push(XmlElement::new("Section").with_attr("id", "sc1"));

        assert_eq!(strip_references(&mut arc), 1);
        assert_eq!(strip_references(&mut point), 1);
        assert!(arc.is_empty());
        assert!(point.is_empty());
    }

    fn tag_strategy() -> impl Strategy<Value = &'static str> {
        prop::sample::select(vec![
            "Characters",
            "Locations",
            "Items",
            "PlotlineNotes",
            "Sections",
            "Section",
            "Title",
            "Desc",
            "Notes",
            "Goal",
        ])
    }

    proptest! {
        #[test]
        fn stripping_is_idempotent(tags in prop::collection::vec(tag_strategy(), 0..20)) {
            let mut once = XmlElement::new("SECTION");
            for tag in &tags {
                once.push(XmlElement::new(*tag).with_text("x"));
            }
            strip_references(&mut once);

            let mut twice = once.clone();
            prop_assert_eq!(strip_references(&mut twice), 0);
            prop_assert_eq!(&twice, &once);
            prop_assert!(once.elements().all(|e| !REFERENCE_TAGS.contains(&e.name())));
        }
    }
}
