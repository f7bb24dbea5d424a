//! "Definitions" and "Notes" sections below the plot.

use dashdom::{Element, Node};

use crate::config::NotesCss;

/// Definitions on the left with the scenario table placeholder
/// (`html-table`) on the right, then the two columns of notes.
///
/// `id_name` is the id of the "Notes" title, `"Notes"` on most hubs.
pub fn make_notes_definition(
    definitions: impl Into<Node>,
    notes_left: impl Into<Node>,
    notes_right: impl Into<Node>,
    css: &NotesCss,
    id_name: &str,
) -> Element {
    let definition_row = Element::div()
        .child(
            Element::div()
                .child(Element::h2("Definitions").class_name(&css.title))
                .child(definitions)
                .class_name(&css.column_left),
        )
        .child(Element::div().class_name(&css.column_right).id("html-table"))
        .class_name(&css.row);

    let notes_row = Element::div()
        .child(Element::h2("Notes").class_name(&css.title).id(id_name))
        .child(Element::div().child(notes_left).class_name(&css.column_notes_left))
        .child(Element::div().child(notes_right).class_name(&css.column_notes_right))
        .class_name(&css.row_bottom_notes);

    Element::div().child(definition_row).child(notes_row)
}
