//! Markup emitters used by the body transpiler.
//!
//! Text from the source is written verbatim; authors may embed raw HTML.

use crate::parsing::blocks::kinds::Section;
use crate::parsing::inline::{InlineNode, NoteId, NoteKind};

pub fn push_section_open(out: &mut String, heading: &str) {
    out.push_str(Section::OPEN);
    out.push_str("<h1>");
    out.push_str(heading);
    out.push_str("</h1>\n");
}

pub fn push_subsection(out: &mut String, heading: &str) {
    out.push_str("<h2>");
    out.push_str(heading);
    out.push_str("</h2>\n");
}

/// Writes a paragraph whose inline nodes were parsed from `text`.
pub fn push_paragraph(out: &mut String, text: &str, nodes: &[InlineNode]) {
    out.push_str("<p>\n");
    for node in nodes {
        match node {
            InlineNode::Text(sp) => out.push_str(sp.slice(text)),
            InlineNode::Note { kind, body, .. } => push_note(out, *kind, body.slice(text)),
        }
    }
    out.push_str("</p>\n");
}

/// Writes the label/checkbox/span triple for one note.
pub fn push_note(out: &mut String, kind: NoteKind, body: &str) {
    let id = NoteId::from_body(body);
    match kind {
        NoteKind::Sidenote => out.push_str(&format!(
            "<label for=\"{id}\" class=\"margin-toggle sidenote-number\"></label>\n\
             <input type=\"checkbox\" id=\"{id}\" class=\"margin-toggle\"/>\n\
             <span class=\"sidenote\">{body}\n</span>\n"
        )),
        NoteKind::MarginNote => out.push_str(&format!(
            "<label for=\"{id}\" class=\"margin-toggle\">&#8853;</label>\
             <input type=\"checkbox\" id=\"{id}\" class=\"margin-toggle\"/>\
             <span class=\"marginnote\">{body}</span>"
        )),
    }
}
