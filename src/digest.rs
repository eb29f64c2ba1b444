// src/digest.rs
//! Rendering of the Discord message body.

use crate::ingest::types::LinkItem;

/// One labelled block of the digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub label: String,
    pub items: Vec<LinkItem>,
}

impl Section {
    pub fn new(label: impl Into<String>, items: Vec<LinkItem>) -> Self {
        Self {
            label: label.into(),
            items,
        }
    }
}

/// Render sections in the given order.
///
/// ```text
/// **Label**
/// 1. Title
/// https://...
/// LGTM: 12
///
/// 2. Title
/// https://...
/// ```
///
/// Sections are separated by a blank line. A section without items is just
/// its header.
pub fn build_digest(sections: &[Section]) -> String {
    sections
        .iter()
        .map(render_section)
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn render_section(section: &Section) -> String {
    let header = format!("**{}**", section.label);
    if section.items.is_empty() {
        return header;
    }

    let body = section
        .items
        .iter()
        .enumerate()
        .map(|(i, it)| render_item(i + 1, it))
        .collect::<Vec<_>>()
        .join("\n\n");

    format!("{header}\n{body}")
}

fn render_item(index: usize, item: &LinkItem) -> String {
    match &item.note {
        Some(note) => format!("{index}. {}\n{}\n{note}", item.title, item.url),
        None => format!("{index}. {}\n{}", item.title, item.url),
    }
}
