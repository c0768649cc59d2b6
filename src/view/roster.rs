//! Roster rendering. Pure: records in, nodes out. The container belongs to the caller and is
//! only ever cleared and rebuilt, never patched.

use super::dom::{Element, Node};
use crate::data::StudentRecord;

pub const ASSET_ROOT: &str = "assets";
pub const EMPTY_ROSTER_MESSAGE: &str = "No contributors yet. Your name could be the first!";
pub const ROSTER_ERROR_MESSAGE: &str =
    "We could not load the roster right now. Please try again later.";

fn message_item(message: &str) -> Element {
    Element::new("li").class("roster-entry").text(message)
}

pub fn detail_text(student: &StudentRecord) -> String {
    format!(" - {} - Class of {}", student.major, student.grad_year)
}

pub fn build_roster_card(student: &StudentRecord) -> Element {
    let card = if student.has_link() {
        Element::new("a")
            .class("roster-card roster-card--link")
            .attr("href", student.link_url.as_str())
            .attr("target", "_blank")
            .attr("rel", "noopener noreferrer")
    } else {
        Element::new("div").class("roster-card")
    };

    let photo = Element::new("div").class("roster-photo-wrapper").child(
        Element::new("img")
            .class("roster-photo")
            .attr("src", format!("{ASSET_ROOT}/{}", student.photo))
            .attr("alt", format!("{}'s profile photo", student.name)),
    );

    let mut meta = Element::new("div").class("roster-meta").child(
        Element::new("span")
            .class("roster-details")
            .text(detail_text(student)),
    );
    if student.has_link() {
        meta.append_child(Node::text(" - "));
        meta.append_child(
            Element::new("span")
                .class("roster-link")
                .text(student.link_text.as_str()),
        );
    }

    let content = Element::new("div")
        .class("roster-content")
        .child(Element::new("strong").text(student.name.as_str()))
        .child(meta);

    card.child(photo).child(content)
}

/// Replace the container's content with one entry per student, in the given order.
pub fn render_roster(container: &mut Element, students: &[StudentRecord]) {
    container.clear();

    if students.is_empty() {
        container.append_child(message_item(EMPTY_ROSTER_MESSAGE));
        return;
    }

    let fragment = students.iter().map(|student| {
        Node::from(
            Element::new("li")
                .class("roster-entry")
                .child(build_roster_card(student)),
        )
    });
    container.append_all(fragment);
}

pub fn render_roster_error(container: &mut Element) {
    container.clear();
    container.append_child(message_item(ROSTER_ERROR_MESSAGE));
}
