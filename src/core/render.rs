//! Rendering of course records into badge fragments.

use crate::core::dom::Element;
use crate::domain::model::CourseRecord;

pub const SEE_COURSE_LABEL: &str = "See Course";
pub const CONTAINER_ID: &str = "badges";

/// The container the badge fragments accumulate in.
pub fn badges_container() -> Element {
    Element::new("div").attr("id", CONTAINER_ID)
}

/// Appends one fragment per record, in input order:
/// `<div class="course"><h3>title</h3><img src=badge><a ...>See Course</a></div>`.
///
/// Append-only: prior children are neither read nor cleared, so rendering
/// twice into the same container duplicates children. Field values are copied
/// through without validation; empty fields render as empty text/attributes.
pub fn render_courses(container: &mut Element, courses: &[CourseRecord]) {
    for course in courses {
        let mut card = Element::new("div").attr("class", "course");

        card.append_child(Element::new("h3").text(&course.title));
        card.append_child(Element::new("img").attr("src", &course.badge));
        card.append_child(
            Element::new("a")
                .attr("class", "btn btn-primary")
                .attr("target", "_blank")
                .attr("href", &course.url)
                .text(SEE_COURSE_LABEL),
        );

        container.append_child(card);
    }
}

/// Wraps the rendered container in a minimal host page so the output file is
/// viewable on its own.
pub fn render_page(container: &Element, user: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>Completed courses for {}</title>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        user,
        container.to_html()
    )
}
