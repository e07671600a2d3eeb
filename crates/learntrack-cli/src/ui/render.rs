//! Rendering primitives for CLI output.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::{ASCII_FULL, UTF8_FULL};
use comfy_table::{ContentArrangement, Table};

use learntrack_core::{Course, Enrollment, Student};

use super::context::UiContext;
use super::theme::{colors, styled, Badge};

/// Render the welcome banner.
///
/// Pretty mode: boxed title with version
/// Plain mode: single "learntrack <version>" line
pub fn banner(ctx: &UiContext, version: &str) -> String {
    if ctx.mode.is_pretty() {
        let title = styled("LearnTrack", colors::BRIGHT, ctx.color);
        format!(
            "{}\n  {} v{}\n  Student & Course Management System\n{}",
            divider(ctx),
            title,
            version,
            divider(ctx)
        )
    } else {
        format!("learntrack {}", version)
    }
}

/// Render a section header.
///
/// Pretty mode: "LearnTrack · section"
/// Plain mode: "learntrack section"
pub fn header(ctx: &UiContext, section: &str) -> String {
    if ctx.mode.is_pretty() {
        let title = styled("LearnTrack", colors::BRIGHT, ctx.color);
        format!("{} \u{00B7} {}", title, section)
    } else {
        format!("learntrack {}", section.to_lowercase())
    }
}

/// Render a divider line.
pub fn divider(ctx: &UiContext) -> String {
    if ctx.mode.is_pretty() {
        "\u{2500}".repeat(ctx.width.min(48))
    } else {
        "---".to_string()
    }
}

/// Render a badge with a message.
pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    let text = styled(kind.display(ctx.unicode), kind.color(), ctx.color);
    if message.is_empty() {
        text
    } else {
        format!("{} {}", text, message)
    }
}

/// Render a key-value pair.
///
/// Pretty mode: "Key: value" with dim key
/// Plain mode: "key=value"
pub fn kv(ctx: &UiContext, key: &str, value: &str) -> String {
    if ctx.mode.is_pretty() {
        let styled_key = styled(&format!("{}:", key), colors::DIM, ctx.color);
        format!("{} {}", styled_key, value)
    } else {
        format!("{}={}", key.to_lowercase().replace(' ', "_"), value)
    }
}

/// Render a hint line.
pub fn hint(ctx: &UiContext, text: &str) -> String {
    if ctx.mode.is_pretty() {
        let label = styled("Hint:", colors::DIM, ctx.color);
        format!("{} {}", label, text)
    } else {
        format!("hint={}", text)
    }
}

fn entity_table(ctx: &UiContext, headers: &[&str]) -> Table {
    let mut table = Table::new();
    if ctx.unicode {
        table.load_preset(UTF8_FULL);
        table.apply_modifier(UTF8_ROUND_CORNERS);
    } else {
        table.load_preset(ASCII_FULL);
    }
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(headers.to_vec());
    table
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

/// Render a student listing.
///
/// Pretty mode: comfy-table; plain mode: one record per line.
pub fn students_table(ctx: &UiContext, students: &[Student]) -> String {
    if students.is_empty() {
        return badge(ctx, Badge::Info, "No students found");
    }
    if !ctx.mode.is_pretty() {
        return students
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n");
    }

    let mut table = entity_table(ctx, &["ID", "First Name", "Last Name", "Email", "Batch", "Active"]);
    for s in students {
        table.add_row(vec![
            s.id.to_string(),
            s.first_name.clone(),
            s.last_name.clone(),
            s.email.clone(),
            s.batch.clone(),
            yes_no(s.active).to_string(),
        ]);
    }
    table.to_string()
}

/// Render a course listing.
pub fn courses_table(ctx: &UiContext, courses: &[Course]) -> String {
    if courses.is_empty() {
        return badge(ctx, Badge::Info, "No courses found");
    }
    if !ctx.mode.is_pretty() {
        return courses
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n");
    }

    let mut table = entity_table(ctx, &["ID", "Name", "Description", "Weeks", "Active"]);
    for c in courses {
        table.add_row(vec![
            c.id.to_string(),
            c.name.clone(),
            c.description.clone(),
            c.duration_weeks.to_string(),
            yes_no(c.active).to_string(),
        ]);
    }
    table.to_string()
}

/// Render an enrollment listing.
pub fn enrollments_table(ctx: &UiContext, enrollments: &[Enrollment]) -> String {
    if enrollments.is_empty() {
        return badge(ctx, Badge::Info, "No enrollments found");
    }
    if !ctx.mode.is_pretty() {
        return enrollments
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n");
    }

    let mut table = entity_table(ctx, &["ID", "Student ID", "Course ID", "Enrolled On", "Status"]);
    for e in enrollments {
        table.add_row(vec![
            e.id.to_string(),
            e.student_id.to_string(),
            e.course_id.to_string(),
            e.enrolled_on.to_string(),
            e.status.to_string(),
        ]);
    }
    table.to_string()
}
