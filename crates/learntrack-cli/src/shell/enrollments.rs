//! Enrollment management menu.

use crate::app::AppContext;
use crate::ui::{badge, enrollments_table, header, kv, Badge};

use super::{report_error, Prompt};

const MENU: [&str; 13] = [
    "Enroll student in course",
    "List all enrollments",
    "List enrollments by student",
    "List active enrollments by student",
    "List enrollments by course",
    "List enrollments by status",
    "Update enrollment status",
    "Complete enrollment",
    "Cancel enrollment",
    "Drop enrollment",
    "Delete enrollment",
    "Export enrollments as JSON",
    "Back",
];

/// Run the enrollment menu until "Back".
pub fn menu(ctx: &mut AppContext, prompt: &Prompt) -> anyhow::Result<()> {
    loop {
        println!("\n{}", header(&ctx.ui, "Enrollments"));
        match prompt.select("ENROLLMENT MANAGEMENT", &MENU)? {
            0 => enroll(ctx, prompt)?,
            1 => println!(
                "{}",
                enrollments_table(&ctx.ui, &ctx.enrollments.get_all_enrollments())
            ),
            2 => by_student(ctx, prompt, false)?,
            3 => by_student(ctx, prompt, true)?,
            4 => by_course(ctx, prompt)?,
            5 => by_status(ctx, prompt)?,
            6 => update_status(ctx, prompt)?,
            7 => close(ctx, prompt, "COMPLETED")?,
            8 => close(ctx, prompt, "CANCELLED")?,
            9 => close(ctx, prompt, "DROPPED")?,
            10 => delete(ctx, prompt)?,
            11 => export_json(ctx)?,
            _ => return Ok(()),
        }
    }
}

fn enroll(ctx: &mut AppContext, prompt: &Prompt) -> anyhow::Result<()> {
    let student_id = prompt.input_u32("Student ID")?;
    let course_id = prompt.input_u32("Course ID")?;

    match ctx.enroll(student_id, course_id) {
        Ok(enrollment) => {
            println!("{}", badge(&ctx.ui, Badge::Ok, "Enrollment created"));
            println!("{}", kv(&ctx.ui, "Id", &enrollment.id.to_string()));
            println!("{}", kv(&ctx.ui, "Enrolled On", &enrollment.enrolled_on.to_string()));
        }
        Err(err) => report_error(ctx, &err),
    }
    Ok(())
}

fn by_student(ctx: &AppContext, prompt: &Prompt, active_only: bool) -> anyhow::Result<()> {
    let student_id = prompt.input_u32("Student ID")?;
    let listing = if active_only {
        ctx.active_enrollments_by_student(student_id)
    } else {
        ctx.enrollments_by_student(student_id)
    };
    match listing {
        Ok(enrollments) => println!("{}", enrollments_table(&ctx.ui, &enrollments)),
        Err(err) => report_error(ctx, &err),
    }
    Ok(())
}

fn by_course(ctx: &AppContext, prompt: &Prompt) -> anyhow::Result<()> {
    let course_id = prompt.input_u32("Course ID")?;
    match ctx.enrollments_by_course(course_id) {
        Ok(enrollments) => println!("{}", enrollments_table(&ctx.ui, &enrollments)),
        Err(err) => report_error(ctx, &err),
    }
    Ok(())
}

fn by_status(ctx: &AppContext, prompt: &Prompt) -> anyhow::Result<()> {
    let token = prompt
        .input("Status (ACTIVE/COMPLETED/CANCELLED/DROPPED)")?
        .to_uppercase();
    match token.parse() {
        Ok(status) => println!(
            "{}",
            enrollments_table(&ctx.ui, &ctx.enrollments.get_enrollments_by_status(status))
        ),
        Err(err) => report_error(ctx, &err),
    }
    Ok(())
}

fn update_status(ctx: &mut AppContext, prompt: &Prompt) -> anyhow::Result<()> {
    let id = prompt.input_u32("Enrollment ID")?;
    let token = prompt
        .input("New status (ACTIVE/COMPLETED/CANCELLED/DROPPED)")?
        .to_uppercase();
    match ctx.enrollments.update_enrollment_status(id, &token) {
        Ok(enrollment) => {
            println!("{}", badge(&ctx.ui, Badge::Ok, "Status updated"));
            println!("{}", kv(&ctx.ui, "Status", enrollment.status.as_str()));
        }
        Err(err) => report_error(ctx, &err),
    }
    Ok(())
}

fn close(ctx: &mut AppContext, prompt: &Prompt, status: &str) -> anyhow::Result<()> {
    let id = prompt.input_u32("Enrollment ID")?;
    let outcome = match status {
        "COMPLETED" => ctx.enrollments.complete_enrollment(id),
        "CANCELLED" => ctx.enrollments.cancel_enrollment(id),
        _ => ctx.enrollments.drop_enrollment(id),
    };
    match outcome {
        Ok(enrollment) => {
            println!(
                "{}",
                badge(
                    &ctx.ui,
                    Badge::Ok,
                    &format!("Enrollment marked {}", enrollment.status)
                )
            );
        }
        Err(err) => report_error(ctx, &err),
    }
    Ok(())
}

fn delete(ctx: &mut AppContext, prompt: &Prompt) -> anyhow::Result<()> {
    let id = prompt.input_u32("Enrollment ID")?;
    if !prompt.confirm("Permanently delete this enrollment?")? {
        println!("{}", badge(&ctx.ui, Badge::Info, "Delete cancelled"));
        return Ok(());
    }
    if ctx.enrollments.delete_enrollment(id) {
        println!("{}", badge(&ctx.ui, Badge::Ok, "Enrollment deleted"));
    } else {
        println!(
            "{}",
            badge(
                &ctx.ui,
                Badge::Err,
                &format!("Enrollment with ID {} not found", id)
            )
        );
    }
    Ok(())
}

fn export_json(ctx: &AppContext) -> anyhow::Result<()> {
    let enrollments = ctx.enrollments.get_all_enrollments();
    println!("{}", serde_json::to_string_pretty(&enrollments)?);
    Ok(())
}
