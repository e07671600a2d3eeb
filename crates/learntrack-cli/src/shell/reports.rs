//! Statistics menu. Pure reporting, no mutation.

use crate::app::AppContext;
use crate::ui::{divider, header, kv};

use super::{report_error, Prompt};

const MENU: [&str; 4] = [
    "Student enrollment statistics",
    "Course enrollment statistics",
    "System summary",
    "Back",
];

/// Run the statistics menu until "Back".
pub fn menu(ctx: &mut AppContext, prompt: &Prompt) -> anyhow::Result<()> {
    loop {
        println!("\n{}", header(&ctx.ui, "Statistics"));
        match prompt.select("VIEW STATISTICS", &MENU)? {
            0 => student_stats(ctx, prompt)?,
            1 => course_stats(ctx, prompt)?,
            2 => summary(ctx),
            _ => return Ok(()),
        }
    }
}

fn student_stats(ctx: &AppContext, prompt: &Prompt) -> anyhow::Result<()> {
    let student_id = prompt.input_u32("Student ID")?;
    match ctx.student_stats(student_id) {
        Ok(stats) => println!("{}\n{}\n{}", divider(&ctx.ui), stats, divider(&ctx.ui)),
        Err(err) => report_error(ctx, &err),
    }
    Ok(())
}

fn course_stats(ctx: &AppContext, prompt: &Prompt) -> anyhow::Result<()> {
    let course_id = prompt.input_u32("Course ID")?;
    match ctx.course_stats(course_id) {
        Ok(stats) => println!("{}\n{}\n{}", divider(&ctx.ui), stats, divider(&ctx.ui)),
        Err(err) => report_error(ctx, &err),
    }
    Ok(())
}

fn summary(ctx: &AppContext) {
    println!("{}", divider(&ctx.ui));
    println!(
        "{}",
        kv(&ctx.ui, "Total Students", &ctx.students.get_total_student_count().to_string())
    );
    println!(
        "{}",
        kv(&ctx.ui, "Active Students", &ctx.students.get_active_student_count().to_string())
    );
    println!(
        "{}",
        kv(&ctx.ui, "Total Courses", &ctx.courses.get_total_course_count().to_string())
    );
    println!(
        "{}",
        kv(&ctx.ui, "Active Courses", &ctx.courses.get_active_course_count().to_string())
    );
    println!(
        "{}",
        kv(
            &ctx.ui,
            "Total Enrollments",
            &ctx.enrollments.get_total_enrollment_count().to_string()
        )
    );
    println!(
        "{}",
        kv(
            &ctx.ui,
            "Active Enrollments",
            &ctx.enrollments.get_active_enrollment_count().to_string()
        )
    );
    println!(
        "{}",
        kv(
            &ctx.ui,
            "Completed Enrollments",
            &ctx.enrollments.get_completed_enrollment_count().to_string()
        )
    );
    println!("{}", divider(&ctx.ui));
}
