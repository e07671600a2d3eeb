//! Course management menu.

use crate::app::AppContext;
use crate::ui::{badge, courses_table, header, kv, Badge};

use super::{report_error, Prompt};

const MENU: [&str; 10] = [
    "Add course",
    "List all courses",
    "List active courses",
    "Find course by ID",
    "Search courses by name",
    "Search courses by duration",
    "Update course",
    "Toggle course status",
    "Delete course",
    "Back",
];

/// Run the course menu until "Back".
pub fn menu(ctx: &mut AppContext, prompt: &Prompt) -> anyhow::Result<()> {
    loop {
        println!("\n{}", header(&ctx.ui, "Courses"));
        match prompt.select("COURSE MANAGEMENT", &MENU)? {
            0 => add(ctx, prompt)?,
            1 => println!("{}", courses_table(&ctx.ui, &ctx.courses.get_all_courses())),
            2 => println!("{}", courses_table(&ctx.ui, &ctx.courses.get_active_courses())),
            3 => find_by_id(ctx, prompt)?,
            4 => search_by_name(ctx, prompt)?,
            5 => search_by_duration(ctx, prompt)?,
            6 => update(ctx, prompt)?,
            7 => toggle_status(ctx, prompt)?,
            8 => delete(ctx, prompt)?,
            _ => return Ok(()),
        }
    }
}

fn add(ctx: &mut AppContext, prompt: &Prompt) -> anyhow::Result<()> {
    let name = prompt.input("Course name")?;
    let description = prompt.input("Description")?;
    let weeks = prompt.input_u32("Duration in weeks")?;

    match ctx.add_course(&name, &description, weeks) {
        Ok(course) => {
            println!("{}", badge(&ctx.ui, Badge::Ok, "Course added"));
            println!("{}", kv(&ctx.ui, "Id", &course.id.to_string()));
            println!("{}", kv(&ctx.ui, "Name", &course.name));
        }
        Err(err) => report_error(ctx, &err),
    }
    Ok(())
}

fn find_by_id(ctx: &AppContext, prompt: &Prompt) -> anyhow::Result<()> {
    let id = prompt.input_u32("Course ID")?;
    match ctx.courses.find_course_by_id(id) {
        Ok(course) => println!("{}", courses_table(&ctx.ui, &[course])),
        Err(err) => report_error(ctx, &err),
    }
    Ok(())
}

fn search_by_name(ctx: &AppContext, prompt: &Prompt) -> anyhow::Result<()> {
    let term = prompt.input("Name contains")?;
    println!(
        "{}",
        courses_table(&ctx.ui, &ctx.courses.get_courses_by_name(&term))
    );
    Ok(())
}

fn search_by_duration(ctx: &AppContext, prompt: &Prompt) -> anyhow::Result<()> {
    let weeks = prompt.input_u32("Duration in weeks")?;
    println!(
        "{}",
        courses_table(&ctx.ui, &ctx.courses.get_courses_by_duration(weeks))
    );
    Ok(())
}

fn update(ctx: &mut AppContext, prompt: &Prompt) -> anyhow::Result<()> {
    let id = prompt.input_u32("Course ID")?;
    let name = prompt.input("New name (blank to keep)")?;
    let description = prompt.input("New description (blank to keep)")?;
    // 0 keeps the existing duration.
    let weeks = prompt.input_u32("New duration in weeks (0 to keep)")?;
    let weeks = if weeks == 0 { None } else { Some(weeks) };

    match ctx
        .courses
        .update_course(id, Some(name.as_str()), Some(description.as_str()), weeks)
    {
        Ok(course) => {
            println!("{}", badge(&ctx.ui, Badge::Ok, "Course updated"));
            println!("{}", courses_table(&ctx.ui, &[course]));
        }
        Err(err) => report_error(ctx, &err),
    }
    Ok(())
}

fn toggle_status(ctx: &mut AppContext, prompt: &Prompt) -> anyhow::Result<()> {
    let id = prompt.input_u32("Course ID")?;
    match ctx.courses.toggle_course_status(id) {
        Ok(course) => {
            let label = if course.active {
                "Course activated"
            } else {
                "Course deactivated"
            };
            println!("{}", badge(&ctx.ui, Badge::Ok, label));
        }
        Err(err) => report_error(ctx, &err),
    }
    Ok(())
}

fn delete(ctx: &mut AppContext, prompt: &Prompt) -> anyhow::Result<()> {
    let id = prompt.input_u32("Course ID")?;
    if !prompt.confirm("Permanently delete this course?")? {
        println!("{}", badge(&ctx.ui, Badge::Info, "Delete cancelled"));
        return Ok(());
    }
    if ctx.courses.delete_course(id) {
        println!("{}", badge(&ctx.ui, Badge::Ok, "Course deleted"));
    } else {
        println!(
            "{}",
            badge(&ctx.ui, Badge::Err, &format!("Course with ID {} not found", id))
        );
    }
    Ok(())
}
