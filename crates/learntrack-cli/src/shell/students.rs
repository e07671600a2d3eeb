//! Student management menu.

use crate::app::AppContext;
use crate::ui::{badge, header, kv, students_table, Badge};

use super::{report_error, Prompt};

const MENU: [&str; 10] = [
    "Add student",
    "List all students",
    "List active students",
    "Find student by ID",
    "Find students by batch",
    "Update student",
    "Activate student",
    "Deactivate student",
    "Delete student",
    "Back",
];

/// Run the student menu until "Back".
pub fn menu(ctx: &mut AppContext, prompt: &Prompt) -> anyhow::Result<()> {
    loop {
        println!("\n{}", header(&ctx.ui, "Students"));
        match prompt.select("STUDENT MANAGEMENT", &MENU)? {
            0 => add(ctx, prompt)?,
            1 => println!("{}", students_table(&ctx.ui, &ctx.students.get_all_students())),
            2 => println!("{}", students_table(&ctx.ui, &ctx.students.get_active_students())),
            3 => find_by_id(ctx, prompt)?,
            4 => find_by_batch(ctx, prompt)?,
            5 => update(ctx, prompt)?,
            6 => set_active(ctx, prompt, true)?,
            7 => set_active(ctx, prompt, false)?,
            8 => delete(ctx, prompt)?,
            _ => return Ok(()),
        }
    }
}

fn add(ctx: &mut AppContext, prompt: &Prompt) -> anyhow::Result<()> {
    let first_name = prompt.input("First name")?;
    let last_name = prompt.input("Last name")?;
    let email = prompt.input("Email (optional)")?;
    let batch = prompt.input("Batch")?;

    match ctx.add_student(&first_name, &last_name, &email, &batch) {
        Ok(student) => {
            println!("{}", badge(&ctx.ui, Badge::Ok, "Student added"));
            println!("{}", kv(&ctx.ui, "Id", &student.id.to_string()));
            println!("{}", kv(&ctx.ui, "Name", &student.display_name()));
        }
        Err(err) => report_error(ctx, &err),
    }
    Ok(())
}

fn find_by_id(ctx: &AppContext, prompt: &Prompt) -> anyhow::Result<()> {
    let id = prompt.input_u32("Student ID")?;
    match ctx.students.find_student_by_id(id) {
        Ok(student) => println!("{}", students_table(&ctx.ui, &[student])),
        Err(err) => report_error(ctx, &err),
    }
    Ok(())
}

fn find_by_batch(ctx: &AppContext, prompt: &Prompt) -> anyhow::Result<()> {
    let batch = prompt.input("Batch")?;
    println!(
        "{}",
        students_table(&ctx.ui, &ctx.students.get_students_by_batch(&batch))
    );
    Ok(())
}

fn update(ctx: &mut AppContext, prompt: &Prompt) -> anyhow::Result<()> {
    let id = prompt.input_u32("Student ID")?;
    // Empty input keeps the existing value.
    let first_name = prompt.input("New first name (blank to keep)")?;
    let last_name = prompt.input("New last name (blank to keep)")?;
    let email = prompt.input("New email (blank to keep)")?;
    let batch = prompt.input("New batch (blank to keep)")?;

    match ctx.students.update_student(
        id,
        Some(first_name.as_str()),
        Some(last_name.as_str()),
        Some(email.as_str()),
        Some(batch.as_str()),
    ) {
        Ok(student) => {
            println!("{}", badge(&ctx.ui, Badge::Ok, "Student updated"));
            println!("{}", students_table(&ctx.ui, &[student]));
        }
        Err(err) => report_error(ctx, &err),
    }
    Ok(())
}

fn set_active(ctx: &mut AppContext, prompt: &Prompt, active: bool) -> anyhow::Result<()> {
    let id = prompt.input_u32("Student ID")?;
    let outcome = if active {
        ctx.students.activate_student(id)
    } else {
        ctx.students.deactivate_student(id)
    };
    match outcome {
        Ok(()) => {
            let label = if active {
                "Student activated"
            } else {
                "Student deactivated"
            };
            println!("{}", badge(&ctx.ui, Badge::Ok, label));
        }
        Err(err) => report_error(ctx, &err),
    }
    Ok(())
}

fn delete(ctx: &mut AppContext, prompt: &Prompt) -> anyhow::Result<()> {
    let id = prompt.input_u32("Student ID")?;
    if !prompt.confirm("Permanently delete this student?")? {
        println!("{}", badge(&ctx.ui, Badge::Info, "Delete cancelled"));
        return Ok(());
    }
    if ctx.students.delete_student(id) {
        println!("{}", badge(&ctx.ui, Badge::Ok, "Student deleted"));
    } else {
        println!(
            "{}",
            badge(&ctx.ui, Badge::Err, &format!("Student with ID {} not found", id))
        );
    }
    Ok(())
}
