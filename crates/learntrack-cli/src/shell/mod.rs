//! Interactive menu loop.
//!
//! The shell translates menu choices into service calls and renders the
//! results. Service failures are reported and the loop continues; nothing the
//! user enters is fatal to the process.

mod courses;
mod enrollments;
mod prompt;
mod reports;
mod students;

use crate::app::AppContext;
use crate::ui::{badge, Badge};

pub use prompt::{input_closed, Prompt};

const MAIN_MENU: [&str; 5] = [
    "Student Management",
    "Course Management",
    "Enrollment Management",
    "View Statistics",
    "Exit",
];

/// Run the main menu until the user exits or input is closed.
pub fn run(ctx: &mut AppContext) -> anyhow::Result<()> {
    let prompt = Prompt::new(ctx.ui.is_interactive());

    loop {
        let choice = match prompt.select("MAIN MENU", &MAIN_MENU) {
            Ok(choice) => choice,
            Err(err) if input_closed(&err) => return Ok(()),
            Err(err) => return Err(err),
        };

        let result = match choice {
            0 => students::menu(ctx, &prompt),
            1 => courses::menu(ctx, &prompt),
            2 => enrollments::menu(ctx, &prompt),
            3 => reports::menu(ctx, &prompt),
            _ => return Ok(()),
        };

        match result {
            Ok(()) => {}
            Err(err) if input_closed(&err) => return Ok(()),
            Err(err) => return Err(err),
        }
    }
}

/// Render a service error and keep going.
pub(crate) fn report_error(ctx: &AppContext, err: &learntrack_core::LearnTrackError) {
    println!("{}", badge(&ctx.ui, Badge::Err, &err.to_string()));
}
