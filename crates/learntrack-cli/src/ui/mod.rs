//! Terminal output: mode routing, theming, and rendering primitives.

mod context;
mod mode;
mod render;
pub mod theme;

pub use context::UiContext;
pub use mode::OutputMode;
pub use render::{
    badge, banner, courses_table, divider, enrollments_table, header, hint, kv, students_table,
};
pub use theme::Badge;
