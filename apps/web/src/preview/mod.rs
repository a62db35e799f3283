//! Preview View: a pure function from resume to printable layout.

pub mod handlers;
pub mod layout;

use crate::errors::AppError;
use crate::models::resume::Resume;
use crate::views::Views;

pub use layout::layout;

pub fn render_preview(views: &Views, resume: &Resume) -> Result<String, AppError> {
    views.render("preview.html", layout(resume))
}
