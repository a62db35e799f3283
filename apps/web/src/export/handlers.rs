use axum::{
    extract::{Query, State},
    response::Html,
};
use minijinja::context;
use serde::Deserialize;

use crate::errors::AppError;
use crate::preview::render_preview;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ExportQuery {
    /// Open the print dialog on load. Defaults to true.
    pub print: Option<bool>,
}

/// GET /export
///
/// A page holding nothing but the preview at paper width. The browser's
/// print dialog (and its "Save as PDF" target) does the rest; whatever the
/// user chooses there is not observed.
pub async fn handle_export(
    State(state): State<AppState>,
    Query(query): Query<ExportQuery>,
) -> Result<Html<String>, AppError> {
    let snapshot = state.store.current();
    let name = snapshot.resume.personal_info.full_name.trim();
    let title = if name.is_empty() {
        "Resume".to_string()
    } else {
        format!("{name} - Resume")
    };

    let html = state.views.render(
        "export.html",
        context! {
            title => title,
            auto_print => query.print.unwrap_or(true),
            preview_html => render_preview(&state.views, &snapshot.resume)?,
        },
    )?;
    Ok(Html(html))
}
