use axum::{extract::State, response::Html};
use minijinja::context;

use crate::editor::view::render_editor;
use crate::errors::AppError;
use crate::preview::render_preview;
use crate::state::AppState;

/// GET /
///
/// The editor and the live preview side by side. Only the preview is printed.
pub async fn handle_index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let snapshot = state.store.current();
    let html = state.views.render(
        "page.html",
        context! {
            revision => snapshot.revision,
            editor_html => render_editor(&state.views, &snapshot.resume)?,
            preview_html => render_preview(&state.views, &snapshot.resume)?,
        },
    )?;
    Ok(Html(html))
}
