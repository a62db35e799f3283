//! Axum route handlers for the editor and the document API.

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Html,
    Json,
};
use serde::Serialize;
use tracing::{debug, warn};

use crate::editor::ops::EditOp;
use crate::editor::view::render_editor;
use crate::errors::AppError;
use crate::preview::render_preview;
use crate::state::AppState;
use crate::store::Snapshot;

#[derive(Debug, Serialize)]
pub struct OpResponse {
    pub revision: u64,
    pub changed: bool,
    pub preview_html: String,
    /// Present only when the op added or removed controls.
    pub editor_html: Option<String>,
}

/// GET /editor
pub async fn handle_get_editor(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let snapshot = state.store.current();
    Ok(Html(render_editor(&state.views, &snapshot.resume)?))
}

/// GET /api/v1/resume
pub async fn handle_get_resume(State(state): State<AppState>) -> Json<Snapshot> {
    Json(state.store.current())
}

/// POST /api/v1/resume/ops
///
/// Applies one edit and returns the re-rendered preview. Edits addressed at
/// an entry or bullet that no longer exists are accepted as no-ops.
pub async fn handle_apply_op(
    State(state): State<AppState>,
    payload: Result<Json<EditOp>, JsonRejection>,
) -> Result<Json<OpResponse>, AppError> {
    let Json(op) = payload.map_err(|rejection| AppError::Validation(rejection.body_text()))?;

    let applied = state.store.apply(&op);
    if applied.changed {
        debug!(
            "Applied {} at revision {}",
            op.name(),
            applied.snapshot.revision
        );
    } else if op.addresses_existing(&applied.snapshot.resume) {
        debug!("{} rewrote a field with its current value", op.name());
    } else {
        warn!("{} addressed a missing entry or item", op.name());
    }

    let resume = &applied.snapshot.resume;
    let editor_html = if op.reshapes_editor() {
        Some(render_editor(&state.views, resume)?)
    } else {
        None
    };

    Ok(Json(OpResponse {
        revision: applied.snapshot.revision,
        changed: applied.changed,
        preview_html: render_preview(&state.views, resume)?,
        editor_html,
    }))
}
