//! Axum route handlers for the live preview.

use std::convert::Infallible;

use axum::{
    extract::State,
    response::{
        sse::{Event, KeepAlive, Sse},
        Html,
    },
};
use tokio_stream::{wrappers::WatchStream, Stream, StreamExt};

use crate::errors::AppError;
use crate::preview::render_preview;
use crate::state::AppState;

/// GET /preview
///
/// The preview fragment for the current document.
pub async fn handle_get_preview(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let snapshot = state.store.current();
    Ok(Html(render_preview(&state.views, &snapshot.resume)?))
}

/// GET /events
///
/// Server-sent `revision` events, one per document change. Detached views
/// (the export page) refetch `/preview` when they see one.
pub async fn handle_events(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let stream = WatchStream::from_changes(state.store.subscribe()).map(|snapshot| {
        Ok(Event::default()
            .event("revision")
            .data(snapshot.revision.to_string()))
    });
    Sse::new(stream).keep_alive(KeepAlive::default())
}
