use axum::extract::State;
use axum::response::Redirect;
use axum::routing::post;
use axum::Router;

use crate::extractors::ReturnTo;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/theme", post(toggle))
}

/// POST /theme: flip light/dark and go back where we came from
async fn toggle(State(state): State<AppState>, ReturnTo(back): ReturnTo) -> Redirect {
    state.theme.lock().await.toggle();
    Redirect::to(&back)
}
