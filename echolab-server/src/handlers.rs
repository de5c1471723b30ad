use crate::models::{SearchQuery, StatusResponse, UserQuery};
use crate::state::AppState;

use axum::{
    extract::{Query, State},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    Json,
};
use echolab_core::{render, Variant};
use tracing::debug;

/// Handler for `GET /`.
/// What it serves depends on the configured [`Variant`].
#[axum::debug_handler]
pub async fn root(State(state): State<AppState>) -> Response {
    let config = &state.config;
    debug!(variant = ?config.variant, "serving root route");
    match config.variant {
        Variant::Presence => {
            // Empty counts as unset, like the truthiness check it mirrors.
            let key_present = !config.my_api_key.as_deref().unwrap_or("").is_empty();
            Html(render::presence_banner(key_present)).into_response()
        }
        Variant::Reveal => {
            Html(render::reveal_banner(config.my_api_key.as_deref())).into_response()
        }
        Variant::Status => Json(StatusResponse {
            message: "Hello from DevSecOps demo app!".to_string(),
            api_key: if config.api_key_from_env {
                "Loaded from env"
            } else {
                "Not set"
            }
            .to_string(),
        })
        .into_response(),
        Variant::Landing => Html(render::landing_page()).into_response(),
    }
}

/// Handler for `GET /user`.
/// Echoes the `id` query parameter into the page body verbatim (the
/// intentionally vulnerable reflected-input endpoint).
///
/// The `Option<Query<_>>` extractor means a malformed query string is
/// treated as absent rather than rejected with a 400.
#[axum::debug_handler]
pub async fn user_lookup(query: Option<Query<UserQuery>>) -> Html<String> {
    let id = query.and_then(|Query(params)| params.id).unwrap_or_default();
    debug!(id = %id, "echoing user lookup");
    Html(render::user_lookup_page(&id))
}

/// Handler for `GET /search`.
/// Echoes the `q` query parameter into the page body verbatim (reflected
/// XSS by design).
#[axum::debug_handler]
pub async fn search(query: Option<Query<SearchQuery>>) -> Html<String> {
    let q = query.and_then(|Query(params)| params.q).unwrap_or_default();
    debug!(q = %q, "echoing search query");
    Html(render::search_results_page(&q))
}

/// Fallback for unmatched routes, in the shape Express prints by default.
pub async fn not_found(uri: Uri) -> (StatusCode, String) {
    (StatusCode::NOT_FOUND, format!("Cannot GET {}", uri.path()))
}
