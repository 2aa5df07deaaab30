/// HTTP route table
use crate::{api, middleware, state::AppState};
use axum::{
    middleware as axum_middleware,
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the full application router
///
/// Owner-scoped routes are wrapped in the access gate; account creation,
/// login and the health probe are public.
pub fn create_router(app_state: AppState) -> Router {
    // Public routes (no auth required)
    let public_routes = Router::new()
        .route("/health", get(api::health::health))
        .route("/create-account", post(api::accounts::create_account))
        .route("/login", post(api::accounts::login));

    // Protected routes (auth required)
    let protected_routes = Router::new()
        .route("/Get-User", get(api::accounts::get_user))
        .route("/Add-Note", post(api::notes::add_note))
        .route("/Edit-Note/:noteId", put(api::notes::edit_note))
        .route("/Get-All-Notes", get(api::notes::get_all_notes))
        .route("/Get-All-Notes/", get(api::notes::get_all_notes))
        .route("/Delete-Note/:noteId", delete(api::notes::delete_note))
        .route(
            "/Update-Note-Pinned/:noteId",
            put(api::notes::update_note_pinned),
        )
        .route("/Search-Note", get(api::notes::search_notes))
        .route("/Search-Note/", get(api::notes::search_notes))
        .layer(axum_middleware::from_fn_with_state(
            Arc::clone(&app_state.tokens),
            middleware::access_gate,
        ));

    public_routes
        .merge(protected_routes)
        .layer(
            TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
