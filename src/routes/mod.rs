use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use handlers::*;

use crate::store::BoardStore;

mod handlers;

pub struct _AppState {
    pub store: BoardStore,
}

type AppState = &'static _AppState;

pub fn make_routes(state: _AppState) -> Router {
    let app_state: AppState = Box::leak(Box::new(state));

    Router::new()
        .route("/api/tasks", get(get_tasks))
        .route("/api/tasks", post(update_tasks))
        // the kanban page is served from another port during development
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
