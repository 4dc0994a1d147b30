use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/dashboard", get(handlers::get_dashboard))
        .route(
            "/api/transactions",
            get(handlers::list_transactions).post(handlers::add_transaction),
        )
        .route(
            "/api/tasks",
            get(handlers::list_tasks).post(handlers::add_task),
        )
        .route("/api/tasks/:id/toggle", post(handlers::toggle_task))
        .route("/api/alerts", get(handlers::list_alerts))
        .route("/api/alerts/:id/dismiss", post(handlers::dismiss_alert))
        .route("/api/achievements", get(handlers::get_achievements))
        .route("/api/learn", get(handlers::get_learn))
        .with_state(state)
}
