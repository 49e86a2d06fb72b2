pub mod animals;
pub mod health;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the application route tree.
///
/// ```text
/// GET  /            -> redirect to /animals
/// /animals...       -> animal CRUD + seed (see animals::router)
/// ```
///
/// The health route is merged separately in `main.rs`, and unmatched
/// paths fall through to the static asset directory.
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::animals::root_redirect))
        .nest("/animals", animals::router())
}
