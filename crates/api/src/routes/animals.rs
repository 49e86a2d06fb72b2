//! Route definitions for the `/animals` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::animals;
use crate::state::AppState;

/// Routes mounted at `/animals`.
///
/// ```text
/// GET    /            -> index (list view)
/// POST   /            -> create
/// GET    /seed        -> seed (replace all with sample data, JSON)
/// GET    /new         -> new_form
/// GET    /{id}        -> show (detail view)
/// PUT    /{id}        -> update
/// DELETE /{id}        -> destroy
/// GET    /{id}/edit   -> edit_form
/// ```
///
/// `/seed` and `/new` are static segments, so they take precedence over
/// the `/{id}` capture.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(animals::index).post(animals::create))
        .route("/seed", get(animals::seed))
        .route("/new", get(animals::new_form))
        .route(
            "/{id}",
            get(animals::show)
                .put(animals::update)
                .delete(animals::destroy),
        )
        .route("/{id}/edit", get(animals::edit_form))
}
