//! Handlers for the `/animals` resource.
//!
//! View routes render HTML; mutating routes redirect after the write
//! (post/redirect/get); the seed route answers with JSON.

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::{Form, Json};

use menagerie_core::animal::{AnimalFields, AnimalForm};
use menagerie_core::error::CoreError;
use menagerie_core::types::DbId;
use menagerie_db::models::animal::{starter_animals, Animal};
use menagerie_db::repositories::AnimalRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::views;

/// GET / -- redirect to the animal list.
///
/// A plain 302 Found, so bookmarks and old links keep landing on /animals.
pub async fn root_redirect() -> Response {
    (StatusCode::FOUND, [(header::LOCATION, "/animals")]).into_response()
}

/// GET /animals -- render the list view.
pub async fn index(State(state): State<AppState>) -> AppResult<Html<String>> {
    let animals = AnimalRepo::list(&state.pool).await?;
    Ok(Html(views::animals::index(&animals)))
}

/// GET /animals/new -- render the creation form.
pub async fn new_form() -> Html<String> {
    Html(views::animals::new_form())
}

/// POST /animals -- decode the form, insert, redirect to the list.
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<AnimalForm>,
) -> AppResult<Redirect> {
    let fields = AnimalFields::try_from(form)?;
    AnimalRepo::create(&state.pool, &fields).await?;
    Ok(Redirect::to("/animals"))
}

/// GET /animals/{id} -- render the detail view.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Html<String>> {
    let animal = find_animal(&state, id).await?;
    Ok(Html(views::animals::show(&animal)))
}

/// GET /animals/{id}/edit -- render the edit form.
pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Html<String>> {
    let animal = find_animal(&state, id).await?;
    Ok(Html(views::animals::edit_form(&animal)))
}

/// PUT /animals/{id} -- replace every field, redirect to the detail view.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Form(form): Form<AnimalForm>,
) -> AppResult<Redirect> {
    let fields = AnimalFields::try_from(form)?;
    AnimalRepo::replace(&state.pool, id, &fields)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Animal",
            id,
        }))?;
    Ok(Redirect::to(&format!("/animals/{id}")))
}

/// DELETE /animals/{id} -- remove the record, redirect to the list.
pub async fn destroy(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Redirect> {
    let deleted = AnimalRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Animal",
            id,
        }));
    }
    Ok(Redirect::to("/animals"))
}

/// GET /animals/seed -- replace the whole collection with the fixed
/// sample set and return the inserted rows as JSON.
pub async fn seed(State(state): State<AppState>) -> AppResult<Json<Vec<Animal>>> {
    let removed = AnimalRepo::delete_all(&state.pool).await?;
    let animals = AnimalRepo::create_many(&state.pool, &starter_animals()).await?;
    tracing::info!(removed, inserted = animals.len(), "Seeded animal collection");
    Ok(Json(animals))
}

async fn find_animal(state: &AppState, id: DbId) -> Result<Animal, AppError> {
    AnimalRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Animal",
            id,
        }))
}
