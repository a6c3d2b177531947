use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::{DefaultBodyLimit, FromRequestParts, Path, State},
    http::{StatusCode, request::Parts},
    routing::{any, get},
};
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::{
    AppState,
    error::{AppError, AppResult},
    models::{Movie, MovieChanges, MovieId, NewMovie, parse_movie_id},
};

const MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/movies",
            get(list_movies)
                .head(collection_method_not_allowed)
                .post(create_movie)
                .fallback(collection_method_not_allowed),
        )
        .route("/movies/", any(missing_id))
        // The id takes the rest of the path so trailing segments are rejected as bad ids.
        .route(
            "/movies/{*id}",
            get(get_movie)
                .head(item_method_not_allowed)
                .put(update_movie)
                .delete(delete_movie)
                .fallback(item_method_not_allowed),
        )
        .with_state(state)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
}

/// Id taken from the path after `/movies/`. Any undecodable or non-integer suffix
/// is rejected as an invalid id.
pub struct MovieIdParam(pub MovieId);

impl<S: Send + Sync> FromRequestParts<S> for MovieIdParam {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw_id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::InvalidId)?;
        parse_movie_id(&raw_id).map(Self)
    }
}

pub async fn list_movies(State(state): State<Arc<AppState>>) -> Json<Vec<Movie>> {
    Json(state.store.list())
}

pub async fn create_movie(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> AppResult<(StatusCode, Json<Movie>)> {
    let new: NewMovie = serde_json::from_slice(&body).map_err(AppError::InvalidBody)?;
    let movie = state.store.create(new);
    debug!(id = movie.id, "created movie");
    Ok((StatusCode::CREATED, Json(movie)))
}

pub async fn get_movie(
    State(state): State<Arc<AppState>>,
    MovieIdParam(id): MovieIdParam,
) -> AppResult<Json<Movie>> {
    state.store.get(id).map(Json).ok_or(AppError::NotFound(id))
}

pub async fn update_movie(
    State(state): State<Arc<AppState>>,
    MovieIdParam(id): MovieIdParam,
    body: Bytes,
) -> AppResult<Json<Movie>> {
    if !state.store.contains(id) {
        return Err(AppError::NotFound(id));
    }

    let changes: MovieChanges = serde_json::from_slice(&body).map_err(AppError::InvalidBody)?;

    // The movie may have been deleted while the body was being decoded.
    let movie = state.store.update(id, changes).ok_or(AppError::NotFound(id))?;
    debug!(id, "updated movie");
    Ok(Json(movie))
}

pub async fn delete_movie(
    State(state): State<Arc<AppState>>,
    MovieIdParam(id): MovieIdParam,
) -> AppResult<StatusCode> {
    if !state.store.delete(id) {
        return Err(AppError::NotFound(id));
    }
    debug!(id, "deleted movie");
    Ok(StatusCode::NO_CONTENT)
}

async fn collection_method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

// The id is validated first, so a bad id wins over a bad method.
async fn item_method_not_allowed(_: MovieIdParam) -> AppError {
    AppError::MethodNotAllowed
}

async fn missing_id() -> AppError {
    AppError::InvalidId
}
