pub mod hero_powers;
pub mod heroes;
pub mod powers;

use axum::{
    extract::{rejection::PathRejection, Path},
    response::Html,
};

use crate::error::{AppError, AppResult};

pub async fn index() -> Html<&'static str> {
    Html("<h1>Code challenge</h1>")
}

/// A path id that is not an integer names no row, so it answers like a missing one.
pub(crate) fn resource_id(
    path: Result<Path<i64>, PathRejection>,
    not_found: &str,
) -> AppResult<i64> {
    path.map(|Path(id)| id)
        .map_err(|_| AppError::NotFound(not_found.to_string()))
}
