use axum::{extract::State, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::responses::ClassOut;
use crate::error::AppError;
use std::sync::Arc;

pub async fn list_classes(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let tz = state.config.studio_timezone;
    let classes: Vec<ClassOut> = state.catalog.list_classes().await?
        .into_iter()
        .map(|class| ClassOut::localized(class, tz))
        .collect();

    Ok(Json(classes))
}
