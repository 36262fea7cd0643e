use axum::{extract::State, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::payload::{AppJson, AppQuery};
use crate::api::dtos::requests::{BookingRequest, BookingsQuery};
use crate::api::dtos::responses::BookingOut;
use crate::domain::services::validation::{EMAIL_MAX_LEN, EMAIL_MIN_LEN};
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    AppJson(payload): AppJson<BookingRequest>,
) -> Result<impl IntoResponse, AppError> {
    info!("create_booking: class {} requested", payload.class_id);

    let created = state.ledger
        .create_booking(payload.class_id, payload.client_name, payload.client_email)
        .await?;

    Ok(Json(BookingOut::from(created)))
}

pub async fn list_bookings(
    State(state): State<Arc<AppState>>,
    AppQuery(query): AppQuery<BookingsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let email = query.email
        .ok_or(AppError::Unprocessable("Query parameter 'email' is required".into()))?;

    let len = email.chars().count();
    if !(EMAIL_MIN_LEN..=EMAIL_MAX_LEN).contains(&len) {
        return Err(AppError::Unprocessable(format!(
            "Query parameter 'email' must be between {} and {} characters",
            EMAIL_MIN_LEN, EMAIL_MAX_LEN
        )));
    }

    let bookings: Vec<BookingOut> = state.ledger.list_bookings_by_email(&email).await?
        .into_iter()
        .map(BookingOut::from)
        .collect();

    Ok(Json(bookings))
}
