use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use tracing::{info, instrument};

use super::dto::{BookingCreatedResponse, BookingList, BookingListResponse, CreateBookingRequest};
use super::repo_types::NewBooking;
use crate::{error::ApiError, state::AppState};

/// GET /api/bookings
#[instrument(skip(state))]
pub async fn list_bookings(
    State(state): State<AppState>,
) -> Result<Json<BookingListResponse>, ApiError> {
    let bookings = state
        .store
        .list_bookings()
        .await
        .map_err(ApiError::internal("Failed to fetch bookings"))?;

    Ok(Json(BookingListResponse {
        success: true,
        data: BookingList { bookings },
    }))
}

/// POST /api/bookings
#[instrument(skip(state, payload))]
pub async fn create_booking(
    State(state): State<AppState>,
    payload: Result<Json<CreateBookingRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<BookingCreatedResponse>), ApiError> {
    let Json(req) = payload?;
    let booking = NewBooking::try_from(req)?;

    let booking_id = state
        .store
        .create_booking(&booking)
        .await
        .map_err(ApiError::internal("Failed to create booking"))?;

    info!(booking_id, service_id = ?booking.service_id, "booking created");
    Ok((
        StatusCode::CREATED,
        Json(BookingCreatedResponse {
            success: true,
            message: "Booking created successfully",
            booking_id,
        }),
    ))
}
