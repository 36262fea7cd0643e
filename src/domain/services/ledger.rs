use std::sync::Arc;
use tracing::{debug, info};

use crate::domain::models::booking::{Booking, DuplicateKey, NewBooking};
use crate::domain::ports::BookingRepository;
use crate::domain::services::catalog::Catalog;
use crate::domain::services::validation::{is_blank, is_valid_email};
use crate::error::AppError;

pub struct BookingLedger {
    catalog: Arc<Catalog>,
    bookings: Arc<dyn BookingRepository>,
    duplicate_key: DuplicateKey,
}

impl BookingLedger {
    pub fn new(catalog: Arc<Catalog>, bookings: Arc<dyn BookingRepository>, duplicate_key: DuplicateKey) -> Self {
        Self { catalog, bookings, duplicate_key }
    }

    /// Validates the request in a fixed order and records the booking.
    ///
    /// Order: email shape, class lookup, remaining capacity, client name, duplicate check.
    /// Nothing is written until every check has passed; the insert and the slot
    /// decrement then happen in one transaction, which is the only place a slot
    /// is ever consumed.
    pub async fn create_booking(&self, class_id: i64, client_name: String, client_email: String) -> Result<Booking, AppError> {
        if !is_valid_email(&client_email) {
            return Err(AppError::Unprocessable("Invalid email format".into()));
        }

        let class = self.catalog.get_class(class_id).await?;

        if class.available_slots <= 0 {
            return Err(AppError::NoCapacity);
        }

        if is_blank(&client_name) {
            return Err(AppError::Unprocessable("Client name must not be empty".into()));
        }

        let existing = match self.duplicate_key {
            DuplicateKey::BookingId => self.bookings.find_by_id_and_email(class_id, &client_email).await?,
            DuplicateKey::ClassId => self.bookings.find_by_class_and_email(class_id, &client_email).await?,
        };

        if let Some(existing) = existing {
            debug!(
                "Duplicate booking rejected for class {} (matched booking {} by {})",
                class_id, existing.id, self.duplicate_key
            );
            return Err(AppError::Conflict("This class has already been booked by the client.".into()));
        }

        let booking = NewBooking::new(class.id, client_name, client_email);
        let created = self.bookings.create_and_consume_slot(&booking).await?;

        info!(
            "Booking {} confirmed for class {} ({} slots left)",
            created.id, class.id, class.available_slots - 1
        );
        Ok(created)
    }

    pub async fn list_bookings_by_email(&self, email: &str) -> Result<Vec<Booking>, AppError> {
        if !is_valid_email(email) {
            return Err(AppError::Validation("Invalid email format".into()));
        }

        let bookings = self.bookings.list_by_email(email).await?;
        if bookings.is_empty() {
            return Err(AppError::NotFound("No bookings found for this user".into()));
        }

        Ok(bookings)
    }
}
