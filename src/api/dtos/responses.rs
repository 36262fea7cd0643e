use chrono::{DateTime, FixedOffset};
use chrono_tz::Tz;
use serde::Serialize;

use crate::domain::models::{booking::Booking, fitness_class::FitnessClass};

#[derive(Serialize, Debug)]
pub struct ClassOut {
    pub id: i64,
    pub name: String,
    pub datetime: DateTime<FixedOffset>,
    pub instructor: String,
    pub available_slots: i32,
}

impl ClassOut {
    /// Presents the stored UTC time in the studio's local zone.
    pub fn localized(class: FitnessClass, tz: Tz) -> Self {
        Self {
            id: class.id,
            name: class.name,
            datetime: class.scheduled_at.with_timezone(&tz).fixed_offset(),
            instructor: class.instructor,
            available_slots: class.available_slots,
        }
    }
}

#[derive(Serialize, Debug)]
pub struct BookingOut {
    pub id: i64,
    pub class_id: i64,
    pub client_name: String,
    pub client_email: String,
}

impl From<Booking> for BookingOut {
    fn from(booking: Booking) -> Self {
        Self {
            id: booking.id,
            class_id: booking.class_id,
            client_name: booking.client_name,
            client_email: booking.client_email,
        }
    }
}
