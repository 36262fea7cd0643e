use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone, PartialEq)]
pub struct Booking {
    pub id: i64,
    pub class_id: i64,
    pub client_name: String,
    pub client_email: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewBooking {
    pub class_id: i64,
    pub client_name: String,
    pub client_email: String,
    pub created_at: DateTime<Utc>,
}

impl NewBooking {
    pub fn new(class_id: i64, client_name: String, client_email: String) -> Self {
        Self {
            class_id,
            client_name,
            client_email,
            created_at: Utc::now(),
        }
    }
}

/// Which booking column the duplicate check compares against the requested class id.
///
/// `BookingId` reproduces the long-standing production rule, which matches a booking's
/// own id against the class id. `ClassId` compares the booking's class reference and is
/// what the rule is presumably meant to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateKey {
    #[default]
    BookingId,
    ClassId,
}

impl FromStr for DuplicateKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "booking_id" => Ok(DuplicateKey::BookingId),
            "class_id" => Ok(DuplicateKey::ClassId),
            other => Err(format!("unknown duplicate booking key '{}' (expected booking_id or class_id)", other)),
        }
    }
}

impl fmt::Display for DuplicateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DuplicateKey::BookingId => write!(f, "booking_id"),
            DuplicateKey::ClassId => write!(f, "class_id"),
        }
    }
}
