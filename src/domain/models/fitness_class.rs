use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone, PartialEq)]
pub struct FitnessClass {
    pub id: i64,
    pub name: String,
    pub scheduled_at: DateTime<Utc>,
    pub instructor: String,
    pub available_slots: i32,
}

/// A class that has not been persisted yet; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewFitnessClass {
    pub name: String,
    pub scheduled_at: DateTime<Utc>,
    pub instructor: String,
    pub available_slots: i32,
}

impl NewFitnessClass {
    pub fn new(name: impl Into<String>, scheduled_at: DateTime<Utc>, instructor: impl Into<String>, available_slots: i32) -> Self {
        Self {
            name: name.into(),
            scheduled_at,
            instructor: instructor.into(),
            available_slots,
        }
    }
}
