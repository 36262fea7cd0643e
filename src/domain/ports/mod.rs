use crate::domain::models::{
    booking::{Booking, NewBooking},
    fitness_class::{FitnessClass, NewFitnessClass},
};
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait ClassRepository: Send + Sync {
    async fn create(&self, class: &NewFitnessClass) -> Result<FitnessClass, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<FitnessClass>, AppError>;
    /// All classes, earliest first.
    async fn list_by_schedule(&self) -> Result<Vec<FitnessClass>, AppError>;
    async fn count(&self) -> Result<i64, AppError>;
}

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Consumes one slot of the class and inserts the booking in a single transaction.
    /// Fails with `NoCapacity` when the guarded decrement touches no row; any failure
    /// leaves both tables as they were.
    async fn create_and_consume_slot(&self, booking: &NewBooking) -> Result<Booking, AppError>;
    async fn find_by_id_and_email(&self, id: i64, email: &str) -> Result<Option<Booking>, AppError>;
    async fn find_by_class_and_email(&self, class_id: i64, email: &str) -> Result<Option<Booking>, AppError>;
    async fn list_by_email(&self, email: &str) -> Result<Vec<Booking>, AppError>;
}
