pub mod sqlite_booking_repo;
pub mod sqlite_class_repo;

pub mod postgres_booking_repo;
pub mod postgres_class_repo;
