pub mod booking;
pub mod classes;
pub mod health;
