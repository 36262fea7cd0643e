pub mod booking;
pub mod fitness_class;
