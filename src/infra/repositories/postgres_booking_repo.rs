use crate::domain::{models::booking::{Booking, NewBooking}, ports::BookingRepository};
use crate::error::AppError;
use crate::infra::repositories::postgres_class_repo::consume_slot;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresBookingRepo {
    pool: PgPool,
}

impl PostgresBookingRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingRepository for PostgresBookingRepo {
    async fn create_and_consume_slot(&self, booking: &NewBooking) -> Result<Booking, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;
        if consume_slot(&mut *tx, booking.class_id).await.map_err(AppError::Database)? == 0 {
            return Err(AppError::NoCapacity);
        }
        let created = sqlx::query_as::<_, Booking>("INSERT INTO bookings (class_id, client_name, client_email, created_at) VALUES ($1, $2, $3, $4) RETURNING *").bind(booking.class_id).bind(&booking.client_name).bind(&booking.client_email).bind(booking.created_at).fetch_one(&mut *tx).await.map_err(AppError::Database)?;
        tx.commit().await.map_err(AppError::Database)?;
        Ok(created)
    }
    async fn find_by_id_and_email(&self, id: i64, email: &str) -> Result<Option<Booking>, AppError> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1 AND client_email = $2 LIMIT 1").bind(id).bind(email).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }
    async fn find_by_class_and_email(&self, class_id: i64, email: &str) -> Result<Option<Booking>, AppError> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE class_id = $1 AND client_email = $2 LIMIT 1").bind(class_id).bind(email).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }
    async fn list_by_email(&self, email: &str) -> Result<Vec<Booking>, AppError> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE client_email = $1 ORDER BY id ASC").bind(email).fetch_all(&self.pool).await.map_err(AppError::Database)
    }
}
