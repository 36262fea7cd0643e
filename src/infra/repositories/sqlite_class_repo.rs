use crate::domain::{models::fitness_class::{FitnessClass, NewFitnessClass}, ports::ClassRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::{Row, SqliteConnection, SqlitePool};

pub struct SqliteClassRepo {
    pool: SqlitePool,
}

impl SqliteClassRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// Guarded decrement, run only inside the booking transaction. Returns the affected row count.
pub(crate) async fn consume_slot(conn: &mut SqliteConnection, class_id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("UPDATE fitness_classes SET available_slots = available_slots - 1 WHERE id = ? AND available_slots > 0")
        .bind(class_id)
        .execute(conn)
        .await?;
    Ok(result.rows_affected())
}

#[async_trait]
impl ClassRepository for SqliteClassRepo {
    async fn create(&self, class: &NewFitnessClass) -> Result<FitnessClass, AppError> {
        sqlx::query_as::<_, FitnessClass>(
            "INSERT INTO fitness_classes (name, scheduled_at, instructor, available_slots)
             VALUES (?, ?, ?, ?)
             RETURNING *"
        )
            .bind(&class.name)
            .bind(class.scheduled_at)
            .bind(&class.instructor)
            .bind(class.available_slots)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<FitnessClass>, AppError> {
        sqlx::query_as::<_, FitnessClass>("SELECT * FROM fitness_classes WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_schedule(&self) -> Result<Vec<FitnessClass>, AppError> {
        sqlx::query_as::<_, FitnessClass>("SELECT * FROM fitness_classes ORDER BY scheduled_at ASC, id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let row = sqlx::query("SELECT COUNT(*) as count FROM fitness_classes")
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(row.get::<i64, _>("count"))
    }
}
