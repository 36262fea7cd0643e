use crate::domain::{models::fitness_class::{FitnessClass, NewFitnessClass}, ports::ClassRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::{PgConnection, PgPool, Row};

pub struct PostgresClassRepo {
    pool: PgPool,
}

impl PostgresClassRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

pub(crate) async fn consume_slot(conn: &mut PgConnection, class_id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("UPDATE fitness_classes SET available_slots = available_slots - 1 WHERE id = $1 AND available_slots > 0")
        .bind(class_id)
        .execute(conn)
        .await?;
    Ok(result.rows_affected())
}

#[async_trait]
impl ClassRepository for PostgresClassRepo {
    async fn create(&self, class: &NewFitnessClass) -> Result<FitnessClass, AppError> {
        sqlx::query_as::<_, FitnessClass>("INSERT INTO fitness_classes (name, scheduled_at, instructor, available_slots) VALUES ($1, $2, $3, $4) RETURNING *")
            .bind(&class.name).bind(class.scheduled_at).bind(&class.instructor).bind(class.available_slots)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }
    async fn find_by_id(&self, id: i64) -> Result<Option<FitnessClass>, AppError> {
        sqlx::query_as::<_, FitnessClass>("SELECT * FROM fitness_classes WHERE id = $1").bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }
    async fn list_by_schedule(&self) -> Result<Vec<FitnessClass>, AppError> {
        sqlx::query_as::<_, FitnessClass>("SELECT * FROM fitness_classes ORDER BY scheduled_at ASC, id ASC").fetch_all(&self.pool).await.map_err(AppError::Database)
    }
    async fn count(&self) -> Result<i64, AppError> {
        let row = sqlx::query("SELECT COUNT(*) as count FROM fitness_classes").fetch_one(&self.pool).await.map_err(AppError::Database)?;
        Ok(row.get::<i64, _>("count"))
    }
}
