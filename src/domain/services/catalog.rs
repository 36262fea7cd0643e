use std::sync::Arc;
use tracing::debug;

use crate::domain::models::fitness_class::{FitnessClass, NewFitnessClass};
use crate::domain::ports::ClassRepository;
use crate::domain::services::validation::is_blank;
use crate::error::AppError;

pub struct Catalog {
    repo: Arc<dyn ClassRepository>,
}

impl Catalog {
    pub fn new(repo: Arc<dyn ClassRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_classes(&self) -> Result<Vec<FitnessClass>, AppError> {
        self.repo.list_by_schedule().await
    }

    pub async fn get_class(&self, id: i64) -> Result<FitnessClass, AppError> {
        self.repo.find_by_id(id).await?
            .ok_or(AppError::NotFound("Fitness class not found".into()))
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        self.repo.count().await
    }

    /// Administrative insertion, used by first-run seeding.
    pub async fn create_class(&self, class: &NewFitnessClass) -> Result<FitnessClass, AppError> {
        if is_blank(&class.name) {
            return Err(AppError::Unprocessable("Class name must not be empty".into()));
        }
        if class.available_slots < 0 {
            return Err(AppError::Unprocessable("Available slots must not be negative".into()));
        }

        let created = self.repo.create(class).await?;
        debug!("Created class {} ({})", created.id, created.name);
        Ok(created)
    }
}
