use chrono::{NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;
use tracing::info;

use crate::domain::models::fitness_class::NewFitnessClass;
use crate::domain::services::catalog::Catalog;
use crate::error::AppError;

/// (name, hour of day, instructor, slots) for the first-run catalog, all on 2025-06-10.
const SAMPLE_CLASSES: [(&str, u32, &str, i32); 3] = [
    ("Yoga", 7, "Ram", 5),
    ("Zumba", 8, "Rohit", 10),
    ("HIIT", 9, "Alice", 8),
];

pub fn sample_classes(tz: Tz) -> Vec<NewFitnessClass> {
    let day = NaiveDate::from_ymd_opt(2025, 6, 10).expect("valid seed date");

    SAMPLE_CLASSES
        .iter()
        .filter_map(|&(name, hour, instructor, slots)| {
            let local = day.and_hms_opt(hour, 0, 0)?;
            let scheduled_at = tz.from_local_datetime(&local).single()?.with_timezone(&Utc);
            Some(NewFitnessClass::new(name, scheduled_at, instructor, slots))
        })
        .collect()
}

/// Inserts the sample classes when the catalog is empty. Returns how many were inserted.
pub async fn seed_if_empty(catalog: &Catalog, tz: Tz) -> Result<usize, AppError> {
    if catalog.count().await? > 0 {
        info!("Catalog already populated, skipping sample data");
        return Ok(0);
    }

    let classes = sample_classes(tz);
    for class in &classes {
        catalog.create_class(class).await?;
    }

    info!("Seeded {} sample classes", classes.len());
    Ok(classes.len())
}
