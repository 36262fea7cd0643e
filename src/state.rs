use std::sync::Arc;
use crate::domain::ports::{BookingRepository, ClassRepository};
use crate::domain::services::{catalog::Catalog, ledger::BookingLedger};
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub class_repo: Arc<dyn ClassRepository>,
    pub booking_repo: Arc<dyn BookingRepository>,
    pub catalog: Arc<Catalog>,
    pub ledger: Arc<BookingLedger>,
}

impl AppState {
    pub fn new(config: Config, class_repo: Arc<dyn ClassRepository>, booking_repo: Arc<dyn BookingRepository>) -> Self {
        let catalog = Arc::new(Catalog::new(class_repo.clone()));
        let ledger = Arc::new(BookingLedger::new(catalog.clone(), booking_repo.clone(), config.duplicate_key));

        Self {
            config,
            class_repo,
            booking_repo,
            catalog,
            ledger,
        }
    }
}
