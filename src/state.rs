use crate::ledger::Ledger;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub ledger: Arc<Mutex<Ledger>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, ledger: Ledger) -> Self {
        Self {
            data_path,
            ledger: Arc::new(Mutex::new(ledger)),
        }
    }
}
