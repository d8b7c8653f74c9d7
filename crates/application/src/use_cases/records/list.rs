use std::collections::BTreeSet;
use std::sync::Arc;

use bramble_dns_domain::{DomainError, RecordView};

use crate::ports::RecordRepository;

pub struct ListRecordsUseCase {
    repo: Arc<dyn RecordRepository>,
}

impl ListRecordsUseCase {
    pub fn new(repo: Arc<dyn RecordRepository>) -> Self {
        Self { repo }
    }

    /// Every stored record, duplicates collapsed, ordered by host then type.
    pub async fn execute(&self) -> Result<Vec<RecordView>, DomainError> {
        let records = self.repo.list().await?;
        let unique: BTreeSet<RecordView> = records.into_iter().collect();
        Ok(unique.into_iter().collect())
    }
}
