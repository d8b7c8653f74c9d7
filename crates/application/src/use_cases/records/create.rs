use std::sync::Arc;

use bramble_dns_domain::{DomainError, RecordRequest};
use tracing::info;

use crate::ports::RecordRepository;

pub struct CreateRecordUseCase {
    repo: Arc<dyn RecordRepository>,
}

impl CreateRecordUseCase {
    pub fn new(repo: Arc<dyn RecordRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, request: RecordRequest) -> Result<(), DomainError> {
        self.repo.create(&request).await?;

        info!(
            host = %request.host,
            record_type = %request.record_type,
            ttl = request.ttl,
            "Record created"
        );

        Ok(())
    }
}
