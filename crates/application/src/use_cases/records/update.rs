use std::sync::Arc;

use bramble_dns_domain::{DomainError, RecordPayload, RecordRequest};
use tracing::info;

use crate::ports::RecordRepository;

pub struct UpdateRecordUseCase {
    repo: Arc<dyn RecordRepository>,
}

impl UpdateRecordUseCase {
    pub fn new(repo: Arc<dyn RecordRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        request: RecordRequest,
        old_data: RecordPayload,
    ) -> Result<(), DomainError> {
        if !self.repo.update(&request, &old_data).await? {
            return Err(DomainError::NotFound(format!(
                "No {} record for {} matches the old data",
                request.record_type, request.host
            )));
        }

        info!(
            host = %request.host,
            record_type = %request.record_type,
            "Record updated"
        );

        Ok(())
    }
}
