use std::sync::Arc;

use bramble_dns_domain::{DomainError, RecordPayload};
use tracing::info;

use crate::ports::RecordRepository;

pub struct DeleteRecordUseCase {
    repo: Arc<dyn RecordRepository>,
}

impl DeleteRecordUseCase {
    pub fn new(repo: Arc<dyn RecordRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        host: &str,
        record_type: &str,
        data: Option<RecordPayload>,
    ) -> Result<(), DomainError> {
        if !self.repo.delete(host, record_type, data.as_ref()).await? {
            return Err(DomainError::NotFound(format!(
                "No {} record for {}",
                record_type, host
            )));
        }

        info!(
            host = %host,
            record_type = %record_type,
            whole_entry = data.is_none(),
            "Record deleted"
        );

        Ok(())
    }
}
