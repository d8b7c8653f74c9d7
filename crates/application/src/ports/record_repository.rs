use async_trait::async_trait;
use bramble_dns_domain::{DomainError, RecordPayload, RecordRequest, RecordView};

/// Management access to the served record set.
///
/// `update` and `delete` return `Ok(false)` when nothing matched, leaving the
/// not-found decision to the caller.
#[async_trait]
pub trait RecordRepository: Send + Sync {
    async fn create(&self, request: &RecordRequest) -> Result<(), DomainError>;

    async fn list(&self) -> Result<Vec<RecordView>, DomainError>;

    async fn update(
        &self,
        request: &RecordRequest,
        old_data: &RecordPayload,
    ) -> Result<bool, DomainError>;

    /// Without `data` the whole host/type entry goes away.
    async fn delete(
        &self,
        host: &str,
        record_type: &str,
        data: Option<&RecordPayload>,
    ) -> Result<bool, DomainError>;
}
