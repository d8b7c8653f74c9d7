use crate::dns::codec::{parse_owner, render_record, to_resource, RecordTypeMapper};
use crate::dns::store::{LookupKey, RecordStore, SnapshotPersister};
use async_trait::async_trait;
use bramble_dns_application::ports::RecordRepository;
use bramble_dns_domain::{DomainError, RecordPayload, RecordRequest, RecordType, RecordView};
use std::str::FromStr;
use std::sync::Arc;
use tracing::debug;

/// Management operations backed by the in-memory record store.
///
/// Successful mutations schedule a snapshot save; the call does not wait for
/// it.
pub struct StoreRecordRepository {
    store: Arc<RecordStore>,
    persister: SnapshotPersister,
}

impl StoreRecordRepository {
    pub fn new(store: Arc<RecordStore>, persister: SnapshotPersister) -> Self {
        Self { store, persister }
    }
}

#[async_trait]
impl RecordRepository for StoreRecordRepository {
    async fn create(&self, request: &RecordRequest) -> Result<(), DomainError> {
        let record = to_resource(
            &request.host,
            request.ttl,
            &request.record_type,
            &request.data,
        )?;
        let key = LookupKey::from_record(&record);

        self.store.set(key, record, None);
        self.persister.request_save();
        Ok(())
    }

    async fn list(&self) -> Result<Vec<RecordView>, DomainError> {
        let snapshot = self.store.snapshot();
        let views = snapshot
            .values()
            .flat_map(|entry| entry.records.iter())
            .map(render_record)
            .collect();
        Ok(views)
    }

    async fn update(
        &self,
        request: &RecordRequest,
        old_data: &RecordPayload,
    ) -> Result<bool, DomainError> {
        let old = to_resource(&request.host, request.ttl, &request.record_type, old_data)?;
        let record = to_resource(
            &request.host,
            request.ttl,
            &request.record_type,
            &request.data,
        )?;
        let key = LookupKey::from_record(&record);

        let changed = self.store.set(key, record, Some(&old));
        if changed {
            self.persister.request_save();
        } else {
            debug!(host = %request.host, record_type = %request.record_type, "Update matched nothing");
        }
        Ok(changed)
    }

    async fn delete(
        &self,
        host: &str,
        record_type: &str,
        data: Option<&RecordPayload>,
    ) -> Result<bool, DomainError> {
        let removed = match data {
            Some(data) => {
                let record = to_resource(host, 0, record_type, data)?;
                self.store
                    .remove(&LookupKey::from_record(&record), Some(&record))
            }
            None => {
                let name = parse_owner(host)?;
                let record_type = RecordType::from_str(record_type)?;
                let key = LookupKey::new(&name, RecordTypeMapper::to_hickory(&record_type));
                self.store.remove(&key, None)
            }
        };

        if removed {
            self.persister.request_save();
        }
        Ok(removed)
    }
}
