#![allow(dead_code)]

use async_trait::async_trait;
use bramble_dns_application::ports::RecordRepository;
use bramble_dns_domain::{DomainError, RecordPayload, RecordRequest, RecordType, RecordView};
use std::str::FromStr;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct MockRecordRepository {
    records: Arc<RwLock<Vec<RecordRequest>>>,
    extra_views: Arc<RwLock<Vec<RecordView>>>,
    fail_with: Arc<RwLock<Option<DomainError>>>,
}

impl MockRecordRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_error(&self, error: DomainError) {
        *self.fail_with.write().await = Some(error);
    }

    pub async fn push_view(&self, view: RecordView) {
        self.extra_views.write().await.push(view);
    }

    pub async fn count(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn stored(&self) -> Vec<RecordRequest> {
        self.records.read().await.clone()
    }

    async fn check_failure(&self) -> Result<(), DomainError> {
        match self.fail_with.read().await.clone() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

fn same_entry(a: &RecordRequest, host: &str, record_type: &str) -> bool {
    a.host.eq_ignore_ascii_case(host) && a.record_type.eq_ignore_ascii_case(record_type)
}

fn render(data: &RecordPayload) -> String {
    match data {
        RecordPayload::Text(text) => text.clone(),
        other => format!("{:?}", other),
    }
}

#[async_trait]
impl RecordRepository for MockRecordRepository {
    async fn create(&self, request: &RecordRequest) -> Result<(), DomainError> {
        self.check_failure().await?;
        RecordType::from_str(&request.record_type)?;
        self.records.write().await.push(request.clone());
        Ok(())
    }

    async fn list(&self) -> Result<Vec<RecordView>, DomainError> {
        self.check_failure().await?;
        let mut views: Vec<RecordView> = self
            .records
            .read()
            .await
            .iter()
            .map(|r| RecordView {
                host: r.host.clone(),
                ttl: r.ttl,
                record_type: r.record_type.to_uppercase(),
                data: render(&r.data),
            })
            .collect();
        views.extend(self.extra_views.read().await.iter().cloned());
        Ok(views)
    }

    async fn update(
        &self,
        request: &RecordRequest,
        old_data: &RecordPayload,
    ) -> Result<bool, DomainError> {
        self.check_failure().await?;
        let mut records = self.records.write().await;
        match records.iter_mut().find(|r| {
            same_entry(r, &request.host, &request.record_type) && &r.data == old_data
        }) {
            Some(slot) => {
                *slot = request.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(
        &self,
        host: &str,
        record_type: &str,
        data: Option<&RecordPayload>,
    ) -> Result<bool, DomainError> {
        self.check_failure().await?;
        let mut records = self.records.write().await;
        let before = records.len();
        match data {
            Some(data) => {
                if let Some(idx) = records
                    .iter()
                    .position(|r| same_entry(r, host, record_type) && &r.data == data)
                {
                    records.remove(idx);
                }
            }
            None => records.retain(|r| !same_entry(r, host, record_type)),
        }
        Ok(records.len() != before)
    }
}
